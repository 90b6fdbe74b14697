//! Repository list derivation.
//!
//! Turns the fetched repository collection into the view shown to the user:
//! filter by search text, filter by language, then sort. The source slice is
//! only borrowed, so a derived view can never alter the cached collection.

mod expanded;
mod query;

pub use expanded::ExpandedCards;
pub use query::{LanguageFilter, SortKey, ViewQuery, ALL_LANGUAGES};

use crate::types::Repository;
use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::LazyLock;
use tracing::warn;

/// Derives the filtered, sorted view of `source`.
///
/// Records are filtered by [`ViewQuery::search`] and [`ViewQuery::language`]
/// and then stably sorted by [`ViewQuery::sort`]. Records that compare equal
/// keep their relative order from `source`.
#[must_use]
pub fn derive_view(source: &[Repository], query: &ViewQuery) -> Vec<Repository> {
    let needle = query.search.to_lowercase();

    let mut view: Vec<Repository> = source
        .iter()
        .filter(|repo| needle.is_empty() || matches_lowercase_query(repo, &needle))
        .filter(|repo| query.language.matches(repo.language.as_deref()))
        .cloned()
        .collect();

    view.sort_by(|a, b| compare_by(query.sort, a, b));
    view
}

/// Returns true if `query` occurs case-insensitively in the name, the
/// description or any topic of `repo`.
///
/// An empty query matches every record.
#[must_use]
pub fn matches_query(repo: &Repository, query: &str) -> bool {
    matches_lowercase_query(repo, &query.to_lowercase())
}

fn matches_lowercase_query(repo: &Repository, needle: &str) -> bool {
    repo.name.to_lowercase().contains(needle)
        || repo
            .description
            .as_deref()
            .is_some_and(|description| description.to_lowercase().contains(needle))
        || repo
            .topics
            .iter()
            .any(|topic| topic.to_lowercase().contains(needle))
}

/// Orders two records for `key`.
#[must_use]
pub fn compare_by(key: SortKey, a: &Repository, b: &Repository) -> Ordering {
    match key {
        SortKey::Stars => b.stargazers_count.cmp(&a.stargazers_count),
        SortKey::Forks => b.forks_count.cmp(&a.forks_count),
        SortKey::Name => compare_names(&a.name, &b.name),
        SortKey::Created => b.created_at.cmp(&a.created_at),
        SortKey::Updated => b.updated_at.cmp(&a.updated_at),
    }
}

/// Collates two names in root-locale order (Unicode Collation Algorithm).
///
/// Accents are secondary to base letters, so "éclair" sorts before "zebra".
/// Punctuation sorts ahead of digits and letters. Names that differ only in
/// case put the lowercase form first. Names the collator considers identical
/// compare equal, so the stable sort keeps their order.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    match NAME_COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase))
            .then_with(|| b.cmp(a)),
    }
}

/// Root-locale collator; `None` only if the built-in collation data fails
/// to load, in which case names fall back to case-insensitive code point
/// order.
static NAME_COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    Collator::try_new(Default::default(), CollatorOptions::default())
        .inspect_err(|e| warn!(error = %e, "Collation data unavailable, sorting names by code point"))
        .ok()
});

/// Distinct languages present in `source`, ascending.
///
/// Records without a language contribute nothing.
#[must_use]
pub fn distinct_languages(source: &[Repository]) -> Vec<String> {
    source
        .iter()
        .filter_map(|repo| repo.language.as_deref())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn repo(id: u64, name: &str) -> Repository {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Repository {
            id,
            name: name.to_string(),
            full_name: format!("octocat/{name}"),
            description: None,
            html_url: format!("https://github.com/octocat/{name}"),
            homepage: None,
            language: None,
            topics: Vec::new(),
            stargazers_count: 0,
            forks_count: 0,
            open_issues_count: 0,
            size: 0,
            default_branch: "main".to_string(),
            has_pages: false,
            created_at: at,
            updated_at: at,
        }
    }

    fn ids(view: &[Repository]) -> Vec<u64> {
        view.iter().map(|repo| repo.id).collect()
    }

    #[test]
    fn empty_source_yields_empty_view() {
        let view = derive_view(&[], &ViewQuery::new("anything", "Rust", "stars"));
        assert!(view.is_empty());
    }

    #[test]
    fn query_matches_name_description_and_topics() {
        let mut by_description = repo(2, "two");
        by_description.description = Some("A Terminal UI".to_string());
        let mut by_topic = repo(3, "three");
        by_topic.topics = vec!["cli".to_string(), "terminal-ui".to_string()];

        let source = vec![repo(1, "terminal"), by_description, by_topic, repo(4, "four")];
        let view = derive_view(&source, &ViewQuery::default().with_search("TERMINAL"));

        let mut found = ids(&view);
        found.sort_unstable();
        assert_eq!(found, vec![1, 2, 3]);
    }

    #[test]
    fn query_matching_nothing_yields_empty_view() {
        let source = vec![repo(1, "alpha"), repo(2, "beta")];
        let view = derive_view(&source, &ViewQuery::default().with_search("zeta"));
        assert!(view.is_empty());
    }

    #[test]
    fn language_filter_excludes_missing_language() {
        let mut go = repo(1, "go-thing");
        go.language = Some("Go".to_string());
        let source = vec![go, repo(2, "unknown")];

        let view = derive_view(&source, &ViewQuery::new("", "Go", "updated"));
        assert_eq!(ids(&view), vec![1]);

        let view = derive_view(&source, &ViewQuery::new("", "go", "updated"));
        assert!(view.is_empty());
    }

    #[test]
    fn sorts_descending_by_counts() {
        let mut a = repo(1, "a");
        a.stargazers_count = 3;
        a.forks_count = 10;
        let mut b = repo(2, "b");
        b.stargazers_count = 7;
        b.forks_count = 1;

        let source = vec![a, b];
        assert_eq!(
            ids(&derive_view(&source, &ViewQuery::new("", "all", "stars"))),
            vec![2, 1]
        );
        assert_eq!(
            ids(&derive_view(&source, &ViewQuery::new("", "all", "forks"))),
            vec![1, 2]
        );
    }

    #[test]
    fn sorts_descending_by_timestamps() {
        let mut old = repo(1, "old");
        old.created_at = Utc.with_ymd_and_hms(2019, 5, 1, 0, 0, 0).unwrap();
        old.updated_at = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let mut new = repo(2, "new");
        new.created_at = Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap();
        new.updated_at = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();

        let source = vec![old, new];
        assert_eq!(
            ids(&derive_view(&source, &ViewQuery::new("", "all", "created"))),
            vec![2, 1]
        );
        assert_eq!(
            ids(&derive_view(&source, &ViewQuery::new("", "all", "updated"))),
            vec![1, 2]
        );
        assert_eq!(
            ids(&derive_view(&source, &ViewQuery::new("", "all", "bogus"))),
            vec![1, 2]
        );
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let source: Vec<_> = (1..=5).map(|id| repo(id, "same")).collect();

        for key in SortKey::ALL {
            let view = derive_view(&source, &ViewQuery::default().with_sort(key));
            assert_eq!(ids(&view), vec![1, 2, 3, 4, 5], "sort key {key}");
        }
    }

    #[test]
    fn name_sort_ignores_case() {
        let source = vec![
            repo(1, "zebra"),
            repo(2, "Apple"),
            repo(3, "mango"),
            repo(4, "apple"),
        ];

        let view = derive_view(&source, &ViewQuery::new("", "all", "name"));
        assert_eq!(ids(&view), vec![4, 2, 3, 1]);
    }

    fn names_by_name(names: &[&str]) -> Vec<String> {
        let source: Vec<_> = names
            .iter()
            .zip(1..)
            .map(|(name, id)| repo(id, name))
            .collect();
        derive_view(&source, &ViewQuery::new("", "all", "name"))
            .into_iter()
            .map(|repo| repo.name)
            .collect()
    }

    #[test]
    fn name_sort_places_accented_letters_with_their_base() {
        assert_eq!(
            names_by_name(&["zebra", "éclair", "Émile", "a0b", "a_b"]),
            vec!["a_b", "a0b", "éclair", "Émile", "zebra"]
        );
    }

    #[test]
    fn name_sort_orders_punctuation_before_letters() {
        assert_eq!(
            names_by_name(&["myrepo2", "my.repo", "my-repo", "my_repo"]),
            vec!["my_repo", "my-repo", "my.repo", "myrepo2"]
        );
    }

    #[test]
    fn identical_names_compare_equal() {
        assert_eq!(compare_names("octo-cli", "octo-cli"), Ordering::Equal);
        assert_eq!(compare_names("alpha", "Alpha"), Ordering::Less);
        assert_eq!(compare_names("Émile", "emile"), Ordering::Greater);
    }

    #[test]
    fn derive_view_leaves_source_untouched() {
        let mut starred = repo(2, "b");
        starred.stargazers_count = 100;
        let source = vec![repo(1, "a"), starred];
        let before = source.clone();

        let _ = derive_view(&source, &ViewQuery::new("", "all", "stars"));
        assert_eq!(source, before);
    }

    #[test]
    fn distinct_languages_sorted_without_absent() {
        let mut rust = repo(1, "a");
        rust.language = Some("Rust".to_string());
        let mut go = repo(2, "b");
        go.language = Some("Go".to_string());
        let mut rust_again = repo(3, "c");
        rust_again.language = Some("Rust".to_string());

        let languages = distinct_languages(&[rust, repo(4, "d"), go, rust_again]);
        assert_eq!(languages, vec!["Go", "Rust"]);
    }
}
