//! Language breakdown computed from real repository data.

use crate::types::Repository;
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of languages shown in the breakdown.
pub const TOP_LANGUAGES: usize = 5;

/// One row of the language breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageShare {
    /// Language name.
    pub language: String,
    /// Repositories using it as their primary language.
    pub count: usize,
    /// Share of all repositories, in percent.
    pub percent: f64,
}

/// Most used languages across a repository collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LanguageStats {
    /// Up to [`TOP_LANGUAGES`] rows, most used first.
    pub top: Vec<LanguageShare>,
    /// Size of the collection the shares are relative to.
    pub total_repositories: usize,
}

impl LanguageStats {
    /// Counts primary languages and keeps the most used ones.
    ///
    /// Ties are listed alphabetically. Shares are relative to every
    /// repository, including those without a language.
    #[must_use]
    pub fn from_repositories(repositories: &[Repository]) -> Self {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for language in repositories.iter().filter_map(|repo| repo.language.as_deref()) {
            *counts.entry(language).or_default() += 1;
        }

        let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
        ranked.sort_by(|(_, a), (_, b)| b.cmp(a));

        let total = repositories.len();
        let top = ranked
            .into_iter()
            .take(TOP_LANGUAGES)
            .map(|(language, count)| LanguageShare {
                language: language.to_string(),
                count,
                percent: count as f64 / total as f64 * 100.0,
            })
            .collect();

        Self {
            top,
            total_repositories: total,
        }
    }
}
