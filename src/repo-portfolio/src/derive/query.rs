//! Inputs to the repository list derivation.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Sentinel language-filter value meaning "no filtering".
pub const ALL_LANGUAGES: &str = "all";

/// Ordering applied to the derived view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Most recently updated first.
    #[default]
    Updated,
    /// Most recently created first.
    Created,
    /// Most starred first.
    Stars,
    /// Most forked first.
    Forks,
    /// Ascending by name.
    Name,
}

impl SortKey {
    /// All sort keys in the order they are offered to the user.
    pub const ALL: [Self; 5] = [
        Self::Updated,
        Self::Created,
        Self::Stars,
        Self::Forks,
        Self::Name,
    ];

    /// Returns the key's string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Updated => "updated",
            Self::Created => "created",
            Self::Stars => "stars",
            Self::Forks => "forks",
            Self::Name => "name",
        }
    }
}

impl FromStr for SortKey {
    type Err = Infallible;

    /// Parses a sort key. Unrecognized values fall back to [`SortKey::Updated`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "created" => Self::Created,
            "stars" => Self::Stars,
            "forks" => Self::Forks,
            "name" => Self::Name,
            _ => Self::Updated,
        })
    }
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(key) => key,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language restriction applied to the derived view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum LanguageFilter {
    /// Keep every record.
    #[default]
    All,
    /// Keep records whose language equals this value exactly.
    Exact(String),
}

impl LanguageFilter {
    /// Returns true if a record with `language` passes the filter.
    ///
    /// Records without a language only pass [`LanguageFilter::All`].
    #[must_use]
    pub fn matches(&self, language: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Exact(wanted) => language == Some(wanted.as_str()),
        }
    }

    /// Returns the filter's string form, `"all"` for [`LanguageFilter::All`].
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_LANGUAGES,
            Self::Exact(language) => language,
        }
    }
}

impl From<&str> for LanguageFilter {
    fn from(value: &str) -> Self {
        if value == ALL_LANGUAGES {
            Self::All
        } else {
            Self::Exact(value.to_string())
        }
    }
}

impl From<Option<&str>> for LanguageFilter {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::All, Self::from)
    }
}

impl fmt::Display for LanguageFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three user-controlled inputs of a derived view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    /// Free-text search, matched case-insensitively.
    pub search: String,
    /// Language restriction.
    pub language: LanguageFilter,
    /// Ordering.
    pub sort: SortKey,
}

impl ViewQuery {
    /// Creates a query from raw user input.
    pub fn new(search: impl Into<String>, language: &str, sort: &str) -> Self {
        Self {
            search: search.into(),
            language: LanguageFilter::from(language),
            sort: SortKey::from(sort),
        }
    }

    /// Sets the search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the language filter.
    #[must_use]
    pub fn with_language(mut self, language: LanguageFilter) -> Self {
        self.language = language;
        self
    }

    /// Sets the sort key.
    #[must_use]
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}
