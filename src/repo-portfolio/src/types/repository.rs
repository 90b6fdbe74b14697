//! Repository record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository as returned by `GET /users/{login}/repos`.
///
/// Only `id`, `name` and the two timestamps are required; everything else
/// falls back to its default when GitHub omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Unique repository identifier.
    pub id: u64,

    /// Repository name.
    pub name: String,

    /// Full repository name in "owner/name" format.
    #[serde(default)]
    pub full_name: String,

    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// Repository page on GitHub.
    #[serde(default)]
    pub html_url: String,

    /// Project homepage. GitHub sends an empty string when unset.
    #[serde(default)]
    pub homepage: Option<String>,

    /// Primary language as detected by GitHub.
    #[serde(default)]
    pub language: Option<String>,

    /// Topics in the order GitHub lists them.
    #[serde(default)]
    pub topics: Vec<String>,

    /// Number of stars.
    #[serde(default)]
    pub stargazers_count: u64,

    /// Number of forks.
    #[serde(default)]
    pub forks_count: u64,

    /// Open issue count (includes pull requests).
    #[serde(default)]
    pub open_issues_count: u64,

    /// Repository size in KiB.
    #[serde(default)]
    pub size: u64,

    /// Default branch name (e.g., "main").
    #[serde(default)]
    pub default_branch: String,

    /// Whether GitHub Pages is enabled.
    #[serde(default)]
    pub has_pages: bool,

    /// When the repository was created.
    pub created_at: DateTime<Utc>,

    /// When the repository was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Repository {
    /// Returns the homepage if one is set and non-blank.
    #[must_use]
    pub fn homepage(&self) -> Option<&str> {
        self.homepage
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Repository size in MiB.
    #[must_use]
    pub fn size_mib(&self) -> f64 {
        self.size as f64 / 1024.0
    }
}
