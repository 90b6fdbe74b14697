//! GitHub user profile.

use serde::{Deserialize, Serialize};

/// Public profile as returned by `GET /users/{login}` or `GET /user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubUser {
    /// Login handle.
    pub login: String,

    /// Display name, if the user set one.
    #[serde(default)]
    pub name: Option<String>,

    /// Profile bio.
    #[serde(default)]
    pub bio: Option<String>,

    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: String,

    /// Profile page on GitHub.
    #[serde(default)]
    pub html_url: String,

    /// Number of public repositories.
    #[serde(default)]
    pub public_repos: u64,

    /// Follower count.
    #[serde(default)]
    pub followers: u64,

    /// Following count.
    #[serde(default)]
    pub following: u64,
}

impl GitHubUser {
    /// Name to show in headers: the display name, or the login when unset.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.login)
    }
}
