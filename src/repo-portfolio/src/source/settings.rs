//! GitHub source settings.

use url::Url;

/// Default page size for the repositories listing; GitHub's maximum.
pub const DEFAULT_PER_PAGE: u8 = 100;

/// Default cap on the number of repositories fetched per refresh.
pub const DEFAULT_MAX_REPOSITORIES: usize = 1000;

/// Settings for [`GitHubSource`](super::GitHubSource).
#[derive(Debug, Clone)]
pub struct SourceSettings {
    /// Login whose portfolio is shown. When unset, the token's user is used.
    login: Option<String>,
    /// Personal access token.
    token: Option<String>,
    /// API base URL, for GitHub Enterprise.
    api_base_url: Option<Url>,
    /// Page size for the repositories listing.
    per_page: u8,
    /// Maximum number of repositories to fetch.
    max_repositories: usize,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            login: None,
            token: None,
            api_base_url: None,
            per_page: DEFAULT_PER_PAGE,
            max_repositories: DEFAULT_MAX_REPOSITORIES,
        }
    }
}

impl SourceSettings {
    /// Creates settings with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the login. Blank logins are ignored.
    #[must_use]
    pub fn with_login(mut self, login: Option<String>) -> Self {
        self.login = login.filter(|login| !login.trim().is_empty());
        self
    }

    /// Sets the personal access token. Blank tokens are ignored.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|token| !token.trim().is_empty());
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn with_api_base_url(mut self, api_base_url: Option<Url>) -> Self {
        self.api_base_url = api_base_url;
        self
    }

    /// Sets the page size, clamped to `1..=100`.
    #[must_use]
    pub fn with_per_page(mut self, per_page: u8) -> Self {
        self.per_page = per_page.clamp(1, DEFAULT_PER_PAGE);
        self
    }

    /// Sets the repository cap. Zero keeps the default.
    #[must_use]
    pub fn with_max_repositories(mut self, max_repositories: usize) -> Self {
        if max_repositories > 0 {
            self.max_repositories = max_repositories;
        }
        self
    }

    /// Returns the configured login.
    pub fn login(&self) -> Option<&str> {
        self.login.as_deref()
    }

    /// Returns the configured token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the API base URL.
    pub fn api_base_url(&self) -> Option<&Url> {
        self.api_base_url.as_ref()
    }

    /// Returns the page size.
    pub fn per_page(&self) -> u8 {
        self.per_page
    }

    /// Returns the repository cap.
    pub fn max_repositories(&self) -> usize {
        self.max_repositories
    }
}
