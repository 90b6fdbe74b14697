//! `portfolio.toml` deserialization.

use crate::config::ConfigError;
use crate::derive::SortKey;
use crate::source::{SourceSettings, DEFAULT_MAX_REPOSITORIES, DEFAULT_PER_PAGE};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use url::Url;

/// Environment variable overriding [`PortfolioConfig::login`].
pub const LOGIN_ENV: &str = "PORTFOLIO_LOGIN";

/// Environment variable overriding [`PortfolioConfig::api_base_url`].
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Parsed `portfolio.toml`. Every key is optional.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PortfolioConfig {
    /// Login whose portfolio is shown.
    #[serde(default)]
    pub login: Option<String>,

    /// GitHub API base URL (e.g., for GitHub Enterprise).
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Location of the cache snapshot file.
    #[serde(default)]
    pub cache_path: Option<PathBuf>,

    /// Page size for the repositories listing (1..=100).
    #[serde(default = "default_per_page")]
    pub per_page: u8,

    /// Maximum number of repositories fetched per refresh.
    #[serde(default = "default_max_repositories")]
    pub max_repositories: usize,

    /// Sort key used when none is given on the command line.
    #[serde(default = "default_sort")]
    pub default_sort: String,
}

pub(crate) fn default_per_page() -> u8 {
    DEFAULT_PER_PAGE
}

pub(crate) fn default_max_repositories() -> usize {
    DEFAULT_MAX_REPOSITORIES
}

pub(crate) fn default_sort() -> String {
    SortKey::Updated.as_str().to_string()
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            login: None,
            api_base_url: None,
            cache_path: None,
            per_page: default_per_page(),
            max_repositories: default_max_repositories(),
            default_sort: default_sort(),
        }
    }
}

impl PortfolioConfig {
    /// Loads and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, invalid, or fails
    /// validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading config");

        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::MissingFile {
                    path: path.display().to_string(),
                }
            } else {
                ConfigError::IoError {
                    path: path.display().to_string(),
                    source: e,
                }
            }
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        config.validate(path)?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] describing the first problem.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::ValidationError {
            path: path.display().to_string(),
            message,
        };

        if !(1..=DEFAULT_PER_PAGE).contains(&self.per_page) {
            return Err(invalid(format!(
                "per-page must be between 1 and {DEFAULT_PER_PAGE}, got {}",
                self.per_page
            )));
        }

        if self.max_repositories == 0 {
            return Err(invalid(
                "max-repositories must be greater than zero".to_string(),
            ));
        }

        if let Some(login) = &self.login {
            check_login(login).map_err(invalid)?;
        }

        if let Some(api_base_url) = &self.api_base_url {
            parse_api_url(api_base_url).map_err(invalid)?;
        }

        if SortKey::from(self.default_sort.as_str()).as_str() != self.default_sort {
            warn!(
                default_sort = %self.default_sort,
                "Unknown default-sort, falling back to 'updated'"
            );
        }

        Ok(())
    }

    /// Applies `PORTFOLIO_LOGIN` and `GITHUB_API_URL` overrides.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(login) = non_empty_env(LOGIN_ENV) {
            self.login = Some(login);
        }
        if let Some(api_base_url) = non_empty_env(API_URL_ENV) {
            self.api_base_url = Some(api_base_url);
        }
        self
    }

    /// The configured default sort key.
    #[must_use]
    pub fn default_sort_key(&self) -> SortKey {
        SortKey::from(self.default_sort.as_str())
    }

    /// Builds data source settings from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if the login or the API URL
    /// is invalid. Both are checked here because command line and
    /// environment overrides bypass [`PortfolioConfig::validate`].
    pub fn source_settings(&self, token: Option<String>) -> Result<SourceSettings, ConfigError> {
        if let Some(login) = &self.login {
            check_login(login).map_err(|message| ConfigError::ValidationError {
                path: "login".to_string(),
                message,
            })?;
        }

        let api_base_url = self
            .api_base_url
            .as_deref()
            .map(parse_api_url)
            .transpose()
            .map_err(|message| ConfigError::ValidationError {
                path: API_URL_ENV.to_string(),
                message,
            })?;

        Ok(SourceSettings::new()
            .with_login(self.login.clone())
            .with_token(token)
            .with_api_base_url(api_base_url)
            .with_per_page(self.per_page)
            .with_max_repositories(self.max_repositories))
    }
}

/// Accepts GitHub logins: ASCII letters, digits and hyphens.
fn check_login(login: &str) -> Result<(), String> {
    let valid = !login.is_empty()
        && login
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(format!("login is not a valid GitHub login: {login:?}"))
    }
}

/// Parses an API base URL, accepting only http(s).
fn parse_api_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| format!("api-base-url is not a valid URL: {raw} ({e})"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(format!("api-base-url must use http or https, got {scheme}")),
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}
