//! Data source backed by the GitHub REST API.

use super::{RepositorySource, SourceError, SourceSettings};
use crate::rate_limit::exhausted_core_rate_limit;
use crate::types::{GitHubUser, Repository};
use octocrab::Octocrab;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Query parameters for `GET /users/{login}/repos`.
#[derive(Debug, Serialize)]
struct ListReposParams {
    sort: &'static str,
    per_page: u8,
    page: u32,
}

/// Fetches the portfolio from GitHub with octocrab.
#[derive(Clone)]
pub struct GitHubSource {
    octocrab: Octocrab,
    settings: SourceSettings,
}

impl GitHubSource {
    /// Builds a source from the provided settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the base URL
    /// is rejected.
    pub fn new(settings: SourceSettings) -> Result<Self, SourceError> {
        let mut builder = Octocrab::builder();
        if let Some(token) = settings.token() {
            builder = builder.personal_token(token.to_string());
        }
        if let Some(base_url) = settings.api_base_url() {
            builder = builder.base_uri(base_url.as_str())?;
        }
        let octocrab = builder.build()?;
        Ok(Self { octocrab, settings })
    }

    /// Returns the settings this source was built with.
    pub fn settings(&self) -> &SourceSettings {
        &self.settings
    }

    async fn ensure_rate_limit(&self) -> Result<(), SourceError> {
        match exhausted_core_rate_limit(&self.octocrab).await {
            Some(reset_at) => Err(SourceError::RateLimitExceeded { reset_at }),
            None => Ok(()),
        }
    }
}

impl RepositorySource for GitHubSource {
    async fn fetch_current_user(&self) -> Result<GitHubUser, SourceError> {
        let route = user_route(&self.settings)?;
        self.ensure_rate_limit().await?;

        debug!(route = %route, "Fetching user");
        let user: GitHubUser = self.octocrab.get(route, None::<&()>).await?;
        if user.login.trim().is_empty() {
            return Err(SourceError::MissingUser);
        }

        info!(login = %user.login, "Fetched user");
        Ok(user)
    }

    async fn fetch_repositories(&self, login: &str) -> Result<Vec<Repository>, SourceError> {
        let route = format!("/users/{login}/repos");
        let per_page = self.settings.per_page();
        let max = self.settings.max_repositories();
        let mut repositories: Vec<Repository> = Vec::new();

        for page in 1u32.. {
            let params = ListReposParams {
                sort: "updated",
                per_page,
                page,
            };
            debug!(login, page, per_page, "Fetching repositories page");
            let batch: Vec<Repository> = self.octocrab.get(&route, Some(&params)).await?;
            let last_page = batch.len() < usize::from(per_page);
            repositories.extend(batch);

            if repositories.len() >= max {
                if !last_page || repositories.len() > max {
                    warn!(max, "Reached maximum repositories limit");
                }
                repositories.truncate(max);
                break;
            }
            if last_page {
                break;
            }
        }

        info!(login, count = repositories.len(), "Fetched repositories");
        Ok(repositories)
    }
}

/// Picks the profile endpoint: the configured login, else the token's user.
fn user_route(settings: &SourceSettings) -> Result<String, SourceError> {
    match settings.login() {
        Some(login) => Ok(format!("/users/{login}")),
        None if settings.token().is_some() => Ok("/user".to_string()),
        None => Err(SourceError::MissingUser),
    }
}
