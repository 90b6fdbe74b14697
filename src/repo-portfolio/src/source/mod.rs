//! Where portfolio data comes from.
//!
//! [`RepositorySource`] is the seam between the portfolio and the network.
//! [`GitHubSource`] implements it against the GitHub REST API; tests plug in
//! their own implementations.

mod error;
mod github;
mod settings;

pub use error::SourceError;
pub use github::GitHubSource;
pub use settings::{SourceSettings, DEFAULT_MAX_REPOSITORIES, DEFAULT_PER_PAGE};

use crate::types::{GitHubUser, Repository};
use std::future::Future;

/// Supplies the user profile and repository list of a portfolio.
pub trait RepositorySource {
    /// Fetches the user whose portfolio is shown.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::MissingUser`] when no user can be determined,
    /// or the underlying API error.
    fn fetch_current_user(&self) -> impl Future<Output = Result<GitHubUser, SourceError>> + Send;

    /// Fetches the public repositories owned by `login`.
    ///
    /// # Errors
    ///
    /// Returns the underlying API error.
    fn fetch_repositories(
        &self,
        login: &str,
    ) -> impl Future<Output = Result<Vec<Repository>, SourceError>> + Send;
}
