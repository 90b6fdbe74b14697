//! Data source error types.

use thiserror::Error;

/// Errors that can occur while fetching portfolio data.
#[derive(Debug, Error)]
pub enum SourceError {
    /// No login is configured and no token identifies the current user.
    #[error("GitHub user not found")]
    MissingUser,

    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded, reset at {reset_at}")]
    RateLimitExceeded { reset_at: u64 },
}

impl SourceError {
    /// Returns true if GitHub answered, but not with a success status.
    ///
    /// Everything else that is not a missing user counts as a connection
    /// problem: transport failures, TLS, undecodable bodies.
    #[must_use]
    pub fn is_unsuccessful_response(&self) -> bool {
        match self {
            Self::GitHubError(octocrab::Error::GitHub { .. }) | Self::RateLimitExceeded { .. } => {
                true
            }
            Self::GitHubError(_) | Self::MissingUser => false,
        }
    }
}
