//! Cached portfolio payload.

use crate::types::{GitHubUser, Repository};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The last successful `(user, repositories)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSnapshot {
    /// Portfolio owner.
    pub user: GitHubUser,

    /// Repositories as fetched, in GitHub's order.
    pub repositories: Vec<Repository>,

    /// When the payload was fetched.
    pub fetched_at: DateTime<Utc>,
}

impl CacheSnapshot {
    /// Creates a snapshot stamped with the current time.
    #[must_use]
    pub fn new(user: GitHubUser, repositories: Vec<Repository>) -> Self {
        Self {
            user,
            repositories,
            fetched_at: Utc::now(),
        }
    }
}
