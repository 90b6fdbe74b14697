//! Core records received from the GitHub REST API.
//!
//! - [`Repository`] - One repository's metadata
//! - [`GitHubUser`] - The profile whose repositories make up the portfolio

mod repository;
mod user;

pub use repository::Repository;
pub use user::GitHubUser;
