//! Cache error types.

use thiserror::Error;

/// Errors that can occur while reading or writing the portfolio cache.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Failed to read or write a file.
    #[error("Failed to access cache file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The cache file holds something other than a snapshot.
    #[error("Failed to parse cache file '{path}': {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// No cache location could be determined for this platform.
    #[error("No cache directory available on this platform")]
    NoCacheDir,
}
