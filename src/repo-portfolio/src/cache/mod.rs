//! Persistence of the last fetched portfolio.
//!
//! The cache is an explicit [`CacheStore`] handed to the portfolio, so there
//! is no process-wide state. [`FileCache`] keeps one JSON snapshot on disk;
//! [`MemoryCache`] keeps it in memory.

mod error;
mod snapshot;

pub use error::CacheError;
pub use snapshot::CacheSnapshot;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// File name of the snapshot inside the cache directory.
const CACHE_FILE_NAME: &str = "portfolio.json";

/// Directory under the platform cache dir.
const CACHE_DIR_NAME: &str = "repo-portfolio";

/// Load/save access to the cached portfolio snapshot.
pub trait CacheStore {
    /// Loads the snapshot, or `None` if nothing has been cached yet.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the stored snapshot cannot be read.
    fn load(&self) -> Result<Option<CacheSnapshot>, CacheError>;

    /// Replaces the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the snapshot cannot be written.
    fn save(&self, snapshot: &CacheSnapshot) -> Result<(), CacheError>;
}

/// JSON snapshot stored in a single file.
#[derive(Debug, Clone)]
pub struct FileCache {
    path: PathBuf,
}

impl FileCache {
    /// Creates a cache at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a cache in the platform cache directory,
    /// e.g. `~/.cache/repo-portfolio/portfolio.json` on Linux.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::NoCacheDir`] if the platform has no cache dir.
    pub fn at_default_location() -> Result<Self, CacheError> {
        let dir = dirs::cache_dir().ok_or(CacheError::NoCacheDir)?;
        Ok(Self::new(dir.join(CACHE_DIR_NAME).join(CACHE_FILE_NAME)))
    }

    /// Returns the snapshot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> CacheError {
        CacheError::IoError {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl CacheStore for FileCache {
    fn load(&self) -> Result<Option<CacheSnapshot>, CacheError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No cached portfolio");
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let snapshot = serde_json::from_str(&content).map_err(|e| CacheError::JsonError {
            path: self.path.display().to_string(),
            source: e,
        })?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &CacheSnapshot) -> Result<(), CacheError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;

        let json = serde_json::to_vec_pretty(snapshot).map_err(|e| CacheError::JsonError {
            path: self.path.display().to_string(),
            source: e,
        })?;

        // Write next to the target, then rename over it.
        let mut file = tempfile::NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        file.write_all(&json).map_err(|e| self.io_error(e))?;
        file.persist(&self.path)
            .map_err(|e| self.io_error(e.error))?;

        debug!(
            path = %self.path.display(),
            repositories = snapshot.repositories.len(),
            "Saved portfolio cache"
        );
        Ok(())
    }
}

/// Snapshot kept in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryCache {
    snapshot: Mutex<Option<CacheSnapshot>>,
}

impl MemoryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache pre-populated with `snapshot`.
    #[must_use]
    pub fn with_snapshot(snapshot: CacheSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(Some(snapshot)),
        }
    }
}

impl CacheStore for MemoryCache {
    fn load(&self) -> Result<Option<CacheSnapshot>, CacheError> {
        Ok(self
            .snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, snapshot: &CacheSnapshot) -> Result<(), CacheError> {
        *self.snapshot.lock().unwrap_or_else(PoisonError::into_inner) = Some(snapshot.clone());
        Ok(())
    }
}

impl<C: CacheStore + ?Sized> CacheStore for &C {
    fn load(&self) -> Result<Option<CacheSnapshot>, CacheError> {
        (**self).load()
    }

    fn save(&self, snapshot: &CacheSnapshot) -> Result<(), CacheError> {
        (**self).save(snapshot)
    }
}

impl<C: CacheStore + ?Sized> CacheStore for Box<C> {
    fn load(&self) -> Result<Option<CacheSnapshot>, CacheError> {
        (**self).load()
    }

    fn save(&self, snapshot: &CacheSnapshot) -> Result<(), CacheError> {
        (**self).save(snapshot)
    }
}
