//! Configuration loading.
//!
//! This module handles locating and parsing `portfolio.toml` and applying
//! environment overrides on top of it.

mod error;
mod portfolio;

pub use error::ConfigError;
pub use portfolio::{PortfolioConfig, API_URL_ENV, LOGIN_ENV};

use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Config file name inside the platform config directory.
const CONFIG_FILE_NAME: &str = "portfolio.toml";

/// Directory under the platform config dir.
const CONFIG_DIR_NAME: &str = "repo-portfolio";

/// Default config location, e.g. `~/.config/repo-portfolio/portfolio.toml`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Loads the configuration and applies environment overrides.
///
/// An explicitly given `path` must exist. Without one, the default location
/// is tried and a missing file there means "all defaults".
///
/// # Errors
///
/// Returns [`ConfigError`] if a config file exists but is invalid, or if
/// the explicit path is missing.
pub fn load_config(path: Option<&Path>) -> Result<PortfolioConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            info!(path = %path.display(), "Loading config");
            PortfolioConfig::load(path)?
        }
        None => match default_config_path() {
            Some(path) if path.exists() => {
                info!(path = %path.display(), "Loading config");
                PortfolioConfig::load(&path)?
            }
            _ => {
                debug!("No config file, using defaults");
                PortfolioConfig::default()
            }
        },
    };

    Ok(config.with_env_overrides())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_path_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("portfolio.toml");

        let result = load_config(Some(&missing));
        assert!(matches!(result, Err(ConfigError::MissingFile { .. })));
    }

    #[test]
    fn explicit_path_with_env_override() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("portfolio.toml");
        fs::write(&path, "login = \"from-file\"\nper-page = 10\n").unwrap();

        temp_env::with_vars([(LOGIN_ENV, Some("from-env")), (API_URL_ENV, None)], || {
            let config = load_config(Some(&path)).unwrap();

            assert_eq!(config.login.as_deref(), Some("from-env"));
            assert_eq!(config.per_page, 10);
        });
    }

    #[test]
    fn default_path_ends_with_file_name() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("repo-portfolio/portfolio.toml"));
        }
    }
}
