#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod analytics;
pub mod cache;
pub mod config;
pub mod derive;
pub mod notify;
pub mod portfolio;
pub mod rate_limit;
pub mod render;
pub mod source;
pub mod types;

pub use analytics::{LanguageStats, MockAnalytics, MockDataProvider};
pub use cache::{CacheError, CacheSnapshot, CacheStore, FileCache, MemoryCache};
pub use config::{default_config_path, load_config, ConfigError, PortfolioConfig};
pub use derive::{
    derive_view, distinct_languages, matches_query, ExpandedCards, LanguageFilter, SortKey,
    ViewQuery, ALL_LANGUAGES,
};
pub use notify::{Notification, NotificationLevel};
pub use portfolio::{failure_notification, Portfolio, PortfolioState, RefreshOutcome};
pub use rate_limit::{check_core_rate_limit, exhausted_core_rate_limit, RateLimitInfo};
pub use render::{PortfolioRenderer, RenderError};
pub use source::{GitHubSource, RepositorySource, SourceError, SourceSettings};
pub use types::{GitHubUser, Repository};
