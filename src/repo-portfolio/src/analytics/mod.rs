//! Analytics view data.
//!
//! [`LanguageStats`] is derived from the fetched repositories. Everything
//! produced by [`MockDataProvider`] is random filler.

mod languages;
mod mock;

pub use languages::{LanguageShare, LanguageStats, TOP_LANGUAGES};
pub use mock::{
    sla_targets, ActivitySummary, Contribution, HeatmapCell, HeatmapDay, MockAnalytics,
    MockDataProvider, SlaTarget, CONTRIBUTION_KINDS, DAYS,
};
