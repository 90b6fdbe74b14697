//! Mock analytics.
//!
//! Nothing here reflects real activity. The figures are random placeholders
//! for the analytics view, kept apart from the repository data path.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Days of the heatmap, Sunday first.
pub const DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Contribution categories of the mix chart.
pub const CONTRIBUTION_KINDS: [&str; 4] = ["Commits", "Pull Requests", "Issues", "Code Reviews"];

/// Commits in one hour of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    /// Hour of day, `0..24`.
    pub hour: u8,
    /// Commit count, `1..=10`.
    pub commits: u32,
}

impl HeatmapCell {
    /// Cell intensity in `0.0..=1.0`.
    #[must_use]
    pub fn intensity(&self) -> f64 {
        (f64::from(self.commits) / 10.0).min(1.0)
    }
}

/// One row of the heatmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapDay {
    /// Short day name.
    pub day: &'static str,
    /// 24 hourly cells.
    pub hours: Vec<HeatmapCell>,
}

/// Activity overview counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivitySummary {
    pub this_week: u32,
    pub this_month: u32,
    pub this_year: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub active_days: u32,
}

/// One bar of the contribution mix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    /// Category name.
    pub kind: &'static str,
    /// Count, `10..=59`.
    pub count: u32,
    /// Bar length relative to the largest category, in percent.
    pub percent: f64,
}

/// A performance target and the (fixed) value measured against it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlaTarget {
    pub metric: &'static str,
    pub target: f64,
    pub actual: f64,
    pub unit: &'static str,
}

impl SlaTarget {
    /// Returns true if the actual value reaches the target.
    #[must_use]
    pub fn met(&self) -> bool {
        self.actual >= self.target
    }

    /// Bar fill, capped at 100 percent.
    #[must_use]
    pub fn progress(&self) -> f64 {
        (self.actual / self.target * 100.0).min(100.0)
    }

    /// Position of the target marker along the bar, in percent.
    #[must_use]
    pub fn marker(&self) -> f64 {
        (self.target / self.target.max(self.actual) * 100.0).min(100.0)
    }
}

/// Fixed SLA figures shown in the analytics view.
#[must_use]
pub fn sla_targets() -> Vec<SlaTarget> {
    vec![
        SlaTarget {
            metric: "Code Coverage",
            target: 80.0,
            actual: 78.0,
            unit: "%",
        },
        SlaTarget {
            metric: "Build Success",
            target: 95.0,
            actual: 97.0,
            unit: "%",
        },
        SlaTarget {
            metric: "Response Time",
            target: 200.0,
            actual: 180.0,
            unit: "ms",
        },
        SlaTarget {
            metric: "Uptime",
            target: 99.9,
            actual: 99.8,
            unit: "%",
        },
    ]
}

/// Everything the analytics view shows besides the language breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MockAnalytics {
    pub heatmap: Vec<HeatmapDay>,
    pub activity: ActivitySummary,
    pub contributions: Vec<Contribution>,
    pub sla: Vec<SlaTarget>,
}

/// Generates mock analytics from a random number generator.
#[derive(Debug, Clone)]
pub struct MockDataProvider<R> {
    rng: R,
}

impl MockDataProvider<ThreadRng> {
    /// Creates a provider backed by the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for MockDataProvider<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDataProvider<StdRng> {
    /// Creates a reproducible provider.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MockDataProvider<R> {
    /// Creates a provider backed by `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a full set of mock analytics.
    pub fn generate(&mut self) -> MockAnalytics {
        MockAnalytics {
            heatmap: self.heatmap(),
            activity: self.activity(),
            contributions: self.contributions(),
            sla: sla_targets(),
        }
    }

    /// Commits per hour for each day of the week.
    pub fn heatmap(&mut self) -> Vec<HeatmapDay> {
        DAYS.iter()
            .map(|&day| HeatmapDay {
                day,
                hours: (0..24)
                    .map(|hour| HeatmapCell {
                        hour,
                        commits: self.rng.random_range(1..=10),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Activity overview counters.
    pub fn activity(&mut self) -> ActivitySummary {
        ActivitySummary {
            this_week: self.rng.random_range(5..30),
            this_month: self.rng.random_range(20..120),
            this_year: self.rng.random_range(100..600),
            current_streak: self.rng.random_range(1..16),
            longest_streak: self.rng.random_range(10..40),
            active_days: self.rng.random_range(60..100),
        }
    }

    /// Contribution mix, with bar lengths relative to the largest count.
    pub fn contributions(&mut self) -> Vec<Contribution> {
        let counts: Vec<u32> = CONTRIBUTION_KINDS
            .iter()
            .map(|_| self.rng.random_range(10..60))
            .collect();
        let max = counts.iter().copied().max().unwrap_or(1).max(1);

        CONTRIBUTION_KINDS
            .iter()
            .zip(counts)
            .map(|(&kind, count)| Contribution {
                kind,
                count,
                percent: f64::from(count) / f64::from(max) * 100.0,
            })
            .collect()
    }
}
