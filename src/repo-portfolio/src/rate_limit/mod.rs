//! Rate limit guard for the GitHub REST API.
//!
//! A refresh costs a handful of core API requests. Before starting one we
//! look at the remaining quota and fail fast when it is exhausted, rather
//! than sending requests that GitHub will reject.

mod info;

pub use info::RateLimitInfo;

use octocrab::Octocrab;
use tracing::{debug, warn};

/// Checks the current rate limit status for the core API.
///
/// # Errors
///
/// Returns an error if the rate limit API call fails.
pub async fn check_core_rate_limit(octocrab: &Octocrab) -> Result<RateLimitInfo, octocrab::Error> {
    let rate_limit = octocrab.ratelimit().get().await?;
    let core = &rate_limit.resources.core;

    Ok(RateLimitInfo {
        remaining: u32::try_from(core.remaining).unwrap_or(u32::MAX),
        reset: core.reset,
        limit: u32::try_from(core.limit).unwrap_or(u32::MAX),
    })
}

/// Returns `Some(reset_at)` if the core quota is used up.
///
/// Failing to query the quota is not fatal: the refresh goes ahead and any
/// real rate limit surfaces as a GitHub error instead.
pub async fn exhausted_core_rate_limit(octocrab: &Octocrab) -> Option<u64> {
    match check_core_rate_limit(octocrab).await {
        Ok(info) => {
            debug!(
                remaining = info.remaining,
                limit = info.limit,
                reset = info.reset,
                "Core rate limit"
            );
            info.is_exhausted(unix_now()).then_some(info.reset)
        }
        Err(e) => {
            warn!(error = %e, "Failed to check rate limit, continuing");
            None
        }
    }
}

fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
