//! Rate limit information.

/// Rate limit information for the core REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: u32,

    /// Unix timestamp when the rate limit resets.
    pub reset: u64,

    /// Total requests allowed per window.
    pub limit: u32,
}

impl RateLimitInfo {
    /// Returns true if no requests remain and the window has not reset by `now`.
    #[must_use]
    pub fn is_exhausted(&self, now: u64) -> bool {
        self.remaining == 0 && self.reset > now
    }
}
