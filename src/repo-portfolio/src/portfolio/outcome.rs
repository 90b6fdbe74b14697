//! Refresh outcome types.

use crate::notify::Notification;

/// Result of a [`Portfolio::refresh`](super::Portfolio::refresh) call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// User and repositories were fetched and replaced the previous state.
    Refreshed(Notification),

    /// Fetching failed; the previous state is still in place.
    Failed(Notification),

    /// Another refresh was already running; nothing happened.
    Rejected,
}

impl RefreshOutcome {
    /// Returns the notification to show, if any.
    #[must_use]
    pub fn notification(&self) -> Option<&Notification> {
        match self {
            Self::Refreshed(notification) | Self::Failed(notification) => Some(notification),
            Self::Rejected => None,
        }
    }

    /// Returns true if the state was replaced.
    #[must_use]
    pub fn is_refreshed(&self) -> bool {
        matches!(self, Self::Refreshed(_))
    }
}
