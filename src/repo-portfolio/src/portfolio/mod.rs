//! Portfolio state and refresh orchestration.
//!
//! [`Portfolio`] ties an injected [`RepositorySource`] and [`CacheStore`]
//! together. It starts from whatever the cache holds, refreshes at most one
//! fetch at a time, and only replaces its state when both the user and the
//! repository list were fetched.

mod outcome;

pub use outcome::RefreshOutcome;

use crate::cache::{CacheSnapshot, CacheStore};
use crate::derive::{derive_view, distinct_languages, ExpandedCards, ViewQuery};
use crate::notify::Notification;
use crate::source::{RepositorySource, SourceError};
use crate::types::{GitHubUser, Repository};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{error, info, info_span, warn, Instrument};

/// What the portfolio currently displays.
#[derive(Debug, Clone, Default)]
pub struct PortfolioState {
    /// Portfolio owner, once known.
    pub user: Option<GitHubUser>,
    /// Repositories in the order they were fetched.
    pub repositories: Vec<Repository>,
    /// When the repositories were fetched.
    pub fetched_at: Option<DateTime<Utc>>,
    /// Cards showing their detail face.
    pub expanded: ExpandedCards,
}

impl From<CacheSnapshot> for PortfolioState {
    fn from(snapshot: CacheSnapshot) -> Self {
        Self {
            user: Some(snapshot.user),
            repositories: snapshot.repositories,
            fetched_at: Some(snapshot.fetched_at),
            expanded: ExpandedCards::new(),
        }
    }
}

/// A user's repository portfolio.
pub struct Portfolio<S, C> {
    source: S,
    cache: C,
    state: Mutex<PortfolioState>,
    refreshing: AtomicBool,
}

impl<S: RepositorySource, C: CacheStore> Portfolio<S, C> {
    /// Opens a portfolio, starting from the cached snapshot if there is one.
    ///
    /// An unreadable cache is logged and treated as empty.
    pub fn open(source: S, cache: C) -> Self {
        let state = match cache.load() {
            Ok(Some(snapshot)) => {
                info!(
                    login = %snapshot.user.login,
                    count = snapshot.repositories.len(),
                    fetched_at = %snapshot.fetched_at,
                    "Loaded cached portfolio"
                );
                PortfolioState::from(snapshot)
            }
            Ok(None) => PortfolioState::default(),
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable portfolio cache");
                PortfolioState::default()
            }
        };

        Self {
            source,
            cache,
            state: Mutex::new(state),
            refreshing: AtomicBool::new(false),
        }
    }

    /// Returns true if nothing is displayed yet and a fetch should start.
    pub fn needs_initial_fetch(&self) -> bool {
        self.lock_state().repositories.is_empty()
    }

    /// Returns true while a refresh is in flight.
    pub fn is_refreshing(&self) -> bool {
        self.refreshing.load(Ordering::Acquire)
    }

    /// Fetches the user and their repositories and replaces the state.
    ///
    /// Both requests must succeed; otherwise the previous state and cache
    /// are kept. A call made while another refresh is running is rejected
    /// immediately.
    pub async fn refresh(&self) -> RefreshOutcome {
        let Some(_guard) = RefreshGuard::acquire(&self.refreshing) else {
            info!("Refresh already in progress, ignoring request");
            return RefreshOutcome::Rejected;
        };

        let span = info_span!("refresh");
        async {
            info!("Refreshing portfolio");

            match self.fetch().await {
                Ok(snapshot) => {
                    let count = snapshot.repositories.len();
                    if let Err(e) = self.cache.save(&snapshot) {
                        warn!(error = %e, "Failed to save portfolio cache");
                    }
                    self.replace_state(snapshot);

                    info!(count, "Portfolio refreshed");
                    RefreshOutcome::Refreshed(Notification::success(format!(
                        "Loaded {count} repositories"
                    )))
                }
                Err(e) => {
                    error!(error = %e, "Failed to refresh portfolio");
                    RefreshOutcome::Failed(failure_notification(&e))
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn fetch(&self) -> Result<CacheSnapshot, SourceError> {
        let user = self.source.fetch_current_user().await?;
        let repositories = self.source.fetch_repositories(&user.login).await?;
        Ok(CacheSnapshot::new(user, repositories))
    }

    fn replace_state(&self, snapshot: CacheSnapshot) {
        let mut state = self.lock_state();
        let mut expanded = std::mem::take(&mut state.expanded);
        expanded.retain_present(&snapshot.repositories);

        *state = PortfolioState {
            expanded,
            ..PortfolioState::from(snapshot)
        };
    }

    /// Returns the derived view of the current repositories.
    pub fn view(&self, query: &ViewQuery) -> Vec<Repository> {
        derive_view(&self.lock_state().repositories, query)
    }

    /// Returns the languages offered as filter options.
    pub fn languages(&self) -> Vec<String> {
        distinct_languages(&self.lock_state().repositories)
    }

    /// Flips the card for `id`, returning whether it is now expanded.
    pub fn toggle_card(&self, id: u64) -> bool {
        self.lock_state().expanded.toggle(id)
    }

    /// Shows the detail face of the card for `id`.
    pub fn expand_card(&self, id: u64) {
        self.lock_state().expanded.expand(id);
    }

    /// Returns a copy of the current state.
    pub fn state(&self) -> PortfolioState {
        self.lock_state().clone()
    }

    /// Returns the portfolio owner, if known.
    pub fn user(&self) -> Option<GitHubUser> {
        self.lock_state().user.clone()
    }

    /// Returns the number of repositories currently held.
    pub fn repository_count(&self) -> usize {
        self.lock_state().repositories.len()
    }

    fn lock_state(&self) -> MutexGuard<'_, PortfolioState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Maps a fetch failure onto the message shown to the user.
#[must_use]
pub fn failure_notification(error: &SourceError) -> Notification {
    match error {
        SourceError::MissingUser => Notification::error("GitHub user not found"),
        e if e.is_unsuccessful_response() => Notification::error("Failed to fetch GitHub data"),
        _ => Notification::error("Error connecting to GitHub API"),
    }
}

/// Marks a refresh as in flight until dropped.
struct RefreshGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> RefreshGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for RefreshGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
