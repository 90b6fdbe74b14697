//! Shared helpers for integration tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use repo_portfolio::{GitHubUser, Repository, RepositorySource, SourceError};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn fixture_user() -> GitHubUser {
    let content = std::fs::read_to_string(fixtures_root().join("user.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

pub fn fixture_repos() -> Vec<Repository> {
    let content = std::fs::read_to_string(fixtures_root().join("repos.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// Minimal repository record for tests.
pub fn repo(id: u64, name: &str) -> Repository {
    Repository {
        id,
        name: name.to_string(),
        full_name: format!("octocat/{name}"),
        description: None,
        html_url: format!("https://github.com/octocat/{name}"),
        homepage: None,
        language: None,
        topics: Vec::new(),
        stargazers_count: 0,
        forks_count: 0,
        open_issues_count: 0,
        size: 0,
        default_branch: "main".to_string(),
        has_pages: false,
        created_at: at(2020, 1, 1),
        updated_at: at(2020, 1, 1),
    }
}

/// How the fake answers the next request.
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    MissingUser,
    RateLimited,
}

impl<T: Clone> Reply<T> {
    fn to_result(&self) -> Result<T, SourceError> {
        match self {
            Self::Ok(value) => Ok(value.clone()),
            Self::MissingUser => Err(SourceError::MissingUser),
            Self::RateLimited => Err(SourceError::RateLimitExceeded { reset_at: 0 }),
        }
    }
}

struct Script {
    user: Reply<GitHubUser>,
    repositories: Reply<Vec<Repository>>,
}

/// Pauses a fetch until the test releases it.
#[derive(Default)]
pub struct Gate {
    pub started: Notify,
    pub release: Notify,
}

/// Scriptable [`RepositorySource`]. Clones share the same script.
#[derive(Clone)]
pub struct FakeSource {
    script: Arc<Mutex<Script>>,
    gate: Option<Arc<Gate>>,
    user_calls: Arc<AtomicUsize>,
    repo_calls: Arc<AtomicUsize>,
}

impl FakeSource {
    pub fn new(user: GitHubUser, repositories: Vec<Repository>) -> Self {
        Self {
            script: Arc::new(Mutex::new(Script {
                user: Reply::Ok(user),
                repositories: Reply::Ok(repositories),
            })),
            gate: None,
            user_calls: Arc::new(AtomicUsize::new(0)),
            repo_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_gate(mut self, gate: Arc<Gate>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn set_user(&self, reply: Reply<GitHubUser>) {
        self.script.lock().unwrap().user = reply;
    }

    pub fn set_repositories(&self, reply: Reply<Vec<Repository>>) {
        self.script.lock().unwrap().repositories = reply;
    }

    pub fn user_calls(&self) -> usize {
        self.user_calls.load(Ordering::SeqCst)
    }

    pub fn repo_calls(&self) -> usize {
        self.repo_calls.load(Ordering::SeqCst)
    }
}

impl RepositorySource for FakeSource {
    async fn fetch_current_user(&self) -> Result<GitHubUser, SourceError> {
        self.user_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.started.notify_one();
            gate.release.notified().await;
        }
        let reply = self.script.lock().unwrap().user.clone();
        reply.to_result()
    }

    async fn fetch_repositories(&self, _login: &str) -> Result<Vec<Repository>, SourceError> {
        self.repo_calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.script.lock().unwrap().repositories.clone();
        reply.to_result()
    }
}
