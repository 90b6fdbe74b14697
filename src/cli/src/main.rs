//! CLI for the repository portfolio.
//!
//! Fetches (or loads from cache) a GitHub user's repositories and prints
//! them as cards, filtered and sorted as requested.

use clap::Parser;
use repo_portfolio::{
    load_config, CacheStore, ConfigError, FileCache, GitHubSource, LanguageFilter, LanguageStats,
    MemoryCache, MockDataProvider, Notification, Portfolio, PortfolioRenderer, RefreshOutcome,
    RenderError, SortKey, SourceError, ViewQuery,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Repository Portfolio - Browse a GitHub user's repositories as cards.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub login whose portfolio to show (defaults to the token's user).
    #[arg(long, env = "PORTFOLIO_LOGIN")]
    login: Option<String>,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Path to portfolio.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the cache file.
    #[arg(long)]
    cache_path: Option<PathBuf>,

    /// Keep the portfolio in memory only.
    #[arg(long, conflicts_with = "cache_path")]
    no_cache: bool,

    /// Fetch from GitHub even if a cached portfolio exists.
    #[arg(long)]
    refresh: bool,

    /// Search text matched against names, descriptions and topics.
    #[arg(long, short, default_value = "")]
    query: String,

    /// Language to show, or "all".
    #[arg(long, short, default_value = "all")]
    language: String,

    /// Sort order: updated, created, stars, forks or name.
    #[arg(long, short)]
    sort: Option<String>,

    /// Show the detail face of the card with this repository id.
    #[arg(long = "expand", value_name = "ID")]
    expand: Vec<u64>,

    /// List the languages available as filters.
    #[arg(long)]
    languages: bool,

    /// Show the analytics view instead of the cards.
    #[arg(long)]
    analytics: bool,

    /// Seed for the mock analytics figures.
    #[arg(long)]
    seed: Option<u64>,
}

/// Errors that end the run before anything is displayed.
#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Cache(#[from] repo_portfolio::CacheError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// How a completed run ended.
enum RunStatus {
    /// Something was displayed.
    Displayed,
    /// The refresh failed and there was nothing cached to fall back to.
    NothingToShow,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // A single TLS provider must be installed before the HTTP client is built.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(RunStatus::Displayed) => ExitCode::from(0),
        Ok(RunStatus::NothingToShow) => ExitCode::from(1),
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Logs go to stderr so stdout carries only the rendered portfolio.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunStatus, RunError> {
    let mut config = load_config(args.config.as_deref())?;
    if args.login.is_some() {
        config.login = args.login.clone();
    }

    let source = GitHubSource::new(config.source_settings(args.token.clone())?)?;
    let cache: Box<dyn CacheStore> = if args.no_cache {
        Box::new(MemoryCache::new())
    } else {
        match args.cache_path.clone().or_else(|| config.cache_path.clone()) {
            Some(path) => Box::new(FileCache::new(path)),
            None => Box::new(FileCache::at_default_location()?),
        }
    };

    let portfolio = Portfolio::open(source, cache);
    if args.refresh || portfolio.needs_initial_fetch() {
        let outcome = portfolio.refresh().await;
        if let Some(notification) = outcome.notification() {
            notify(notification);
        }
        if !matches!(outcome, RefreshOutcome::Refreshed(_)) && portfolio.needs_initial_fetch() {
            return Ok(RunStatus::NothingToShow);
        }
    }

    for id in &args.expand {
        portfolio.expand_card(*id);
    }

    let renderer = PortfolioRenderer::new()?;

    if args.languages {
        print!("{}", renderer.render_languages(&portfolio.languages())?);
        return Ok(RunStatus::Displayed);
    }

    let state = portfolio.state();
    if args.analytics {
        let stats = LanguageStats::from_repositories(&state.repositories);
        let mock = match args.seed {
            Some(seed) => MockDataProvider::seeded(seed).generate(),
            None => MockDataProvider::new().generate(),
        };
        print!("{}", renderer.render_analytics(&stats, &mock)?);
        return Ok(RunStatus::Displayed);
    }

    let sort = match &args.sort {
        Some(sort) => SortKey::from(sort.as_str()),
        None => config.default_sort_key(),
    };
    let query = ViewQuery::default()
        .with_search(args.query.clone())
        .with_language(LanguageFilter::from(args.language.as_str()))
        .with_sort(sort);

    let view = portfolio.view(&query);
    print!(
        "{}",
        renderer.render_portfolio(
            state.user.as_ref(),
            &view,
            state.repositories.len(),
            &state.expanded,
        )?
    );

    Ok(RunStatus::Displayed)
}

/// Shows a notification on stderr.
fn notify(notification: &Notification) {
    if notification.is_error() {
        eprintln!("✖ {notification}");
    } else {
        eprintln!("✔ {notification}");
    }
}
