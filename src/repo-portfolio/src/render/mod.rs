//! Terminal rendering of the portfolio using Handlebars.
//!
//! The renderer only formats what it is given: the derived view, the set of
//! expanded cards, and the analytics data. It never filters or reorders.

mod error;
mod templates;

pub use error::RenderError;

use crate::analytics::{HeatmapCell, LanguageStats, MockAnalytics};
use crate::derive::ExpandedCards;
use crate::types::{GitHubUser, Repository};
use chrono::{DateTime, Utc};
use handlebars::{handlebars_helper, no_escape, Handlebars};
use serde_json::{json, Value};
use templates::{
    ANALYTICS, ANALYTICS_TEMPLATE, CARD, CARD_TEMPLATE, HEADER, HEADER_TEMPLATE, LANGUAGES,
    LANGUAGES_TEMPLATE, RESULTS, RESULTS_TEMPLATE,
};

/// Width of the horizontal bars, in characters.
const BAR_WIDTH: usize = 20;

/// Topics shown on the front of a card.
const CARD_TOPICS: usize = 3;

/// Shown when a repository has no description.
pub const NO_DESCRIPTION: &str = "No description available";

/// Formats a timestamp the way cards show dates, e.g. "Jan 26, 2011".
#[must_use]
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// Renders a bar filled to `percent` (clamped to `0..=100`).
#[must_use]
pub fn render_bar(percent: f64) -> String {
    let filled = bar_cells(percent);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Renders an SLA bar filled to `progress` with the target drawn as `│` at
/// `marker` (both percentages).
#[must_use]
pub fn render_target_bar(progress: f64, marker: f64) -> String {
    let filled = bar_cells(progress);
    let marker_at = bar_cells(marker).min(BAR_WIDTH - 1);

    (0..BAR_WIDTH)
        .map(|cell| match cell {
            _ if cell == marker_at => '│',
            _ if cell < filled => '█',
            _ => '░',
        })
        .collect()
}

fn bar_cells(percent: f64) -> usize {
    ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize
}

/// Shade for one heatmap cell of the given intensity (`0.0..=1.0`).
fn heat_char(intensity: f64) -> &'static str {
    match intensity {
        i if i <= 0.0 => " ",
        i if i <= 0.2 => "░",
        i if i <= 0.5 => "▒",
        i if i <= 0.8 => "▓",
        _ => "█",
    }
}

/// Formats a figure without a trailing ".0" for whole numbers.
fn format_figure(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

handlebars_helper!(bar: |percent: f64| render_bar(percent));
handlebars_helper!(heat: |intensity: f64| heat_char(intensity));
handlebars_helper!(target_bar: |progress: f64, marker: f64| render_target_bar(progress, marker));
handlebars_helper!(pad: |text: str, width: u64| format!("{text:<width$}", width = width as usize));
handlebars_helper!(fixed: |value: f64, digits: u64| format!("{value:.digits$}", digits = digits as usize));

/// Creates a configured Handlebars registry with the portfolio templates.
///
/// The registry is configured with:
/// - No HTML escaping (terminal output)
/// - Strict mode (catches missing variables)
/// - `bar`, `target_bar`, `heat`, `pad` and `fixed` formatting helpers
///
/// # Errors
///
/// Returns an error if a built-in template fails to parse.
pub fn create_handlebars_registry() -> Result<Handlebars<'static>, RenderError> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);

    hbs.register_helper("bar", Box::new(bar));
    hbs.register_helper("target_bar", Box::new(target_bar));
    hbs.register_helper("heat", Box::new(heat));
    hbs.register_helper("pad", Box::new(pad));
    hbs.register_helper("fixed", Box::new(fixed));

    hbs.register_template_string(HEADER, HEADER_TEMPLATE)?;
    hbs.register_template_string(CARD, CARD_TEMPLATE)?;
    hbs.register_template_string(RESULTS, RESULTS_TEMPLATE)?;
    hbs.register_template_string(LANGUAGES, LANGUAGES_TEMPLATE)?;
    hbs.register_template_string(ANALYTICS, ANALYTICS_TEMPLATE)?;

    Ok(hbs)
}

/// Renders portfolio screens as plain text.
pub struct PortfolioRenderer {
    handlebars: Handlebars<'static>,
}

impl PortfolioRenderer {
    /// Creates a renderer with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to parse.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Self {
            handlebars: create_handlebars_registry()?,
        })
    }

    /// Renders the profile header.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_header(&self, user: &GitHubUser) -> Result<String, RenderError> {
        let data = json!({
            "display_name": user.display_name(),
            "login": user.login,
            "bio": user.bio.as_deref().unwrap_or(""),
            "public_repos": user.public_repos,
            "followers": user.followers,
            "following": user.following,
        });
        self.render(HEADER, &data)
    }

    /// Renders one card; `expanded` adds the detail face.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_card(&self, repo: &Repository, expanded: bool) -> Result<String, RenderError> {
        self.render(CARD, &card_data(repo, expanded))
    }

    /// Renders the "Showing X of Y" line.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_results(&self, shown: usize, total: usize) -> Result<String, RenderError> {
        let data = json!({
            "shown": shown,
            "total": total,
            "no_matches": shown == 0 && total > 0,
        });
        self.render(RESULTS, &data)
    }

    /// Renders the language filter options.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_languages(&self, languages: &[String]) -> Result<String, RenderError> {
        self.render(LANGUAGES, &json!({ "languages": languages }))
    }

    /// Renders the full portfolio screen: header, result count and cards.
    ///
    /// `view` is printed as given; `total` is the size of the collection it
    /// was derived from.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_portfolio(
        &self,
        user: Option<&GitHubUser>,
        view: &[Repository],
        total: usize,
        expanded: &ExpandedCards,
    ) -> Result<String, RenderError> {
        let mut out = String::new();
        if let Some(user) = user {
            out.push_str(&self.render_header(user)?);
            out.push('\n');
        }
        out.push_str(&self.render_results(view.len(), total)?);
        for repo in view {
            out.push('\n');
            out.push_str(&self.render_card(repo, expanded.is_expanded(repo.id))?);
        }
        Ok(out)
    }

    /// Renders the analytics screen.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_analytics(
        &self,
        languages: &LanguageStats,
        mock: &MockAnalytics,
    ) -> Result<String, RenderError> {
        let sla: Vec<Value> = mock
            .sla
            .iter()
            .map(|target| {
                json!({
                    "metric": target.metric,
                    "target": format_figure(target.target),
                    "actual": format_figure(target.actual),
                    "unit": target.unit,
                    "progress": target.progress(),
                    "marker": target.marker(),
                    "met": target.met(),
                })
            })
            .collect();
        let heatmap: Vec<Value> = mock
            .heatmap
            .iter()
            .map(|day| {
                let cells: Vec<f64> = day.hours.iter().map(HeatmapCell::intensity).collect();
                json!({ "day": day.day, "cells": cells })
            })
            .collect();

        let data = json!({
            "activity": mock.activity,
            "heatmap": heatmap,
            "contributions": mock.contributions,
            "sla": sla,
            "languages": languages.top,
        });
        self.render(ANALYTICS, &data)
    }

    fn render(&self, name: &str, data: &Value) -> Result<String, RenderError> {
        Ok(self.handlebars.render(name, data)?)
    }
}

/// Template data for one card.
fn card_data(repo: &Repository, expanded: bool) -> Value {
    let mut tags: Vec<String> = Vec::new();
    if let Some(language) = &repo.language {
        tags.push(format!("[{language}]"));
    }
    tags.extend(
        repo.topics
            .iter()
            .take(CARD_TOPICS)
            .map(|topic| format!("#{topic}")),
    );

    json!({
        "name": repo.name,
        "stars": repo.stargazers_count,
        "description": repo.description.as_deref().unwrap_or(NO_DESCRIPTION),
        "tags": tags.join(" "),
        "updated": format_date(&repo.updated_at),
        "forks": repo.forks_count,
        "expanded": expanded,
        "size_mb": repo.size_mib(),
        "open_issues": repo.open_issues_count,
        "created": format_date(&repo.created_at),
        "default_branch": repo.default_branch,
        "html_url": repo.html_url,
        "homepage": repo.homepage().unwrap_or(""),
    })
}
