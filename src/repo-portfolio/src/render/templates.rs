//! Built-in terminal templates.

pub(crate) const HEADER: &str = "header";
pub(crate) const CARD: &str = "card";
pub(crate) const RESULTS: &str = "results";
pub(crate) const LANGUAGES: &str = "languages";
pub(crate) const ANALYTICS: &str = "analytics";

pub(crate) const HEADER_TEMPLATE: &str = "\
{{display_name}} (@{{login}})
{{#if bio}}{{bio}}
{{/if}}{{public_repos}} public repositories · {{followers}} followers · {{following}} following
";

pub(crate) const CARD_TEMPLATE: &str = "\
┌ {{name}}  ★ {{stars}}
│ {{description}}
{{#if tags}}│ {{tags}}
{{/if}}│ Updated {{updated}} · {{forks}} forks
{{#if expanded}}├ Project Details
│ Size: {{fixed size_mb 1}} MB · Issues: {{open_issues}}
│ Created: {{created}} · Branch: {{default_branch}}
│ View Code: {{html_url}}
{{#if homepage}}│ Live Demo: {{homepage}}
{{/if}}{{/if}}└
";

pub(crate) const RESULTS_TEMPLATE: &str = "\
Showing {{shown}} of {{total}} repositories
{{#if no_matches}}No repositories match your filters. Try a different search or language.
{{/if}}";

pub(crate) const LANGUAGES_TEMPLATE: &str = "\
Languages:
{{#each languages}}  {{this}}
{{else}}  (none)
{{/each}}";

pub(crate) const ANALYTICS_TEMPLATE: &str = "\
Activity Overview (mock data)
  This week: {{activity.this_week}} · This month: {{activity.this_month}} · This year: {{activity.this_year}}
  Current streak: {{activity.current_streak}} days · Longest streak: {{activity.longest_streak}} days · Active days: {{activity.active_days}}

Daily Contribution Heatmap (mock data)
{{#each heatmap}}  {{day}} {{#each cells}}{{heat this}}{{/each}}
{{/each}}
Contribution Mix (mock data)
{{#each contributions}}  {{pad kind 14}} {{bar percent}} {{count}}
{{/each}}
Performance Targets (mock data)
{{#each sla}}  {{pad metric 14}} {{target_bar progress marker}} {{actual}}{{unit}} / {{target}}{{unit}} {{#if met}}✔{{else}}✖{{/if}}
{{/each}}
Top Languages
{{#each languages}}  {{pad language 14}} {{bar percent}} {{count}} ({{fixed percent 1}}%)
{{else}}  No language data
{{/each}}";
