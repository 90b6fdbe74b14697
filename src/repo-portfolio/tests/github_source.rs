use repo_portfolio::{
    GitHubSource, MemoryCache, Portfolio, RepositorySource, SourceError, SourceSettings,
};
use serde_json::{json, Value};
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 2100-01-01T00:00:00Z
const FAR_RESET: u64 = 4_102_444_800;

fn source_for(base_url: &str, max_repositories: usize) -> GitHubSource {
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let settings = SourceSettings::new()
        .with_login(Some("octocat".to_string()))
        .with_api_base_url(Some(Url::parse(base_url).unwrap()))
        .with_max_repositories(max_repositories);
    GitHubSource::new(settings).unwrap()
}

fn rate(remaining: usize) -> Value {
    json!({
        "limit": 5000,
        "used": 5000 - remaining,
        "remaining": remaining,
        "reset": FAR_RESET,
    })
}

async fn mount_rate_limit(server: &MockServer, remaining: usize) {
    let body = json!({
        "resources": { "core": rate(remaining), "search": rate(30) },
        "rate": rate(remaining),
    });
    Mock::given(method("GET"))
        .and(path("/rate_limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_user(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "login": "octocat", "name": "The Octocat" })),
        )
        .mount(server)
        .await;
}

fn repo_page(first_id: u64, count: u64) -> Value {
    (first_id..first_id + count)
        .map(|id| {
            json!({
                "id": id,
                "name": format!("repo-{id}"),
                "created_at": "2020-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z",
            })
        })
        .collect()
}

async fn mount_repo_page(server: &MockServer, page: u32, body: Value, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("sort", "updated"))
        .and(query_param("per_page", "100"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn pages_until_a_short_page() {
    let server = MockServer::start().await;
    mount_repo_page(&server, 1, repo_page(1, 100), 1).await;
    mount_repo_page(&server, 2, repo_page(101, 100), 1).await;
    mount_repo_page(&server, 3, repo_page(201, 3), 1).await;

    let source = source_for(&server.uri(), 1000);
    let repos = source.fetch_repositories("octocat").await.unwrap();

    assert_eq!(repos.len(), 203);
    assert_eq!(repos.first().map(|repo| repo.id), Some(1));
    assert_eq!(repos.last().map(|repo| repo.name.as_str()), Some("repo-203"));
}

#[tokio::test]
async fn stops_at_the_repository_cap() {
    let server = MockServer::start().await;
    mount_repo_page(&server, 1, repo_page(1, 100), 1).await;
    mount_repo_page(&server, 2, repo_page(101, 100), 1).await;
    mount_repo_page(&server, 3, repo_page(201, 3), 0).await;

    let source = source_for(&server.uri(), 150);
    let repos = source.fetch_repositories("octocat").await.unwrap();

    assert_eq!(repos.len(), 150);
    assert_eq!(repos.last().map(|repo| repo.id), Some(150));
}

#[tokio::test]
async fn fetches_the_configured_user() {
    let server = MockServer::start().await;
    mount_rate_limit(&server, 4999).await;
    mount_user(&server).await;

    let user = source_for(&server.uri(), 1000)
        .fetch_current_user()
        .await
        .unwrap();

    assert_eq!(user.login, "octocat");
    assert_eq!(user.display_name(), "The Octocat");
}

#[tokio::test]
async fn exhausted_quota_fails_before_fetching() {
    let server = MockServer::start().await;
    mount_rate_limit(&server, 0).await;
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "login": "octocat" })))
        .expect(0)
        .mount(&server)
        .await;

    let result = source_for(&server.uri(), 1000).fetch_current_user().await;

    assert!(matches!(
        result,
        Err(SourceError::RateLimitExceeded { reset_at: FAR_RESET })
    ));
}

#[tokio::test]
async fn refresh_loads_user_and_repositories() {
    let server = MockServer::start().await;
    mount_rate_limit(&server, 4999).await;
    mount_user(&server).await;
    mount_repo_page(&server, 1, repo_page(1, 3), 1).await;

    let portfolio = Portfolio::open(source_for(&server.uri(), 1000), MemoryCache::new());
    let outcome = portfolio.refresh().await;

    assert!(outcome.is_refreshed());
    assert_eq!(
        outcome.notification().map(|n| n.message.as_str()),
        Some("Loaded 3 repositories")
    );
}

#[tokio::test]
async fn unknown_user_reports_failed_fetch() {
    let server = MockServer::start().await;
    mount_rate_limit(&server, 4999).await;
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest/users/users#get-a-user",
        })))
        .mount(&server)
        .await;

    let source = source_for(&server.uri(), 1000);
    let error = source.fetch_current_user().await.unwrap_err();
    assert!(matches!(
        error,
        SourceError::GitHubError(octocrab::Error::GitHub { .. })
    ));

    let portfolio = Portfolio::open(source, MemoryCache::new());
    let outcome = portfolio.refresh().await;

    assert!(!outcome.is_refreshed());
    assert_eq!(
        outcome.notification().map(|n| n.message.as_str()),
        Some("Failed to fetch GitHub data")
    );
}

#[tokio::test]
async fn unreachable_api_reports_connection_error() {
    // Bind and release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let source = source_for(&format!("http://127.0.0.1:{port}"), 1000);
    let portfolio = Portfolio::open(source, MemoryCache::new());
    let outcome = portfolio.refresh().await;

    assert!(!outcome.is_refreshed());
    assert_eq!(
        outcome.notification().map(|n| n.message.as_str()),
        Some("Error connecting to GitHub API")
    );
    assert!(portfolio.needs_initial_fetch());
}
