//! HTTP boundary tests: drive the router directly with mock dependencies.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use leadscout::{CompanyAnalyzer, FallbackDirectory, LeadershipScraper, MockFetcher};
use server_core::kernel::NoopInterviewSearcher;
use server_core::server::app::{build_router, AppState};

const TEAM_PAGE: &str = r#"<html><body>
    <h1>Leadership</h1>
    <div class="team-member"><h3>Jane Smith</h3><p class="title">CEO</p></div>
    <div class="team-member"><h3>John Moore</h3><p class="title">CFO</p></div>
</body></html>"#;

fn test_router(fetcher: MockFetcher) -> Router {
    let scraper = LeadershipScraper::new(Arc::new(fetcher));
    let analyzer = CompanyAnalyzer::new(scraper, FallbackDirectory::curated());

    let state = AppState {
        db_pool: None,
        analyzer: Arc::new(analyzer),
        interviews: Arc::new(NoopInterviewSearcher::new()),
    };

    build_router(state, &[])
}

async fn post_json(router: Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn test_analyze_scraped_company() {
    let fetcher = MockFetcher::new().with_page("https://example.com/about", TEAM_PAGE);
    let router = test_router(fetcher);

    let (status, body) = post_json(router, "/analyze", json!({"url": "example.com"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["domain"], json!("example.com"));
    assert_eq!(body["data"]["data_source"], json!("scraped"));
    assert_eq!(body["data"]["leaders"][0]["name"], json!("Jane Smith"));
    assert_eq!(body["data"]["leaders"][0]["title"], json!("CEO"));
}

#[tokio::test]
async fn test_analyze_invalid_input_is_400() {
    let router = test_router(MockFetcher::new());

    let (status, body) = post_json(router, "/analyze", json!({"url": "   "})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("invalid input"));
}

#[tokio::test]
async fn test_analyze_serves_fallback_when_scrape_fails() {
    let router = test_router(MockFetcher::new());

    let (status, body) = post_json(
        router,
        "/analyze",
        json!({"url": "https://www.apple.com/products"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["domain"], json!("apple.com"));
    assert_eq!(body["data"]["data_source"], json!("fallback"));
    let names: Vec<&str> = body["data"]["leaders"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Tim Cook"));
}

#[tokio::test]
async fn test_analyze_empty_result_is_success() {
    let router = test_router(MockFetcher::new());

    let (status, body) = post_json(router, "/analyze", json!({"url": "tesla.com"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["domain"], json!("tesla.com"));
    assert_eq!(body["data"]["leaders"], json!([]));
    assert_eq!(body["data"]["data_source"], json!("scraped"));
}

#[tokio::test]
async fn test_search_interviews_without_source_returns_empty_mapping() {
    let router = test_router(MockFetcher::new());

    let (status, body) = post_json(
        router,
        "/search-interviews",
        json!({
            "leaders": [{"name": "Tim Cook"}, {"name": "Jeff Williams"}],
            "company_name": "Apple"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    let interviews = body["data"]["interviews"].as_object().unwrap();
    assert_eq!(interviews.len(), 2);
    assert_eq!(interviews["Tim Cook"], json!([]));
    assert_eq!(interviews["Jeff Williams"], json!([]));
}

#[tokio::test]
async fn test_search_interviews_requires_leaders() {
    let router = test_router(MockFetcher::new());

    let (status, body) = post_json(
        router,
        "/search-interviews",
        json!({"leaders": [], "company_name": "Apple"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn test_health_without_database() {
    let router = test_router(MockFetcher::new());

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["database"]["status"], json!("not_configured"));
}
