use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use roster::{router, AppState, RecordSource, ServerConfig, SourceError, StaticSource};
use roster_seeker::Candidate;
use serde_json::Value;
use tower::ServiceExt;

fn sample() -> Vec<Candidate> {
    vec![
        Candidate::new("Ada Lovelace", "Software Engineer", "Analytical", "2024-03-01")
            .with_application_type("Referral")
            .with_source("LinkedIn")
            .with_job_id("J-1"),
        Candidate::new("Grace Hopper", "Compiler Engineer", "Navy", "2024-05-10")
            .with_application_type("direct")
            .with_source("Website")
            .with_job_id("J-2"),
        Candidate::new("Alan Turing", "Researcher", "Bletchley", "2024-01-15")
            .with_application_type("Referral")
            .with_source("Indeed"),
        Candidate::new("Edsger Dijkstra", "Professor", "Eindhoven", "2024-04-20")
            .with_application_type("Agency")
            .with_source("linkedin")
            .with_job_id("J-1"),
        Candidate::new("Barbara Liskov", "Engineer", "MIT", "2024-02-02")
            .with_source("Website"),
        Candidate::new("Donald Knuth", "Author", "Stanford", "2023-12-31")
            .with_application_type("DIRECT")
            .with_source("Referral Site"),
    ]
}

fn app_with(source: Arc<dyn RecordSource>) -> Router {
    let cors = ServerConfig::default().cors_layer().unwrap();
    router(AppState::new(source), cors)
}

fn app() -> Router {
    app_with(Arc::new(StaticSource::new(sample())))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn names(body: &Value) -> Vec<&str> {
    body["candidates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn root_returns_banner() {
    let (status, body) = get(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Candidate Management API");
    assert_eq!(body["docs"], "/docs");
}

#[tokio::test]
async fn default_page_is_newest_first() {
    let (status, body) = get(app(), "/api/candidates").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 6);
    assert_eq!(body["page"], 1);
    assert_eq!(body["per_page"], 5);
    assert_eq!(body["total_pages"], 2);
    assert_eq!(
        names(&body),
        vec![
            "Grace Hopper",
            "Edsger Dijkstra",
            "Ada Lovelace",
            "Barbara Liskov",
            "Alan Turing"
        ]
    );
}

#[tokio::test]
async fn second_page_holds_the_rest() {
    let (_, body) = get(app(), "/api/candidates?page=2").await;
    assert_eq!(names(&body), vec!["Donald Knuth"]);
}

#[tokio::test]
async fn page_past_the_end_is_empty() {
    let (status, body) = get(app(), "/api/candidates?page=9").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 6);
    assert_eq!(body["total_pages"], 2);
    assert!(names(&body).is_empty());
}

#[tokio::test]
async fn repeated_application_type_is_a_set() {
    let (_, body) = get(
        app(),
        "/api/candidates?application_type=referral&application_type=Direct&sort_by=name&sort_order=asc",
    )
    .await;

    assert_eq!(body["total"], 4);
    assert_eq!(
        names(&body),
        vec!["Ada Lovelace", "Alan Turing", "Donald Knuth", "Grace Hopper"]
    );
}

#[tokio::test]
async fn search_and_source_combine() {
    let (_, body) = get(app(), "/api/candidates?search=ENGINEER&source=website").await;
    assert_eq!(names(&body), vec!["Grace Hopper", "Barbara Liskov"]);
}

#[tokio::test]
async fn job_id_is_exact() {
    let (_, body) = get(app(), "/api/candidates?job_id=J-1").await;
    assert_eq!(names(&body), vec!["Edsger Dijkstra", "Ada Lovelace"]);

    let (_, body) = get(app(), "/api/candidates?job_id=j-1").await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["total_pages"], 0);
}

#[tokio::test]
async fn unknown_sort_falls_back_to_last_activity_desc() {
    let (status, fallback) = get(app(), "/api/candidates?sort_by=salary&sort_order=sideways").await;
    let (_, default) = get(app(), "/api/candidates").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fallback, default);
}

#[tokio::test]
async fn candidate_fields_are_passed_through() {
    let (_, body) = get(app(), "/api/candidates?job_id=J-2").await;
    let grace = &body["candidates"][0];
    assert_eq!(grace["position"], "Compiler Engineer");
    assert_eq!(grace["company"], "Navy");
    assert_eq!(grace["application_type"], "direct");
    assert_eq!(grace["source"], "Website");
    assert_eq!(grace["last_activity"], "2024-05-10");
}

#[tokio::test]
async fn page_zero_is_unprocessable() {
    let (status, body) = get(app(), "/api/candidates?page=0").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"][0], "query");
    assert_eq!(body["detail"][0]["loc"][1], "page");
}

#[tokio::test]
async fn per_page_over_limit_is_unprocessable() {
    let (status, body) = get(app(), "/api/candidates?per_page=51").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"][1], "per_page");
    assert!(body["detail"][0]["msg"].as_str().unwrap().contains("50"));

    let (status, _) = get(app(), "/api/candidates?per_page=50").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn non_integer_page_is_unprocessable() {
    let (status, body) = get(app(), "/api/candidates?page=abc").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"][1], "page");
}

struct Broken;

impl RecordSource for Broken {
    fn load(&self) -> Result<Arc<[Candidate]>, SourceError> {
        Err(SourceError::Io {
            path: "missing.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        })
    }
}

#[tokio::test]
async fn source_failure_is_internal_error() {
    let (status, body) = get(app_with(Arc::new(Broken)), "/api/candidates").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"].is_string());
    assert!(!body["detail"].as_str().unwrap().contains("missing.json"));
}

#[tokio::test]
async fn validation_runs_before_loading() {
    let (status, _) = get(app_with(Arc::new(Broken)), "/api/candidates?page=0").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn cors_preflight_allows_frontend_origin() {
    let response = app()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/candidates")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn cors_ignores_other_origins() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/candidates")
                .header(header::ORIGIN, "http://evil.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
