//! Common test utilities for in-process API testing.
//!
//! This module provides a test fixture that builds the router with a mock
//! name guesser injected, so analyses can be exercised without a guessit
//! service.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use gatekeeper_core::{testing::MockNameGuesser, Config, Enricher, ReleaseAnalyzer};
use gatekeeper_server::{api::create_router, state::AppState};

/// Re-export fixtures for test convenience
pub use gatekeeper_core::testing::fixtures;

const BOUNDARY: &str = "gatekeeper-test-boundary";

/// Test fixture for API testing.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_title_analysis() {
///     let fixture = TestFixture::new();
///
///     let response = fixture.post("/api/v1/analyses/title", json!({
///         "category": "Movie",
///         "title": "Movie.Title.2020.1080p.WEB-DL.H.264-GROUP"
///     })).await;
///
///     assert_eq!(response.status, StatusCode::OK);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock name guesser - configure enrichment responses
    pub guesser: Arc<MockNameGuesser>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub text: String,
}

/// One part of a multipart form.
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a [u8]),
}

impl TestFixture {
    /// Create a fixture with default configuration and no enrichment.
    pub fn new() -> Self {
        Self::with_config(Config::default(), false)
    }

    /// Create a fixture with enrichment through the mock guesser.
    pub fn with_enrichment() -> Self {
        Self::with_config(Config::default(), true)
    }

    /// Create a test fixture with custom configuration.
    pub fn with_config(config: Config, enrich: bool) -> Self {
        let guesser = Arc::new(MockNameGuesser::new());

        let mut analyzer = ReleaseAnalyzer::new(config.policy.clone(), config.tokens.clone());
        if enrich {
            analyzer = analyzer.with_enricher(Enricher::new(
                Arc::clone(&guesser) as Arc<dyn gatekeeper_core::NameGuesser>,
                Duration::from_secs(1),
                10,
            ));
        }

        let state = Arc::new(AppState::new(config, analyzer));
        let router = create_router(state);

        Self { router, guesser }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap();
        self.send(request).await
    }

    /// Send a POST request with a multipart form body.
    pub async fn post_multipart(&self, path: &str, parts: &[Part<'_>]) -> TestResponse {
        let body = multipart_body(parts);
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .header("Content-Length", body.len())
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let text = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body, text }
    }
}

/// Encode parts as `multipart/form-data` with the fixture boundary.
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, filename, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                        name, filename
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(b"Content-Type: application/x-bittorrent\r\n\r\n");
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}
