use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::{
    model::{api::ErrorDto, park::ParkDto, trail::TrailDto},
    server::{router::router, state::AppState},
};


const ADMIN_KEY: &str = "test-admin-key";

/// Router wired to a fresh in-memory database.
///
/// The test context is held so the database outlives every request of the test.
struct TestApp {
    router: Router,
    db: DatabaseConnection,
    _context: TestContext,
}

impl TestApp {
    async fn new() -> Self {
        let context = TestBuilder::new().with_park_tables().build().await.unwrap();
        let db = context.db.clone().unwrap();

        Self {
            router: router().with_state(AppState::new(db.clone(), ADMIN_KEY)),
            db,
            _context: context,
        }
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn get(&self, uri: &str) -> Response {
        self.send(request(Method::GET, uri, None)).await
    }

    async fn get_as_admin(&self, uri: &str) -> Response {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", ADMIN_KEY))
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    async fn post(&self, uri: &str, body: Value) -> Response {
        self.send(request(Method::POST, uri, Some(body))).await
    }

    async fn patch(&self, uri: &str, body: Value) -> Response {
        self.send(request(Method::PATCH, uri, Some(body))).await
    }

    async fn delete(&self, uri: &str) -> Response {
        self.send(request(Method::DELETE, uri, None)).await
    }
}

fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sends raw bytes as a JSON body, for malformed-payload cases.
fn raw_json_request(method: Method, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
