//! Shared helpers for the HTTP tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use common::DatabaseConfig;
use user_service_lib::{Database, UserRepository};
use web_lib::{create_router, AppState, WebConfig};

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("Response body is not JSON")
    }

    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

pub async fn test_database() -> Database {
    Database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to open in-memory database")
}

/// Router over a fresh in-memory store.
pub async fn test_app() -> Router {
    create_router(AppState::with_store(test_database().await, WebConfig::default()))
}

/// Router over the given repository.
pub async fn app_with_repository(users: Arc<dyn UserRepository>) -> Router {
    create_router(AppState::new(users, test_database().await, WebConfig::default()))
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn json_request(method: Method, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn user_json(code: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "code": code,
        "fullName": format!("User {}", code),
        "dateOfBirth": "1990-05-17",
        "email": email,
        "phoneNumber": "0912345678",
        "address": "12 Ly Thai To, Hanoi"
    })
}
