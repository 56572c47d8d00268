//! Shared helpers for driving the router in-process.

#![allow(dead_code)]

use std::path::PathBuf;

use activities_site::database::{activities_repo::RosterStore, seed};
use activities_site::web;
use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

/// A router over a freshly seeded store, plus a handle to that store.
pub fn fresh_app() -> (Router, RosterStore) {
    let store = RosterStore::new(seed::default_activities().unwrap());
    (web::app(store.clone(), static_dir()), store)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn detail(&self) -> String {
        self.json()["detail"]
            .as_str()
            .expect("error body has a detail string")
            .to_string()
    }
}

pub async fn send(app: &Router, method: Method, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn signup_uri(activity: &str, email: &str) -> String {
    format!("/activities/{}/signup?email={}", encode(activity), encode(email))
}

pub fn unregister_uri(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/unregister?email={}",
        encode(activity),
        encode(email)
    )
}

/// Percent-encodes everything outside the unreserved set.
pub fn encode(raw: &str) -> String {
    raw.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{:02X}", b),
        })
        .collect()
}

pub async fn participants(app: &Router, activity: &str) -> Vec<String> {
    let resp = send(app, Method::GET, "/activities").await;
    resp.json()[activity]["participants"]
        .as_array()
        .expect("participants array")
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}
