//! End-to-end tests driving the API router against an in-memory database.
//!
//! The rate limiter is left out because it needs the peer address from a real socket.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::Value;
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};

mod content;

fn app(db: &DatabaseConnection) -> Router {
    let (api, _) = router();
    api.with_state(AppState::new(db.clone()))
}

/// Sends a GET request and decodes the JSON body.
async fn get(db: &DatabaseConnection, uri: &str) -> (StatusCode, Value) {
    let response = app(db)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap())
}

fn ids(value: &Value) -> Vec<i64> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_i64().unwrap())
        .collect()
}
