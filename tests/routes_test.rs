// ABOUTME: HTTP-level tests driving the axum router with in-memory requests
// ABOUTME: Checks status codes, the JSON error envelope, and end-to-end validation behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

#![allow(missing_docs, clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use reelfit::database::Database;
use reelfit::routes;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn test_app() -> Router {
    let database = Arc::new(Database::new("sqlite::memory:").await.unwrap());
    routes::router(database)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let app = test_app().await;
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn create_user_returns_normalized_record() {
    let app = test_app().await;
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/users",
            json!({"name": "Jo Lee", "email": "JO@X.COM"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["email"], "jo@x.com");
    assert_eq!(body["name"], "Jo Lee");
    assert!(body["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn invalid_email_yields_field_keyed_rejection() {
    let app = test_app().await;
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/users",
            json!({"name": "Jo Lee", "email": "not-an-email"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert_eq!(body["error"]["field"], "email");
}

#[tokio::test]
async fn duplicate_email_yields_conflict() {
    let app = test_app().await;
    let first = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/users",
            json!({"name": "Jo Lee", "email": "JO@X.COM"}),
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .oneshot(json_request(
            "POST",
            "/api/users",
            json!({"name": "Other Jo", "email": "jo@x.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = response_json(second).await;
    assert_eq!(body["error"]["code"], "CONSTRAINT_VIOLATION");
}

#[tokio::test]
async fn missing_user_yields_not_found() {
    let app = test_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn rental_referencing_unknown_movie_yields_reference_not_found() {
    let app = test_app().await;
    let user = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/users",
            json!({"name": "Jo Lee", "email": "jo@x.com"}),
        ))
        .await
        .unwrap();
    let user_id = response_json(user).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/rentals",
            json!({"user_id": user_id, "movie_id": 42}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "REFERENCE_NOT_FOUND");

    // Nothing was persisted
    let list = app
        .oneshot(
            Request::builder()
                .uri("/api/rentals")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response_json(list).await.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn past_due_date_is_rejected_at_the_boundary() {
    let app = test_app().await;
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/rentals",
            json!({"user_id": 1, "movie_id": 1, "due_date": "2020-01-01T00:00:00Z"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"]["field"], "due_date");
}

#[tokio::test]
async fn workout_association_is_idempotent_over_http() {
    let app = test_app().await;

    let member = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/members",
            json!({"name": "Sam Reyes", "email": "sam@gym.io"}),
        ))
        .await
        .unwrap();
    let member_id = response_json(member).await["id"].as_i64().unwrap();

    let workout = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/workouts",
            json!({"name": "Push Day"}),
        ))
        .await
        .unwrap();
    let workout_id = response_json(workout).await["id"].as_i64().unwrap();

    let uri = format!("/api/members/{member_id}/workouts/{workout_id}");

    let first = app
        .clone()
        .oneshot(json_request("POST", &uri, json!({})))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(response_json(first).await["attached"], true);

    let second = app
        .clone()
        .oneshot(json_request("POST", &uri, json!({})))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(response_json(second).await["attached"], false);

    let list = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/members/{member_id}/workouts"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response_json(list).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn rating_out_of_range_is_rejected() {
    let app = test_app().await;
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/ratings",
            json!({"user_id": 1, "movie_id": 1, "rating": 11}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"]["field"], "rating");
}

#[tokio::test]
async fn empty_update_is_rejected() {
    let app = test_app().await;
    let user = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/users",
            json!({"name": "Jo Lee", "email": "jo@x.com"}),
        ))
        .await
        .unwrap();
    let user_id = response_json(user).await["id"].as_i64().unwrap();

    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/api/users/{user_id}"),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
