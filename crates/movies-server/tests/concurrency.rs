//! Integration tests for concurrent access to the shared movie store.
//!
//! The store sits behind a `tokio::sync::RwLock`, so simultaneous writes
//! serialize and none are lost. These tests fire overlapping requests at one
//! shared router and assert the collection ends up consistent.

use std::collections::HashSet;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use movies_server::router::build_router;
use movies_server::state::AppState;

fn test_app() -> Router {
    build_router(AppState::seeded())
}

async fn request_json(
    app: Router,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(path);
    let body = match body {
        Some(v) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&v).unwrap())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(json!(null));
    (status, json)
}

async fn get_json(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    request_json(app.clone(), Method::GET, path, None).await
}

#[tokio::test]
async fn simultaneous_creates_lose_no_records() {
    const WRITERS: usize = 16;

    let app = test_app();
    let mut handles = Vec::new();
    for i in 0..WRITERS {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let (status, body) = request_json(
                app,
                Method::POST,
                "/movies",
                Some(json!({ "isbn": i.to_string(), "title": format!("Movie {i}") })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            body["id"].as_str().unwrap().to_string()
        }));
    }

    let mut created_ids = HashSet::new();
    for handle in handles {
        created_ids.insert(handle.await.unwrap());
    }
    assert_eq!(created_ids.len(), WRITERS, "every create got a distinct id");

    let (status, list) = get_json(&app, "/movies").await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2 + WRITERS, "no create was lost");

    let listed_ids: HashSet<String> = list
        .iter()
        .map(|m| m["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(listed_ids.len(), list.len(), "no duplicate ids in the list");
    assert!(created_ids.is_subset(&listed_ids));
}

#[tokio::test]
async fn delete_racing_update_leaves_store_consistent() {
    let app = test_app();

    let delete = tokio::spawn(request_json(
        app.clone(),
        Method::DELETE,
        "/movies/1",
        None,
    ));
    let update = tokio::spawn(request_json(
        app.clone(),
        Method::PUT,
        "/movies/1",
        Some(json!({ "isbn": "11111", "title": "Raced" })),
    ));

    let (delete_status, _) = delete.await.unwrap();
    let (update_status, _) = update.await.unwrap();

    assert_eq!(delete_status, StatusCode::OK);
    // Whichever write wins the lock first decides whether the update sees
    // the record (200) or misses it (404).
    assert!(
        update_status == StatusCode::OK || update_status == StatusCode::NOT_FOUND,
        "unexpected update status {update_status}"
    );

    // Both interleavings end with id "1" gone and only the other seed left.
    let (_, list) = get_json(&app, "/movies").await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], "12");
}
