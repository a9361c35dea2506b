//! Router tests against an in-memory store.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
  response::Response,
};
use rota_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::api_router;

async fn app() -> Router {
  let store = SqliteStore::open_in_memory()
    .await
    .expect("in-memory store");
  api_router(Arc::new(store))
}

fn json_request(method: &str, path: &str, body: Value) -> Request<Body> {
  Request::builder()
    .method(method)
    .uri(path)
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(body.to_string()))
    .unwrap()
}

fn get(path: &str) -> Request<Body> {
  Request::builder().uri(path).body(Body::empty()).unwrap()
}

async fn body_json(resp: Response) -> Value {
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
    .await
    .unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

fn draft(title: &str) -> Value {
  json!({ "title": title, "date": "2024-01-01", "time": "09:00" })
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_returns_201_with_assigned_fields() {
  let app = app().await;

  let resp = app
    .oneshot(json_request("POST", "/events", draft("Team meeting")))
    .await
    .unwrap();
  assert_eq!(resp.status(), StatusCode::CREATED);

  let event = body_json(resp).await;
  assert_eq!(event["title"], "Team meeting");
  assert_eq!(event["category"], "Work");
  assert_eq!(event["archived"], false);
  assert!(event["id"].is_string());
  assert!(event["created_at"].is_string());
}

#[tokio::test]
async fn create_empty_title_is_400_with_error_body() {
  let app = app().await;

  let resp = app
    .oneshot(json_request("POST", "/events", draft("   ")))
    .await
    .unwrap();
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let body = body_json(resp).await;
  assert!(body["error"].as_str().unwrap().contains("title"));
}

// ─── List / get ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_returns_created_events() {
  let app = app().await;

  for title in ["Team meeting", "House party"] {
    let resp = app
      .clone()
      .oneshot(json_request("POST", "/events", draft(title)))
      .await
      .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
  }

  let resp = app.oneshot(get("/events")).await.unwrap();
  assert_eq!(resp.status(), StatusCode::OK);

  let events = body_json(resp).await;
  assert_eq!(events.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn get_unknown_id_is_404() {
  let app = app().await;

  let resp = app
    .oneshot(get("/events/00000000-0000-0000-0000-000000000000"))
    .await
    .unwrap();
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);

  let body = body_json(resp).await;
  assert!(body["error"].is_string());
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn put_archives_an_event() {
  let app = app().await;

  let created = body_json(
    app
      .clone()
      .oneshot(json_request("POST", "/events", draft("Team meeting")))
      .await
      .unwrap(),
  )
  .await;
  let id = created["id"].as_str().unwrap();

  let resp = app
    .oneshot(json_request(
      "PUT",
      &format!("/events/{id}"),
      json!({ "archived": true }),
    ))
    .await
    .unwrap();
  assert_eq!(resp.status(), StatusCode::OK);

  let updated = body_json(resp).await;
  assert_eq!(updated["archived"], true);
  assert_eq!(updated["id"], created["id"]);
}

#[tokio::test]
async fn put_unknown_id_is_404() {
  let app = app().await;

  let resp = app
    .oneshot(json_request(
      "PUT",
      "/events/00000000-0000-0000-0000-000000000000",
      json!({ "archived": true }),
    ))
    .await
    .unwrap();
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_is_204_and_idempotent() {
  let app = app().await;

  let created = body_json(
    app
      .clone()
      .oneshot(json_request("POST", "/events", draft("Team meeting")))
      .await
      .unwrap(),
  )
  .await;
  let id = created["id"].as_str().unwrap();
  let path = format!("/events/{id}");

  let delete = |path: String| {
    Request::builder()
      .method("DELETE")
      .uri(path)
      .body(Body::empty())
      .unwrap()
  };

  let resp = app.clone().oneshot(delete(path.clone())).await.unwrap();
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);

  // Gone from the collection.
  let resp = app.clone().oneshot(get(&path)).await.unwrap();
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);

  // Deleting again is still 204.
  let resp = app.oneshot(delete(path)).await.unwrap();
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

// ─── Health ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn health_reports_ok() {
  let app = app().await;

  let resp = app.oneshot(get("/health")).await.unwrap();
  assert_eq!(resp.status(), StatusCode::OK);

  let body = body_json(resp).await;
  assert_eq!(body["status"], "ok");
  assert!(body["message"].is_string());
}
