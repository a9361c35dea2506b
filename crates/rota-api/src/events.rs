//! Handlers for `/events` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/events` | Whole collection, oldest first; no pagination |
//! | `POST`   | `/events` | Body: [`NewEvent`]; 201, 400 on empty title |
//! | `GET`    | `/events/:id` | 404 if unknown |
//! | `PUT`    | `/events/:id` | Body: [`EventPatch`]; 404 if unknown |
//! | `DELETE` | `/events/:id` | 204, also for already-deleted ids |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use rota_core::{
  event::{Event, EventPatch, NewEvent},
  store::EventStore,
};
use uuid::Uuid;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /events`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Event>>, ApiError>
where
  S: EventStore,
{
  let events = store
    .list_events()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(events))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /events` — the store assigns id, category, and creation timestamp.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(draft): Json<NewEvent>,
) -> Result<impl IntoResponse, ApiError>
where
  S: EventStore,
{
  if draft.title.trim().is_empty() {
    return Err(ApiError::BadRequest("title must not be empty".into()));
  }

  let event = store
    .create_event(draft)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(event)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /events/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Event>, ApiError>
where
  S: EventStore,
{
  let event = store
    .get_event(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("event {id} not found")))?;
  Ok(Json(event))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /events/:id` — archiving is the only mutation the patch can carry.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(patch): Json<EventPatch>,
) -> Result<Json<Event>, ApiError>
where
  S: EventStore,
{
  let event = store
    .update_event(id, patch)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("event {id} not found")))?;
  Ok(Json(event))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /events/:id` — idempotent; an unknown id still yields 204.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: EventStore,
{
  store
    .delete_event(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(StatusCode::NO_CONTENT)
}
