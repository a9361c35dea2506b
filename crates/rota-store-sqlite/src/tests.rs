//! Integration tests for `SqliteStore` against an in-memory database.

use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use rota_core::{
  event::{Category, EventPatch, NewEvent},
  store::EventStore,
};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn draft(title: &str) -> NewEvent {
  NewEvent {
    title: title.into(),
    date:  NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    time:  NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
    notes: None,
  }
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_assigns_id_category_and_timestamp() {
  let s = store().await;

  let event = s.create_event(draft("Team meeting")).await.unwrap();
  assert_eq!(event.category, Category::Work);
  assert!(!event.archived);

  let fetched = s.get_event(event.id).await.unwrap().unwrap();
  assert_eq!(fetched.id, event.id);
  assert_eq!(fetched.title, "Team meeting");
  assert_eq!(fetched.category, Category::Work);
  assert_eq!(fetched.created_at, event.created_at);
}

#[tokio::test]
async fn create_categorizes_from_title() {
  let s = store().await;

  let party = s.create_event(draft("House party")).await.unwrap();
  assert_eq!(party.category, Category::Personal);

  let dentist = s.create_event(draft("Dentist")).await.unwrap();
  assert_eq!(dentist.category, Category::Other);
}

#[tokio::test]
async fn notes_round_trip() {
  let s = store().await;

  let mut with_notes = draft("Dentist");
  with_notes.notes = Some("bring insurance card".into());
  let event = s.create_event(with_notes).await.unwrap();

  let fetched = s.get_event(event.id).await.unwrap().unwrap();
  assert_eq!(fetched.notes.as_deref(), Some("bring insurance card"));
}

// ─── Reads ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_event_missing_returns_none() {
  let s = store().await;
  let result = s.get_event(Uuid::new_v4()).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn list_events_returns_all_oldest_first() {
  let s = store().await;

  for title in ["first", "second", "third"] {
    s.create_event(draft(title)).await.unwrap();
    // created_at is the sort key; space the rows out.
    tokio::time::sleep(Duration::from_millis(5)).await;
  }

  let all = s.list_events().await.unwrap();
  let titles: Vec<_> = all.iter().map(|e| e.title.as_str()).collect();
  assert_eq!(titles, ["first", "second", "third"]);
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn archive_persists() {
  let s = store().await;
  let event = s.create_event(draft("Team meeting")).await.unwrap();

  let updated = s
    .update_event(event.id, EventPatch::archive())
    .await
    .unwrap()
    .unwrap();
  assert!(updated.archived);

  let fetched = s.get_event(event.id).await.unwrap().unwrap();
  assert!(fetched.archived);
}

#[tokio::test]
async fn update_unknown_id_returns_none() {
  let s = store().await;
  let result = s
    .update_event(Uuid::new_v4(), EventPatch::archive())
    .await
    .unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn empty_patch_leaves_row_unchanged() {
  let s = store().await;
  let event = s.create_event(draft("Team meeting")).await.unwrap();

  let updated = s
    .update_event(event.id, EventPatch::default())
    .await
    .unwrap()
    .unwrap();
  assert!(!updated.archived);
  assert_eq!(updated.title, event.title);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_and_is_idempotent() {
  let s = store().await;
  let event = s.create_event(draft("Team meeting")).await.unwrap();

  assert!(s.delete_event(event.id).await.unwrap());
  assert!(s.get_event(event.id).await.unwrap().is_none());

  // Second delete of the same id reports nothing removed, not an error.
  assert!(!s.delete_event(event.id).await.unwrap());
}
