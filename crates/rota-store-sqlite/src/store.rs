//! [`SqliteStore`] — the SQLite implementation of [`EventStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use rota_core::{
  categorize::categorize,
  event::{Event, EventPatch, NewEvent},
  store::EventStore,
};

use crate::{
  Error, Result,
  encode::{RawEvent, encode_date, encode_dt, encode_time, encode_uuid},
  schema::SCHEMA,
};

/// Column list shared by every `SELECT`; must stay in [`RawEvent`] order.
const EVENT_COLUMNS: &str =
  "event_id, title, date, time, notes, category, archived, created_at";

// ─── Store ───────────────────────────────────────────────────────────────────

/// An event store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn fetch_event(&self, id: Uuid) -> Result<Option<Event>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawEvent> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {EVENT_COLUMNS} FROM events WHERE event_id = ?1"),
              rusqlite::params![id_str],
              RawEvent::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawEvent::decode).transpose()
  }
}

// ─── EventStore impl ─────────────────────────────────────────────────────────

impl EventStore for SqliteStore {
  type Error = Error;

  async fn create_event(&self, draft: NewEvent) -> Result<Event> {
    let event = Event {
      id:         Uuid::new_v4(),
      category:   categorize(&draft.title),
      archived:   false,
      created_at: Utc::now(),
      title:      draft.title,
      date:       draft.date,
      time:       draft.time,
      notes:      draft.notes,
    };

    let id_str       = encode_uuid(event.id);
    let title        = event.title.clone();
    let date_str     = encode_date(event.date);
    let time_str     = encode_time(event.time);
    let notes        = event.notes.clone();
    let category_str = event.category.to_string();
    let archived     = event.archived;
    let at_str       = encode_dt(event.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO events (event_id, title, date, time, notes, category, archived, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
          rusqlite::params![
            id_str,
            title,
            date_str,
            time_str,
            notes,
            category_str,
            archived,
            at_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(event)
  }

  async fn get_event(&self, id: Uuid) -> Result<Option<Event>> {
    self.fetch_event(id).await
  }

  async fn list_events(&self) -> Result<Vec<Event>> {
    let raws: Vec<RawEvent> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {EVENT_COLUMNS} FROM events ORDER BY created_at, event_id"
        ))?;
        let rows = stmt
          .query_map([], RawEvent::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawEvent::decode).collect()
  }

  async fn update_event(
    &self,
    id: Uuid,
    patch: EventPatch,
  ) -> Result<Option<Event>> {
    if let Some(archived) = patch.archived {
      let id_str = encode_uuid(id);
      let changed: usize = self
        .conn
        .call(move |conn| {
          Ok(conn.execute(
            "UPDATE events SET archived = ?1 WHERE event_id = ?2",
            rusqlite::params![archived, id_str],
          )?)
        })
        .await?;

      if changed == 0 {
        return Ok(None);
      }
    }

    // An empty patch on an unknown id also falls out here as `None`.
    self.fetch_event(id).await
  }

  async fn delete_event(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);
    let removed: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM events WHERE event_id = ?1",
          rusqlite::params![id_str],
        )?)
      })
      .await?;
    Ok(removed > 0)
  }
}
