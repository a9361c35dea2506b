//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, calendar dates as
//! `YYYY-MM-DD`, times of day as `HH:MM`, and UUIDs as hyphenated
//! lowercase strings. Categories store their display name.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rota_core::event::{Category, Event};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── Timestamps ──────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::Decode(e.to_string()))
}

// ─── Calendar date / time of day ─────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format("%Y-%m-%d").to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| Error::Decode(format!("bad date {s:?}: {e}")))
}

pub fn encode_time(t: NaiveTime) -> String { t.format("%H:%M").to_string() }

pub fn decode_time(s: &str) -> Result<NaiveTime> {
  NaiveTime::parse_from_str(s, "%H:%M")
    .map_err(|e| Error::Decode(format!("bad time {s:?}: {e}")))
}

// ─── Category ────────────────────────────────────────────────────────────────

pub fn decode_category(s: &str) -> Result<Category> {
  s.parse()
    .map_err(|_| Error::Decode(format!("unknown category: {s:?}")))
}

// ─── Raw row ─────────────────────────────────────────────────────────────────

/// One row of the `events` table as raw column values, in `SELECT` order:
/// `event_id, title, date, time, notes, category, archived, created_at`.
pub struct RawEvent {
  pub event_id:   String,
  pub title:      String,
  pub date:       String,
  pub time:       String,
  pub notes:      Option<String>,
  pub category:   String,
  pub archived:   bool,
  pub created_at: String,
}

impl RawEvent {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      event_id:   row.get(0)?,
      title:      row.get(1)?,
      date:       row.get(2)?,
      time:       row.get(3)?,
      notes:      row.get(4)?,
      category:   row.get(5)?,
      archived:   row.get(6)?,
      created_at: row.get(7)?,
    })
  }

  pub fn decode(self) -> Result<Event> {
    Ok(Event {
      id:         decode_uuid(&self.event_id)?,
      title:      self.title,
      date:       decode_date(&self.date)?,
      time:       decode_time(&self.time)?,
      notes:      self.notes,
      category:   decode_category(&self.category)?,
      archived:   self.archived,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
