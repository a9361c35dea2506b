//! Event — the single entity of the scheduler.
//!
//! An event is a titled, dated, timed calendar item with a category and an
//! archived flag. The server is the sole authority for `id`, `category`,
//! and `created_at`; clients only ever submit the draft and patch shapes
//! defined below.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;

// ─── Category ────────────────────────────────────────────────────────────────

/// The closed set of event categories.
///
/// Assigned by the keyword heuristic in [`crate::categorize`] at creation
/// time; never edited directly. Serialized with capitalized variant names
/// (`"Work"`) to match existing persisted data.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display,
  EnumString, EnumIter,
)]
pub enum Category {
  Work,
  Personal,
  Other,
}

// ─── Event ───────────────────────────────────────────────────────────────────

/// A persisted calendar event.
///
/// `archived` only ever transitions false→true; no unarchive operation
/// exists. Title, date, time, and notes are immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
  pub id:         Uuid,
  pub title:      String,
  /// ISO calendar date (`YYYY-MM-DD`) on the wire.
  pub date:       NaiveDate,
  /// Wall-clock `HH:MM` on the wire.
  #[serde(with = "time_hm")]
  pub time:       NaiveTime,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes:      Option<String>,
  pub category:   Category,
  #[serde(default)]
  pub archived:   bool,
  /// Server-assigned timestamp; never changes after creation.
  pub created_at: DateTime<Utc>,
}

// ─── Request shapes ──────────────────────────────────────────────────────────

/// Input to [`crate::store::EventStore::create_event`].
///
/// `id`, `category`, `archived`, and `created_at` are always set by the
/// store; they are not accepted from callers. Well-formedness of the
/// fields is the submitting layer's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvent {
  pub title: String,
  pub date:  NaiveDate,
  #[serde(with = "time_hm")]
  pub time:  NaiveTime,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes: Option<String>,
}

/// Input to [`crate::store::EventStore::update_event`]. Archiving is the
/// only mutation exposed; absent fields leave the stored row untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPatch {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub archived: Option<bool>,
}

impl EventPatch {
  /// The one patch this system ever issues.
  pub fn archive() -> Self { Self { archived: Some(true) } }
}

// ─── Wire format for time-of-day ─────────────────────────────────────────────

/// Serde adapter storing a [`NaiveTime`] as an `HH:MM` string.
///
/// `HH:MM:SS` is accepted on input so payloads from stricter producers
/// still decode; seconds are dropped on output.
pub mod time_hm {
  use chrono::NaiveTime;
  use serde::{Deserialize, Deserializer, Serializer, de};

  pub fn serialize<S: Serializer>(
    time: &NaiveTime,
    serializer: S,
  ) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&time.format("%H:%M").to_string())
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
  ) -> Result<NaiveTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    NaiveTime::parse_from_str(&raw, "%H:%M")
      .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
      .map_err(de::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use chrono::{NaiveDate, NaiveTime, Utc};
  use uuid::Uuid;

  use super::*;

  fn sample() -> Event {
    Event {
      id:         Uuid::new_v4(),
      title:      "Team meeting".into(),
      date:       NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
      time:       NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
      notes:      None,
      category:   Category::Work,
      archived:   false,
      created_at: Utc::now(),
    }
  }

  #[test]
  fn event_serializes_date_and_time_as_strings() {
    let json = serde_json::to_value(sample()).unwrap();
    assert_eq!(json["date"], "2024-01-01");
    assert_eq!(json["time"], "09:00");
    assert_eq!(json["category"], "Work");
    // Absent notes are omitted entirely, not serialized as null.
    assert!(json.get("notes").is_none());
  }

  #[test]
  fn time_accepts_seconds_on_input() {
    let draft: NewEvent = serde_json::from_value(serde_json::json!({
      "title": "Dentist",
      "date": "2024-03-05",
      "time": "14:30:00",
    }))
    .unwrap();
    assert_eq!(draft.time, NaiveTime::from_hms_opt(14, 30, 0).unwrap());
  }

  #[test]
  fn patch_serializes_only_set_fields() {
    let json = serde_json::to_string(&EventPatch::archive()).unwrap();
    assert_eq!(json, r#"{"archived":true}"#);
    let json = serde_json::to_string(&EventPatch::default()).unwrap();
    assert_eq!(json, "{}");
  }
}
