//! SQL schema for the rota SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS events (
    event_id    TEXT PRIMARY KEY,
    title       TEXT NOT NULL,
    date        TEXT NOT NULL,      -- ISO calendar date, YYYY-MM-DD
    time        TEXT NOT NULL,      -- wall clock, HH:MM
    notes       TEXT,
    category    TEXT NOT NULL,      -- 'Work' | 'Personal' | 'Other'
    archived    INTEGER NOT NULL DEFAULT 0,
    created_at  TEXT NOT NULL       -- ISO 8601 UTC; assigned by the store
);

CREATE INDEX IF NOT EXISTS events_created_idx ON events(created_at);

PRAGMA user_version = 1;
";
