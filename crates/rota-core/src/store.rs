//! The `EventStore` trait.
//!
//! Implemented by storage backends (e.g. `rota-store-sqlite`). The API
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::event::{Event, EventPatch, NewEvent};

/// Abstraction over an event store backend.
///
/// The store is the sole authority for `id`, `created_at`, and `category`:
/// all three are assigned in [`create_event`](EventStore::create_event)
/// and never accepted from callers.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait EventStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new event, assigning its id, creation timestamp, and the
  /// category computed from the draft title.
  fn create_event(
    &self,
    draft: NewEvent,
  ) -> impl Future<Output = Result<Event, Self::Error>> + Send + '_;

  /// Retrieve an event by id. Returns `None` if not found.
  fn get_event(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Event>, Self::Error>> + Send + '_;

  /// Return the entire collection, oldest first. No pagination.
  fn list_events(
    &self,
  ) -> impl Future<Output = Result<Vec<Event>, Self::Error>> + Send + '_;

  /// Apply `patch` to an existing event and return the updated row.
  /// Returns `None` if the id is unknown.
  fn update_event(
    &self,
    id: Uuid,
    patch: EventPatch,
  ) -> impl Future<Output = Result<Option<Event>, Self::Error>> + Send + '_;

  /// Delete an event. Returns `false` when the id was already absent, so
  /// deleting twice is not an error.
  fn delete_event(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
