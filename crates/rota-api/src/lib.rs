//! JSON REST API for rota.
//!
//! Exposes an axum [`Router`] backed by any
//! [`rota_core::store::EventStore`]. Transport concerns (listening, TLS,
//! CORS) are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! axum::serve(listener, rota_api::api_router(store.clone())).await?;
//! ```

pub mod error;
pub mod events;
pub mod health;

use std::sync::Arc;

use axum::{Router, routing::get};
use rota_core::store::EventStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router
/// regardless of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: EventStore + 'static,
{
  Router::new()
    // Events
    .route("/events", get(events::list::<S>).post(events::create::<S>))
    .route(
      "/events/{id}",
      get(events::get_one::<S>)
        .put(events::update_one::<S>)
        .delete(events::delete_one::<S>),
    )
    // Liveness
    .route("/health", get(health::handler))
    .with_state(store)
}

#[cfg(test)]
mod tests;
