//! Liveness probe, independent of the event domain.

use axum::Json;
use serde::Serialize;

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct Health {
  pub status:  String,
  pub message: String,
}

/// `GET /health`
pub async fn handler() -> Json<Health> {
  Json(Health {
    status:  "ok".into(),
    message: "rota API is up".into(),
  })
}
