//! Async HTTP client wrapping the rota JSON API.

use std::{sync::Arc, time::Duration};

use reqwest::{Client, Response, StatusCode};
use rota_core::event::{Event, EventPatch, NewEvent};
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::notify::{NoticeKind, Notifier};

/// Connection settings for the rota API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

// ─── Error ────────────────────────────────────────────────────────────────────

/// Every failure the API can produce, normalized to a message the user can
/// read. The application layer only ever renders these; it never branches
/// on status codes.
#[derive(Debug, Error)]
pub enum ClientError {
  /// The server rejected the request (4xx other than 404).
  #[error("{0}")]
  Validation(String),

  /// The id does not exist, or no longer does (404).
  #[error("{0}")]
  NotFound(String),

  /// The server failed (5xx).
  #[error("{0}")]
  Server(String),

  /// No usable response at all: connect failure, timeout.
  #[error("network error: {0}")]
  Network(String),

  /// A response arrived but its body did not parse.
  #[error("decode error: {0}")]
  Decode(String),
}

impl From<reqwest::Error> for ClientError {
  fn from(e: reqwest::Error) -> Self {
    if e.is_decode() {
      Self::Decode(e.to_string())
    } else {
      Self::Network(e.to_string())
    }
  }
}

/// Body shape of `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct Health {
  pub status:  String,
  pub message: String,
}

// ─── Client ───────────────────────────────────────────────────────────────────

/// Async HTTP client for the rota JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based. Mutating
/// calls report their outcome through the injected [`Notifier`].
#[derive(Clone)]
pub struct ApiClient {
  client:   Client,
  config:   ApiConfig,
  notifier: Arc<dyn Notifier>,
}

impl ApiClient {
  pub fn new(
    config: ApiConfig,
    notifier: Arc<dyn Notifier>,
  ) -> Result<Self, ClientError> {
    let client = Client::builder()
      .timeout(Duration::from_secs(10))
      .build()?;
    Ok(Self {
      client,
      config,
      notifier,
    })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
  }

  /// Convert a non-success response into the normalized error, preferring
  /// the server's structured `error`/`message` fields over a generic
  /// status line.
  async fn check(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
      return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
      .ok()
      .and_then(|v| {
        ["error", "message"]
          .iter()
          .find_map(|k| v.get(k).and_then(|m| m.as_str()).map(str::to_owned))
      })
      .unwrap_or_else(|| format!("request failed: {status}"));

    Err(if status == StatusCode::NOT_FOUND {
      ClientError::NotFound(message)
    } else if status.is_client_error() {
      ClientError::Validation(message)
    } else {
      ClientError::Server(message)
    })
  }

  /// Report the outcome of a mutating call, passing the result through.
  fn report<T>(
    &self,
    result: Result<T, ClientError>,
    success: &str,
  ) -> Result<T, ClientError> {
    match &result {
      Ok(_) => self.notifier.notify(NoticeKind::Success, success),
      Err(e) => self.notifier.notify(NoticeKind::Error, &e.to_string()),
    }
    result
  }

  // ── Events ────────────────────────────────────────────────────────────────

  /// `GET /events`
  pub async fn list_events(&self) -> Result<Vec<Event>, ClientError> {
    let resp = self.client.get(self.url("/events")).send().await?;
    Ok(Self::check(resp).await?.json().await?)
  }

  /// `GET /events/:id`
  pub async fn get_event(&self, id: Uuid) -> Result<Event, ClientError> {
    let resp = self
      .client
      .get(self.url(&format!("/events/{id}")))
      .send()
      .await?;
    Ok(Self::check(resp).await?.json().await?)
  }

  /// `POST /events` — the server assigns id, category, and timestamp.
  pub async fn create_event(
    &self,
    draft: &NewEvent,
  ) -> Result<Event, ClientError> {
    let result: Result<Event, ClientError> = async {
      let resp = self
        .client
        .post(self.url("/events"))
        .json(draft)
        .send()
        .await?;
      Ok(Self::check(resp).await?.json().await?)
    }
    .await;
    self.report(result, "Event created")
  }

  /// `PUT /events/:id` — used exclusively to set `archived`.
  pub async fn update_event(
    &self,
    id: Uuid,
    patch: &EventPatch,
  ) -> Result<Event, ClientError> {
    let result: Result<Event, ClientError> = async {
      let resp = self
        .client
        .put(self.url(&format!("/events/{id}")))
        .json(patch)
        .send()
        .await?;
      Ok(Self::check(resp).await?.json().await?)
    }
    .await;

    let success = if patch.archived == Some(true) {
      "Event archived"
    } else {
      "Event updated"
    };
    self.report(result, success)
  }

  /// `DELETE /events/:id`
  pub async fn delete_event(&self, id: Uuid) -> Result<(), ClientError> {
    let result: Result<(), ClientError> = async {
      let resp = self
        .client
        .delete(self.url(&format!("/events/{id}")))
        .send()
        .await?;
      Self::check(resp).await?;
      Ok(())
    }
    .await;
    self.report(result, "Event deleted")
  }

  // ── Liveness ──────────────────────────────────────────────────────────────

  /// `GET /health`
  pub async fn health_check(&self) -> Result<Health, ClientError> {
    let resp = self.client.get(self.url("/health")).send().await?;
    Ok(Self::check(resp).await?.json().await?)
  }
}
