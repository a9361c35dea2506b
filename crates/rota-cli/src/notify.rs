//! Notification capability — how mutation outcomes surface to the user.
//!
//! The API client reports success and failure of mutating calls through
//! [`Notifier`], so everything below the presentation layer is testable
//! without a terminal. The TUI installs a [`NoticeBoard`] and renders the
//! latest notice in the status bar.

use std::sync::Mutex;

/// Visual flavor of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
  Success,
  Error,
}

/// A single user-visible notification.
#[derive(Debug, Clone)]
pub struct Notice {
  pub kind:    NoticeKind,
  pub message: String,
}

/// Receiver for user-visible notifications.
pub trait Notifier: Send + Sync {
  fn notify(&self, kind: NoticeKind, message: &str);
}

/// Keeps only the most recent notice; older ones are overwritten, like the
/// transient toasts this replaces.
#[derive(Default)]
pub struct NoticeBoard {
  latest: Mutex<Option<Notice>>,
}

impl NoticeBoard {
  pub fn latest(&self) -> Option<Notice> {
    match self.latest.lock() {
      Ok(guard) => guard.clone(),
      Err(_) => None,
    }
  }
}

impl Notifier for NoticeBoard {
  fn notify(&self, kind: NoticeKind, message: &str) {
    if let Ok(mut guard) = self.latest.lock() {
      *guard = Some(Notice {
        kind,
        message: message.to_string(),
      });
    }
  }
}
