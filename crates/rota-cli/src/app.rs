//! Application state controller and key dispatcher.
//!
//! The server owns the truth; `App` holds a wholesale-replaceable copy of
//! the event collection and re-fetches it after every successful mutation
//! instead of patching locally. Every controller operation catches its own
//! failure: refreshes record a retryable message, mutations log and move
//! on. Nothing below the event loop ever propagates an error.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rota_core::{
  categorize::categorize,
  event::{Category, Event, EventPatch, NewEvent},
};
use strum::IntoEnumIterator as _;
use uuid::Uuid;

use crate::{client::ApiClient, notify::NoticeBoard};

// ─── Filter ───────────────────────────────────────────────────────────────────

/// One header tab: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
  All,
  Only(Category),
}

impl CategoryFilter {
  /// Tab order as presented in the header.
  pub fn tabs() -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
      .chain(Category::iter().map(CategoryFilter::Only))
      .collect()
  }

  pub fn label(&self) -> String {
    match self {
      CategoryFilter::All => "All".to_string(),
      CategoryFilter::Only(c) => c.to_string(),
    }
  }

  pub fn matches(&self, event: &Event) -> bool {
    match self {
      CategoryFilter::All => true,
      CategoryFilter::Only(c) => event.category == *c,
    }
  }

  fn cycle(&self, step: isize) -> CategoryFilter {
    let tabs = Self::tabs();
    let here = tabs.iter().position(|t| t == self).unwrap_or(0) as isize;
    let next = (here + step).rem_euclid(tabs.len() as isize);
    tabs[next as usize]
  }
}

// ─── Screen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
  /// The filtered event list.
  List,
  /// The add-event form.
  AddForm,
}

// ─── Add form ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
  #[default]
  Title,
  Date,
  Time,
  Notes,
}

/// In-progress input for a new event.
///
/// Well-formedness is checked here, before any request is issued; the wire
/// types themselves never validate.
#[derive(Debug, Clone, Default)]
pub struct AddForm {
  pub title: String,
  pub date:  String,
  pub time:  String,
  pub notes: String,
  pub focus: FormField,
}

impl AddForm {
  pub fn focused_value_mut(&mut self) -> &mut String {
    match self.focus {
      FormField::Title => &mut self.title,
      FormField::Date => &mut self.date,
      FormField::Time => &mut self.time,
      FormField::Notes => &mut self.notes,
    }
  }

  pub fn focus_next(&mut self) {
    self.focus = match self.focus {
      FormField::Title => FormField::Date,
      FormField::Date => FormField::Time,
      FormField::Time => FormField::Notes,
      FormField::Notes => FormField::Title,
    };
  }

  pub fn focus_prev(&mut self) {
    self.focus = match self.focus {
      FormField::Title => FormField::Notes,
      FormField::Date => FormField::Title,
      FormField::Time => FormField::Date,
      FormField::Notes => FormField::Time,
    };
  }

  /// Live preview of the category the server will assign. Shown next to
  /// the title field; the previewed value is never submitted.
  pub fn preview(&self) -> Category { categorize(&self.title) }

  /// Validate into a draft; the error is the message shown to the user.
  pub fn validate(&self) -> Result<NewEvent, String> {
    let title = self.title.trim();
    if title.is_empty() {
      return Err("Title is required".into());
    }
    let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
      .map_err(|_| "Date must be YYYY-MM-DD".to_string())?;
    let time = NaiveTime::parse_from_str(self.time.trim(), "%H:%M")
      .map_err(|_| "Time must be HH:MM".to_string())?;
    let notes = self.notes.trim();

    Ok(NewEvent {
      title: title.to_string(),
      date,
      time,
      notes: (!notes.is_empty()).then(|| notes.to_string()),
    })
  }
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// Current screen / keyboard focus.
  pub screen: Screen,

  /// The server's collection as of the last successful refresh. Replaced
  /// wholesale, never patched in place.
  pub events: Vec<Event>,

  /// A refresh is in flight.
  pub loading: bool,

  /// Failure message of the last refresh; cleared by the next success.
  pub last_error: Option<String>,

  /// Selected header tab.
  pub selected: CategoryFilter,

  /// Cursor position within the *filtered* event list.
  pub list_cursor: usize,

  /// Add-event form state.
  pub form: AddForm,

  /// Form-level validation message.
  pub form_error: Option<String>,

  /// Last observed `/health` outcome; `None` until the first probe.
  pub online: Option<bool>,

  /// Shared HTTP client.
  pub client: Arc<ApiClient>,

  /// Latest transient notification, fed by the client's notifier.
  pub notices: Arc<NoticeBoard>,
}

impl App {
  /// Create an [`App`] with an empty event collection.
  pub fn new(client: ApiClient, notices: Arc<NoticeBoard>) -> Self {
    Self {
      screen: Screen::List,
      events: Vec::new(),
      loading: false,
      last_error: None,
      selected: CategoryFilter::All,
      list_cursor: 0,
      form: AddForm::default(),
      form_error: None,
      online: None,
      client: Arc::new(client),
      notices,
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Re-fetch the whole collection from the server.
  ///
  /// On success the local copy is replaced wholesale; on failure the
  /// previous copy stays untouched and `last_error` records the message.
  /// `loading` is cleared on both paths.
  pub async fn refresh(&mut self) {
    self.loading = true;
    let result = self.client.list_events().await;
    self.loading = false;

    match result {
      Ok(events) => {
        self.events = events;
        self.last_error = None;
        self.clamp_cursor();
      }
      Err(e) => {
        self.last_error = Some(e.to_string());
      }
    }
  }

  /// Submit a draft, then re-fetch on success. Returns whether the event
  /// was created. Never inserts locally ahead of the server.
  pub async fn add_event(&mut self, draft: NewEvent) -> bool {
    match self.client.create_event(&draft).await {
      Ok(_) => {
        self.refresh().await;
        true
      }
      Err(e) => {
        tracing::warn!(error = %e, "create event failed");
        false
      }
    }
  }

  /// Set `archived = true` on the server, then re-fetch. Not retried.
  pub async fn archive_event(&mut self, id: Uuid) {
    match self.client.update_event(id, &EventPatch::archive()).await {
      Ok(_) => self.refresh().await,
      Err(e) => tracing::warn!(error = %e, "archive event failed"),
    }
  }

  /// Delete on the server, then re-fetch. Not retried.
  pub async fn delete_event(&mut self, id: Uuid) {
    match self.client.delete_event(id).await {
      Ok(()) => self.refresh().await,
      Err(e) => tracing::warn!(error = %e, "delete event failed"),
    }
  }

  /// Probe `/health` and record the outcome for the status indicator.
  pub async fn check_health(&mut self) {
    match self.client.health_check().await {
      Ok(health) => {
        tracing::debug!(status = %health.status, message = %health.message, "health probe");
        self.online = Some(true);
      }
      Err(e) => {
        tracing::debug!(error = %e, "health probe failed");
        self.online = Some(false);
      }
    }
  }

  // ── Derivations ───────────────────────────────────────────────────────────

  /// Events visible under the selected tab. Archived events stay visible;
  /// only the tab *counts* hide them.
  pub fn filtered_events(&self) -> Vec<&Event> {
    self
      .events
      .iter()
      .filter(|e| self.selected.matches(e))
      .collect()
  }

  /// Badge count for a tab. Counts consider only non-archived events.
  pub fn count_for(&self, tab: CategoryFilter) -> usize {
    self
      .events
      .iter()
      .filter(|e| !e.archived && tab.matches(e))
      .count()
  }

  /// The event under the list cursor in the filtered view, if any.
  pub fn cursor_event(&self) -> Option<&Event> {
    let list = self.filtered_events();
    list.get(self.list_cursor).copied()
  }

  fn clamp_cursor(&mut self) {
    let len = self.filtered_events().len();
    self.list_cursor = self.list_cursor.min(len.saturating_sub(1));
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
    {
      return false;
    }

    match self.screen {
      Screen::List => self.handle_list_key(key).await,
      Screen::AddForm => self.handle_form_key(key).await,
    }
  }

  async fn handle_list_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      // Quit
      KeyCode::Char('q') => return false,

      // Reload
      KeyCode::Char('r') => {
        self.check_health().await;
        self.refresh().await;
      }

      // Navigation
      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.filtered_events().len();
        if len > 0 && self.list_cursor + 1 < len {
          self.list_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        if self.list_cursor > 0 {
          self.list_cursor -= 1;
        }
      }

      // Filter tabs
      KeyCode::Tab | KeyCode::Right => {
        self.selected = self.selected.cycle(1);
        self.list_cursor = 0;
      }
      KeyCode::BackTab | KeyCode::Left => {
        self.selected = self.selected.cycle(-1);
        self.list_cursor = 0;
      }

      // Add
      KeyCode::Char('a') => {
        self.form = AddForm::default();
        self.form_error = None;
        self.screen = Screen::AddForm;
      }

      // Archive — a no-op on already-archived events; this client never
      // issues a second archive for the same id.
      KeyCode::Char('x') => {
        let target = self
          .cursor_event()
          .filter(|e| !e.archived)
          .map(|e| e.id);
        if let Some(id) = target {
          self.archive_event(id).await;
        }
      }

      // Delete
      KeyCode::Char('d') => {
        if let Some(id) = self.cursor_event().map(|e| e.id) {
          self.delete_event(id).await;
        }
      }

      _ => {}
    }
    true
  }

  async fn handle_form_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Esc => {
        self.screen = Screen::List;
      }
      KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
      KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
      KeyCode::Enter => match self.form.validate() {
        Ok(draft) => {
          self.form_error = None;
          if self.add_event(draft).await {
            self.form = AddForm::default();
            self.screen = Screen::List;
          }
        }
        Err(message) => self.form_error = Some(message),
      },
      KeyCode::Backspace => {
        self.form.focused_value_mut().pop();
      }
      KeyCode::Char(c) => {
        self.form.focused_value_mut().push(c);
      }
      _ => {}
    }
    true
  }
}
