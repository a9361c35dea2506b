//! TUI rendering — orchestrates all panes.

pub mod event_form;
pub mod event_list;

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::Paragraph,
};
use rota_core::event::Category;

use crate::{
  app::{App, CategoryFilter, Screen},
  notify::NoticeKind,
};

/// Badge color per category, shared by the tabs and the list.
pub fn category_color(category: Category) -> Color {
  match category {
    Category::Work => Color::Cyan,
    Category::Personal => Color::Magenta,
    Category::Other => Color::Yellow,
  }
}

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: filter tabs, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // tabs
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_tabs(f, rows[0], app);
  match app.screen {
    Screen::List => event_list::draw(f, rows[1], app),
    Screen::AddForm => event_form::draw(f, rows[1], app),
  }
  draw_status(f, rows[2], app);
}

// ─── Filter tabs ──────────────────────────────────────────────────────────────

fn draw_tabs(f: &mut Frame, area: Rect, app: &App) {
  let mut spans: Vec<Span> = vec![Span::raw(" ")];

  for tab in CategoryFilter::tabs() {
    let text = format!(" {} {} ", tab.label(), app.count_for(tab));
    let style = if tab == app.selected {
      Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(Color::DarkGray)
    };
    spans.push(Span::styled(text, style));
    spans.push(Span::raw(" "));
  }

  // Online indicator, right-aligned.
  let indicator = match app.online {
    Some(true) => Span::styled("● online ", Style::default().fg(Color::Green)),
    Some(false) => Span::styled("● offline ", Style::default().fg(Color::Red)),
    None => Span::raw(""),
  };

  let used: u16 = spans.iter().map(|s| s.content.len() as u16).sum();
  let pad = area
    .width
    .saturating_sub(used)
    .saturating_sub(indicator.content.len() as u16);
  spans.push(Span::raw(" ".repeat(pad as usize)));
  spans.push(indicator);

  f.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match app.screen {
    Screen::List => (
      "LIST",
      "↑↓/jk navigate  ←→/Tab filter  a add  x archive  d delete  r reload  q quit",
    ),
    Screen::AddForm => ("ADD", "Tab next field  Enter save  Esc cancel"),
  };

  let message = if app.loading {
    Span::styled("Loading events…", Style::default().fg(Color::DarkGray))
  } else if let Some(err) = &app.last_error {
    Span::styled(
      format!("Error: {err} (press r to retry)"),
      Style::default().fg(Color::Red),
    )
  } else if let Some(notice) = app.notices.latest() {
    let color = match notice.kind {
      NoticeKind::Success => Color::Green,
      NoticeKind::Error => Color::Red,
    };
    Span::styled(notice.message, Style::default().fg(color))
  } else {
    Span::styled(hints, Style::default().fg(Color::DarkGray))
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );

  let line = Line::from(vec![mode_span, Span::raw("  "), message]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
