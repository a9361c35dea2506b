//! Event list pane.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{app::App, ui::category_color};

/// Render the filtered event list into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let filtered = app.filtered_events();

  let title = format!(" Events ({}/{}) ", filtered.len(), app.events.len());
  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  if filtered.is_empty() {
    let hint = if app.events.is_empty() {
      "No events yet. Press a to add one."
    } else {
      "Nothing in this category."
    };
    f.render_widget(
      Paragraph::new(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
      ))),
      inner,
    );
    return;
  }

  let items: Vec<ListItem> = filtered
    .iter()
    .map(|event| {
      let title_style = if event.archived {
        Style::default().fg(Color::DarkGray)
      } else {
        Style::default().add_modifier(Modifier::BOLD)
      };

      let mut spans = vec![
        Span::styled(event.title.clone(), title_style),
        Span::raw("  "),
        Span::styled(
          format!("[{}]", event.category),
          Style::default().fg(category_color(event.category)),
        ),
        Span::raw("  "),
        Span::styled(
          format!("{} {}", event.date, event.time.format("%H:%M")),
          Style::default().fg(Color::DarkGray),
        ),
      ];

      if event.archived {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
          "(archived)",
          Style::default().fg(Color::Yellow),
        ));
      }

      if let Some(notes) = &event.notes {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
          format!("· {notes}"),
          Style::default().fg(Color::DarkGray),
        ));
      }

      ListItem::new(Line::from(spans))
    })
    .collect();

  let mut state = ListState::default();
  state.select(Some(app.list_cursor));

  f.render_stateful_widget(
    List::new(items)
      .highlight_style(
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol(""),
    inner,
    &mut state,
  );
}
