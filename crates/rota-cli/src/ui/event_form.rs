//! Add-event form pane.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::{
  app::{App, FormField},
  ui::category_color,
};

/// Render the add-event form into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" Add event ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let form = &app.form;
  let mut lines = vec![
    field_line("Title", &form.title, form.focus == FormField::Title),
    field_line("Date ", &form.date, form.focus == FormField::Date),
    field_line("Time ", &form.time, form.focus == FormField::Time),
    field_line("Notes", &form.notes, form.focus == FormField::Notes),
    Line::from(""),
  ];

  // Live preview of the category the server will assign.
  let preview = form.preview();
  lines.push(Line::from(vec![
    Span::styled("Category preview: ", Style::default().fg(Color::DarkGray)),
    Span::styled(
      preview.to_string(),
      Style::default().fg(category_color(preview)),
    ),
  ]));

  if let Some(error) = &app.form_error {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
      error.clone(),
      Style::default().fg(Color::Red),
    )));
  }

  lines.push(Line::from(""));
  lines.push(Line::from(Span::styled(
    "Dates are YYYY-MM-DD, times are HH:MM. Notes are optional.",
    Style::default().fg(Color::DarkGray),
  )));

  f.render_widget(Paragraph::new(lines), inner);
}

fn field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
  let marker = if focused { "▸ " } else { "  " };
  let value_style = if focused {
    Style::default().add_modifier(Modifier::BOLD)
  } else {
    Style::default()
  };
  let cursor = if focused { "_" } else { "" };

  Line::from(vec![
    Span::styled(marker, Style::default().fg(Color::Cyan)),
    Span::styled(format!("{label}  "), Style::default().fg(Color::DarkGray)),
    Span::styled(format!("{value}{cursor}"), value_style),
  ])
}
