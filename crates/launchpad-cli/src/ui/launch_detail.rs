//! Launch detail pane — right panel.

use launchpad_core::LaunchRecord;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::gallery::PhotoCycler;

// ─── Public entry ─────────────────────────────────────────────────────────────

/// Render the detail pane for `launch` into `area`.
pub fn draw(
  f: &mut Frame,
  area: Rect,
  launch: &LaunchRecord,
  gallery: &PhotoCycler,
  scroll: u16,
) {
  let block = Block::default()
    .title(format!(" {} ", launch.name))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let inner = block.inner(area);
  f.render_widget(block, area);

  let dim = Style::default().fg(Color::DarkGray);
  let heading = Style::default()
    .fg(Color::Cyan)
    .add_modifier(Modifier::BOLD);

  let mut lines: Vec<Line> = vec![Line::from(Span::styled(
    launch.meta_line(),
    Style::default().add_modifier(Modifier::BOLD),
  ))];

  if let Some(rocket) = &launch.rocket_id {
    lines.push(Line::from(vec![
      Span::styled(format!("{:<10}", "rocket"), heading),
      Span::raw(rocket.clone()),
    ]));
  }
  if let Some(patch) = &launch.mission_patch_small {
    lines.push(Line::from(vec![
      Span::styled(format!("{:<10}", "patch"), heading),
      Span::styled(patch.clone(), dim),
    ]));
  }

  if let Some(details) = launch.details.as_deref().filter(|d| !d.is_empty()) {
    lines.push(Line::from(""));
    lines.push(Line::from(details.to_string()));
  }

  // Photos
  if !gallery.is_empty() {
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
      Span::styled("Photos  ", heading),
      Span::styled(format!("{} of {}  [n] next", gallery.index(), gallery.len()), dim),
    ]));
    if let Some(url) = gallery.current() {
      lines.push(Line::from(Span::styled(
        url.to_string(),
        Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
      )));
    }
  }

  // Outbound links
  let links = launch.links();
  if !links.is_empty() {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Links", heading)));
    for (i, (label, url)) in links.into_iter().enumerate() {
      lines.push(Line::from(vec![
        Span::styled(format!("[{}] ", i + 1), Style::default().fg(Color::Yellow)),
        Span::styled(format!("{label:<10}"), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(url.to_string(), dim),
      ]));
    }
  }

  let para = Paragraph::new(lines)
    .wrap(Wrap { trim: false })
    .scroll((scroll, 0));
  f.render_widget(para, inner);
}
