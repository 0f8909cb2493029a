//! Launch list pane — left panel.

use launchpad_core::{
  LaunchOutcome, UiStatus,
  store::{LaunchCache, LaunchSource},
};
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::App;

/// Render the launch list into `area`.
pub fn draw<C, S>(f: &mut Frame, area: Rect, app: &App<C, S>)
where
  C: LaunchCache + 'static,
  S: LaunchSource + 'static,
{
  let filtered = app.filtered_launches();
  let total = app.status.data().map_or(0, Vec::len);

  // Title with count.
  let title = if app.filter_active || !app.filter.is_empty() {
    format!(" {} ({}/{}) ", app.kind.label(), filtered.len(), total)
  } else {
    format!(" {} ({}) ", app.kind.label(), total)
  };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let mut inner_area = block.inner(area);
  f.render_widget(block, area);

  // Non-success states render a single message in place of the list.
  let message = match &app.status {
    UiStatus::Success(_) => None,
    UiStatus::Init => Some(
      Paragraph::new("Press 1, 2 or 3 to load launches.").style(Style::default().fg(Color::DarkGray)),
    ),
    UiStatus::Loading => Some(Paragraph::new("Loading…").style(Style::default().fg(Color::Yellow))),
    UiStatus::Empty => {
      Some(Paragraph::new("No launches found.").style(Style::default().fg(Color::DarkGray)))
    }
    UiStatus::Error(e) => Some(
      Paragraph::new(format!("Error: {e}"))
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true }),
    ),
  };
  if let Some(paragraph) = message {
    f.render_widget(paragraph, inner_area);
    return;
  }

  // Build list items.
  let items: Vec<ListItem> = filtered
    .iter()
    .map(|launch| {
      let (icon, color) = match launch.outcome() {
        LaunchOutcome::Upcoming => ("◷ ", Color::Cyan),
        LaunchOutcome::Success => ("✓ ", Color::Green),
        LaunchOutcome::Failure => ("✗ ", Color::Red),
      };
      let date = launch
        .launch_date()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

      ListItem::new(Line::from(vec![
        Span::styled(icon, Style::default().fg(color)),
        Span::raw(launch.name.clone()),
        Span::styled(format!("  {date}"), Style::default().fg(Color::DarkGray)),
      ]))
    })
    .collect();

  // If filter is active or set, show a filter bar at the bottom of the inner area.
  if (app.filter_active || !app.filter.is_empty()) && inner_area.height > 2 {
    let filter_area = Rect {
      x:      inner_area.x,
      y:      inner_area.y + inner_area.height - 1,
      width:  inner_area.width,
      height: 1,
    };
    inner_area.height = inner_area.height.saturating_sub(1);

    let filter_text = if app.filter_active {
      format!("/{}_", app.filter)
    } else {
      format!("/{}", app.filter)
    };
    f.render_widget(
      Paragraph::new(filter_text).style(Style::default().fg(Color::Yellow)),
      filter_area,
    );
  }

  // Scrollable list with cursor tracking.
  let mut state = ListState::default();
  state.select(if filtered.is_empty() {
    None
  } else {
    Some(app.list_cursor)
  });

  f.render_stateful_widget(
    List::new(items).highlight_style(
      Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD),
    ),
    inner_area,
    &mut state,
  );
}
