//! Application state machine and event dispatcher.

use std::{io, process::Command, sync::Arc};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};
use launchpad_core::{
  LaunchKind, LaunchRecord, UiStatus,
  store::{LaunchCache, LaunchSource},
};
use tokio::sync::{
  oneshot::{self, error::TryRecvError},
  watch,
};

use crate::{
  feed::{LaunchFeed, LaunchStatus},
  gallery::PhotoCycler,
};

// ─── Screen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
  /// Focus on the launch list.
  LaunchList,
  /// Focus on the launch detail pane.
  LaunchDetail,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App<C, S> {
  /// Current screen / keyboard focus.
  pub screen: Screen,

  /// Which canned query the list shows.
  pub kind: LaunchKind,

  /// Snapshot of the feed status, refreshed by [`App::sync`].
  pub status: LaunchStatus,

  /// Current fuzzy-filter string (only active when `filter_active`).
  pub filter: String,

  /// Whether the user is typing a filter query.
  pub filter_active: bool,

  /// Cursor position within the *filtered* launch list.
  pub list_cursor: usize,

  /// Scroll offset within the detail pane, in lines.
  pub detail_scroll: u16,

  /// The launch shown in the detail pane.
  pub selected: Option<LaunchRecord>,

  /// Photo cycler for `selected`.
  pub gallery: PhotoCycler,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  feed:     Arc<LaunchFeed<C, S>>,
  updates:  watch::Receiver<LaunchStatus>,
  clearing: Option<oneshot::Receiver<launchpad_core::Result<()>>>,
}

impl<C, S> App<C, S>
where
  C: LaunchCache + 'static,
  S: LaunchSource + 'static,
{
  pub fn new(feed: Arc<LaunchFeed<C, S>>) -> Self {
    let updates = feed.subscribe();
    Self {
      screen: Screen::LaunchList,
      kind: feed.selection(),
      status: feed.current(),
      filter: String::new(),
      filter_active: false,
      list_cursor: 0,
      detail_scroll: 0,
      selected: None,
      gallery: PhotoCycler::default(),
      status_msg: String::new(),
      feed,
      updates,
      clearing: None,
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Switch the type selector and start fetching that list.
  pub fn select_kind(&mut self, kind: LaunchKind) {
    self.kind = kind;
    self.list_cursor = 0;
    self.filter.clear();
    self.filter_active = false;
    self.status_msg.clear();
    self.feed.fetch(kind);
    self.sync();
  }

  /// Pull the latest published status, if it changed, and pick up the
  /// outcome of a pending cache clear.
  pub fn sync(&mut self) {
    self.poll_clear();

    if !self.updates.has_changed().unwrap_or(false) {
      return;
    }
    self.status = self.updates.borrow_and_update().clone();

    let len = self.filtered_launches().len();
    if self.list_cursor >= len {
      self.list_cursor = len.saturating_sub(1);
    }
  }

  fn poll_clear(&mut self) {
    let Some(rx) = self.clearing.as_mut() else {
      return;
    };
    self.status_msg = match rx.try_recv() {
      Err(TryRecvError::Empty) => return,
      Ok(Ok(())) => "Cache cleared.".into(),
      Ok(Err(e)) => format!("Error clearing cache: {e}"),
      Err(TryRecvError::Closed) => "Cache clear was interrupted.".into(),
    };
    self.clearing = None;
  }

  // ── Filtered list ─────────────────────────────────────────────────────────

  /// Launches in the current status that match the filter query.
  pub fn filtered_launches(&self) -> Vec<&LaunchRecord> {
    let Some(launches) = self.status.data() else {
      return Vec::new();
    };
    if self.filter.is_empty() {
      return launches.iter().collect();
    }
    let matcher = SkimMatcherV2::default();
    launches
      .iter()
      .filter(|l| matcher.fuzzy_match(&l.name, &self.filter).is_some())
      .collect()
  }

  /// The launch under the list cursor in the filtered view, if any.
  pub fn cursor_launch(&self) -> Option<&LaunchRecord> {
    self.filtered_launches().get(self.list_cursor).copied()
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    if self.filter_active {
      self.handle_filter_key(key);
      return true;
    }

    match self.screen {
      Screen::LaunchList => self.handle_list_key(key),
      Screen::LaunchDetail => self.handle_detail_key(key),
    }
  }

  fn handle_filter_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.filter_active = false;
        self.filter.clear();
        self.list_cursor = 0;
      }
      KeyCode::Enter => {
        self.filter_active = false;
        self.list_cursor = 0;
        // Immediately open detail if there's exactly one match.
        let only = match self.filtered_launches().as_slice() {
          [one] => Some((*one).clone()),
          _ => None,
        };
        if let Some(launch) = only {
          self.open_detail(launch);
        }
      }
      KeyCode::Backspace => {
        self.filter.pop();
        self.list_cursor = 0;
      }
      KeyCode::Char(c) => {
        self.filter.push(c);
        self.list_cursor = 0;
      }
      _ => {}
    }
  }

  fn handle_list_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,

      // Type selector
      KeyCode::Tab => self.select_kind(self.kind.next()),
      KeyCode::BackTab => self.select_kind(self.kind.prev()),
      KeyCode::Char('1') => self.select_kind(LaunchKind::Latest),
      KeyCode::Char('2') => self.select_kind(LaunchKind::Upcoming),
      KeyCode::Char('3') => self.select_kind(LaunchKind::Past),
      KeyCode::Char('r') => self.select_kind(self.kind),

      KeyCode::Char('x') => {
        self.clearing = Some(self.feed.clear_cache());
        self.status_msg = "Clearing cache…".into();
      }

      // Navigation
      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.filtered_launches().len();
        if len > 0 && self.list_cursor + 1 < len {
          self.list_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.list_cursor = self.list_cursor.saturating_sub(1);
      }

      // Open detail
      KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
        if let Some(launch) = self.cursor_launch().cloned() {
          self.open_detail(launch);
        }
      }

      // Filter
      KeyCode::Char('/') => {
        self.filter_active = true;
        self.filter.clear();
        self.list_cursor = 0;
      }

      _ => {}
    }
    true
  }

  fn handle_detail_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,

      // Back to list
      KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => {
        self.screen = Screen::LaunchList;
        self.selected = None;
        self.gallery = PhotoCycler::default();
      }

      KeyCode::Down | KeyCode::Char('j') => {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
      }

      // Next photo
      KeyCode::Char('n') | KeyCode::Char(' ') => {
        self.gallery.advance();
      }

      // Outbound links, numbered from 1.
      KeyCode::Char(c @ '1'..='9') => {
        let n = c as usize - '1' as usize;
        self.open_link(n);
      }

      _ => {}
    }
    true
  }

  /// Transition to `LaunchDetail` for `launch` and show its first photo.
  fn open_detail(&mut self, launch: LaunchRecord) {
    self.gallery = PhotoCycler::new(launch.flickr_images.clone());
    self.gallery.prime();
    self.detail_scroll = 0;
    self.selected = Some(launch);
    self.screen = Screen::LaunchDetail;
  }

  fn open_link(&mut self, n: usize) {
    let Some(url) = self
      .selected
      .as_ref()
      .and_then(|l| l.links().get(n).map(|(_, url)| url.to_string()))
    else {
      return;
    };

    self.status_msg = match open_url(&url) {
      Ok(()) => format!("Opened {url}"),
      Err(e) => {
        tracing::warn!(%url, error = %e, "failed to open link");
        format!("Error opening {url}: {e}")
      }
    };
  }

  /// Whether the list is waiting on a fetch.
  pub fn is_loading(&self) -> bool { matches!(self.status, UiStatus::Loading) }
}

/// Hand `url` to the platform's default opener.
fn open_url(url: &str) -> io::Result<()> {
  let mut cmd = if cfg!(target_os = "macos") {
    Command::new("open")
  } else if cfg!(target_os = "windows") {
    let mut c = Command::new("cmd");
    c.args(["/C", "start", ""]);
    c
  } else {
    Command::new("xdg-open")
  };
  cmd.arg(url).spawn().map(drop)
}

#[cfg(test)]
mod tests {
  use crossterm::event::{KeyEventKind, KeyEventState};
  use launchpad_store_sqlite::SqliteStore;

  use super::*;
  use crate::testing::{FakeSource, feed, sample};

  fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
      code,
      modifiers: KeyModifiers::NONE,
      kind: KeyEventKind::Press,
      state: KeyEventState::NONE,
    }
  }

  /// Let the fetch task run to completion.
  async fn settle(app: &mut App<SqliteStore, FakeSource>) {
    while app.is_loading() {
      tokio::task::yield_now().await;
      app.sync();
    }
  }

  async fn loaded(kind: LaunchKind) -> App<SqliteStore, FakeSource> {
    let f = feed(FakeSource::with(sample())).await;
    let mut app = App::new(f);
    app.select_kind(kind);
    settle(&mut app).await;
    app
  }

  #[tokio::test]
  async fn selector_drives_fetch() {
    let app = loaded(LaunchKind::Past).await;
    let names: Vec<_> = app.filtered_launches().iter().map(|l| l.flight_number).collect();
    assert_eq!(names, [2, 1]);
  }

  #[tokio::test]
  async fn tab_cycles_kind() {
    let mut app = loaded(LaunchKind::Past).await;
    assert!(app.handle_key(press(KeyCode::Tab)));
    assert_eq!(app.kind, LaunchKind::Latest);
    assert!(app.is_loading());

    settle(&mut app).await;
    let flights: Vec<_> = app.filtered_launches().iter().map(|l| l.flight_number).collect();
    assert_eq!(flights, [2]);
  }

  #[tokio::test]
  async fn clear_key_reports_after_completion() {
    let mut app = loaded(LaunchKind::Past).await;
    assert!(app.handle_key(press(KeyCode::Char('x'))));
    assert_eq!(app.status_msg, "Clearing cache…");

    while app.status_msg == "Clearing cache…" {
      tokio::task::yield_now().await;
      app.sync();
    }
    assert_eq!(app.status_msg, "Cache cleared.");

    // The cache is empty, so reloading goes back to the remote.
    app.handle_key(press(KeyCode::Char('r')));
    settle(&mut app).await;
    assert_eq!(app.filtered_launches().len(), 2);
  }

  #[tokio::test]
  async fn detail_scroll_saturates() {
    let mut app = loaded(LaunchKind::Past).await;
    app.handle_key(press(KeyCode::Enter));
    app.detail_scroll = u16::MAX - 1;

    app.handle_key(press(KeyCode::Down));
    app.handle_key(press(KeyCode::Down));
    assert_eq!(app.detail_scroll, u16::MAX);

    app.handle_key(press(KeyCode::Up));
    assert_eq!(app.detail_scroll, u16::MAX - 1);
  }

  #[tokio::test]
  async fn cursor_is_clamped() {
    let mut app = loaded(LaunchKind::Past).await;
    for _ in 0..5 {
      app.handle_key(press(KeyCode::Down));
    }
    assert_eq!(app.list_cursor, 1);
    for _ in 0..5 {
      app.handle_key(press(KeyCode::Up));
    }
    assert_eq!(app.list_cursor, 0);
  }

  #[tokio::test]
  async fn filter_narrows_and_enter_opens_single_match() {
    let mut app = loaded(LaunchKind::Past).await;
    app.handle_key(press(KeyCode::Char('/')));
    for c in "Flight 2".chars() {
      app.handle_key(press(KeyCode::Char(c)));
    }
    assert_eq!(app.filtered_launches().len(), 1);

    app.handle_key(press(KeyCode::Enter));
    assert_eq!(app.screen, Screen::LaunchDetail);
    assert_eq!(app.selected.as_ref().map(|l| l.flight_number), Some(2));
  }

  #[tokio::test]
  async fn detail_back_returns_to_list() {
    let mut app = loaded(LaunchKind::Past).await;
    app.handle_key(press(KeyCode::Enter));
    assert_eq!(app.screen, Screen::LaunchDetail);

    app.handle_key(press(KeyCode::Esc));
    assert_eq!(app.screen, Screen::LaunchList);
    assert!(app.selected.is_none());
  }

  #[tokio::test]
  async fn quit_keys() {
    let mut app = loaded(LaunchKind::Latest).await;
    assert!(!app.handle_key(press(KeyCode::Char('q'))));
    assert!(!app.handle_key(KeyEvent {
      modifiers: KeyModifiers::CONTROL,
      ..press(KeyCode::Char('c'))
    }));
  }

  #[tokio::test]
  async fn error_status_has_no_rows() {
    let f = feed(FakeSource::failing(502)).await;
    let mut app = App::new(f);
    app.select_kind(LaunchKind::Upcoming);
    settle(&mut app).await;
    assert!(matches!(app.status, UiStatus::Error(_)));
    assert!(app.filtered_launches().is_empty());
    assert!(app.cursor_launch().is_none());
  }
}
