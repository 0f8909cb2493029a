//! Presentation state for the launch list.
//!
//! [`LaunchFeed`] wraps each repository call in a spawned tokio task and
//! publishes the outcome as a [`UiStatus`] on a `watch` channel. Subscribers
//! always see the most recent value; when two fetches overlap, whichever task
//! publishes last wins.

use std::sync::{Arc, Mutex};

use launchpad_core::{
  LaunchKind, LaunchRecord, Repository, UiStatus,
  store::{LaunchCache, LaunchSource},
};
use tokio::{
  sync::{oneshot, watch},
  task::JoinHandle,
};

pub type LaunchStatus = UiStatus<Vec<LaunchRecord>>;

pub struct LaunchFeed<C, S> {
  repo:      Arc<Repository<C, S>>,
  status:    Arc<watch::Sender<LaunchStatus>>,
  selection: Mutex<LaunchKind>,
}

impl<C, S> LaunchFeed<C, S>
where
  C: LaunchCache + 'static,
  S: LaunchSource + 'static,
{
  pub fn new(repo: Arc<Repository<C, S>>) -> Self {
    let (tx, _rx) = watch::channel(UiStatus::Init);
    Self {
      repo,
      status: Arc::new(tx),
      selection: Mutex::new(LaunchKind::default()),
    }
  }

  pub fn subscribe(&self) -> watch::Receiver<LaunchStatus> { self.status.subscribe() }

  /// A snapshot of the last published status.
  pub fn current(&self) -> LaunchStatus { self.status.borrow().clone() }

  /// The kind most recently passed to [`fetch`](Self::fetch).
  pub fn selection(&self) -> LaunchKind {
    *self.selection.lock().unwrap_or_else(|e| e.into_inner())
  }

  /// Publish `Loading`, then resolve `kind` on a background task.
  pub fn fetch(&self, kind: LaunchKind) -> JoinHandle<()> {
    *self.selection.lock().unwrap_or_else(|e| e.into_inner()) = kind;
    self.status.send_replace(UiStatus::Loading);

    let repo = Arc::clone(&self.repo);
    let status = Arc::clone(&self.status);

    tokio::spawn(async move {
      let next = match kind {
        LaunchKind::Latest => match repo.latest().await {
          Ok(Some(record)) => UiStatus::Success(vec![record]),
          Ok(None) => UiStatus::Empty,
          Err(e) => UiStatus::error(e),
        },
        LaunchKind::Upcoming => repo
          .upcoming()
          .await
          .map_or_else(UiStatus::error, UiStatus::from_list),
        LaunchKind::Past => repo
          .past()
          .await
          .map_or_else(UiStatus::error, UiStatus::from_list),
      };

      if let UiStatus::Error(e) = &next {
        tracing::warn!(kind = kind.label(), error = %e, "launch fetch failed");
      }
      status.send_replace(next);
    })
  }

  pub fn fetch_latest(&self) -> JoinHandle<()> { self.fetch(LaunchKind::Latest) }

  pub fn fetch_upcoming(&self) -> JoinHandle<()> { self.fetch(LaunchKind::Upcoming) }

  pub fn fetch_past(&self) -> JoinHandle<()> { self.fetch(LaunchKind::Past) }

  /// Wipe the local cache in the background. Does not touch the status; the
  /// outcome arrives on the returned receiver.
  pub fn clear_cache(&self) -> oneshot::Receiver<launchpad_core::Result<()>> {
    let repo = Arc::clone(&self.repo);
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
      let result = repo.clear().await;
      if let Err(e) = &result {
        tracing::warn!(error = %e, "failed to clear launch cache");
      }
      let _ = tx.send(result);
    });
    rx
  }
}
