//! Test doubles shared by the feed and app tests.

use std::sync::{
  Arc,
  atomic::{AtomicUsize, Ordering},
};

use launchpad_core::{
  Repository,
  dto::{LaunchDto, LinksDto},
  store::LaunchSource,
};
use launchpad_store_sqlite::SqliteStore;

use crate::feed::LaunchFeed;

#[derive(Debug, thiserror::Error)]
#[error("HTTP {0}")]
pub struct StatusError(pub u16);

/// Serves a fixed launch list, or fails every call with a fixed status.
#[derive(Default)]
pub struct FakeSource {
  pub launches: Vec<LaunchDto>,
  pub fail:     Option<u16>,
  calls:        AtomicUsize,
}

impl FakeSource {
  pub fn with(launches: Vec<LaunchDto>) -> Self {
    Self { launches, ..Default::default() }
  }

  pub fn failing(code: u16) -> Self {
    Self { launches: sample(), fail: Some(code), ..Default::default() }
  }

  pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }

  fn check(&self) -> Result<(), StatusError> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    self.fail.map_or(Ok(()), |code| Err(StatusError(code)))
  }
}

impl LaunchSource for FakeSource {
  type Error = StatusError;

  async fn latest(&self) -> Result<Option<LaunchDto>, StatusError> {
    self.check()?;
    Ok(
      self
        .launches
        .iter()
        .filter(|d| !d.upcoming)
        .max_by_key(|d| d.date_unix)
        .cloned(),
    )
  }

  async fn upcoming(&self) -> Result<Vec<LaunchDto>, StatusError> {
    self.check()?;
    Ok(self.launches.iter().filter(|d| d.upcoming).cloned().collect())
  }

  async fn past(&self) -> Result<Vec<LaunchDto>, StatusError> {
    self.check()?;
    Ok(self.launches.iter().filter(|d| !d.upcoming).cloned().collect())
  }
}

pub fn dto(flight_number: i64, date_unix: i64, upcoming: bool) -> LaunchDto {
  LaunchDto {
    flight_number,
    name: format!("Flight {flight_number}"),
    id: format!("id-{flight_number}"),
    date_unix,
    details: None,
    upcoming,
    success: None,
    rocket: None,
    links: LinksDto::default(),
  }
}

/// Two past launches and one upcoming.
pub fn sample() -> Vec<LaunchDto> {
  vec![dto(1, 100, false), dto(2, 200, false), dto(3, 300, true)]
}

pub async fn feed(source: FakeSource) -> Arc<LaunchFeed<SqliteStore, FakeSource>> {
  let store = SqliteStore::open_in_memory().await.unwrap();
  Arc::new(LaunchFeed::new(Arc::new(Repository::new(store, source))))
}
