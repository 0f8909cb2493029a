//! The `LaunchCache` and `LaunchSource` traits.
//!
//! `LaunchCache` is implemented by storage backends (e.g.
//! `launchpad-store-sqlite`); `LaunchSource` by the remote API client. The
//! [`Repository`](crate::repository::Repository) depends on these
//! abstractions, not on any concrete backend.

use std::future::Future;

use crate::{dto::LaunchDto, launch::LaunchRecord};

// ─── Cache ───────────────────────────────────────────────────────────────────

/// Local persistent cache of launch records, keyed by `flight_number`.
///
/// All methods return `Send` futures so the trait can be driven from spawned
/// tokio tasks.
pub trait LaunchCache: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Canned queries ────────────────────────────────────────────────────

  /// The non-upcoming record with the greatest `date_unix`.
  fn latest(
    &self,
  ) -> impl Future<Output = Result<Option<LaunchRecord>, Self::Error>> + Send + '_;

  /// All upcoming records, ascending by `date_unix`.
  fn upcoming(
    &self,
  ) -> impl Future<Output = Result<Vec<LaunchRecord>, Self::Error>> + Send + '_;

  /// All non-upcoming records, descending by `date_unix`.
  fn past(
    &self,
  ) -> impl Future<Output = Result<Vec<LaunchRecord>, Self::Error>> + Send + '_;

  /// Total number of cached records.
  fn count(&self) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Insert `record`, replacing any existing row with the same flight number.
  fn upsert<'a>(
    &'a self,
    record: &'a LaunchRecord,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Bulk form of [`upsert`](Self::upsert).
  fn upsert_all<'a>(
    &'a self,
    records: &'a [LaunchRecord],
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Remove every cached record.
  fn delete_all(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}

// ─── Remote ──────────────────────────────────────────────────────────────────

/// Read-only remote source of launch DTOs.
pub trait LaunchSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// The most recent launch. `None` if the API answered with an empty body.
  fn latest(
    &self,
  ) -> impl Future<Output = Result<Option<LaunchDto>, Self::Error>> + Send + '_;

  fn upcoming(
    &self,
  ) -> impl Future<Output = Result<Vec<LaunchDto>, Self::Error>> + Send + '_;

  fn past(&self) -> impl Future<Output = Result<Vec<LaunchDto>, Self::Error>> + Send + '_;
}
