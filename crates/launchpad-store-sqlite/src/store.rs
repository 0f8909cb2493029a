//! [`SqliteStore`] — the SQLite implementation of [`LaunchCache`].

use std::path::Path;

use launchpad_core::{LaunchRecord, store::LaunchCache};

use crate::{
  Error, Result,
  encode::{COLUMNS, RawLaunch, RowParams},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A launch cache backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run one of the canned `SELECT`s and decode every row.
  async fn select(&self, tail: &'static str) -> Result<Vec<LaunchRecord>> {
    let raws: Vec<RawLaunch> = self
      .conn
      .call(move |conn| {
        let sql = format!("SELECT {COLUMNS} FROM launches {tail}");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], RawLaunch::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawLaunch::into_record).collect()
  }
}

// ─── LaunchCache impl ────────────────────────────────────────────────────────

impl LaunchCache for SqliteStore {
  type Error = Error;

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn latest(&self) -> Result<Option<LaunchRecord>> {
    let mut rows = self
      .select("WHERE upcoming = 0 ORDER BY date_unix DESC LIMIT 1")
      .await?;
    Ok(rows.pop())
  }

  async fn upcoming(&self) -> Result<Vec<LaunchRecord>> {
    self.select("WHERE upcoming = 1 ORDER BY date_unix ASC").await
  }

  async fn past(&self) -> Result<Vec<LaunchRecord>> {
    self.select("WHERE upcoming = 0 ORDER BY date_unix DESC").await
  }

  async fn count(&self) -> Result<usize> {
    let n: i64 = self
      .conn
      .call(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM launches", [], |r| r.get(0))?))
      .await?;
    Ok(n as usize)
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn upsert(&self, record: &LaunchRecord) -> Result<()> {
    let params = RowParams::new(record)?;

    self
      .conn
      .call(move |conn| {
        params.insert(conn)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn upsert_all(&self, records: &[LaunchRecord]) -> Result<()> {
    let params = records
      .iter()
      .map(RowParams::new)
      .collect::<Result<Vec<_>>>()?;

    let written = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        for p in &params {
          p.insert(&tx)?;
        }
        tx.commit()?;
        Ok(params.len())
      })
      .await?;

    tracing::debug!(written, "upserted launches");
    Ok(())
  }

  async fn delete_all(&self) -> Result<()> {
    let deleted = self
      .conn
      .call(|conn| Ok(conn.execute("DELETE FROM launches", [])?))
      .await?;

    tracing::debug!(deleted, "deleted cached launches");
    Ok(())
  }
}
