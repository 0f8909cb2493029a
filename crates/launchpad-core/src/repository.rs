//! [`Repository`] — cache-aside access to launch data.
//!
//! Every read checks the local cache first. On a miss the remote source is
//! called, the DTOs are mapped and sorted, written back to the cache, and
//! returned. Remote failures propagate untouched and leave the cache as it
//! was; nothing is retried.

use tracing::{debug, info};

use crate::{
  Error, Result,
  launch::LaunchRecord,
  mapper,
  store::{LaunchCache, LaunchSource},
};

/// Cache-aside repository over a [`LaunchCache`] and a [`LaunchSource`].
pub struct Repository<C, S> {
  cache:  C,
  source: S,
}

impl<C: LaunchCache, S: LaunchSource> Repository<C, S> {
  pub fn new(cache: C, source: S) -> Self { Self { cache, source } }

  pub fn cache(&self) -> &C { &self.cache }

  pub fn source(&self) -> &S { &self.source }

  /// The latest past launch, fetching it if nothing is cached.
  pub async fn latest(&self) -> Result<Option<LaunchRecord>> {
    if let Some(cached) = self.cache.latest().await.map_err(Error::cache)? {
      return Ok(Some(cached));
    }

    debug!(query = "latest", "cache miss, fetching from remote");
    let Some(dto) = self.source.latest().await.map_err(Error::remote)? else {
      return Ok(None);
    };

    let record = mapper::to_record(&dto);
    self.cache.upsert(&record).await.map_err(Error::cache)?;
    info!(query = "latest", flight = record.flight_number, "cached launch");
    Ok(Some(record))
  }

  /// Upcoming launches, ascending by date.
  pub async fn upcoming(&self) -> Result<Vec<LaunchRecord>> {
    let cached = self.cache.upcoming().await.map_err(Error::cache)?;
    // A single cached row is treated as a miss and refetched.
    if cached.len() > 1 {
      return Ok(cached);
    }

    debug!(query = "upcoming", cached = cached.len(), "cache miss, fetching from remote");
    let dtos = self.source.upcoming().await.map_err(Error::remote)?;
    let mut records = mapper::to_records(&dtos);
    records.sort_by_key(|r| r.date_unix);

    self.store(records, "upcoming").await
  }

  /// Past launches, descending by date.
  pub async fn past(&self) -> Result<Vec<LaunchRecord>> {
    let cached = self.cache.past().await.map_err(Error::cache)?;
    // A single cached row is treated as a miss and refetched.
    if cached.len() > 1 {
      return Ok(cached);
    }

    debug!(query = "past", cached = cached.len(), "cache miss, fetching from remote");
    let dtos = self.source.past().await.map_err(Error::remote)?;
    let mut records = mapper::to_records(&dtos);
    records.sort_by_key(|r| std::cmp::Reverse(r.date_unix));

    self.store(records, "past").await
  }

  /// Drop every cached record.
  pub async fn clear(&self) -> Result<()> {
    self.cache.delete_all().await.map_err(Error::cache)?;
    info!("launch cache cleared");
    Ok(())
  }

  async fn store(&self, records: Vec<LaunchRecord>, query: &'static str) -> Result<Vec<LaunchRecord>> {
    self.cache.upsert_all(&records).await.map_err(Error::cache)?;
    info!(query, count = records.len(), "cached launches");
    Ok(records)
  }
}
