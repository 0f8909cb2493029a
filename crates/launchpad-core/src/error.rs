//! Error types for `launchpad-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The local cache failed to read or write.
  #[error("cache error: {0}")]
  Cache(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// The remote API call failed, including non-2xx responses.
  #[error("remote error: {0}")]
  Remote(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn cache(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Cache(Box::new(e))
  }

  pub fn remote(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Remote(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
