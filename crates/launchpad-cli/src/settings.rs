//! Runtime settings, layered from built-in defaults, an optional TOML file,
//! and `LAUNCHPAD_*` environment variables (later sources win).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::client::DEFAULT_BASE_URL;

/// Everything the composition root needs to wire the app together.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  /// Root of the launch API, e.g. `https://api.spacexdata.com/v4/`.
  pub base_url:     String,
  /// SQLite cache file.
  pub db_path:      PathBuf,
  /// Where the TUI writes its log (stderr is owned by the terminal).
  pub log_file:     PathBuf,
  /// Per-request HTTP timeout.
  pub timeout_secs: u64,
}

impl Settings {
  /// Load settings, treating a missing `path` as "defaults only".
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    let mut settings: Settings = config::Config::builder()
      .set_default("base_url", DEFAULT_BASE_URL)?
      .set_default("db_path", "~/.local/share/launchpad/launches.db")?
      .set_default("log_file", "launchpad.log")?
      .set_default("timeout_secs", 30_i64)?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("LAUNCHPAD"))
      .build()?
      .try_deserialize()?;

    settings.db_path = expand_tilde(&settings.db_path);
    settings.log_file = expand_tilde(&settings.log_file);
    Ok(settings)
  }

  /// Apply command-line flags, which take precedence over every other layer.
  pub fn apply_overrides(&mut self, url: Option<String>, db: Option<PathBuf>) {
    if let Some(url) = url {
      self.base_url = url;
    }
    if let Some(db) = db {
      self.db_path = expand_tilde(&db);
    }
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
