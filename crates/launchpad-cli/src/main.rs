//! `launchpad` — terminal UI for SpaceX launch data.
//!
//! # Usage
//!
//! ```text
//! launchpad                          # interactive TUI
//! launchpad fetch past --json        # print cached-or-fetched launches
//! launchpad clear-cache
//! launchpad --config ~/.config/launchpad/launchpad.toml
//! ```

mod app;
mod client;
mod feed;
mod gallery;
mod settings;
mod ui;

#[cfg(test)]
mod testing;

use std::{
  fs::OpenOptions,
  io,
  path::{Path, PathBuf},
  sync::{Arc, Mutex},
  time::Duration,
};

use anyhow::{Context, Result};
use app::App;
use clap::{Parser, Subcommand, ValueEnum};
use client::{ApiConfig, SpaceXClient};
use crossterm::{
  event::{self, Event},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use feed::LaunchFeed;
use launchpad_core::{
  LaunchKind, LaunchRecord, Repository,
  store::{LaunchCache, LaunchSource},
};
use launchpad_store_sqlite::SqliteStore;
use ratatui::{Terminal, backend::CrosstermBackend};
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "launchpad", version, about = "Browse SpaceX launches from the terminal")]
struct Args {
  /// Path to a TOML config file (base_url, db_path, log_file, timeout_secs).
  #[arg(short, long, value_name = "FILE", default_value = "launchpad.toml")]
  config: PathBuf,

  /// Base URL of the launch API; overrides the config file.
  #[arg(long)]
  url: Option<String>,

  /// SQLite cache file; overrides the config file.
  #[arg(long, value_name = "FILE")]
  db: Option<PathBuf>,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Run the interactive terminal UI (the default).
  Tui,

  /// Print launches of one kind, fetching them if the cache misses.
  Fetch {
    #[arg(value_enum)]
    kind: KindArg,

    /// Emit JSON instead of one summary line per launch.
    #[arg(long)]
    json: bool,
  },

  /// Delete every cached launch.
  ClearCache,

  /// Print the built-in sample launch.
  Preview {
    #[arg(long)]
    json: bool,
  },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KindArg {
  Latest,
  Upcoming,
  Past,
}

impl From<KindArg> for LaunchKind {
  fn from(k: KindArg) -> Self {
    match k {
      KindArg::Latest => LaunchKind::Latest,
      KindArg::Upcoming => LaunchKind::Upcoming,
      KindArg::Past => LaunchKind::Past,
    }
  }
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  let mut settings = Settings::load(&args.config)
    .with_context(|| format!("reading config file {}", args.config.display()))?;

  settings.apply_overrides(args.url, args.db);

  let command = args.command.unwrap_or(Command::Tui);

  // The TUI owns the terminal, so its logs go to a file.
  let log_file = matches!(command, Command::Tui).then_some(settings.log_file.as_path());
  init_tracing(log_file)?;

  // Composition root: store → client → repository.
  if let Some(parent) = settings.db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("creating {}", parent.display()))?;
  }
  let store = SqliteStore::open(&settings.db_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", settings.db_path))?;

  let client = SpaceXClient::new(ApiConfig {
    base_url: settings.base_url.clone(),
    timeout:  Duration::from_secs(settings.timeout_secs),
  })
  .context("failed to build HTTP client")?;

  let repo = Arc::new(Repository::new(store, client));
  tracing::info!(base_url = %settings.base_url, db = ?settings.db_path, "launchpad starting");

  match command {
    Command::Fetch { kind, json } => {
      let launches = fetch(&repo, kind.into()).await?;
      if launches.is_empty() {
        eprintln!("No launches found.");
      }
      print_launches(&launches, json)
    }
    Command::ClearCache => {
      repo.clear().await.context("clearing cache")?;
      println!("Cache cleared.");
      Ok(())
    }
    Command::Preview { json } => print_launches(&[LaunchRecord::preview("Starlink Launch")], json),
    Command::Tui => run_tui(repo).await,
  }
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();
  let builder = tracing_subscriber::fmt().with_env_filter(filter);

  match log_file {
    Some(path) => {
      let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
      builder.with_ansi(false).with_writer(Mutex::new(file)).init();
    }
    None => builder.with_writer(io::stderr).init(),
  }
  Ok(())
}

// ─── Debug subcommands ────────────────────────────────────────────────────────

async fn fetch<C, S>(repo: &Repository<C, S>, kind: LaunchKind) -> Result<Vec<LaunchRecord>>
where
  C: LaunchCache,
  S: LaunchSource,
{
  let launches = match kind {
    LaunchKind::Latest => repo.latest().await?.into_iter().collect(),
    LaunchKind::Upcoming => repo.upcoming().await?,
    LaunchKind::Past => repo.past().await?,
  };
  Ok(launches)
}

fn print_launches(launches: &[LaunchRecord], json: bool) -> Result<()> {
  if json {
    println!("{}", serde_json::to_string_pretty(launches)?);
    return Ok(());
  }
  for launch in launches {
    println!("{:<32} {}", launch.name, launch.meta_line());
  }
  Ok(())
}

// ─── TUI ──────────────────────────────────────────────────────────────────────

async fn run_tui<C, S>(repo: Arc<Repository<C, S>>) -> Result<()>
where
  C: LaunchCache + 'static,
  S: LaunchSource + 'static,
{
  let feed = Arc::new(LaunchFeed::new(repo));
  let mut app = App::new(feed);

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  app.select_kind(LaunchKind::Latest);

  // Run the event loop; restore terminal even on error.
  let run_result = run_event_loop(&mut terminal, &mut app).await;

  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

// ─── Event loop ───────────────────────────────────────────────────────────────

async fn run_event_loop<C, S>(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App<C, S>,
) -> Result<()>
where
  C: LaunchCache + 'static,
  S: LaunchSource + 'static,
{
  loop {
    app.sync();
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    if let Some(Event::Key(key)) = maybe_event
      && !app.handle_key(key)
    {
      break;
    }
  }

  Ok(())
}
