//! The launch record — the single entity cached and displayed by Launchpad.
//!
//! A record is a flat, relationship-free snapshot of one launch. Records are
//! created by the [`mapper`](crate::mapper) from network data (or by
//! [`LaunchRecord::preview`]), persisted verbatim, and never mutated after
//! insertion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Record ──────────────────────────────────────────────────────────────────

/// One launch, flattened for storage. `flight_number` is the unique key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchRecord {
  pub flight_number:       i64,
  pub name:                String,
  pub mission_id:          String,
  /// Launch time in UNIX seconds.
  pub date_unix:           i64,
  pub details:             Option<String>,
  pub upcoming:            bool,
  pub success:             Option<bool>,
  pub rocket_id:           Option<String>,
  pub mission_patch_large: Option<String>,
  pub mission_patch_small: Option<String>,
  pub reddit_url:          Option<String>,
  pub article_url:         Option<String>,
  pub wiki_url:            Option<String>,
  pub webcast_url:         Option<String>,
  /// Ordered photo URLs. `None` (unknown) and `Some(vec![])` (none taken) are
  /// kept distinct through the cache.
  pub flickr_images:       Option<Vec<String>>,
}

/// How a launch turned out, as far as the record knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
  Upcoming,
  Success,
  Failure,
}

impl LaunchOutcome {
  pub fn message(self) -> &'static str {
    match self {
      Self::Upcoming => "Upcoming",
      Self::Success => "Successful",
      Self::Failure => "Failed",
    }
  }
}

impl LaunchRecord {
  /// Upcoming wins over the success flag; an unknown result reads as failure.
  pub fn outcome(&self) -> LaunchOutcome {
    if self.upcoming {
      LaunchOutcome::Upcoming
    } else if self.success == Some(true) {
      LaunchOutcome::Success
    } else {
      LaunchOutcome::Failure
    }
  }

  pub fn launch_date(&self) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(self.date_unix, 0)
  }

  /// One-line summary, e.g. `Flight 123 • Successful • 09/29/2013`.
  pub fn meta_line(&self) -> String {
    let date = self
      .launch_date()
      .map(|d| d.format("%m/%d/%Y").to_string())
      .unwrap_or_else(|| "--/--/----".to_string());

    [
      format!("Flight {}", self.flight_number),
      self.outcome().message().to_string(),
      date,
    ]
    .join(" • ")
  }

  /// Outbound links that are present and non-empty, in display order.
  pub fn links(&self) -> Vec<(&'static str, &str)> {
    [
      ("Reddit", self.reddit_url.as_deref()),
      ("Article", self.article_url.as_deref()),
      ("Wikipedia", self.wiki_url.as_deref()),
      ("Webcast", self.webcast_url.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, url)| url.filter(|u| !u.is_empty()).map(|u| (label, u)))
    .collect()
  }

  pub fn has_links(&self) -> bool { !self.links().is_empty() }

  pub fn photo_count(&self) -> usize {
    self.flickr_images.as_ref().map_or(0, Vec::len)
  }

  /// A fully-populated sample record for previews and tests.
  pub fn preview(name: &str) -> Self {
    Self {
      flight_number:       -1,
      name:                name.to_string(),
      mission_id:          "1234567".into(),
      date_unix:           1_612_137_600,
      details:             Some(
        "Axiom Mission 1 (or Ax-1) is a planned SpaceX Crew Dragon mission to \
         the International Space Station (ISS), operated by SpaceX on behalf \
         of Axiom Space."
          .into(),
      ),
      upcoming:            false,
      success:             Some(true),
      rocket_id:           Some("54321".into()),
      mission_patch_large: Some("https://imgur.com/573IfGk.png".into()),
      mission_patch_small: Some("https://imgur.com/BrW201S.png".into()),
      reddit_url:          Some(
        "https://www.reddit.com/r/spacex/comments/jhu37i/starlink_general_discussion_and_deployment_thread/"
          .into(),
      ),
      article_url:         Some(
        "https://spaceflightnow.com/2021/01/08/spacex-deploys-turkish-satellite-in-first-launch-of-2021/"
          .into(),
      ),
      wiki_url:            Some("https://en.wikipedia.org/wiki/T%C3%BCrksat_5A".into()),
      webcast_url:         Some("https://youtu.be/9I0UYXVqIn8".into()),
      flickr_images:       Some(vec![
        "https://live.staticflickr.com/65535/50814482042_476d87b020_o.jpg".into(),
        "https://live.staticflickr.com/65535/50813630408_d98c2215f8_o.jpg".into(),
        "https://live.staticflickr.com/65535/50814379121_8834b5362d_o.jpg".into(),
        "https://live.staticflickr.com/65535/50814379056_f032a23955_o.jpg".into(),
      ]),
    }
  }
}

// ─── Kind ────────────────────────────────────────────────────────────────────

/// The three canned queries, also used as the list screen's type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LaunchKind {
  #[default]
  Latest,
  Upcoming,
  Past,
}

impl LaunchKind {
  pub const ALL: [LaunchKind; 3] = [Self::Latest, Self::Upcoming, Self::Past];

  pub fn label(self) -> &'static str {
    match self {
      Self::Latest => "Latest",
      Self::Upcoming => "Upcoming",
      Self::Past => "Past",
    }
  }

  pub fn next(self) -> Self {
    match self {
      Self::Latest => Self::Upcoming,
      Self::Upcoming => Self::Past,
      Self::Past => Self::Latest,
    }
  }

  pub fn prev(self) -> Self {
    match self {
      Self::Latest => Self::Past,
      Self::Upcoming => Self::Latest,
      Self::Past => Self::Upcoming,
    }
  }
}
