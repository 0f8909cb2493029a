//! Encoding and decoding helpers between [`LaunchRecord`] and the plain
//! column representations stored in SQLite.
//!
//! Booleans are stored as integers. The ordered photo list is stored as a
//! compact JSON array so URLs round-trip regardless of their contents.

use launchpad_core::LaunchRecord;

use crate::Result;

/// Separator used by rows written before the JSON encoding.
const LEGACY_DELIMITER: char = '^';

// ─── Photo list ──────────────────────────────────────────────────────────────

pub fn encode_images(images: &[String]) -> Result<String> {
  Ok(serde_json::to_string(images)?)
}

pub fn decode_images(s: &str) -> Result<Vec<String>> {
  if s.starts_with('[') {
    return Ok(serde_json::from_str(s)?);
  }
  if s.is_empty() {
    return Ok(Vec::new());
  }
  Ok(s.split(LEGACY_DELIMITER).map(str::to_owned).collect())
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Column list shared by every `SELECT`, in [`RawLaunch`] field order.
pub const COLUMNS: &str = "flight_number, name, mission_id, date_unix, details, \
   upcoming, success, rocket_id, mission_patch_large, mission_patch_small, \
   reddit_url, article_url, wiki_url, webcast_url, flickr_images";

/// Values read directly from a `launches` row.
pub struct RawLaunch {
  pub flight_number:       i64,
  pub name:                String,
  pub mission_id:          String,
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
  pub flickr_images:       Option<String>,
}

impl RawLaunch {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      flight_number:       row.get(0)?,
      name:                row.get(1)?,
      mission_id:          row.get(2)?,
      date_unix:           row.get(3)?,
      details:             row.get(4)?,
      upcoming:            row.get(5)?,
      success:             row.get(6)?,
      rocket_id:           row.get(7)?,
      mission_patch_large: row.get(8)?,
      mission_patch_small: row.get(9)?,
      reddit_url:          row.get(10)?,
      article_url:         row.get(11)?,
      wiki_url:            row.get(12)?,
      webcast_url:         row.get(13)?,
      flickr_images:       row.get(14)?,
    })
  }

  pub fn into_record(self) -> Result<LaunchRecord> {
    let flickr_images = self.flickr_images.as_deref().map(decode_images).transpose()?;

    Ok(LaunchRecord {
      flight_number: self.flight_number,
      name: self.name,
      mission_id: self.mission_id,
      date_unix: self.date_unix,
      details: self.details,
      upcoming: self.upcoming,
      success: self.success,
      rocket_id: self.rocket_id,
      mission_patch_large: self.mission_patch_large,
      mission_patch_small: self.mission_patch_small,
      reddit_url: self.reddit_url,
      article_url: self.article_url,
      wiki_url: self.wiki_url,
      webcast_url: self.webcast_url,
      flickr_images,
    })
  }
}

/// Owned column values for one `INSERT OR REPLACE`, ready to move into a
/// `tokio_rusqlite` closure.
pub struct RowParams {
  pub record:        LaunchRecord,
  pub flickr_images: Option<String>,
}

impl RowParams {
  pub fn new(record: &LaunchRecord) -> Result<Self> {
    let flickr_images = record
      .flickr_images
      .as_deref()
      .map(encode_images)
      .transpose()?;
    Ok(Self { record: record.clone(), flickr_images })
  }

  pub fn insert(&self, conn: &rusqlite::Connection) -> rusqlite::Result<usize> {
    let r = &self.record;
    conn.execute(
      "INSERT OR REPLACE INTO launches (
         flight_number, name, mission_id, date_unix, details,
         upcoming, success, rocket_id, mission_patch_large, mission_patch_small,
         reddit_url, article_url, wiki_url, webcast_url, flickr_images
       ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
      rusqlite::params![
        r.flight_number,
        r.name,
        r.mission_id,
        r.date_unix,
        r.details,
        r.upcoming,
        r.success,
        r.rocket_id,
        r.mission_patch_large,
        r.mission_patch_small,
        r.reddit_url,
        r.article_url,
        r.wiki_url,
        r.webcast_url,
        self.flickr_images,
      ],
    )
  }
}
