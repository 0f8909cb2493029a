//! Wire-format types for the SpaceX v4 launch endpoints.
//!
//! Only the fields Launchpad displays are modelled; everything else in the
//! payload is ignored by serde.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchDto {
  pub flight_number: i64,
  pub name:          String,
  /// The API's opaque launch id; cached as the mission id.
  pub id:            String,
  pub date_unix:     i64,
  #[serde(default)]
  pub details:       Option<String>,
  pub upcoming:      bool,
  #[serde(default)]
  pub success:       Option<bool>,
  #[serde(default)]
  pub rocket:        Option<String>,
  #[serde(default)]
  pub links:         LinksDto,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinksDto {
  #[serde(default)]
  pub patch:     PatchDto,
  #[serde(default)]
  pub reddit:    RedditDto,
  #[serde(default)]
  pub flickr:    FlickrDto,
  #[serde(default)]
  pub article:   Option<String>,
  #[serde(default)]
  pub wikipedia: Option<String>,
  #[serde(default)]
  pub webcast:   Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchDto {
  pub small: Option<String>,
  pub large: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedditDto {
  pub campaign: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlickrDto {
  #[serde(default)]
  pub small:    Vec<String>,
  #[serde(default)]
  pub original: Vec<String>,
}
