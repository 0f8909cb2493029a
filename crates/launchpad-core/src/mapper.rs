//! DTO → record flattening. Pure and total: no validation, no error path.

use crate::{dto::LaunchDto, launch::LaunchRecord};

pub fn to_records(dtos: &[LaunchDto]) -> Vec<LaunchRecord> {
  dtos.iter().map(to_record).collect()
}

pub fn to_record(dto: &LaunchDto) -> LaunchRecord {
  let links = &dto.links;

  // Thumbnails first; fall back to full-size originals.
  let flickr = if links.flickr.small.is_empty() {
    &links.flickr.original
  } else {
    &links.flickr.small
  };

  LaunchRecord {
    flight_number:       dto.flight_number,
    name:                dto.name.clone(),
    mission_id:          dto.id.clone(),
    date_unix:           dto.date_unix,
    details:             dto.details.clone(),
    upcoming:            dto.upcoming,
    success:             dto.success,
    rocket_id:           dto.rocket.clone(),
    mission_patch_large: links.patch.large.clone(),
    mission_patch_small: links.patch.small.clone(),
    reddit_url:          links.reddit.campaign.clone(),
    article_url:         links.article.clone(),
    wiki_url:            links.wikipedia.clone(),
    webcast_url:         links.webcast.clone(),
    flickr_images:       Some(flickr.clone()),
  }
}
