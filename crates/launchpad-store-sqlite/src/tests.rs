//! Integration tests for `SqliteStore` against an in-memory database.

use launchpad_core::{LaunchRecord, store::LaunchCache};

use crate::{SqliteStore, encode::decode_images};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn launch(flight_number: i64, date_unix: i64, upcoming: bool) -> LaunchRecord {
  LaunchRecord {
    flight_number,
    date_unix,
    upcoming,
    success: (!upcoming).then_some(true),
    ..LaunchRecord::preview(&format!("Flight {flight_number}"))
  }
}

fn flights(records: &[LaunchRecord]) -> Vec<i64> {
  records.iter().map(|r| r.flight_number).collect()
}

// unix dates: past = jan 20, latest = jan 31, upcoming = feb 12
fn seed() -> Vec<LaunchRecord> {
  vec![
    launch(2, 1_612_137_600, false),
    launch(3, 1_613_137_600, true),
    launch(1, 1_611_137_600, false),
  ]
}

// ─── Canned queries ──────────────────────────────────────────────────────────

#[tokio::test]
async fn latest_is_newest_past_launch() {
  let s = store().await;
  s.upsert_all(&seed()).await.unwrap();

  let latest = s.latest().await.unwrap().unwrap();
  assert_eq!(latest, seed()[0]);
}

#[tokio::test]
async fn latest_on_empty_store_is_none() {
  let s = store().await;
  assert!(s.latest().await.unwrap().is_none());
}

#[tokio::test]
async fn latest_ignores_upcoming() {
  let s = store().await;
  s.upsert(&launch(3, 1_613_137_600, true)).await.unwrap();
  assert!(s.latest().await.unwrap().is_none());
}

#[tokio::test]
async fn upcoming_ascending() {
  let s = store().await;
  s.upsert_all(&seed()).await.unwrap();
  s.upsert(&launch(4, 1_612_500_000, true)).await.unwrap();

  let upcoming = s.upcoming().await.unwrap();
  assert_eq!(flights(&upcoming), [4, 3]);
  assert!(upcoming.iter().all(|r| r.upcoming));
}

#[tokio::test]
async fn past_descending() {
  let s = store().await;
  s.upsert_all(&seed()).await.unwrap();

  let past = s.past().await.unwrap();
  assert_eq!(flights(&past), [2, 1]);
  assert_eq!(past[0], seed()[0]);
  assert_eq!(past[1], seed()[2]);
}

// ─── Writes ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn upsert_same_id_replaces() {
  let s = store().await;
  s.upsert(&launch(1, 100, false)).await.unwrap();

  let mut renamed = launch(1, 200, false);
  renamed.name = "Renamed".into();
  s.upsert(&renamed).await.unwrap();

  assert_eq!(s.count().await.unwrap(), 1);
  let past = s.past().await.unwrap();
  assert_eq!(past[0].name, "Renamed");
  assert_eq!(past[0].date_unix, 200);
}

#[tokio::test]
async fn upsert_all_replaces_within_batch() {
  let s = store().await;
  s.upsert_all(&seed()).await.unwrap();
  s.upsert_all(&seed()).await.unwrap();
  assert_eq!(s.count().await.unwrap(), 3);
}

#[tokio::test]
async fn delete_all_empties_every_query() {
  let s = store().await;
  s.upsert_all(&seed()).await.unwrap();

  s.delete_all().await.unwrap();

  assert_eq!(s.count().await.unwrap(), 0);
  assert!(s.latest().await.unwrap().is_none());
  assert!(s.upcoming().await.unwrap().is_empty());
  assert!(s.past().await.unwrap().is_empty());
}

// ─── Column encoding ─────────────────────────────────────────────────────────

#[tokio::test]
async fn record_round_trips_all_fields() {
  let s = store().await;
  let mut r = LaunchRecord::preview("Starlink");
  r.flight_number = 42;
  r.success = None;
  r.details = None;
  r.upcoming = true;
  s.upsert(&r).await.unwrap();

  assert_eq!(s.upcoming().await.unwrap(), vec![r]);
}

#[tokio::test]
async fn photo_list_none_and_empty_are_distinct() {
  let s = store().await;
  let mut none = launch(1, 100, false);
  none.flickr_images = None;
  let mut empty = launch(2, 200, false);
  empty.flickr_images = Some(vec![]);
  s.upsert_all(&[none, empty]).await.unwrap();

  let past = s.past().await.unwrap();
  assert_eq!(past[0].flickr_images, Some(vec![]));
  assert_eq!(past[1].flickr_images, None);
}

#[tokio::test]
async fn photo_urls_containing_legacy_delimiter_survive() {
  let s = store().await;
  let mut r = launch(1, 100, false);
  r.flickr_images = Some(vec!["https://x/a^b.jpg".into(), "https://x/c.jpg".into()]);
  s.upsert(&r).await.unwrap();

  let latest = s.latest().await.unwrap().unwrap();
  assert_eq!(latest.flickr_images, r.flickr_images);
}

#[test]
fn legacy_delimited_rows_decode() {
  assert_eq!(
    decode_images("https://x/1.jpg^https://x/2.jpg").unwrap(),
    vec!["https://x/1.jpg".to_string(), "https://x/2.jpg".to_string()],
  );
  assert!(decode_images("").unwrap().is_empty());
  assert_eq!(decode_images(r#"["a"]"#).unwrap(), vec!["a".to_string()]);
}
