//! SQL schema for the Launchpad SQLite cache.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per launch. Rows are replaced wholesale on upsert, never updated.
CREATE TABLE IF NOT EXISTS launches (
    flight_number        INTEGER PRIMARY KEY,
    name                 TEXT    NOT NULL,
    mission_id           TEXT    NOT NULL,
    date_unix            INTEGER NOT NULL,   -- UNIX seconds
    details              TEXT,
    upcoming             INTEGER NOT NULL,   -- 0 | 1
    success              INTEGER,            -- 0 | 1 | NULL (unknown)
    rocket_id            TEXT,
    mission_patch_large  TEXT,
    mission_patch_small  TEXT,
    reddit_url           TEXT,
    article_url          TEXT,
    wiki_url             TEXT,
    webcast_url          TEXT,
    flickr_images        TEXT                -- JSON array or NULL
);

CREATE INDEX IF NOT EXISTS launches_upcoming_date_idx ON launches(upcoming, date_unix);

PRAGMA user_version = 1;
";
