//! Document ID assignment.
//!
//! One strategy per entity: teams and players get store-generated ObjectId
//! keys (players with the league prefix), matches and news get
//! daily-sequential keys. The per-day sequence comes from an atomic
//! `$inc` upsert on a counter document, so two concurrent creates on the
//! same date can never compute the same number.

use chrono::{DateTime, Utc};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use serde::Deserialize;

use crate::errors::{AppError, Result};

const COUNTERS_COLLECTION: &str = "counters";

pub const PLAYER_ID_PREFIX: &str = "hkpl_";

#[derive(Debug, Deserialize)]
struct Counter {
    seq: i64,
}

/// Atomically increments and returns the counter stored under `key`,
/// creating it at 1 on first use.
pub async fn next_daily_sequence(db: &Database, key: &str) -> Result<i64> {
    let counters: Collection<Counter> = db.collection(COUNTERS_COLLECTION);

    let counter = counters
        .find_one_and_update(doc! { "_id": key }, doc! { "$inc": { "seq": 1_i64 } })
        .upsert(true)
        .return_document(ReturnDocument::After)
        .await?
        .ok_or_else(|| {
            AppError::Internal(format!("counter '{}' missing after upsert", key))
        })?;

    Ok(counter.seq)
}

pub fn team_id() -> String {
    ObjectId::new().to_hex()
}

pub fn player_id() -> String {
    format!("{}{}", PLAYER_ID_PREFIX, ObjectId::new().to_hex())
}

/// `<DDMMYYYY>-<NN>` from a DD-MM-YYYY date string and a sequence number.
pub fn match_id(date_ddmmyyyy: &str, seq: i64) -> String {
    format!("{}-{:02}", date_ddmmyyyy.replace('-', ""), seq)
}

/// `<YYYYMMDD>-<NN>` over the given (UTC) creation time.
pub fn news_id(created_at: DateTime<Utc>, seq: i64) -> String {
    format!("{}-{:02}", created_at.format("%Y%m%d"), seq)
}

pub fn match_counter_key(date_ddmmyyyy: &str) -> String {
    format!("matches-{}", date_ddmmyyyy)
}

pub fn news_counter_key(created_at: DateTime<Utc>) -> String {
    format!("news-{}", created_at.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn match_id_strips_hyphens_and_pads() {
        assert_eq!(match_id("25-12-2024", 1), "25122024-01");
        assert_eq!(match_id("01-01-2024", 12), "01012024-12");
        assert_eq!(match_id("01-01-2024", 100), "01012024-100");
    }

    #[test]
    fn news_id_uses_utc_date() {
        let created = Utc.with_ymd_and_hms(2024, 1, 5, 23, 59, 0).unwrap();
        assert_eq!(news_id(created, 3), "20240105-03");
    }

    #[test]
    fn player_id_carries_league_prefix() {
        let id = player_id();
        assert!(id.starts_with("hkpl_"));
        assert_eq!(id.len(), PLAYER_ID_PREFIX.len() + 24);
    }

    #[test]
    fn counter_keys_are_per_date() {
        assert_eq!(match_counter_key("25-12-2024"), "matches-25-12-2024");
        let created = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
        assert_eq!(news_counter_key(created), "news-2024-01-05");
    }
}
