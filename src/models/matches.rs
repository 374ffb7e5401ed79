use std::sync::LazyLock;

use mongodb::bson::{doc, Document};
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const ALLOWED_STATUSES: [&str; 3] = ["ongoing", "upcoming", "finished"];

// Dates are stored as DD-MM-YYYY strings, not native dates, so existing
// documents stay readable
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}-\d{2}-\d{4}$").unwrap());

pub fn is_valid_date(date: &str) -> bool {
    DATE_RE.is_match(date)
}

pub fn is_valid_status(status: &str) -> bool {
    ALLOWED_STATUSES.contains(&status)
}

// Main Match model - field names match the stored documents EXACTLY
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "awayScore", default)]
    pub away_score: i64,

    #[serde(rename = "awayTeamId", default)]
    pub away_team_id: String,

    pub date: String, // DD-MM-YYYY

    #[serde(rename = "homeScore", default)]
    pub home_score: i64,

    #[serde(rename = "homeTeamId", default)]
    pub home_team_id: String,

    pub status: String, // "upcoming", "ongoing", "finished"

    #[serde(default)]
    pub time: String,

    #[serde(rename = "matchId", default)]
    pub match_id: String,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub id: String,
    #[serde(rename = "awayScore")]
    pub away_score: i64,
    #[serde(rename = "awayTeamId")]
    pub away_team_id: String,
    pub date: String,
    #[serde(rename = "homeScore")]
    pub home_score: i64,
    #[serde(rename = "homeTeamId")]
    pub home_team_id: String,
    pub status: String,
    pub time: String,
    #[serde(rename = "matchId")]
    pub match_id: String,
}

impl From<Match> for MatchResponse {
    fn from(m: Match) -> Self {
        MatchResponse {
            id: m.id,
            away_score: m.away_score,
            away_team_id: m.away_team_id,
            date: m.date,
            home_score: m.home_score,
            home_team_id: m.home_team_id,
            status: m.status,
            time: m.time,
            match_id: m.match_id,
        }
    }
}

fn default_status() -> String {
    "upcoming".to_string()
}

fn default_time() -> String {
    "00:00".to_string()
}

#[derive(Debug, Deserialize)]
pub struct CreateMatch {
    #[serde(rename = "awayScore", default)]
    pub away_score: i64,
    #[serde(rename = "awayTeamId", default)]
    pub away_team_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(rename = "homeScore", default)]
    pub home_score: i64,
    #[serde(rename = "homeTeamId", default)]
    pub home_team_id: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_time")]
    pub time: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateMatch {
    #[serde(rename = "awayScore")]
    pub away_score: Option<i64>,
    #[serde(rename = "awayTeamId")]
    pub away_team_id: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "homeScore")]
    pub home_score: Option<i64>,
    #[serde(rename = "homeTeamId")]
    pub home_team_id: Option<String>,
    pub status: Option<String>,
    pub time: Option<String>,
}

impl UpdateMatch {
    pub fn into_patch(self) -> Document {
        let mut patch = doc! {};
        if let Some(away_score) = self.away_score {
            patch.insert("awayScore", away_score);
        }
        if let Some(away_team_id) = self.away_team_id {
            patch.insert("awayTeamId", away_team_id);
        }
        if let Some(date) = self.date {
            patch.insert("date", date);
        }
        if let Some(home_score) = self.home_score {
            patch.insert("homeScore", home_score);
        }
        if let Some(home_team_id) = self.home_team_id {
            patch.insert("homeTeamId", home_team_id);
        }
        if let Some(status) = self.status {
            patch.insert("status", status);
        }
        if let Some(time) = self.time {
            patch.insert("time", time);
        }
        patch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_format_accepts_dd_mm_yyyy_only() {
        assert!(is_valid_date("01-01-2024"));
        assert!(is_valid_date("31-12-1999"));
        assert!(!is_valid_date("2024-01-01"));
        assert!(!is_valid_date("1-01-2024"));
        assert!(!is_valid_date("01-01-24"));
        assert!(!is_valid_date("01/01/2024"));
        assert!(!is_valid_date(""));
    }

    #[test]
    fn status_whitelist() {
        for s in ["upcoming", "ongoing", "finished"] {
            assert!(is_valid_status(s));
        }
        assert!(!is_valid_status("live"));
        assert!(!is_valid_status("Upcoming"));
    }

    #[test]
    fn create_match_defaults_status_and_time() {
        let m: CreateMatch = serde_json::from_str(
            r#"{"homeTeamId":"h","awayTeamId":"a","date":"01-01-2024"}"#,
        )
        .unwrap();
        assert_eq!(m.status, "upcoming");
        assert_eq!(m.time, "00:00");
        assert_eq!(m.home_score, 0);
        assert_eq!(m.away_score, 0);
    }

    #[test]
    fn update_patch_uses_wire_field_names() {
        let update: UpdateMatch =
            serde_json::from_str(r#"{"homeScore":2,"status":"finished"}"#).unwrap();
        let patch = update.into_patch();
        assert_eq!(patch.len(), 2);
        assert_eq!(patch.get_i64("homeScore").unwrap(), 2);
        assert_eq!(patch.get_str("status").unwrap(), "finished");
    }
}
