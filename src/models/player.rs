use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};

pub const ALLOWED_POSITIONS: [&str; 4] = ["GK", "DF", "MF", "FW"];

pub fn is_valid_position(position: &str) -> bool {
    ALLOWED_POSITIONS.contains(&position)
}

// Main Player model - field names match the stored documents EXACTLY
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "imageUrl", default)]
    pub image_url: String,

    pub name: String,

    #[serde(default)]
    pub name_en: String,

    #[serde(default)]
    pub number: i64,

    pub position: String, // "GK", "DF", "MF", "FW"

    #[serde(default)]
    pub team_id: String,

    // Optional season counters, absent on older documents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assists: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub id: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub name: String,
    pub name_en: String,
    pub number: i64,
    pub position: String,
    pub team_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assists: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards: Option<i64>,
}

impl From<Player> for PlayerResponse {
    fn from(player: Player) -> Self {
        PlayerResponse {
            id: player.id,
            image_url: player.image_url,
            name: player.name,
            name_en: player.name_en,
            number: player.number,
            position: player.position,
            team_id: player.team_id,
            matches: player.matches,
            goals: player.goals,
            assists: player.assists,
            cards: player.cards,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatePlayer {
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub number: i64,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub team_id: String,
    pub matches: Option<i64>,
    pub goals: Option<i64>,
    pub assists: Option<i64>,
    pub cards: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdatePlayer {
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub name: Option<String>,
    pub name_en: Option<String>,
    pub number: Option<i64>,
    pub position: Option<String>,
    pub team_id: Option<String>,
    pub matches: Option<i64>,
    pub goals: Option<i64>,
    pub assists: Option<i64>,
    pub cards: Option<i64>,
}

impl UpdatePlayer {
    pub fn into_patch(self) -> Document {
        let mut patch = doc! {};
        if let Some(image_url) = self.image_url {
            patch.insert("imageUrl", image_url);
        }
        if let Some(name) = self.name {
            patch.insert("name", name);
        }
        if let Some(name_en) = self.name_en {
            patch.insert("name_en", name_en);
        }
        if let Some(number) = self.number {
            patch.insert("number", number);
        }
        if let Some(position) = self.position {
            patch.insert("position", position);
        }
        if let Some(team_id) = self.team_id {
            patch.insert("team_id", team_id);
        }
        if let Some(matches) = self.matches {
            patch.insert("matches", matches);
        }
        if let Some(goals) = self.goals {
            patch.insert("goals", goals);
        }
        if let Some(assists) = self.assists {
            patch.insert("assists", assists);
        }
        if let Some(cards) = self.cards {
            patch.insert("cards", cards);
        }
        patch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_whitelist() {
        for p in ["GK", "DF", "MF", "FW"] {
            assert!(is_valid_position(p));
        }
        assert!(!is_valid_position("ST"));
        assert!(!is_valid_position("gk"));
        assert!(!is_valid_position(""));
    }

    #[test]
    fn create_player_applies_defaults() {
        let player: CreatePlayer =
            serde_json::from_str(r#"{"name":"Aung","position":"GK","team_id":"t1"}"#).unwrap();
        assert_eq!(player.image_url, "");
        assert_eq!(player.name_en, "");
        assert_eq!(player.number, 0);
        assert!(player.goals.is_none());
    }

    #[test]
    fn update_patch_keeps_only_present_fields() {
        let update: UpdatePlayer =
            serde_json::from_str(r#"{"position":"MF","goals":4}"#).unwrap();
        let patch = update.into_patch();
        assert_eq!(patch.len(), 2);
        assert_eq!(patch.get_str("position").unwrap(), "MF");
        assert_eq!(patch.get_i64("goals").unwrap(), 4);
    }
}
