use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};

// Main Team model - field names match the stored documents EXACTLY
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "LogoUrl", default)]
    pub logo_url: String,

    #[serde(default)]
    pub draw: i64,

    #[serde(default)]
    pub ga: i64,

    #[serde(default)]
    pub gf: i64,

    #[serde(default)]
    pub lost: i64,

    pub name: String,

    #[serde(default)]
    pub name_mm: String,

    #[serde(default)]
    pub played: i64,

    #[serde(default)]
    pub won: i64,
}

// Stored `_id` goes out as `id` on the wire
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: String,
    #[serde(rename = "LogoUrl")]
    pub logo_url: String,
    pub draw: i64,
    pub ga: i64,
    pub gf: i64,
    pub lost: i64,
    pub name: String,
    pub name_mm: String,
    pub played: i64,
    pub won: i64,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        TeamResponse {
            id: team.id,
            logo_url: team.logo_url,
            draw: team.draw,
            ga: team.ga,
            gf: team.gf,
            lost: team.lost,
            name: team.name,
            name_mm: team.name_mm,
            played: team.played,
            won: team.won,
        }
    }
}

// For creating new teams - missing fields fall back to "" / 0
#[derive(Debug, Deserialize)]
pub struct CreateTeam {
    #[serde(rename = "LogoUrl", default)]
    pub logo_url: String,
    #[serde(default)]
    pub draw: i64,
    #[serde(default)]
    pub ga: i64,
    #[serde(default)]
    pub gf: i64,
    #[serde(default)]
    pub lost: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub name_mm: String,
    #[serde(default)]
    pub played: i64,
    #[serde(default)]
    pub won: i64,
}

// Sparse update - only fields present in the body end up in the patch
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTeam {
    #[serde(rename = "LogoUrl")]
    pub logo_url: Option<String>,
    pub draw: Option<i64>,
    pub ga: Option<i64>,
    pub gf: Option<i64>,
    pub lost: Option<i64>,
    pub name: Option<String>,
    pub name_mm: Option<String>,
    pub played: Option<i64>,
    pub won: Option<i64>,
}

impl UpdateTeam {
    pub fn into_patch(self) -> Document {
        let mut patch = doc! {};
        if let Some(logo_url) = self.logo_url {
            patch.insert("LogoUrl", logo_url);
        }
        if let Some(draw) = self.draw {
            patch.insert("draw", draw);
        }
        if let Some(ga) = self.ga {
            patch.insert("ga", ga);
        }
        if let Some(gf) = self.gf {
            patch.insert("gf", gf);
        }
        if let Some(lost) = self.lost {
            patch.insert("lost", lost);
        }
        if let Some(name) = self.name {
            patch.insert("name", name);
        }
        if let Some(name_mm) = self.name_mm {
            patch.insert("name_mm", name_mm);
        }
        if let Some(played) = self.played {
            patch.insert("played", played);
        }
        if let Some(won) = self.won {
            patch.insert("won", won);
        }
        patch
    }
}
