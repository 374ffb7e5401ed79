use chrono::{DateTime, Utc};
use mongodb::bson::{self, doc, Document};
use serde::{Deserialize, Serialize};

// Main News model - field names match the stored documents EXACTLY
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct News {
    #[serde(rename = "_id")]
    pub id: String,

    pub body: String,

    // Creation timestamp, stored as a native BSON date
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub date: DateTime<Utc>,

    #[serde(rename = "imgUrl", default)]
    pub img_url: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct NewsResponse {
    pub id: String,
    pub body: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "imgUrl")]
    pub img_url: Vec<String>,
    pub tags: Vec<String>,
    pub title: String,
}

impl From<News> for NewsResponse {
    fn from(news: News) -> Self {
        NewsResponse {
            id: news.id,
            body: news.body,
            date: news.date,
            img_url: news.img_url,
            tags: news.tags,
            title: news.title,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateNews {
    #[serde(default)]
    pub body: String,
    #[serde(rename = "imgUrl", default)]
    pub img_url: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub title: String,
}

// Creation date is never patched
#[derive(Debug, Default, Deserialize)]
pub struct UpdateNews {
    pub body: Option<String>,
    #[serde(rename = "imgUrl")]
    pub img_url: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub title: Option<String>,
}

impl UpdateNews {
    pub fn into_patch(self) -> Document {
        let mut patch = doc! {};
        if let Some(body) = self.body {
            patch.insert("body", body);
        }
        if let Some(img_url) = self.img_url {
            patch.insert("imgUrl", img_url);
        }
        if let Some(tags) = self.tags {
            patch.insert("tags", tags);
        }
        if let Some(title) = self.title {
            patch.insert("title", title);
        }
        patch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_news_defaults_lists_to_empty() {
        let news: CreateNews =
            serde_json::from_str(r#"{"title":"Kickoff","body":"Season starts"}"#).unwrap();
        assert!(news.tags.is_empty());
        assert!(news.img_url.is_empty());
    }

    #[test]
    fn update_never_touches_creation_date() {
        let update: UpdateNews = serde_json::from_str(
            r#"{"title":"Edited","date":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        let patch = update.into_patch();
        assert_eq!(patch.len(), 1);
        assert!(patch.get("date").is_none());
    }
}
