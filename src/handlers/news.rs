use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Collection;
use serde_json::{json, Value};

use crate::errors::{AppError, Result};
use crate::ids;
use crate::models::news::{CreateNews, News, NewsResponse, UpdateNews};
use crate::state::AppState;

const NEWS_COLLECTION: &str = "news";

pub async fn get_news(State(state): State<AppState>) -> Result<Json<Vec<NewsResponse>>> {
    let collection: Collection<News> = state.db.collection(NEWS_COLLECTION);

    let cursor = collection
        .find(doc! {})
        .sort(doc! { "date": -1 })
        .await
        .map_err(|e| AppError::database("Error fetching news", e))?;
    let news: Vec<News> = cursor
        .try_collect()
        .await
        .map_err(|e| AppError::database("Error fetching news", e))?;

    Ok(Json(news.into_iter().map(NewsResponse::from).collect()))
}

pub async fn create_news(
    State(state): State<AppState>,
    Json(payload): Json<CreateNews>,
) -> Result<(StatusCode, Json<Value>)> {
    if payload.title.is_empty() || payload.body.is_empty() {
        return Err(AppError::invalid_data("News title and body are required."));
    }

    let created_at = Utc::now();
    let seq = ids::next_daily_sequence(&state.db, &ids::news_counter_key(created_at)).await?;
    let news_id = ids::news_id(created_at, seq);

    let news = News {
        id: news_id.clone(),
        body: payload.body,
        date: created_at,
        img_url: payload.img_url,
        tags: payload.tags,
        title: payload.title,
    };

    let collection: Collection<News> = state.db.collection(NEWS_COLLECTION);
    collection
        .insert_one(&news)
        .await
        .map_err(|e| AppError::database("Error adding news", e))?;

    tracing::info!("Added news article {} ({})", news.id, news.title);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "News article added successfully", "id": news_id })),
    ))
}

pub async fn update_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateNews>,
) -> Result<Json<Value>> {
    let patch = payload.into_patch();

    if !patch.is_empty() {
        let collection: Collection<News> = state.db.collection(NEWS_COLLECTION);
        collection
            .update_one(doc! { "_id": &id }, doc! { "$set": patch })
            .await
            .map_err(|e| AppError::database("Error updating news", e))?;
    }

    Ok(Json(json!({ "message": "News article updated successfully" })))
}

pub async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let collection: Collection<News> = state.db.collection(NEWS_COLLECTION);
    collection
        .delete_one(doc! { "_id": &id })
        .await
        .map_err(|e| AppError::database("Error deleting news", e))?;

    tracing::info!("Deleted news article {}", id);

    Ok(Json(json!({ "message": "News article deleted successfully" })))
}
