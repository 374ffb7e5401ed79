use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Collection;
use serde_json::{json, Value};

use crate::errors::{AppError, Result};
use crate::ids;
use crate::models::matches::{
    is_valid_date, is_valid_status, CreateMatch, Match, MatchResponse, UpdateMatch,
};
use crate::state::AppState;

const MATCHES_COLLECTION: &str = "matches";

pub async fn get_matches(State(state): State<AppState>) -> Result<Json<Vec<MatchResponse>>> {
    let collection: Collection<Match> = state.db.collection(MATCHES_COLLECTION);

    let cursor = collection
        .find(doc! {})
        .sort(doc! { "date": -1, "time": -1 })
        .await
        .map_err(|e| AppError::database("Error fetching matches", e))?;
    let matches: Vec<Match> = cursor
        .try_collect()
        .await
        .map_err(|e| AppError::database("Error fetching matches", e))?;

    Ok(Json(matches.into_iter().map(MatchResponse::from).collect()))
}

pub async fn create_match(
    State(state): State<AppState>,
    Json(payload): Json<CreateMatch>,
) -> Result<(StatusCode, Json<Value>)> {
    if !is_valid_date(&payload.date) {
        return Err(AppError::invalid_data(
            "Match date must be in \"DD-MM-YYYY\" format.",
        ));
    }
    if payload.home_team_id.is_empty()
        || payload.away_team_id.is_empty()
        || payload.time.is_empty()
        || payload.status.is_empty()
    {
        return Err(AppError::invalid_data(
            "All match fields (teams, date, time, status) are required.",
        ));
    }
    if !is_valid_status(&payload.status) {
        return Err(AppError::invalid_data(
            "Invalid match status. Must be ongoing, upcoming, or finished.",
        ));
    }

    let collection: Collection<Match> = state.db.collection(MATCHES_COLLECTION);

    let seq = ids::next_daily_sequence(&state.db, &ids::match_counter_key(&payload.date)).await?;
    let new_match_id = ids::match_id(&payload.date, seq);

    // Data predating the counter collection may already use this key
    let existing = collection
        .find_one(doc! { "_id": &new_match_id })
        .await
        .map_err(|e| AppError::database("Error adding match", e))?;
    if existing.is_some() {
        return Err(AppError::Conflict(
            "A match with this ID already exists for this date.".to_string(),
        ));
    }

    let new_match = Match {
        id: new_match_id.clone(),
        away_score: payload.away_score,
        away_team_id: payload.away_team_id,
        date: payload.date,
        home_score: payload.home_score,
        home_team_id: payload.home_team_id,
        status: payload.status,
        time: payload.time,
        match_id: new_match_id.clone(),
    };

    collection
        .insert_one(&new_match)
        .await
        .map_err(|e| AppError::database("Error adding match", e))?;

    tracing::info!(
        "Added match {} ({} vs {})",
        new_match.id,
        new_match.home_team_id,
        new_match.away_team_id
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Match added successfully", "id": new_match_id })),
    ))
}

pub async fn update_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateMatch>,
) -> Result<Json<Value>> {
    if let Some(status) = &payload.status {
        if !is_valid_status(status) {
            return Err(AppError::invalid_data(
                "Invalid match status. Must be ongoing, upcoming, or finished.",
            ));
        }
    }
    if let Some(date) = &payload.date {
        if !is_valid_date(date) {
            return Err(AppError::invalid_data(
                "Match date must be in \"DD-MM-YYYY\" format.",
            ));
        }
    }

    let patch = payload.into_patch();

    if !patch.is_empty() {
        let collection: Collection<Match> = state.db.collection(MATCHES_COLLECTION);
        collection
            .update_one(doc! { "_id": &id }, doc! { "$set": patch })
            .await
            .map_err(|e| AppError::database("Error updating match", e))?;
    }

    Ok(Json(json!({ "message": "Match updated successfully" })))
}

pub async fn delete_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let collection: Collection<Match> = state.db.collection(MATCHES_COLLECTION);
    collection
        .delete_one(doc! { "_id": &id })
        .await
        .map_err(|e| AppError::database("Error deleting match", e))?;

    tracing::info!("Deleted match {}", id);

    Ok(Json(json!({ "message": "Match deleted successfully" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::post, Router};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::config::AppConfig;

    // Rejections happen before any store call, so the lazy client never
    // needs a running database
    async fn test_router() -> Router {
        let client = mongodb::Client::with_uri_str("mongodb://127.0.0.1:27017")
            .await
            .unwrap();
        let config = AppConfig {
            database_url: "mongodb://127.0.0.1:27017".to_string(),
            database_name: "hkpl_test".to_string(),
            jwt_secret: "test-secret".to_string(),
            frontend_url: "http://127.0.0.1:3000".to_string(),
            port: 0,
            host: "127.0.0.1".to_string(),
        };
        let state = AppState::new(client.database("hkpl_test"), config);
        Router::new()
            .route("/api/matches", post(create_match))
            .with_state(state)
    }

    async fn post_match(body: &str) -> (StatusCode, String) {
        let response = test_router()
            .await
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/matches")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        (status, value["message"].as_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn create_rejects_non_dd_mm_yyyy_date() {
        let (status, message) =
            post_match(r#"{"homeTeamId":"h","awayTeamId":"a","date":"2024-01-01"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Match date must be in \"DD-MM-YYYY\" format.");
    }

    #[tokio::test]
    async fn create_rejects_missing_teams() {
        let (status, message) = post_match(r#"{"date":"01-01-2024"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            message,
            "All match fields (teams, date, time, status) are required."
        );
    }

    #[tokio::test]
    async fn create_rejects_unknown_status() {
        let (status, message) = post_match(
            r#"{"homeTeamId":"h","awayTeamId":"a","date":"01-01-2024","status":"live"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            message,
            "Invalid match status. Must be ongoing, upcoming, or finished."
        );
    }
}
