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
use crate::models::player::{
    is_valid_position, CreatePlayer, Player, PlayerResponse, UpdatePlayer,
};
use crate::state::AppState;

const PLAYERS_COLLECTION: &str = "players";

pub async fn get_players(State(state): State<AppState>) -> Result<Json<Vec<PlayerResponse>>> {
    let collection: Collection<Player> = state.db.collection(PLAYERS_COLLECTION);

    let cursor = collection
        .find(doc! {})
        .await
        .map_err(|e| AppError::database("Error fetching players", e))?;
    let players: Vec<Player> = cursor
        .try_collect()
        .await
        .map_err(|e| AppError::database("Error fetching players", e))?;

    Ok(Json(players.into_iter().map(PlayerResponse::from).collect()))
}

pub async fn create_player(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlayer>,
) -> Result<(StatusCode, Json<Value>)> {
    if payload.name.is_empty() || payload.team_id.is_empty() || payload.position.is_empty() {
        return Err(AppError::invalid_data(
            "Player name, team, and position are required.",
        ));
    }
    if !is_valid_position(&payload.position) {
        return Err(AppError::invalid_data(
            "Invalid player position. Must be GK, DF, MF, or FW.",
        ));
    }

    let player = Player {
        id: ids::player_id(),
        image_url: payload.image_url,
        name: payload.name,
        name_en: payload.name_en,
        number: payload.number,
        position: payload.position,
        team_id: payload.team_id,
        matches: payload.matches,
        goals: payload.goals,
        assists: payload.assists,
        cards: payload.cards,
    };

    let collection: Collection<Player> = state.db.collection(PLAYERS_COLLECTION);
    collection
        .insert_one(&player)
        .await
        .map_err(|e| AppError::database("Error adding player", e))?;

    tracing::info!("Added player {} ({})", player.name, player.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Player added successfully", "id": player.id })),
    ))
}

pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePlayer>,
) -> Result<Json<Value>> {
    if let Some(position) = &payload.position {
        if !is_valid_position(position) {
            return Err(AppError::invalid_data(
                "Invalid player position. Must be GK, DF, MF, or FW.",
            ));
        }
    }

    let patch = payload.into_patch();

    if !patch.is_empty() {
        let collection: Collection<Player> = state.db.collection(PLAYERS_COLLECTION);
        collection
            .update_one(doc! { "_id": &id }, doc! { "$set": patch })
            .await
            .map_err(|e| AppError::database("Error updating player", e))?;
    }

    Ok(Json(json!({ "message": "Player updated successfully" })))
}

pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let collection: Collection<Player> = state.db.collection(PLAYERS_COLLECTION);
    collection
        .delete_one(doc! { "_id": &id })
        .await
        .map_err(|e| AppError::database("Error deleting player", e))?;

    tracing::info!("Deleted player {}", id);

    Ok(Json(json!({ "message": "Player deleted successfully" })))
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
            .route("/api/players", post(create_player))
            .with_state(state)
    }

    async fn post_player(body: &str) -> (StatusCode, String) {
        let response = test_router()
            .await
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/players")
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
    async fn create_rejects_unknown_position() {
        let (status, message) =
            post_player(r#"{"name":"Aung","position":"ST","team_id":"t1"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Invalid player position. Must be GK, DF, MF, or FW.");
    }

    #[tokio::test]
    async fn create_rejects_missing_required_fields() {
        let (status, message) = post_player(r#"{"name":"Aung"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Player name, team, and position are required.");
    }
}
