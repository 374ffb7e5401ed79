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
use crate::models::team::{CreateTeam, Team, TeamResponse, UpdateTeam};
use crate::state::AppState;

const TEAMS_COLLECTION: &str = "teams";

pub async fn get_teams(State(state): State<AppState>) -> Result<Json<Vec<TeamResponse>>> {
    let collection: Collection<Team> = state.db.collection(TEAMS_COLLECTION);

    let cursor = collection
        .find(doc! {})
        .await
        .map_err(|e| AppError::database("Error fetching teams", e))?;
    let teams: Vec<Team> = cursor
        .try_collect()
        .await
        .map_err(|e| AppError::database("Error fetching teams", e))?;

    Ok(Json(teams.into_iter().map(TeamResponse::from).collect()))
}

pub async fn create_team(
    State(state): State<AppState>,
    Json(payload): Json<CreateTeam>,
) -> Result<(StatusCode, Json<Value>)> {
    if payload.name.is_empty() {
        return Err(AppError::invalid_data("Team name is required."));
    }

    let team = Team {
        id: ids::team_id(),
        logo_url: payload.logo_url,
        draw: payload.draw,
        ga: payload.ga,
        gf: payload.gf,
        lost: payload.lost,
        name: payload.name,
        name_mm: payload.name_mm,
        played: payload.played,
        won: payload.won,
    };

    let collection: Collection<Team> = state.db.collection(TEAMS_COLLECTION);
    collection
        .insert_one(&team)
        .await
        .map_err(|e| AppError::database("Error adding team", e))?;

    tracing::info!("Added team {} ({})", team.name, team.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Team added successfully", "id": team.id })),
    ))
}

pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTeam>,
) -> Result<Json<Value>> {
    let patch = payload.into_patch();

    // An empty body is a no-op, not an error
    if !patch.is_empty() {
        let collection: Collection<Team> = state.db.collection(TEAMS_COLLECTION);
        collection
            .update_one(doc! { "_id": &id }, doc! { "$set": patch })
            .await
            .map_err(|e| AppError::database("Error updating team", e))?;
    }

    Ok(Json(json!({ "message": "Team updated successfully" })))
}

pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let collection: Collection<Team> = state.db.collection(TEAMS_COLLECTION);
    collection
        .delete_one(doc! { "_id": &id })
        .await
        .map_err(|e| AppError::database("Error deleting team", e))?;

    tracing::info!("Deleted team {}", id);

    Ok(Json(json!({ "message": "Team deleted successfully" })))
}
