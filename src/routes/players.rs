use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::players;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(players::get_players))
        .route("/", post(players::create_player))
        .route("/:id", put(players::update_player))
        .route("/:id", delete(players::delete_player))
}
