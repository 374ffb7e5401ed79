use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::matches;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(matches::get_matches))
        .route("/", post(matches::create_match))
        .route("/:id", put(matches::update_match))
        .route("/:id", delete(matches::delete_match))
}
