use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::news;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(news::get_news))
        .route("/", post(news::create_news))
        .route("/:id", put(news::update_news))
        .route("/:id", delete(news::delete_news))
}
