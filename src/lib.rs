pub mod alerts;
pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod service;
pub mod state;
pub mod types;

use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};

use crate::{
    handlers::{
        create_friends, delete_friends, get_all_friends, get_friends, partial_update_friends,
        update_friends,
    },
    state::AppState,
};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/friends", get(get_all_friends).post(create_friends))
        .route(
            "/api/friends/{id}",
            get(get_friends)
                .put(update_friends)
                .patch(partial_update_friends)
                .delete(delete_friends),
        )
        .with_state(state)
        .fallback(handler_404)
}

async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "nothing to see here")
}
