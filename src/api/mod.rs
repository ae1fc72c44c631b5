//! HTTP API server

use axum::{
    routing::{get, post},
    Router,
};

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest(
            "/v1",
            Router::new()
                .route("/healthcheck", get(handlers::healthcheck))
                .route("/movies", post(handlers::create_movie))
                .route("/movie/:id", get(handlers::show_movie)),
        )
        .with_state(state)
}
