//! Route handlers

pub mod board;
pub mod health;
pub mod task;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(board::router())
        .merge(health::router())
        .merge(task::router())
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
