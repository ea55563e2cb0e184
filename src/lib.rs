#![recursion_limit = "256"]

pub mod config;
pub mod content;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod render;
pub mod services;
pub mod state;

use std::sync::Arc;

use axum::routing::{any, get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use state::AppState;

/// The full route table. Anything not matched here is looked up in the
/// configured assets directory.
pub fn app(state: Arc<AppState>) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/", get(handlers::page::landing_page))
        .route("/health", get(handlers::health::health))
        .route("/assets/site.css", get(handlers::assets::stylesheet))
        .route("/assets/site.js", get(handlers::assets::script))
        .route("/placeholder.svg", get(handlers::assets::placeholder_image))
        .route("/api/quote", post(handlers::quote::submit_quote))
        .route("/api/*rest", any(handlers::fallback::api_not_found))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
