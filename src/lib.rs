//! VibeCheck API: fortunes, jokes, mood lookups, a secret code and a
//! global "smash" counter that lets each client in once per cooldown.
//!
//! All state lives in [`state::AppState`], built once at startup and
//! shared with every handler through the router.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod rate_limit;
pub mod state;
pub mod sweeper;

use handlers::{
    fortune_handler, health_handler, joke_handler, metrics_handler, reset_handler,
    secret_handler, smash_handler, smashes_handler, vibe_handler,
};
use state::AppState;

// creating the router with routes, open to every origin
pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/api/fortune", get(fortune_handler))
        .route("/api/joke", get(joke_handler))
        .route("/api/vibe", get(vibe_handler))
        .route("/api/smash", post(smash_handler))
        .route("/api/smashes", get(smashes_handler))
        .route("/api/smash/reset", post(reset_handler))
        .route("/api/secret", get(secret_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
