//! Trending Repos Viewer - a self-contained server-rendered trending page
//!
//! Fetches the trending repository feed from the upstream API, caches it for
//! an hour, and renders it as a single HTML page of link cards.

use std::sync::Arc;

use axum::Router;

pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod routes;
pub mod trending;

pub use config::Config;
pub use error::AppError;
pub use trending::{SharedState, TrendingState};

/// Build the application router for the given configuration.
pub fn app(config: &Config) -> Router {
    let state: SharedState = Arc::new(TrendingState::new(
        config.upstream_url.clone(),
        config.cache_ttl,
    ));
    routes::create_router(state)
}
