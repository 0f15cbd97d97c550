//! Route handlers - maps HTTP endpoints to the trending data layer.
//!
//! Each submodule defines routes for a feature area:
//! - `page`: The server-rendered trending page (GET /)
//! - `trending`: The repository list as JSON (GET /api/v1/trending)
//! - `health`: Liveness probe (GET /api/v1/health)
//! - `assets`: Embedded static files (GET /assets/{*path})

pub mod assets;
pub mod health;
pub mod page;
pub mod trending;

use axum::Router;

use crate::trending::SharedState;

pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .merge(page::routes(state.clone()))
        .merge(trending::routes(state))
        .merge(health::routes())
        .merge(assets::routes())
}
