//! Trending repository list as JSON.
//!
//! GET /api/v1/trending
//!
//! Serves the same cached list the page renders from, in upstream field
//! names and upstream order.

use axum::{extract::State, routing::get, Json, Router};

use crate::error::Result;
use crate::models::TrendingRepo;
use crate::trending::SharedState;

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/trending", get(get_trending))
        .with_state(state)
}

async fn get_trending(State(state): State<SharedState>) -> Result<Json<Vec<TrendingRepo>>> {
    let repos = state.trending().await?;
    Ok(Json(repos.as_ref().clone()))
}
