//! The trending page itself.
//!
//! GET /
//!
//! Pulls the repository list through the cache (refreshing from upstream if
//! the revalidation window has elapsed) and renders the HTML document. A
//! failed refresh fails the whole visit; no partial page is emitted.

use axum::{extract::State, response::Html, routing::get, Router};

use crate::error::Result;
use crate::render;
use crate::trending::SharedState;

pub fn routes(state: SharedState) -> Router {
    Router::new().route("/", get(get_page)).with_state(state)
}

async fn get_page(State(state): State<SharedState>) -> Result<Html<String>> {
    let repos = state.trending().await?;
    Ok(Html(render::render_page(&repos)))
}
