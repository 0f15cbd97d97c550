//! Embedded static files.
//!
//! GET /assets/{*path}
//!
//! The stylesheet and the footer image are compiled into the binary so the
//! server stays a single self-contained executable.

use axum::body::Body;
use axum::extract::Path;
use axum::http::{header, Response, StatusCode};
use axum::routing::get;
use axum::Router;
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "assets"]
struct Assets;

pub fn routes() -> Router {
    Router::new().route("/assets/{*path}", get(serve_asset))
}

async fn serve_asset(Path(path): Path<String>) -> Response<Body> {
    match Assets::get(&path) {
        Some(content) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, mime.as_ref())
                .body(Body::from(content.data.into_owned()))
                .unwrap()
        }
        None => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from("Not Found"))
            .unwrap(),
    }
}
