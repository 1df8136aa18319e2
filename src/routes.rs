//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The admin SPA is a static Trunk bundle. Every path that is not a file in
//! the bundle is answered with `index.html` so client-side routes
//! (`/userlist`, `/quizzes`, ...) survive a reload or a pasted link. The REST
//! API lives on a separate origin and is not proxied here.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Health probe plus the SPA bundle rooted at `dist_dir`.
pub fn app(dist_dir: &Path) -> Router {
    let index = ServeFile::new(dist_dir.join("index.html"));
    let bundle = ServeDir::new(dist_dir).append_index_html_on_directories(true).fallback(index);

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(bundle)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
