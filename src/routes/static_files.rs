//! `GET /{filename}` served from the public directory. `ServeDir` refuses paths that
//! would leave its root.

use axum::Router;
use std::path::Path;
use tower_http::services::ServeDir;

pub fn static_routes(public_dir: impl AsRef<Path>) -> Router {
    Router::new().route_service("/:filename", ServeDir::new(public_dir.as_ref()))
}
