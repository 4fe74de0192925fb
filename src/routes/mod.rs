pub mod common;
pub mod courses;
pub mod docs;
pub mod heroes;
pub mod static_files;

pub use common::common_routes;
pub use courses::course_routes;
pub use docs::docs_routes;
pub use heroes::hero_routes;
pub use static_files::static_routes;

use crate::state::AppState;
use axum::Router;
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Largest accepted request body.
pub const BODY_LIMIT: usize = 1024 * 1024;

/// Every route the server exposes, with request tracing and the body size limit applied.
pub fn build_router(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(course_routes(state.clone()))
        .merge(hero_routes(state))
        .merge(docs_routes())
        .merge(static_routes(public_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(BODY_LIMIT)),
        )
}
