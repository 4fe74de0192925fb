//! Generated API description: raw OpenAPI JSON plus an interactive reference page.

use crate::openapi::ApiDoc;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub const OPENAPI_PATH: &str = "/swagger.json";
pub const DOCS_PATH: &str = "/documentation";

pub fn docs_routes() -> Router {
    Router::new()
        .route(OPENAPI_PATH, get(|| async { Json(ApiDoc::openapi()) }))
        .merge(Scalar::with_url(DOCS_PATH, ApiDoc::openapi()))
}
