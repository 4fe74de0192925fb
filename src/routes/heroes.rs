use crate::handlers::heroes::{create_hero, delete_hero, list_heroes};
use crate::state::AppState;
use axum::{routing::delete, routing::get, Router};

pub fn hero_routes(state: AppState) -> Router {
    Router::new()
        .route("/heroes", get(list_heroes).post(create_hero))
        .route("/heroes/:id", delete(delete_hero))
        .with_state(state)
}
