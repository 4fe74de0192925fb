use crate::error::{AppError, ErrorBody};
use crate::extractors::Valid;
use crate::models::{Hero, HeroCreate};
use crate::service::{parse_id, HeroService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

#[utoipa::path(
    get,
    path = "/heroes",
    tag = "heroes",
    summary = "List all heroes",
    responses(
        (status = 200, description = "Every hero created since startup", body = Vec<Hero>),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_heroes(State(state): State<AppState>) -> Result<Json<Vec<Hero>>, AppError> {
    Ok(Json(HeroService::list(&state.pool).await?))
}

#[utoipa::path(
    post,
    path = "/heroes",
    tag = "heroes",
    summary = "Create a hero",
    request_body = HeroCreate,
    responses(
        (status = 201, description = "Hero created", body = Hero),
        (status = 400, description = "Body is not a JSON object", body = ErrorBody),
        (status = 422, description = "Body failed validation", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_hero(
    State(state): State<AppState>,
    Valid(body): Valid<HeroCreate>,
) -> Result<(StatusCode, Json<Hero>), AppError> {
    let hero = HeroService::create(&state.pool, &body).await?;
    Ok((StatusCode::CREATED, Json(hero)))
}

#[utoipa::path(
    delete,
    path = "/heroes/{id}",
    tag = "heroes",
    summary = "Delete a hero",
    params(("id" = String, Path, description = "Hero id")),
    responses(
        (status = 200, description = "Number of rows deleted (0 when no hero matched)", body = u64),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete_hero(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<u64>, AppError> {
    let deleted = match parse_id(&id) {
        Some(id) => HeroService::delete(&state.pool, id).await?,
        None => 0,
    };
    Ok(Json(deleted))
}
