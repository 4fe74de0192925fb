use crate::error::AppError;
use crate::service::validation::{Payload, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub id: i32,
    #[schema(example = "Ada")]
    pub name: String,
    #[schema(example = "analytical engine")]
    pub power: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /heroes`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HeroCreate {
    #[schema(example = "Ada")]
    pub name: String,
    #[schema(example = "analytical engine")]
    pub power: String,
}

impl Validate for HeroCreate {
    const FIELDS: &'static [&'static str] = &["name", "power"];

    fn validate(body: &Payload) -> Result<Self, AppError> {
        Ok(HeroCreate {
            name: body.text("name")?,
            power: body.text("power")?,
        })
    }
}
