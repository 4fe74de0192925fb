//! Enrollment requests against a course.

use crate::error::AppError;
use crate::service::validation::{Payload, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: i32,
    #[schema(example = "Grace Hopper")]
    pub name: String,
    #[schema(example = "grace@example.com")]
    pub email: String,
    #[schema(example = "+1 555 0100")]
    pub phone: String,
    pub course_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /course/{id}/request`. `courseId` must repeat the path id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestCreate {
    #[schema(example = 1)]
    pub course_id: i32,
    #[schema(example = "Grace Hopper")]
    pub name: String,
    #[schema(example = "grace@example.com")]
    pub email: String,
    #[schema(example = "+1 555 0100")]
    pub phone: String,
}

impl Validate for RequestCreate {
    const FIELDS: &'static [&'static str] = &["courseId", "name", "email", "phone"];

    fn validate(body: &Payload) -> Result<Self, AppError> {
        Ok(RequestCreate {
            course_id: body.integer("courseId")?,
            name: body.text("name")?,
            email: body.text("email")?,
            phone: body.text("phone")?,
        })
    }
}
