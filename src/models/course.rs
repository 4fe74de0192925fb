//! Course records and the shapes derived from them.

use super::request::Request;
use crate::error::AppError;
use crate::service::validation::{Payload, Validate};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A stored course. `capacity` is the fixed number of seats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i32,
    #[schema(example = "Intro to Rust")]
    pub name: String,
    #[schema(example = "2030-09-01")]
    pub start: NaiveDate,
    #[schema(example = 20)]
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A course with every enrollment request recorded against it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CourseDetail {
    #[serde(flatten)]
    pub course: Course,
    pub requests: Vec<Request>,
}

/// An upcoming course with seats left. `capacity` on the wire is the number of seats
/// still available, not the course's total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseAvailability {
    pub id: i32,
    pub name: String,
    pub start: NaiveDate,
    #[serde(rename = "capacity")]
    #[schema(example = 3)]
    pub remaining: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /course`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseCreate {
    #[schema(example = "Intro to Rust")]
    pub name: String,
    /// Calendar date; timestamps and epoch milliseconds are also accepted.
    #[schema(example = "2030-09-01")]
    pub start: NaiveDate,
    #[schema(example = 20)]
    pub capacity: i32,
}

impl Validate for CourseCreate {
    const FIELDS: &'static [&'static str] = &["name", "start", "capacity"];

    fn validate(body: &Payload) -> Result<Self, AppError> {
        Ok(CourseCreate {
            name: body.text("name")?,
            start: body.date("start")?,
            capacity: body.integer("capacity")?,
        })
    }
}
