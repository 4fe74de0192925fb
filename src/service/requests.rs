//! Enrollment request persistence.

use crate::error::AppError;
use crate::models::{Request, RequestCreate};
use sqlx::PgPool;

const COLUMNS: &str = "id, name, email, phone, course_id, created_at, updated_at";

pub struct RequestService;

impl RequestService {
    pub async fn list_for_course(pool: &PgPool, course_id: i32) -> Result<Vec<Request>, AppError> {
        let sql = format!("SELECT {} FROM request WHERE course_id = $1 ORDER BY id", COLUMNS);
        Ok(sqlx::query_as::<_, Request>(&sql)
            .bind(course_id)
            .fetch_all(pool)
            .await?)
    }

    /// Requests belonging to any of `course_ids`. Used for batch-loading related rows.
    pub async fn list_for_courses(pool: &PgPool, course_ids: &[i32]) -> Result<Vec<Request>, AppError> {
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!("SELECT {} FROM request WHERE course_id = ANY($1) ORDER BY id", COLUMNS);
        Ok(sqlx::query_as::<_, Request>(&sql)
            .bind(course_ids)
            .fetch_all(pool)
            .await?)
    }

    /// Insert under `course_id`. A missing course surfaces as a foreign-key violation.
    pub async fn create(pool: &PgPool, course_id: i32, body: &RequestCreate) -> Result<Request, AppError> {
        let sql = format!(
            "INSERT INTO request (name, email, phone, course_id) VALUES ($1, $2, $3, $4) RETURNING {}",
            COLUMNS
        );
        let request = sqlx::query_as::<_, Request>(&sql)
            .bind(&body.name)
            .bind(&body.email)
            .bind(&body.phone)
            .bind(course_id)
            .fetch_one(pool)
            .await?;
        tracing::info!(request_id = request.id, course_id, "enrollment request created");
        Ok(request)
    }
}
