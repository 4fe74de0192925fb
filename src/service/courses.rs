//! Course persistence.

use crate::error::AppError;
use crate::models::{Course, CourseCreate, CourseDetail, Request};
use crate::service::RequestService;
use sqlx::PgPool;
use std::collections::HashMap;

const COLUMNS: &str = "id, name, start, capacity, created_at, updated_at";

pub struct CourseService;

impl CourseService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Course>, AppError> {
        let sql = format!("SELECT {} FROM course ORDER BY id", COLUMNS);
        Ok(sqlx::query_as::<_, Course>(&sql).fetch_all(pool).await?)
    }

    pub async fn create(pool: &PgPool, body: &CourseCreate) -> Result<Course, AppError> {
        let sql = format!(
            "INSERT INTO course (name, start, capacity) VALUES ($1, $2, $3) RETURNING {}",
            COLUMNS
        );
        let course = sqlx::query_as::<_, Course>(&sql)
            .bind(&body.name)
            .bind(body.start)
            .bind(body.capacity)
            .fetch_one(pool)
            .await?;
        tracing::info!(course_id = course.id, "course created");
        Ok(course)
    }

    /// All courses with their requests eagerly loaded: one query for courses, one batch
    /// query for every related request.
    pub async fn list_with_requests(pool: &PgPool) -> Result<Vec<CourseDetail>, AppError> {
        let courses = Self::list(pool).await?;
        let ids: Vec<i32> = courses.iter().map(|c| c.id).collect();
        let mut by_course: HashMap<i32, Vec<Request>> = HashMap::new();
        for request in RequestService::list_for_courses(pool, &ids).await? {
            by_course.entry(request.course_id).or_default().push(request);
        }
        Ok(courses
            .into_iter()
            .map(|course| CourseDetail {
                requests: by_course.remove(&course.id).unwrap_or_default(),
                course,
            })
            .collect())
    }
}
