//! Course and enrollment request handlers.

use crate::error::{AppError, ErrorBody};
use crate::extractors::Valid;
use crate::models::{Course, CourseAvailability, CourseCreate, CourseDetail, Request, RequestCreate};
use crate::service::{active_courses, parse_id, CourseService, RequestService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

#[utoipa::path(
    get,
    path = "/course",
    tag = "courses",
    summary = "List all courses",
    responses(
        (status = 200, description = "Every stored course", body = Vec<Course>),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    Ok(Json(CourseService::list(&state.pool).await?))
}

#[utoipa::path(
    get,
    path = "/course/active",
    tag = "courses",
    summary = "List active courses",
    description = "Courses that start after today and still have seats. `capacity` is the number of seats remaining.",
    responses(
        (status = 200, description = "Upcoming courses with remaining capacity", body = Vec<CourseAvailability>),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_active_courses(State(state): State<AppState>) -> Result<Json<Vec<CourseAvailability>>, AppError> {
    let courses = CourseService::list_with_requests(&state.pool).await?;
    let active = active_courses(courses, Utc::now().date_naive());
    tracing::debug!(count = active.len(), "active courses computed");
    Ok(Json(active))
}

#[utoipa::path(
    get,
    path = "/course/admin",
    tag = "courses",
    summary = "List all courses with their requests",
    responses(
        (status = 200, description = "Every course with its enrollment requests", body = Vec<CourseDetail>),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_courses_admin(State(state): State<AppState>) -> Result<Json<Vec<CourseDetail>>, AppError> {
    Ok(Json(CourseService::list_with_requests(&state.pool).await?))
}

#[utoipa::path(
    post,
    path = "/course",
    tag = "courses",
    summary = "Create a course",
    request_body = CourseCreate,
    responses(
        (status = 201, description = "Course created", body = Course),
        (status = 400, description = "Body is not a JSON object", body = ErrorBody),
        (status = 422, description = "Body failed validation", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_course(
    State(state): State<AppState>,
    Valid(body): Valid<CourseCreate>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let course = CourseService::create(&state.pool, &body).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

#[utoipa::path(
    get,
    path = "/course/{id}/request",
    tag = "courses",
    summary = "List requests for a course",
    params(("id" = String, Path, description = "Course id")),
    responses(
        (status = 200, description = "Requests recorded against the course; empty for an unknown id", body = Vec<Request>),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_requests(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Request>>, AppError> {
    let Some(course_id) = parse_id(&id) else {
        return Ok(Json(Vec::new()));
    };
    Ok(Json(RequestService::list_for_course(&state.pool, course_id).await?))
}

#[utoipa::path(
    post,
    path = "/course/{id}/request",
    tag = "courses",
    summary = "Create a request",
    description = "Records an enrollment request. The path id selects the course; `courseId` in the body must match it.",
    params(("id" = String, Path, description = "Course id")),
    request_body = RequestCreate,
    responses(
        (status = 201, description = "Request created", body = Request),
        (status = 400, description = "Non-numeric course id or malformed body", body = ErrorBody),
        (status = 422, description = "Body failed validation", body = ErrorBody),
        (status = 500, description = "Storage failure, including an unknown course", body = ErrorBody)
    )
)]
#[tracing::instrument(skip(state, body))]
pub async fn create_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Valid(body): Valid<RequestCreate>,
) -> Result<(StatusCode, Json<Request>), AppError> {
    let course_id = parse_id(&id).ok_or_else(|| AppError::BadRequest(format!("invalid course id: {}", id)))?;
    if body.course_id != course_id {
        return Err(AppError::Validation(format!(
            "courseId {} does not match course {} in the path",
            body.course_id, course_id
        )));
    }
    let request = RequestService::create(&state.pool, course_id, &body).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

#[cfg(test)]
mod tests {
    use crate::models::{Course, CourseAvailability, CourseDetail, Request};
    use crate::routes::build_router;
    use crate::test_utils::{create_test_app, offline_state};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::{Days, NaiveDate, Utc};
    use serde_json::json;
    use sqlx::PgPool;

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    async fn post_course(app: &TestServer, name: &str, start: NaiveDate, capacity: i32) -> Course {
        let response = app
            .post("/course")
            .json(&json!({ "name": name, "start": start.to_string(), "capacity": capacity }))
            .await;
        response.assert_status(StatusCode::CREATED);
        response.json()
    }

    async fn post_request(app: &TestServer, course_id: i32, name: &str) -> Request {
        let response = app
            .post(&format!("/course/{course_id}/request"))
            .json(&json!({
                "courseId": course_id,
                "name": name,
                "email": format!("{name}@example.com"),
                "phone": "555-0100",
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        response.json()
    }

    async fn request_rows(pool: &PgPool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM request")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test(migrations = false)]
    #[test_log::test]
    async fn created_course_is_listed(pool: PgPool) {
        let app = create_test_app(pool).await;
        let start = NaiveDate::from_ymd_opt(2031, 4, 1).unwrap();

        let created = post_course(&app, "Compilers", start, 30).await;

        let response = app.get("/course").await;
        response.assert_status_ok();
        let courses: Vec<Course> = response.json();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0], created);
        assert_eq!(courses[0].name, "Compilers");
        assert_eq!(courses[0].start, start);
        assert_eq!(courses[0].capacity, 30);
    }

    #[sqlx::test(migrations = false)]
    #[test_log::test]
    async fn active_courses_scenario(pool: PgPool) {
        let app = create_test_app(pool).await;
        let tomorrow = today().checked_add_days(Days::new(1)).unwrap();
        let yesterday = today().checked_sub_days(Days::new(1)).unwrap();

        let a = post_course(&app, "A", tomorrow, 2).await;
        post_request(&app, a.id, "a1").await;
        post_request(&app, a.id, "a2").await;
        let b = post_course(&app, "B", tomorrow, 2).await;
        post_request(&app, b.id, "b1").await;
        post_course(&app, "C", yesterday, 5).await;

        let response = app.get("/course/active").await;
        response.assert_status_ok();
        let raw: serde_json::Value = response.json();
        assert!(raw[0].get("requests").is_none());
        let active: Vec<CourseAvailability> = response.json();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, b.id);
        assert_eq!(active[0].name, "B");
        assert_eq!(active[0].remaining, 1);

        // The stored capacity is untouched.
        let all: Vec<Course> = app.get("/course").await.json();
        let stored_b = all.iter().find(|c| c.id == b.id).unwrap();
        assert_eq!(stored_b.capacity, 2);
    }

    #[sqlx::test(migrations = false)]
    async fn admin_listing_nests_requests(pool: PgPool) {
        let app = create_test_app(pool).await;
        let start = NaiveDate::from_ymd_opt(2031, 4, 1).unwrap();
        let full = post_course(&app, "Full", start, 1).await;
        let empty = post_course(&app, "Empty", start, 1).await;
        let enrolled = post_request(&app, full.id, "zoe").await;

        let response = app.get("/course/admin").await;
        response.assert_status_ok();
        let details: Vec<CourseDetail> = response.json();

        assert_eq!(details.len(), 2);
        assert_eq!(details[0].course, full);
        assert_eq!(details[0].requests, vec![enrolled]);
        assert_eq!(details[1].course, empty);
        assert!(details[1].requests.is_empty());
    }

    #[sqlx::test(migrations = false)]
    async fn requests_are_listed_per_course(pool: PgPool) {
        let app = create_test_app(pool).await;
        let start = NaiveDate::from_ymd_opt(2031, 4, 1).unwrap();
        let first = post_course(&app, "First", start, 5).await;
        let second = post_course(&app, "Second", start, 5).await;
        let mine = post_request(&app, first.id, "kim").await;
        post_request(&app, second.id, "lee").await;

        let listed: Vec<Request> = app.get(&format!("/course/{}/request", first.id)).await.json();
        assert_eq!(listed, vec![mine]);

        let response = app.get("/course/not-a-number/request").await;
        response.assert_status_ok();
        assert!(response.json::<Vec<Request>>().is_empty());
    }

    #[sqlx::test(migrations = false)]
    async fn request_for_missing_course_fails_without_insert(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;

        let response = app
            .post("/course/999/request")
            .json(&json!({ "courseId": 999, "name": "n", "email": "e", "phone": "p" }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.json::<serde_json::Value>()["error"]["code"], "database_error");
        assert_eq!(request_rows(&pool).await, 0);
    }

    #[sqlx::test(migrations = false)]
    async fn body_course_id_must_match_path(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        let start = NaiveDate::from_ymd_opt(2031, 4, 1).unwrap();
        let course = post_course(&app, "Only", start, 5).await;

        let response = app
            .post(&format!("/course/{}/request", course.id))
            .json(&json!({ "courseId": course.id + 1, "name": "n", "email": "e", "phone": "p" }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(request_rows(&pool).await, 0);
    }

    #[tokio::test]
    async fn invalid_bodies_are_rejected_before_storage() {
        let app = TestServer::new(build_router(offline_state(), std::env::temp_dir())).unwrap();

        let response = app
            .post("/course")
            .json(&json!({ "name": "No capacity", "start": "2031-01-01" }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"]["code"], "validation_error");
        assert!(body["error"]["message"].as_str().unwrap().contains("capacity is required"));

        app.post("/course")
            .json(&json!({ "name": "Bad date", "start": "soon", "capacity": 3 }))
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        app.post("/course/1/request")
            .json(&json!({ "courseId": 1, "name": "n", "email": "e" }))
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        app.post("/course/abc/request")
            .json(&json!({ "courseId": 1, "name": "n", "email": "e", "phone": "p" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        app.post("/course")
            .text("not json")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
