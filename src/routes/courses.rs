use crate::handlers::courses::{
    create_course, create_request, list_active_courses, list_courses, list_courses_admin, list_requests,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn course_routes(state: AppState) -> Router {
    Router::new()
        .route("/course", get(list_courses).post(create_course))
        .route("/course/active", get(list_active_courses))
        .route("/course/admin", get(list_courses_admin))
        .route("/course/:id/request", get(list_requests).post(create_request))
        .with_state(state)
}
