//! OpenAPI description of every documented route.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers;
use crate::models::{Course, CourseAvailability, CourseCreate, CourseDetail, Hero, HeroCreate, Request, RequestCreate};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Courses API",
        version = "1.0",
        description = "Courses, enrollment requests and heroes backed by PostgreSQL."
    ),
    paths(
        handlers::courses::list_courses,
        handlers::courses::list_active_courses,
        handlers::courses::list_courses_admin,
        handlers::courses::create_course,
        handlers::courses::list_requests,
        handlers::courses::create_request,
        handlers::heroes::list_heroes,
        handlers::heroes::create_hero,
        handlers::heroes::delete_hero,
    ),
    components(schemas(
        Course,
        CourseAvailability,
        CourseCreate,
        CourseDetail,
        Request,
        RequestCreate,
        Hero,
        HeroCreate,
        ErrorBody,
        ErrorDetail,
    )),
    tags(
        (name = "courses", description = "Courses and enrollment requests"),
        (name = "heroes", description = "Heroes; the table is reset on every start"),
    )
)]
pub struct ApiDoc;
