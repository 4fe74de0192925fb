//! Remaining-seat computation for `GET /course/active`.

use crate::models::{CourseAvailability, CourseDetail};
use chrono::NaiveDate;

/// Courses starting after `today` that still have seats, with `remaining = capacity - requests`.
///
/// A start date is read as midnight UTC, so "after the current moment" means strictly
/// after today's UTC date. Over-subscribed courses go negative and are dropped here.
pub fn active_courses(courses: Vec<CourseDetail>, today: NaiveDate) -> Vec<CourseAvailability> {
    courses
        .into_iter()
        .filter(|detail| detail.course.start > today)
        .map(|CourseDetail { course, requests }| CourseAvailability {
            id: course.id,
            name: course.name,
            start: course.start,
            remaining: i64::from(course.capacity) - requests.len() as i64,
            created_at: course.created_at,
            updated_at: course.updated_at,
        })
        .filter(|c| c.remaining > 0)
        .collect()
}
