use crate::infrastructure::state::AppState;
use crate::presentation::handlers::{courses, dashboard, notifications, students};
use axum::{Router, routing::get};

/// Read-only listings: students, courses, dashboard, notifications
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/students", get(students::list_students))
        .route("/api/v1/courses", get(courses::list_courses))
        .route("/api/v1/dashboard", get(dashboard::get_dashboard))
        .route("/api/v1/notifications", get(notifications::list_notifications))
}
