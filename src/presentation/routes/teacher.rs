use crate::infrastructure::state::AppState;
use crate::presentation::handlers::teacher;
use axum::{Router, routing::get};

/// Teacher profile routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(teacher::get_teacher).put(teacher::update_teacher))
}
