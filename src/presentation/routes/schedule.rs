use crate::infrastructure::state::AppState;
use crate::presentation::handlers::schedule;
use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(schedule::list_schedule))
        .route("/grid", get(schedule::get_schedule_grid))
}
