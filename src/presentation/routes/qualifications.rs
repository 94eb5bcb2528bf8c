use crate::infrastructure::state::AppState;
use crate::presentation::handlers::qualifications;
use axum::{Router, routing::get};

/// Private and group qualification lists, selected by `{kind}`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/{kind}",
            get(qualifications::list_qualifications).post(qualifications::create_qualification),
        )
        .route(
            "/{kind}/{id}",
            get(qualifications::get_qualification)
                .put(qualifications::update_qualification)
                .delete(qualifications::delete_qualification),
        )
}
