use crate::infrastructure::state::AppState;
use crate::presentation::handlers::bookings;
use crate::presentation::middleware::rate_limit::rate_limit_layer;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Booking dialog routes. Opening a dialog and payment attempts are rate
/// limited per client, each with its own bucket.
pub fn routes(requests_per_minute: u64) -> anyhow::Result<Router<AppState>> {
    let open = Router::new()
        .route("/", post(bookings::open_booking))
        .route_layer(rate_limit_layer(requests_per_minute)?);
    let payment = Router::new()
        .route("/{id}/payment", put(bookings::submit_payment))
        .route_layer(rate_limit_layer(requests_per_minute)?);

    Ok(Router::new()
        .route(
            "/{id}",
            get(bookings::get_booking).delete(bookings::close_booking),
        )
        .route("/{id}/details", put(bookings::submit_details))
        .route("/{id}/back", post(bookings::go_back))
        .merge(open)
        .merge(payment))
}
