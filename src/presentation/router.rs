use crate::infrastructure::config::Config;
use crate::infrastructure::state::AppState;
use crate::presentation::handlers;
use crate::presentation::middleware::cors::cors_layer;
use crate::presentation::openapi::ApiDoc;
use crate::presentation::routes;
use axum::{Router, routing::get};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn app(state: AppState, config: &Config) -> anyhow::Result<Router> {
    Ok(Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(handlers::health::health_check))
        .nest("/api/v1/teacher", routes::teacher::routes())
        .nest("/api/v1/qualifications", routes::qualifications::routes())
        .nest("/api/v1/schedule", routes::schedule::routes())
        .nest(
            "/api/v1/bookings",
            routes::bookings::routes(config.rate_limit_per_minute)?,
        )
        .merge(routes::directory::routes())
        .layer(cors_layer(&config.cors_allowed_origins)?)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}
