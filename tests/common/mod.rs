use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tutordesk::infrastructure::config::Config;
use tutordesk::infrastructure::scheduler::InstantScheduler;
use tutordesk::infrastructure::state::AppState;

/// Seeded state whose delays complete immediately
#[allow(dead_code)]
pub fn test_state() -> AppState {
    AppState::seeded(&Config::default(), Arc::new(InstantScheduler::new()))
        .expect("Failed to seed app state")
}

#[allow(dead_code)]
pub fn test_app_with(state: AppState, config: &Config) -> Router {
    tutordesk::presentation::router::app(state, config).expect("Failed to build router")
}

#[allow(dead_code)]
pub fn test_app() -> (AppState, Router) {
    let state = test_state();
    let app = test_app_with(state.clone(), &Config::default());
    (state, app)
}

#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[allow(dead_code)]
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
