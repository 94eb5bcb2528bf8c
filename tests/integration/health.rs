use crate::common;

use axum::http::StatusCode;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_endpoint() {
    let (_state, app) = common::test_app();

    let response = app
        .oneshot(common::empty_request("GET", "/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["openBookings"], 0);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (_state, app) = common::test_app();

    let response = app
        .oneshot(common::empty_request("GET", "/api-docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["info"]["title"], "Tutordesk API");
}
