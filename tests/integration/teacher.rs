use crate::common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_get_teacher() {
    let (_state, app) = common::test_app();

    let response = app
        .oneshot(common::empty_request("GET", "/api/v1/teacher"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["data"]["type"], "teachers");
    assert_eq!(json["data"]["attributes"]["name"], "Alynia Allan");
}

#[tokio::test]
async fn test_update_teacher_and_notify() {
    let (_state, app) = common::test_app();

    let response = app
        .clone()
        .oneshot(common::json_request(
            "PUT",
            "/api/v1/teacher",
            json!({
                "name": "Alynia Allan-Reyes",
                "email": "alynia@example.com",
                "phone": "555-0100",
                "address": {
                    "street": "12 Harbour Road",
                    "city": "Wellington",
                    "state": "WGN",
                    "zipCode": "6011",
                    "country": "New Zealand"
                }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["data"]["attributes"]["name"], "Alynia Allan-Reyes");

    let response = app
        .oneshot(common::empty_request("GET", "/api/v1/notifications"))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    assert_eq!(
        json["data"][0]["attributes"]["message"],
        "Teacher information updated successfully!"
    );
}

#[tokio::test]
async fn test_update_teacher_validation() {
    let (_state, app) = common::test_app();

    let response = app
        .oneshot(common::json_request(
            "PUT",
            "/api/v1/teacher",
            json!({
                "name": "  ",
                "email": "not-an-email",
                "address": {
                    "street": "",
                    "city": "",
                    "state": "",
                    "zipCode": "",
                    "country": ""
                }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
