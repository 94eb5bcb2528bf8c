use crate::common;

use axum::http::StatusCode;
use tower::ServiceExt;

fn names(json: &serde_json::Value, field: &str) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r["attributes"][field].as_str().map(String::from))
        .collect()
}

#[tokio::test]
async fn test_list_students() {
    let (_state, app) = common::test_app();

    let response = app
        .oneshot(common::empty_request("GET", "/api/v1/students"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["meta"]["total"], 5);
    assert_eq!(json["data"][0]["type"], "students");
}

#[tokio::test]
async fn test_filter_students_by_status_and_search() {
    let (_state, app) = common::test_app();

    let response = app
        .clone()
        .oneshot(common::empty_request(
            "GET",
            "/api/v1/students?filter[status]=inactive",
        ))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    assert_eq!(names(&json, "name"), vec!["Lisa Thompson"]);

    let response = app
        .oneshot(common::empty_request(
            "GET",
            "/api/v1/students?filter[search]=CHEN",
        ))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    assert_eq!(names(&json, "name"), vec!["Michael Chen"]);
}

#[tokio::test]
async fn test_unknown_student_status_is_rejected() {
    let (_state, app) = common::test_app();

    let response = app
        .oneshot(common::empty_request(
            "GET",
            "/api/v1/students?filter[status]=archived",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_filter_courses() {
    let (_state, app) = common::test_app();

    let response = app
        .clone()
        .oneshot(common::empty_request(
            "GET",
            "/api/v1/courses?filter[search]=garcia",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(names(&json, "title"), vec!["Physics Fundamentals"]);

    let response = app
        .oneshot(common::empty_request(
            "GET",
            "/api/v1/courses?filter[status]=draft",
        ))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    assert_eq!(names(&json, "title"), vec!["Chemistry Lab"]);
}

#[tokio::test]
async fn test_dashboard_stats() {
    let (_state, app) = common::test_app();

    let response = app
        .oneshot(common::empty_request("GET", "/api/v1/dashboard"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["data"]["id"], "current");
    assert_eq!(json["data"]["attributes"]["totalTeachers"], 24);
    assert_eq!(json["data"]["attributes"]["activeStudents"], 156);
    assert_eq!(json["data"]["attributes"]["revenue"], "12450.00");
}

#[tokio::test]
async fn test_notifications_start_empty() {
    let (_state, app) = common::test_app();

    let response = app
        .oneshot(common::empty_request("GET", "/api/v1/notifications?limit=5"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["meta"]["total"], 0);
    assert_eq!(json["data"], serde_json::json!([]));
}
