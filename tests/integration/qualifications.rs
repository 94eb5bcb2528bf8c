use crate::common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_list_private_qualifications() {
    let (_state, app) = common::test_app();

    let response = app
        .oneshot(common::empty_request("GET", "/api/v1/qualifications/private"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["meta"]["total"], 5);
    assert_eq!(json["data"][0]["id"], "1");
    assert_eq!(json["data"][0]["attributes"]["name"], "Vocal Contemporary");
    assert_eq!(json["data"][0]["attributes"]["rateDisplay"], "$20.00/hr");
    assert_eq!(json["data"][0]["attributes"]["level"], "intermediate");
}

#[tokio::test]
async fn test_unknown_list_is_not_found() {
    let (_state, app) = common::test_app();

    let response = app
        .oneshot(common::empty_request("GET", "/api/v1/qualifications/workshop"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_group_qualification() {
    let (_state, app) = common::test_app();

    let response = app
        .oneshot(common::empty_request("GET", "/api/v1/qualifications/group/2"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["data"]["attributes"]["name"], "Music Theory Basics");
    assert_eq!(json["data"]["attributes"]["minStudents"], 5);
    assert_eq!(json["data"]["attributes"]["maxStudents"], 12);
}

#[tokio::test]
async fn test_create_update_delete_group_qualification() {
    let (_state, app) = common::test_app();

    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/api/v1/qualifications/group",
            json!({
                "name": "Choir Prep",
                "rate": "30",
                "minStudents": 4,
                "maxStudents": 10
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = common::body_json(response).await;
    let id = json["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(json["data"]["attributes"]["rateDisplay"], "$30.00/hr");

    let response = app
        .clone()
        .oneshot(common::json_request(
            "PUT",
            &format!("/api/v1/qualifications/group/{}", id),
            json!({
                "name": "Choir Prep",
                "rate": "32.5",
                "minStudents": 4,
                "maxStudents": 10
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["data"]["id"], id.as_str());
    assert_eq!(json["data"]["attributes"]["rateDisplay"], "$32.50/hr");

    let response = app
        .clone()
        .oneshot(common::empty_request(
            "DELETE",
            &format!("/api/v1/qualifications/group/{}", id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["meta"]["deleted"], true);

    let response = app
        .clone()
        .oneshot(common::empty_request("GET", "/api/v1/qualifications/group"))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    assert_eq!(json["meta"]["total"], 2);

    let response = app
        .oneshot(common::empty_request("GET", "/api/v1/notifications"))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    let messages: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|n| n["attributes"]["message"].as_str())
        .collect();
    assert!(messages.contains(&"Group qualification added successfully!"));
    assert!(messages.contains(&"Group qualification updated successfully!"));
    assert!(messages.contains(&"Group qualification deleted successfully!"));
}

#[tokio::test]
async fn test_create_group_qualification_validation() {
    let (_state, app) = common::test_app();

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/api/v1/qualifications/group",
            json!({
                "name": "",
                "rate": "0",
                "minStudents": 6,
                "maxStudents": 6
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = common::body_json(response).await;
    let errors = json["errors"].as_array().unwrap();
    let detail = |pointer: &str| {
        errors
            .iter()
            .find(|e| e["source"]["pointer"] == pointer)
            .and_then(|e| e["detail"].as_str())
            .map(str::to_string)
    };

    assert_eq!(detail("/data/attributes/name").as_deref(), Some("Name is required"));
    assert_eq!(
        detail("/data/attributes/rate").as_deref(),
        Some("Rate must be greater than 0")
    );
    assert_eq!(
        detail("/data/attributes/maxStudents").as_deref(),
        Some("Maximum must be greater than minimum")
    );
}

#[tokio::test]
async fn test_rate_above_cap_is_rejected() {
    let (_state, app) = common::test_app();

    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/api/v1/qualifications/private",
            json!({ "name": "Vocal Masterclass", "rate": "79228162514264337593543950" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = common::body_json(response).await;
    assert_eq!(json["errors"][0]["source"]["pointer"], "/data/attributes/rate");
    assert_eq!(json["errors"][0]["detail"], "Rate must be at most 10000");

    let response = app
        .oneshot(common::empty_request("GET", "/api/v1/qualifications/private"))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    assert_eq!(json["meta"]["total"], 5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_are_all_listed() {
    let (_state, app) = common::test_app();

    let requests: Vec<_> = (0..100)
        .map(|n| {
            let app = app.clone();
            tokio::spawn(async move {
                app.oneshot(common::json_request(
                    "POST",
                    "/api/v1/qualifications/private",
                    json!({ "name": format!("Piano {}", n), "rate": "30" }),
                ))
                .await
                .unwrap()
                .status()
            })
        })
        .collect();
    for request in requests {
        assert_eq!(request.await.unwrap(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(common::empty_request("GET", "/api/v1/qualifications/private"))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    assert_eq!(json["meta"]["total"], 105);
}

#[tokio::test]
async fn test_update_missing_qualification_is_not_found() {
    let (_state, app) = common::test_app();

    let response = app
        .oneshot(common::json_request(
            "PUT",
            "/api/v1/qualifications/private/99",
            json!({ "name": "Vocal Core", "rate": "30", "level": "advanced" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
