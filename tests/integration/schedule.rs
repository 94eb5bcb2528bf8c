use crate::common;

use axum::http::StatusCode;
use tower::ServiceExt;

#[tokio::test]
async fn test_list_schedule() {
    let (_state, app) = common::test_app();

    let response = app
        .oneshot(common::empty_request("GET", "/api/v1/schedule"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["meta"]["total"], 6);
    assert_eq!(json["data"][0]["type"], "schedule-slots");
    assert_eq!(json["data"][0]["attributes"]["startTime"], "14:00");
}

#[tokio::test]
async fn test_list_schedule_by_day() {
    let (_state, app) = common::test_app();

    let response = app
        .oneshot(common::empty_request("GET", "/api/v1/schedule?day=Saturday"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    let subjects: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|s| s["attributes"]["subject"].as_str())
        .collect();
    assert_eq!(subjects, vec!["Instrument", "Vocal Plus"]);
}

#[tokio::test]
async fn test_list_schedule_unknown_day() {
    let (_state, app) = common::test_app();

    let response = app
        .oneshot(common::empty_request("GET", "/api/v1/schedule?day=funday"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_schedule_grid_places_slots() {
    let (_state, app) = common::test_app();

    let response = app
        .oneshot(common::empty_request("GET", "/api/v1/schedule/grid"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    let grid = &json["data"]["attributes"];
    assert_eq!(grid["rowHeight"], 60.0);

    let rows = grid["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 13);
    assert_eq!(rows[7]["time"], "14:00");

    let tuesday = rows[7]["cells"]
        .as_array()
        .unwrap()
        .iter()
        .find(|cell| cell["day"] == "tuesday")
        .unwrap();
    let placement = &tuesday["placements"][0];
    assert_eq!(placement["subject"], "Vocal Contemporary");
    assert_eq!(placement["height"], 90.0);
    assert_eq!(placement["top"], 0.0);
    assert_eq!(placement["lanes"], 1);

    let wednesday = rows[9]["cells"]
        .as_array()
        .unwrap()
        .iter()
        .find(|cell| cell["day"] == "wednesday")
        .unwrap();
    assert_eq!(rows[9]["time"], "16:00");
    assert_eq!(wednesday["placements"][0]["subject"], "Group Vocal Workshop");
    assert_eq!(wednesday["placements"][0]["top"], -30.0);
}
