use crate::common;

use axum::{Router, http::StatusCode};
use rust_decimal::Decimal;
use serde_json::json;
use tower::ServiceExt;
use tutordesk::domain::qualifications::{
    GroupQualification, Qualification, QualificationBase, QualificationKind,
    QualificationRepository,
};
use std::sync::Arc;
use std::time::Duration;
use tutordesk::application::booking::sessions::SessionLimits;
use tutordesk::infrastructure::config::Config;
use tutordesk::infrastructure::scheduler::InstantScheduler;
use tutordesk::infrastructure::state::AppState;

async fn open_booking(app: &Router, kind: &str, qualification_id: &str) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/api/v1/bookings",
            json!({ "kind": kind, "qualificationId": qualification_id }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = common::body_json(response).await;
    assert_eq!(json["data"]["type"], "bookings");
    assert_eq!(json["data"]["attributes"]["step"], "details");
    json
}

async fn open_group_booking(app: &Router) -> String {
    let json = open_booking(app, "group", "2").await;
    assert_eq!(json["data"]["attributes"]["details"]["studentCount"], 5);
    json["data"]["id"].as_str().unwrap().to_string()
}

fn details(students: u32) -> serde_json::Value {
    json!({
        "date": "2026-11-03",
        "time": "14:00",
        "duration": 60,
        "studentCount": students,
        "notes": "Bring sheet music"
    })
}

fn card() -> serde_json::Value {
    json!({
        "cardNumber": "4111111111111111",
        "expiryDate": "1230",
        "cvv": "123",
        "cardholderName": "Jordan Reyes"
    })
}

async fn wait_for_close(state: &AppState) {
    for _ in 0..100 {
        if state.bookings.is_empty() {
            return;
        }
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn test_booking_end_to_end() {
    let (state, app) = common::test_app();
    let id = open_group_booking(&app).await;

    let response = app
        .clone()
        .oneshot(common::json_request(
            "PUT",
            &format!("/api/v1/bookings/{}/details", id),
            details(10),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["data"]["attributes"]["step"], "payment");
    assert_eq!(json["data"]["attributes"]["quote"]["total"], "$450.00");
    assert_eq!(json["data"]["attributes"]["quote"]["payable"], "$452.50");

    let response = app
        .clone()
        .oneshot(common::json_request(
            "PUT",
            &format!("/api/v1/bookings/{}/payment", id),
            card(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    let attributes = &json["data"]["attributes"];
    assert_eq!(attributes["step"], "success");
    assert_eq!(attributes["processing"], false);
    assert_eq!(attributes["card"], "•••• 1111");
    assert_eq!(attributes["summary"]["total"], "$450.00");
    assert_eq!(attributes["summary"]["duration"], "60 minutes");
    assert_eq!(attributes["summary"]["studentCount"], 10);

    wait_for_close(&state).await;
    assert!(state.bookings.is_empty());

    let response = app
        .clone()
        .oneshot(common::empty_request("GET", &format!("/api/v1/bookings/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(common::empty_request("GET", "/api/v1/notifications"))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    assert_eq!(json["data"][0]["attributes"]["message"], "Session booked successfully!");
    assert_eq!(json["data"][0]["attributes"]["level"], "success");
}

#[tokio::test]
async fn test_back_keeps_drafts() {
    let (_state, app) = common::test_app();
    let id = open_group_booking(&app).await;

    app.clone()
        .oneshot(common::json_request(
            "PUT",
            &format!("/api/v1/bookings/{}/details", id),
            details(7),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(common::empty_request(
            "POST",
            &format!("/api/v1/bookings/{}/back", id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["data"]["attributes"]["step"], "details");
    assert_eq!(json["data"]["attributes"]["details"]["studentCount"], 7);
    assert_eq!(json["data"]["attributes"]["details"]["notes"], "Bring sheet music");
}

#[tokio::test]
async fn test_back_from_details_is_conflict() {
    let (_state, app) = common::test_app();
    let id = open_group_booking(&app).await;

    let response = app
        .oneshot(common::empty_request(
            "POST",
            &format!("/api/v1/bookings/{}/back", id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = common::body_json(response).await;
    assert_eq!(
        json["errors"][0]["detail"],
        "Cannot go back in the details step"
    );
}

#[tokio::test]
async fn test_details_validation_errors() {
    let (_state, app) = common::test_app();
    let id = open_group_booking(&app).await;

    let response = app
        .clone()
        .oneshot(common::json_request(
            "PUT",
            &format!("/api/v1/bookings/{}/details", id),
            json!({ "studentCount": 2 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = common::body_json(response).await;
    let pointers: Vec<&str> = json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["source"]["pointer"].as_str())
        .collect();
    assert!(pointers.contains(&"/data/attributes/date"));
    assert!(pointers.contains(&"/data/attributes/time"));
    assert!(pointers.contains(&"/data/attributes/studentCount"));

    let response = app
        .oneshot(common::empty_request("GET", &format!("/api/v1/bookings/{}", id)))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    assert_eq!(json["data"]["attributes"]["step"], "details");
}

#[tokio::test]
async fn test_payment_validation_errors() {
    let (_state, app) = common::test_app();
    let id = open_group_booking(&app).await;

    app.clone()
        .oneshot(common::json_request(
            "PUT",
            &format!("/api/v1/bookings/{}/details", id),
            details(5),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(common::json_request(
            "PUT",
            &format!("/api/v1/bookings/{}/payment", id),
            json!({ "cardNumber": "4111", "expiryDate": "12", "cvv": "1" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = common::body_json(response).await;
    let details: Vec<&str> = json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["detail"].as_str())
        .collect();
    assert!(details.contains(&"Valid card number is required"));
    assert!(details.contains(&"Valid expiry date is required (MM/YY)"));
    assert!(details.contains(&"Valid CVV is required"));
    assert!(details.contains(&"Cardholder name is required"));
}

#[tokio::test]
async fn test_close_discards_booking() {
    let (state, app) = common::test_app();
    let id = open_group_booking(&app).await;
    assert_eq!(state.bookings.len(), 1);

    let response = app
        .clone()
        .oneshot(common::empty_request("DELETE", &format!("/api/v1/bookings/{}", id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(state.bookings.is_empty());

    let response = app
        .oneshot(common::empty_request("DELETE", &format!("/api/v1/bookings/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_open_unknown_qualification() {
    let (_state, app) = common::test_app();

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/api/v1/bookings",
            json!({ "kind": "private", "qualificationId": "42" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = common::body_json(response).await;
    assert_eq!(
        json["errors"][0]["detail"],
        "Private qualification with id 42 not found"
    );
}

#[tokio::test]
async fn test_private_booking_is_priced_for_one_student() {
    let (_state, app) = common::test_app();

    for student_count in [None, Some(7)] {
        let opened = open_booking(&app, "private", "1").await;
        assert_eq!(opened["data"]["attributes"]["details"]["studentCount"], 1);
        assert_eq!(opened["data"]["attributes"]["quote"]["total"], "$20.00");
        let id = opened["data"]["id"].as_str().unwrap();

        let mut body = json!({ "date": "2026-11-03", "time": "10:00", "duration": 60 });
        if let Some(count) = student_count {
            body["studentCount"] = json!(count);
        }

        let response = app
            .clone()
            .oneshot(common::json_request(
                "PUT",
                &format!("/api/v1/bookings/{}/details", id),
                body,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = common::body_json(response).await;
        let attributes = &json["data"]["attributes"];
        assert_eq!(attributes["step"], "payment");
        assert_eq!(attributes["details"]["studentCount"], 1);
        assert_eq!(attributes["quote"]["total"], "$20.00");
        assert_eq!(attributes["quote"]["payable"], "$22.50");
    }
}

#[tokio::test]
async fn test_omitted_group_headcount_keeps_default() {
    let (_state, app) = common::test_app();
    let id = open_group_booking(&app).await;

    let response = app
        .oneshot(common::json_request(
            "PUT",
            &format!("/api/v1/bookings/{}/details", id),
            json!({ "date": "2026-11-03", "time": "14:00", "duration": 60 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["data"]["attributes"]["details"]["studentCount"], 5);
    assert_eq!(json["data"]["attributes"]["quote"]["total"], "$225.00");
}

#[tokio::test]
async fn test_out_of_range_total_leaves_bookings_usable() {
    let (state, app) = common::test_app();
    let huge = Qualification::Group(GroupQualification {
        base: QualificationBase {
            id: "9".to_string(),
            name: "Stadium Choir".to_string(),
            rate: Decimal::MAX / Decimal::from(1_000_000),
            currency: "$".to_string(),
            description: None,
        },
        min_students: 1,
        max_students: u32::MAX,
    });
    state
        .qualifications
        .replace(QualificationKind::Group, vec![huge])
        .await
        .unwrap();

    let opened = open_booking(&app, "group", "9").await;
    let id = opened["data"]["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(common::json_request(
            "PUT",
            &format!("/api/v1/bookings/{}/details", id),
            details(u32::MAX),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = common::body_json(response).await;
    assert_eq!(json["errors"][0]["detail"], "Booking total is out of range");

    let response = app
        .clone()
        .oneshot(common::empty_request("GET", &format!("/api/v1/bookings/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["data"]["attributes"]["step"], "details");
    assert_eq!(json["data"]["attributes"]["details"]["studentCount"], 1);

    open_booking(&app, "private", "1").await;
    assert_eq!(state.bookings.len(), 2);
}

#[tokio::test]
async fn test_open_bookings_are_capped() {
    let config = Config {
        bookings: SessionLimits {
            idle_timeout: Duration::from_secs(60),
            max_open: 1,
        },
        ..Config::default()
    };
    let state = AppState::seeded(&config, Arc::new(InstantScheduler::new())).unwrap();
    let app = common::test_app_with(state.clone(), &config);
    let id = open_group_booking(&app).await;

    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/api/v1/bookings",
            json!({ "kind": "private", "qualificationId": "1" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    app.clone()
        .oneshot(common::empty_request("DELETE", &format!("/api/v1/bookings/{}", id)))
        .await
        .unwrap();
    open_booking(&app, "private", "1").await;
    assert_eq!(state.bookings.len(), 1);
}
