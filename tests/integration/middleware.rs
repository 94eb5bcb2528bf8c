use crate::common;

use axum::{
    extract::ConnectInfo,
    http::{HeaderValue, StatusCode},
};
use serde_json::json;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tower::ServiceExt;
use tutordesk::infrastructure::config::Config;

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let config = Config {
        cors_allowed_origins: vec!["http://test.com".to_string()],
        ..Config::default()
    };
    let app = common::test_app_with(common::test_state(), &config);

    let mut request = common::empty_request("OPTIONS", "/health");
    request
        .headers_mut()
        .insert("Origin", HeaderValue::from_static("http://test.com"));
    request.headers_mut().insert(
        "Access-Control-Request-Method",
        HeaderValue::from_static("GET"),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("access-control-allow-origin"),
        Some(&HeaderValue::from_static("http://test.com"))
    );
}

#[tokio::test]
async fn test_cors_ignores_other_origins() {
    let config = Config {
        cors_allowed_origins: vec!["http://test.com".to_string()],
        ..Config::default()
    };
    let app = common::test_app_with(common::test_state(), &config);

    let mut request = common::empty_request("GET", "/health");
    request
        .headers_mut()
        .insert("Origin", HeaderValue::from_static("http://evil.com"));

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn test_payment_rate_limit() {
    let config = Config {
        rate_limit_per_minute: 2,
        ..Config::default()
    };
    let app = common::test_app_with(common::test_state(), &config);
    let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 12345);

    let payment = || {
        let mut request = common::json_request(
            "PUT",
            "/api/v1/bookings/00000000-0000-0000-0000-000000000000/payment",
            json!({}),
        );
        request.extensions_mut().insert(ConnectInfo(addr));
        request
    };

    // Unknown booking, but each attempt still counts against the bucket
    for _ in 0..2 {
        let response = app.clone().oneshot(payment()).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    let response = app.clone().oneshot(payment()).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    // Only the payment route is limited
    let response = app
        .oneshot(common::empty_request("GET", "/health"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_open_booking_rate_limit() {
    let config = Config {
        rate_limit_per_minute: 2,
        ..Config::default()
    };
    let app = common::test_app_with(common::test_state(), &config);
    let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 23456);

    let open = || {
        let mut request = common::json_request(
            "POST",
            "/api/v1/bookings",
            json!({ "kind": "private", "qualificationId": "1" }),
        );
        request.extensions_mut().insert(ConnectInfo(addr));
        request
    };

    for _ in 0..2 {
        let response = app.clone().oneshot(open()).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.clone().oneshot(open()).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    // Payment attempts draw from their own bucket
    let mut payment = common::json_request(
        "PUT",
        "/api/v1/bookings/00000000-0000-0000-0000-000000000000/payment",
        json!({}),
    );
    payment.extensions_mut().insert(ConnectInfo(addr));
    let response = app.oneshot(payment).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
