use std::time::Duration;

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use relay_core_contact_contracts::{DeliverySettingsStatus, MockContactService};
use relay_core_health_contracts::{HealthStatus, MockHealthService};
use relay_models::stats::DeliveryStats;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

use super::{config, TestServer};
use crate::RestServerConfig;

#[tokio::test]
async fn index() {
    // Arrange
    let health = MockHealthService::new().with_get_status(HealthStatus {
        now: Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap(),
        uptime: Duration::from_secs(42),
    });
    let server = TestServer::start(health, MockContactService::new(), config()).await;

    // Act
    let response = reqwest::get(server.url("/")).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({
            "message": "Contact Form API is running!",
            "status": "success",
            "timestamp": "2026-10-16T12:00:00+00:00",
            "endpoints": {
                "contact": "POST /contact",
                "health": "GET /health",
                "stats": "GET /email-stats",
                "debug": "GET /debug-env",
            },
        })
    );

    server.stop().await;
}

#[tokio::test]
async fn health() {
    // Arrange
    let health = MockHealthService::new().with_get_status(HealthStatus {
        now: Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap(),
        uptime: Duration::from_millis(42_500),
    });
    let server = TestServer::start(health, MockContactService::new(), config()).await;

    // Act
    let response = reqwest::get(server.url("/health")).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({"status": "healthy", "uptime": 42.5})
    );

    server.stop().await;
}

#[tokio::test]
async fn email_stats() {
    // Arrange
    let contact = MockContactService::new().with_get_stats(DeliveryStats {
        attempts: 3,
        succeeded: 2,
        failed: 1,
    });
    let server = TestServer::start(MockHealthService::new(), contact, config()).await;

    // Act
    let response = reqwest::get(server.url("/email-stats")).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({
            "totalAttempts": 3,
            "successful": 2,
            "failed": 1,
            "successRate": "66.67%",
        })
    );

    server.stop().await;
}

#[tokio::test]
async fn debug_env() {
    // Arrange
    let contact = MockContactService::new().with_get_delivery_settings(DeliverySettingsStatus {
        host: Some("smtp-relay.brevo.com".into()),
        port: Some(587),
        user: true,
        password: false,
        recipient: true,
    });
    let config = RestServerConfig {
        development: true,
        ..config()
    };
    let server = TestServer::start(MockHealthService::new(), contact, config).await;

    // Act
    let response = reqwest::get(server.url("/debug-env")).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({
            "mode": "development",
            "host": "smtp-relay.brevo.com",
            "port": 587,
            "user": true,
            "password": false,
            "recipient": true,
        })
    );

    server.stop().await;
}

#[tokio::test]
async fn debug_env_unconfigured() {
    // Arrange
    let contact =
        MockContactService::new().with_get_delivery_settings(DeliverySettingsStatus::default());
    let server = TestServer::start(MockHealthService::new(), contact, config()).await;

    // Act
    let response = reqwest::get(server.url("/debug-env")).await.unwrap();

    // Assert
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({
            "mode": "production",
            "host": null,
            "port": null,
            "user": false,
            "password": false,
            "recipient": false,
        })
    );

    server.stop().await;
}

#[tokio::test]
async fn preflight() {
    // Arrange
    let server = TestServer::start(
        MockHealthService::new(),
        MockContactService::new(),
        config(),
    )
    .await;

    // Act
    let response = reqwest::Client::new()
        .request(Method::OPTIONS, server.url("/contact"))
        .send()
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
    assert_eq!(headers["access-control-allow-methods"], "POST, OPTIONS");
    assert!(response.text().await.unwrap().is_empty());

    server.stop().await;
}

#[tokio::test]
async fn preflight_unrouted() {
    // Arrange
    let server = TestServer::start(
        MockHealthService::new(),
        MockContactService::new(),
        config(),
    )
    .await;

    // Act
    let response = reqwest::Client::new()
        .request(Method::OPTIONS, server.url("/anything-unrouted"))
        .send()
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
    assert_eq!(headers["access-control-allow-methods"], "POST, OPTIONS");

    server.stop().await;
}

#[tokio::test]
async fn cors_headers_on_responses() {
    // Arrange
    let contact = MockContactService::new().with_get_stats(DeliveryStats::default());
    let server = TestServer::start(MockHealthService::new(), contact, config()).await;

    // Act
    let response = reqwest::get(server.url("/email-stats")).await.unwrap();

    // Assert
    assert_eq!(response.headers()["access-control-allow-origin"], "*");

    server.stop().await;
}

#[tokio::test]
async fn cors_disabled() {
    // Arrange
    let contact = MockContactService::new().with_get_stats(DeliveryStats::default());
    let config = RestServerConfig {
        cors: false,
        ..config()
    };
    let server = TestServer::start(MockHealthService::new(), contact, config).await;

    // Act
    let response = reqwest::get(server.url("/email-stats")).await.unwrap();

    // Assert
    assert!(!response
        .headers()
        .contains_key("access-control-allow-origin"));

    server.stop().await;
}

#[tokio::test]
async fn request_id() {
    // Arrange
    let health = MockHealthService::new().with_get_status(HealthStatus {
        now: Utc::now(),
        uptime: Duration::ZERO,
    });
    let server = TestServer::start(health, MockContactService::new(), config()).await;

    // Act
    let response = reqwest::get(server.url("/health")).await.unwrap();

    // Assert
    let request_id = response.headers()["x-request-id"].to_str().unwrap();
    assert!(!request_id.is_empty());

    server.stop().await;
}

#[tokio::test]
async fn not_found() {
    // Arrange
    let server = TestServer::start(
        MockHealthService::new(),
        MockContactService::new(),
        config(),
    )
    .await;

    // Act
    let response = reqwest::get(server.url("/nonexistent")).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");

    server.stop().await;
}
