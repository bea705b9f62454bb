//! Drives `BetaClient` against a local mock HTTP server.
//!
//! The client is blocking, so every call runs inside `spawn_blocking`
//! while wiremock serves from the async runtime.

use lawvriksh_beta::error::CONNECTION_MESSAGE;
use lawvriksh_beta::{BetaClient, BetaError, BetaUserCreate, ClientConfig};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn run<T, F>(base_url: String, call: F) -> T
where
    T: Send + 'static,
    F: FnOnce(&BetaClient) -> T + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut config = ClientConfig::with_base_url(&base_url).unwrap();
        config.timeout = Duration::from_secs(2);
        let client = BetaClient::new(config).unwrap();
        call(&client)
    })
    .await
    .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_register_posts_name_and_email() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/beta/signup"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"name": "Asha Rao", "email": "asha@example.com"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "user_id": 1234,
            "name": "Asha Rao",
            "email": "asha@example.com",
            "created_at": "2025-07-30T10:15:30.123456",
            "is_beta_user": true,
            "message": "Welcome to LawVriksh Beta! Check your email for login credentials."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = run(server.uri(), |c| {
        c.register_beta_user(&BetaUserCreate::new("Asha Rao", "asha@example.com"))
    })
    .await
    .unwrap();

    assert_eq!(resp.user_id, 1234);
    assert_eq!(resp.email, "asha@example.com");
    assert!(resp.is_beta_user);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_register_duplicate_uses_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/beta/signup"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "Email already registered. If you're already a member, please use the login page."
        })))
        .mount(&server)
        .await;

    let err = run(server.uri(), |c| {
        c.register_beta_user(&BetaUserCreate::new("Asha", "asha@example.com"))
    })
    .await
    .unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert!(err.to_string().starts_with("Email already registered."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_register_validation_list_is_flattened() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/beta/signup"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [
                {"loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error"}
            ]
        })))
        .mount(&server)
        .await;

    let err = run(server.uri(), |c| {
        c.register_beta_user(&BetaUserCreate::new("Asha", "asha@x"))
    })
    .await
    .unwrap_err();

    assert_eq!(err.status(), Some(422));
    assert_eq!(err.to_string(), "value is not a valid email address");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_stats_are_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/beta/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_beta_users": 321,
            "users_last_24h": 4,
            "users_last_week": 27,
            "status": "active"
        })))
        .mount(&server)
        .await;

    let stats = run(server.uri(), |c| c.get_beta_stats()).await.unwrap();
    assert_eq!(stats.total_beta_users, 321);
    assert_eq!(stats.users_last_24h, 4);
    assert_eq!(stats.users_last_week, 27);
    assert_eq!(stats.status, "active");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_stats_server_error_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/beta/stats"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = run(server.uri(), |c| c.get_beta_stats()).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "Server error occurred");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_health_check() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/beta/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "service": "beta_registration",
            "timestamp": "2025-07-30T10:15:30.123456"
        })))
        .mount(&server)
        .await;

    let health = run(server.uri(), |c| c.check_beta_health()).await.unwrap();
    assert!(health.is_healthy());
    assert_eq!(health.service, "beta_registration");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_malformed_body_is_unexpected_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/beta/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = run(server.uri(), |c| c.check_beta_health()).await.unwrap_err();
    assert!(matches!(err, BetaError::Unexpected(_)));
    assert!(err.to_string().starts_with("Failed to parse server response"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unreachable_server_is_connection_error() {
    // Reserve a free port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = run(uri, |c| c.get_beta_stats()).await.unwrap_err();
    assert!(matches!(err, BetaError::Connection(_)));
    assert_eq!(err.to_string(), CONNECTION_MESSAGE);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_slow_server_times_out_as_connection_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/beta/stats"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = tokio::task::spawn_blocking(move || {
        let mut config = ClientConfig::with_base_url(&uri).unwrap();
        config.timeout = Duration::from_millis(200);
        BetaClient::new(config).unwrap().get_beta_stats()
    })
    .await
    .unwrap()
    .unwrap_err();

    assert!(matches!(err, BetaError::Connection(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_mock_mode_never_hits_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let uri = server.uri();
    let stats = tokio::task::spawn_blocking(move || {
        let mut config = ClientConfig::with_base_url(&uri).unwrap();
        config.mock_mode = true;
        BetaClient::new(config)
            .unwrap()
            .with_mock_backend(lawvriksh_beta::mock::MockBackend::instant())
            .get_beta_stats()
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(stats.total_beta_users, 150);
}
