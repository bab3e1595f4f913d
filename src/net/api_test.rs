use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;

use super::*;

// =========================================================================
// Test backend
// =========================================================================

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<(Option<String>, String)>>>);

async fn capture(State(captured): State<Captured>, headers: HeaderMap, body: String) -> StatusCode {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    captured.0.lock().unwrap().push((content_type, body));
    StatusCode::CREATED
}

async fn spawn_backend(router: Router) -> BackendConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    BackendConfig::new("http://127.0.0.1", port.to_string())
}

fn jan() -> RegisterRequest {
    RegisterRequest::from_form("Jan", "Kowalski", "jan@example.com", "p@ss")
}

fn creds() -> LoginRequest {
    LoginRequest { email: "a@b.com".into(), password: "x".into() }
}

// =========================================================================
// register
// =========================================================================

#[tokio::test]
async fn register_posts_json_payload() {
    let captured = Captured::default();
    let router = Router::new()
        .route("/register", post(capture))
        .with_state(captured.clone());
    let config = spawn_backend(router).await;

    let backend = HttpBackend::new(&config).unwrap();
    assert_eq!(backend.register(&jan()).await, RegistrationResult::Created);

    let requests = captured.0.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0.as_deref(), Some("application/json"));
    assert_eq!(
        requests[0].1,
        r#"{"name":"Jan","surname":"Kowalski","email":"jan@example.com","password":"p@ss","role":"user","phone":"123456789"}"#
    );
}

#[tokio::test]
async fn register_success_with_malformed_body_is_created() {
    let router = Router::new().route("/register", post(|| async { (StatusCode::OK, "not json {") }));
    let backend = HttpBackend::new(&spawn_backend(router).await).unwrap();
    assert_eq!(backend.register(&jan()).await, RegistrationResult::Created);
}

#[tokio::test]
async fn register_rejection_carries_backend_text() {
    let router = Router::new().route(
        "/register",
        post(|| async { (StatusCode::CONFLICT, "Email already exists") }),
    );
    let backend = HttpBackend::new(&spawn_backend(router).await).unwrap();
    assert_eq!(
        backend.register(&jan()).await,
        RegistrationResult::Rejected("Email already exists".into())
    );
}

#[tokio::test]
async fn register_rejection_without_body_uses_status() {
    let router = Router::new().route("/register", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let backend = HttpBackend::new(&spawn_backend(router).await).unwrap();
    assert_eq!(backend.register(&jan()).await, RegistrationResult::Rejected("500".into()));
}

#[tokio::test]
async fn register_connection_refused_is_unreachable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let backend = HttpBackend::new(&BackendConfig::new("http://127.0.0.1", port.to_string())).unwrap();
    assert_eq!(backend.register(&jan()).await, RegistrationResult::Unreachable);
}

#[tokio::test]
async fn register_timeout_is_unreachable() {
    let router = Router::new().route(
        "/register",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            StatusCode::CREATED
        }),
    );
    let mut config = spawn_backend(router).await;
    config.timeouts.request_secs = 1;

    let backend = HttpBackend::new(&config).unwrap();
    assert_eq!(backend.register(&jan()).await, RegistrationResult::Unreachable);
}

#[tokio::test]
async fn register_unknown_route_is_rejected() {
    let router = Router::new().route("/login", post(|| async { StatusCode::OK }));
    let backend = HttpBackend::new(&spawn_backend(router).await).unwrap();
    assert_eq!(backend.register(&jan()).await, RegistrationResult::Rejected("404".into()));
}

// =========================================================================
// login
// =========================================================================

#[tokio::test]
async fn login_accepted_on_success() {
    let captured = Captured::default();
    let router = Router::new()
        .route("/login", post(capture))
        .with_state(captured.clone());
    let backend = HttpBackend::new(&spawn_backend(router).await).unwrap();

    assert_eq!(backend.login(&creds()).await, LoginResult::Accepted);
    let requests = captured.0.lock().unwrap().clone();
    assert_eq!(requests[0].1, r#"{"email":"a@b.com","password":"x"}"#);
}

#[tokio::test]
async fn login_rejection_prefers_json_message() {
    let router = Router::new().route(
        "/login",
        post(|| async { (StatusCode::UNAUTHORIZED, r#"{"message":"Invalid credentials"}"#) }),
    );
    let backend = HttpBackend::new(&spawn_backend(router).await).unwrap();
    assert_eq!(
        backend.login(&creds()).await,
        LoginResult::Rejected("Invalid credentials".into())
    );
}

#[tokio::test]
async fn login_connection_refused_is_unreachable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let backend = HttpBackend::new(&BackendConfig::new("http://127.0.0.1", port.to_string())).unwrap();
    assert_eq!(backend.login(&creds()).await, LoginResult::Unreachable);
}
