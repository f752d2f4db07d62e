use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use super::*;
use crate::config::RelayTimeouts;

// =========================================================================
// Stub email API
// =========================================================================

#[derive(Clone)]
struct StubApi {
    status: StatusCode,
    seen: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

async fn stub_send(State(stub): State<StubApi>, headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, String) {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    stub.seen.lock().unwrap().push((auth, body));
    (stub.status, r#"{"message":"stub"}"#.to_owned())
}

async fn spawn_stub(status: StatusCode) -> (SocketAddr, StubApi) {
    let stub = StubApi { status, seen: Arc::new(Mutex::new(Vec::new())) };
    let app = Router::new()
        .route("/emails", post(stub_send))
        .with_state(stub.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, stub)
}

fn config_for(api_url: String) -> LeadConfig {
    LeadConfig {
        api_key: "re_test".into(),
        to_email: "biuro@example.pl".into(),
        from_email: "formularz@example.pl".into(),
        api_url,
        site_name: "example.test".into(),
        timeouts: RelayTimeouts { request_secs: 5, connect_secs: 2 },
    }
}

fn sample_email() -> LeadEmail {
    LeadEmail { subject: "Nowy lead - Anna".into(), text: "plain".into(), html: "<p>html</p>".into() }
}

// =========================================================================
// ResendRelay
// =========================================================================

#[tokio::test]
async fn send_posts_bearer_authorized_json() {
    let (addr, stub) = spawn_stub(StatusCode::OK).await;
    let relay = ResendRelay::new(config_for(format!("http://{addr}/emails"))).unwrap();

    relay.send(&sample_email()).await.unwrap();

    let seen = stub.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (auth, body) = &seen[0];
    assert_eq!(auth.as_deref(), Some("Bearer re_test"));
    assert_eq!(body["from"], "formularz@example.pl");
    assert_eq!(body["to"], "biuro@example.pl");
    assert_eq!(body["subject"], "Nowy lead - Anna");
    assert_eq!(body["text"], "plain");
    assert_eq!(body["html"], "<p>html</p>");
}

#[tokio::test]
async fn send_maps_non_success_status_to_rejected() {
    let (addr, stub) = spawn_stub(StatusCode::UNPROCESSABLE_ENTITY).await;
    let relay = ResendRelay::new(config_for(format!("http://{addr}/emails"))).unwrap();

    let err = relay.send(&sample_email()).await.unwrap_err();
    match err {
        RelayError::Rejected { status, body } => {
            assert_eq!(status, 422);
            assert!(body.contains("stub"));
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert_eq!(stub.seen.lock().unwrap().len(), 1, "no retry after failure");
}

#[tokio::test]
async fn send_maps_connection_failure_to_transport() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let relay = ResendRelay::new(config_for(format!("http://{addr}/emails"))).unwrap();
    let err = relay.send(&sample_email()).await.unwrap_err();
    assert!(matches!(err, RelayError::Transport(_)));
    assert_eq!(err.error_code(), "E_RELAY_TRANSPORT");
}

#[test]
fn site_name_comes_from_config() {
    let relay = ResendRelay::new(config_for("http://127.0.0.1:9/emails".into())).unwrap();
    assert_eq!(relay.site_name(), "example.test");
}

#[test]
fn error_codes_are_stable() {
    assert_eq!(RelayError::HttpClientBuild("x".into()).error_code(), "E_HTTP_CLIENT_BUILD");
    assert_eq!(RelayError::Rejected { status: 500, body: String::new() }.error_code(), "E_RELAY_REJECTED");
}
