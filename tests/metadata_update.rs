//! End-to-end tests driving the real client against a local capture server.
//!
//! The server records every request it receives so tests can assert on the
//! exact path, headers, and JSON payload that went over the wire.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use metricmeta::prelude::*;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Debug)]
struct CapturedRequest {
    method: String,
    path: String,
    api_key: Option<String>,
    app_key: Option<String>,
    body: Option<Value>,
}

#[derive(Clone, Default)]
struct Captured {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl Captured {
    fn take(&self) -> Vec<CapturedRequest> {
        std::mem::take(&mut *self.requests.lock().unwrap())
    }
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string)
}

async fn get_metadata(
    State(captured): State<Captured>,
    Path(metric_name): Path<String>,
    headers: HeaderMap,
) -> Response {
    captured.requests.lock().unwrap().push(CapturedRequest {
        method: "GET".to_string(),
        path: format!("/api/v1/metrics/{}", metric_name),
        api_key: header(&headers, "DD-API-KEY"),
        app_key: header(&headers, "DD-APPLICATION-KEY"),
        body: None,
    });

    if metric_name == "garbled.metric" {
        return (StatusCode::OK, "not json").into_response();
    }

    Json(json!({
        "type": "gauge",
        "description": "Bytes sent over the network",
        "short_name": "bytes sent",
        "unit": "byte",
        "per_unit": "second",
        "statsd_interval": 20,
        "integration": "system",
    }))
    .into_response()
}

async fn put_metadata(
    State(captured): State<Captured>,
    Path(metric_name): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    captured.requests.lock().unwrap().push(CapturedRequest {
        method: "PUT".to_string(),
        path: format!("/api/v1/metrics/{}", metric_name),
        api_key: header(&headers, "DD-API-KEY"),
        app_key: header(&headers, "DD-APPLICATION-KEY"),
        body: Some(body.clone()),
    });

    if metric_name == "restricted.metric" {
        return (StatusCode::FORBIDDEN, "Forbidden").into_response();
    }

    // Acknowledge with the submitted metadata, as the service does.
    Json(body).into_response()
}

async fn spawn_server() -> (SocketAddr, Captured) {
    let captured = Captured::default();
    let app = Router::new()
        .route("/api/v1/metrics/:metric_name", get(get_metadata).put(put_metadata))
        .with_state(captured.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, captured)
}

fn client_for(addr: SocketAddr, credentials: ApiCredentials) -> MonitorClient {
    MonitorClient::builder()
        .with_credentials(credentials)
        .with_site(format!("http://{}", addr))
        .build()
        .unwrap()
}

fn canonical_update() -> MetadataUpdate {
    MetadataUpdate::new()
        .with_type(MetricType::Gauge)
        .with_description("my custom description")
        .with_short_name("bytes sent")
        .with_unit("byte")
        .with_per_unit("second")
}

#[tokio::test]
async fn test_update_sends_exactly_one_request_with_payload_unmodified() {
    let (addr, captured) = spawn_server().await;
    let client = client_for(addr, ApiCredentials::new("key123"));

    client
        .update_metadata("system.net.bytes_sent", &canonical_update())
        .await
        .unwrap();

    let requests = captured.take();
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/api/v1/metrics/system.net.bytes_sent");
    assert_eq!(request.api_key.as_deref(), Some("key123"));
    assert_eq!(
        request.body.as_ref().unwrap(),
        &json!({
            "type": "gauge",
            "description": "my custom description",
            "short_name": "bytes sent",
            "unit": "byte",
            "per_unit": "second",
        })
    );
}

#[tokio::test]
async fn test_substituted_field_changes_only_that_field_on_the_wire() {
    let (addr, captured) = spawn_server().await;
    let client = client_for(addr, ApiCredentials::new("key123"));

    client
        .update_metadata("system.net.bytes_sent", &canonical_update())
        .await
        .unwrap();
    client
        .update_metadata(
            "system.net.bytes_sent",
            &canonical_update().with_unit("kilobyte"),
        )
        .await
        .unwrap();

    let requests = captured.take();
    assert_eq!(requests.len(), 2);

    let first = requests[0].body.as_ref().unwrap().as_object().unwrap();
    let second = requests[1].body.as_ref().unwrap().as_object().unwrap();
    assert_eq!(first.len(), second.len());
    for (key, value) in first {
        if key == "unit" {
            assert_eq!(second[key], json!("kilobyte"));
        } else {
            assert_eq!(&second[key], value);
        }
    }
}

#[tokio::test]
async fn test_unset_fields_are_absent_from_the_wire() {
    let (addr, captured) = spawn_server().await;
    let client = client_for(addr, ApiCredentials::new("key123"));

    let updates = MetadataUpdate::new().with_description("only a description");
    client
        .update_metadata("system.net.bytes_sent", &updates)
        .await
        .unwrap();

    let requests = captured.take();
    let body = requests[0].body.as_ref().unwrap().as_object().unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(body["description"], json!("only a description"));
}

#[tokio::test]
async fn test_credentials_do_not_alter_the_payload() {
    let (addr, captured) = spawn_server().await;

    // Full credentials, empty api key, missing app key: the submitted
    // payload must be identical in all three cases.
    let clients = [
        client_for(addr, ApiCredentials::new("key123").with_app_key("app456")),
        client_for(addr, ApiCredentials::new("")),
        client_for(addr, ApiCredentials::new("key123")),
    ];
    for client in &clients {
        client
            .update_metadata("system.net.bytes_sent", &canonical_update())
            .await
            .unwrap();
    }

    let requests = captured.take();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].app_key.as_deref(), Some("app456"));
    assert_eq!(requests[1].api_key.as_deref(), Some(""));
    assert!(requests[2].app_key.is_none());
    assert_eq!(requests[0].body, requests[1].body);
    assert_eq!(requests[1].body, requests[2].body);
}

#[tokio::test]
async fn test_get_metadata_decodes_service_response() {
    let (addr, captured) = spawn_server().await;
    let client = client_for(addr, ApiCredentials::new("key123").with_app_key("app456"));

    let metadata = client.metadata("system.net.bytes_sent").await.unwrap();
    assert_eq!(metadata.metric_type, Some(MetricType::Gauge));
    assert_eq!(metadata.unit.as_deref(), Some("byte"));
    assert_eq!(metadata.integration.as_deref(), Some("system"));

    let requests = captured.take();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].app_key.as_deref(), Some("app456"));
    assert!(requests[0].body.is_none());
}

#[tokio::test]
async fn test_rejection_surfaces_status_and_body() {
    let (addr, _captured) = spawn_server().await;
    let client = client_for(addr, ApiCredentials::new("key123"));

    let err = client
        .update_metadata("restricted.metric", &canonical_update())
        .await
        .unwrap_err();
    match err {
        MetadataError::ApiError { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "Forbidden");
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_undecodable_response_surfaces_decode_error() {
    let (addr, _captured) = spawn_server().await;
    let client = client_for(addr, ApiCredentials::new("key123").with_app_key("app456"));

    let err = client.metadata("garbled.metric").await.unwrap_err();
    assert!(matches!(err, MetadataError::DecodeError(_)));
}

#[tokio::test]
async fn test_unreachable_host_surfaces_transport_error() {
    // Port 1 is never listening on loopback.
    let client = MonitorClient::builder()
        .with_credentials(ApiCredentials::new("key123"))
        .with_site("http://127.0.0.1:1")
        .build()
        .unwrap();

    let err = client
        .update_metadata("system.net.bytes_sent", &canonical_update())
        .await
        .unwrap_err();
    assert!(matches!(err, MetadataError::TransportError(_)));
}
