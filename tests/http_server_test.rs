//! Tests for the HTTP interface, driven in-process through the router.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tictactoe_server::{ServerConfig, router};
use tower::ServiceExt;

fn app() -> Router {
    router(&ServerConfig::default()).unwrap()
}

async fn send(app: Router, method: &str, uri: &str, body: impl Into<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, bytes.to_vec())
}

#[tokio::test]
async fn test_play_returns_ai_move() {
    let body = json!({
        "board": ["X", "X", "", "", "", "", "", "", ""],
        "boardSize": 3
    })
    .to_string();
    let (status, headers, bytes) = send(app(), "POST", "/play", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["board"][2], "O");
    assert_eq!(value["boardSize"], 3);
    assert_eq!(value["winner"], "");
}

#[tokio::test]
async fn test_play_reports_ai_win() {
    let body = json!({
        "board": ["O", "O", "", "X", "X", "", "X", "", ""],
        "boardSize": 3
    })
    .to_string();
    let (status, _, bytes) = send(app(), "POST", "/play", body).await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["winner"], "O");
}

#[tokio::test]
async fn test_play_reports_human_win() {
    let body = json!({
        "board": ["X", "X", "X", "O", "O", "", "", "", ""],
        "boardSize": 3
    })
    .to_string();
    let (status, _, bytes) = send(app(), "POST", "/play", body).await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["winner"], "X");
    assert_eq!(value["board"][5], "");
}

#[tokio::test]
async fn test_preflight() {
    let (status, headers, bytes) = send(app(), "OPTIONS", "/play", Body::empty()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(bytes.is_empty());
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
}

#[tokio::test]
async fn test_get_not_allowed() {
    let (status, headers, bytes) = send(app(), "GET", "/play", Body::empty()).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(bytes, b"Only POST method is allowed");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (status, headers, bytes) = send(app(), "POST", "/play", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(bytes, b"Invalid request body");
}

#[tokio::test]
async fn test_null_cells_play_as_empty() {
    let body = json!({ "board": vec![Value::Null; 9], "boardSize": 3 }).to_string();
    let (status, _, bytes) = send(app(), "POST", "/play", body).await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["board"][0], "O");
    assert_eq!(value["board"][1], "");
    assert_eq!(value["winner"], "");
}

#[tokio::test]
async fn test_unknown_cell_is_bad_request() {
    let body = json!({ "board": ["?", "", "", "", "", "", "", "", ""], "boardSize": 3 }).to_string();
    let (status, _, _) = send(app(), "POST", "/play", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_size_mismatch_is_bad_request() {
    let body = json!({ "board": vec![""; 9], "boardSize": 4 }).to_string();
    let (status, _, bytes) = send(app(), "POST", "/play", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(bytes, b"Board size and board length do not match");
}

#[tokio::test]
async fn test_zero_size_is_bad_request() {
    let body = json!({ "board": [], "boardSize": 0 }).to_string();
    let (status, _, _) = send(app(), "POST", "/play", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_configured_origin() {
    let config = ServerConfig::default().with_allowed_origin("https://example.org".to_string());
    let app = router(&config).unwrap();
    let (_, headers, _) = send(app, "OPTIONS", "/play", Body::empty()).await;
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "https://example.org");
}

#[tokio::test]
async fn test_invalid_origin_rejected() {
    let config = ServerConfig::default().with_allowed_origin("bad\norigin".to_string());
    assert!(router(&config).is_err());
}

#[tokio::test]
async fn test_health() {
    let (status, _, bytes) = send(app(), "GET", "/health", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"ok");
}
