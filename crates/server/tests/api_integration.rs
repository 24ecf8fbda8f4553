//! Router-level integration tests: requests are driven through the
//! full middleware stack with `tower::ServiceExt::oneshot` against an
//! in-memory secret store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use base64::Engine;
use http_body_util::BodyExt;
use tower::ServiceExt;

use secrets::InMemorySecretStore;
use server::{build_router, AppState, ErrorEnvelope, ServerConfig};
use upload::UploadConfig;

const BOUNDARY: &str = "----txt2json-api-boundary";
const USERNAME: &str = "svc-user";
const PASSWORD: &str = "s3cret-pass";

fn test_router_with_config(config: ServerConfig) -> axum::Router {
    let store = InMemorySecretStore::new()
        .with_secret(auth::USERNAME_SECRET, USERNAME)
        .with_secret(auth::PASSWORD_SECRET, PASSWORD);
    build_router(Arc::new(AppState::with_secret_store(config, Arc::new(store))))
}

fn test_router() -> axum::Router {
    test_router_with_config(ServerConfig::default())
}

fn basic_auth(user: &str, pass: &str) -> String {
    let blob = base64::engine::general_purpose::STANDARD.encode(format!("{user}:{pass}"));
    format!("Basic {blob}")
}

fn multipart_body(filename: &str, content_type: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn convert_request(auth_header: Option<&str>, body: Vec<u8>, content_type: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/v1/convert/text-to-json")
        .header(header::CONTENT_TYPE, content_type);
    if let Some(value) = auth_header {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::from(body)).unwrap()
}

fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn end_to_end_conversion_succeeds() {
    let app = test_router();
    let body = multipart_body(
        "upload.txt",
        "text/plain",
        b"Line 1: Test content\nLine 2: More test content",
    );

    let response = app
        .oneshot(convert_request(
            Some(&basic_auth(USERNAME, PASSWORD)),
            body,
            &multipart_content_type(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-correlation-id"));

    let json = json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["totalLines"], 2);
    assert_eq!(json["fileName"], "upload.txt");
    assert_eq!(json["data"][0]["lineNumber"], 1);
    assert_eq!(json["data"][0]["wordCount"], 4);
    assert_eq!(json["data"][1]["wordCount"], 5);
    assert_eq!(json["metadata"]["encoding"], "UTF-8");
    assert_eq!(json["metadata"]["contentType"], "text/plain");
}

#[tokio::test]
async fn missing_authorization_is_401_regardless_of_body() {
    let app = test_router();

    // Deliberately bogus body: auth must fail before the body matters.
    let response = app
        .oneshot(convert_request(
            None,
            b"not even multipart".to_vec(),
            "application/json",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let envelope: ErrorEnvelope = serde_json::from_value(json_body(response).await).unwrap();
    assert_eq!(envelope.error, "Unauthorized");
}

#[tokio::test]
async fn wrong_password_is_401_with_same_shape_as_wrong_username() {
    let app = test_router();
    let body = multipart_body("a.txt", "text/plain", b"x");

    let bad_pass = test_router()
        .oneshot(convert_request(
            Some(&basic_auth(USERNAME, "wrong")),
            body.clone(),
            &multipart_content_type(),
        ))
        .await
        .unwrap();
    let bad_user = app
        .oneshot(convert_request(
            Some(&basic_auth("wrong", PASSWORD)),
            body,
            &multipart_content_type(),
        ))
        .await
        .unwrap();

    assert_eq!(bad_pass.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(bad_user.status(), StatusCode::UNAUTHORIZED);

    let a: ErrorEnvelope = serde_json::from_value(json_body(bad_pass).await).unwrap();
    let b: ErrorEnvelope = serde_json::from_value(json_body(bad_user).await).unwrap();
    assert_eq!(a.error, b.error);
    assert_eq!(a.message, b.message);
}

#[tokio::test]
async fn malformed_basic_header_is_401() {
    let app = test_router();
    let body = multipart_body("a.txt", "text/plain", b"x");

    let response = app
        .oneshot(convert_request(
            Some("Basic !!not-base64!!"),
            body,
            &multipart_content_type(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let envelope: ErrorEnvelope = serde_json::from_value(json_body(response).await).unwrap();
    assert_eq!(envelope.error, "Unauthorized");
}

#[tokio::test]
async fn non_multipart_request_is_400() {
    let app = test_router();

    let response = app
        .oneshot(convert_request(
            Some(&basic_auth(USERNAME, PASSWORD)),
            b"{}".to_vec(),
            "application/json",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let envelope: ErrorEnvelope = serde_json::from_value(json_body(response).await).unwrap();
    assert_eq!(envelope.error, "Bad Request");
}

#[tokio::test]
async fn multipart_without_file_part_is_400() {
    let app = test_router();
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(b"Content-Disposition: form-data; name=\"note\"\r\n\r\njust text\r\n");
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let response = app
        .oneshot(convert_request(
            Some(&basic_auth(USERNAME, PASSWORD)),
            body,
            &multipart_content_type(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn wrong_extension_is_400() {
    let app = test_router();
    let body = multipart_body("report.md", "text/plain", b"x");

    let response = app
        .oneshot(convert_request(
            Some(&basic_auth(USERNAME, PASSWORD)),
            body,
            &multipart_content_type(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let envelope: ErrorEnvelope = serde_json::from_value(json_body(response).await).unwrap();
    assert_eq!(envelope.error, "Bad Request");
}

#[tokio::test]
async fn oversized_file_is_413() {
    let mut config = ServerConfig::default();
    config.upload = UploadConfig {
        max_file_bytes: 64,
        ..Default::default()
    };
    let app = test_router_with_config(config);
    let body = multipart_body("big.txt", "text/plain", &vec![b'x'; 65]);

    let response = app
        .oneshot(convert_request(
            Some(&basic_auth(USERNAME, PASSWORD)),
            body,
            &multipart_content_type(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let envelope: ErrorEnvelope = serde_json::from_value(json_body(response).await).unwrap();
    assert_eq!(envelope.error, "Payload Too Large");
}

#[tokio::test]
async fn oversized_body_without_auth_is_401() {
    let mut config = ServerConfig::default();
    config.upload = UploadConfig {
        max_file_bytes: 64,
        ..Default::default()
    };
    let app = test_router_with_config(config);
    // Well past max_file_bytes plus the framing slack.
    let body = multipart_body("big.txt", "text/plain", &vec![b'x'; 128 * 1024]);

    let response = app
        .oneshot(convert_request(None, body, &multipart_content_type()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let envelope: ErrorEnvelope = serde_json::from_value(json_body(response).await).unwrap();
    assert_eq!(envelope.error, "Unauthorized");
}

#[tokio::test]
async fn body_over_buffer_cap_is_413_envelope() {
    let mut config = ServerConfig::default();
    config.upload = UploadConfig {
        max_file_bytes: 64,
        ..Default::default()
    };
    let app = test_router_with_config(config);
    let body = multipart_body("big.txt", "text/plain", &vec![b'x'; 128 * 1024]);

    let response = app
        .oneshot(convert_request(
            Some(&basic_auth(USERNAME, PASSWORD)),
            body,
            &multipart_content_type(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let header_id = response
        .headers()
        .get("x-correlation-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("correlation header must be present");

    let envelope: ErrorEnvelope = serde_json::from_value(json_body(response).await).unwrap();
    assert_eq!(envelope.error, "Payload Too Large");
    assert_eq!(envelope.correlation_id.to_string(), header_id);
}

#[tokio::test]
async fn panicking_handler_becomes_500_envelope() {
    use axum::middleware::from_fn;
    use server::middleware::{catch_panics, correlation_id};

    let app = axum::Router::new()
        .route(
            "/boom",
            axum::routing::get(|| async {
                panic!("handler blew up");
                #[allow(unreachable_code)]
                ()
            }),
        )
        .layer(from_fn(catch_panics))
        .layer(from_fn(correlation_id));

    let request = Request::builder()
        .method("GET")
        .uri("/boom")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let envelope: ErrorEnvelope = serde_json::from_value(json_body(response).await).unwrap();
    assert_eq!(envelope.error, "Internal Server Error");
    // The panic payload stays server-side.
    assert_eq!(envelope.message, "internal server error");
}

#[tokio::test]
async fn unavailable_secret_store_is_401_without_detail_leak() {
    let config = ServerConfig::default();
    let store = InMemorySecretStore::new(); // holds no secrets at all
    let app = build_router(Arc::new(AppState::with_secret_store(
        config,
        Arc::new(store),
    )));
    let body = multipart_body("a.txt", "text/plain", b"x");

    let response = app
        .oneshot(convert_request(
            Some(&basic_auth(USERNAME, PASSWORD)),
            body,
            &multipart_content_type(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let envelope: ErrorEnvelope = serde_json::from_value(json_body(response).await).unwrap();
    assert_eq!(envelope.error, "Unauthorized");
    assert!(!envelope.message.contains(PASSWORD));
}

#[tokio::test]
async fn error_envelope_carries_response_correlation_id() {
    let app = test_router();

    let response = app
        .oneshot(convert_request(None, Vec::new(), "text/plain"))
        .await
        .unwrap();

    let header_id = response
        .headers()
        .get("x-correlation-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("correlation header must be present");

    let envelope: ErrorEnvelope = serde_json::from_value(json_body(response).await).unwrap();
    assert_eq!(envelope.correlation_id.to_string(), header_id);
}

#[tokio::test]
async fn inbound_correlation_id_is_honored() {
    let app = test_router();
    let inbound = uuid::Uuid::new_v4();

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .header("x-correlation-id", inbound.to_string())
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get("x-correlation-id")
            .and_then(|v| v.to_str().ok()),
        Some(inbound.to_string().as_str())
    );
}

#[tokio::test]
async fn unknown_route_is_404_envelope() {
    let app = test_router();

    let request = Request::builder()
        .method("GET")
        .uri("/v1/nope")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let envelope: ErrorEnvelope = serde_json::from_value(json_body(response).await).unwrap();
    assert_eq!(envelope.error, "Not Found");
}

#[tokio::test]
async fn health_and_ready_are_public() {
    for uri in ["/health", "/ready", "/"] {
        let app = test_router();
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    }
}
