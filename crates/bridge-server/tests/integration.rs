use axum::http::StatusCode;
use bridge_core::slack::SlackConfig;
use bridge_server::{build_router, AppState};
use http_body_util::BodyExt;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn app_for(base: &str) -> axum::Router {
    build_router(AppState::new(
        SlackConfig::new("xoxb-test", "C0TEAM").with_api_base(base),
    ))
}

/// Three-member pod: Ana (Design) -> Ben (Build) -> Cy (Ship).
fn pod() -> serde_json::Value {
    serde_json::json!({
        "id": "pod-1",
        "name": "Website Relaunch",
        "description": "Q3 marketing site",
        "owner": "dana",
        "createdAt": "2024-06-01T09:00:00Z",
        "currentStage": 0,
        "status": "active",
        "workflowOrder": ["Design", "Build", "Ship"],
        "members": [
            {"id": "m-a", "name": "Ana", "role": "Design", "handoffLink": "", "completed": false, "actualTimeSpent": 0},
            {"id": "m-b", "name": "Ben", "role": "Build"},
            {"id": "m-c", "name": "Cy", "role": "Ship"}
        ]
    })
}

fn submit_body(current: &str) -> serde_json::Value {
    serde_json::json!({
        "pod": pod(),
        "currentMemberId": current,
        "handoffLink": "https://figma.example/file/42",
    })
}

/// Send a GET request via `oneshot` and return (status, parsed JSON body).
async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// Send a POST request with a JSON body via `oneshot` and return (status, parsed JSON body).
async fn post_json(
    app: axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

const SUBMIT: &str = "/api/v1/notifications/submit";

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_is_healthy_with_timestamp() {
    let (status, json) = get(app_for("http://127.0.0.1:9"), "/api/v1/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    let ts = json["timestamp"].as_str().expect("timestamp string");
    assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
}

#[tokio::test]
async fn root_returns_service_metadata() {
    let (status, json) = get(app_for("http://127.0.0.1:9"), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Bridge POD Management API");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["docs"], "/docs");
}

#[tokio::test]
async fn submit_first_member_notifies_handoff() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat.postMessage")
        .match_header("authorization", "Bearer xoxb-test")
        .match_body(mockito::Matcher::AllOf(vec![
            mockito::Matcher::Regex("Website Relaunch".into()),
            mockito::Matcher::Regex("Ana \\(Design\\)".into()),
            mockito::Matcher::Regex("Ben \\(Build\\)".into()),
            mockito::Matcher::Regex("figma.example/file/42".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"ok":true,"channel":"C0TEAM","ts":"1700000000.000100"}"#)
        .create_async()
        .await;

    let (status, json) = post_json(app_for(&server.url()), SUBMIT, submit_body("m-a")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Slack notification sent successfully");
    assert_eq!(json["nextMemberName"], "Ben");
    mock.assert_async().await;
}

#[tokio::test]
async fn submit_last_member_reports_completion() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat.postMessage")
        .match_body(mockito::Matcher::Regex("Project Completed!".into()))
        .with_status(200)
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;

    let (status, json) = post_json(app_for(&server.url()), SUBMIT, submit_body("m-c")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert!(json["nextMemberName"].is_null());
    assert!(json.as_object().unwrap().contains_key("nextMemberName"));
    mock.assert_async().await;
}

#[tokio::test]
async fn submit_unknown_member_is_404_without_dispatch() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat.postMessage")
        .expect(0)
        .create_async()
        .await;

    let (status, json) = post_json(app_for(&server.url()), SUBMIT, submit_body("m-zz")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Current member not found");
    mock.assert_async().await;
}

#[tokio::test]
async fn slack_rejection_is_200_with_success_false() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat.postMessage")
        .with_status(200)
        .with_body(r#"{"ok":false,"error":"invalid_auth"}"#)
        .create_async()
        .await;

    let (status, json) = post_json(app_for(&server.url()), SUBMIT, submit_body("m-b")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Failed to send Slack notification");
    assert_eq!(json["nextMemberName"], "Cy");
}

#[tokio::test]
async fn slack_http_error_is_200_with_success_false() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat.postMessage")
        .with_status(503)
        .create_async()
        .await;

    let (status, json) = post_json(app_for(&server.url()), SUBMIT, submit_body("m-a")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], false);
    assert_eq!(json["nextMemberName"], "Ben");
}

#[tokio::test]
async fn slack_unreachable_is_200_with_success_false() {
    let (status, json) = post_json(app_for("http://127.0.0.1:9"), SUBMIT, submit_body("m-a")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], false);
    assert_eq!(json["nextMemberName"], "Ben");
}

#[tokio::test]
async fn malformed_body_is_client_error() {
    let (status, _json) = post_json(
        app_for("http://127.0.0.1:9"),
        SUBMIT,
        serde_json::json!({ "currentMemberId": "m-a" }),
    )
    .await;

    assert!(status.is_client_error(), "got {status}");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let req = axum::http::Request::builder()
        .uri("/api/v1/health")
        .header("origin", "http://localhost:5173")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app_for("http://127.0.0.1:9").oneshot(req).await.unwrap();

    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
