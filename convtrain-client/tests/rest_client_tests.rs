//! REST client against an in-process HTTP server.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use convtrain_client::{AssistantClient, AssistantService, Credentials, ServiceConfig, WorkspaceStatus};
use convtrain_core::{ConvtrainError, ServiceError};
use convtrain_test_utils::fixtures::{base_document, small_workspace};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const EXPECTED_AUTH: &str = "Basic dXNlcjpwYXNz";
const API_VERSION: &str = "2018-07-10";

#[derive(Clone, Default)]
struct Recorder {
    bodies: Arc<Mutex<Vec<Value>>>,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

fn check_request(headers: &HeaderMap, query: &HashMap<String, String>) -> Option<Response> {
    let auth = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if auth != EXPECTED_AUTH {
        return Some(StatusCode::UNAUTHORIZED.into_response());
    }
    if query.get("version").map(String::as_str) != Some(API_VERSION) {
        return Some(
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Missing version", "code": 400})),
            )
                .into_response(),
        );
    }
    None
}

async fn create(
    State(recorder): State<Recorder>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    if let Some(rejection) = check_request(&headers, &query) {
        return rejection;
    }
    recorder.queries.lock().unwrap().push(query);
    let name = body["name"].clone();
    recorder.bodies.lock().unwrap().push(body);
    (
        StatusCode::CREATED,
        Json(json!({"workspace_id": "ws-new", "name": name, "status": "Training"})),
    )
        .into_response()
}

async fn fetch(
    State(recorder): State<Recorder>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if let Some(rejection) = check_request(&headers, &query) {
        return rejection;
    }
    let export = query.get("export").map(String::as_str) == Some("true");
    recorder.queries.lock().unwrap().push(query);
    match id.as_str() {
        "missing" => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Resource not found", "code": 404})),
        )
            .into_response(),
        "broken" => Json(json!({"status": "Training"})).into_response(),
        "garbled" => (StatusCode::OK, "not json").into_response(),
        _ if export => Json(base_document()).into_response(),
        _ => Json(json!({"workspace_id": id, "status": "Available", "name": "demo"})).into_response(),
    }
}

async fn spawn_server() -> (String, Recorder) {
    let recorder = Recorder::default();
    let router = Router::new()
        .route("/v1/workspaces", post(create))
        .route("/v1/workspaces/:id", get(fetch))
        .with_state(recorder.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (format!("http://{}", addr), recorder)
}

fn client_for(base_url: &str, password: &str) -> AssistantClient {
    let config = ServiceConfig {
        base_url: format!("{}/", base_url),
        ..Default::default()
    };
    AssistantClient::new(&config, Credentials::new("user", password)).unwrap()
}

#[tokio::test]
async fn test_create_posts_workspace_body() {
    let (url, recorder) = spawn_server().await;
    let client = client_for(&url, "pass");
    let workspace = small_workspace();

    let report = client.create_workspace(&workspace).await.unwrap();

    assert_eq!(report.workspace_id, "ws-new");
    assert_eq!(report.status, Some(WorkspaceStatus::Training));
    assert_eq!(report.extra["name"], "pizza");

    let bodies = recorder.bodies.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["intents"][0]["intent"], "order_pizza");
    assert_eq!(bodies[0]["intents"][0]["examples"][0]["text"], "I want a pizza");
    assert_eq!(bodies[0]["entities"][0]["values"][0]["type"], "synonyms");
    assert_eq!(bodies[0]["language"], "en");
}

#[tokio::test]
async fn test_get_reports_status() {
    let (url, recorder) = spawn_server().await;
    let client = client_for(&url, "pass");

    let report = client.get_workspace("ws-7").await.unwrap();

    assert_eq!(report.workspace_id, "ws-7");
    assert!(report.is_available());
    let queries = recorder.queries.lock().unwrap();
    assert_eq!(queries[0].get("version").map(String::as_str), Some(API_VERSION));
    assert!(!queries[0].contains_key("export"));
}

#[tokio::test]
async fn test_export_requests_full_content() {
    let (url, recorder) = spawn_server().await;
    let client = client_for(&url, "pass");

    let document = client.export_workspace("ws-base").await.unwrap();

    assert_eq!(document, base_document());
    let queries = recorder.queries.lock().unwrap();
    assert_eq!(queries[0].get("export").map(String::as_str), Some("true"));
}

#[tokio::test]
async fn test_error_body_becomes_request_failed() {
    let (url, _) = spawn_server().await;
    let client = client_for(&url, "pass");

    let err = client.get_workspace("missing").await.unwrap_err();

    assert_eq!(
        err,
        ConvtrainError::Service(ServiceError::RequestFailed {
            endpoint: "get_workspace".to_string(),
            status: 404,
            message: "Resource not found".to_string(),
        })
    );
}

#[tokio::test]
async fn test_rejected_credentials_use_status_reason() {
    let (url, recorder) = spawn_server().await;
    let client = client_for(&url, "wrong");

    let err = client.create_workspace(&small_workspace()).await.unwrap_err();

    match err {
        ConvtrainError::Service(ServiceError::RequestFailed { status, message, .. }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Unauthorized");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(recorder.bodies.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_workspace_id_is_invalid_response() {
    let (url, _) = spawn_server().await;
    let client = client_for(&url, "pass");

    let err = client.get_workspace("broken").await.unwrap_err();

    assert!(matches!(
        err,
        ConvtrainError::Service(ServiceError::InvalidResponse { .. })
    ));
}

#[tokio::test]
async fn test_non_json_body_is_invalid_response() {
    let (url, _) = spawn_server().await;
    let client = client_for(&url, "pass");

    let err = client.export_workspace("garbled").await.unwrap_err();

    assert!(matches!(
        err,
        ConvtrainError::Service(ServiceError::InvalidResponse { .. })
    ));
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let client = client_for(&url, "pass");

    let err = client.get_workspace("ws-1").await.unwrap_err();

    assert!(matches!(
        err,
        ConvtrainError::Service(ServiceError::Transport { .. })
    ));
}
