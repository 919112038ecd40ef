//! Integration tests for the editor API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server, except for the suggestion tests which point
//! the completion backend at a throwaway mock upstream bound to an
//! ephemeral local port.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tower::ServiceExt;

use draftpad_server::router::build_router;
use draftpad_server::state::AppState;
use draftpad_store::FileStore;
use draftpad_suggest::{create_backend, BackendType, SuggestConfig};

/// Build an app state with the in-memory store and an OpenAI-compatible
/// backend pointed at `api_url`.
fn make_state(api_url: &str) -> Arc<AppState> {
    let config = SuggestConfig {
        backend_type: BackendType::OpenAi,
        api_url: api_url.to_owned(),
        api_key: "test-key".to_owned(),
        model: "test-model".to_owned(),
    };
    Arc::new(AppState::new(
        FileStore::Memory(draftpad_store::MemoryStore::new()),
        create_backend(&config),
    ))
}

/// Build an app state whose suggestion backend can never be reached.
fn make_state_without_upstream() -> Arc<AppState> {
    make_state("http://127.0.0.1:1")
}

/// Build an app state with the in-memory store and an Anthropic backend
/// pointed at `api_url`.
fn make_anthropic_state(api_url: &str) -> Arc<AppState> {
    let config = SuggestConfig {
        backend_type: BackendType::Anthropic,
        api_url: api_url.to_owned(),
        api_key: "test-key".to_owned(),
        model: "test-model".to_owned(),
    };
    Arc::new(AppState::new(
        FileStore::Memory(draftpad_store::MemoryStore::new()),
        create_backend(&config),
    ))
}

/// Serve `router` on an ephemeral local port and return its base URL.
async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn suggest_request(body: &Value) -> Request<Body> {
    Request::post("/api/ai/suggest")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// =========================================================================
// File endpoints
// =========================================================================

#[tokio::test]
async fn test_load_missing_key_returns_empty_string() {
    let router = build_router(make_state_without_upstream());

    let response = router
        .oneshot(
            Request::get("/api/file/load?f=never-written.txt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_string(response.into_body()).await, "");
}

#[tokio::test]
async fn test_save_then_load_round_trips() {
    let router = build_router(make_state_without_upstream());

    let response = router
        .clone()
        .oneshot(
            Request::post("/api/file/save?f=notes.txt")
                .body(Body::from("saved draft\nsecond line"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_string(response.into_body()).await, "ok");

    let response = router
        .oneshot(
            Request::get("/api/file/load?f=notes.txt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_to_string(response.into_body()).await,
        "saved draft\nsecond line"
    );
}

#[tokio::test]
async fn test_file_endpoints_default_key() {
    let router = build_router(make_state_without_upstream());

    // Save without ?f= writes default.txt
    let response = router
        .clone()
        .oneshot(
            Request::post("/api/file/save")
                .body(Body::from("default contents"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(
            Request::get("/api/file/load?f=default.txt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        body_to_string(response.into_body()).await,
        "default contents"
    );
}

#[tokio::test]
async fn test_save_overwrites_last_writer_wins() {
    let router = build_router(make_state_without_upstream());

    for text in ["first", "second", "third"] {
        let response = router
            .clone()
            .oneshot(
                Request::post("/api/file/save?f=contested.txt")
                    .body(Body::from(text))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = router
        .oneshot(
            Request::get("/api/file/load?f=contested.txt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(body_to_string(response.into_body()).await, "third");
}

// =========================================================================
// Suggestion endpoint
// =========================================================================

#[tokio::test]
async fn test_suggest_missing_prompt_is_bad_request() {
    let router = build_router(make_state_without_upstream());

    let body = serde_json::json!({"content": "some text"});
    let response = router.oneshot(suggest_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["error"], "Missing content or prompt");
}

#[tokio::test]
async fn test_suggest_empty_content_is_bad_request() {
    let router = build_router(make_state_without_upstream());

    let body = serde_json::json!({"content": "", "prompt": "fix typos"});
    let response = router.oneshot(suggest_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_suggest_invalid_json_is_bad_request() {
    let router = build_router(make_state_without_upstream());

    let response = router
        .oneshot(
            Request::post("/api/ai/suggest")
                .header("content-type", "application/json")
                .body(Body::from("not json at all"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_suggest_returns_upstream_text() {
    let upstream = Router::new().route(
        "/chat/completions",
        post(|| async {
            Json(serde_json::json!({
                "choices": [{"message": {"content": "T"}}]
            }))
        }),
    );
    let base_url = spawn_upstream(upstream).await;
    let router = build_router(make_state(&base_url));

    let body = serde_json::json!({"content": "hello", "prompt": "shout it"});
    let response = router.oneshot(suggest_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["suggestion"], "T");
}

#[tokio::test]
async fn test_suggest_upstream_error_is_internal_error() {
    let upstream = Router::new().route(
        "/chat/completions",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
    );
    let base_url = spawn_upstream(upstream).await;
    let router = build_router(make_state(&base_url));

    let body = serde_json::json!({"content": "hello", "prompt": "shout it"});
    let response = router.oneshot(suggest_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_suggest_anthropic_backend_returns_upstream_text() {
    let upstream = Router::new().route(
        "/messages",
        post(|| async {
            Json(serde_json::json!({
                "content": [{"type": "text", "text": "Trimmed the draft."}]
            }))
        }),
    );
    let base_url = spawn_upstream(upstream).await;
    let router = build_router(make_anthropic_state(&base_url));

    let body = serde_json::json!({"content": "hello", "prompt": "trim it"});
    let response = router.oneshot(suggest_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["suggestion"], "Trimmed the draft.");
}

#[tokio::test]
async fn test_suggest_anthropic_upstream_error_is_internal_error() {
    let upstream = Router::new().route(
        "/messages",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
    );
    let base_url = spawn_upstream(upstream).await;
    let router = build_router(make_anthropic_state(&base_url));

    let body = serde_json::json!({"content": "hello", "prompt": "trim it"});
    let response = router.oneshot(suggest_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_suggest_unreachable_upstream_is_internal_error() {
    let router = build_router(make_state_without_upstream());

    let body = serde_json::json!({"content": "hello", "prompt": "shout it"});
    let response = router.oneshot(suggest_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_suggest_malformed_upstream_response_is_internal_error() {
    let upstream = Router::new().route(
        "/chat/completions",
        post(|| async { Json(serde_json::json!({"choices": []})) }),
    );
    let base_url = spawn_upstream(upstream).await;
    let router = build_router(make_state(&base_url));

    let body = serde_json::json!({"content": "hello", "prompt": "shout it"});
    let response = router.oneshot(suggest_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// =========================================================================
// Routing and static assets
// =========================================================================

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let router = build_router(make_state_without_upstream());

    let response = router
        .oneshot(Request::get("/api/unknown").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_to_string(response.into_body()).await, "Not found");
}

#[tokio::test]
async fn test_index_serves_editor_html() {
    let router = build_router(make_state_without_upstream());

    for path in ["/", "/editor", "/editor/drafts"] {
        let response = router
            .clone()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_to_string(response.into_body()).await;
        assert!(html.contains("id=\"container\""));
        assert!(html.contains("id=\"ai-suggest\""));
    }
}

#[tokio::test]
async fn test_editor_assets_have_content_types() {
    let router = build_router(make_state_without_upstream());

    let response = router
        .clone()
        .oneshot(Request::get("/editor.js").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/javascript"
    );
    let js = body_to_string(response.into_body()).await;
    assert!(js.contains("/api/file/load"));

    let response = router
        .oneshot(Request::get("/editor.css").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("content-type").unwrap(), "text/css");
}
