//! API endpoint handlers for the edge server.
//!
//! All handlers go through the shared [`AppState`]: file endpoints hit
//! the store backend, the suggestion endpoint hits the completion
//! backend. Requests are independent; nothing is retried or queued.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/file/load?f=KEY` | Load the text stored at `KEY` |
//! | `POST` | `/api/file/save?f=KEY` | Overwrite the text at `KEY` |
//! | `POST` | `/api/ai/suggest` | Get an AI suggestion for the buffer |

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::ApiError;
use crate::state::AppState;

/// Filename key used when the client does not pass `?f=`.
const DEFAULT_FILE_KEY: &str = "default.txt";

// ---------------------------------------------------------------------------
// Query and body structs
// ---------------------------------------------------------------------------

/// Query parameters for the file endpoints.
#[derive(Debug, serde::Deserialize)]
pub struct FileQuery {
    /// The filename key. Defaults to `default.txt` when absent.
    pub f: Option<String>,
}

/// Body of a `POST /api/ai/suggest` request.
///
/// Both fields are optional at the deserialization layer so that a
/// missing field produces the endpoint's own 400 response rather than
/// an extractor rejection.
#[derive(Debug, serde::Deserialize)]
pub struct SuggestRequest {
    /// The current editor buffer.
    pub content: Option<String>,
    /// The user's free-text instruction.
    pub prompt: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /api/file/load -- load a file
// ---------------------------------------------------------------------------

/// Return the stored text for the requested key.
///
/// A key that was never written yields an empty 200 body, not an error.
pub async fn load_file(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FileQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let key = params.f.as_deref().unwrap_or(DEFAULT_FILE_KEY);
    let text = state.store.load(key).await?;
    Ok(text)
}

// ---------------------------------------------------------------------------
// POST /api/file/save -- save a file
// ---------------------------------------------------------------------------

/// Overwrite (or create) the text at the requested key.
///
/// The raw request body is the file content. Last writer wins; there is
/// no conflict detection.
pub async fn save_file(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FileQuery>,
    body: String,
) -> Result<impl IntoResponse, ApiError> {
    let key = params.f.as_deref().unwrap_or(DEFAULT_FILE_KEY);
    state.store.save(key, &body).await?;
    tracing::debug!(key, bytes = body.len(), "file saved");
    Ok("ok")
}

// ---------------------------------------------------------------------------
// POST /api/ai/suggest -- AI suggestion
// ---------------------------------------------------------------------------

/// Forward the buffer and instruction to the completion API and return
/// the suggestion.
///
/// Both `content` and `prompt` must be present and non-empty. Upstream
/// failures are logged and surfaced as a 500 with a generic message.
pub async fn suggest(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<impl IntoResponse, ApiError> {
    let request: SuggestRequest = serde_json::from_str(&body)
        .map_err(|e| ApiError::BadRequest(format!("invalid JSON body: {e}")))?;

    let (content, prompt) = match (request.content, request.prompt) {
        (Some(content), Some(prompt)) if !content.is_empty() && !prompt.is_empty() => {
            (content, prompt)
        }
        _ => {
            return Err(ApiError::BadRequest(
                "Missing content or prompt".to_owned(),
            ))
        }
    };

    let suggestion = state
        .suggest
        .suggest(&content, &prompt)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, backend = state.suggest.name(), "suggestion failed");
            ApiError::Upstream("Failed to get AI suggestion".to_owned())
        })?;

    Ok(Json(serde_json::json!({
        "suggestion": suggestion,
    })))
}

// ---------------------------------------------------------------------------
// Fallback -- unmatched routes
// ---------------------------------------------------------------------------

/// Plain-text 404 for anything the router does not know about.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}
