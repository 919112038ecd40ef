//! Axum router construction for the edge server.
//!
//! Assembles the static asset routes and the three API routes into a
//! single [`Router`] with CORS middleware enabled for cross-origin
//! development access.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::assets;
use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the editor server.
///
/// The router includes:
/// - `GET /`, `/editor`, `/editor/*` -- editor HTML shell
/// - `GET /editor.js`, `/editor.css` -- editor assets
/// - `GET /api/file/load` -- load a file by key
/// - `POST /api/file/save` -- save a file by key
/// - `POST /api/ai/suggest` -- AI suggestion for the buffer
/// - anything else -- plain-text 404
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Static editor assets
        .route("/", get(assets::index))
        .route("/editor", get(assets::index))
        .route("/editor/{*rest}", get(assets::index))
        .route("/editor.js", get(assets::editor_js))
        .route("/editor.css", get(assets::editor_css))
        // File API
        .route("/api/file/load", get(handlers::load_file))
        .route("/api/file/save", post(handlers::save_file))
        // Suggestion API
        .route("/api/ai/suggest", post(handlers::suggest))
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
