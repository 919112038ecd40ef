//! Static editor assets, embedded at compile time.
//!
//! The frontend is three small files (HTML shell, editor script, styles)
//! pulled into the binary with `include_str!` so the server ships as a
//! single artifact. Monaco itself loads from a CDN at runtime.

use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, IntoResponse};

/// The editor HTML shell.
const INDEX_HTML: &str = include_str!("../assets/index.html");

/// The editor bootstrap script (Monaco setup, load/save/suggest wiring).
const EDITOR_JS: &str = include_str!("../assets/editor.js");

/// The editor stylesheet.
const EDITOR_CSS: &str = include_str!("../assets/editor.css");

/// Serve the editor HTML shell (`GET /` and `GET /editor*`).
pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}

/// Serve the editor script (`GET /editor.js`).
pub async fn editor_js() -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/javascript")], EDITOR_JS)
}

/// Serve the editor stylesheet (`GET /editor.css`).
pub async fn editor_css() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/css")], EDITOR_CSS)
}
