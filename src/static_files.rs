//! Static files with external override support
//!
//! Priority: ./static/{file} > embedded default

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use std::path::PathBuf;

#[derive(RustEmbed)]
#[folder = "static/"]
struct Assets;

const STATIC_DIR: &str = "static";

fn mime_type(path: &str) -> String {
    let mime = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream");

    // Add charset=utf-8 for text types
    if mime.starts_with("text/") || mime.contains("json") || mime.contains("javascript") {
        format!("{}; charset=utf-8", mime)
    } else {
        mime.to_string()
    }
}

/// Try to read from external static dir first, fallback to embedded
fn read_file(path: &str) -> Option<Vec<u8>> {
    let external_path = PathBuf::from(STATIC_DIR).join(path);
    if external_path.exists() {
        if let Ok(content) = std::fs::read(&external_path) {
            tracing::debug!("Serving external: {}", external_path.display());
            return Some(content);
        }
    }

    Assets::get(path).map(|f| f.data.to_vec())
}

fn serve(path: &str) -> Response {
    match read_file(path) {
        Some(content) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, mime_type(path)),
                (header::CACHE_CONTROL, "public, max-age=3600".to_string()),
            ],
            content,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

/// GET /static/*path
pub async fn serve_static(Path(path): Path<String>) -> Response {
    if path.split('/').any(|part| part == "..") {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    }
    serve(&path)
}
