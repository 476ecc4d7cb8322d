//! Media HTTP Routes
//!
//! Serves stored image objects.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};

use super::errors::{api_error, ApiError};
use super::state::AppState;

/// Media routes with shared state
pub fn media_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/:object", get(media_handler))
        .with_state(state)
}

/// Content type served for an object name
pub fn content_type_for(object_name: &str) -> &'static str {
    let lower = object_name.to_ascii_lowercase();
    match lower.rsplit('.').next() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

async fn media_handler(
    State(state): State<Arc<AppState>>,
    Path(object): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let data = state.gallery.images().read(&object).map_err(api_error)?;
    Ok((
        [
            (header::CONTENT_TYPE, content_type_for(&object)),
            (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        ],
        data,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("1700-a.PNG"), "image/png");
        assert_eq!(content_type_for("1700-a.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("1700-a.gif"), "image/gif");
        assert_eq!(content_type_for("1700-a"), "application/octet-stream");
    }
}
