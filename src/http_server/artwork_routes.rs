//! Admin Artwork HTTP Routes
//!
//! Owner-scoped artwork management. Create and update take
//! `multipart/form-data` with `title`, `description`, `platform_link` and
//! an `image` file part.

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Json, Multipart, Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use uuid::Uuid;

use super::errors::{api_error, error_with, ApiError};
use super::state::AppState;
use crate::gallery::{Artwork, ArtworkDraft, DraftValidation, ImageUpload};
use crate::validation::ImageFile;

/// Multipart slack on top of the image cap for the text fields and framing
const MULTIPART_OVERHEAD_BYTES: u64 = 1024 * 1024;

/// Admin routes with shared state
pub fn artwork_routes(state: Arc<AppState>) -> Router {
    let body_limit = state
        .gallery
        .policy()
        .max_image_bytes
        .saturating_add(MULTIPART_OVERHEAD_BYTES);
    let body_limit = usize::try_from(body_limit).unwrap_or(usize::MAX);

    Router::new()
        .route("/artworks", get(list_artworks_handler).post(create_artwork_handler))
        .route(
            "/artworks/:id",
            put(update_artwork_handler).delete(delete_artwork_handler),
        )
        .route("/validate", post(validate_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

// ==================
// Request Types
// ==================

/// Image metadata for a dry-run validation
#[derive(Debug, Deserialize)]
pub struct ImageMetadata {
    pub name: String,
    pub content_type: String,
    pub size: u64,
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    #[serde(flatten)]
    pub draft: ArtworkDraft,
    #[serde(default)]
    pub image: Option<ImageMetadata>,
}

/// Read the artwork form out of a multipart body
async fn read_artwork_form(
    mut multipart: Multipart,
) -> Result<(ArtworkDraft, Option<ImageUpload>), ApiError> {
    let mut draft = ArtworkDraft::default();
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| error_with(StatusCode::BAD_REQUEST, e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| error_with(StatusCode::BAD_REQUEST, e.to_string()))?;

                // Browsers send an empty part when no file was chosen
                if !(file_name.is_empty() && data.is_empty()) {
                    image = Some(ImageUpload::new(file_name, content_type, data.to_vec()));
                }
            }
            "title" | "description" | "platform_link" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| error_with(StatusCode::BAD_REQUEST, e.to_string()))?;
                match name.as_str() {
                    "title" => draft.title = value,
                    "description" => draft = draft.with_description(value),
                    _ => draft = draft.with_platform_link(value),
                }
            }
            _ => {}
        }
    }

    Ok((draft, image))
}

// ==================
// Handlers
// ==================

async fn list_artworks_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Artwork>>, ApiError> {
    let ctx = state.authenticate(&headers)?;
    let artworks = state.gallery.list_for_owner(ctx.user_id).map_err(api_error)?;
    Ok(Json(artworks))
}

async fn create_artwork_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Artwork>), ApiError> {
    let ctx = state.authenticate(&headers)?;
    let (draft, image) = read_artwork_form(multipart).await?;
    let artwork = state
        .gallery
        .create_artwork(&ctx, draft, image)
        .map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(artwork)))
}

async fn update_artwork_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<Artwork>, ApiError> {
    let ctx = state.authenticate(&headers)?;
    let (draft, image) = read_artwork_form(multipart).await?;
    let artwork = state
        .gallery
        .update_artwork(&ctx, id, draft, image)
        .map_err(api_error)?;
    Ok(Json(artwork))
}

async fn delete_artwork_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let ctx = state.authenticate(&headers)?;
    state.gallery.delete_artwork(&ctx, id).map_err(api_error)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn validate_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<ValidateRequest>,
) -> Result<Json<DraftValidation>, ApiError> {
    state.authenticate(&headers)?;
    let image = request
        .image
        .map(|meta| ImageFile::new(meta.name, meta.content_type, meta.size));
    Ok(Json(state.gallery.validate_draft(&request.draft, image.as_ref())))
}
