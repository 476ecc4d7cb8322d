//! Public Gallery HTTP Routes
//!
//! Listings come with their column partition and scroll plan so clients only
//! have to render.

use std::sync::Arc;

use axum::{
    extract::{Json, Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::errors::{api_error, error_with, ApiError};
use super::state::AppState;
use crate::gallery::{resolve_gallery_scope, Artwork, GalleryPage, GalleryScope, ShareMetadata};
use crate::layout::{
    columns_for_viewport, distribute_into_columns, fade_delays, scroll_plan, FixedViewport,
    ScrollColumn,
};

/// Stagger between card fade-ins
pub const FADE_STEP_MS: u64 = 100;

/// Largest `count` accepted by `/layout`
pub const MAX_LAYOUT_ITEMS: usize = 1000;

/// Gallery routes with shared state
pub fn gallery_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(gallery_handler))
        .route("/artworks/:id", get(artwork_handler))
        .route("/layout", get(layout_handler))
        .with_state(state)
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Default, Deserialize)]
pub struct GalleryQuery {
    /// Viewport width in CSS pixels; absent means the narrowest layout
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub q: Option<String>,
    /// Explicit gallery, overriding the `Host` header
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GalleryResponse {
    #[serde(flatten)]
    pub page: GalleryPage,
    pub column_count: usize,
    /// Artwork ids per column
    pub columns: Vec<Vec<Uuid>>,
    pub scroll: Vec<ScrollColumn<Uuid>>,
    pub fade_delays_ms: Vec<u64>,
}

#[derive(Debug, Serialize)]
pub struct ArtworkResponse {
    pub artwork: Artwork,
    pub share: ShareMetadata,
}

#[derive(Debug, Deserialize)]
pub struct LayoutQuery {
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub width: u32,
    pub column_count: usize,
    /// Item indices per column
    pub columns: Vec<Vec<usize>>,
}

// ==================
// Handlers
// ==================

async fn gallery_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<GalleryQuery>,
) -> Result<Json<GalleryResponse>, ApiError> {
    let scope = match query.username.as_deref().map(str::trim) {
        Some(username) if !username.is_empty() => GalleryScope::User(username.to_string()),
        _ => {
            let host = headers
                .get(header::HOST)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            resolve_gallery_scope(host, state.main_domains.as_slice())
        }
    };

    let search = query.q.unwrap_or_default();
    let page = state
        .gallery
        .public_gallery(&scope, &search)
        .map_err(api_error)?;

    let viewport = FixedViewport(query.width.unwrap_or(0));
    let column_count = columns_for_viewport(&viewport, &state.breakpoints);
    let ids: Vec<Uuid> = page.artworks.iter().map(|a| a.id).collect();
    debug!(?scope, width = viewport.0, column_count, items = ids.len(), "gallery layout");

    Ok(Json(GalleryResponse {
        column_count,
        columns: distribute_into_columns(&ids, column_count),
        scroll: scroll_plan(&ids, column_count, &state.scroll),
        fade_delays_ms: fade_delays(ids.len(), FADE_STEP_MS),
        page,
    }))
}

async fn artwork_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ArtworkResponse>, ApiError> {
    let artwork = state.gallery.get_artwork(id).map_err(api_error)?;
    Ok(Json(ArtworkResponse {
        share: ShareMetadata::for_artwork(&artwork),
        artwork,
    }))
}

async fn layout_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LayoutQuery>,
) -> Result<Json<LayoutResponse>, ApiError> {
    if query.count > MAX_LAYOUT_ITEMS {
        return Err(error_with(
            StatusCode::BAD_REQUEST,
            format!("count must be at most {}", MAX_LAYOUT_ITEMS),
        ));
    }

    let column_count = state.breakpoints.column_count(query.width);
    let indices: Vec<usize> = (0..query.count).collect();
    debug!(width = query.width, column_count, count = query.count, "layout request");

    Ok(Json(LayoutResponse {
        width: query.width,
        column_count,
        columns: distribute_into_columns(&indices, column_count),
    }))
}
