//! Profile HTTP Routes

use std::sync::Arc;

use axum::{
    extract::{Json, Path, State},
    http::HeaderMap,
    routing::get,
    Router,
};
use serde::Serialize;

use super::errors::{api_error, ApiError};
use super::state::AppState;
use crate::gallery::{Profile, ProfileUpdate};

/// Own-profile routes (authenticated)
pub fn profile_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(get_profile_handler).put(update_profile_handler))
        .with_state(state)
}

/// Public profile lookup
pub fn public_profile_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/:username", get(public_profile_handler))
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub profile: Profile,
    pub gallery_url: String,
}

fn profile_response(state: &AppState, profile: Profile) -> ProfileResponse {
    ProfileResponse {
        gallery_url: state.gallery.gallery_url(&profile),
        profile,
    }
}

async fn get_profile_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ProfileResponse>, ApiError> {
    let ctx = state.authenticate(&headers)?;
    let profile = state.gallery.get_profile(ctx.user_id).map_err(api_error)?;
    Ok(Json(profile_response(&state, profile)))
}

async fn update_profile_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let ctx = state.authenticate(&headers)?;
    let profile = state
        .gallery
        .update_profile(ctx.user_id, update)
        .map_err(api_error)?;
    Ok(Json(profile_response(&state, profile)))
}

async fn public_profile_handler(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = state
        .gallery
        .profile_by_username(&username)
        .map_err(api_error)?;
    Ok(Json(profile_response(&state, profile)))
}
