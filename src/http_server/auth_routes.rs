//! Auth HTTP Routes
//!
//! Signup creates the account and its public profile together.

use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use super::errors::{api_error, ApiError};
use super::state::AppState;
use crate::auth::{TokenResponse, User};
use crate::gallery::{GalleryError, Profile};

pub fn auth_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/signup", post(signup_handler))
        .route("/login", post(login_handler))
        .route("/user", get(get_user_handler))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    /// Becomes the gallery subdomain
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Account, profile and a fresh token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(flatten)]
    pub token: TokenResponse,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

/// The username is checked before the account is created; a failed profile
/// insert deletes the account again.
async fn signup_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let username = request.username.trim();
    state
        .gallery
        .policy()
        .validate_username(username)
        .into_result()
        .map_err(|e| api_error(GalleryError::Validation(e)))?;
    let available = state
        .gallery
        .username_available(username, Uuid::nil())
        .map_err(api_error)?;
    if !available {
        return Err(api_error(GalleryError::UsernameTaken));
    }

    let user = state
        .auth
        .signup(&request.email, &request.password)
        .map_err(api_error)?;

    let profile = match state.gallery.create_profile(user.id, username) {
        Ok(profile) => profile,
        Err(e) => {
            if let Err(rollback) = state.auth.delete_user(user.id) {
                warn!(user_id = %user.id, error = %rollback, "could not roll back signup");
            }
            return Err(api_error(e));
        }
    };

    let token = state.auth.issue_token(&user).map_err(api_error)?;
    let response = AuthResponse {
        user: UserResponse::from(&user),
        profile: Some(profile),
        token,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (user, token) = state
        .auth
        .login(&request.email, &request.password)
        .map_err(api_error)?;

    let profile = state.gallery.get_profile(user.id).ok();
    Ok(Json(AuthResponse {
        user: UserResponse::from(&user),
        profile,
        token,
    }))
}

/// Caller behind the bearer token
async fn get_user_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<UserResponse>, ApiError> {
    let ctx = state.authenticate(&headers)?;
    let user = state.auth.get_user(ctx.user_id).map_err(api_error)?;
    Ok(Json(UserResponse::from(&user)))
}
