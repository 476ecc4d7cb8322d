//! # HTTP Server Module
//!
//! JSON API for the gallery, built on axum.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/auth/*` - Signup, login and the current user
//! - `/admin/*` - Owner-scoped artwork management
//! - `/profile`, `/profiles/:username` - Artist profiles
//! - `/gallery/*` - Public listings, detail views and layout
//! - `/media/:object` - Stored images

pub mod artwork_routes;
pub mod auth_routes;
pub mod config;
pub mod errors;
pub mod gallery_routes;
pub mod health_routes;
pub mod media_routes;
pub mod profile_routes;
pub mod server;
pub mod state;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ErrorResponse};
pub use server::HttpServer;
pub use state::AppState;
