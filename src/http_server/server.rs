//! # HTTP Server
//!
//! Route table and listener for the gallery API.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::artwork_routes::artwork_routes;
use super::auth_routes::auth_routes;
use super::config::HttpServerConfig;
use super::gallery_routes::gallery_routes;
use super::health_routes::health_routes;
use super::media_routes::media_routes;
use super::profile_routes::{profile_routes, public_profile_routes};
use super::state::AppState;

/// HTTP server for the gallery API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    pub fn with_config(config: HttpServerConfig, state: Arc<AppState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Public gallery and media routes need no token; `/admin` and `/profile` do
    fn build_router(config: &HttpServerConfig, state: Arc<AppState>) -> Router {
        Router::new()
            .merge(health_routes(state.clone()))
            .nest("/auth", auth_routes(state.clone()))
            .nest("/admin", artwork_routes(state.clone()))
            .nest("/profile", profile_routes(state.clone()))
            .nest("/profiles", public_profile_routes(state.clone()))
            .nest("/gallery", gallery_routes(state.clone()))
            .nest("/media", media_routes(state))
            .layer(TraceLayer::new_for_http())
            .layer(config.cors_layer())
    }

    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Finished router, for in-process tests
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.listen_addr()?;

        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "artfolio HTTP server listening");

        axum::serve(listener, self.router).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_state() -> (Arc<AppState>, TempDir) {
        let temp = TempDir::new().unwrap();
        let state = AppState::in_memory(temp.path(), "http://localhost:8080");
        (Arc::new(state), temp)
    }

    #[test]
    fn test_server_with_custom_port() {
        let (state, _temp) = create_state();
        let config = HttpServerConfig {
            port: 3000,
            ..Default::default()
        };
        let server = HttpServer::with_config(config, state);
        assert_eq!(server.socket_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_router_builds() {
        let (state, _temp) = create_state();
        let _router = HttpServer::with_config(HttpServerConfig::default(), state).router();
    }
}
