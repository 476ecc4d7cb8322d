//! Listener and CORS settings

use std::io;
use std::net::SocketAddr;

use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Where the API listens and which browser origins may call it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed to call the API from a browser; empty allows any
    pub cors_origins: Vec<String>,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// `host:port` as written in the config
    pub fn socket_addr(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Parsed listen address
    pub fn listen_addr(&self) -> io::Result<SocketAddr> {
        self.socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
    }

    /// CORS layer for the configured origins; unparsable origins are skipped
    pub fn cors_layer(&self) -> CorsLayer {
        let any = self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*");
        let origin = if any {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(self.cors_origins.iter().filter_map(|o| o.parse().ok()))
        };

        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
