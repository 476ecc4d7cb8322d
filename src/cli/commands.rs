//! CLI command implementations

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use crate::auth::{crypto::generate_secret, TokenSettings};
use crate::http_server::{AppState, HttpServer};
use crate::layout::{column_count_for_width, distribute_into_columns};
use crate::observability::init_tracing;
use crate::store::{JsonFileStore, KeyValueStore};
use crate::validation::ValidationPolicy;

/// Parse arguments, install logging and dispatch
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    if let Err(e) = init_tracing(cli.log_format) {
        eprintln!("logging already initialized: {}", e);
    }
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::CheckConfig { config } => check_config(&config),
        Command::Layout { width, count } => {
            println!("{}", layout(width, count));
            Ok(())
        }
    }
}

/// Wire storage and services from a loaded config
pub fn build_state(config: &Config) -> CliResult<AppState> {
    let media_dir = config.media_path();
    fs::create_dir_all(&media_dir).map_err(|e| {
        CliError::Boot(format!(
            "Failed to create media dir {}: {}",
            media_dir.display(),
            e
        ))
    })?;

    let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(config.store_path())?);

    let secret = match &config.jwt_secret {
        Some(secret) => secret.clone(),
        None => {
            warn!("no jwt_secret configured; generated a random one, tokens will not survive a restart");
            generate_secret()
        }
    };
    let tokens = TokenSettings::new(secret).with_ttl_minutes(config.jwt_ttl_minutes);

    let state = AppState::build(
        store,
        &media_dir,
        &config.public_base_url(),
        tokens,
        ValidationPolicy::with_max_image_bytes(config.max_image_bytes),
    );
    let state = AppState {
        gallery: state.gallery.with_root_domain(config.root_domain.clone()),
        ..state
    }
    .with_main_domains(config.main_domains.clone());

    if config.seed_sample_artworks {
        let seeded = state.gallery.seed_sample_artworks()?;
        if seeded > 0 {
            info!(count = seeded, "sample artworks added to empty gallery");
        }
    }

    Ok(state)
}

/// Start the HTTP server
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::load(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
    }

    let state = Arc::new(build_state(&config)?);
    info!(
        data_dir = %config.data_dir,
        public_base_url = %config.public_base_url(),
        "starting artfolio"
    );
    let server = HttpServer::with_config(config.http.clone(), state);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Boot(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::Boot(format!("HTTP server failed: {}", e)))
    })
}

/// Validate a configuration file
pub fn check_config(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    println!(
        "{}",
        json!({
            "status": "ok",
            "data_dir": config.data_dir,
            "listen": config.http.socket_addr(),
            "public_base_url": config.public_base_url(),
        })
    );
    Ok(())
}

/// Column layout for `count` items at `width`, as JSON
pub fn layout(width: u32, count: usize) -> serde_json::Value {
    let column_count = column_count_for_width(width);
    let indices: Vec<usize> = (0..count).collect();
    json!({
        "width": width,
        "column_count": column_count,
        "columns": distribute_into_columns(&indices, column_count),
    })
}
