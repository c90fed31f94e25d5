pub mod app;
pub mod commands;
pub mod domain;
pub mod error;
pub mod infra;
pub mod logging;

use error::AppError;
use infra::{Gateway, StoreConfig};
use std::path::Path;

/// Resolve configuration and prepare the store for the UI layer.
///
/// With `config_path`, the TOML file is used (falling back to the default
/// location if it cannot be read); otherwise `RECIPE_DB_PATH` is tried before
/// the default location.
pub fn bootstrap(config_path: Option<&Path>) -> Result<Gateway, AppError> {
    let config = match config_path {
        Some(path) => StoreConfig::load_or_default(path),
        None => StoreConfig::from_env().unwrap_or_else(|e| {
            log::debug!("{}; using default location", e);
            StoreConfig::default_location()
        }),
    };
    log::info!("DB path: {:?}", config.database_path);

    Gateway::open(config).map_err(|e| {
        log::error!("DB init failed: {}", e);
        e
    })
}
