//! Store configuration (file path and open policy).

use crate::error::AppError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_DB_PATH: &str = "RECIPE_DB_PATH";
pub const ENV_DB_CREATE: &str = "RECIPE_DB_CREATE";

const DATA_DIR_NAME: &str = "recipe-organizer";
const DB_FILE_NAME: &str = "recipes.db";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    pub database_path: PathBuf,
    /// When false, a missing database file is a connection failure.
    #[serde(default = "default_create_if_missing")]
    pub create_if_missing: bool,
}

fn default_create_if_missing() -> bool {
    true
}

impl StoreConfig {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            create_if_missing: true,
        }
    }

    /// `<data dir>/recipe-organizer/recipes.db`, or the working directory when
    /// the platform has no data dir.
    pub fn default_location() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(DATA_DIR_NAME).join(DB_FILE_NAME))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let config: StoreConfig =
            toml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    pub fn load(config_path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(config_path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", config_path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn load_or_default(config_path: &Path) -> Self {
        match Self::load(config_path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load store config from {:?}: {}", config_path, e);
                let fallback = Self::default_location();
                log::info!("Using default database at {:?}", fallback.database_path);
                fallback
            }
        }
    }

    pub fn from_env() -> Result<Self, AppError> {
        let path = std::env::var(ENV_DB_PATH)
            .map_err(|_| AppError::Config(format!("{} is not set", ENV_DB_PATH)))?;
        let create_if_missing = match std::env::var(ENV_DB_CREATE) {
            Ok(v) => parse_flag(&v)?,
            Err(_) => true,
        };
        let config = Self {
            database_path: PathBuf::from(path),
            create_if_missing,
        };
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), AppError> {
        if self.database_path.as_os_str().is_empty() {
            return Err(AppError::Config("database_path is required".into()));
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!(
            "{} must be a boolean, got {:?}",
            ENV_DB_CREATE, other
        ))),
    }
}
