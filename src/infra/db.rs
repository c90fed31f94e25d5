//! SQLite connection gateway and schema bootstrap.

use crate::error::AppError;
use crate::infra::StoreConfig;
use rusqlite::{Connection, OpenFlags};

const SCHEMA: &str = include_str!("schema.sql");

/// Hands out one fresh connection per operation. Holds no connection itself.
#[derive(Debug, Clone)]
pub struct Gateway {
    config: StoreConfig,
}

impl Gateway {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Build a gateway and make sure the `recipes` table exists.
    pub fn open(config: StoreConfig) -> Result<Self, AppError> {
        let gateway = Self::new(config);
        gateway.ensure_schema()?;
        Ok(gateway)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn acquire(&self) -> Result<DbHandle, AppError> {
        let path = &self.config.database_path;
        if path.is_dir() {
            log::error!("Database path {:?} is a directory", path);
            let msg = format!("{} is a directory", path.display());
            return Err(AppError::Connection(msg));
        }
        let mut flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        if self.config.create_if_missing {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    log::error!("Cannot create database directory {:?}: {}", parent, e);
                    AppError::Connection(e.to_string())
                })?;
            }
            flags |= OpenFlags::SQLITE_OPEN_CREATE;
        }

        let conn = Connection::open_with_flags(path, flags).map_err(|e| {
            log::error!("Connection to {:?} failed: {}", path, e);
            AppError::Connection(e.to_string())
        })?;
        // LIKE comparisons are ASCII case-insensitive regardless of build defaults.
        conn.execute_batch("PRAGMA case_sensitive_like = OFF;")
            .map_err(|e| AppError::Connection(e.to_string()))?;
        log::debug!("Database connection opened: {:?}", path);
        Ok(DbHandle { conn: Some(conn) })
    }

    pub fn ensure_schema(&self) -> Result<(), AppError> {
        let handle = self.acquire()?;
        handle.conn()?.execute_batch(SCHEMA)?;
        log::info!("Recipe schema ready at {:?}", self.config.database_path);
        Ok(())
    }
}

/// A single acquired connection. Released on drop if not released earlier.
#[derive(Debug)]
pub struct DbHandle {
    conn: Option<Connection>,
}

impl DbHandle {
    pub fn conn(&self) -> Result<&Connection, AppError> {
        self.conn
            .as_ref()
            .ok_or_else(|| AppError::Connection("connection already released".into()))
    }

    pub fn is_released(&self) -> bool {
        self.conn.is_none()
    }

    /// Close the connection. Calling this again is a no-op.
    pub fn release(&mut self) {
        let Some(conn) = self.conn.take() else {
            return;
        };
        match conn.close() {
            Ok(()) => log::debug!("Database connection closed"),
            Err((_, e)) => log::warn!("Error closing connection: {}", e),
        }
    }
}

impl Drop for DbHandle {
    fn drop(&mut self) {
        self.release();
    }
}

/// Release an optional handle; `None` is a no-op.
pub fn release(handle: Option<&mut DbHandle>) {
    if let Some(h) = handle {
        h.release();
    }
}
