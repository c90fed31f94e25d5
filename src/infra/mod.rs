//! Infrastructure: store configuration, SQLite gateway, schema.

pub mod config;
pub mod db;

pub use config::StoreConfig;
pub use db::{DbHandle, Gateway};
