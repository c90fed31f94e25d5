//! Caller-facing handlers: store failures are logged and degraded to plain
//! values (empty list, `false`, [`recipe::INVALID_ID`]) instead of returned.

pub mod recipe;
