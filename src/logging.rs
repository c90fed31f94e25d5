//! Process logger setup.

use log::LevelFilter;

/// Install the env_logger backend. `RUST_LOG` overrides `level`.
/// Later calls are ignored.
pub fn init(level: LevelFilter) {
    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
    if result.is_ok() {
        log::info!("Logging initialized at {}", level);
    }
}
