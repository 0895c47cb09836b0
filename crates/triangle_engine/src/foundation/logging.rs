//! Logging utilities

/// Initialize the logging system
///
/// `default_level` applies when `RUST_LOG` is unset. Calling this more than
/// once is harmless; later calls leave the first logger in place.
pub fn init(default_level: log::LevelFilter) {
    let env = env_logger::Env::default().default_filter_or(default_level.as_str());
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
