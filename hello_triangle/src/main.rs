//! Hello Triangle
//!
//! Opens an 800x600 window, creates a Vulkan instance, and waits for the
//! window to be closed.
//!
//! Usage: `hello_triangle [config.toml|config.ron]`

use std::io;
use triangle_engine::prelude::*;

fn load_config() -> AppResult<LaunchConfig> {
    let config = match std::env::args().nth(1) {
        Some(path) => LaunchConfig::load_from_file(path)?,
        None => LaunchConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            report_error(&mut io::stderr(), &e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    logging::init(
        config
            .logging
            .level_filter()
            .unwrap_or(log::LevelFilter::Info),
    );
    log::info!("Starting Hello Triangle");

    let code = run_to_exit_code(
        GlfwWindowSystem::new(),
        AshGraphicsApi::new(),
        &config,
        &mut io::stderr(),
    );
    std::process::exit(code);
}
