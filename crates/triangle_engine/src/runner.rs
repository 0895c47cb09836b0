//! Top-level entry point: run the controller and map the outcome to a process exit code

use crate::application::ApplicationController;
use crate::backend::{GraphicsApi, WindowSystem};
use crate::core::LaunchConfig;
use std::error::Error;
use std::io::Write;

/// Exit code for a normal close with completed teardown
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code when any phase failed
pub const EXIT_FAILURE: i32 = 1;

/// Write an error description to the error stream
pub fn report_error<E: Write>(stderr: &mut E, error: &dyn Error) {
    if let Err(e) = writeln!(stderr, "{}", error) {
        log::warn!("Failed to write error report: {}", e);
    }
}

/// Run the full lifecycle over the given collaborators
///
/// Errors are reported to `stderr` and turned into [`EXIT_FAILURE`]; they are
/// never swallowed. All resources are released before this returns.
pub fn run_to_exit_code<W, G, E>(
    window_system: W,
    graphics: G,
    config: &LaunchConfig,
    stderr: &mut E,
) -> i32
where
    W: WindowSystem,
    G: GraphicsApi,
    E: Write,
{
    let mut controller =
        ApplicationController::new(window_system, graphics).with_diagnostics(&config.diagnostics);

    match controller.run() {
        Ok(()) => {
            log::info!("Application finished successfully");
            EXIT_SUCCESS
        }
        Err(e) => {
            log::error!("Application error: {}", e);
            report_error(stderr, &e);
            EXIT_FAILURE
        }
    }
}
