//! Application controller and lifecycle state machine
//!
//! The controller owns the windowing subsystem, the window, and the graphics
//! instance, and moves through a strictly linear sequence of phases:
//!
//! ```text
//! Uninitialized -> WindowReady -> GraphicsReady -> Running -> TornDown
//! ```
//!
//! Teardown releases whatever was acquired, in reverse order of acquisition:
//! graphics instance, then window, then windowing subsystem. It runs on the
//! normal exit path, on every failed transition, and from `Drop`.

use crate::backend::{ApplicationMetadata, GraphicsApi, WindowDescriptor, WindowError, WindowSystem};
use crate::config::ConfigError;
use crate::core::DiagnosticsConfig;
use crate::debug;
use ash::vk;
use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Windowing subsystem or window creation failed
    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    /// The graphics API did not report success while creating the instance
    #[error("failed to create instance: {0:?}")]
    GraphicsInstanceCreation(vk::Result),

    /// `advance()` was called with no forward transition available
    #[error("no lifecycle transition out of {0:?}")]
    InvalidTransition(Phase),

    /// Launch configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Lifecycle phase of the [`ApplicationController`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing acquired yet
    Uninitialized,
    /// Windowing subsystem initialized and window created
    WindowReady,
    /// Graphics instance created
    GraphicsReady,
    /// Event loop entered
    Running,
    /// Everything released
    TornDown,
}

/// Sequences a windowing subsystem and a graphics API through the application lifecycle
///
/// The controller is the sole owner of both handles. A graphics instance only
/// ever exists while a window exists.
pub struct ApplicationController<W: WindowSystem, G: GraphicsApi> {
    phase: Phase,
    window_system: W,
    graphics: G,
    // shutdown() is owed as soon as initialize() succeeds, even if window creation then fails
    subsystem_initialized: bool,
    window: Option<W::Window>,
    instance: Option<G::Instance>,
    list_extensions: bool,
}

impl<W: WindowSystem, G: GraphicsApi> ApplicationController<W, G> {
    /// Create an uninitialized controller over the given collaborators
    pub fn new(window_system: W, graphics: G) -> Self {
        Self {
            phase: Phase::Uninitialized,
            window_system,
            graphics,
            subsystem_initialized: false,
            window: None,
            instance: None,
            list_extensions: true,
        }
    }

    /// Apply diagnostic output settings
    pub fn with_diagnostics(mut self, diagnostics: &DiagnosticsConfig) -> Self {
        self.list_extensions = diagnostics.list_extensions;
        self
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the controller currently owns a window
    pub fn has_window(&self) -> bool {
        self.window.is_some()
    }

    /// Whether the controller currently owns a graphics instance
    pub fn has_instance(&self) -> bool {
        self.instance.is_some()
    }

    /// Run every phase to completion and tear down
    ///
    /// Teardown runs whether the phases succeeded or not; the first error is returned.
    pub fn run(&mut self) -> AppResult<()> {
        let result = self.run_phases();
        self.teardown();
        result
    }

    fn run_phases(&mut self) -> AppResult<()> {
        while self.phase != Phase::Running {
            self.advance()?;
        }
        Ok(())
    }

    /// Perform the next forward transition and return the phase reached
    ///
    /// Advancing out of `GraphicsReady` enters the event loop and only returns
    /// once a close has been requested. A failed transition tears down
    /// everything acquired so far before the error is returned.
    pub fn advance(&mut self) -> AppResult<Phase> {
        let from = self.phase;
        let result = match from {
            Phase::Uninitialized => self.init_window(),
            Phase::WindowReady => self.init_graphics(),
            Phase::GraphicsReady => {
                self.main_loop();
                Ok(())
            }
            Phase::Running | Phase::TornDown => return Err(AppError::InvalidTransition(from)),
        };

        if let Err(e) = result {
            log::error!("Transition out of {:?} failed: {}", from, e);
            self.teardown();
            return Err(e);
        }

        log::info!("Lifecycle phase {:?} -> {:?}", from, self.phase);
        Ok(self.phase)
    }

    fn init_window(&mut self) -> AppResult<()> {
        self.window_system.initialize()?;
        self.subsystem_initialized = true;

        let descriptor = WindowDescriptor::default();
        descriptor.validate()?;

        let window = self.window_system.create_window(&descriptor)?;
        log::info!(
            "Created {}x{} window \"{}\"",
            descriptor.width,
            descriptor.height,
            descriptor.title
        );

        self.window = Some(window);
        self.phase = Phase::WindowReady;
        Ok(())
    }

    fn init_graphics(&mut self) -> AppResult<()> {
        debug_assert!(self.window.is_some(), "graphics instance requires a window");

        let metadata = ApplicationMetadata::default();
        let extensions = self.window_system.required_instance_extensions()?;
        log::debug!("Required instance extensions: {:?}", extensions);

        let instance = self
            .graphics
            .create_instance(&metadata, &extensions)
            .map_err(AppError::GraphicsInstanceCreation)?;
        log::info!(
            "Created graphics instance for {} {} (API {})",
            metadata.application_name,
            metadata.application_version,
            metadata.api_version
        );

        self.instance = Some(instance);
        self.phase = Phase::GraphicsReady;

        if self.list_extensions {
            self.report_supported_extensions();
        }
        Ok(())
    }

    fn report_supported_extensions(&self) {
        match self.graphics.enumerate_extensions() {
            Ok(extensions) => debug::print_extension_listing(&extensions),
            Err(status) => log::warn!("Could not enumerate instance extensions: {:?}", status),
        }
    }

    fn main_loop(&mut self) {
        self.phase = Phase::Running;

        let Some(window) = self.window.as_ref() else {
            return;
        };
        while !self.window_system.should_close(window) {
            self.window_system.poll_events();
        }
        log::info!("Close requested");
    }

    /// Release every acquired resource in reverse order of acquisition
    ///
    /// Idempotent: once `TornDown` is reached further calls do nothing.
    pub fn teardown(&mut self) {
        if self.phase == Phase::TornDown {
            return;
        }

        if let Some(instance) = self.instance.take() {
            log::debug!("Destroying graphics instance");
            self.graphics.destroy_instance(instance);
        }

        if let Some(window) = self.window.take() {
            log::debug!("Destroying window");
            self.window_system.destroy_window(window);
        }

        if self.subsystem_initialized {
            log::debug!("Shutting down windowing subsystem");
            self.subsystem_initialized = false;
            self.window_system.shutdown();
        }

        self.phase = Phase::TornDown;
    }
}

impl<W: WindowSystem, G: GraphicsApi> Drop for ApplicationController<W, G> {
    fn drop(&mut self) {
        self.teardown();
    }
}
