//! # Triangle Engine
//!
//! Bootstrap core for a Vulkan application: window creation through GLFW,
//! Vulkan instance creation through ash, a close-request event loop, and
//! ordered teardown.
//!
//! ## Lifecycle
//!
//! [`ApplicationController`] sequences a [`WindowSystem`](backend::WindowSystem)
//! and a [`GraphicsApi`](backend::GraphicsApi) through
//! `Uninitialized -> WindowReady -> GraphicsReady -> Running -> TornDown`.
//! Whatever was acquired is released in reverse order, including when a
//! phase fails part way.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use triangle_engine::prelude::*;
//!
//! let code = run_to_exit_code(
//!     GlfwWindowSystem::new(),
//!     AshGraphicsApi::new(),
//!     &LaunchConfig::default(),
//!     &mut std::io::stderr(),
//! );
//! std::process::exit(code);
//! ```

#![warn(missing_docs)]

pub mod backend;
pub mod config;
pub mod core;
pub mod debug;
pub mod foundation;
pub mod runner;

mod application;

#[cfg(test)]
mod mock;

pub use application::{AppError, AppResult, ApplicationController, Phase};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        backend::{
            vulkan::{AshGraphicsApi, GlfwWindowSystem},
            ApplicationMetadata, GraphicsApi, WindowDescriptor, WindowSystem,
        },
        config::Config,
        core::config::LaunchConfig,
        foundation::logging,
        runner::{report_error, run_to_exit_code, EXIT_FAILURE, EXIT_SUCCESS},
        AppError, AppResult, ApplicationController, Phase,
    };
}
