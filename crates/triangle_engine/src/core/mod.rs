//! # Core Module
//!
//! Launch-time configuration shared by the library and the application binary.

pub mod config;

pub use config::{DiagnosticsConfig, LaunchConfig, LoggingConfig};
