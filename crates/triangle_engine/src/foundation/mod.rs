//! Foundation module - Core utilities and types
//!
//! - Logging initialization

pub mod logging;
