//! # Backend Module
//!
//! Collaborator contracts consumed by the application controller, and their
//! production implementations.
//!
//! ## Organization
//!
//! - **Window**: [`WindowSystem`] trait and window creation parameters
//! - **Graphics**: [`GraphicsApi`] trait and instance creation parameters
//! - **Vulkan**: GLFW and ash implementations of both traits

pub mod graphics;
pub mod vulkan;
pub mod window;

pub use graphics::{ApplicationMetadata, ExtensionDescriptor, GraphicsApi, Version};
pub use window::{WindowDescriptor, WindowError, WindowResult, WindowSystem};
