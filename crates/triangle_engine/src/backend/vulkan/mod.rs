//! GLFW windowing and ash-based Vulkan instance backends

pub mod instance;
pub mod window;

pub use instance::AshGraphicsApi;
pub use window::{GlfwWindow, GlfwWindowSystem};
