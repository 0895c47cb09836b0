//! Backend-agnostic windowing subsystem contract
//!
//! The application controller never talks to GLFW directly. It drives any
//! type implementing [`WindowSystem`], which lets the lifecycle sequencing be
//! exercised against recording mocks in tests.

use thiserror::Error;

/// Window management errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// The windowing library could not be initialized
    #[error("windowing subsystem initialization failed")]
    InitializationFailed,

    /// The backend could not produce a window handle
    #[error("failed to create window")]
    CreationFailed,

    /// The descriptor was rejected before reaching the backend
    #[error("invalid window descriptor: {0}")]
    InvalidDescriptor(String),

    /// An operation was attempted before `initialize()` succeeded
    #[error("windowing subsystem is not initialized")]
    NotInitialized,

    /// The backend could not report the instance extensions it needs for presentation
    #[error("required instance extensions unavailable: {0}")]
    ExtensionsUnavailable(String),
}

/// Result alias for window backend operations
pub type WindowResult<T> = Result<T, WindowError>;

/// Immutable window creation parameters
///
/// Built once when the window phase starts and consumed by
/// [`WindowSystem::create_window`]. Nothing keeps it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowDescriptor {
    /// Client area width in pixels
    pub width: u32,
    /// Client area height in pixels
    pub height: u32,
    /// Title bar text
    pub title: String,
    /// Whether the user may resize the window
    pub resizable: bool,
    /// Whether the backend should bind a legacy client API context (OpenGL) to the window
    pub bind_client_api: bool,
}

impl WindowDescriptor {
    /// Check the descriptor before handing it to a backend
    pub fn validate(&self) -> WindowResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(WindowError::InvalidDescriptor(format!(
                "dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.title.is_empty() {
            return Err(WindowError::InvalidDescriptor("title cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for WindowDescriptor {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Vulkan".to_string(),
            resizable: false,
            bind_client_api: false,
        }
    }
}

/// Windowing subsystem consumed by the application controller
///
/// # Lifecycle
/// `initialize()` must succeed before any other call and is invoked at most
/// once. `shutdown()` is invoked at most once, after every window created
/// through this subsystem has been handed back to `destroy_window()`.
///
/// # Thread Safety
/// Not `Send`: GLFW requires every call to happen on the main thread.
pub trait WindowSystem {
    /// Opaque window handle, exclusively owned by the caller until destroyed
    type Window;

    /// Initialize process-wide windowing state
    fn initialize(&mut self) -> WindowResult<()>;

    /// Create a window from the descriptor
    fn create_window(&mut self, descriptor: &WindowDescriptor) -> WindowResult<Self::Window>;

    /// Instance extensions the backend needs to present to its windows, in backend order
    fn required_instance_extensions(&self) -> WindowResult<Vec<String>>;

    /// Whether a close has been requested for the window
    fn should_close(&self, window: &Self::Window) -> bool;

    /// Process pending OS events
    ///
    /// May block until the OS delivers events.
    fn poll_events(&mut self);

    /// Destroy a window, consuming its handle
    fn destroy_window(&mut self, window: Self::Window);

    /// Release process-wide windowing state
    fn shutdown(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_descriptor_matches_fixed_configuration() {
        let descriptor = WindowDescriptor::default();
        assert_eq!(descriptor.width, 800);
        assert_eq!(descriptor.height, 600);
        assert_eq!(descriptor.title, "Vulkan");
        assert!(!descriptor.resizable);
        assert!(!descriptor.bind_client_api);
        assert!(descriptor.validate().is_ok());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let descriptor = WindowDescriptor {
            height: 0,
            ..WindowDescriptor::default()
        };
        assert!(matches!(
            descriptor.validate(),
            Err(WindowError::InvalidDescriptor(_))
        ));
    }

    #[test]
    fn test_empty_title_rejected() {
        let descriptor = WindowDescriptor {
            title: String::new(),
            ..WindowDescriptor::default()
        };
        assert!(descriptor.validate().is_err());
    }
}
