//! GLFW-based window management for Vulkan rendering
//!
//! GLFW keeps process-wide state. [`GlfwWindowSystem`] owns the `glfw::Glfw`
//! token for the whole process, so initialization and termination only
//! happen through the [`WindowSystem`] calls the controller makes.

use crate::backend::window::{WindowDescriptor, WindowError, WindowResult, WindowSystem};

/// GLFW window handle together with its event receiver
pub struct GlfwWindow {
    window: glfw::PWindow,
    _events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

/// Windowing subsystem backed by GLFW
#[derive(Default)]
pub struct GlfwWindowSystem {
    glfw: Option<glfw::Glfw>,
}

impl GlfwWindowSystem {
    /// Create an uninitialized subsystem; nothing touches GLFW until `initialize()`
    pub fn new() -> Self {
        Self::default()
    }

    fn glfw_mut(&mut self) -> WindowResult<&mut glfw::Glfw> {
        self.glfw.as_mut().ok_or(WindowError::NotInitialized)
    }
}

impl WindowSystem for GlfwWindowSystem {
    type Window = GlfwWindow;

    fn initialize(&mut self) -> WindowResult<()> {
        if self.glfw.is_some() {
            log::warn!("GLFW already initialized");
            return Ok(());
        }

        let glfw = glfw::init(glfw::log_errors).map_err(|e| {
            log::error!("glfwInit failed: {:?}", e);
            WindowError::InitializationFailed
        })?;
        log::debug!("GLFW initialized (Vulkan supported: {})", glfw.vulkan_supported());

        self.glfw = Some(glfw);
        Ok(())
    }

    fn create_window(&mut self, descriptor: &WindowDescriptor) -> WindowResult<GlfwWindow> {
        let glfw = self.glfw_mut()?;

        // No OpenGL context unless explicitly requested
        let client_api = if descriptor.bind_client_api {
            glfw::ClientApiHint::OpenGl
        } else {
            glfw::ClientApiHint::NoApi
        };
        glfw.window_hint(glfw::WindowHint::ClientApi(client_api));
        glfw.window_hint(glfw::WindowHint::Resizable(descriptor.resizable));

        let (mut window, events) = glfw
            .create_window(
                descriptor.width,
                descriptor.height,
                &descriptor.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or(WindowError::CreationFailed)?;

        window.set_close_polling(true);

        Ok(GlfwWindow {
            window,
            _events: events,
        })
    }

    fn required_instance_extensions(&self) -> WindowResult<Vec<String>> {
        self.glfw
            .as_ref()
            .ok_or(WindowError::NotInitialized)?
            .get_required_instance_extensions()
            .ok_or_else(|| {
                WindowError::ExtensionsUnavailable("GLFW reports no Vulkan support".to_string())
            })
    }

    fn should_close(&self, window: &GlfwWindow) -> bool {
        window.window.should_close()
    }

    fn poll_events(&mut self) {
        if let Some(glfw) = self.glfw.as_mut() {
            glfw.poll_events();
        }
    }

    fn destroy_window(&mut self, window: GlfwWindow) {
        // glfwDestroyWindow runs when the PWindow drops
        drop(window);
    }

    fn shutdown(&mut self) {
        // Dropping the last Glfw token terminates the library
        if self.glfw.take().is_none() {
            log::warn!("GLFW shutdown requested without initialization");
        }
    }
}
