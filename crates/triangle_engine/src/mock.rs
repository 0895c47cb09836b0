//! Recording mock collaborators for lifecycle tests
//!
//! Both mocks append every call they receive to a shared journal so tests
//! can assert on call order across the two subsystems.

use crate::backend::{
    ApplicationMetadata, ExtensionDescriptor, GraphicsApi, WindowDescriptor, WindowError,
    WindowResult, WindowSystem,
};
use ash::vk;
use std::cell::RefCell;
use std::rc::Rc;

/// One collaborator call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Initialize,
    CreateWindow(WindowDescriptor),
    RequiredExtensions,
    ShouldClose,
    PollEvents,
    DestroyWindow,
    Shutdown,
    CreateInstance(Vec<String>),
    EnumerateExtensions,
    DestroyInstance,
}

pub type Journal = Rc<RefCell<Vec<Call>>>;

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

#[derive(Debug)]
pub struct MockWindow;

pub struct MockWindowSystem {
    journal: Journal,
    extensions: Vec<String>,
    fail_initialize: bool,
    fail_create: bool,
    fail_extension_query: bool,
    close_after_polls: usize,
    polls: usize,
}

impl MockWindowSystem {
    /// Succeeds everywhere and requests close on the first poll
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: Rc::clone(journal),
            extensions: vec!["VK_KHR_surface".to_string()],
            fail_initialize: false,
            fail_create: false,
            fail_extension_query: false,
            close_after_polls: 1,
            polls: 0,
        }
    }

    pub fn with_extensions(mut self, names: &[&str]) -> Self {
        self.extensions = names.iter().map(|name| (*name).to_string()).collect();
        self
    }

    pub fn failing_initialize(mut self) -> Self {
        self.fail_initialize = true;
        self
    }

    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn failing_extension_query(mut self) -> Self {
        self.fail_extension_query = true;
        self
    }

    pub fn close_after_polls(mut self, polls: usize) -> Self {
        self.close_after_polls = polls;
        self
    }

    fn record(&self, call: Call) {
        self.journal.borrow_mut().push(call);
    }
}

impl WindowSystem for MockWindowSystem {
    type Window = MockWindow;

    fn initialize(&mut self) -> WindowResult<()> {
        self.record(Call::Initialize);
        if self.fail_initialize {
            return Err(WindowError::InitializationFailed);
        }
        Ok(())
    }

    fn create_window(&mut self, descriptor: &WindowDescriptor) -> WindowResult<MockWindow> {
        self.record(Call::CreateWindow(descriptor.clone()));
        if self.fail_create {
            return Err(WindowError::CreationFailed);
        }
        Ok(MockWindow)
    }

    fn required_instance_extensions(&self) -> WindowResult<Vec<String>> {
        self.record(Call::RequiredExtensions);
        if self.fail_extension_query {
            return Err(WindowError::ExtensionsUnavailable("mock".to_string()));
        }
        Ok(self.extensions.clone())
    }

    fn should_close(&self, _window: &MockWindow) -> bool {
        self.record(Call::ShouldClose);
        self.polls >= self.close_after_polls
    }

    fn poll_events(&mut self) {
        self.record(Call::PollEvents);
        self.polls += 1;
    }

    fn destroy_window(&mut self, _window: MockWindow) {
        self.record(Call::DestroyWindow);
    }

    fn shutdown(&mut self) {
        self.record(Call::Shutdown);
    }
}

#[derive(Debug)]
pub struct MockInstance;

pub struct MockGraphicsApi {
    journal: Journal,
    supported: Vec<ExtensionDescriptor>,
    create_status: Option<vk::Result>,
    enumerate_status: Option<vk::Result>,
}

impl MockGraphicsApi {
    /// Succeeds everywhere and reports a single supported extension
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: Rc::clone(journal),
            supported: vec![ExtensionDescriptor {
                name: "VK_KHR_surface".to_string(),
                spec_version: 25,
            }],
            create_status: None,
            enumerate_status: None,
        }
    }

    pub fn with_supported(mut self, names: &[&str]) -> Self {
        self.supported = names
            .iter()
            .map(|name| ExtensionDescriptor {
                name: (*name).to_string(),
                spec_version: 1,
            })
            .collect();
        self
    }

    pub fn failing_with(mut self, status: vk::Result) -> Self {
        self.create_status = Some(status);
        self
    }

    pub fn failing_enumeration(mut self, status: vk::Result) -> Self {
        self.enumerate_status = Some(status);
        self
    }

    fn record(&self, call: Call) {
        self.journal.borrow_mut().push(call);
    }
}

impl GraphicsApi for MockGraphicsApi {
    type Instance = MockInstance;

    fn create_instance(
        &mut self,
        _metadata: &ApplicationMetadata,
        extensions: &[String],
    ) -> Result<MockInstance, vk::Result> {
        self.record(Call::CreateInstance(extensions.to_vec()));
        match self.create_status {
            Some(status) => Err(status),
            None => Ok(MockInstance),
        }
    }

    fn enumerate_extensions(&self) -> Result<Vec<ExtensionDescriptor>, vk::Result> {
        self.record(Call::EnumerateExtensions);
        match self.enumerate_status {
            Some(status) => Err(status),
            None => Ok(self.supported.clone()),
        }
    }

    fn destroy_instance(&mut self, _instance: MockInstance) {
        self.record(Call::DestroyInstance);
    }
}
