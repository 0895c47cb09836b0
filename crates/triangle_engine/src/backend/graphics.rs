//! Graphics API instance contract
//!
//! Status codes are `ash::vk::Result`. Anything other than a successful
//! creation is treated uniformly as failure by the controller.

use ash::vk;
use std::fmt;

/// Three-component version number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    /// Major version
    pub major: u32,
    /// Minor version
    pub minor: u32,
    /// Patch version
    pub patch: u32,
}

impl Version {
    /// Create a version from its components
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }

    /// Pack into the Vulkan `VK_MAKE_API_VERSION` layout with variant 0
    pub fn to_vk(self) -> u32 {
        vk::make_api_version(0, self.major, self.minor, self.patch)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Application description handed to the driver at instance creation
///
/// Lives only for the duration of [`GraphicsApi::create_instance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationMetadata {
    /// Application name
    pub application_name: String,
    /// Application version
    pub application_version: Version,
    /// Engine name
    pub engine_name: String,
    /// Engine version
    pub engine_version: Version,
    /// Lowest API version the application targets
    pub api_version: Version,
}

impl Default for ApplicationMetadata {
    fn default() -> Self {
        Self {
            application_name: "Hello Triangle".to_string(),
            application_version: Version::new(1, 0, 0),
            engine_name: "No Engine".to_string(),
            engine_version: Version::new(1, 0, 0),
            // Vulkan 1.0 baseline
            api_version: Version::new(1, 0, 0),
        }
    }
}

/// One instance extension reported by the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionDescriptor {
    /// Extension name, e.g. `VK_KHR_surface`
    pub name: String,
    /// Extension specification revision
    pub spec_version: u32,
}

/// Graphics API consumed by the application controller
pub trait GraphicsApi {
    /// Opaque instance handle, exclusively owned by the caller until destroyed
    type Instance;

    /// Create an instance enabling exactly `extensions`
    fn create_instance(
        &mut self,
        metadata: &ApplicationMetadata,
        extensions: &[String],
    ) -> Result<Self::Instance, vk::Result>;

    /// Every instance extension the platform supports, in platform order
    fn enumerate_extensions(&self) -> Result<Vec<ExtensionDescriptor>, vk::Result>;

    /// Destroy an instance, consuming its handle
    fn destroy_instance(&mut self, instance: Self::Instance);
}
