//! Vulkan instance management through ash
//!
//! The Vulkan loader is opened lazily on the first instance creation, so a
//! missing driver surfaces as an instance creation failure and goes through
//! the same teardown path as any other creation status.

use crate::backend::graphics::{ApplicationMetadata, ExtensionDescriptor, GraphicsApi};
use ash::{vk, Entry, Instance};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Graphics API backed by the system Vulkan loader
///
/// The loaded [`Entry`] is kept for the lifetime of this value and must
/// outlive every [`Instance`] it creates.
#[derive(Default)]
pub struct AshGraphicsApi {
    entry: Option<Entry>,
}

impl AshGraphicsApi {
    /// Create the backend without loading Vulkan yet
    pub fn new() -> Self {
        Self::default()
    }

    fn load_entry(&mut self) -> Result<&Entry, vk::Result> {
        if self.entry.is_none() {
            let entry = unsafe { Entry::load() }.map_err(|e| {
                log::error!("Failed to load Vulkan: {:?}", e);
                vk::Result::ERROR_INITIALIZATION_FAILED
            })?;
            self.entry = Some(entry);
        }
        self.entry.as_ref().ok_or(vk::Result::ERROR_INITIALIZATION_FAILED)
    }
}

fn to_cstring(value: &str) -> Result<CString, vk::Result> {
    CString::new(value).map_err(|_| {
        log::error!("String contains an interior NUL byte: {:?}", value);
        vk::Result::ERROR_INITIALIZATION_FAILED
    })
}

fn extension_name(properties: &vk::ExtensionProperties) -> String {
    unsafe { CStr::from_ptr(properties.extension_name.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}

impl GraphicsApi for AshGraphicsApi {
    type Instance = Instance;

    fn create_instance(
        &mut self,
        metadata: &ApplicationMetadata,
        extensions: &[String],
    ) -> Result<Instance, vk::Result> {
        let entry = self.load_entry()?;

        let app_name = to_cstring(&metadata.application_name)?;
        let engine_name = to_cstring(&metadata.engine_name)?;
        let app_info = vk::ApplicationInfo::builder()
            .application_name(&app_name)
            .application_version(metadata.application_version.to_vk())
            .engine_name(&engine_name)
            .engine_version(metadata.engine_version.to_vk())
            .api_version(metadata.api_version.to_vk());

        let extension_names = extensions
            .iter()
            .map(|name| to_cstring(name))
            .collect::<Result<Vec<_>, _>>()?;
        let extension_ptrs: Vec<*const c_char> =
            extension_names.iter().map(|name| name.as_ptr()).collect();

        // No validation layers: the enabled set is exactly what the window needs
        let create_info = vk::InstanceCreateInfo::builder()
            .application_info(&app_info)
            .enabled_extension_names(&extension_ptrs);

        unsafe { entry.create_instance(&create_info, None) }
    }

    fn enumerate_extensions(&self) -> Result<Vec<ExtensionDescriptor>, vk::Result> {
        let entry = self
            .entry
            .as_ref()
            .ok_or(vk::Result::ERROR_INITIALIZATION_FAILED)?;

        let properties = unsafe { entry.enumerate_instance_extension_properties(None) }?;

        Ok(properties
            .iter()
            .map(|p| ExtensionDescriptor {
                name: extension_name(p),
                spec_version: p.spec_version,
            })
            .collect())
    }

    fn destroy_instance(&mut self, instance: Instance) {
        unsafe {
            instance.destroy_instance(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_name_stops_at_nul() {
        let mut properties = vk::ExtensionProperties::default();
        for (slot, byte) in properties
            .extension_name
            .iter_mut()
            .zip(b"VK_KHR_surface\0".iter())
        {
            *slot = *byte as c_char;
        }
        assert_eq!(extension_name(&properties), "VK_KHR_surface");
    }

    #[test]
    fn test_interior_nul_rejected() {
        assert_eq!(
            to_cstring("VK_KHR\0surface").unwrap_err(),
            vk::Result::ERROR_INITIALIZATION_FAILED
        );
    }

    #[test]
    fn test_enumerate_before_load_fails() {
        let api = AshGraphicsApi::new();
        assert!(api.enumerate_extensions().is_err());
    }
}
