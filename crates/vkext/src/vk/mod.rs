//! The system Vulkan loader, through `ash`.

use std::ffi::CStr;

use ash::{prelude::VkResult, vk};

use crate::{platform::Platform, Result};

/// The native layer backed by the Vulkan loader found at runtime.
pub struct VulkanPlatform {
    entry: ash::Entry,
}

impl std::fmt::Debug for VulkanPlatform {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt.debug_struct("VulkanPlatform")
            .field(
                "get_instance_proc_addr",
                &(self.entry.static_fn().get_instance_proc_addr as *const ()),
            )
            .finish()
    }
}

impl VulkanPlatform {
    /// Loads the Vulkan loader library.
    pub fn load() -> Result<Self> {
        let entry = unsafe { ash::Entry::load() }?;
        log::debug!("Loaded the Vulkan loader.");
        Ok(Self { entry })
    }

    /// Wraps an already loaded entry.
    pub fn from_entry(entry: ash::Entry) -> Self {
        Self { entry }
    }

    /// The loaded entry.
    pub fn entry(&self) -> &ash::Entry {
        &self.entry
    }
}

// `vkGetInstanceProcAddr` returns the named command, callable until the
// instance is destroyed.
unsafe impl Platform for VulkanPlatform {
    type Handle = ash::Instance;

    fn create_instance(&self, create_info: &vk::InstanceCreateInfo<'_>) -> VkResult<Self::Handle> {
        unsafe { self.entry.create_instance(create_info, None) }
    }

    fn instance_proc_addr(&self, instance: &Self::Handle, name: &CStr) -> vk::PFN_vkVoidFunction {
        unsafe {
            self.entry
                .get_instance_proc_addr(instance.handle(), name.as_ptr())
        }
    }

    unsafe fn destroy_instance(&self, instance: &Self::Handle) {
        instance.destroy_instance(None);
    }
}
