//! Instance creation and ownership.

use std::ffi::{c_char, CString};

use ash::vk;

use crate::{app_info::ApplicationDescriptor, platform::Platform, Error, Result};

/// Converts the names into C strings, returning the pointers alongside the
/// strings that own them. The pointers are valid while the strings live.
fn c_string_pointers(input: &[String]) -> Result<(Vec<*const c_char>, Vec<CString>)> {
    let strings = input
        .iter()
        .map(|s| CString::new(s.as_str()).map_err(|_| Error::InvalidName(s.clone())))
        .collect::<Result<Vec<_>>>()?;
    let pointers = strings.iter().map(|s| s.as_ptr()).collect();
    Ok((pointers, strings))
}

/// A native instance, destroyed when dropped.
pub struct Instance<'p, P: Platform> {
    platform: &'p P,
    handle: P::Handle,
}

impl<P: Platform> std::fmt::Debug for Instance<'_, P>
where
    P::Handle: std::fmt::Debug,
{
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt.debug_struct("Instance")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

impl<'p, P: Platform> Instance<'p, P> {
    /// Creates an instance for the application described by `descriptor`,
    /// with `enabled_layers` enabled.
    pub fn new(
        platform: &'p P,
        descriptor: &ApplicationDescriptor,
        enabled_layers: &[String],
    ) -> Result<Self> {
        let native_info = descriptor.to_native()?;
        let application_info = native_info.application_info();
        let (layer_pointers, _layer_names) = c_string_pointers(enabled_layers)?;

        let create_info = vk::InstanceCreateInfo::default()
            .application_info(&application_info)
            .enabled_layer_names(&layer_pointers);

        log::debug!(
            "Creating an instance for {:?} targeting Vulkan {}.{} with layers {enabled_layers:?}.",
            descriptor.application_name(),
            vk::api_version_major(descriptor.api_version()),
            vk::api_version_minor(descriptor.api_version()),
        );
        let handle = platform
            .create_instance(&create_info)
            .map_err(Error::InstanceCreation)?;

        Ok(Self { platform, handle })
    }

    /// The platform this instance was created on.
    pub fn platform(&self) -> &'p P {
        self.platform
    }

    /// The native handle.
    pub fn handle(&self) -> &P::Handle {
        &self.handle
    }
}

impl<P: Platform> Drop for Instance<'_, P> {
    fn drop(&mut self) {
        log::debug!("Destroying the instance.");
        unsafe { self.platform.destroy_instance(&self.handle) }
    }
}
