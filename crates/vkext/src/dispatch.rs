//! Commands resolved against an instance.

use std::{ffi::CStr, marker::PhantomData};

use ash::vk;

use crate::{
    extensions::{self, ExtensionRecord},
    instance::Instance,
    platform::Platform,
    Error, Result,
};

const ENUMERATE_INSTANCE_EXTENSION_PROPERTIES: &CStr = c"vkEnumerateInstanceExtensionProperties";

/// The instance-level commands this crate calls, looked up once after the
/// instance is created.
///
/// The table borrows the instance it was resolved from, so the commands
/// can't be called after the instance is destroyed or the loader unloaded:
///
/// ```compile_fail,E0597
/// use vkext::{vk::VulkanPlatform, ApplicationDescriptor, Instance, InstanceDispatch};
///
/// let platform = VulkanPlatform::load().unwrap();
/// let dispatch = {
///     let instance = Instance::new(&platform, &ApplicationDescriptor::default(), &[]).unwrap();
///     InstanceDispatch::load(&instance).unwrap()
/// };
/// dispatch.enumerate_extension_properties(None).unwrap();
/// ```
#[derive(Clone, Copy)]
pub struct InstanceDispatch<'i> {
    enumerate_instance_extension_properties: vk::PFN_vkEnumerateInstanceExtensionProperties,
    _instance: PhantomData<&'i ()>,
}

impl std::fmt::Debug for InstanceDispatch<'_> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt.debug_struct("InstanceDispatch")
            .field(
                "enumerate_instance_extension_properties",
                &(self.enumerate_instance_extension_properties as *const ()),
            )
            .finish()
    }
}

impl<'i> InstanceDispatch<'i> {
    /// Resolves every command against `instance`. Fails on the first
    /// command the loader doesn't know.
    pub fn load<P: Platform>(instance: &'i Instance<'_, P>) -> Result<Self> {
        let pointer = instance
            .platform()
            .instance_proc_addr(instance.handle(), ENUMERATE_INSTANCE_EXTENSION_PROPERTIES)
            .ok_or(Error::MissingFunction {
                name: ENUMERATE_INSTANCE_EXTENSION_PROPERTIES,
            })?;
        log::debug!(
            "Resolved {ENUMERATE_INSTANCE_EXTENSION_PROPERTIES:?} at {:p}.",
            pointer as *const ()
        );

        // `Platform` implementations return pointers matching the name's signature.
        let enumerate_instance_extension_properties = unsafe {
            std::mem::transmute::<
                unsafe extern "system" fn(),
                vk::PFN_vkEnumerateInstanceExtensionProperties,
            >(pointer)
        };

        Ok(Self {
            enumerate_instance_extension_properties,
            _instance: PhantomData,
        })
    }

    /// Lists the extensions of the implementation, or of `layer_name` when
    /// given.
    pub fn enumerate_extension_properties(
        &self,
        layer_name: Option<&CStr>,
    ) -> Result<Vec<ExtensionRecord>> {
        extensions::query_then_fetch(self.enumerate_instance_extension_properties, layer_name)
    }
}
