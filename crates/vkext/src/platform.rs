//! The seam between this crate and the native Vulkan layer.

use std::ffi::CStr;

use ash::{prelude::VkResult, vk};

/// The three native entry points the extension listing needs.
///
/// [`crate::vk::VulkanPlatform`] implements this on top of the system
/// loader. Anything else (a mock in tests, a statically linked driver) only
/// has to provide instance creation, command lookup and destruction.
///
/// # Safety
///
/// The crate calls whatever [`Platform::instance_proc_addr`] returns with
/// the signature of the command that was named, for as long as the instance
/// lives. An implementation must only return pointers to functions with
/// exactly that signature (`PFN_<name>` in [`ash::vk`]) which stay callable
/// until [`Platform::destroy_instance`] runs.
///
/// A safe implementation doesn't compile:
///
/// ```compile_fail,E0200
/// use std::ffi::CStr;
/// use ash::{prelude::VkResult, vk};
///
/// struct Loader;
///
/// impl vkext::Platform for Loader {
///     type Handle = ();
///
///     fn create_instance(&self, _: &vk::InstanceCreateInfo<'_>) -> VkResult<()> {
///         Ok(())
///     }
///
///     fn instance_proc_addr(&self, _: &(), _: &CStr) -> vk::PFN_vkVoidFunction {
///         None
///     }
///
///     unsafe fn destroy_instance(&self, _: &()) {}
/// }
/// ```
pub unsafe trait Platform {
    /// The owned native instance.
    type Handle;

    /// Calls `vkCreateInstance`.
    fn create_instance(&self, create_info: &vk::InstanceCreateInfo<'_>) -> VkResult<Self::Handle>;

    /// Calls `vkGetInstanceProcAddr` for `name` against `instance`.
    ///
    /// A non-null result must point to a function with the signature of
    /// `name`, see the trait's safety section.
    fn instance_proc_addr(&self, instance: &Self::Handle, name: &CStr) -> vk::PFN_vkVoidFunction;

    /// Calls `vkDestroyInstance`.
    ///
    /// # Safety
    ///
    /// `instance` must have been returned by [`Platform::create_instance`]
    /// on this platform and must not be used afterwards.
    unsafe fn destroy_instance(&self, instance: &Self::Handle);
}
