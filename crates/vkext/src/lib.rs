//! `vkext` creates a Vulkan instance and lists the instance extensions the
//! implementation (or a layer) reports.
//!
//! The native layer sits behind the [`Platform`] trait. [`vk::VulkanPlatform`]
//! talks to the system loader; tests script their own.

#![warn(missing_docs)]

pub mod app_info;
pub mod dispatch;
pub mod driver;
pub mod error;
pub mod extensions;
pub mod instance;
pub mod platform;
pub mod vk;

#[cfg(test)]
mod mock;

pub use app_info::{ApplicationDescriptor, ApplicationDescriptorBuilder};
pub use dispatch::InstanceDispatch;
pub use driver::{run, Config};
pub use error::{Error, Result};
pub use extensions::ExtensionRecord;
pub use instance::Instance;
pub use platform::Platform;
