//! The application descriptor handed to the loader at instance creation.

use std::ffi::CString;

use ash::vk;
use derive_builder::Builder;

use crate::{Error, Result};

/// Identifies the application and engine to the Vulkan implementation.
///
/// The descriptor is immutable once built. Names are plain strings; they are
/// turned into C strings by [`ApplicationDescriptor::to_native`] right before
/// instance creation.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(default, setter(into))]
pub struct ApplicationDescriptor {
    /// The application name, shown in debugging tools.
    application_name: String,
    /// The application version, see [`vk::make_api_version`].
    application_version: u32,
    /// The engine name.
    engine_name: String,
    /// The engine version.
    engine_version: u32,
    /// The highest Vulkan API version the application targets.
    api_version: u32,
}

impl Default for ApplicationDescriptor {
    fn default() -> Self {
        Self {
            application_name: "vkext".to_owned(),
            application_version: vk::make_api_version(0, 0, 1, 0),
            engine_name: "No Engine".to_owned(),
            engine_version: vk::make_api_version(0, 0, 1, 0),
            api_version: vk::API_VERSION_1_0,
        }
    }
}

impl ApplicationDescriptor {
    /// Creates a builder with every field defaulted.
    pub fn builder() -> ApplicationDescriptorBuilder {
        ApplicationDescriptorBuilder::default()
    }

    /// The application name.
    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    /// The engine name.
    pub fn engine_name(&self) -> &str {
        &self.engine_name
    }

    /// The target API version.
    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    /// Converts the names into the C strings the native structure points at.
    pub fn to_native(&self) -> Result<NativeApplicationInfo> {
        let c_string =
            |s: &str| CString::new(s).map_err(|_| Error::InvalidName(s.to_owned()));
        Ok(NativeApplicationInfo {
            application_name: c_string(&self.application_name)?,
            application_version: self.application_version,
            engine_name: c_string(&self.engine_name)?,
            engine_version: self.engine_version,
            api_version: self.api_version,
        })
    }
}

/// An [`ApplicationDescriptor`] with its names as C strings.
#[derive(Debug)]
pub struct NativeApplicationInfo {
    application_name: CString,
    application_version: u32,
    engine_name: CString,
    engine_version: u32,
    api_version: u32,
}

impl NativeApplicationInfo {
    /// Returns the native structure, borrowing the names from `self`.
    pub fn application_info(&self) -> vk::ApplicationInfo<'_> {
        vk::ApplicationInfo::default()
            .application_name(&self.application_name)
            .application_version(self.application_version)
            .engine_name(&self.engine_name)
            .engine_version(self.engine_version)
            .api_version(self.api_version)
    }
}
