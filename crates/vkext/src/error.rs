//! Errors.

use ash::vk;

use crate::app_info::ApplicationDescriptorBuilderError;

/// A result type with [`Error`] as the default error.
pub type Result<T = (), E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while talking to the native layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The Vulkan loader library could not be found or loaded.
    #[error("couldn't load the Vulkan loader: {0}")]
    Loader(#[from] ash::LoadingError),
    /// The application descriptor is incomplete.
    #[error("invalid application descriptor: {0}")]
    Descriptor(#[from] ApplicationDescriptorBuilderError),
    /// `vkCreateInstance` returned a non-success status.
    #[error("couldn't create a Vulkan instance: {0}")]
    InstanceCreation(vk::Result),
    /// The loader returned a null pointer for a command.
    #[error("couldn't resolve {name:?} against the instance")]
    MissingFunction {
        /// The command name that was looked up.
        name: &'static std::ffi::CStr,
    },
    /// The enumeration call returned a non-success status.
    #[error("couldn't enumerate the extension properties: {0}")]
    Enumeration(vk::Result),
    /// More extensions appeared between the count query and the fetch.
    #[error("the extension set grew after {queried} extensions were counted")]
    ExtensionCountGrew {
        /// The count reported by the first call.
        queried: u32,
    },
    /// The fixed-size name buffer of an extension has no NUL terminator.
    #[error("an extension name is not NUL-terminated")]
    MalformedExtensionName,
    /// A user supplied name contains an interior NUL byte.
    #[error("{0:?} contains a NUL byte")]
    InvalidName(String),
    /// Writing the listing failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
