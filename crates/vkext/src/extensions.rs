//! Extension records and the two-call enumeration.

use std::ffi::CStr;

use ash::vk;

use crate::{Error, Result};

/// An extension reported by the implementation or a layer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExtensionRecord {
    /// The extension name, like `VK_KHR_surface`.
    pub name: String,
    /// The revision of the extension's specification.
    pub spec_version: u32,
}

impl std::fmt::Display for ExtensionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {}", self.name, self.spec_version)
    }
}

impl TryFrom<&vk::ExtensionProperties> for ExtensionRecord {
    type Error = Error;

    fn try_from(properties: &vk::ExtensionProperties) -> Result<Self> {
        let name = properties
            .extension_name_as_c_str()
            .map_err(|_| Error::MalformedExtensionName)?;
        Ok(Self {
            name: name.to_string_lossy().into_owned(),
            spec_version: properties.spec_version,
        })
    }
}

/// Calls `enumerate` once with a null buffer to learn the count, then, if
/// anything was counted, once more with a buffer of exactly that many
/// elements.
///
/// A smaller count on the second call truncates the result. A larger set
/// (reported as `VK_INCOMPLETE`) is an error rather than a silent
/// truncation.
pub(crate) fn query_then_fetch(
    enumerate: vk::PFN_vkEnumerateInstanceExtensionProperties,
    layer_name: Option<&CStr>,
) -> Result<Vec<ExtensionRecord>> {
    let layer_name = layer_name.map_or(std::ptr::null(), CStr::as_ptr);

    let mut queried = 0u32;
    unsafe { enumerate(layer_name, &mut queried, std::ptr::null_mut()) }
        .result()
        .map_err(Error::Enumeration)?;
    log::debug!("The implementation reports {queried} extensions.");

    if queried == 0 {
        return Ok(Vec::new());
    }

    let mut properties = vec![vk::ExtensionProperties::default(); queried as usize];
    let mut fetched = queried;
    match unsafe { enumerate(layer_name, &mut fetched, properties.as_mut_ptr()) } {
        vk::Result::SUCCESS => {}
        vk::Result::INCOMPLETE => return Err(Error::ExtensionCountGrew { queried }),
        status => return Err(Error::Enumeration(status)),
    }

    if fetched > queried {
        return Err(Error::ExtensionCountGrew { queried });
    }
    if fetched < queried {
        log::warn!("Counted {queried} extensions but only {fetched} were written.");
        properties.truncate(fetched as usize);
    }

    properties.iter().map(ExtensionRecord::try_from).collect()
}
