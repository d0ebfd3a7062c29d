//! Create an instance, resolve the enumeration command, print what it reports.

use std::{ffi::CString, io::Write};

use crate::{
    app_info::ApplicationDescriptor, dispatch::InstanceDispatch, instance::Instance,
    platform::Platform, Error, Result,
};

/// The validation layer `--validation` enables.
pub const VALIDATION_LAYER: &str = "VK_LAYER_KHRONOS_validation";

/// What a run creates and lists.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Identifies the application to the implementation.
    pub application: ApplicationDescriptor,
    /// Layers enabled on the created instance.
    pub enabled_layers: Vec<String>,
    /// List the extensions of this layer instead of the implementation's.
    pub layer: Option<String>,
    /// Print the records sorted by name instead of in the reported order.
    pub sort: bool,
}

/// Runs the whole listing against `platform`, writing one
/// `<name> : <specVersion>` line per extension to `out`.
///
/// Returns the number of lines written. The instance is destroyed before
/// this returns, whatever the outcome.
pub fn run<P: Platform, W: Write>(platform: &P, config: &Config, out: &mut W) -> Result<usize> {
    let layer = config
        .layer
        .as_deref()
        .map(|name| CString::new(name).map_err(|_| Error::InvalidName(name.to_owned())))
        .transpose()?;

    let instance = Instance::new(platform, &config.application, &config.enabled_layers)?;
    let dispatch = InstanceDispatch::load(&instance)?;

    let mut extensions = dispatch.enumerate_extension_properties(layer.as_deref())?;
    if config.sort {
        extensions.sort();
    }

    for extension in &extensions {
        writeln!(out, "{extension}")?;
    }
    out.flush()?;

    Ok(extensions.len())
}
