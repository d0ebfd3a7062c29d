// Lists the Vulkan instance extensions, one `<name> : <specVersion>` line each.
// Run with RUST_LOG=debug to follow the native calls.

use std::{io::Write, process::ExitCode};

use clap::Parser;
use vkext::{
    driver::VALIDATION_LAYER, vk::VulkanPlatform, ApplicationDescriptor, Config, Platform,
};

#[derive(Parser, Debug)]
#[command(
    name = "vkext",
    version,
    about = "Create a Vulkan instance and list the instance extensions it reports."
)]
struct Args {
    /// List the extensions provided by this layer instead of the implementation's
    #[arg(long, value_name = "NAME")]
    layer: Option<String>,

    /// Enable a layer on the created instance (repeatable)
    #[arg(long = "enable-layer", value_name = "NAME")]
    enable_layers: Vec<String>,

    /// Enable the Khronos validation layer on the created instance
    #[arg(long, action = clap::ArgAction::SetTrue)]
    validation: bool,

    /// Print the extensions sorted by name
    #[arg(long, action = clap::ArgAction::SetTrue)]
    sort: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let mut enabled_layers = args.enable_layers;
        if args.validation && !enabled_layers.iter().any(|l| l == VALIDATION_LAYER) {
            enabled_layers.push(VALIDATION_LAYER.to_owned());
        }
        Config {
            application: ApplicationDescriptor::default(),
            enabled_layers,
            layer: args.layer,
            sort: args.sort,
        }
    }
}

fn try_main<P: Platform, W: Write>(platform: &P, args: Args, out: &mut W) -> vkext::Result<usize> {
    vkext::run(platform, &Config::from(args), out)
}

/// Logs a failure and maps the outcome to the process exit status.
fn exit_status(result: vkext::Result<usize>) -> u8 {
    match result {
        Ok(printed) => {
            log::debug!("Listed {printed} extensions.");
            0
        }
        Err(e) => {
            log::error!("{e}");
            1
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let result = VulkanPlatform::load()
        .and_then(|platform| try_main(&platform, args, &mut std::io::stdout().lock()));
    ExitCode::from(exit_status(result))
}
