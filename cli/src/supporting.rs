//! # Supporting Command
//!
//! Writes the standalone description of the Restful Objects supporting
//! resources.

use crate::error::CliResult;
use crate::output::{resolve_format, write_output};
use roapi_core::service::DEFAULT_BASE_PATH;
use roapi_core::{Format, SwaggerConfig, SwaggerService};
use std::path::PathBuf;

/// Arguments for the supporting command.
#[derive(clap::Args, Debug, Clone)]
pub struct SupportingArgs {
    /// Output format: json or yaml.
    #[clap(long, env = "ROAPI_FORMAT")]
    pub format: Option<Format>,

    /// Base path of the Restful Objects viewer.
    #[clap(long, env = "ROAPI_BASE_PATH", default_value = DEFAULT_BASE_PATH)]
    pub base_path: String,

    /// Version stamped into `info.version`.
    #[clap(long, env = "ROAPI_API_VERSION", default_value = "0.0.0")]
    pub api_version: String,

    /// Output path. If not provided, prints to stdout.
    #[clap(long, env = "ROAPI_OUTPUT")]
    pub output: Option<PathBuf>,
}

/// Executes the command.
pub fn execute(args: &SupportingArgs) -> CliResult<()> {
    let service = SwaggerService::new(
        SwaggerConfig::default()
            .with_base_path(args.base_path.clone())
            .with_api_version(args.api_version.clone()),
    );
    let format = resolve_format(args.format, args.output.as_deref());
    let text = service.generate_supporting(format)?;
    write_output(args.output.as_deref(), &text)
}
