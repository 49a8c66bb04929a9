#![deny(missing_docs)]

//! # Generate Command
//!
//! Loads a metamodel dump and writes the Swagger 2.0 description of its
//! Restful Objects API for one visibility.

use crate::error::{CliError, CliResult};
use crate::output::{resolve_format, write_output};
use roapi_core::service::DEFAULT_BASE_PATH;
use roapi_core::{Format, Metamodel, SwaggerConfig, SwaggerService, Visibility};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the metamodel dump (.yaml, .yml or .json).
    #[clap(long, env = "ROAPI_METAMODEL")]
    pub metamodel: PathBuf,

    /// Audience: public, private or private-with-prototyping.
    #[clap(long, env = "ROAPI_VISIBILITY", default_value = "private")]
    pub visibility: Visibility,

    /// Output format: json or yaml.
    /// Defaults to the output file extension, then JSON.
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

/// Executes the generation.
pub fn execute(args: &GenerateArgs) -> CliResult<()> {
    let model = load_metamodel(&args.metamodel)?;
    debug!(types = model.len(), "Metamodel loaded");

    let service = SwaggerService::new(
        SwaggerConfig::default()
            .with_base_path(args.base_path.clone())
            .with_api_version(args.api_version.clone()),
    );
    let format = resolve_format(args.format, args.output.as_deref());
    let text = service.generate(&model, args.visibility, format)?;
    write_output(args.output.as_deref(), &text)
}

/// Reads a metamodel dump, choosing the parser by extension.
fn load_metamodel(path: &Path) -> CliResult<Metamodel> {
    if !path.exists() {
        return Err(CliError::General(format!(
            "Metamodel file not found: {:?}",
            path
        )));
    }
    let content = fs::read_to_string(path)?;
    let model = match Format::from_path(path) {
        Some(Format::Json) => Metamodel::from_json_str(&content)?,
        _ => Metamodel::from_yaml_str(&content)?,
    };
    Ok(model)
}
