#![deny(missing_docs)]

//! # ROAPI CLI
//!
//! Command Line Interface for the Restful Objects Swagger generator.
//!
//! Supported Commands:
//! - `generate`: Metamodel dump -> Swagger 2.0 for one visibility.
//! - `supporting`: Swagger 2.0 for the RO supporting resources only.
//!
//! Logs go to stderr and are filtered by `RUST_LOG` (default `info`).

use crate::error::CliResult;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod error;
mod generate;
mod output;
mod supporting;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Restful Objects Swagger generator")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generates the Swagger spec of a metamodel for one visibility.
    Generate(generate::GenerateArgs),
    /// Generates the Swagger spec of the supporting resources.
    Supporting(supporting::SupportingArgs),
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate(args) => generate::execute(args)?,
        Commands::Supporting(args) => supporting::execute(args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "roapi",
            "generate",
            "--metamodel",
            "model.yaml",
            "--visibility",
            "public",
            "--format",
            "yaml",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.visibility, roapi_core::Visibility::Public);
                assert_eq!(args.format, Some(roapi_core::Format::Yaml));
                assert_eq!(args.base_path, "/restful/");
            }
            other => panic!("Expected generate, got {:?}", other),
        }
    }
}
