//! # Output Handling
//!
//! Format selection and writing rendered documents to a file or stdout.

use crate::error::{CliError, CliResult};
use roapi_core::Format;
use std::fs;
use std::path::Path;
use tracing::info;

/// Explicit format wins, then the output file extension, then JSON.
pub fn resolve_format(explicit: Option<Format>, output: Option<&Path>) -> Format {
    explicit
        .or_else(|| output.and_then(Format::from_path))
        .unwrap_or_default()
}

/// Writes `text` to `output`, creating parent directories, or prints it.
pub fn write_output(output: Option<&Path>, text: &str) -> CliResult<()> {
    let Some(path) = output else {
        println!("{}", text);
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                CliError::General(format!("Failed to create output directory: {}", e))
            })?;
        }
    }
    fs::write(path, text)?;
    info!(path = %path.display(), "Spec written");
    Ok(())
}
