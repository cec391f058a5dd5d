//! Export configuration loading.
//!
//! Options come from an optional JSON file and are then overridden by
//! explicit command-line flags.

use anyhow::{Context, Result};
use backspin_audio::{ExportOptions, SampleFormat};
use std::fs;
use std::path::Path;

/// Loads export options from a JSON config file, or the defaults when no path
/// is given. Missing fields fall back to their defaults.
pub fn load_export_options(path: Option<&str>) -> Result<ExportOptions> {
    let Some(path) = path else {
        return Ok(ExportOptions::default());
    };

    let content = fs::read_to_string(Path::new(path))
        .with_context(|| format!("Failed to read config file: {}", path))?;
    let options: ExportOptions = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path))?;

    log::debug!("Loaded export options from {}: {:?}", path, options);
    Ok(options)
}

/// Resolves export options: config file first, then the `--format` flag.
pub fn resolve_export_options(
    config_path: Option<&str>,
    format_flag: Option<&str>,
) -> Result<ExportOptions> {
    let mut options = load_export_options(config_path)?;
    if let Some(name) = format_flag {
        options.sample_format = name
            .parse::<SampleFormat>()
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    Ok(options)
}
