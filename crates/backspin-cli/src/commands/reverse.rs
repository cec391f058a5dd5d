//! Reverse command implementation
//!
//! Decodes an audio file, plays it backwards and writes the result as WAV.

use anyhow::Result;
use backspin_audio::{reverse_bytes, SymphoniaDecoder};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, ExportResult, JsonError};
use super::reporting::{audio_error_to_json, finish, write_reversed};
use crate::config::resolve_export_options;

/// Run the reverse command
///
/// # Arguments
/// * `input` - Path to the source audio file (WAV, MP3, FLAC, Ogg Vorbis)
/// * `output` - Path of the WAV file to write
/// * `format` - Optional sample format override (float32, int16)
/// * `config` - Optional JSON export config file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    input: &str,
    output: &str,
    format: Option<&str>,
    config: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    if !json_output {
        println!("{} {}", "Reversing:".cyan().bold(), input);
    }
    finish(json_output, || execute(input, output, format, config))
}

fn execute(
    input: &str,
    output: &str,
    format: Option<&str>,
    config: Option<&str>,
) -> Result<ExportResult, JsonError> {
    let options = resolve_export_options(config, format)
        .map_err(|e| JsonError::new(error_codes::INVALID_CONFIG, format!("{:#}", e)))?;

    let bytes = fs::read(input).map_err(|e| {
        JsonError::new(
            error_codes::FILE_READ,
            format!("Failed to read input file: {}", e),
        )
        .with_file(input)
    })?;

    let hint = Path::new(input)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let reversed = reverse_bytes(&SymphoniaDecoder::new(), &bytes, hint.as_deref(), &options)
        .map_err(|e| audio_error_to_json(&e, input))?;

    write_reversed(output, &reversed)
}
