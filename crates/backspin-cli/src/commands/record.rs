//! Record command implementation
//!
//! Captures raw interleaved PCM from stdin or a file, reverses the recording
//! and writes it as WAV.

use anyhow::Result;
use backspin_audio::{
    reverse_recording, CaptureDevice, CaptureFormat, ExportOptions, RawPcmDevice,
    RawSampleFormat, RecordingSession,
};
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use super::json_output::{error_codes, ExportResult, JsonError};
use super::reporting::{audio_error_to_json, finish, write_reversed};
use crate::config::resolve_export_options;

/// Capture parameters for a raw PCM source.
#[derive(Debug, Clone, Copy)]
pub struct RawInput<'a> {
    /// Path of the raw stream, or "-" for stdin.
    pub path: &'a str,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Raw sample encoding name (f32le, s16le).
    pub raw_format: &'a str,
}

/// Run the record command
///
/// # Arguments
/// * `input` - Raw capture source
/// * `output` - Path of the WAV file to write
/// * `format` - Optional sample format override (float32, int16)
/// * `config` - Optional JSON export config file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    input: RawInput<'_>,
    output: &str,
    format: Option<&str>,
    config: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    if !json_output {
        let source = if input.path == "-" { "stdin" } else { input.path };
        println!("{} {}", "Recording from:".cyan().bold(), source);
    }
    finish(json_output, || execute(input, output, format, config))
}

fn execute(
    input: RawInput<'_>,
    output: &str,
    format: Option<&str>,
    config: Option<&str>,
) -> Result<ExportResult, JsonError> {
    let options = resolve_export_options(config, format)
        .map_err(|e| JsonError::new(error_codes::INVALID_CONFIG, format!("{:#}", e)))?;
    let raw_format: RawSampleFormat = input
        .raw_format
        .parse()
        .map_err(|e: String| JsonError::new(error_codes::INVALID_CONFIG, e))?;
    let capture = CaptureFormat {
        channels: input.channels,
        sample_rate: input.sample_rate,
    };

    if input.path == "-" {
        let device = RawPcmDevice::new("stdin", io::stdin().lock(), capture, raw_format);
        record_and_write(device, input.path, output, &options)
    } else {
        let file = File::open(input.path).map_err(|e| {
            JsonError::new(
                error_codes::FILE_READ,
                format!("Failed to open capture source: {}", e),
            )
            .with_file(input.path)
        })?;
        let device = RawPcmDevice::new(input.path, BufReader::new(file), capture, raw_format);
        record_and_write(device, input.path, output, &options)
    }
}

fn record_and_write<D: CaptureDevice>(
    device: D,
    source: &str,
    output: &str,
    options: &ExportOptions,
) -> Result<ExportResult, JsonError> {
    let mut session = RecordingSession::start(device).map_err(|e| audio_error_to_json(&e, source))?;
    session
        .record_to_end()
        .map_err(|e| audio_error_to_json(&e, source))?;

    let reversed = reverse_recording(session, options);
    write_reversed(output, &reversed)
}
