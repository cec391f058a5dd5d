//! Inspect command implementation
//!
//! Reads back the header of a WAV file and reports its fields and payload hash.

use anyhow::{Context, Result};
use backspin_audio::wav::compute_pcm_hash;
use backspin_audio::WavHeader;
use colored::Colorize;
use std::fs;
use std::process::ExitCode;

use super::json_output::{error_codes, InspectResult, JsonError, JsonOutput};
use super::reporting::emit_json;

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if the header is canonical, 1 otherwise
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input)
    } else {
        run_human(input)
    }
}

/// Reads `input` and collects its header fields.
pub fn inspect_file(input: &str) -> Result<Option<InspectResult>> {
    let data = fs::read(input).with_context(|| format!("Failed to read file: {}", input))?;
    Ok(inspect_bytes(input, &data))
}

fn inspect_bytes(input: &str, data: &[u8]) -> Option<InspectResult> {
    let header = WavHeader::parse(data)?;
    Some(InspectResult {
        input: input.to_string(),
        chunk_size: header.chunk_size,
        audio_format: header.audio_format,
        sample_format: header.sample_format().map(|f| f.to_string()),
        channels: header.channels,
        sample_rate: header.sample_rate,
        byte_rate: header.byte_rate,
        block_align: header.block_align,
        bits_per_sample: header.bits_per_sample,
        data_size: header.data_size,
        consistent: header.is_consistent(),
        pcm_hash: compute_pcm_hash(data),
    })
}

/// Run inspect with human-readable (colored) output
fn run_human(input: &str) -> Result<ExitCode> {
    println!("{} {}", "Inspecting:".cyan().bold(), input);

    let Some(info) = inspect_file(input)? else {
        anyhow::bail!("{} is not a canonical 44-byte-header WAV file", input);
    };

    let format_name = info.sample_format.as_deref().unwrap_or("unknown");
    println!(
        "  {} {} (code {}, {} bits)",
        "Format:".dimmed(),
        format_name,
        info.audio_format,
        info.bits_per_sample
    );
    println!("  {} {}", "Channels:".dimmed(), info.channels);
    println!("  {} {} Hz", "Sample rate:".dimmed(), info.sample_rate);
    println!("  {} {} bytes/s", "Byte rate:".dimmed(), info.byte_rate);
    println!("  {} {} bytes", "Block align:".dimmed(), info.block_align);
    println!("  {} {} bytes", "Data size:".dimmed(), info.data_size);
    println!("  {} {}", "Chunk size:".dimmed(), info.chunk_size);
    if let Some(hash) = &info.pcm_hash {
        println!("  {} {}", "PCM hash:".dimmed(), hash);
    }

    if info.consistent {
        println!("\n{}", "Header is consistent".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!("\n{}", "Header fields disagree".yellow().bold());
        Ok(ExitCode::from(1))
    }
}

/// Run inspect with machine-readable JSON output
fn run_json(input: &str) -> Result<ExitCode> {
    let data = match fs::read(input) {
        Ok(data) => data,
        Err(e) => {
            let error = JsonError::new(
                error_codes::FILE_READ,
                format!("Failed to read file: {}", e),
            )
            .with_file(input);
            return emit_json(&JsonOutput::<InspectResult>::failure(vec![error]));
        }
    };

    let output = match inspect_bytes(input, &data) {
        Some(info) if info.consistent => JsonOutput::success(info),
        Some(info) => JsonOutput {
            success: false,
            errors: vec![JsonError::new(
                error_codes::INVALID_WAV,
                "Header fields disagree",
            )
            .with_file(input)],
            result: Some(info),
        },
        None => JsonOutput::failure(vec![JsonError::new(
            error_codes::INVALID_WAV,
            "Not a canonical 44-byte-header WAV file",
        )
        .with_file(input)]),
    };

    emit_json(&output)
}
