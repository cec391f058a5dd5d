use anyhow::Result;
use backspin_audio::{AudioError, ReversedAudio};
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::process::ExitCode;

use super::json_output::{error_codes, ExportResult, JsonError, JsonOutput};

/// Maps an audio error to its JSON form, keeping the stable audio code.
pub(crate) fn audio_error_to_json(err: &AudioError, file: &str) -> JsonError {
    JsonError::new(err.code(), err.to_string()).with_file(file)
}

/// Writes the encoded WAV to `output` and summarizes it.
pub(crate) fn write_reversed(
    output: &str,
    reversed: &ReversedAudio,
) -> Result<ExportResult, JsonError> {
    fs::write(output, &reversed.wav.wav_data).map_err(|e| {
        JsonError::new(
            error_codes::FILE_WRITE,
            format!("Failed to write output file: {}", e),
        )
        .with_file(output)
    })?;

    let wav = &reversed.wav;
    Ok(ExportResult {
        output: output.to_string(),
        sample_format: wav.format.sample_format.to_string(),
        channels: wav.format.channels,
        sample_rate: wav.format.sample_rate,
        source_channels: reversed.buffer.num_channels(),
        frames: wav.frames_per_channel(),
        duration_seconds: wav.duration_seconds(),
        file_size: wav.wav_data.len(),
        pcm_hash: wav.pcm_hash.clone(),
    })
}

/// Prints the human-readable export summary.
pub(crate) fn print_export_summary(result: &ExportResult) {
    println!("{} {}", "Wrote:".green().bold(), result.output);
    println!(
        "  {} {} ch, {} Hz, {}",
        "Format:".dimmed(),
        result.channels,
        result.sample_rate,
        result.sample_format
    );
    println!(
        "  {} {} frames ({:.3}s), {} source channel(s)",
        "Length:".dimmed(),
        result.frames,
        result.duration_seconds,
        result.source_channels
    );
    println!("  {} {} bytes", "Size:".dimmed(), result.file_size);
    println!("  {} {}", "PCM hash:".dimmed(), &result.pcm_hash[..16]);
}

/// Prints a JSON envelope and maps it to an exit code.
pub(crate) fn emit_json<T: Serialize>(output: &JsonOutput<T>) -> Result<ExitCode> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Runs a command body in JSON or human mode.
pub(crate) fn finish<F>(json_output: bool, body: F) -> Result<ExitCode>
where
    F: FnOnce() -> Result<ExportResult, JsonError>,
{
    let outcome = body();
    if json_output {
        let output = match outcome {
            Ok(result) => JsonOutput::success(result),
            Err(error) => JsonOutput::failure(vec![error]),
        };
        return emit_json(&output);
    }

    match outcome {
        Ok(result) => {
            print_export_summary(&result);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => Err(anyhow::anyhow!("[{}] {}", error.code, error.message)),
    }
}
