//! Envelope and result types printed by `--json`.
//!
//! `reverse`, `record` and `inspect` all print one [`JsonOutput`] document
//! on stdout when `--json` is given.

use serde::{Deserialize, Serialize};

/// Stable `CLI_XXX` codes for failures outside the audio library.
///
/// Audio-level failures carry their `AUDIO_XXX` code instead.
pub mod error_codes {
    /// Input missing or unreadable
    pub const FILE_READ: &str = "CLI_001";
    /// Output could not be created
    pub const FILE_WRITE: &str = "CLI_002";
    /// Config file or flag could not be used
    pub const INVALID_CONFIG: &str = "CLI_003";
    /// Input is not a canonical WAV file
    pub const INVALID_WAV: &str = "CLI_004";
}

/// One failure in the `errors` array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "AUDIO_002")
    pub code: String,
    /// What went wrong
    pub message: String,
    /// Path the failure refers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Error without a file path.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Attaches the file the error refers to.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// Envelope shared by every `--json` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    /// Whether the command succeeded.
    pub success: bool,
    /// Errors (empty on success).
    pub errors: Vec<JsonError>,
    /// Command-specific result (absent on failure).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> JsonOutput<T> {
    /// Creates a successful output.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Result of `reverse` and `record`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportResult {
    /// Path of the written WAV file.
    pub output: String,
    /// Payload sample encoding.
    pub sample_format: String,
    /// Channels in the written file.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Channels in the source audio.
    pub source_channels: usize,
    /// Frames per channel in the written file.
    pub frames: usize,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// Total file size in bytes.
    pub file_size: usize,
    /// BLAKE3 hash of the payload.
    pub pcm_hash: String,
}

/// Result of `inspect`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InspectResult {
    /// Inspected file.
    pub input: String,
    /// RIFF chunk size.
    pub chunk_size: u32,
    /// Audio format code.
    pub audio_format: u16,
    /// Sample format name, if one we write.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_format: Option<String>,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per second.
    pub byte_rate: u32,
    /// Bytes per frame.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// data chunk size.
    pub data_size: u32,
    /// Whether derived header fields agree.
    pub consistent: bool,
    /// BLAKE3 hash of the payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
}
