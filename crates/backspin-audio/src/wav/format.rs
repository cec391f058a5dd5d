//! WAV encoding parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sample encoding of the WAV payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleFormat {
    /// 32-bit IEEE float (format code 3).
    #[default]
    Float32,
    /// 16-bit signed PCM (format code 1).
    Int16,
}

impl SampleFormat {
    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(self) -> u16 {
        match self {
            SampleFormat::Float32 => 4,
            SampleFormat::Int16 => 2,
        }
    }

    /// WAVE `AudioFormat` code.
    pub fn format_code(self) -> u16 {
        match self {
            SampleFormat::Float32 => 3,
            SampleFormat::Int16 => 1,
        }
    }

    /// Maps a WAVE `AudioFormat` code and bit depth back to a sample format.
    pub fn from_code(code: u16, bits_per_sample: u16) -> Option<Self> {
        match (code, bits_per_sample) {
            (3, 32) => Some(SampleFormat::Float32),
            (1, 16) => Some(SampleFormat::Int16),
            _ => None,
        }
    }

    /// Name used on the command line and in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            SampleFormat::Float32 => "float32",
            SampleFormat::Int16 => "int16",
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "float32" | "f32" | "float" => Ok(SampleFormat::Float32),
            "int16" | "i16" | "pcm16" => Ok(SampleFormat::Int16),
            other => Err(format!(
                "unknown sample format '{}' (expected float32 or int16)",
                other
            )),
        }
    }
}

/// WAV file format parameters.
///
/// Values are not validated: zero channels or a zero sample rate still
/// produce a well-formed (if useless) header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Payload sample encoding.
    pub sample_format: SampleFormat,
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl WavFormat {
    /// Creates a format with explicit parameters.
    pub fn new(sample_format: SampleFormat, channels: u16, sample_rate: u32) -> Self {
        Self {
            sample_format,
            channels,
            sample_rate,
        }
    }

    /// Creates a mono format.
    pub fn mono(sample_format: SampleFormat, sample_rate: u32) -> Self {
        Self::new(sample_format, 1, sample_rate)
    }

    /// Creates a stereo format.
    pub fn stereo(sample_format: SampleFormat, sample_rate: u32) -> Self {
        Self::new(sample_format, 2, sample_rate)
    }

    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.sample_format.bytes_per_sample()
    }

    /// Bits per sample.
    pub fn bits_per_sample(&self) -> u16 {
        self.bytes_per_sample() * 8
    }

    /// WAVE `AudioFormat` code.
    pub fn format_code(&self) -> u16 {
        self.sample_format.format_code()
    }

    /// Block align (bytes per sample frame).
    pub fn block_align(&self) -> u16 {
        self.channels.wrapping_mul(self.bytes_per_sample())
    }

    /// Byte rate (bytes per second).
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate.wrapping_mul(self.block_align() as u32)
    }
}
