//! Encoded WAV result type.

use super::format::WavFormat;

/// Result of WAV encoding.
#[derive(Debug, Clone)]
pub struct EncodedWav {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the payload only (not the header).
    pub pcm_hash: String,
    /// Format written into the header.
    pub format: WavFormat,
    /// Payload length divided by bytes per sample.
    ///
    /// This counts sample slots across all channels, not frames per channel;
    /// see [`EncodedWav::frames_per_channel`] for the latter.
    pub num_frames: usize,
}

impl EncodedWav {
    /// Number of sample frames (one sample per channel each).
    pub fn frames_per_channel(&self) -> usize {
        match self.format.channels {
            0 => 0,
            channels => self.num_frames / channels as usize,
        }
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.format.sample_rate == 0 {
            return 0.0;
        }
        self.frames_per_channel() as f64 / self.format.sample_rate as f64
    }

    /// Size of the payload in bytes.
    pub fn data_size(&self) -> usize {
        self.wav_data.len().saturating_sub(super::HEADER_SIZE)
    }
}
