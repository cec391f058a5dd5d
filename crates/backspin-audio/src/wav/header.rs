//! Reading back the canonical 44-byte header.

use super::format::SampleFormat;

/// Size of the canonical RIFF/WAVE header in bytes.
pub const HEADER_SIZE: usize = 44;

/// Header fields of a canonical WAV file, read from their fixed offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// RIFF chunk size (file length minus 8).
    pub chunk_size: u32,
    /// fmt sub-chunk size.
    pub fmt_size: u32,
    /// Audio format code (1 = PCM, 3 = IEEE float).
    pub audio_format: u16,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per second.
    pub byte_rate: u32,
    /// Bytes per sample frame.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// data sub-chunk size.
    pub data_size: u32,
}

impl WavHeader {
    /// Parses the fixed-layout header at the start of `wav_data`.
    ///
    /// Returns `None` unless the buffer is at least 44 bytes and carries the
    /// `RIFF`, `WAVE`, `fmt ` and `data` tags at their canonical offsets.
    /// Files with extra chunks are not canonical; use
    /// [`extract_pcm_data`](super::extract_pcm_data) for those.
    pub fn parse(wav_data: &[u8]) -> Option<Self> {
        if wav_data.len() < HEADER_SIZE {
            return None;
        }

        if &wav_data[0..4] != b"RIFF"
            || &wav_data[8..12] != b"WAVE"
            || &wav_data[12..16] != b"fmt "
            || &wav_data[36..40] != b"data"
        {
            return None;
        }

        Some(Self {
            chunk_size: read_u32(wav_data, 4),
            fmt_size: read_u32(wav_data, 16),
            audio_format: read_u16(wav_data, 20),
            channels: read_u16(wav_data, 22),
            sample_rate: read_u32(wav_data, 24),
            byte_rate: read_u32(wav_data, 28),
            block_align: read_u16(wav_data, 32),
            bits_per_sample: read_u16(wav_data, 34),
            data_size: read_u32(wav_data, 40),
        })
    }

    /// Sample format, if the code/bit depth pair is one we write.
    pub fn sample_format(&self) -> Option<SampleFormat> {
        SampleFormat::from_code(self.audio_format, self.bits_per_sample)
    }

    /// Whether the derived fields agree with each other.
    pub fn is_consistent(&self) -> bool {
        let bytes_per_sample = self.bits_per_sample / 8;
        self.chunk_size == self.data_size.saturating_add(36)
            && self.block_align == self.channels.wrapping_mul(bytes_per_sample)
            && self.byte_rate == self.sample_rate.wrapping_mul(self.block_align as u32)
    }
}

fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}
