//! Core WAV writing and sample serialization functions.

use std::io::{self, Write};

use super::format::{SampleFormat, WavFormat};
use super::header::HEADER_SIZE;
use super::result::EncodedWav;

/// Builds the 44-byte RIFF/WAVE header for a payload of `data_len` bytes.
///
/// Sizes past `u32::MAX` saturate.
pub fn header_bytes(format: &WavFormat, data_len: usize) -> [u8; HEADER_SIZE] {
    let data_size = u32::try_from(data_len).unwrap_or(u32::MAX);
    let chunk_size = data_size.saturating_add(36); // Total file size minus 8 bytes for RIFF header

    let mut header = [0u8; HEADER_SIZE];

    // RIFF header
    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&chunk_size.to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    // fmt chunk
    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes());
    header[20..22].copy_from_slice(&format.format_code().to_le_bytes());
    header[22..24].copy_from_slice(&format.channels.to_le_bytes());
    header[24..28].copy_from_slice(&format.sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&format.byte_rate().to_le_bytes());
    header[32..34].copy_from_slice(&format.block_align().to_le_bytes());
    header[34..36].copy_from_slice(&format.bits_per_sample().to_le_bytes());

    // data chunk
    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_size.to_le_bytes());

    header
}

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `payload` - Raw sample bytes, already in `format.sample_format`
///
/// # Returns
/// Result indicating success or I/O error
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, payload: &[u8]) -> io::Result<()> {
    writer.write_all(&header_bytes(format, payload.len()))?;
    writer.write_all(payload)?;
    Ok(())
}

/// Wraps an already-serialized payload in a WAV header.
///
/// The payload bytes are copied through untouched.
pub fn encode_payload(payload: &[u8], format: &WavFormat) -> EncodedWav {
    let mut wav_data = Vec::with_capacity(HEADER_SIZE + payload.len());
    wav_data.extend_from_slice(&header_bytes(format, payload.len()));
    wav_data.extend_from_slice(payload);

    EncodedWav {
        wav_data,
        pcm_hash: blake3::hash(payload).to_hex().to_string(),
        format: *format,
        num_frames: payload.len() / format.bytes_per_sample() as usize,
    }
}

/// Serializes interleaved samples and wraps them in a WAV header.
///
/// # Arguments
/// * `samples` - Interleaved samples, one per channel per frame
/// * `format` - WAV format parameters
///
/// # Returns
/// The encoded file plus its payload hash
pub fn encode(samples: &[f32], format: &WavFormat) -> EncodedWav {
    let payload = samples_to_payload(samples, format.sample_format);
    encode_payload(&payload, format)
}

/// Serializes samples in the given sample format.
pub fn samples_to_payload(samples: &[f32], sample_format: SampleFormat) -> Vec<u8> {
    match sample_format {
        SampleFormat::Float32 => samples_to_f32le(samples),
        SampleFormat::Int16 => samples_to_pcm16(samples),
    }
}

/// Converts samples to little-endian 32-bit float bytes.
///
/// Values are written as-is, without clipping.
pub fn samples_to_f32le(samples: &[f32]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(samples.len() * 4);
    for &sample in samples {
        payload.extend_from_slice(&sample.to_le_bytes());
    }
    payload
}

/// Int16 payload: each sample is clamped to [-1, 1], scaled by 32767 and
/// rounded half away from zero, so full scale maps to ±32767 and -32768 is
/// never written.
///
/// Raw s16le capture decodes with a 1/32768 step instead, so a captured
/// sample re-exported as Int16 can move by one step near full scale.
pub fn samples_to_pcm16(samples: &[f32]) -> Vec<u8> {
    samples
        .iter()
        .map(|&s| (s.clamp(-1.0, 1.0) * 32767.0).round() as i16)
        .flat_map(i16::to_le_bytes)
        .collect()
}
