//! WAV file format validator.

use super::FormatError;

const FORMAT: &str = "WAV";

/// Information extracted from a WAV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavInfo {
    /// RIFF chunk size as declared in the file.
    pub riff_size: u32,
    /// Audio format code (1 = PCM, 3 = IEEE float).
    pub audio_format: u16,
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Declared byte rate.
    pub byte_rate: u32,
    /// Declared block alignment.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Byte offset of the first payload byte.
    pub data_offset: usize,
    /// Payload length in bytes.
    pub data_size: usize,
    /// Number of frames (one sample per channel each).
    pub num_frames: usize,
}

impl WavInfo {
    /// Whether the format is 32-bit IEEE float.
    pub fn is_float32(&self) -> bool {
        self.audio_format == 3 && self.bits_per_sample == 32
    }

    /// Whether the format is 16-bit integer PCM.
    pub fn is_pcm16(&self) -> bool {
        self.audio_format == 1 && self.bits_per_sample == 16
    }
}

fn u16_at(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn u32_at(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Validate a WAV file and extract its format information.
///
/// Walks the RIFF chunk list (word-aligned) and checks:
/// - RIFF and WAVE identifiers
/// - a `fmt ` chunk of at least 16 bytes before the `data` chunk
/// - block align and byte rate agree with channels, rate and bit depth
/// - the declared payload fits inside the file
pub fn validate_wav(data: &[u8]) -> Result<WavInfo, FormatError> {
    const MIN_HEADER_SIZE: usize = 44;

    if data.len() < MIN_HEADER_SIZE {
        return Err(FormatError::TooShort {
            format: FORMAT,
            len: data.len(),
            min: MIN_HEADER_SIZE,
        });
    }
    for (offset, tag) in [(0, b"RIFF"), (8, b"WAVE")] {
        if &data[offset..offset + 4] != tag {
            return Err(malformed(
                format!(
                    "expected {:?}, found {:?}",
                    String::from_utf8_lossy(tag),
                    String::from_utf8_lossy(&data[offset..offset + 4])
                ),
                offset,
            ));
        }
    }
    let riff_size = u32_at(data, 4);

    let mut fmt: Option<&[u8]> = None;
    let mut offset = 12;

    while offset + 8 <= data.len() {
        let chunk_size = u32_at(data, offset + 4) as usize;
        let body = offset + 8;

        match &data[offset..offset + 4] {
            b"fmt " if chunk_size < 16 => {
                return Err(malformed(
                    format!("fmt chunk too small: {} bytes", chunk_size),
                    offset,
                ));
            }
            b"fmt " => match data.get(body..body + 16) {
                Some(bytes) => fmt = Some(bytes),
                None => return Err(malformed("truncated fmt chunk".to_string(), offset)),
            },
            b"data" => {
                let Some(fmt) = fmt else {
                    return Err(malformed("data chunk before fmt chunk".to_string(), offset));
                };
                if body + chunk_size > data.len() {
                    return Err(malformed(
                        format!(
                            "data chunk declares {} bytes but only {} remain",
                            chunk_size,
                            data.len() - body
                        ),
                        offset,
                    ));
                }
                return build_info(riff_size, fmt, body, chunk_size);
            }
            _ => {}
        }

        offset = body + chunk_size + (chunk_size & 1);
    }

    Err(FormatError::MissingChunk {
        format: FORMAT,
        chunk: if fmt.is_none() { "fmt" } else { "data" },
    })
}

fn malformed(message: String, offset: usize) -> FormatError {
    FormatError::Malformed {
        format: FORMAT,
        message,
        offset,
    }
}

fn inconsistent(message: String) -> FormatError {
    FormatError::Inconsistent {
        format: FORMAT,
        message,
    }
}

fn build_info(
    riff_size: u32,
    fmt: &[u8],
    data_offset: usize,
    data_size: usize,
) -> Result<WavInfo, FormatError> {
    let audio_format = u16_at(fmt, 0);
    let channels = u16_at(fmt, 2);
    let sample_rate = u32_at(fmt, 4);
    let byte_rate = u32_at(fmt, 8);
    let block_align = u16_at(fmt, 12);
    let bits_per_sample = u16_at(fmt, 14);

    let expected_align = channels as u32 * (bits_per_sample as u32 / 8);
    if block_align as u32 != expected_align {
        return Err(inconsistent(format!(
            "block align {} does not match {} channels at {} bits",
            block_align, channels, bits_per_sample
        )));
    }
    if byte_rate as u64 != sample_rate as u64 * block_align as u64 {
        return Err(inconsistent(format!(
            "byte rate {} does not match {} Hz x {} bytes",
            byte_rate, sample_rate, block_align
        )));
    }

    let num_frames = match block_align {
        0 => 0,
        align => data_size / align as usize,
    };

    Ok(WavInfo {
        riff_size,
        audio_format,
        channels,
        sample_rate,
        byte_rate,
        block_align,
        bits_per_sample,
        data_offset,
        data_size,
        num_frames,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use backspin_audio::{encode, SampleFormat, WavFormat};

    fn float_stereo(frames: usize) -> Vec<u8> {
        let samples = vec![0.25f32; frames * 2];
        encode(&samples, &WavFormat::stereo(SampleFormat::Float32, 44100)).wav_data
    }

    #[test]
    fn test_validate_float_stereo() {
        let info = validate_wav(&float_stereo(10)).expect("Should parse float WAV");

        assert!(info.is_float32());
        assert_eq!(info.channels, 2);
        assert_eq!(info.sample_rate, 44100);
        assert_eq!(info.block_align, 8);
        assert_eq!(info.byte_rate, 352800);
        assert_eq!(info.data_offset, 44);
        assert_eq!(info.data_size, 80);
        assert_eq!(info.num_frames, 10);
        assert_eq!(info.riff_size, 80 + 36);
    }

    #[test]
    fn test_validate_pcm16_mono() {
        let wav = encode(&[0.0, 0.5, -0.5], &WavFormat::mono(SampleFormat::Int16, 8000)).wav_data;
        let info = validate_wav(&wav).unwrap();

        assert!(info.is_pcm16());
        assert_eq!(info.num_frames, 3);
    }

    #[test]
    fn test_validate_too_short() {
        let err = validate_wav(&[0u8; 10]).unwrap_err();
        assert_eq!(err.format(), "WAV");
        assert!(matches!(err, FormatError::TooShort { len: 10, min: 44, .. }));
    }

    #[test]
    fn test_validate_invalid_magic() {
        let mut wav = float_stereo(1);
        wav[0..4].copy_from_slice(b"XXXX");
        let err = validate_wav(&wav).unwrap_err();
        assert_eq!(err.offset(), Some(0));
        assert!(err.to_string().contains("RIFF"));

        let mut wav = float_stereo(1);
        wav[8..12].copy_from_slice(b"XXXX");
        let err = validate_wav(&wav).unwrap_err();
        assert_eq!(err.offset(), Some(8));
        assert!(err.to_string().contains("WAVE"));
    }

    #[test]
    fn test_validate_truncated_payload() {
        let mut wav = float_stereo(4);
        wav.truncate(50);
        let err = validate_wav(&wav).unwrap_err();
        assert_eq!(err.offset(), Some(36));
    }

    #[test]
    fn test_validate_bad_block_align() {
        let mut wav = float_stereo(1);
        wav[32..34].copy_from_slice(&3u16.to_le_bytes());
        let err = validate_wav(&wav).unwrap_err();
        assert!(matches!(err, FormatError::Inconsistent { .. }));
        assert!(err.to_string().contains("block align"));
    }
}
