//! Decode or record, reverse and export in one call.

use serde::{Deserialize, Serialize};

use crate::buffer::AudioBuffer;
use crate::capture::{CaptureDevice, RecordingSession};
use crate::decode::AudioDecoder;
use crate::error::AudioResult;
use crate::reverse::reverse;
use crate::wav::{encode, EncodedWav, SampleFormat, WavFormat};

/// How reversed audio is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Payload sample encoding.
    pub sample_format: SampleFormat,
    /// Export as stereo (mono duplicated, extra channels dropped). When false,
    /// every channel of the source is written.
    pub stereo: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            sample_format: SampleFormat::Float32,
            stereo: true,
        }
    }
}

/// Reversed audio together with its encoded WAV file.
#[derive(Debug, Clone)]
pub struct ReversedAudio {
    /// The reversed planar samples.
    pub buffer: AudioBuffer,
    /// The encoded file.
    pub wav: EncodedWav,
}

/// Encodes a buffer as WAV according to `options`.
pub fn export(buffer: &AudioBuffer, options: &ExportOptions) -> EncodedWav {
    let (samples, channels) = if options.stereo {
        (buffer.to_interleaved_stereo(), 2)
    } else {
        (buffer.to_interleaved(), buffer.num_channels() as u16)
    };

    let format = WavFormat::new(options.sample_format, channels, buffer.sample_rate);
    encode(&samples, &format)
}

/// Decodes `bytes`, reverses the audio and encodes the result.
pub fn reverse_bytes<D: AudioDecoder + ?Sized>(
    decoder: &D,
    bytes: &[u8],
    hint: Option<&str>,
    options: &ExportOptions,
) -> AudioResult<ReversedAudio> {
    let mut buffer = decoder.decode(bytes, hint)?;
    reverse(&mut buffer);

    let wav = export(&buffer, options);
    log::info!(
        "Reversed {:.3}s of audio into {} bytes ({})",
        buffer.duration_seconds(),
        wav.wav_data.len(),
        options.sample_format
    );

    Ok(ReversedAudio { buffer, wav })
}

/// Finishes a recording, reverses it and encodes the result.
pub fn reverse_recording<D: CaptureDevice>(
    session: RecordingSession<D>,
    options: &ExportOptions,
) -> ReversedAudio {
    let mut buffer = session.finish();
    reverse(&mut buffer);

    let wav = export(&buffer, options);
    log::info!(
        "Reversed {:.3}s of recorded audio into {} bytes",
        buffer.duration_seconds(),
        wav.wav_data.len()
    );

    ReversedAudio { buffer, wav }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AudioError;
    use crate::wav::WavHeader;
    use pretty_assertions::assert_eq;

    struct FixedDecoder(AudioBuffer);

    impl AudioDecoder for FixedDecoder {
        fn decode(&self, _bytes: &[u8], _hint: Option<&str>) -> AudioResult<AudioBuffer> {
            Ok(self.0.clone())
        }
    }

    struct FailingDecoder;

    impl AudioDecoder for FailingDecoder {
        fn decode(&self, _bytes: &[u8], _hint: Option<&str>) -> AudioResult<AudioBuffer> {
            Err(AudioError::unsupported("nope"))
        }
    }

    #[test]
    fn test_reverse_bytes_reverses_and_encodes() {
        let decoder = FixedDecoder(AudioBuffer::stereo(
            vec![0.1, 0.2, 0.3],
            vec![0.4, 0.5, 0.6],
            48000,
        ));
        let result = reverse_bytes(&decoder, &[], None, &ExportOptions::default()).unwrap();

        assert_eq!(result.buffer.channels[0], vec![0.3, 0.2, 0.1]);
        assert_eq!(result.buffer.channels[1], vec![0.6, 0.5, 0.4]);

        let header = WavHeader::parse(&result.wav.wav_data).unwrap();
        assert_eq!(header.channels, 2);
        assert_eq!(header.sample_rate, 48000);
        assert_eq!(header.data_size, 6 * 4);

        // First interleaved frame is the old last frame
        let first = f32::from_le_bytes([
            result.wav.wav_data[44],
            result.wav.wav_data[45],
            result.wav.wav_data[46],
            result.wav.wav_data[47],
        ]);
        assert_eq!(first, 0.3);
    }

    #[test]
    fn test_decoder_failure_propagates() {
        let err = reverse_bytes(&FailingDecoder, &[], None, &ExportOptions::default()).unwrap_err();
        assert_eq!(err.code(), "AUDIO_002");
    }

    #[test]
    fn test_export_all_channels() {
        let buffer = AudioBuffer::new(vec![vec![0.0; 4], vec![0.0; 4], vec![0.0; 4]], 8000);
        let options = ExportOptions {
            sample_format: SampleFormat::Int16,
            stereo: false,
        };
        let wav = export(&buffer, &options);
        assert_eq!(wav.format.channels, 3);
        assert_eq!(wav.data_size(), 4 * 3 * 2);
    }

    #[test]
    fn test_export_mismatched_stereo_truncates() {
        let mut buffer = AudioBuffer::stereo(vec![1.0, 2.0, 3.0], vec![4.0, 5.0], 8000);
        reverse(&mut buffer);

        let wav = export(&buffer, &ExportOptions::default());
        assert_eq!(wav.frames_per_channel(), 2);
        assert_eq!(wav.data_size(), 2 * 2 * 4);

        let payload: Vec<f32> = wav.wav_data[44..]
            .chunks_exact(4)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect();
        assert_eq!(payload, vec![3.0, 5.0, 2.0, 4.0]);

        let all = export(
            &buffer,
            &ExportOptions {
                sample_format: SampleFormat::Float32,
                stereo: false,
            },
        );
        assert_eq!(all.frames_per_channel(), 2);
    }

    #[test]
    fn test_export_options_from_partial_json() {
        let options: ExportOptions = serde_json::from_str(r#"{"sample_format":"int16"}"#).unwrap();
        assert_eq!(options.sample_format, SampleFormat::Int16);
        assert!(options.stereo);
    }
}
