//! Decoder capability and the Symphonia-backed implementation.
//!
//! Decoding turns an arbitrary encoded byte stream (WAV, MP3, FLAC, Ogg
//! Vorbis) into a planar [`AudioBuffer`] at the source sample rate. No
//! resampling or channel mixing happens here.

use std::io::Cursor;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::buffer::AudioBuffer;
use crate::error::{AudioError, AudioResult};

/// Turns encoded audio bytes into a sample buffer.
pub trait AudioDecoder {
    /// Decodes `bytes`. `hint` is an optional file extension ("mp3", "wav").
    fn decode(&self, bytes: &[u8], hint: Option<&str>) -> AudioResult<AudioBuffer>;
}

/// Decoder backed by Symphonia's format probe and codec registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymphoniaDecoder;

impl SymphoniaDecoder {
    /// Creates a decoder using Symphonia's default registries.
    pub fn new() -> Self {
        Self
    }
}

impl AudioDecoder for SymphoniaDecoder {
    fn decode(&self, bytes: &[u8], hint: Option<&str>) -> AudioResult<AudioBuffer> {
        let mss = MediaSourceStream::new(Box::new(Cursor::new(bytes.to_vec())), Default::default());

        let mut probe_hint = Hint::new();
        if let Some(ext) = hint {
            probe_hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &probe_hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| AudioError::unsupported(e.to_string()))?;
        let mut format = probed.format;

        let track = format
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or(AudioError::NoAudioTrack)?;
        let track_id = track.id;
        let codec_params = track.codec_params.clone();

        let sample_rate = codec_params
            .sample_rate
            .ok_or_else(|| AudioError::decode("unknown sample rate"))?;
        let mut channels = codec_params.channels.map(|c| c.count());

        log::debug!(
            "Symphonia probe: codec={:?}, channels={:?}, rate={} Hz, input_bytes={}",
            codec_params.codec,
            channels,
            sample_rate,
            bytes.len()
        );

        let mut decoder = symphonia::default::get_codecs()
            .make(&codec_params, &DecoderOptions::default())
            .map_err(|e| AudioError::unsupported(e.to_string()))?;

        let mut interleaved: Vec<f32> = Vec::new();
        let mut skipped_packets = 0usize;

        loop {
            let packet = match format.next_packet() {
                Ok(p) => p,
                Err(SymphoniaError::ResetRequired) => {
                    decoder.reset();
                    continue;
                }
                Err(SymphoniaError::IoError(err))
                    if err.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break
                }
                Err(e) => return Err(AudioError::decode(e.to_string())),
            };

            if packet.track_id() != track_id {
                continue;
            }

            match decoder.decode(&packet) {
                Ok(decoded) => {
                    let spec = *decoded.spec();
                    channels.get_or_insert(spec.channels.count());

                    let mut samples = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
                    samples.copy_interleaved_ref(decoded);
                    interleaved.extend_from_slice(samples.samples());
                }
                Err(SymphoniaError::DecodeError(msg)) => {
                    log::warn!("Skipping undecodable packet: {}", msg);
                    skipped_packets += 1;
                }
                Err(e) => return Err(AudioError::decode(e.to_string())),
            }
        }

        let channels = channels.unwrap_or(1);
        if channels == 0 {
            return Err(AudioError::decode("stream reports zero channels"));
        }

        let buffer = AudioBuffer::from_interleaved(&interleaved, channels, sample_rate);
        log::info!(
            "Decoded {} channel(s), {} frames at {} Hz ({} packet(s) skipped)",
            buffer.num_channels(),
            buffer.len(),
            sample_rate,
            skipped_packets
        );

        Ok(buffer)
    }
}
