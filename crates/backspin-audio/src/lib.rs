//! Backspin Audio Core
//!
//! This crate implements the audio side of Backspin: it takes decoded or
//! recorded audio, plays it backwards, and packs the result into a WAV file.
//!
//! # Overview
//!
//! Data flows in one direction:
//!
//! ```text
//! bytes / capture -> AudioBuffer -> reverse -> interleave -> encode -> WAV bytes
//! ```
//!
//! - **Reversal** happens in place on an [`AudioBuffer`], channel by channel.
//! - **Encoding** writes a canonical 44-byte RIFF/WAVE header in front of a
//!   32-bit float or 16-bit PCM payload.
//! - **Decoding** and **capture** are capability traits ([`AudioDecoder`],
//!   [`CaptureDevice`]) so the pipeline never depends on a concrete backend.
//!
//! # Example
//!
//! ```ignore
//! use backspin_audio::{reverse_bytes, ExportOptions, SymphoniaDecoder};
//!
//! let bytes = std::fs::read("voice.mp3")?;
//! let reversed = reverse_bytes(&SymphoniaDecoder::new(), &bytes, Some("mp3"), &ExportOptions::default())?;
//!
//! std::fs::write("voice_reversed.wav", &reversed.wav.wav_data)?;
//! println!("PCM hash: {}", reversed.wav.pcm_hash);
//! ```
//!
//! # Crate Structure
//!
//! - [`buffer`] - Planar multi-channel sample buffer
//! - [`reverse`] - In-place waveform reversal
//! - [`interleave`] - Stereo interleaving helpers
//! - [`wav`] - WAV header writer, encoder and header reader
//! - [`decode`] - Decoder capability and the Symphonia-backed implementation
//! - [`capture`] - Capture capability, chunk accumulator and recording session
//! - [`pipeline`] - Decode/record, reverse and export in one call

pub mod buffer;
pub mod capture;
pub mod decode;
pub mod error;
pub mod interleave;
pub mod pipeline;
pub mod reverse;
pub mod wav;

// Re-export main types at crate root
pub use buffer::AudioBuffer;
pub use capture::{
    CaptureDevice, CaptureFormat, ChunkAccumulator, RawPcmDevice, RawSampleFormat,
    RecordingSession,
};
pub use decode::{AudioDecoder, SymphoniaDecoder};
pub use error::{AudioError, AudioResult};
pub use interleave::{deinterleave, interleave};
pub use pipeline::{export, reverse_bytes, reverse_recording, ExportOptions, ReversedAudio};
pub use reverse::{reverse, reverse_channel};
pub use wav::{encode, encode_payload, EncodedWav, SampleFormat, WavFormat, WavHeader};
