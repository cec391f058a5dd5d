//! WAV encoder.
//!
//! This module writes canonical 44-byte-header WAV files holding either 32-bit
//! IEEE float or 16-bit PCM samples. There are no timestamps or variable
//! metadata, so identical samples always produce identical bytes. The hash of
//! the payload alone is kept alongside the file for comparisons.

mod format;
mod header;
mod pcm;
mod result;
mod writer;


// Re-export public API
pub use format::{SampleFormat, WavFormat};
pub use header::{WavHeader, HEADER_SIZE};
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::EncodedWav;
pub use writer::{
    encode, encode_payload, header_bytes, samples_to_f32le, samples_to_payload, samples_to_pcm16,
    write_wav,
};
