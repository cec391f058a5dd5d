//! In-place waveform reversal.
//!
//! Reversal swaps sample `i` with sample `len - 1 - i` in every channel. An odd
//! channel's middle sample is the fixed point of the swap and stays put.
//! Reversing twice restores the original order.

use crate::buffer::AudioBuffer;

/// Reverses every channel of `buffer` in place and hands the same buffer back.
///
/// Channels are reversed over their own lengths; mismatched lengths are
/// neither truncated nor padded.
pub fn reverse(buffer: &mut AudioBuffer) -> &mut AudioBuffer {
    for channel in &mut buffer.channels {
        reverse_channel(channel);
    }
    buffer
}

/// Reverses a single channel in place.
pub fn reverse_channel(samples: &mut [f32]) {
    samples.reverse();
}
