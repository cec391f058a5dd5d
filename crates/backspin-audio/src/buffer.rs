//! Planar multi-channel sample buffer.

use crate::interleave::{deinterleave, interleave};

/// Decoded audio held as one sample vector per channel.
///
/// Samples are `f32` in roughly [-1.0, 1.0]. Channels are expected to be the
/// same length, but nothing here enforces it: every operation works over each
/// channel's own length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AudioBuffer {
    /// Per-channel samples (index 0 = left for stereo).
    pub channels: Vec<Vec<f32>>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl AudioBuffer {
    /// Creates a buffer from planar channel data.
    pub fn new(channels: Vec<Vec<f32>>, sample_rate: u32) -> Self {
        Self {
            channels,
            sample_rate,
        }
    }

    /// Creates a single-channel buffer.
    pub fn mono(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self::new(vec![samples], sample_rate)
    }

    /// Creates a two-channel buffer.
    pub fn stereo(left: Vec<f32>, right: Vec<f32>, sample_rate: u32) -> Self {
        Self::new(vec![left, right], sample_rate)
    }

    /// Splits interleaved samples into a planar buffer.
    ///
    /// A trailing partial frame is dropped.
    pub fn from_interleaved(samples: &[f32], channels: usize, sample_rate: u32) -> Self {
        Self::new(deinterleave(samples, channels), sample_rate)
    }

    /// Number of channels.
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Number of samples per channel (the longest channel).
    pub fn len(&self) -> usize {
        self.channels.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Duration in seconds, or 0.0 for a zero sample rate.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.len() as f64 / self.sample_rate as f64
    }

    /// Interleaves every channel frame by frame.
    ///
    /// Stops at the shortest channel.
    pub fn to_interleaved(&self) -> Vec<f32> {
        let frames = self.channels.iter().map(Vec::len).min().unwrap_or(0);
        let mut out = Vec::with_capacity(frames * self.channels.len());
        for i in 0..frames {
            for channel in &self.channels {
                out.push(channel[i]);
            }
        }
        out
    }

    /// Interleaves the buffer as stereo.
    ///
    /// Mono is duplicated to both sides; beyond two channels only the first
    /// two are kept.
    pub fn to_interleaved_stereo(&self) -> Vec<f32> {
        match self.channels.as_slice() {
            [] => Vec::new(),
            [mono] => interleave(mono, mono),
            [left, right, rest @ ..] => {
                if !rest.is_empty() {
                    log::warn!(
                        "Dropping {} channel(s) beyond stereo on export",
                        rest.len()
                    );
                }
                interleave(left, right)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_uses_longest_channel() {
        let buffer = AudioBuffer::stereo(vec![0.0; 3], vec![0.0; 5], 44100);
        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer.num_channels(), 2);
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = AudioBuffer::default();
        assert!(buffer.is_empty());
        assert_eq!(buffer.duration_seconds(), 0.0);
        assert!(buffer.to_interleaved_stereo().is_empty());
    }

    #[test]
    fn test_duration() {
        let buffer = AudioBuffer::mono(vec![0.0; 22050], 44100);
        assert!((buffer.duration_seconds() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_mono_duplicates_to_stereo() {
        let buffer = AudioBuffer::mono(vec![0.1, 0.2], 8000);
        assert_eq!(buffer.to_interleaved_stereo(), vec![0.1, 0.1, 0.2, 0.2]);
    }

    #[test]
    fn test_extra_channels_dropped_for_stereo() {
        let buffer = AudioBuffer::new(vec![vec![1.0], vec![2.0], vec![3.0]], 8000);
        assert_eq!(buffer.to_interleaved_stereo(), vec![1.0, 2.0]);
        assert_eq!(buffer.to_interleaved(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_from_interleaved() {
        let buffer = AudioBuffer::from_interleaved(&[1.0, 2.0, 3.0, 4.0, 5.0], 2, 48000);
        assert_eq!(buffer.channels, vec![vec![1.0, 3.0], vec![2.0, 4.0]]);
        assert_eq!(buffer.sample_rate, 48000);
    }
}
