//! Test fixture utilities for creating source audio files.

use std::f32::consts::PI;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding generated source files.
pub struct AudioFixture {
    pub root: TempDir,
}

impl AudioFixture {
    /// Create a new empty fixture directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        Self { root }
    }

    /// Get the fixture root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Path for a file inside the fixture (not created).
    pub fn file(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// Write interleaved 16-bit PCM samples as a WAV file using hound.
    pub fn add_pcm16_wav(
        &self,
        name: &str,
        samples: &[i16],
        channels: u16,
        sample_rate: u32,
    ) -> PathBuf {
        let path = self.file(name);
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).expect("Failed to create WAV");
        for &sample in samples {
            writer.write_sample(sample).expect("Failed to write sample");
        }
        writer.finalize().expect("Failed to finalize WAV");
        path
    }

    /// Write a stereo tone with a rising ramp on the right channel.
    pub fn add_stereo_tone(&self, name: &str, frames: usize, sample_rate: u32) -> PathBuf {
        let left = sine_pcm16(440.0, frames, sample_rate);
        let right = ramp_pcm16(frames);
        let interleaved: Vec<i16> = left
            .iter()
            .zip(&right)
            .flat_map(|(&l, &r)| [l, r])
            .collect();
        self.add_pcm16_wav(name, &interleaved, 2, sample_rate)
    }

    /// Write raw little-endian 16-bit samples with no header.
    pub fn add_raw_s16le(&self, name: &str, samples: &[i16]) -> PathBuf {
        let path = self.file(name);
        let bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
        std::fs::write(&path, bytes).expect("Failed to write raw file");
        path
    }
}

impl Default for AudioFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A sine wave at half amplitude, quantized to 16 bits.
pub fn sine_pcm16(frequency: f32, frames: usize, sample_rate: u32) -> Vec<i16> {
    (0..frames)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            ((2.0 * PI * frequency * t).sin() * 0.5 * 32767.0).round() as i16
        })
        .collect()
}

/// A ramp from 0 upward in steps of 64, so every frame is distinct.
pub fn ramp_pcm16(frames: usize) -> Vec<i16> {
    (0..frames).map(|i| ((i * 64) % 32768) as i16).collect()
}

/// Converts 16-bit samples to floats the way the decoder scales them.
pub fn pcm16_to_f32(samples: &[i16]) -> Vec<f32> {
    samples.iter().map(|&s| s as f32 / 32768.0).collect()
}
