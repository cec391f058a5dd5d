//! Capture capability, chunk accumulator and recording session.
//!
//! A [`RecordingSession`] asks a [`CaptureDevice`] for access, pulls
//! interleaved chunks into a [`ChunkAccumulator`] until the device runs dry,
//! and then drains everything into a planar [`AudioBuffer`] ready for
//! reversal.

use std::io::{ErrorKind, Read};

use crate::buffer::AudioBuffer;
use crate::error::{AudioError, AudioResult};

/// Stream layout negotiated with a capture device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureFormat {
    /// Number of interleaved channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

/// A source of captured audio.
pub trait CaptureDevice {
    /// Human-readable device name used in errors and logs.
    fn name(&self) -> &str {
        "capture"
    }

    /// Requests access to the device and returns the stream layout.
    ///
    /// Refusal is reported as [`AudioError::PermissionDenied`].
    fn request(&mut self) -> AudioResult<CaptureFormat>;

    /// Reads the next chunk of interleaved samples, or `None` once the
    /// capture has ended.
    fn read_chunk(&mut self) -> AudioResult<Option<Vec<f32>>>;
}

/// Accumulates captured chunks until they are drained.
#[derive(Debug, Clone)]
pub struct ChunkAccumulator<T> {
    chunks: Vec<Vec<T>>,
}

impl<T> Default for ChunkAccumulator<T> {
    fn default() -> Self {
        Self { chunks: Vec::new() }
    }
}

impl<T> ChunkAccumulator<T> {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk.
    pub fn append(&mut self, chunk: Vec<T>) {
        self.chunks.push(chunk);
    }

    /// Returns everything appended so far in order and resets to empty.
    pub fn drain(&mut self) -> Vec<T> {
        std::mem::take(&mut self.chunks)
            .into_iter()
            .flatten()
            .collect()
    }

    /// Total number of items held.
    pub fn len(&self) -> usize {
        self.chunks.iter().map(Vec::len).sum()
    }

    /// Check if nothing is held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of chunks appended since the last drain.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

/// A recording in progress.
#[derive(Debug)]
pub struct RecordingSession<D: CaptureDevice> {
    device: D,
    format: CaptureFormat,
    chunks: ChunkAccumulator<f32>,
}

impl<D: CaptureDevice> RecordingSession<D> {
    /// Requests the device and starts an empty recording.
    pub fn start(mut device: D) -> AudioResult<Self> {
        let format = device.request()?;
        if format.channels == 0 {
            return Err(AudioError::invalid_param(
                "channels",
                format!("device '{}' reported zero channels", device.name()),
            ));
        }

        log::info!(
            "Recording from '{}': {} channel(s) at {} Hz",
            device.name(),
            format.channels,
            format.sample_rate
        );

        Ok(Self {
            device,
            format,
            chunks: ChunkAccumulator::new(),
        })
    }

    /// The negotiated stream layout.
    pub fn format(&self) -> CaptureFormat {
        self.format
    }

    /// Pulls one chunk from the device. Returns `false` once capture ended.
    pub fn capture_chunk(&mut self) -> AudioResult<bool> {
        match self.device.read_chunk()? {
            Some(chunk) => {
                log::trace!("Captured chunk of {} samples", chunk.len());
                self.chunks.append(chunk);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Pulls chunks until the device ends. Returns the number of chunks read.
    pub fn record_to_end(&mut self) -> AudioResult<usize> {
        let mut count = 0;
        while self.capture_chunk()? {
            count += 1;
        }
        log::debug!(
            "Capture ended after {} chunk(s), {} samples",
            count,
            self.chunks.len()
        );
        Ok(count)
    }

    /// Interleaved samples captured so far.
    pub fn captured_samples(&self) -> usize {
        self.chunks.len()
    }

    /// Stops the recording and returns the captured audio as a planar buffer.
    ///
    /// A trailing partial frame is dropped.
    pub fn finish(mut self) -> AudioBuffer {
        let samples = self.chunks.drain();
        let partial = samples.len() % self.format.channels as usize;
        if partial != 0 {
            log::warn!(
                "Dropping {} sample(s) of a partial frame from '{}'",
                partial,
                self.device.name()
            );
        }
        AudioBuffer::from_interleaved(
            &samples,
            self.format.channels as usize,
            self.format.sample_rate,
        )
    }
}

/// Sample encoding of a raw PCM stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawSampleFormat {
    /// Little-endian 32-bit float.
    F32Le,
    /// Little-endian signed 16-bit.
    S16Le,
}

impl RawSampleFormat {
    /// Bytes per sample.
    pub fn bytes_per_sample(self) -> usize {
        match self {
            RawSampleFormat::F32Le => 4,
            RawSampleFormat::S16Le => 2,
        }
    }

    fn decode_sample(self, bytes: &[u8]) -> f32 {
        match self {
            RawSampleFormat::F32Le => f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            RawSampleFormat::S16Le => i16::from_le_bytes([bytes[0], bytes[1]]) as f32 / 32768.0,
        }
    }
}

impl std::str::FromStr for RawSampleFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "f32le" => Ok(RawSampleFormat::F32Le),
            "s16le" => Ok(RawSampleFormat::S16Le),
            other => Err(format!(
                "unknown raw format '{}' (expected f32le or s16le)",
                other
            )),
        }
    }
}

/// Capture device reading raw interleaved PCM from any reader.
///
/// Works with stdin piped from a recorder (e.g. `arecord -f S16_LE`) or with a
/// raw dump on disk.
#[derive(Debug)]
pub struct RawPcmDevice<R: Read> {
    name: String,
    reader: R,
    format: CaptureFormat,
    sample_format: RawSampleFormat,
    chunk_frames: usize,
    finished: bool,
}

impl<R: Read> RawPcmDevice<R> {
    /// Default number of frames per chunk.
    pub const DEFAULT_CHUNK_FRAMES: usize = 4096;

    /// Largest read buffer a single chunk may use.
    pub const MAX_CHUNK_BYTES: usize = 64 * 1024 * 1024;

    /// Creates a device over `reader`.
    pub fn new(
        name: impl Into<String>,
        reader: R,
        format: CaptureFormat,
        sample_format: RawSampleFormat,
    ) -> Self {
        Self {
            name: name.into(),
            reader,
            format,
            sample_format,
            chunk_frames: Self::DEFAULT_CHUNK_FRAMES,
            finished: false,
        }
    }

    /// Sets the number of frames read per chunk (at least one).
    ///
    /// A size whose buffer would exceed [`Self::MAX_CHUNK_BYTES`] makes
    /// [`CaptureDevice::read_chunk`] fail with `InvalidParameter`.
    pub fn with_chunk_frames(mut self, chunk_frames: usize) -> Self {
        self.chunk_frames = chunk_frames.max(1);
        self
    }

    fn fill(&mut self, buf: &mut [u8]) -> AudioResult<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(AudioError::capture(format!(
                        "reading '{}' failed: {}",
                        self.name, e
                    )))
                }
            }
        }
        Ok(filled)
    }
}

impl<R: Read> CaptureDevice for RawPcmDevice<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn request(&mut self) -> AudioResult<CaptureFormat> {
        Ok(self.format)
    }

    fn read_chunk(&mut self) -> AudioResult<Option<Vec<f32>>> {
        if self.finished {
            return Ok(None);
        }

        let bytes_per_sample = self.sample_format.bytes_per_sample();
        let chunk_bytes = self
            .chunk_frames
            .checked_mul(self.format.channels as usize)
            .and_then(|n| n.checked_mul(bytes_per_sample))
            .filter(|&n| n <= Self::MAX_CHUNK_BYTES)
            .ok_or_else(|| {
                AudioError::invalid_param(
                    "chunk_frames",
                    format!(
                        "{} frames of {} channel(s) exceed the {}-byte chunk limit",
                        self.chunk_frames,
                        self.format.channels,
                        Self::MAX_CHUNK_BYTES
                    ),
                )
            })?;
        let mut buf = vec![0u8; chunk_bytes.max(bytes_per_sample)];

        let filled = self.fill(&mut buf)?;
        if filled < buf.len() {
            self.finished = true;
        }

        let whole = filled - filled % bytes_per_sample;
        if whole != filled {
            log::warn!(
                "Dropping {} trailing byte(s) from '{}'",
                filled - whole,
                self.name
            );
        }
        if whole == 0 {
            return Ok(None);
        }

        let samples = buf[..whole]
            .chunks_exact(bytes_per_sample)
            .map(|bytes| self.sample_format.decode_sample(bytes))
            .collect();
        Ok(Some(samples))
    }
}
