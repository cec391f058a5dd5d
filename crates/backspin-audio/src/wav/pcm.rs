//! Payload extraction and hashing utilities.

use super::header::HEADER_SIZE;

/// Iterator over the sub-chunks of a RIFF/WAVE file as `(id, body)` pairs.
///
/// Stops at the first chunk whose declared body runs past the buffer.
struct RiffChunks<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Iterator for RiffChunks<'a> {
    type Item = (&'a [u8], &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        let head = self.data.get(self.pos..self.pos.checked_add(8)?)?;
        let size = u32::from_le_bytes([head[4], head[5], head[6], head[7]]) as usize;

        let start = self.pos + 8;
        let body = self.data.get(start..start.checked_add(size)?)?;

        // Word-aligned; a missing pad byte at the very end is tolerated.
        self.pos = start + size + (size & 1);
        Some((&head[..4], body))
    }
}

/// Extracts the payload from a WAV file buffer.
///
/// Walks the RIFF chunks, so files with extra chunks before `data` work too.
///
/// # Returns
/// Payload bytes if found, or None if the format is invalid
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < HEADER_SIZE
        || &wav_data[0..4] != b"RIFF"
        || &wav_data[8..12] != b"WAVE"
    {
        return None;
    }

    RiffChunks {
        data: wav_data,
        pos: 12,
    }
    .find(|(id, _)| *id == b"data")
    .map(|(_, body)| body)
}

/// BLAKE3 hex digest of the payload, or None if the file has no readable
/// `data` chunk.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
