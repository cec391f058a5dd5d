//! Stereo interleaving helpers.

/// Interleaves two channels into `[l0, r0, l1, r1, ...]`.
///
/// Samples are paired up to the shorter channel; the tail of the longer one
/// is dropped with a warning.
pub fn interleave(left: &[f32], right: &[f32]) -> Vec<f32> {
    if left.len() != right.len() {
        log::warn!(
            "Channel lengths differ ({} vs {}); truncating to {} frames",
            left.len(),
            right.len(),
            left.len().min(right.len())
        );
    }

    let mut out = Vec::with_capacity(left.len().min(right.len()) * 2);
    for (&l, &r) in left.iter().zip(right) {
        out.push(l);
        out.push(r);
    }
    out
}

/// Splits interleaved samples into `channels` planar vectors.
///
/// A trailing partial frame is dropped. Zero channels yields no vectors.
pub fn deinterleave(samples: &[f32], channels: usize) -> Vec<Vec<f32>> {
    if channels == 0 {
        return Vec::new();
    }

    let frames = samples.len() / channels;
    let mut out = vec![Vec::with_capacity(frames); channels];
    for frame in samples.chunks_exact(channels) {
        for (channel, &sample) in out.iter_mut().zip(frame) {
            channel.push(sample);
        }
    }
    out
}
