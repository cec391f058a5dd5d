#![no_main]

use backspin_audio::wav::{compute_pcm_hash, extract_pcm_data};
use backspin_audio::WavHeader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Some(header) = WavHeader::parse(data) {
        let _ = header.sample_format();
        let _ = header.is_consistent();
    }

    if let Some(pcm) = extract_pcm_data(data) {
        assert!(pcm.len() <= data.len());
        assert!(compute_pcm_hash(data).is_some());
    }
});
