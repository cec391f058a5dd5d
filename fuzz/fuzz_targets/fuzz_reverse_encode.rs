#![no_main]

use backspin_audio::{encode, reverse, AudioBuffer, SampleFormat, WavFormat, WavHeader};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };

    let samples: Vec<f32> = rest
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();
    let channels = (selector & 0x07) as usize + 1;
    let sample_format = if selector & 0x80 == 0 {
        SampleFormat::Float32
    } else {
        SampleFormat::Int16
    };

    let mut buffer = AudioBuffer::from_interleaved(&samples, channels, 44100);
    let before = buffer.clone();
    reverse(&mut buffer);
    assert_eq!(buffer.len(), before.len());

    let format = WavFormat::new(sample_format, channels as u16, 44100);
    let encoded = encode(&buffer.to_interleaved(), &format);
    let header = WavHeader::parse(&encoded.wav_data).expect("encoder writes a canonical header");
    assert!(header.is_consistent());
});
