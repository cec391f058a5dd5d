//! End-to-end tests: source file -> CLI command -> reversed WAV on disk.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p backspin-tests --test e2e_reverse
//! ```

use std::fs;
use std::process::ExitCode;

use backspin_audio::{reverse_bytes, ExportOptions, SampleFormat, SymphoniaDecoder};
use backspin_cli::commands::record::RawInput;
use backspin_cli::commands::{inspect, record, reverse};
use backspin_tests::fixtures::{pcm16_to_f32, ramp_pcm16, sine_pcm16, AudioFixture};
use backspin_tests::format_validators::validate_wav;
use backspin_tests::verify_determinism;
use pretty_assertions::assert_eq;

fn float_payload(wav: &[u8]) -> Vec<f32> {
    let info = validate_wav(wav).expect("output should be a valid WAV");
    wav[info.data_offset..info.data_offset + info.data_size]
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect()
}

fn assert_close(actual: &[f32], expected: &[f32]) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < 1e-6, "sample {}: {} != {}", i, a, e);
    }
}

#[test]
fn reverse_stereo_tone_to_int16() {
    let fixture = AudioFixture::new();
    let frames = 200;
    let input = fixture.add_stereo_tone("tone.wav", frames, 44100);
    let output = fixture.file("tone_rev.wav");

    let code = reverse::run(
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        Some("int16"),
        None,
        true,
    )
    .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let mut reader = hound::WavReader::open(&output).unwrap();
    assert_eq!(reader.spec().channels, 2);
    assert_eq!(reader.spec().bits_per_sample, 16);
    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(samples.len(), frames * 2);

    let mut left = sine_pcm16(440.0, frames, 44100);
    let mut right = ramp_pcm16(frames);
    left.reverse();
    right.reverse();

    for (i, frame) in samples.chunks_exact(2).enumerate() {
        assert!((frame[0] as i32 - left[i] as i32).abs() <= 1, "left frame {}", i);
        assert_eq!(frame[1], right[i], "right frame {}", i);
    }
}

#[test]
fn reverse_defaults_to_float32_stereo() {
    let fixture = AudioFixture::new();
    let source = ramp_pcm16(64);
    let input = fixture.add_pcm16_wav("mono.wav", &source, 1, 16000);
    let output = fixture.file("mono_rev.wav");

    let code = reverse::run(
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        None,
        None,
        true,
    )
    .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let wav = fs::read(&output).unwrap();
    let info = validate_wav(&wav).unwrap();
    assert!(info.is_float32());
    assert_eq!(info.channels, 2);
    assert_eq!(info.sample_rate, 16000);
    assert_eq!(info.num_frames, 64);

    let mut expected_mono = pcm16_to_f32(&source);
    expected_mono.reverse();
    let expected: Vec<f32> = expected_mono.iter().flat_map(|&s| [s, s]).collect();
    assert_close(&float_payload(&wav), &expected);
}

#[test]
fn reversing_twice_restores_the_source() {
    let fixture = AudioFixture::new();
    let source = ramp_pcm16(100);
    let input = fixture.add_pcm16_wav("src.wav", &source, 2, 8000);
    let once = fixture.file("once.wav");
    let twice = fixture.file("twice.wav");

    let code = reverse::run(input.to_str().unwrap(), once.to_str().unwrap(), None, None, true)
        .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
    let code = reverse::run(once.to_str().unwrap(), twice.to_str().unwrap(), None, None, true)
        .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    assert_close(&float_payload(&fs::read(&twice).unwrap()), &pcm16_to_f32(&source));
}

#[test]
fn record_raw_stream_reverses_frames() {
    let fixture = AudioFixture::new();
    // Frames: (1000, -1000), (2000, -2000), (3000, -3000)
    let raw = fixture.add_raw_s16le("capture.raw", &[1000, -1000, 2000, -2000, 3000, -3000]);
    let output = fixture.file("capture.wav");

    let input = RawInput {
        path: raw.to_str().unwrap(),
        channels: 2,
        sample_rate: 48000,
        raw_format: "s16le",
    };
    let code = record::run(input, output.to_str().unwrap(), Some("int16"), None, true).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let mut reader = hound::WavReader::open(&output).unwrap();
    assert_eq!(reader.spec().sample_rate, 48000);
    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(samples, vec![3000, -3000, 2000, -2000, 1000, -1000]);
}

#[test]
fn inspect_reports_reversed_output() {
    let fixture = AudioFixture::new();
    let input = fixture.add_stereo_tone("tone.wav", 32, 22050);
    let output = fixture.file("tone_rev.wav");
    reverse::run(input.to_str().unwrap(), output.to_str().unwrap(), None, None, true).unwrap();

    let info = inspect::inspect_file(output.to_str().unwrap())
        .unwrap()
        .expect("canonical header");
    let wav = fs::read(&output).unwrap();

    assert!(info.consistent);
    assert_eq!(info.data_size as usize, wav.len() - 44);
    assert_eq!(
        info.pcm_hash.as_deref(),
        Some(backspin_tests::compute_hash(&wav[44..]).as_str())
    );
}

#[test]
fn reverse_output_is_deterministic() {
    let fixture = AudioFixture::new();
    let input = fixture.add_stereo_tone("tone.wav", 128, 44100);
    let bytes = fs::read(&input).unwrap();

    for sample_format in [SampleFormat::Float32, SampleFormat::Int16] {
        let options = ExportOptions {
            sample_format,
            stereo: true,
        };
        let result = verify_determinism(
            || {
                reverse_bytes(&SymphoniaDecoder::new(), &bytes, Some("wav"), &options)
                    .unwrap()
                    .wav
                    .wav_data
            },
            3,
        );
        result.assert_deterministic();
    }
}
