//! Integration tests: decode real WAV bytes, reverse them and re-encode.

use std::io::Cursor;

use backspin_audio::{
    reverse, reverse_bytes, AudioDecoder, ExportOptions, SampleFormat, SymphoniaDecoder,
    WavHeader,
};
use pretty_assertions::assert_eq;

/// Writes 16-bit stereo PCM with hound so the input comes from an independent writer.
fn hound_stereo_wav(left: &[i16], right: &[i16], sample_rate: u32) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for (&l, &r) in left.iter().zip(right) {
            writer.write_sample(l).unwrap();
            writer.write_sample(r).unwrap();
        }
        writer.finalize().unwrap();
    }
    cursor.into_inner()
}

#[test]
fn test_symphonia_decodes_pcm16_stereo() {
    let wav = hound_stereo_wav(&[0, 8192, 16384], &[-8192, -16384, -32768], 22050);
    let buffer = SymphoniaDecoder::new().decode(&wav, Some("wav")).unwrap();

    assert_eq!(buffer.sample_rate, 22050);
    assert_eq!(buffer.num_channels(), 2);
    assert_eq!(buffer.channels[0], vec![0.0, 0.25, 0.5]);
    assert_eq!(buffer.channels[1], vec![-0.25, -0.5, -1.0]);
}

#[test]
fn test_decode_then_reverse() {
    let wav = hound_stereo_wav(&[0, 8192, 16384], &[-8192, -16384, -32768], 22050);
    let mut buffer = SymphoniaDecoder::new().decode(&wav, None).unwrap();

    reverse(&mut buffer);
    assert_eq!(buffer.channels[0], vec![0.5, 0.25, 0.0]);
    assert_eq!(buffer.channels[1], vec![-1.0, -0.5, -0.25]);
}

#[test]
fn test_reverse_bytes_int16_readable_by_hound() {
    let wav = hound_stereo_wav(&[0, 8192, 16384], &[-8192, -16384, -32768], 44100);
    let options = ExportOptions {
        sample_format: SampleFormat::Int16,
        stereo: true,
    };
    let reversed = reverse_bytes(&SymphoniaDecoder::new(), &wav, Some("wav"), &options).unwrap();

    let mut reader = hound::WavReader::new(Cursor::new(reversed.wav.wav_data.clone())).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);

    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(samples, vec![16384, -32767, 8192, -16384, 0, -8192]);
}

#[test]
fn test_reverse_bytes_float_header() {
    let wav = hound_stereo_wav(&[1, 2, 3, 4], &[5, 6, 7, 8], 48000);
    let reversed =
        reverse_bytes(&SymphoniaDecoder::new(), &wav, Some("wav"), &ExportOptions::default())
            .unwrap();

    let header = WavHeader::parse(&reversed.wav.wav_data).unwrap();
    assert_eq!(header.audio_format, 3);
    assert_eq!(header.bits_per_sample, 32);
    assert_eq!(header.channels, 2);
    assert_eq!(header.data_size, 4 * 2 * 4);
    assert!(header.is_consistent());
    assert_eq!(reversed.wav.wav_data.len(), 44 + 32);
}

#[test]
fn test_mono_source_exported_as_stereo() {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 8000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for s in [16384i16, -16384] {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
    }

    let reversed = reverse_bytes(
        &SymphoniaDecoder::new(),
        &cursor.into_inner(),
        Some("wav"),
        &ExportOptions::default(),
    )
    .unwrap();

    assert_eq!(reversed.buffer.num_channels(), 1);
    assert_eq!(reversed.wav.format.channels, 2);
    assert_eq!(reversed.wav.frames_per_channel(), 2);
}
