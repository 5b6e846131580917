//! WAV encoding of converted PCM for the recognition upload.

use crate::defaults::SAMPLE_RATE;
use crate::error::{Result, VoxlateError};
use std::io::Cursor;
use std::path::Path;

fn spec(sample_rate: u32, channels: u16) -> hound::WavSpec {
    hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Encode 16kHz mono s16 PCM as an in-memory WAV file.
pub fn wav_bytes(samples: &[i16]) -> Result<Vec<u8>> {
    wav_bytes_with_spec_checked(samples, SAMPLE_RATE, 1)
}

/// Write 16kHz mono s16 PCM as a WAV file at `path`.
pub fn write_wav(samples: &[i16], path: &Path) -> Result<()> {
    let mut writer =
        hound::WavWriter::create(path, spec(SAMPLE_RATE, 1)).map_err(wav_error)?;
    for &sample in samples {
        writer.write_sample(sample).map_err(wav_error)?;
    }
    writer.finalize().map_err(wav_error)?;
    Ok(())
}

fn wav_bytes_with_spec_checked(samples: &[i16], sample_rate: u32, channels: u16) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut cursor, spec(sample_rate, channels))
        .map_err(wav_error)?;
    for &sample in samples {
        writer.write_sample(sample).map_err(wav_error)?;
    }
    writer.finalize().map_err(wav_error)?;
    Ok(cursor.into_inner())
}

/// Test helper: encode samples at an arbitrary rate/channel layout.
#[cfg(test)]
pub(crate) fn wav_bytes_with_spec(samples: &[i16], sample_rate: u32, channels: u16) -> Vec<u8> {
    match wav_bytes_with_spec_checked(samples, sample_rate, channels) {
        Ok(data) => data,
        Err(e) => panic!("WAV test fixture encoding failed: {}", e),
    }
}

fn wav_error(e: hound::Error) -> VoxlateError {
    VoxlateError::UnsupportedFormat {
        message: format!("WAV encoding: {}", e),
    }
}
