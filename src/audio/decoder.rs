//! Compressed audio decoding.
//!
//! Probes an uploaded container (MP3, OGG, FLAC, WAV, MP4/AAC), decodes it,
//! downmixes to mono, and resamples to the 16kHz s16 PCM the recognition
//! service expects. Pure format transform; the caller owns persistence.

use crate::defaults::SAMPLE_RATE;
use crate::error::{Result, VoxlateError};
use std::io::Cursor;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Decode compressed audio bytes to 16kHz mono s16 PCM.
///
/// `extension` is an optional container hint (e.g. "mp3") taken from the
/// uploaded filename; probing works without it but resolves faster with it.
///
/// Fails with [`VoxlateError::UnsupportedFormat`] if the container cannot be
/// decoded. No retry; the caller must surface the error.
pub fn convert(source_bytes: &[u8], extension: Option<&str>) -> Result<Vec<i16>> {
    let cursor = Cursor::new(source_bytes.to_vec());
    let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = extension {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| VoxlateError::UnsupportedFormat {
            message: format!("probe: {}", e),
        })?;

    let mut format = probed.format;

    let track = format
        .default_track()
        .ok_or_else(|| VoxlateError::UnsupportedFormat {
            message: "no audio track found".to_string(),
        })?;

    let track_id = track.id;
    let codec_params = track.codec_params.clone();
    let source_rate = codec_params
        .sample_rate
        .ok_or_else(|| VoxlateError::UnsupportedFormat {
            message: "unknown sample rate".to_string(),
        })?;
    let channels = codec_params.channels.map(|c| c.count()).unwrap_or(1);

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| VoxlateError::UnsupportedFormat {
            message: format!("codec: {}", e),
        })?;

    let mut samples: Vec<i16> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                return Err(VoxlateError::UnsupportedFormat {
                    message: format!("packet: {}", e),
                });
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(symphonia::core::errors::Error::DecodeError(e)) => {
                tracing::warn!(error = %e, "Skipping corrupt audio frame");
                continue;
            }
            Err(e) => {
                return Err(VoxlateError::UnsupportedFormat {
                    message: format!("decode: {}", e),
                });
            }
        };

        let spec = *decoded.spec();
        let num_frames = decoded.frames();
        if num_frames == 0 {
            continue;
        }

        let mut sample_buf = SampleBuffer::<i16>::new(num_frames as u64, spec);
        sample_buf.copy_interleaved_ref(decoded);
        let interleaved = sample_buf.samples();

        // Downmix to mono if multi-channel
        if channels > 1 {
            for frame in interleaved.chunks(channels) {
                let sum: i32 = frame.iter().map(|&s| s as i32).sum();
                samples.push((sum / channels as i32) as i16);
            }
        } else {
            samples.extend_from_slice(interleaved);
        }
    }

    if samples.is_empty() {
        return Err(VoxlateError::UnsupportedFormat {
            message: "no audio samples decoded".to_string(),
        });
    }

    let samples = if source_rate != SAMPLE_RATE {
        resample(&samples, source_rate, SAMPLE_RATE)
    } else {
        samples
    };

    tracing::debug!(
        samples = samples.len(),
        duration_secs = samples.len() as f32 / SAMPLE_RATE as f32,
        "Audio decoded to 16kHz mono PCM"
    );

    Ok(samples)
}

/// Simple linear interpolation resampling.
fn resample(samples: &[i16], from_rate: u32, to_rate: u32) -> Vec<i16> {
    if from_rate == to_rate {
        return samples.to_vec();
    }

    let ratio = from_rate as f64 / to_rate as f64;
    let output_len = (samples.len() as f64 / ratio).ceil() as usize;

    (0..output_len)
        .map(|i| {
            let source_pos = i as f64 * ratio;
            let source_idx = source_pos.floor() as usize;
            let fraction = source_pos - source_idx as f64;

            if source_idx + 1 >= samples.len() {
                samples[source_idx.min(samples.len() - 1)]
            } else {
                let left = samples[source_idx] as f64;
                let right = samples[source_idx + 1] as f64;
                (left + (right - left) * fraction) as i16
            }
        })
        .collect()
}
