//! WAV boundary: decode to mono 16-bit at the run's target rate, encode back.
//!
//! The transform itself only sees flat i16 buffers; everything
//! container-shaped lives here. Decode coerces whatever the file holds
//! (any channel count, int or float samples) into one mono channel,
//! linearly resampled to the target rate. Encode writes mono 16-bit PCM
//! and is only called once the full degraded buffer exists, so a failed
//! run never leaves a truncated-but-plausible file behind.

use crate::error::WonkifyError;
use std::path::Path;

/// Decode an audio file into mono i16 samples at `target_rate`.
pub fn decode_wav(path: &Path, target_rate: u32) -> Result<Vec<i16>, WonkifyError> {
    let decode_err = |source| WonkifyError::Decode {
        path: path.display().to_string(),
        source,
    };

    let reader = hound::WavReader::open(path).map_err(decode_err)?;
    let spec = reader.spec();
    let channels = spec.channels as usize;
    let source_rate = spec.sample_rate;
    let bits = spec.bits_per_sample;

    // Normalize to f64 in [-1, 1)
    let samples: Vec<f64> = match spec.sample_format {
        hound::SampleFormat::Int => {
            let max_val = (1_i64 << (bits - 1)) as f64;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f64 / max_val))
                .collect::<Result<_, _>>()
                .map_err(decode_err)?
        }
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<_, _>>()
            .map_err(decode_err)?,
    };

    let mono = downmix(&samples, channels);
    let resampled = resample_linear(&mono, source_rate, target_rate);
    Ok(to_i16(&resampled))
}

/// Write mono 16-bit PCM at `sample_rate`.
pub fn encode_wav(path: &Path, samples: &[i16], sample_rate: u32) -> Result<(), WonkifyError> {
    let encode_err = |source| WonkifyError::Encode {
        path: path.display().to_string(),
        source,
    };

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).map_err(encode_err)?;
    for &s in samples {
        writer.write_sample(s).map_err(encode_err)?;
    }
    writer.finalize().map_err(encode_err)
}

/// Average interleaved channels down to one.
fn downmix(interleaved: &[f64], channels: usize) -> Vec<f64> {
    if channels <= 1 {
        return interleaved.to_vec();
    }
    interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f64>() / channels as f64)
        .collect()
}

/// Linear-interpolation resample. No anti-alias filtering; artifacts are in
/// character for a degradation effect.
fn resample_linear(input: &[f64], from_rate: u32, to_rate: u32) -> Vec<f64> {
    if from_rate == to_rate || input.is_empty() {
        return input.to_vec();
    }
    let out_len = ((input.len() as u64 * to_rate as u64) / from_rate as u64).max(1) as usize;
    let step = from_rate as f64 / to_rate as f64;
    let mut out = Vec::with_capacity(out_len);
    for j in 0..out_len {
        let pos = j as f64 * step;
        let i0 = pos as usize;
        let frac = pos - i0 as f64;
        let a = input[i0.min(input.len() - 1)];
        let b = input[(i0 + 1).min(input.len() - 1)];
        out.push(a + (b - a) * frac);
    }
    out
}

/// Scale [-1, 1) floats back to saturated i16.
fn to_i16(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|&x| {
            (x * 32768.0)
                .round()
                .clamp(i16::MIN as f64, i16::MAX as f64) as i16
        })
        .collect()
}
