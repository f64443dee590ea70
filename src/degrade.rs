//! The core degradation pass: hiss injection plus LFO-modulated smears.
//!
//! One left-to-right sweep over the clean input. Each sample picks up a
//! tiny uniform hiss, then may trigger a smear: a short window of clean
//! source samples around the current index, occasionally reversed, spliced
//! into the output right after the current sample. Smears always copy from
//! the original input, never from already-degraded output.
//!
//! Intermediate values stay unrounded f64; rounding to nearest and the
//! saturating clamp to 16-bit happen once at final output.

use crate::params::WonkifyParams;
use crate::rng::WonkifyRng;

/// 16-bit full scale, the reference for `hiss_level`.
const FULL_SCALE: f64 = 65536.0;

/// Output preallocation factor; growth past this is amortized Vec doubling.
const OUTPUT_HEADROOM: f64 = 1.1;

/// Effective smear trigger probability at sample index `i`.
///
/// Sweeps between 0 and `smear_base_chance` with period
/// 2π / `smear_modulation_freq` samples (~62,832 at the default constant).
pub fn smear_probability(i: usize, params: &WonkifyParams) -> f64 {
    params.smear_base_chance * (1.0 + (i as f64 * params.smear_modulation_freq).sin()) / 2.0
}

/// Clean source window around index `i`, truncated at the buffer edges.
fn smear_window(input: &[i16], i: usize, len: usize) -> &[i16] {
    let start = i.saturating_sub(len);
    let end = (i + len).min(input.len());
    &input[start..end]
}

/// Round to nearest and saturate into the 16-bit sample range.
fn finalize(x: f64) -> i16 {
    x.round().clamp(i16::MIN as f64, i16::MAX as f64) as i16
}

/// Degrade a mono sample sequence in one pass.
///
/// Output length is at least the input length; every triggered smear grows
/// it by up to `2 * smear_len_max` samples. Draw order per index is fixed
/// (hiss, trigger, then length and reverse on trigger), so a seeded run is
/// reproducible.
pub fn degrade(input: &[i16], params: &WonkifyParams, rng: &mut WonkifyRng) -> Vec<i16> {
    let mut out: Vec<f64> = Vec::with_capacity((input.len() as f64 * OUTPUT_HEADROOM) as usize);
    let hiss_span = params.hiss_level * FULL_SCALE;

    for (i, &s) in input.iter().enumerate() {
        let hiss = rng.random() * hiss_span - hiss_span / 2.0;
        out.push(s as f64 + hiss);

        if rng.random() < smear_probability(i, params) {
            let len = rng.rand_int(params.smear_len_min, params.smear_len_max);
            let window = smear_window(input, i, len);
            if rng.random() < params.smear_reverse_chance {
                out.extend(window.iter().rev().map(|&w| w as f64));
            } else {
                out.extend(window.iter().map(|&w| w as f64));
            }
        }
    }

    out.into_iter().map(finalize).collect()
}
