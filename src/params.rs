//! Parameter schema for the wonkify engine.
//!
//! All callers (CLI, library users) share the same `WonkifyParams` struct.
//! Presets are sparse JSON: missing keys fall back to the tuning defaults.

use crate::error::WonkifyError;
use crate::rng::WonkifyRng;
use serde::{Deserialize, Serialize};

/// Target sample rates a run may land on. The slight variance between runs
/// is part of the effect.
pub const SAMPLE_RATE_CHOICES: &[u32] = &[30000, 32000, 36000, 41000, 44100];

/// All wonkify parameters, immutable for the whole run.
///
/// `sample_rate` and `seed` are `None` until pinned: an unpinned sample rate
/// is drawn from `SAMPLE_RATE_CHOICES` per run, and an unpinned seed means
/// the run uses OS entropy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WonkifyParams {
    pub sample_rate: Option<u32>,

    /// Baseline smear probability per sample; the LFO sweeps the effective
    /// probability between 0 and this value.
    pub smear_base_chance: f64,

    /// LFO angular step per sample index (radians). Period is 2π / freq
    /// samples, deliberately far longer than any single smear.
    pub smear_modulation_freq: f64,

    /// Inclusive half-width range of a smear copy window, in samples.
    pub smear_len_min: usize,
    pub smear_len_max: usize,

    /// Probability a triggered smear is reversed before splicing.
    pub smear_reverse_chance: f64,

    /// Peak-to-peak hiss amplitude as a fraction of 16-bit full scale.
    pub hiss_level: f64,

    pub seed: Option<u64>,
}

impl Default for WonkifyParams {
    fn default() -> Self {
        Self {
            sample_rate: None,
            smear_base_chance: 0.005,
            smear_modulation_freq: 0.0001,
            smear_len_min: 3,
            smear_len_max: 10,
            smear_reverse_chance: 0.1,
            hiss_level: 0.0001,
            seed: None,
        }
    }
}

impl WonkifyParams {
    /// Parse from JSON. Missing fields get default values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The parameter selector: defaults plus the per-run random draws.
    pub fn choose(rng: &mut WonkifyRng) -> Self {
        let mut p = Self::default();
        p.choose_sample_rate(rng);
        p
    }

    /// Resolve the run's target sample rate, drawing one if unpinned.
    pub fn choose_sample_rate(&mut self, rng: &mut WonkifyRng) -> u32 {
        match self.sample_rate {
            Some(sr) => sr,
            None => {
                let sr = *rng.choice(SAMPLE_RATE_CHOICES);
                self.sample_rate = Some(sr);
                sr
            }
        }
    }

    /// Range checks for preset input. The transform itself never validates.
    pub fn validate(&self) -> Result<(), WonkifyError> {
        fn unit(name: &str, v: f64) -> Result<(), WonkifyError> {
            if !(0.0..=1.0).contains(&v) {
                return Err(WonkifyError::Params(format!(
                    "{name} must be in [0, 1], got {v}"
                )));
            }
            Ok(())
        }
        unit("smear_base_chance", self.smear_base_chance)?;
        unit("smear_reverse_chance", self.smear_reverse_chance)?;
        if self.hiss_level < 0.0 {
            return Err(WonkifyError::Params(format!(
                "hiss_level must be >= 0, got {}",
                self.hiss_level
            )));
        }
        if self.smear_modulation_freq < 0.0 {
            return Err(WonkifyError::Params(format!(
                "smear_modulation_freq must be >= 0, got {}",
                self.smear_modulation_freq
            )));
        }
        if self.smear_len_min < 1 {
            return Err(WonkifyError::Params(
                "smear_len_min must be >= 1".to_string(),
            ));
        }
        if self.smear_len_min > self.smear_len_max {
            return Err(WonkifyError::Params(format!(
                "smear_len_min ({}) > smear_len_max ({})",
                self.smear_len_min, self.smear_len_max
            )));
        }
        if let Some(0) = self.sample_rate {
            return Err(WonkifyError::Params("sample_rate must be nonzero".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params() {
        let p = WonkifyParams::default();
        assert_eq!(p.smear_base_chance, 0.005);
        assert_eq!(p.smear_modulation_freq, 0.0001);
        assert_eq!((p.smear_len_min, p.smear_len_max), (3, 10));
        assert_eq!(p.smear_reverse_chance, 0.1);
        assert_eq!(p.hiss_level, 0.0001);
        assert_eq!(p.sample_rate, None);
        assert_eq!(p.seed, None);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn sparse_json_load() {
        let json = r#"{"hiss_level": 0.002, "seed": 7}"#;
        let p = WonkifyParams::from_json(json).unwrap();
        assert_eq!(p.hiss_level, 0.002);
        assert_eq!(p.seed, Some(7));
        // Missing fields get defaults
        assert_eq!(p.smear_base_chance, 0.005);
        assert_eq!((p.smear_len_min, p.smear_len_max), (3, 10));
    }

    #[test]
    fn unknown_keys_rejected() {
        let json = r#"{"smeer_base_chance": 0.1}"#;
        assert!(WonkifyParams::from_json(json).is_err());
    }

    #[test]
    fn validate_rejects_bad_ranges() {
        let mut p = WonkifyParams::default();
        p.smear_base_chance = 1.5;
        assert!(p.validate().is_err());

        let mut p = WonkifyParams::default();
        p.smear_len_min = 12;
        assert!(p.validate().is_err());

        let mut p = WonkifyParams::default();
        p.hiss_level = -0.1;
        assert!(p.validate().is_err());

        let mut p = WonkifyParams::default();
        p.sample_rate = Some(0);
        assert!(p.validate().is_err());
    }

    #[test]
    fn chosen_rate_comes_from_candidate_set() {
        for seed in 0..20 {
            let mut rng = WonkifyRng::seeded(seed);
            let p = WonkifyParams::choose(&mut rng);
            assert!(SAMPLE_RATE_CHOICES.contains(&p.sample_rate.unwrap()));
        }
    }

    #[test]
    fn pinned_rate_survives_choose() {
        let mut rng = WonkifyRng::seeded(0);
        let mut p = WonkifyParams::default();
        p.sample_rate = Some(22050);
        assert_eq!(p.choose_sample_rate(&mut rng), 22050);
        assert_eq!(p.sample_rate, Some(22050));
    }
}
