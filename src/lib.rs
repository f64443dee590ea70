//! Evolving "wonkify" degradation engine for mono PCM audio.
//!
//! Adds a barely audible hiss layer, then randomly duplicates short spans of
//! the clean source ("smears"), occasionally reversed, splicing them into the
//! output. Smear density is swept by a very slow sine LFO so the texture
//! drifts over tens of thousands of samples instead of flickering per sample.
//!
//! Single entry point: `degrade(input, params, rng) -> output`

pub mod degrade;
pub mod error;
pub mod params;
pub mod rng;
pub mod wav_io;

pub use degrade::{degrade, smear_probability};
pub use error::WonkifyError;
pub use params::{WonkifyParams, SAMPLE_RATE_CHOICES};
pub use rng::WonkifyRng;
pub use wav_io::{decode_wav, encode_wav};
