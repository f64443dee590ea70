//! CLI for the wonkify degradation engine.
//!
//! Usage: wonkify-cli <input.wav> <output.wav> [preset.json]
//!
//! Reads WAV, picks the run's configuration, degrades, writes output WAV.
//! If no preset given, uses default params with a freshly drawn sample rate.

use std::env;
use std::fs;
use std::path::Path;
use wonkify_dsp::{decode_wav, degrade, encode_wav, WonkifyParams, WonkifyRng};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: wonkify-cli <input.wav> <output.wav> [preset.json]");
        std::process::exit(1);
    }

    let input_path = Path::new(&args[1]);
    let output_path = Path::new(&args[2]);
    let preset_path = args.get(3);

    // Load params
    let mut params = if let Some(path) = preset_path {
        let json = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Failed to read preset {}: {}", path, e);
            std::process::exit(1);
        });
        let params = WonkifyParams::from_json(&json).unwrap_or_else(|e| {
            eprintln!("Failed to parse preset {}: {}", path, e);
            std::process::exit(1);
        });
        params.validate().unwrap_or_else(|e| {
            eprintln!("{}", e);
            std::process::exit(1);
        });
        params
    } else {
        WonkifyParams::default()
    };

    // One generator drives the whole run: sample-rate draw first, then the
    // degrader's hiss/trigger sequence.
    let mut rng = WonkifyRng::new(params.seed);
    let sample_rate = params.choose_sample_rate(&mut rng);

    eprintln!(
        "Wonkify run:\n- sample rate: {} Hz\n- smear: LFO modulated ~{}%",
        sample_rate,
        (params.smear_base_chance * 100.0).round()
    );

    let input = decode_wav(input_path, sample_rate).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
    eprintln!("Input: {} samples at {} Hz", input.len(), sample_rate);

    let output = degrade(&input, &params, &mut rng);

    encode_wav(output_path, &output, sample_rate).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    eprintln!(
        "Wrote {} ({} samples, {} smeared in)",
        output_path.display(),
        output.len(),
        output.len() - input.len()
    );
}
