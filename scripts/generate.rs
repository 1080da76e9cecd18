// scripts/generate.rs
use fast_brownian::cli;
use fast_brownian::error::{BrownianError, BrownianResult};
use fast_brownian::output;
use fast_brownian::rng;
use fast_brownian::synth::{PathSynthesizer, SynthConfig};
use std::collections::HashMap;

fn main() {
    let tokens: Vec<String> = std::env::args().skip(1).collect();
    let params = cli::parse_args(&tokens);

    if params.contains_key("help") {
        println!("{}", cli::usage());
        return;
    }

    if let Err(e) = run(&params) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(params: &HashMap<String, String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(params)?;
    let start_point = params
        .get("start")
        .map(|s| cli::parse_start_point(s))
        .transpose()?;

    // the start point is checked against d before any work happens
    if let Some(point) = &start_point {
        if point.len() != config.dimension {
            return Err(Box::new(BrownianError::DimensionMismatch {
                expected: config.dimension,
                actual: point.len(),
            }));
        }
    }

    let scale = config.scale;
    let mut synth = PathSynthesizer::new(config)?;
    for message in synth.config().warning_messages(synth.warnings()) {
        eprintln!("Warning: {}", message);
    }

    let mut rng = rng::seed_rng_from_u64(synth.config().seed);
    synth.synthesize(&mut rng)?;
    synth.apply_scale(scale)?;
    if let Some(point) = &start_point {
        synth.recenter(point)?;
    }

    match params.get("output") {
        Some(filename) => {
            output::export_path(synth.path(), filename)?;
            println!(
                "Brownian motion successfully exported to \"{}\".",
                filename
            );
        }
        None => {
            print!("{}", synth.path());
        }
    }
    Ok(())
}

fn build_config(params: &HashMap<String, String>) -> BrownianResult<SynthConfig> {
    let defaults = SynthConfig::default();

    let grid_points = match params.get("kt") {
        Some(value) => cli::parse_value::<usize>("kt", value, "integer")?,
        None => {
            return Err(BrownianError::InvalidConfiguration {
                field: "kt".to_string(),
                reason: "parameter kt is mandatory; run with 'help' to show a short manual"
                    .to_string(),
            });
        }
    };
    let dimension = match params.get("d") {
        Some(value) => cli::parse_value::<usize>("d", value, "integer")?,
        None => defaults.dimension,
    };
    let scale = match params.get("c") {
        Some(value) => cli::parse_value::<f64>("c", value, "double")?,
        None => defaults.scale,
    };
    let cut = match params.get("n") {
        Some(value) => cli::parse_value::<u32>("n", value, "integer")?,
        None => defaults.cut,
    };
    let seed = match params.get("seed") {
        Some(value) => cli::parse_value::<u64>("seed", value, "integer")?,
        None => rand::random::<u64>(),
    };

    Ok(SynthConfig {
        grid_points,
        dimension,
        scale,
        cut,
        seed,
    })
}
