// demos/demo.rs
use fast_brownian::analytics::diagnostics;
use fast_brownian::math_utils::Timer;
use fast_brownian::output;
use fast_brownian::rng;
use fast_brownian::synth::{PathSynthesizer, SynthConfig};

fn main() {
    println!("Running fast-brownian Synthesis Demo\n");

    let config = SynthConfig {
        grid_points: 4097,
        dimension: 2,
        scale: 2.0,
        cut: 15,
        seed: 12345,
    };

    let mut synth = PathSynthesizer::new(config.clone()).expect("valid configuration");
    for message in synth.config().warning_messages(synth.warnings()) {
        eprintln!("Warning: {}", message);
    }

    // --- Sequential synthesis ---
    println!("--- Sequential Synthesis ---");
    let mut seeded = rng::seed_rng_from_u64(config.seed);
    let mut timer = Timer::new();
    timer.start();
    synth.synthesize(&mut seeded).expect("synthesis succeeds");
    synth.apply_scale(config.scale).expect("valid scale");
    let synth_time = timer.elapsed_ms();
    println!("Synthesized {} ({} ms)", synth.characteristics(), synth_time);

    synth
        .recenter(&[1.0, -1.0])
        .expect("matching start dimension");
    println!("Recentered to {:?}", synth.path().start());
    println!(
        "B(0) = {:?}, B(end) = {:?}\n",
        synth.value_at(0).expect("in range"),
        synth.value_at(config.grid_points - 1).expect("in range")
    );

    // --- Diagnostics ---
    println!("--- Diagnostics (analytic values: QV = c = {}, mean = 0) ---", config.scale);
    for dim in 0..config.dimension {
        let qv = diagnostics::quadratic_variation(synth.path(), dim).expect("valid dimension");
        let (mean, std) = diagnostics::increment_stats(synth.path(), dim).expect("valid dimension");
        let deltas = diagnostics::increments(synth.path(), dim).expect("valid dimension");
        let ks = diagnostics::ks_normal_statistic(&deltas, mean, std);
        println!(
            "dim {}: quadratic variation {:.4}, increment mean {:.2e}, increment std {:.4e}, KS {:.4}",
            dim, qv, mean, std, ks
        );
    }
    println!();

    // --- Parallel synthesis ---
    println!("--- Parallel Synthesis ---");
    timer.start();
    synth.synthesize_par().expect("synthesis succeeds");
    synth.apply_scale(config.scale).expect("valid scale");
    let par_time = timer.elapsed_ms();
    println!(
        "Parallel sweep ({} ms, sequential was {} ms)\n",
        par_time, synth_time
    );

    // --- Export ---
    let filename = "brownian_demo.txt";
    match output::export_path(synth.path(), filename) {
        Ok(_) => println!("Path data written to {}", filename),
        Err(e) => eprintln!("Error writing path data: {}", e),
    }
}
