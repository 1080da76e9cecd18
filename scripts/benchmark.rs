// scripts/benchmark.rs
use fast_brownian::math_utils::Timer;
use fast_brownian::rng;
use fast_brownian::synth::{PathSynthesizer, SynthConfig};
use std::env;
use std::fs::File;
use std::io::Write;
use std::process::Command;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rust_version: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rust_version: Self::get_rust_version(),
            rayon_threads: rayon::current_num_threads(),
        }
    }

    fn get_rust_version() -> String {
        Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string())
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    grid_points: usize,
    dimension: usize,
    cut: u32,
    time_ms: f64,
    throughput_points_per_sec: f64,
}

fn run_synthesis_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();

    let configs = [
        (1_025usize, 1usize, 15u32),
        (16_385, 1, 15),
        (16_385, 4, 15),
        (65_537, 4, 16),
        (100_000, 4, 16), // non-dyadic grid: general evaluation mode
    ];

    for &(grid_points, dimension, cut) in &configs {
        println!(
            "Benchmarking kt={} d={} n={}...",
            grid_points, dimension, cut
        );

        let config = SynthConfig {
            grid_points,
            dimension,
            scale: 1.0,
            cut,
            seed: 42,
        };
        let points = (grid_points * dimension) as f64;

        let mut synth = PathSynthesizer::new(config.clone()).expect("valid configuration");
        let mut seeded = rng::seed_rng_from_u64(config.seed);
        let mut timer = Timer::new();
        timer.start();
        synth.synthesize(&mut seeded).expect("synthesis succeeds");
        let time_ms = timer.elapsed_ms();

        results.push(BenchmarkResult {
            name: format!("sequential kt={} d={}", grid_points, dimension),
            grid_points,
            dimension,
            cut,
            time_ms,
            throughput_points_per_sec: points / (time_ms / 1000.0),
        });

        timer.start();
        synth.synthesize_par().expect("synthesis succeeds");
        let time_ms = timer.elapsed_ms();

        results.push(BenchmarkResult {
            name: format!("parallel   kt={} d={}", grid_points, dimension),
            grid_points,
            dimension,
            cut,
            time_ms,
            throughput_points_per_sec: points / (time_ms / 1000.0),
        });
    }

    results
}

fn write_results_to_csv(results: &[BenchmarkResult], system_info: &SystemInfo, filename: &str) {
    let mut file = File::create(filename).expect("Could not create CSV file");

    writeln!(file, "# System Information").unwrap();
    writeln!(file, "# OS: {}", system_info.os).unwrap();
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores).unwrap();
    writeln!(file, "# Rust Version: {}", system_info.rust_version).unwrap();
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads).unwrap();
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
    .unwrap();
    writeln!(file, "#").unwrap();

    writeln!(
        file,
        "Benchmark,GridPoints,Dimension,Cut,Time_ms,Throughput_points_per_sec"
    )
    .unwrap();

    for result in results {
        writeln!(
            file,
            "{},{},{},{},{:.2},{:.0}",
            result.name,
            result.grid_points,
            result.dimension,
            result.cut,
            result.time_ms,
            result.throughput_points_per_sec
        )
        .unwrap();
    }

    println!("Results written to {}", filename);
}

fn main() {
    println!("fast-brownian Synthesis Benchmark Suite");
    println!("=======================================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    let results = run_synthesis_benchmarks();

    println!("\n{:=<80}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<80}", "");
    println!(
        "{:<32} {:>10} {:>4} {:>4} {:>10} {:>15}",
        "Benchmark", "Points", "Dim", "Cut", "Time (ms)", "Throughput"
    );
    println!("{:-<80}", "");

    for result in &results {
        println!(
            "{:<32} {:>10} {:>4} {:>4} {:>10.2} {:>15.0}",
            result.name,
            result.grid_points,
            result.dimension,
            result.cut,
            result.time_ms,
            result.throughput_points_per_sec
        );
    }

    println!("{:=<80}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    write_results_to_csv(&results, &system_info, &filename);

    println!("\nBenchmark complete!");
    println!("To reproduce: cargo run --bin benchmark --release");
}
