// src/math_utils.rs
use statrs::function::erf;
use std::f64::consts::SQRT_2;

pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf::erf(x / SQRT_2))
}

/// Abscissas of given size starting at `start` and incrementing by `step`.
pub fn fill_with_step(size: usize, start: f64, step: f64) -> Vec<f64> {
    let mut arr = Vec::with_capacity(size);
    let mut x = start;
    for _ in 0..size {
        arr.push(x);
        x += step;
    }
    arr
}

/// Evaluate the affine function `a*x + b` at every abscissa.
pub fn sample_affine(abscissas: &[f64], a: f64, b: f64) -> Vec<f64> {
    abscissas.iter().map(|x| a * x + b).collect()
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Timer::new()
    }
}
