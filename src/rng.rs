// src/rng.rs
//! Random Number Generation for Path Synthesis
//!
//! # Design Philosophy
//!
//! The series construction draws one standard-normal coefficient per wavelet
//! per dimension, and needs:
//! 1. **Reproducibility**: Same seed → same path (critical for debugging/validation)
//! 2. **Independence**: Draws must be independent across wavelets and dimensions
//! 3. **Parallel safety**: When dimensions are fanned out, streams must not overlap
//!
//! # Stream-Based RNG
//!
//! The sequential synthesis loop takes any injected `rand::Rng`. The parallel
//! loop pre-assigns one splitmix64 stream per (wavelet, dimension) pair:
//! - Deterministic mapping: (seed, stream id) → stream
//! - Stream base seeds are spread by the golden-ratio increment, so distinct
//!   ids never share a counter sequence
//! - Reproducible across any thread count
//!
//! # Box-Muller Transform
//!
//! Streams convert uniforms to normals via:
//! ```text
//! Z₁ = √(-2ln(U₁)) * cos(2πU₂)
//! Z₂ = √(-2ln(U₁)) * sin(2πU₂)
//! ```
//! where U₁, U₂ ~ Uniform(0,1) and Z₁, Z₂ ~ N(0,1).

use crate::error::{BrownianError, BrownianResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Splitmix64 stream for reproducible parallel draws
///
/// # Algorithm
///
/// ```text
/// z = base_seed + counter
/// z = (z ⊕ (z >> 30)) * 0xbf58476d1ce4e5b9
/// z = (z ⊕ (z >> 27)) * 0x94d049bb133111eb
/// output = z ⊕ (z >> 31)
/// ```
#[derive(Debug, Clone)]
pub struct StreamRng {
    base_seed: u64,
    counter: u64,
    spare: Option<f64>,
}

impl StreamRng {
    pub fn new(base_seed: u64) -> Self {
        Self {
            base_seed,
            counter: 0,
            spare: None,
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.counter = self.counter.wrapping_add(1);
        let mut z = self.base_seed.wrapping_add(self.counter);
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9u64);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111ebu64);
        z ^ (z >> 31)
    }

    pub fn uniform(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / 9007199254740992.0) // 2^53
    }

    pub fn normal(&mut self) -> f64 {
        if let Some(z) = self.spare.take() {
            return z;
        }

        // u1 strictly positive so the log stays finite
        let mut u1 = self.uniform();
        while u1 == 0.0 {
            u1 = self.uniform();
        }
        let u2 = self.uniform();

        let mag = (-2.0 * u1.ln()).sqrt();
        let z1 = mag * (2.0 * std::f64::consts::PI * u2).cos();
        let z2 = mag * (2.0 * std::f64::consts::PI * u2).sin();

        self.spare = Some(z2);
        z1
    }
}

/// RNG factory handing out disjoint deterministic streams
pub struct RngFactory {
    base_seed: u64,
}

impl RngFactory {
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    /// Create the stream for a given id. Ids are spread by the golden-ratio
    /// increment so that two streams never walk the same counter sequence.
    pub fn stream(&self, id: u64) -> StreamRng {
        StreamRng::new(
            self.base_seed
                .wrapping_add(id.wrapping_mul(0x9e3779b97f4a7c15)),
        )
    }

    /// Create a standard RNG for a given stream id
    pub fn create_std_rng(&self, id: u64) -> StdRng {
        StdRng::seed_from_u64(
            self.base_seed
                .wrapping_add(id.wrapping_mul(0x9e3779b97f4a7c15)),
        )
    }
}

pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}

/// Draw a vector of independent standard normals, one per dimension.
///
/// # Errors
///
/// Returns `RandomGenerationError` for a zero-size request.
pub fn normal_vector<R: Rng + ?Sized>(rng: &mut R, number: usize) -> BrownianResult<Vec<f64>> {
    if number == 0 {
        return Err(BrownianError::RandomGenerationError {
            reason: format!("invalid number of Gaussians requested ({})", number),
        });
    }
    Ok((0..number).map(|_| get_normal_draw(rng)).collect())
}
