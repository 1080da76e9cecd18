//! # fast-brownian: Brownian Motion via Wavelet Synthesis
//!
//! A Rust library for synthesizing discretized sample paths of
//! multi-dimensional Brownian motion with the Lévy–Ciesielski construction:
//! a random expansion over the non-normalized Faber-Schauder system that
//! converges to Brownian motion as the truncation order grows.
//!
//! ## Key Features
//!
//! - **Arbitrary grids**: exact closed-form wavelet evaluation on dyadic
//!   grids, sampling-based evaluation everywhere else
//! - **Multi-dimensional**: one independent coefficient stream per dimension
//! - **Reproducible**: injected seedable RNG, plus a deterministic parallel
//!   sweep whose output is independent of the thread count
//! - **Validated**: configuration errors are surfaced as typed results,
//!   advisory conditions as non-fatal warning flags
//!
//! ## Quick Start
//!
//! ```rust
//! use fast_brownian::rng;
//! use fast_brownian::synth::{PathSynthesizer, SynthConfig};
//!
//! // Configure a 2-dimensional path on 1025 grid points
//! let config = SynthConfig {
//!     grid_points: 1025,
//!     dimension: 2,
//!     scale: 1.0,     // time-scale: the motion covers [0, 1]
//!     cut: 15,        // truncation order of the expansion
//!     ..Default::default()
//! };
//!
//! let mut synth = PathSynthesizer::new(config).expect("valid configuration");
//! let mut rng = rng::seed_rng_from_u64(42);
//! synth.synthesize(&mut rng).expect("synthesis succeeds");
//! synth.apply_scale(1.0).expect("valid scale");
//! println!("B(end) = {:?}", synth.value_at(1024).expect("in range"));
//! ```
//!
//! ## Mathematical Foundation
//!
//! The library accumulates randomly-weighted Faber-Schauder triangles,
//! hierarchy order by hierarchy order, into a running path per dimension.
//! Truncation stops at the configured cutoff order or once a wavelet's
//! support narrows below the grid's resolution limit.

// Module declarations
pub mod analytics;
pub mod basis;
pub mod cli;
pub mod error;
pub mod math_utils;
pub mod output;
pub mod rng;
pub mod synth;

// Re-export commonly used types for convenience
pub use error::{BrownianError, BrownianResult};
