// src/synth/engine.rs
//! Path synthesis via the truncated Lévy–Ciesielski expansion
//!
//! # Mathematical Framework
//!
//! On the unit interval, Brownian motion admits the series representation
//! ```text
//! B(t) = g₀·s₁(t) + Σ_{j=0}^{∞} Σ_{k=0}^{2^j - 1} g_{j,k}·Λ_{j,k}(t)
//! ```
//! where s₁ is the ramp, Λ_{j,k} are the non-normalized Faber-Schauder
//! triangles and all coefficients are independent N(0,1). Truncating at a
//! cutoff order N (and at the grid's resolution limit) gives the synthesized
//! approximation. The time-change `B(ct) =_d sqrt(c) B(t)` then stretches the
//! path to [0, c].
//!
//! # Reproducibility
//!
//! `synthesize` takes any injected `rand::Rng`, so a seeded `StdRng` replays a
//! path exactly. `synthesize_par` pre-assigns one deterministic stream per
//! (wavelet, dimension) pair and fans the dimensions out with rayon; its
//! output depends only on the configured seed, never on the thread count.

use crate::basis::SchauderBasis;
use crate::error::{validation::*, BrownianResult};
use crate::rng::{self, RngFactory};
use crate::synth::path::BrownianPath;
use bitflags::bitflags;
use ndarray::parallel::prelude::*;
use ndarray::Axis;
use rand::Rng;

bitflags! {
    /// Advisory conditions detected during validation. Never fatal and never
    /// affecting computed results; callers decide whether to surface them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ConfigWarnings: u32 {
        const NONE        = 0;
        const SMALL_GRID  = 1 << 0;
        const SMALL_SCALE = 1 << 1;
        const SMALL_CUT   = 1 << 2;
    }
}

#[derive(Debug, Clone)]
pub struct SynthConfig {
    /// Number of grid points (kt). Mandatory, at least 2.
    pub grid_points: usize,
    /// Path dimension (d).
    pub dimension: usize,
    /// Time-scale (c): the synthesized motion covers [0, c].
    pub scale: f64,
    /// Cutoff order (n): highest hierarchy order included in the truncation.
    pub cut: u32,
    /// Base seed for the deterministic parallel sweep.
    pub seed: u64,
}

impl SynthConfig {
    /// Validate the synthesis configuration.
    ///
    /// Grid length, dimension and time-scale are each checked independently;
    /// the cutoff is non-negative by type. On success the advisory flags are
    /// returned for the caller to surface.
    pub fn validate(&self) -> BrownianResult<ConfigWarnings> {
        validate_grid_length(self.grid_points)?;
        validate_dimension(self.dimension)?;
        validate_finite("c", self.scale)?;
        validate_positive("c", self.scale)?;

        let mut warnings = ConfigWarnings::NONE;
        if self.grid_points <= 10 {
            warnings |= ConfigWarnings::SMALL_GRID;
        }
        if self.scale <= 1e-12 {
            warnings |= ConfigWarnings::SMALL_SCALE;
        }
        if self.cut <= 5 {
            warnings |= ConfigWarnings::SMALL_CUT;
        }
        Ok(warnings)
    }

    /// Human-readable texts for the raised advisory flags.
    pub fn warning_messages(&self, warnings: ConfigWarnings) -> Vec<String> {
        let mut messages = Vec::new();
        if warnings.contains(ConfigWarnings::SMALL_GRID) {
            messages.push(format!(
                "interval discretisation is very small (kt={}), beware",
                self.grid_points
            ));
        }
        if warnings.contains(ConfigWarnings::SMALL_SCALE) {
            messages.push(format!(
                "time-scale is very small (c={}), numerical singularities may occur",
                self.scale
            ));
        }
        if warnings.contains(ConfigWarnings::SMALL_CUT) {
            messages.push(format!("cut point is very small (n={}), beware", self.cut));
        }
        messages
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        SynthConfig {
            grid_points: 1025,
            dimension: 1,
            scale: 1.0,
            cut: 15,
            seed: 12345,
        }
    }
}

/// Drives one `SchauderBasis` through the hierarchy and accumulates the
/// randomly-weighted wavelets into its exclusively-owned `BrownianPath`.
pub struct PathSynthesizer {
    config: SynthConfig,
    warnings: ConfigWarnings,
    basis: SchauderBasis,
    path: BrownianPath,
}

impl PathSynthesizer {
    /// # Errors
    ///
    /// Rejects degenerate grids (`grid_points < 2`), a zero dimension and a
    /// non-positive or non-finite time-scale. No partially-constructed
    /// synthesizer is ever observable.
    pub fn new(config: SynthConfig) -> BrownianResult<Self> {
        let warnings = config.validate()?;
        let basis = SchauderBasis::new(config.grid_points)?;
        let path = BrownianPath::zeros(config.dimension, config.grid_points, config.cut);
        Ok(PathSynthesizer {
            config,
            warnings,
            basis,
            path,
        })
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// Advisory flags raised at construction.
    pub fn warnings(&self) -> ConfigWarnings {
        self.warnings
    }

    /// One full sweep of the wavelet hierarchy: for every wavelet up to the
    /// cutoff order, draw one independent standard normal per dimension and
    /// add the weighted wavelet values into the path over its support. The
    /// basis is reset afterwards so synthesis can be re-run with fresh
    /// randomness. Produces the raw [0,1]-interval, zero-start approximation;
    /// `apply_scale` and `recenter` come after.
    pub fn synthesize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> BrownianResult<()> {
        self.path.clear();
        while !(self.basis.is_exhausted() || self.basis.order() > self.config.cut) {
            let vals = self.basis.values();
            let g = rng::normal_vector(rng, self.config.dimension)?;
            let (start, _) = self.basis.support_bounds();
            self.path.accumulate(start, &vals, &g);
            self.basis.advance()?;
        }
        self.basis.reset();
        Ok(())
    }

    /// Parallel sweep with pre-assigned draws: stream `w·d + dim` of the
    /// configured seed supplies the coefficient for wavelet number `w` in
    /// dimension `dim`, so the result is reproducible under any thread count.
    /// The wavelet supports and values are enumerated once up front (the
    /// cursor is inherently sequential); the per-dimension accumulation is
    /// what fans out.
    pub fn synthesize_par(&mut self) -> BrownianResult<()> {
        self.path.clear();

        let mut wavelets: Vec<(usize, Vec<f64>)> = Vec::new();
        while !(self.basis.is_exhausted() || self.basis.order() > self.config.cut) {
            let (start, _) = self.basis.support_bounds();
            wavelets.push((start, self.basis.values()));
            self.basis.advance()?;
        }
        self.basis.reset();

        let dims = self.config.dimension;
        let factory = RngFactory::new(self.config.seed);
        self.path
            .values_mut()
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(dim, mut row)| {
                for (w, (start, vals)) in wavelets.iter().enumerate() {
                    let mut stream = factory.stream((w * dims + dim) as u64);
                    let g = stream.normal();
                    for (offset, v) in vals.iter().enumerate() {
                        row[start + offset] += g * v;
                    }
                }
            });
        Ok(())
    }

    /// Scale the path in place by `sqrt(c)`.
    ///
    /// # Errors
    ///
    /// `c` must be positive and finite.
    pub fn apply_scale(&mut self, c: f64) -> BrownianResult<()> {
        validate_finite("c", c)?;
        validate_positive("c", c)?;
        self.path.scale_in_place(c);
        Ok(())
    }

    /// Move the path to a new start point; see [`BrownianPath::recenter`].
    pub fn recenter(&mut self, new_start: &[f64]) -> BrownianResult<()> {
        self.path.recenter(new_start)
    }

    /// See [`BrownianPath::value_at`].
    pub fn value_at(&self, t: usize) -> BrownianResult<Vec<f64>> {
        self.path.value_at(t)
    }

    pub fn grid_len(&self) -> usize {
        self.path.grid_len()
    }

    pub fn dimension(&self) -> usize {
        self.path.dimension()
    }

    pub fn characteristics(&self) -> String {
        self.path.characteristics()
    }

    pub fn path(&self) -> &BrownianPath {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seed_rng_from_u64;

    fn config(grid_points: usize, dimension: usize) -> SynthConfig {
        SynthConfig {
            grid_points,
            dimension,
            ..Default::default()
        }
    }

    #[test]
    fn test_construction_rejects_bad_configs() {
        assert!(PathSynthesizer::new(config(1, 1)).is_err());
        assert!(PathSynthesizer::new(config(0, 1)).is_err());
        assert!(PathSynthesizer::new(config(17, 0)).is_err());
        assert!(PathSynthesizer::new(SynthConfig {
            scale: 0.0,
            ..config(17, 1)
        })
        .is_err());
        assert!(PathSynthesizer::new(SynthConfig {
            scale: -1.0,
            ..config(17, 1)
        })
        .is_err());
        assert!(PathSynthesizer::new(SynthConfig {
            scale: f64::NAN,
            ..config(17, 1)
        })
        .is_err());
    }

    #[test]
    fn test_advisory_warnings() {
        let synth = PathSynthesizer::new(SynthConfig {
            cut: 3,
            scale: 1e-13,
            ..config(9, 1)
        })
        .expect("valid configuration");
        let w = synth.warnings();
        assert!(w.contains(ConfigWarnings::SMALL_GRID));
        assert!(w.contains(ConfigWarnings::SMALL_SCALE));
        assert!(w.contains(ConfigWarnings::SMALL_CUT));
        assert_eq!(synth.config().warning_messages(w).len(), 3);

        let synth = PathSynthesizer::new(config(1025, 1)).expect("valid configuration");
        assert_eq!(synth.warnings(), ConfigWarnings::NONE);
    }

    #[test]
    fn test_warnings_do_not_alter_results() {
        // same seed; b raises SMALL_SCALE, a does not; the sweeps must agree
        let mut a = PathSynthesizer::new(SynthConfig {
            scale: 1.0,
            ..config(33, 1)
        })
        .expect("valid configuration");
        let mut b = PathSynthesizer::new(SynthConfig {
            scale: 1e-13,
            ..config(33, 1)
        })
        .expect("valid configuration");
        assert_eq!(a.warnings(), ConfigWarnings::NONE);
        assert!(b.warnings().contains(ConfigWarnings::SMALL_SCALE));
        let mut rng_a = seed_rng_from_u64(99);
        let mut rng_b = seed_rng_from_u64(99);
        a.synthesize(&mut rng_a).unwrap();
        b.synthesize(&mut rng_b).unwrap();
        assert_eq!(
            a.path().values().as_slice().unwrap(),
            b.path().values().as_slice().unwrap()
        );
    }

    #[test]
    fn test_synthesize_is_deterministic_under_seed() {
        let mut synth = PathSynthesizer::new(config(17, 2)).expect("valid configuration");
        let mut rng = seed_rng_from_u64(42);
        synth.synthesize(&mut rng).unwrap();
        let first: Vec<f64> = synth.path().values().iter().cloned().collect();

        let mut rng = seed_rng_from_u64(42);
        synth.synthesize(&mut rng).unwrap();
        let second: Vec<f64> = synth.path().values().iter().cloned().collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_synthesize_par_is_deterministic() {
        let mut a = PathSynthesizer::new(config(33, 3)).expect("valid configuration");
        let mut b = PathSynthesizer::new(config(33, 3)).expect("valid configuration");
        a.synthesize_par().unwrap();
        b.synthesize_par().unwrap();
        assert_eq!(
            a.path().values().as_slice().unwrap(),
            b.path().values().as_slice().unwrap()
        );
    }

    #[test]
    fn test_path_starts_at_zero() {
        // every Faber-Schauder function vanishes at the interval's left
        // endpoint, so index 0 stays exactly at the start point
        let mut synth = PathSynthesizer::new(config(17, 2)).expect("valid configuration");
        let mut rng = seed_rng_from_u64(7);
        synth.synthesize(&mut rng).unwrap();
        assert_eq!(synth.value_at(0).unwrap(), vec![0.0, 0.0]);

        synth.synthesize_par().unwrap();
        assert_eq!(synth.value_at(0).unwrap(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_cutoff_zero_uses_only_order_zero() {
        // with n=0 the sweep uses s1 and the single (0,0) hat; on a 3-point
        // grid the hat contributes only at the middle index
        let mut synth = PathSynthesizer::new(SynthConfig {
            cut: 0,
            ..config(3, 1)
        })
        .expect("valid configuration");
        let mut rng = seed_rng_from_u64(1);
        synth.synthesize(&mut rng).unwrap();
        let end = synth.value_at(2).unwrap()[0];
        // s1 is the only contributor at the right endpoint
        let mut rng = seed_rng_from_u64(1);
        let g = crate::rng::normal_vector(&mut rng, 1).unwrap();
        assert!((end - g[0]).abs() < 1e-15);
    }

    #[test]
    fn test_dimensions_get_independent_draws() {
        let mut synth = PathSynthesizer::new(config(17, 2)).expect("valid configuration");
        let mut rng = seed_rng_from_u64(3);
        synth.synthesize(&mut rng).unwrap();
        let row0: Vec<f64> = synth.path().values().row(0).to_vec();
        let row1: Vec<f64> = synth.path().values().row(1).to_vec();
        assert_ne!(row0, row1);
    }
}
