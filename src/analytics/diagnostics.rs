// src/analytics/diagnostics.rs
//! Analytic reference checks for synthesized paths
//!
//! # Mathematical Foundation
//!
//! For Brownian motion on [0, c] sampled at `len` equispaced times:
//! ```text
//! increments  ΔB_i = B(t_{i+1}) - B(t_i)  are i.i.d. N(0, c·step)
//! quadratic variation  Σ ΔB_i²  →  c   (in probability, as len → ∞)
//! ```
//!
//! The truncated wavelet expansion only approximates these (the cutoff order
//! removes the finest fluctuations), but for the default cutoff the deviations
//! are far below statistical noise, which makes the quantities useful as
//! generator sanity checks.

use crate::error::{BrownianError, BrownianResult};
use crate::math_utils::norm_cdf;
use crate::synth::BrownianPath;

fn dimension_row(path: &BrownianPath, dim: usize) -> BrownianResult<Vec<f64>> {
    if dim >= path.dimension() {
        return Err(BrownianError::IndexOutOfRange {
            index: dim,
            len: path.dimension(),
        });
    }
    Ok(path.values().row(dim).to_vec())
}

/// Successive differences of one coordinate of the path.
pub fn increments(path: &BrownianPath, dim: usize) -> BrownianResult<Vec<f64>> {
    let row = dimension_row(path, dim)?;
    Ok(row.windows(2).map(|w| w[1] - w[0]).collect())
}

/// Realized quadratic variation Σ ΔB² of one coordinate; the analytic value
/// for Brownian motion on [0, c] is c.
pub fn quadratic_variation(path: &BrownianPath, dim: usize) -> BrownianResult<f64> {
    Ok(increments(path, dim)?.iter().map(|d| d * d).sum())
}

/// Sample mean and standard deviation of one coordinate's increments; the
/// analytic values are 0 and sqrt(c·step).
pub fn increment_stats(path: &BrownianPath, dim: usize) -> BrownianResult<(f64, f64)> {
    let deltas = increments(path, dim)?;
    let n = deltas.len() as f64;
    let mean = deltas.iter().sum::<f64>() / n;
    let variance = deltas.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / n;
    Ok((mean, variance.sqrt()))
}

/// Kolmogorov-Smirnov distance between the empirical distribution of the
/// samples and the N(mean, std²) distribution.
///
/// # Formula
/// ```text
/// D = sup_x |F_emp(x) - Φ((x - mean)/std)|
/// ```
pub fn ks_normal_statistic(samples: &[f64], mean: f64, std: f64) -> f64 {
    if samples.is_empty() || std <= 0.0 {
        return 1.0;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len() as f64;

    let mut d = 0.0f64;
    for (i, x) in sorted.iter().enumerate() {
        let cdf = norm_cdf((x - mean) / std);
        let below = i as f64 / n;
        let above = (i + 1) as f64 / n;
        d = d.max((cdf - below).abs()).max((cdf - above).abs());
    }
    d
}
