// src/basis/schauder.rs
//! Discretized evaluation of the Faber-Schauder system
//!
//! # Evaluation Strategies
//!
//! A `SchauderBasis` walks the wavelet hierarchy as a cursor and evaluates the
//! current wavelet on the grid indices inside its support. Two strategies:
//!
//! - **Regular mode** (`len - 1` a power of two): every dyadic breakpoint
//!   lands on a grid index, so the triangle is built from its exact integer
//!   midpoint `⌊(width-1)/2⌋`. No floating projection is involved, which keeps
//!   errors from accumulating across orders.
//! - **General mode** (any `len`): the wavelet is the pointwise minimum of its
//!   two affine pieces, sampled separately on the rising segment (upper
//!   projection of the support start through the lower projection of the peak)
//!   and the falling segment (upper projection of the peak through the support
//!   end). When the peak lands exactly on a grid index the junction sample
//!   would appear in both segments, so the duplicate is dropped.
//!
//! Termination: the sweep stops once the support covers fewer than 3 grid
//! indices, at which point the triangle can no longer be resolved on the grid.

use crate::basis::grid::Grid;
use crate::basis::wavelet::{triangle_coefs, WaveletIndex};
use crate::error::BrownianResult;
use crate::math_utils::{fill_with_step, sample_affine};

/// Stateful cursor over the Faber-Schauder hierarchy on a fixed grid.
pub struct SchauderBasis {
    grid: Grid,
    regular: bool,
    cursor: WaveletIndex,
    width: usize,
}

impl SchauderBasis {
    pub fn new(len: usize) -> BrownianResult<Self> {
        let grid = Grid::new(len)?;
        Ok(SchauderBasis {
            grid,
            regular: grid.is_dyadic(),
            cursor: WaveletIndex::Initial,
            width: len,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_regular(&self) -> bool {
        self.regular
    }

    pub fn index(&self) -> WaveletIndex {
        self.cursor
    }

    /// Number of grid indices spanned by the current wavelet's support.
    ///
    /// Bookkept across `advance` via `width ← ⌊(width-1)/2⌋ + 1` on each order
    /// increment, starting from the full grid; equivalently
    /// `width - 1 = ⌊(len-1)/2^j⌋`.
    pub fn support_width(&self) -> usize {
        self.width
    }

    pub fn order(&self) -> u32 {
        self.cursor.order()
    }

    /// Support narrower than 3 grid indices cannot resolve a triangle.
    pub fn is_exhausted(&self) -> bool {
        self.width < 3
    }

    /// Return the cursor to the initial s₁ state so the hierarchy can be
    /// swept again on the same grid.
    pub fn reset(&mut self) {
        self.cursor = WaveletIndex::Initial;
        self.width = self.grid.len();
    }

    /// Move to the next wavelet in canonical order.
    pub fn advance(&mut self) -> BrownianResult<()> {
        let next = self.cursor.next()?;
        if next.order() > self.cursor.order() {
            self.width = (self.width - 1) / 2 + 1;
        }
        self.cursor = next;
        Ok(())
    }

    /// Inclusive grid-index range `(start, end)` covered by the current
    /// wavelet's support:
    /// `start = ⌈2k / 2^(j+1) / step⌉`, `end = ⌊2(k+1) / 2^(j+1) / step⌋`.
    /// The s₁ ramp covers the whole grid.
    pub fn support_bounds(&self) -> (usize, usize) {
        match self.cursor {
            WaveletIndex::Initial => (0, self.grid.len() - 1),
            WaveletIndex::Indexed { j, k } => {
                let denom = 2f64.powi(j as i32 + 1) * self.grid.step();
                let start = ((2 * k) as f64 / denom).ceil() as usize;
                let end = ((2 * (k + 1)) as f64 / denom).floor() as usize;
                (start, end)
            }
        }
    }

    /// Values of the current wavelet at every grid index inside its support,
    /// dispatching on the grid mode.
    pub fn values(&self) -> Vec<f64> {
        if self.regular {
            self.values_closed_form()
        } else {
            self.values_sampled()
        }
    }

    /// Closed-form evaluation, exact on dyadic grids.
    ///
    /// s₁ is the linear ramp from 0 to 1; every (j, k) wavelet is the
    /// symmetric triangle with apex height `2^(-1-j/2)` at the integer
    /// midpoint of its support.
    pub fn values_closed_form(&self) -> Vec<f64> {
        match self.cursor {
            WaveletIndex::Initial => {
                let denom = (self.width - 1) as f64;
                (0..self.width).map(|i| i as f64 / denom).collect()
            }
            WaveletIndex::Indexed { j, .. } => {
                let height = 2f64.powf(-1.0 - j as f64 / 2.0);
                let mid = (self.width - 1) / 2;
                let mut vals = Vec::with_capacity(self.width);
                for i in 0..=mid {
                    vals.push(i as f64 * height / mid as f64);
                }
                for i in mid + 1..self.width {
                    vals.push((self.width - 1 - i) as f64 * height / mid as f64);
                }
                vals
            }
        }
    }

    /// Sampling-based evaluation for arbitrary grid lengths.
    pub fn values_sampled(&self) -> Vec<f64> {
        let step = self.grid.step();
        match self.cursor {
            WaveletIndex::Initial => {
                let abscissas = fill_with_step(self.grid.len(), 0.0, step);
                sample_affine(&abscissas, 1.0, 0.0)
            }
            WaveletIndex::Indexed { j, k } => {
                let (upper_start, lower_end) = self.support_bounds();
                let peak = (2 * k + 1) as f64 / (2f64.powi(j as i32 + 1) * step);
                let lower_mid = peak.floor() as usize;
                let upper_mid = peak.ceil() as usize;
                let [a1, b1, a2, b2] = triangle_coefs(j, k);

                let rising = fill_with_step(
                    (lower_mid + 1).saturating_sub(upper_start),
                    upper_start as f64 * step,
                    step,
                );
                let falling = fill_with_step(
                    (lower_end + 1).saturating_sub(upper_mid),
                    upper_mid as f64 * step,
                    step,
                );

                let mut vals = sample_affine(&rising, a1, b1);
                let down = sample_affine(&falling, a2, b2);
                // peak exactly on a grid index: both segments sampled it
                let duplicate = usize::from(lower_mid == upper_mid);
                vals.extend(down.into_iter().skip(duplicate));
                vals
            }
        }
    }
}
