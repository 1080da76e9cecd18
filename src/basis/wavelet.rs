// src/basis/wavelet.rs
//! Dyadic indexing of the non-normalized Faber-Schauder system
//!
//! # Mathematical Framework
//!
//! The system consists of the ramp s₁(x) = x plus, for each order j ≥ 0 and
//! position 0 ≤ k ≤ 2^j - 1, the triangular function supported on
//! [k/2^j, (k+1)/2^j] with apex height 2^(-1-j/2) at the midpoint. Weighted by
//! independent N(0,1) coefficients, the truncated sum converges to Brownian
//! motion on [0, 1] (Lévy–Ciesielski construction).

use crate::error::{BrownianError, BrownianResult};

/// Cursor state over the Faber-Schauder hierarchy.
///
/// `Initial` is the s₁ ramp, visited exactly once before any (j, k) pair.
/// Canonical enumeration order is s₁, (0,0), (1,0), (1,1), (2,0)..(2,3), and
/// so on: increasing order, and within an order, increasing position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveletIndex {
    Initial,
    Indexed { j: u32, k: u64 },
}

impl WaveletIndex {
    /// Pure state transition to the next wavelet in canonical order.
    ///
    /// # Errors
    ///
    /// A position past `2^j - 1` cannot be produced by this transition; seeing
    /// one means the cursor was corrupted, reported as `InvalidIteration`.
    pub fn next(self) -> BrownianResult<WaveletIndex> {
        match self {
            WaveletIndex::Initial => Ok(WaveletIndex::Indexed { j: 0, k: 0 }),
            WaveletIndex::Indexed { j, k } => {
                let last = (1u64 << j) - 1;
                if k < last {
                    Ok(WaveletIndex::Indexed { j, k: k + 1 })
                } else if k == last {
                    Ok(WaveletIndex::Indexed { j: j + 1, k: 0 })
                } else {
                    Err(BrownianError::InvalidIteration { j, k })
                }
            }
        }
    }

    /// The order j; 0 for the initial s₁ state.
    pub fn order(&self) -> u32 {
        match self {
            WaveletIndex::Initial => 0,
            WaveletIndex::Indexed { j, .. } => *j,
        }
    }
}

/// Slope/offset pairs of the two affine pieces of the (j, k) wavelet:
/// `[a₁, b₁, a₂, b₂]` with the rising piece `a₁x + b₁` and the falling piece
/// `a₂x + b₂`; the wavelet is their pointwise minimum on its support.
pub fn triangle_coefs(j: u32, k: u64) -> [f64; 4] {
    let half_j = j as f64 / 2.0;
    [
        2f64.powf(half_j),
        -(k as f64) * 2f64.powf(-half_j),
        -(2f64.powf(half_j)),
        (k as f64 + 1.0) * 2f64.powf(-half_j),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_enumeration_prefix() {
        let mut cursor = WaveletIndex::Initial;
        let expected = [
            WaveletIndex::Indexed { j: 0, k: 0 },
            WaveletIndex::Indexed { j: 1, k: 0 },
            WaveletIndex::Indexed { j: 1, k: 1 },
            WaveletIndex::Indexed { j: 2, k: 0 },
            WaveletIndex::Indexed { j: 2, k: 1 },
            WaveletIndex::Indexed { j: 2, k: 2 },
            WaveletIndex::Indexed { j: 2, k: 3 },
            WaveletIndex::Indexed { j: 3, k: 0 },
        ];
        for want in expected {
            cursor = cursor.next().expect("valid transition");
            assert_eq!(cursor, want);
        }
    }

    #[test]
    fn test_advances_to_reach_each_order() {
        // reaching (J, 0) from s₁ takes exactly 2^J transitions
        for target_order in 1u32..=6 {
            let mut cursor = WaveletIndex::Initial;
            for _ in 0..(1u64 << target_order) {
                cursor = cursor.next().expect("valid transition");
            }
            assert_eq!(
                cursor,
                WaveletIndex::Indexed {
                    j: target_order,
                    k: 0
                }
            );
        }
    }

    #[test]
    fn test_corrupt_position_is_rejected() {
        let bad = WaveletIndex::Indexed { j: 1, k: 5 };
        assert!(bad.next().is_err());
    }

    #[test]
    fn test_triangle_coefs_order_zero() {
        let [a1, b1, a2, b2] = triangle_coefs(0, 0);
        assert_eq!(a1, 1.0);
        assert_eq!(b1, -0.0);
        assert_eq!(a2, -1.0);
        assert_eq!(b2, 1.0);
        // apex of min(a1 x + b1, a2 x + b2) at x = 1/2 is the height 2^(-1)
        assert!((a1 * 0.5 + b1 - 0.5).abs() < 1e-15);
        assert!((a2 * 0.5 + b2 - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_triangle_coefs_apex_height() {
        for (j, k) in [(1u32, 0u64), (1, 1), (2, 3), (3, 5)] {
            let [a1, b1, _, _] = triangle_coefs(j, k);
            let peak_x = (2 * k + 1) as f64 / 2f64.powi(j as i32 + 1);
            let height = 2f64.powf(-1.0 - j as f64 / 2.0);
            assert!(
                (a1 * peak_x + b1 - height).abs() < 1e-12,
                "apex mismatch at (j={}, k={})",
                j,
                k
            );
        }
    }
}
