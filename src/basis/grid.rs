// src/basis/grid.rs
use crate::error::{validation::validate_grid_length, BrownianResult};

/// Equispaced discretization of the unit interval.
///
/// `len` points span [0, 1] with spacing `step = 1/(len-1)`. Immutable after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    len: usize,
    step: f64,
}

impl Grid {
    /// # Errors
    ///
    /// At least two points are needed to discretize [0, 1]; `len < 2` is an
    /// `InvalidConfiguration` error.
    pub fn new(len: usize) -> BrownianResult<Self> {
        validate_grid_length(len)?;
        Ok(Grid {
            len,
            step: 1.0 / (len - 1) as f64,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// True when `len - 1` is an exact power of two, which makes every dyadic
    /// wavelet breakpoint land on a grid index and enables closed-form
    /// evaluation.
    pub fn is_dyadic(&self) -> bool {
        (self.len - 1).is_power_of_two()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_construction() {
        let grid = Grid::new(5).expect("valid length");
        assert_eq!(grid.len(), 5);
        assert!((grid.step() - 0.25).abs() < 1e-15);
    }

    #[test]
    fn test_grid_rejects_degenerate_lengths() {
        assert!(Grid::new(0).is_err());
        assert!(Grid::new(1).is_err());
        assert!(Grid::new(2).is_ok());
    }

    #[test]
    fn test_dyadic_detection() {
        assert!(Grid::new(2).unwrap().is_dyadic()); // 1 = 2^0
        assert!(Grid::new(5).unwrap().is_dyadic()); // 4 = 2^2
        assert!(Grid::new(17).unwrap().is_dyadic()); // 16 = 2^4
        assert!(!Grid::new(6).unwrap().is_dyadic());
        assert!(!Grid::new(100).unwrap().is_dyadic());
    }
}
