// src/synth/path.rs
use crate::error::{BrownianError, BrownianResult};
use crate::output::format_coordinate;
use ndarray::{Array2, ArrayView2, Axis};
use std::fmt;

/// A discretized multi-dimensional Brownian motion sample path.
///
/// Holds a `dimension × len` matrix of values on the grid, the current start
/// point (all-zero until recentered) and the construction parameters kept for
/// the diagnostic summary. Mutation from outside the synthesizer goes through
/// `recenter` and `scale_in_place` only.
pub struct BrownianPath {
    values: Array2<f64>,
    start: Vec<f64>,
    scale: f64,
    cut: u32,
}

impl BrownianPath {
    pub(crate) fn zeros(dimension: usize, len: usize, cut: u32) -> Self {
        BrownianPath {
            values: Array2::zeros((dimension, len)),
            start: vec![0.0; dimension],
            scale: 1.0,
            cut,
        }
    }

    /// Back to the freshly-allocated state: zero values, zero start, unit scale.
    pub(crate) fn clear(&mut self) {
        self.values.fill(0.0);
        self.start.iter_mut().for_each(|s| *s = 0.0);
        self.scale = 1.0;
    }

    /// Add `coefficients[dim] * vals[i]` into every dimension over the support
    /// indices starting at `start`.
    pub(crate) fn accumulate(&mut self, start: usize, vals: &[f64], coefficients: &[f64]) {
        for (dim, g) in coefficients.iter().enumerate() {
            for (offset, v) in vals.iter().enumerate() {
                self.values[[dim, start + offset]] += g * v;
            }
        }
    }

    pub(crate) fn values_mut(&mut self) -> &mut Array2<f64> {
        &mut self.values
    }

    pub fn values(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    pub fn dimension(&self) -> usize {
        self.values.nrows()
    }

    pub fn grid_len(&self) -> usize {
        self.values.ncols()
    }

    pub fn start(&self) -> &[f64] {
        &self.start
    }

    /// Time-change scaling: `B(ct) =_d sqrt(c) B(t)` in distribution, so every
    /// value is multiplied by `sqrt(c)` in place.
    pub fn scale_in_place(&mut self, c: f64) {
        let coef = c.sqrt();
        self.values.mapv_inplace(|x| coef * x);
        self.scale *= c;
    }

    /// Move the path to a new start point: subtract the previous start and add
    /// the new one, coordinate-wise, at every grid index.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` unless `coordinates.len()` equals the path dimension.
    pub fn recenter(&mut self, coordinates: &[f64]) -> BrownianResult<()> {
        if coordinates.len() != self.dimension() {
            return Err(BrownianError::DimensionMismatch {
                expected: self.dimension(),
                actual: coordinates.len(),
            });
        }
        for (dim, mut row) in self.values.axis_iter_mut(Axis(0)).enumerate() {
            let old = self.start[dim];
            let new = coordinates[dim];
            row.mapv_inplace(|x| x - old + new);
        }
        self.start = coordinates.to_vec();
        Ok(())
    }

    /// The d-dimensional value at grid index `t`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` for `t >= len`.
    pub fn value_at(&self, t: usize) -> BrownianResult<Vec<f64>> {
        if t >= self.grid_len() {
            return Err(BrownianError::IndexOutOfRange {
                index: t,
                len: self.grid_len(),
            });
        }
        Ok(self.values.column(t).to_vec())
    }

    /// Diagnostic summary of the construction parameters and start point.
    pub fn characteristics(&self) -> String {
        format!(
            "kt={}; d={}; c={}; n={}; startPoint={:?}",
            self.grid_len(),
            self.dimension(),
            self.scale,
            self.cut,
            self.start
        )
    }
}

impl fmt::Display for BrownianPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Brownian path ({}):", self.characteristics())?;
        for t in 0..self.grid_len() {
            let coords: Vec<String> = (0..self.dimension())
                .map(|dim| format_coordinate(self.values[[dim, t]]))
                .collect();
            writeln!(f, "[{}]", coords.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_allocation() {
        let path = BrownianPath::zeros(2, 5, 15);
        assert_eq!(path.dimension(), 2);
        assert_eq!(path.grid_len(), 5);
        assert_eq!(path.start(), &[0.0, 0.0]);
        assert_eq!(path.value_at(3).unwrap(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_value_at_bounds() {
        let path = BrownianPath::zeros(1, 5, 15);
        assert!(path.value_at(0).is_ok());
        assert!(path.value_at(4).is_ok());
        assert!(path.value_at(5).is_err());
    }

    #[test]
    fn test_recenter_dimension_mismatch() {
        let mut path = BrownianPath::zeros(2, 5, 15);
        assert!(path.recenter(&[1.0]).is_err());
        assert!(path.recenter(&[1.0, 2.0, 3.0]).is_err());
        assert!(path.recenter(&[1.0, 2.0]).is_ok());
        assert_eq!(path.start(), &[1.0, 2.0]);
    }

    #[test]
    fn test_recenter_shifts_every_index() {
        let mut path = BrownianPath::zeros(1, 4, 15);
        path.accumulate(0, &[0.0, 1.0, 2.0, 3.0], &[1.0]);
        path.recenter(&[10.0]).unwrap();
        assert_eq!(path.value_at(0).unwrap(), vec![10.0]);
        assert_eq!(path.value_at(3).unwrap(), vec![13.0]);
    }

    #[test]
    fn test_scale_in_place() {
        let mut path = BrownianPath::zeros(1, 3, 15);
        path.accumulate(0, &[0.0, 2.0, 4.0], &[1.0]);
        path.scale_in_place(4.0);
        assert_eq!(path.value_at(1).unwrap(), vec![4.0]);
        assert_eq!(path.value_at(2).unwrap(), vec![8.0]);
    }

    #[test]
    fn test_characteristics_reports_parameters() {
        let mut path = BrownianPath::zeros(2, 17, 15);
        path.scale_in_place(2.0);
        let s = path.characteristics();
        assert!(s.contains("kt=17"));
        assert!(s.contains("d=2"));
        assert!(s.contains("c=2"));
        assert!(s.contains("n=15"));
        assert!(s.contains("startPoint=[0.0, 0.0]"));
    }
}
