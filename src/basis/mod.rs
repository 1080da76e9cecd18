// src/basis/mod.rs
pub mod grid;
pub mod schauder;
pub mod wavelet;

pub use grid::Grid;
pub use schauder::SchauderBasis;
pub use wavelet::WaveletIndex;
