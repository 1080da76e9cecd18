// src/synth/mod.rs
pub mod engine;
pub mod path;

pub use engine::{ConfigWarnings, PathSynthesizer, SynthConfig};
pub use path::BrownianPath;
