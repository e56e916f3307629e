// src/core/mod.rs

pub mod normalize;
pub mod sample;
pub mod sanitize;

pub use normalize::{NormalizedView, normalize};
pub use sample::build_summary_input;
