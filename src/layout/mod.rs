//! Text layout: greedy wrapping and largest-first font fitting.
//!
//! - `wrap`: pack words into lines against a width budget
//! - `fit`: pick the largest font candidate whose wrapped block fits

pub mod fit;
pub mod wrap;

pub use fit::{FittedText, fit};
pub use wrap::wrap;
