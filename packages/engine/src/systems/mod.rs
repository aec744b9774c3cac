//! Systems - the rules that change cells
//!
//! - cave       - wall generation (noise + birth/survival smoothing)
//! - behaviors  - per-element step rules

pub mod behaviors;
pub mod cave;
