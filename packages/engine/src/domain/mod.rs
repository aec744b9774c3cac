//! Domain - what the simulation is made of
//!
//! - elements - cell states and their stable ids
//! - rule     - `B<digits>/S<digits>` cave rule
//! - settings - serde-backed engine configuration

pub mod elements;
pub mod rule;
pub mod settings;
