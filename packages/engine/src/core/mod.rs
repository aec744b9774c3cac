//! Core - storage and plumbing shared by every system
//!
//! - console  - logging macros (browser console on wasm32)
//! - error    - `EngineError` and `EngineResult`
//! - grid     - cell states + smoke timers

#[macro_use]
pub mod console;
pub mod error;
pub mod grid;
