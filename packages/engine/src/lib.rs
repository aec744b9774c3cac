//! Grotto Engine - falling-sand caves in WASM
//!
//! A random wall noise is smoothed into a cave, then sand, wood, fire and
//! smoke move through it one generation per `step()`.
//!
//! Architecture:
//! - core/        - grid storage, errors, console logging
//! - domain/      - elements, cave rule, settings
//! - systems/     - cave generation and element behaviors
//! - simulation/  - engine orchestration and the JS facade

// Logging macros must be declared first
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Short paths used across the crate
pub use crate::core::grid;
pub use domain::elements;
pub use systems::behaviors;

pub use crate::core::error::{EngineError, EngineResult};
pub use domain::elements::Element;
pub use domain::rule::Rule;
pub use domain::settings::EngineSettings;
pub use simulation::{initialize, Engine, EngineCore, PerfStats, World};
pub use systems::cave::CaveReport;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("grotto engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Export element constants for JS
#[wasm_bindgen]
pub fn el_empty() -> u8 { domain::elements::EL_EMPTY }
#[wasm_bindgen]
pub fn el_wall() -> u8 { domain::elements::EL_WALL }
#[wasm_bindgen]
pub fn el_sand() -> u8 { domain::elements::EL_SAND }
#[wasm_bindgen]
pub fn el_wood() -> u8 { domain::elements::EL_WOOD }
#[wasm_bindgen]
pub fn el_fire() -> u8 { domain::elements::EL_FIRE }
#[wasm_bindgen]
pub fn el_dark_smoke() -> u8 { domain::elements::EL_DARK_SMOKE }
#[wasm_bindgen]
pub fn el_light_smoke() -> u8 { domain::elements::EL_LIGHT_SMOKE }

/// Lowercase element name for UI labels; empty for unknown ids
#[wasm_bindgen]
pub fn element_name(id: u8) -> String {
    domain::elements::Element::from_id(id)
        .map(|el| el.name().to_string())
        .unwrap_or_default()
}
