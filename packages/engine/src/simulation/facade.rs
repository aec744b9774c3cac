use wasm_bindgen::prelude::*;

use crate::core::error::EngineError;
use crate::domain::settings::EngineSettings;
use crate::elements::{Element, ElementId};

use super::perf_stats::PerfStats;
use super::Engine;

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct World {
    core: Engine,
}

#[wasm_bindgen]
impl World {
    /// Generate a cave of the given size. Throws on a bad rule or size.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, rule: &str, fill_ratio: f64) -> Result<World, JsValue> {
        let core = Engine::new(width, height, rule, fill_ratio).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = fromSettingsJson)]
    pub fn from_settings_json(json: &str) -> Result<World, JsValue> {
        let settings = EngineSettings::from_json(json).map_err(|e| {
            console_warn!("settings rejected: {}", e);
            to_js(e)
        })?;
        let core = Engine::from_settings(settings).map_err(to_js)?;
        Ok(Self { core })
    }

    /// Reproducible cave and element randomness
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(
        width: u32,
        height: u32,
        rule: &str,
        fill_ratio: f64,
        seed: u64,
    ) -> Result<World, JsValue> {
        let settings = EngineSettings::new(width, height, rule, fill_ratio).with_seed(seed);
        let core = Engine::from_settings(settings).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn rule(&self) -> String { self.core.rule().to_string() }

    #[wasm_bindgen(getter)]
    pub fn cave_iterations(&self) -> u32 { self.core.cave_report().iterations }

    #[wasm_bindgen(getter)]
    pub fn cave_stable(&self) -> bool { self.core.cave_report().stable }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_smoke_lifetime(&mut self, lifetime: f32) -> Result<(), JsValue> {
        self.core.set_smoke_lifetime(lifetime).map_err(to_js)
    }

    pub fn set_smoke_decay(&mut self, decay: f32) -> Result<(), JsValue> {
        self.core.set_smoke_decay(decay).map_err(to_js)
    }

    pub fn settings_json(&self) -> String {
        self.core.settings_json()
    }

    /// Paint one cell with an element id. Unknown ids are ignored.
    pub fn place(&mut self, x: i32, y: i32, element: ElementId) -> bool {
        match Element::from_id(element) {
            Some(el) => self.core.place(x, y, el),
            None => {
                console_warn!("place: unknown element id {}", element);
                false
            }
        }
    }

    /// Brush
    pub fn place_in_radius(&mut self, cx: i32, cy: i32, radius: i32, element: ElementId) -> u32 {
        match Element::from_id(element) {
            Some(el) => self.core.place_in_radius(cx, cy, radius, el) as u32,
            None => 0,
        }
    }

    /// Element id at (x, y); 255 outside the grid
    pub fn get(&self, x: i32, y: i32) -> u8 {
        self.core.get(x, y).map(Element::id).unwrap_or(u8::MAX)
    }

    pub fn count(&self, element: ElementId) -> u32 {
        Element::from_id(element)
            .map(|el| self.core.count(el) as u32)
            .unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// New cave, returns the number of smoothing passes it took
    pub fn regenerate(&mut self) -> u32 {
        self.core.regenerate().iterations
    }

    pub fn step(&mut self) {
        self.core.step();
    }

    /// Pointer to the cell ids (u8 per cell, row-major) in wasm memory
    pub fn cells_ptr(&self) -> *const u8 {
        self.core.cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.core.cells_len()
    }

    /// Pointer to the smoke timers (f32 per cell)
    pub fn timers_ptr(&self) -> *const f32 {
        self.core.timers_ptr()
    }
}
