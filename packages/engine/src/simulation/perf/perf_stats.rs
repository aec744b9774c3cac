use wasm_bindgen::prelude::*;

use crate::behaviors::PassCounters;

/// Per-step timings and tallies. All zero while perf metrics are off.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) smoke_ms: f64,
    pub(super) fire_ms: f64,
    pub(super) solids_ms: f64,
    pub(super) cells_visited: u32,
    pub(super) moves: u32,
    pub(super) ignitions: u32,
    pub(super) smoke_born: u32,
    pub(super) expired_smoke: u32,
    pub(super) sand_cells: u32,
    pub(super) fire_cells: u32,
    pub(super) smoke_cells: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn add_counters(&mut self, counters: &PassCounters) {
        self.cells_visited = self.cells_visited.saturating_add(counters.visited);
        self.moves = self.moves.saturating_add(counters.moves);
        self.ignitions = self.ignitions.saturating_add(counters.ignitions);
        self.smoke_born = self.smoke_born.saturating_add(counters.smoke_born);
        self.expired_smoke = self.expired_smoke.saturating_add(counters.expired_smoke);
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn smoke_ms(&self) -> f64 { self.smoke_ms }
    #[wasm_bindgen(getter)]
    pub fn fire_ms(&self) -> f64 { self.fire_ms }
    #[wasm_bindgen(getter)]
    pub fn solids_ms(&self) -> f64 { self.solids_ms }
    #[wasm_bindgen(getter)]
    pub fn cells_visited(&self) -> u32 { self.cells_visited }
    #[wasm_bindgen(getter)]
    pub fn moves(&self) -> u32 { self.moves }
    #[wasm_bindgen(getter)]
    pub fn ignitions(&self) -> u32 { self.ignitions }
    #[wasm_bindgen(getter)]
    pub fn smoke_born(&self) -> u32 { self.smoke_born }
    #[wasm_bindgen(getter)]
    pub fn expired_smoke(&self) -> u32 { self.expired_smoke }
    #[wasm_bindgen(getter)]
    pub fn sand_cells(&self) -> u32 { self.sand_cells }
    #[wasm_bindgen(getter)]
    pub fn fire_cells(&self) -> u32 { self.fire_cells }
    #[wasm_bindgen(getter)]
    pub fn smoke_cells(&self) -> u32 { self.smoke_cells }
}
