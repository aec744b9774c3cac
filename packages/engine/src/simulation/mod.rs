//! Engine - cave generation plus the per-step element update
//!
//! `EngineCore` owns two same-shape grids. Every pass reads `front`, writes
//! `back`, then the two swap, so a pass never sees its own writes while the
//! next pass sees all of them. Rules live in systems/behaviors; this module
//! only orchestrates.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::behaviors::BehaviorRegistry;
use crate::core::error::EngineResult;
use crate::domain::rule::Rule;
use crate::domain::settings::EngineSettings;
use crate::elements::Element;
use crate::grid::{Grid, GridView};
use crate::systems::cave::CaveReport;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/passes.rs"]
mod passes;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use passes::Pass;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Engine driven by the default fast RNG
pub type Engine = EngineCore<SmallRng>;

/// One-shot setup: validate, generate the cave, wall the border.
pub fn initialize(width: u32, height: u32, rule: &str, fill_ratio: f64) -> EngineResult<Engine> {
    Engine::new(width, height, rule, fill_ratio)
}

/// The simulation state
pub struct EngineCore<R: Rng = SmallRng> {
    settings: EngineSettings,
    rule: Rule,
    front: Grid,
    back: Grid,
    behaviors: BehaviorRegistry,
    rng: R,

    frame: u64,
    cave: CaveReport,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Engine {
    pub fn new(width: u32, height: u32, rule: &str, fill_ratio: f64) -> EngineResult<Self> {
        Self::from_settings(EngineSettings::new(width, height, rule, fill_ratio))
    }

    /// Seeds from `settings.seed` when present, otherwise from the platform
    pub fn from_settings(settings: EngineSettings) -> EngineResult<Self> {
        init::create_seeded_engine(settings)
    }
}

impl<R: Rng> EngineCore<R> {
    /// Build with a caller-supplied random source (tests pass a seeded one)
    pub fn with_rng(settings: EngineSettings, rng: R) -> EngineResult<Self> {
        init::create_engine_core(settings, rng)
    }

    pub fn width(&self) -> u32 { self.front.width() }

    pub fn height(&self) -> u32 { self.front.height() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn rule(&self) -> &Rule { &self.rule }

    pub fn settings(&self) -> &EngineSettings { &self.settings }

    /// Report from the last cave generation
    pub fn cave_report(&self) -> CaveReport { self.cave }

    /// Read-only view of the committed grid
    pub fn snapshot(&self) -> GridView<'_> {
        GridView::new(&self.front)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Element> {
        self.front.get(x, y)
    }

    pub fn count(&self, element: Element) -> usize {
        self.front.count(element)
    }

    /// Advance one generation: smoke, then fire, then sand and wood
    pub fn step(&mut self) {
        step::step(self)
    }

    /// Paint one cell. Returns whether anything was written.
    pub fn place(&mut self, x: i32, y: i32, element: Element) -> bool {
        commands::place(self, x, y, element)
    }

    /// `place` over every cell of a disc. Returns cells written.
    pub fn place_in_radius(&mut self, cx: i32, cy: i32, radius: i32, element: Element) -> usize {
        commands::place_in_radius(self, cx, cy, radius, element)
    }

    /// Empty the interior, keep every wall
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// New cave on the same dimensions; elements, timers and frame reset
    pub fn regenerate(&mut self) -> CaveReport {
        commands::regenerate(self)
    }

    pub fn settings_json(&self) -> String {
        self.settings.to_json()
    }

    pub fn set_smoke_lifetime(&mut self, lifetime: f32) -> EngineResult<()> {
        settings::set_smoke_lifetime(self, lifetime)
    }

    pub fn set_smoke_decay(&mut self, decay: f32) -> EngineResult<()> {
        settings::set_smoke_decay(self, decay)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Raw cell bytes for JS (one `u8` element id per cell, row-major)
    pub fn cells_ptr(&self) -> *const u8 {
        self.front.cells.as_ptr() as *const u8
    }

    pub fn cells_len(&self) -> usize {
        self.front.cells.len()
    }

    pub fn timers_ptr(&self) -> *const f32 {
        self.front.timers.as_ptr()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
