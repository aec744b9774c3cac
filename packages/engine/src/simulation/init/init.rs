use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::behaviors::BehaviorRegistry;
use crate::core::error::EngineResult;
use crate::domain::settings::EngineSettings;
use crate::grid::Grid;
use crate::systems::cave::generate_cave;

use super::perf_stats::PerfStats;
use super::EngineCore;

pub(super) fn create_engine_core<R: Rng>(
    settings: EngineSettings,
    mut rng: R,
) -> EngineResult<EngineCore<R>> {
    let rule = settings.validate()?;

    let mut front = Grid::new(settings.width, settings.height);
    let cave = generate_cave(
        &mut front,
        &rule,
        settings.fill_ratio,
        settings.max_iterations,
        &mut rng,
    );
    console_log!(
        "cave {}x{} ({}): {} passes, stable={}, {} walls",
        settings.width,
        settings.height,
        rule,
        cave.iterations,
        cave.stable,
        cave.wall_cells
    );

    let back = front.clone();
    Ok(EngineCore {
        settings,
        rule,
        front,
        back,
        behaviors: BehaviorRegistry::new(),
        rng,
        frame: 0,
        cave,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}

pub(super) fn create_seeded_engine(settings: EngineSettings) -> EngineResult<EngineCore<SmallRng>> {
    let seed = settings.seed.unwrap_or_else(platform_seed);
    create_engine_core(settings, SmallRng::seed_from_u64(seed))
}

/// Fresh seed when none is configured
#[cfg(target_arch = "wasm32")]
fn platform_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed)
}
