use rand::Rng;

use crate::core::error::EngineResult;

use super::perf_stats::PerfStats;
use super::EngineCore;

pub(super) fn enable_perf_metrics<R: Rng>(engine: &mut EngineCore<R>, enabled: bool) {
    engine.perf_enabled = enabled;
    if !enabled {
        engine.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats<R: Rng>(engine: &EngineCore<R>) -> PerfStats {
    engine.perf_stats.clone()
}

/// Applies to smoke born from now on; live smoke keeps its timer
pub(super) fn set_smoke_lifetime<R: Rng>(engine: &mut EngineCore<R>, lifetime: f32) -> EngineResult<()> {
    let mut params = engine.settings.elements;
    params.smoke_lifetime = lifetime;
    params.validate()?;
    engine.settings.elements = params;
    Ok(())
}

pub(super) fn set_smoke_decay<R: Rng>(engine: &mut EngineCore<R>, decay: f32) -> EngineResult<()> {
    let mut params = engine.settings.elements;
    params.smoke_decay = decay;
    params.validate()?;
    engine.settings.elements = params;
    Ok(())
}
