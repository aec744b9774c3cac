use rand::Rng;

use crate::elements::Element;

use super::passes::{run_pass, Pass};
use super::{EngineCore, PerfTimer};

pub(super) fn step<R: Rng>(engine: &mut EngineCore<R>) {
    let perf_on = engine.perf_enabled;
    if perf_on {
        engine.perf_stats.reset();
    }
    let step_start = PerfTimer::start_if(perf_on);

    for pass in Pass::ORDER {
        let t0 = PerfTimer::start_if(perf_on);
        let counters = run_pass(engine, pass);

        if let Some(t0) = t0 {
            let ms = t0.elapsed_ms();
            let stats = &mut engine.perf_stats;
            match pass {
                Pass::Smoke => stats.smoke_ms = ms,
                Pass::Fire => stats.fire_ms = ms,
                Pass::Solids => stats.solids_ms = ms,
            }
            stats.add_counters(&counters);
        }
    }

    engine.frame += 1;

    if let Some(t) = step_start {
        let grid = &engine.front;
        let stats = &mut engine.perf_stats;
        stats.sand_cells = grid.count(Element::Sand) as u32;
        stats.fire_cells = grid.count(Element::Fire) as u32;
        stats.smoke_cells =
            (grid.count(Element::DarkSmoke) + grid.count(Element::LightSmoke)) as u32;
        stats.step_ms = t.elapsed_ms();
    }
}
