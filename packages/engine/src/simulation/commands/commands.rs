use rand::Rng;

use crate::elements::Element;
use crate::systems::cave::{generate_cave, CaveReport};

use super::EngineCore;

pub(super) fn place<R: Rng>(engine: &mut EngineCore<R>, x: i32, y: i32, element: Element) -> bool {
    // The wall ring is never painted over, erasing included
    if !engine.front.is_interior(x, y) {
        return false;
    }

    if element != Element::Empty && !engine.front.is_empty(x, y) {
        return false;
    }

    let timer = if element.is_smoke() {
        engine.settings.elements.smoke_lifetime
    } else {
        0.0
    };
    engine.front.put(x as u32, y as u32, element, timer);
    true
}

pub(super) fn place_in_radius<R: Rng>(
    engine: &mut EngineCore<R>,
    cx: i32,
    cy: i32,
    radius: i32,
    element: Element,
) -> usize {
    let r2 = radius * radius;
    let mut written = 0;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 && place(engine, cx + dx, cy + dy, element) {
                written += 1;
            }
        }
    }
    written
}

pub(super) fn clear<R: Rng>(engine: &mut EngineCore<R>) {
    let grid = &mut engine.front;
    for idx in 0..grid.size() {
        if grid.cell_idx(idx) != Element::Wall {
            grid.put_idx(idx, Element::Empty, 0.0);
        }
    }
}

pub(super) fn regenerate<R: Rng>(engine: &mut EngineCore<R>) -> CaveReport {
    let report = generate_cave(
        &mut engine.front,
        &engine.rule,
        engine.settings.fill_ratio,
        engine.settings.max_iterations,
        &mut engine.rng,
    );
    engine.back.sync_from(&engine.front);
    engine.frame = 0;
    engine.cave = report;
    console_log!(
        "cave regenerated: {} passes, stable={}, {} walls",
        report.iterations,
        report.stable,
        report.wall_cells
    );
    report
}
