//! Cave generation
//!
//! Random wall noise is smoothed by a Life-like automaton until a pass
//! changes nothing or the iteration cap runs out, then the border is walled.
//! Only Wall and Empty exist at this stage.

use rand::Rng;

use crate::domain::rule::Rule;
use crate::elements::Element;
use crate::grid::Grid;

/// What a generation run did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CaveReport {
    /// Smoothing passes actually run (stable run includes the no-change pass)
    pub iterations: u32,
    /// True when the last pass changed zero cells
    pub stable: bool,
    /// Walls after the border stamp
    pub wall_cells: usize,
}

/// Build a fresh cave layout into `grid`, overwriting everything in it.
pub fn generate_cave<R: Rng>(
    grid: &mut Grid,
    rule: &Rule,
    fill_ratio: f64,
    max_iterations: u32,
    rng: &mut R,
) -> CaveReport {
    seed_noise(grid, fill_ratio, rng);
    let (iterations, stable) = settle(grid, rule, max_iterations);
    grid.stamp_border();

    CaveReport {
        iterations,
        stable,
        wall_cells: grid.count(Element::Wall),
    }
}

/// Interior cells become Wall with probability `fill_ratio`; the border
/// starts Empty and is walled later. Out-of-range ratios are clamped and NaN
/// counts as 0.
pub fn seed_noise<R: Rng>(grid: &mut Grid, fill_ratio: f64, rng: &mut R) {
    let p = if fill_ratio.is_nan() { 0.0 } else { fill_ratio.clamp(0.0, 1.0) };
    for idx in 0..grid.size() {
        grid.put_idx(idx, Element::Empty, 0.0);
    }
    for y in 1..grid.height().saturating_sub(1) {
        for x in 1..grid.width().saturating_sub(1) {
            if rng.gen_bool(p) {
                grid.put(x, y, Element::Wall, 0.0);
            }
        }
    }
}

/// Run smoothing passes until one changes nothing or `max_iterations` is hit.
/// Returns (passes run, stable).
pub fn settle(grid: &mut Grid, rule: &Rule, max_iterations: u32) -> (u32, bool) {
    let mut next = grid.clone();
    let mut iterations = 0;
    while iterations < max_iterations {
        iterations += 1;
        let changed = evolve(grid, &mut next, rule);
        std::mem::swap(grid, &mut next);
        if changed == 0 {
            return (iterations, true);
        }
    }
    (iterations, false)
}

/// One synchronous pass: every interior cell is judged against `current`
/// and the result lands in `next`. Returns how many cells flipped.
pub fn evolve(current: &Grid, next: &mut Grid, rule: &Rule) -> usize {
    next.sync_from(current);
    let mut changed = 0;

    for y in 1..current.height().saturating_sub(1) {
        for x in 1..current.width().saturating_sub(1) {
            let walls = current.count_neighbors(x, y, Element::Wall);
            let is_wall = current.cell(x, y) == Element::Wall;
            let becomes_wall = if is_wall {
                rule.survives(walls)
            } else {
                rule.births(walls)
            };

            if becomes_wall != is_wall {
                let element = if becomes_wall { Element::Wall } else { Element::Empty };
                next.put(x, y, element, 0.0);
                changed += 1;
            }
        }
    }

    changed
}
