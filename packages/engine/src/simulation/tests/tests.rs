use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::*;
use crate::core::error::EngineError;
use crate::elements::Element::*;

/// Walled grid with an empty interior plus the given cells
fn engine_with(width: u32, height: u32, cells: &[(u32, u32, Element)], seed: u64) -> EngineCore<SmallRng> {
    let settings = EngineSettings::new(width, height, "B/S", 0.0);
    let mut engine = EngineCore::with_rng(settings, SmallRng::seed_from_u64(seed)).unwrap();
    for &(x, y, el) in cells {
        engine.front.put(x, y, el, 0.0);
    }
    engine
}

fn at(engine: &EngineCore<SmallRng>, x: i32, y: i32) -> Element {
    engine.get(x, y).unwrap()
}

#[test]
fn initialize_builds_a_walled_cave() {
    let engine = initialize(20, 12, "B5678/S45678", 0.45).unwrap();
    assert_eq!(engine.width(), 20);
    assert_eq!(engine.height(), 12);
    assert_eq!(engine.frame(), 0);
    assert!(engine.snapshot().border_intact());
    assert!(engine.cave_report().iterations >= 1);
    assert_eq!(engine.cave_report().wall_cells, engine.count(Wall));
}

#[test]
fn initialize_rejects_bad_input() {
    assert!(matches!(
        initialize(20, 12, "B5678S45678", 0.45),
        Err(EngineError::Format { .. })
    ));
    assert_eq!(
        initialize(2, 12, "B5678/S45678", 0.45).err(),
        Some(EngineError::InvalidDimension { width: 2, height: 12 })
    );
}

#[test]
fn lone_sand_falls_one_row() {
    let mut engine = engine_with(5, 5, &[(2, 2, Sand)], 1);
    engine.step();
    assert_eq!(at(&engine, 2, 3), Sand);
    assert_eq!(at(&engine, 2, 2), Empty);
    assert_eq!(engine.frame(), 1);
}

#[test]
fn wood_beside_fire_ignites_in_the_same_step() {
    // Fire always lands next to the wood: its third offset is the border
    for seed in 0..32 {
        let mut engine = engine_with(5, 5, &[(2, 2, Wood), (3, 2, Fire)], seed);
        engine.step();
        assert_eq!(at(&engine, 2, 2), Fire, "seed {}", seed);
        assert_eq!(engine.count(Fire), 2, "seed {}", seed);
    }
}

#[test]
fn fire_with_no_way_down_burns_out_as_light_smoke() {
    // Fire under wood, resting on the border
    let mut engine = engine_with(5, 5, &[(2, 2, Wood), (2, 3, Fire)], 4);
    engine.step();
    assert_eq!(at(&engine, 2, 3), LightSmoke);
    assert_eq!(engine.snapshot().timer(2, 3), Some(6.0));
    // Fire was gone before the wood pass looked, so the wood stays put
    assert_eq!(at(&engine, 2, 2), Wood);
}

#[test]
fn fire_into_wood_leaves_dark_smoke_and_spares_the_wood() {
    let cells = [(2, 1, Fire), (2, 2, Wood), (1, 2, Wall), (3, 2, Wall)];
    for seed in 0..16 {
        let mut engine = engine_with(5, 5, &cells, seed);
        engine.step();
        assert_eq!(at(&engine, 2, 1), DarkSmoke);
        assert_eq!(engine.snapshot().timer(2, 1), Some(6.0));
        // Not lit: the wood pass sees smoke, not fire, and the wood drops
        assert_eq!(at(&engine, 2, 2), Empty);
        assert_eq!(at(&engine, 2, 3), Wood);
        assert_eq!(engine.count(Fire), 0);
    }
}

#[test]
fn two_grains_never_share_a_target() {
    let cells = [(1, 2, Sand), (3, 2, Sand), (1, 3, Wall), (3, 3, Wall)];
    let mut engine = engine_with(5, 5, &cells, 9);
    engine.step();
    // Left grain is scanned first and claims (2,3)
    assert_eq!(at(&engine, 2, 3), Sand);
    assert_eq!(at(&engine, 1, 2), Empty);
    assert_eq!(at(&engine, 3, 2), Sand);
    assert_eq!(engine.count(Sand), 2);
}

#[test]
fn stacked_sand_reads_the_snapshot() {
    let mut engine = engine_with(5, 5, &[(2, 1, Sand), (2, 2, Sand)], 2);
    engine.step();
    // The upper grain still saw sand below it, so it slid instead of falling
    assert_eq!(at(&engine, 2, 3), Sand);
    assert_eq!(at(&engine, 2, 2), Empty);
    assert_eq!(at(&engine, 2, 1), Empty);
    assert_eq!(engine.count(Sand), 2);
    assert!(at(&engine, 1, 2) == Sand || at(&engine, 3, 2) == Sand);
}

#[test]
fn smoke_expires_within_its_timer_budget() {
    let mut engine = engine_with(5, 5, &[], 6);
    engine.front.put(2, 2, LightSmoke, 3.0);
    // 3.0 / 0.5 = 6 steps
    for _ in 0..5 {
        engine.step();
    }
    assert_eq!(engine.count(LightSmoke), 1);
    engine.step();
    assert_eq!(engine.count(LightSmoke), 0);
    assert!(engine.snapshot().timers().iter().all(|&t| t == 0.0));
}

#[test]
fn smoke_rises_and_keeps_its_timer() {
    let mut engine = engine_with(5, 5, &[], 3);
    engine.front.put(2, 3, DarkSmoke, 4.0);
    engine.step();
    let view = engine.snapshot();
    let idx = view.cells().iter().position(|&el| el == DarkSmoke).unwrap();
    assert_eq!(idx / 5, 2);
    assert_eq!(view.timers()[idx], 3.5);
    assert_eq!(view.timer(2, 3), Some(0.0));
}

#[test]
fn place_follows_the_overwrite_rules() {
    let mut engine = engine_with(6, 6, &[(2, 2, Wall), (3, 3, Sand)], 0);

    assert!(!engine.place(2, 2, Sand));
    assert_eq!(at(&engine, 2, 2), Wall);

    assert!(engine.place(3, 3, Empty));
    assert_eq!(at(&engine, 3, 3), Empty);

    assert!(engine.place(2, 2, Empty));
    assert!(engine.place(2, 2, Wood));
    assert_eq!(at(&engine, 2, 2), Wood);
    assert_eq!(engine.frame(), 0);
}

#[test]
fn place_never_touches_the_border_or_outside() {
    let mut engine = engine_with(6, 6, &[], 0);
    let before = engine.snapshot().to_grid();

    assert!(!engine.place(-1, 0, Sand));
    assert!(!engine.place(6, 2, Sand));
    assert!(!engine.place(0, 0, Empty));
    assert!(!engine.place(5, 3, Empty));
    assert_eq!(engine.snapshot().to_grid(), before);
}

#[test]
fn placed_smoke_gets_a_full_timer() {
    let mut engine = engine_with(6, 6, &[], 0);
    engine.set_smoke_lifetime(2.5).unwrap();
    assert!(engine.place(2, 2, DarkSmoke));
    assert_eq!(engine.snapshot().timer(2, 2), Some(2.5));
    assert!(engine.place(3, 3, Sand));
    assert_eq!(engine.snapshot().timer(3, 3), Some(0.0));
}

#[test]
fn brush_fills_a_disc_inside_the_walls() {
    let mut engine = engine_with(9, 9, &[], 0);
    let written = engine.place_in_radius(4, 4, 1, Sand);
    assert_eq!(written, 5);
    assert_eq!(engine.count(Sand), 5);
    // Clipped by the border
    let written = engine.place_in_radius(1, 1, 2, Wood);
    assert!(written > 0);
    assert!(engine.snapshot().border_intact());
}

#[test]
fn clear_keeps_walls_and_drops_timers() {
    let mut engine = engine_with(7, 7, &[(2, 2, Wall), (3, 3, Sand)], 0);
    engine.place(4, 4, LightSmoke);
    engine.clear();
    assert_eq!(at(&engine, 2, 2), Wall);
    assert_eq!(engine.count(Sand), 0);
    assert_eq!(engine.count(LightSmoke), 0);
    assert!(engine.snapshot().timers().iter().all(|&t| t == 0.0));
}

#[test]
fn regenerate_resets_frame_and_elements() {
    let settings = EngineSettings::new(30, 20, "B5678/S45678", 0.45);
    let mut engine = EngineCore::with_rng(settings, SmallRng::seed_from_u64(5)).unwrap();
    engine.place_in_radius(15, 10, 3, Sand);
    engine.step();
    engine.step();

    let report = engine.regenerate();
    assert_eq!(engine.frame(), 0);
    assert_eq!(engine.count(Sand), 0);
    assert_eq!(engine.cave_report(), report);
    assert_eq!(report.wall_cells, engine.count(Wall));
    assert!(engine.snapshot().border_intact());
    assert_eq!(engine.back, engine.front);
}

#[test]
fn smoke_setters_validate() {
    let mut engine = engine_with(5, 5, &[], 0);
    assert!(matches!(engine.set_smoke_decay(0.0), Err(EngineError::Settings(_))));
    assert!(engine.set_smoke_lifetime(f32::NAN).is_err());
    engine.set_smoke_decay(1.0).unwrap();
    assert_eq!(engine.settings().elements.smoke_decay, 1.0);

    engine.front.put(2, 2, LightSmoke, 2.0);
    engine.step();
    engine.step();
    assert_eq!(engine.count(LightSmoke), 0);
}

#[test]
fn perf_stats_stay_zero_until_enabled() {
    let mut engine = engine_with(5, 5, &[(2, 2, Sand)], 0);
    engine.step();
    assert_eq!(engine.get_perf_stats().moves(), 0);

    engine.enable_perf_metrics(true);
    engine.place(2, 1, Sand);
    engine.step();
    let stats = engine.get_perf_stats();
    assert_eq!(stats.sand_cells(), 2);
    assert_eq!(stats.cells_visited(), 2);
    assert!(stats.moves() >= 1);
    assert!(stats.step_ms() >= 0.0);
}

#[test]
fn perf_stats_count_burning() {
    let mut engine = engine_with(5, 5, &[(2, 2, Wood), (3, 2, Fire)], 8);
    engine.enable_perf_metrics(true);
    engine.step();
    let stats = engine.get_perf_stats();
    assert_eq!(stats.ignitions(), 1);
    assert_eq!(stats.fire_cells(), 2);
}

#[test]
fn raw_buffers_match_the_snapshot() {
    let engine = engine_with(5, 4, &[(1, 1, Sand)], 0);
    assert_eq!(engine.cells_len(), 20);
    let bytes = unsafe { std::slice::from_raw_parts(engine.cells_ptr(), engine.cells_len()) };
    assert_eq!(bytes[0], Wall.id());
    assert_eq!(bytes[6], Sand.id());
    assert_eq!(bytes[7], Empty.id());
}
