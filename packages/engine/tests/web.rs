//! Browser-side checks for the JS facade
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use grotto_engine::{el_light_smoke, el_sand, el_wall, World};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn world_steps_in_the_browser() {
    let mut world = World::with_seed(32, 24, "B/S", 0.0, 4).unwrap();
    assert!(world.place(10, 5, el_sand()));
    world.step();
    assert_eq!(world.get(10, 6), el_sand());
    assert_eq!(world.get(0, 0), el_wall());
    assert_eq!(world.frame(), 1);
}

#[wasm_bindgen_test]
fn bad_rule_throws() {
    assert!(World::new(32, 24, "nope", 0.45).is_err());
    assert!(World::from_settings_json("{ not json").is_err());
}

#[wasm_bindgen_test]
fn unknown_ids_are_ignored() {
    let mut world = World::with_seed(16, 16, "B/S", 0.0, 1).unwrap();
    assert!(!world.place(4, 4, 200));
    assert!(world.place(4, 4, el_light_smoke()));
    assert!(world.cells_len() == 256);
}
