//! PowderBehavior - sand
//!
//! Straight down first. When blocked, slide to a free lower diagonal; with
//! both diagonals free the side is an independent coin flip.

use rand::Rng;

use super::{Behavior, UpdateContext};

pub struct PowderBehavior;

impl PowderBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for PowderBehavior {
    fn update<R: Rng>(&self, ctx: &mut UpdateContext<'_, R>) {
        if ctx.can_enter(0, 1) {
            ctx.move_by(0, 1);
            return;
        }

        let left = ctx.can_enter(-1, 1);
        let right = ctx.can_enter(1, 1);
        match (left, right) {
            (true, true) => {
                let dx = if ctx.rng.gen_bool(0.5) { -1 } else { 1 };
                ctx.move_by(dx, 1);
            }
            (true, false) => ctx.move_by(-1, 1),
            (false, true) => ctx.move_by(1, 1),
            (false, false) => {}
        }
    }
}
