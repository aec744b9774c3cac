//! GasBehavior - dark and light smoke
//!
//! Every step the timer drops by `smoke_decay`; at or below zero the smoke
//! is gone. Live smoke tries the three upward cells in random order, then
//! the two sideways cells, and keeps its timer wherever it ends up.

use rand::Rng;

use super::{Behavior, UpdateContext, DRIFT_OFFSETS, RISE_OFFSETS};
use crate::elements::Element;

pub struct GasBehavior;

impl GasBehavior {
    pub fn new() -> Self {
        Self
    }

    /// First free offset in a freshly shuffled table
    #[inline]
    fn try_offsets<R: Rng, const N: usize>(
        &self,
        ctx: &mut UpdateContext<'_, R>,
        offsets: [(i32, i32); N],
    ) -> bool {
        for (dx, dy) in ctx.shuffled(offsets) {
            if ctx.can_enter(dx, dy) {
                ctx.move_by(dx, dy);
                return true;
            }
        }
        false
    }
}

impl Behavior for GasBehavior {
    fn update<R: Rng>(&self, ctx: &mut UpdateContext<'_, R>) {
        let idx = ctx.idx();
        let remaining = ctx.read.timer_idx(idx) - ctx.params.smoke_decay;
        if remaining <= 0.0 {
            ctx.become_element(Element::Empty, 0.0);
            ctx.counters.expired_smoke += 1;
            return;
        }
        ctx.write.set_timer_idx(idx, remaining);

        if self.try_offsets(ctx, RISE_OFFSETS) {
            return;
        }
        self.try_offsets(ctx, DRIFT_OFFSETS);
    }
}
