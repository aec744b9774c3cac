//! EnergyBehavior - fire
//!
//! Fire sinks: it tries down, down-left and down-right in random order.
//! - Empty target: the fire moves there.
//! - Wood target: the fire is spent and leaves dark smoke behind. The wood
//!   itself is left alone here; it catches during the wood pass if fire
//!   still touches it.
//! - Nothing usable: the fire burns out in place as light smoke.

use rand::Rng;

use super::{Behavior, UpdateContext, FALL_OFFSETS};
use crate::elements::Element;

pub struct EnergyBehavior;

impl EnergyBehavior {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn burn_out<R: Rng>(&self, ctx: &mut UpdateContext<'_, R>, smoke: Element) {
        let lifetime = ctx.params.smoke_lifetime;
        ctx.become_element(smoke, lifetime);
        ctx.counters.smoke_born += 1;
    }
}

impl Behavior for EnergyBehavior {
    fn update<R: Rng>(&self, ctx: &mut UpdateContext<'_, R>) {
        for (dx, dy) in ctx.shuffled(FALL_OFFSETS) {
            if ctx.can_enter(dx, dy) {
                ctx.move_by(dx, dy);
                return;
            }
            if ctx.peek(dx, dy) == Some(Element::Wood) {
                self.burn_out(ctx, Element::DarkSmoke);
                return;
            }
        }
        self.burn_out(ctx, Element::LightSmoke);
    }
}
