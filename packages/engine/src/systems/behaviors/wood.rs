//! WoodBehavior - falling fuel
//!
//! Wood ignites when any Moore neighbor is Fire in the snapshot, which is
//! the state the fire pass just committed. Otherwise it drops straight
//! down; wood never slides diagonally.

use rand::Rng;

use super::{Behavior, UpdateContext};
use crate::elements::Element;

pub struct WoodBehavior;

impl WoodBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for WoodBehavior {
    fn update<R: Rng>(&self, ctx: &mut UpdateContext<'_, R>) {
        if ctx.read.any_neighbor(ctx.x, ctx.y, Element::Fire) {
            ctx.become_element(Element::Fire, 0.0);
            ctx.counters.ignitions += 1;
            return;
        }

        if ctx.can_enter(0, 1) {
            ctx.move_by(0, 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{run_one, walled};
    use crate::domain::settings::ElementParams;
    use crate::elements::Element::*;

    const P: ElementParams = ElementParams { smoke_lifetime: 6.0, smoke_decay: 0.5 };

    #[test]
    fn ignites_from_any_neighbor_instead_of_falling() {
        for (fx, fy) in [(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (1, 3), (2, 3), (3, 3)] {
            let read = walled(5, 5, &[(2, 2, Wood), (fx, fy, Fire)]);
            let (write, counters) = run_one(&read, 2, 2, &P, 0);
            assert_eq!(write.cell(2, 2), Fire, "fire at ({}, {})", fx, fy);
            assert_eq!(counters.ignitions, 1);
            assert_eq!(counters.moves, 0);
        }
    }

    #[test]
    fn falls_only_straight_down() {
        let read = walled(5, 5, &[(2, 2, Wood)]);
        let (write, _) = run_one(&read, 2, 2, &P, 0);
        assert_eq!(write.cell(2, 3), Wood);
        assert_eq!(write.cell(2, 2), Empty);

        // diagonals open, below blocked: stays
        let read = walled(5, 5, &[(2, 2, Wood), (2, 3, Sand)]);
        let (write, counters) = run_one(&read, 2, 2, &P, 0);
        assert_eq!(write, read);
        assert_eq!(counters.moves, 0);
    }

    #[test]
    fn smoke_does_not_ignite() {
        let read = walled(5, 5, &[(2, 2, Wood), (2, 3, DarkSmoke), (1, 2, LightSmoke)]);
        let (write, _) = run_one(&read, 2, 2, &P, 0);
        assert_eq!(write.cell(2, 2), Wood);
    }
}
