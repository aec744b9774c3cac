//! Behaviors - per-element update rules
//!
//! Each behavior handles one element family and is dispatched by the
//! registry. Behaviors never read their own writes: `read` is the snapshot
//! committed by the previous pass, `write` is the buffer this pass fills.
//! A move is only legal into a cell that is Empty in both.

mod common;
mod powder;
mod wood;
mod gas;
mod energy;

pub use common::{shuffled, DRIFT_OFFSETS, FALL_OFFSETS, RISE_OFFSETS};
pub use powder::PowderBehavior;
pub use wood::WoodBehavior;
pub use gas::GasBehavior;
pub use energy::EnergyBehavior;

use rand::Rng;

use crate::domain::settings::ElementParams;
use crate::elements::Element;
use crate::grid::Grid;

/// Tallies a pass produces (feeds PerfStats)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassCounters {
    pub visited: u32,
    pub moves: u32,
    pub ignitions: u32,
    pub smoke_born: u32,
    pub expired_smoke: u32,
}

/// Update context passed to behaviors
pub struct UpdateContext<'a, R: Rng> {
    pub read: &'a Grid,
    pub write: &'a mut Grid,
    pub x: u32,
    pub y: u32,
    pub params: &'a ElementParams,
    pub rng: &'a mut R,
    pub counters: &'a mut PassCounters,
}

impl<'a, R: Rng> UpdateContext<'a, R> {
    #[inline]
    pub fn idx(&self) -> usize {
        self.read.index(self.x, self.y)
    }

    #[inline]
    pub fn element(&self) -> Element {
        self.read.cell(self.x, self.y)
    }

    /// Offset target is free in the snapshot and not yet claimed this pass
    #[inline]
    pub fn can_enter(&self, dx: i32, dy: i32) -> bool {
        let (tx, ty) = (self.x as i32 + dx, self.y as i32 + dy);
        self.read.is_empty(tx, ty) && self.write.is_empty(tx, ty)
    }

    /// Element at an offset in the snapshot (None outside the grid)
    #[inline]
    pub fn peek(&self, dx: i32, dy: i32) -> Option<Element> {
        self.read.get(self.x as i32 + dx, self.y as i32 + dy)
    }

    /// Move this cell by (dx, dy). The destination takes the element and
    /// whatever timer `write` holds for the origin; the origin is cleared.
    #[inline]
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        let from = self.idx();
        let to = self
            .write
            .index((self.x as i32 + dx) as u32, (self.y as i32 + dy) as u32);
        let element = self.element();
        let timer = self.write.timer_idx(from);
        self.write.put_idx(to, element, timer);
        self.write.put_idx(from, Element::Empty, 0.0);
        self.counters.moves += 1;
    }

    /// Turn this cell into `element` in place
    #[inline]
    pub fn become_element(&mut self, element: Element, timer: f32) {
        let idx = self.idx();
        self.write.put_idx(idx, element, timer);
    }

    #[inline]
    pub fn shuffled<const N: usize>(&mut self, offsets: [(i32, i32); N]) -> [(i32, i32); N] {
        shuffled(offsets, &mut *self.rng)
    }
}

/// Behavior trait - each element family implements this
pub trait Behavior {
    fn update<R: Rng>(&self, ctx: &mut UpdateContext<'_, R>);
}

/// Behavior registry - dispatch by element
pub struct BehaviorRegistry {
    powder: PowderBehavior,
    wood: WoodBehavior,
    gas: GasBehavior,
    energy: EnergyBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            powder: PowderBehavior::new(),
            wood: WoodBehavior::new(),
            gas: GasBehavior::new(),
            energy: EnergyBehavior::new(),
        }
    }

    pub fn update<R: Rng>(&self, element: Element, ctx: &mut UpdateContext<'_, R>) {
        ctx.counters.visited += 1;
        match element {
            Element::Sand => self.powder.update(ctx),
            Element::Wood => self.wood.update(ctx),
            Element::DarkSmoke | Element::LightSmoke => self.gas.update(ctx),
            Element::Fire => self.energy.update(ctx),
            Element::Empty | Element::Wall => {} // static
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;

    /// 5x5 (or larger) walled grid with the given interior cells
    pub fn walled(width: u32, height: u32, cells: &[(u32, u32, Element)]) -> Grid {
        let mut grid = Grid::new(width, height);
        grid.stamp_border();
        for &(x, y, el) in cells {
            grid.put(x, y, el, 0.0);
        }
        grid
    }

    /// Run one behavior on (x, y) and return the written buffer
    pub fn run_one(
        read: &Grid,
        x: u32,
        y: u32,
        params: &ElementParams,
        seed: u64,
    ) -> (Grid, PassCounters) {
        let mut write = read.clone();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut counters = PassCounters::default();
        let mut ctx = UpdateContext {
            read,
            write: &mut write,
            x,
            y,
            params,
            rng: &mut rng,
            counters: &mut counters,
        };
        BehaviorRegistry::new().update(read.cell(x, y), &mut ctx);
        (write, counters)
    }
}
