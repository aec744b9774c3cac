use rand::Rng;

use crate::behaviors::{PassCounters, UpdateContext};
use crate::elements::Element;

use super::EngineCore;

/// One traversal of the interior applying one family of rules
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pass {
    Smoke,
    Fire,
    /// Sand and wood
    Solids,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RowOrder {
    TopDown,
    BottomUp,
}

impl Pass {
    /// Fixed order inside a step; later passes see earlier passes' writes
    pub const ORDER: [Pass; 3] = [Pass::Smoke, Pass::Fire, Pass::Solids];

    /// Does this pass update cells of `element`?
    pub fn handles(self, element: Element) -> bool {
        match self {
            Pass::Smoke => element.is_smoke(),
            Pass::Fire => element == Element::Fire,
            Pass::Solids => matches!(element, Element::Sand | Element::Wood),
        }
    }

    // Solids go bottom-up so a grain lands in a row that was already handled
    fn row_order(self) -> RowOrder {
        match self {
            Pass::Smoke | Pass::Fire => RowOrder::TopDown,
            Pass::Solids => RowOrder::BottomUp,
        }
    }
}

/// Run one pass: sync `back` to `front`, let every matching interior cell
/// write its outcome into `back` while reading only `front`, then swap.
pub(super) fn run_pass<R: Rng>(engine: &mut EngineCore<R>, pass: Pass) -> PassCounters {
    let EngineCore {
        settings,
        front,
        back,
        behaviors,
        rng,
        ..
    } = engine;

    back.sync_from(front);
    let params = settings.elements;
    let mut counters = PassCounters::default();

    let width = front.width();
    let height = front.height();
    let interior_rows = height.saturating_sub(2);

    for i in 0..interior_rows {
        let y = match pass.row_order() {
            RowOrder::TopDown => 1 + i,
            RowOrder::BottomUp => height - 2 - i,
        };
        for x in 1..width - 1 {
            let element = front.cell(x, y);
            if !pass.handles(element) {
                continue;
            }
            let mut ctx = UpdateContext {
                read: &*front,
                write: &mut *back,
                x,
                y,
                params: &params,
                rng: &mut *rng,
                counters: &mut counters,
            };
            behaviors.update(element, &mut ctx);
        }
    }

    std::mem::swap(front, back);
    counters
}
