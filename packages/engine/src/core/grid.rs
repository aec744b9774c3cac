//! Grid - Structure of Arrays (SoA) for cell storage
//!
//! Instead of: Vec<Cell { element, timer }>
//! We have:    cells[], timers[]  // same row-major index, cells[] is a flat u8 view for JS
//!
//! Timers only carry meaning for smoke cells; every other cell keeps 0.0.
//! The outer ring is the wall border. Nothing in the step pipeline writes
//! to it, so `stamp_border` only has to run when a layout is (re)built.

use crate::elements::Element;

mod indexing;
mod accessors;
mod neighbors;
mod view;

pub use neighbors::MOORE_OFFSETS;
pub use view::GridView;

/// SoA Grid - element states plus smoke decay timers
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    pub cells: Vec<Element>,   // One element per cell (Empty = nothing)
    pub timers: Vec<f32>,      // Remaining smoke lifetime (0 = unused)
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            size,
            cells: vec![Element::Empty; size],
            timers: vec![0.0; size],
        }
    }

    /// Overwrite this buffer with `other` without reallocating.
    /// Both grids must share dimensions (front/back buffers always do).
    #[inline]
    pub fn sync_from(&mut self, other: &Grid) {
        debug_assert!(
            self.width == other.width && self.height == other.height,
            "sync_from: {}x{} vs {}x{}",
            self.width,
            self.height,
            other.width,
            other.height
        );
        self.cells.copy_from_slice(&other.cells);
        self.timers.copy_from_slice(&other.timers);
    }

    /// Force the outer ring to Wall. Idempotent.
    pub fn stamp_border(&mut self) {
        if self.size == 0 {
            return;
        }
        let (w, h) = (self.width, self.height);
        for x in 0..w {
            self.put(x, 0, Element::Wall, 0.0);
            self.put(x, h - 1, Element::Wall, 0.0);
        }
        for y in 0..h {
            self.put(0, y, Element::Wall, 0.0);
            self.put(w - 1, y, Element::Wall, 0.0);
        }
    }

    /// Number of cells holding `element`
    pub fn count(&self, element: Element) -> usize {
        self.cells.iter().filter(|&&c| c == element).count()
    }

    /// True when every cell of the outer ring is Wall
    pub fn border_intact(&self) -> bool {
        if self.size == 0 {
            return false;
        }
        let (w, h) = (self.width, self.height);
        (0..w).all(|x| self.cell(x, 0) == Element::Wall && self.cell(x, h - 1) == Element::Wall)
            && (0..h).all(|y| self.cell(0, y) == Element::Wall && self.cell(w - 1, y) == Element::Wall)
    }
}
