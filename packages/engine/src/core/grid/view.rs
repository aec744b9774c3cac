use super::*;

/// Read-only snapshot handed to renderers. Borrowing the grid immutably
/// means no `step`/`place` can run while a view is alive.
#[derive(Clone, Copy)]
pub struct GridView<'a> {
    grid: &'a Grid,
}

impl<'a> GridView<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    #[inline]
    pub fn width(&self) -> u32 { self.grid.width() }

    #[inline]
    pub fn height(&self) -> u32 { self.grid.height() }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Element> {
        self.grid.get(x, y)
    }

    #[inline]
    pub fn timer(&self, x: i32, y: i32) -> Option<f32> {
        self.grid.timer(x, y)
    }

    pub fn cells(&self) -> &'a [Element] {
        &self.grid.cells
    }

    pub fn timers(&self) -> &'a [f32] {
        &self.grid.timers
    }

    pub fn count(&self, element: Element) -> usize {
        self.grid.count(element)
    }

    pub fn border_intact(&self) -> bool {
        self.grid.border_intact()
    }

    /// Owned copy, for callers that must outlive the borrow
    pub fn to_grid(&self) -> Grid {
        self.grid.clone()
    }
}
