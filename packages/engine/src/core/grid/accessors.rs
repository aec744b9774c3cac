use super::*;

impl Grid {
    // === Bounds-checked access (external callers) ===
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Element> {
        if !self.in_bounds(x, y) { return None; }
        Some(self.cells[self.index(x as u32, y as u32)])
    }

    #[inline]
    pub fn timer(&self, x: i32, y: i32) -> Option<f32> {
        if !self.in_bounds(x, y) { return None; }
        Some(self.timers[self.index(x as u32, y as u32)])
    }

    /// Out-of-bounds cells are never empty, so movement can't leave the grid
    #[inline]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(Element::Empty)
    }

    // === Coordinate access (caller guarantees bounds) ===
    #[inline]
    pub fn cell(&self, x: u32, y: u32) -> Element {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn put(&mut self, x: u32, y: u32, element: Element, timer: f32) {
        let idx = self.index(x, y);
        self.put_idx(idx, element, timer);
    }

    // === Index access ===
    #[inline]
    pub fn cell_idx(&self, idx: usize) -> Element {
        self.cells[idx]
    }

    #[inline]
    pub fn timer_idx(&self, idx: usize) -> f32 {
        self.timers[idx]
    }

    #[inline]
    pub fn put_idx(&mut self, idx: usize, element: Element, timer: f32) {
        self.cells[idx] = element;
        self.timers[idx] = timer;
    }

    #[inline]
    pub fn set_timer_idx(&mut self, idx: usize, timer: f32) {
        self.timers[idx] = timer;
    }
}
