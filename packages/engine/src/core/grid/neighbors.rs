use super::*;

/// Moore neighborhood, row-major around the center
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

impl Grid {
    /// Count Moore neighbors holding `element`. Cells outside the array are
    /// skipped, never counted.
    pub fn count_neighbors(&self, x: u32, y: u32, element: Element) -> u8 {
        let (xi, yi) = (x as i32, y as i32);
        let mut count = 0;
        for (dx, dy) in MOORE_OFFSETS {
            if self.get(xi + dx, yi + dy) == Some(element) {
                count += 1;
            }
        }
        count
    }

    /// True if any Moore neighbor holds `element`
    pub fn any_neighbor(&self, x: u32, y: u32, element: Element) -> bool {
        let (xi, yi) = (x as i32, y as i32);
        MOORE_OFFSETS
            .iter()
            .any(|&(dx, dy)| self.get(xi + dx, yi + dy) == Some(element))
    }
}
