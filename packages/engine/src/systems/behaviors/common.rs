use rand::Rng;

// Offsets are (dx, dy) with y growing downward.

/// up, up-left, up-right
pub const RISE_OFFSETS: [(i32, i32); 3] = [(0, -1), (-1, -1), (1, -1)];

/// left, right
pub const DRIFT_OFFSETS: [(i32, i32); 2] = [(-1, 0), (1, 0)];

/// down, down-left, down-right
pub const FALL_OFFSETS: [(i32, i32); 3] = [(0, 1), (-1, 1), (1, 1)];

/// Uniform random permutation of a small offset table (Fisher-Yates on a
/// stack copy, so nothing allocates per cell).
#[inline]
pub fn shuffled<R: Rng, const N: usize>(offsets: [(i32, i32); N], rng: &mut R) -> [(i32, i32); N] {
    let mut out = offsets;
    for i in (1..N).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..50 {
            let mut out = shuffled(FALL_OFFSETS, &mut rng);
            out.sort();
            let mut expected = FALL_OFFSETS;
            expected.sort();
            assert_eq!(out, expected);
        }
    }

    #[test]
    fn every_order_shows_up() {
        let mut rng = SmallRng::seed_from_u64(6);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..600 {
            seen.insert(shuffled(RISE_OFFSETS, &mut rng));
        }
        assert_eq!(seen.len(), 6);
    }
}
