//! RNG module - deterministic uniform choices for new pieces
//!
//! Each new piece picks its family, initial rotation and colour uniformly at
//! random. A small seeded LCG keeps games reproducible for tests and replays
//! of a given seed.

/// 32-bit linear congruential generator (Numerical Recipes parameters).
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Seed 0 is treated as 1.
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u32(&mut self) -> u32 {
        // state = 1664525 * state + 1013904223 (mod 2^32)
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform-ish value in `0..max`, taken from the high bits (the low bits
    /// of an LCG have short periods).
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Pick one element of a non-empty slice uniformly.
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.next_range(items.len() as u32) as usize]
    }

    /// Current internal state (a seed that continues this sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SimpleRng::new(2718);
        let mut b = SimpleRng::new(2718);
        let xs: Vec<u32> = (0..64).map(|_| a.next_u32()).collect();
        let ys: Vec<u32> = (0..64).map(|_| b.next_u32()).collect();
        assert_eq!(xs, ys);
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_first_step_matches_recurrence() {
        let mut rng = SimpleRng::new(1);
        assert_eq!(rng.next_u32(), 1664525u32.wrapping_add(1013904223));
    }

    #[test]
    fn test_rng_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
            assert_eq!(rng.next_range(1), 0);
        }
    }

    #[test]
    fn test_next_range_reaches_every_value() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[rng.next_range(7) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_choose_returns_member() {
        let mut rng = SimpleRng::new(3);
        let items = [10, 20, 30];
        for _ in 0..50 {
            assert!(items.contains(&rng.choose(&items)));
        }
    }
}
