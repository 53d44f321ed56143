use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seedable random source for bot decisions. All game randomness goes
/// through this wrapper so a fixed seed replays the same choices.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform choice from a slice, `None` when it is empty.
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        items.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_from_empty_slice_returns_none() {
        let mut rng = SessionRng::new(1);
        let empty: [usize; 0] = [];
        assert_eq!(rng.choose(&empty), None);
    }

    #[test]
    fn test_choose_returns_element_from_slice() {
        let mut rng = SessionRng::new(42);
        let items = [3usize, 5, 7];
        for _ in 0..20 {
            let picked = rng.choose(&items).unwrap();
            assert!(items.contains(&picked));
        }
    }

    #[test]
    fn test_same_seed_gives_same_sequence() {
        let items: Vec<usize> = (0..100).collect();
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        for _ in 0..10 {
            assert_eq!(a.choose(&items), b.choose(&items));
        }
    }
}
