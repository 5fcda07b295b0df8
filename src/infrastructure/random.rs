//! # Random Source
//!
//! Production `RandomSource` backed by `rand`'s thread-local generator.

use rand::Rng;

use crate::domain::traits::RandomSource;

/// Uniform choice through `rand::rng()`. Holds no state, so it is `Send` even
/// though the thread-local generator itself is not.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        rand::rng().random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_stays_in_range() {
        let mut source = ThreadRngSource;
        for len in 1..20 {
            for _ in 0..50 {
                assert!(source.pick_index(len) < len);
            }
        }
    }

    #[test]
    fn test_degenerate_lengths() {
        let mut source = ThreadRngSource;
        assert_eq!(source.pick_index(1), 0);
        assert_eq!(source.pick_index(0), 0);
    }
}
