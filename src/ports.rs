//! Capabilities injected into the game engine
//!
//! Randomness and id generation sit behind traits so tests can pin the
//! solution word and game ids.

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::Rng;
use uuid::Uuid;

/// Source of uniformly distributed indices.
pub trait RandomSource: Send + Sync {
    /// Return an index in `0..len`. Callers guarantee `len > 0`.
    fn index(&self, len: usize) -> usize;
}

/// Generator of unique game identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Thread-local RNG backed random source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRandom;

impl RandomSource for SystemRandom {
    fn index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// UUID v4 identifiers, 36 characters in hyphenated form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Always picks the same index (wrapped into range).
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub usize);

impl RandomSource for FixedRandom {
    fn index(&self, len: usize) -> usize {
        self.0 % len
    }
}

/// Deterministic UUID-shaped ids: `00000000-0000-0000-0000-000000000001`, ...
#[derive(Debug, Default)]
pub struct SequentialIds(AtomicUsize);

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.0.fetch_add(1, Ordering::Relaxed) + 1;
        Uuid::from_u128(n as u128).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_random_stays_in_range() {
        for len in [1, 2, 5, 100] {
            for _ in 0..50 {
                assert!(SystemRandom.index(len) < len);
            }
        }
    }

    #[test]
    fn uuid_ids_are_36_chars_and_unique() {
        let a = UuidGenerator.next_id();
        let b = UuidGenerator.next_id();

        assert_eq!(a.len(), 36);
        assert_ne!(a, b);
    }

    #[test]
    fn fixed_random_wraps() {
        assert_eq!(FixedRandom(7).index(5), 2);
        assert_eq!(FixedRandom(0).index(3), 0);
    }

    #[test]
    fn sequential_ids_count_up() {
        let ids = SequentialIds::default();
        assert_eq!(ids.next_id(), "00000000-0000-0000-0000-000000000001");
        assert_eq!(ids.next_id(), "00000000-0000-0000-0000-000000000002");
    }
}
