//! Uniform shuffle for freshly loaded collections
//!
//! `rand`'s `SliceRandom::shuffle` is a Fisher-Yates shuffle: every
//! permutation is equally likely.

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

/// Shuffle in place with the thread-local RNG
pub fn shuffle<T>(items: &mut [T]) {
    let mut rng = thread_rng();
    shuffle_with(items, &mut rng);
}

/// Shuffle in place with a caller-provided RNG (seeded RNGs for tests)
pub fn shuffle_with<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
