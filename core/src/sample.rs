//! Pure helpers for drawing and scoring cell picks.

use alloc::vec::Vec;
use rand::Rng;
use rand::RngExt;

/// Draws `min(count, source.len())` distinct elements uniformly at random,
/// without replacement and without mutating `source`.
pub fn sample_without_replacement<T, R>(rng: &mut R, source: &[T], count: usize) -> Vec<T>
where
    T: Copy,
    R: Rng + ?Sized,
{
    let mut pool = source.to_vec();
    let take = count.min(pool.len());
    let mut sample = Vec::with_capacity(take);
    for _ in 0..take {
        let index = rng.random_range(0..pool.len());
        sample.push(pool.swap_remove(index));
    }
    sample
}

/// Splits `subject` into how many of its elements are and are not members of
/// `reference`. Repeated subject elements each count on their own.
pub fn cross_counts<T: PartialEq>(subject: &[T], reference: &[T]) -> (usize, usize) {
    let mut matches = 0;
    let mut misses = 0;
    for item in subject {
        if reference.contains(item) {
            matches += 1;
        } else {
            misses += 1;
        }
    }
    (matches, misses)
}
