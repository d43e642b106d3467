//! Unbiased permutation primitive shared by draws and grouping

use rand::Rng;
use rand::seq::SliceRandom;

/// Return a uniformly shuffled copy of `items`, leaving the input untouched
pub fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    shuffled_with(items, &mut rand::thread_rng())
}

/// Shuffle with a caller-supplied generator
///
/// `SliceRandom::shuffle` is a Fisher-Yates pass, so every one of the n!
/// orderings is equally likely and the cost is O(n).
pub fn shuffled_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut output = items.to_vec();
    output.shuffle(rng);
    output
}
