//! Collection helpers that never touch their input.

use std::collections::HashSet;
use std::hash::Hash;

use rand::seq::SliceRandom;
use rand::Rng;

/// Distinct elements of `items` in order of first appearance.
pub fn deduplicate<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// A uniformly shuffled copy of `items`, drawn from the thread-local RNG.
pub fn shuffle_copy<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_copy_with(items, &mut rand::thread_rng())
}

/// A uniformly shuffled copy of `items` using the supplied RNG.
pub fn shuffle_copy_with<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
