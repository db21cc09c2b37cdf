//! In-place Fisher–Yates shuffling.

use rand::Rng;

/// Shuffle `items` in place with a uniform random permutation and return it
/// for chaining.
///
/// Walks from the last index down to 1, swapping each position with one
/// picked uniformly from `0..=i`. Not suitable where an adversary could
/// predict the generator.
pub fn shuffle<'a, T, R>(items: &'a mut [T], rng: &mut R) -> &'a mut [T]
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
    items
}
