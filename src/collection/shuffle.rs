//! Random permutation with a caller-supplied entropy source.
//!
//! [`shuffle`] and [`shuffled`] never reach for global randomness; pass a
//! seeded generator to get a reproducible permutation. The `*_default`
//! variants use the thread-local generator and are meant for the outermost
//! layer of an application.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::shape::Sequence;

/// Randomly permutes `elements` in place.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::collection::shuffle;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let mut first = vec![1, 2, 3, 4, 5];
/// let mut second = first.clone();
/// shuffle(&mut first, &mut SmallRng::seed_from_u64(7));
/// shuffle(&mut second, &mut SmallRng::seed_from_u64(7));
/// assert_eq!(first, second);
/// ```
pub fn shuffle<T, R>(elements: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    elements.shuffle(rng);
}

/// Returns the elements of `sequence` in a random order, leaving
/// `sequence` untouched.
pub fn shuffled<S, R>(sequence: &S, rng: &mut R) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    R: Rng + ?Sized,
{
    let mut elements: Vec<S::Item> = sequence.elements().collect();
    elements.shuffle(rng);
    elements
}

/// [`shuffle`] with the thread-local generator.
pub fn shuffle_default<T>(elements: &mut [T]) {
    log::trace!("shuffle_default: using the thread-local generator");
    shuffle(elements, &mut rand::thread_rng());
}

/// [`shuffled`] with the thread-local generator.
pub fn shuffled_default<S>(sequence: &S) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
{
    log::trace!("shuffled_default: using the thread-local generator");
    shuffled(sequence, &mut rand::thread_rng())
}
