//! Utilities.
use itertools::Itertools;
use ordered_float::OrderedFloat;
use rand::{seq::SliceRandom, Rng};

/// Index of a maximum of `values`, ties broken uniformly at random.
///
/// Returns `0` for an empty slice.
pub fn argmax<R: Rng + ?Sized>(values: &[f32], rng: &mut R) -> usize {
    argmax_where(values, |_| true, rng).unwrap_or_default()
}

/// Index of a maximum of `values` among the indices accepted by `include`,
/// ties broken uniformly at random. Returns `None` if no index is accepted.
pub fn argmax_where<R, F>(values: &[f32], include: F, rng: &mut R) -> Option<usize>
where
    R: Rng + ?Sized,
    F: FnMut(&usize) -> bool,
{
    (0..values.len())
        .filter(include)
        .max_set_by_key(|&ix| OrderedFloat(values[ix]))
        .choose(rng)
        .copied()
}
