//! Unordered symmetric difference by hash membership.
//!
//! `(A \ B) ∪ (B \ A)` with no ordering assumption. This is the reference
//! the ordered merge is checked against, and its comparison point in the
//! benchmarks.

use std::collections::HashSet;
use std::hash::Hash;

use orddiff_types::Tag;

/// Values present in exactly one of `left` and `right`.
pub fn hash_symmetric_difference<T>(left: &[T], right: &[T]) -> HashSet<T>
where
    T: Eq + Hash + Clone,
{
    let left: HashSet<&T> = left.iter().collect();
    let right: HashSet<&T> = right.iter().collect();
    left.symmetric_difference(&right).map(|v| (*v).clone()).collect()
}

/// Tagged reference output, sorted by value.
///
/// For valid inputs this is exactly what the ordered merge must emit.
pub fn reference_tags<T>(left: &[T], right: &[T]) -> Vec<Tag<T>>
where
    T: Ord + Hash + Clone,
{
    let left_set: HashSet<&T> = left.iter().collect();
    let right_set: HashSet<&T> = right.iter().collect();

    let mut out: Vec<Tag<T>> = left
        .iter()
        .filter(|v| !right_set.contains(v))
        .map(|v| Tag::Left(v.clone()))
        .chain(
            right
                .iter()
                .filter(|v| !left_set.contains(v))
                .map(|v| Tag::Right(v.clone())),
        )
        .collect();
    out.sort_by(|a, b| a.as_inner().cmp(b.as_inner()));
    out
}
