//! proptest strategies for ordered inputs.

use proptest::collection::{btree_set, vec};
use proptest::prelude::*;

/// Strictly ascending `i32` vectors of up to `max_len` values in `-100..100`.
pub fn sorted_unique_vec(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    btree_set(-100i32..100, 0..=max_len).prop_map(|set| set.into_iter().collect())
}

/// Two independent ordered inputs.
pub fn sorted_pair(max_len: usize) -> impl Strategy<Value = (Vec<i32>, Vec<i32>)> {
    (sorted_unique_vec(max_len), sorted_unique_vec(max_len))
}

/// Two ordered inputs drawn from a shared universe, so matches are common.
///
/// Each of `0..n` lands in left only, right only, both, or neither.
pub fn overlapping_pair(max_len: usize) -> impl Strategy<Value = (Vec<i32>, Vec<i32>)> {
    vec((any::<bool>(), any::<bool>()), 0..=max_len).prop_map(|membership| {
        let mut left = Vec::new();
        let mut right = Vec::new();
        for (value, (in_left, in_right)) in (0i32..).zip(membership) {
            if in_left {
                left.push(value);
            }
            if in_right {
                right.push(value);
            }
        }
        (left, right)
    })
}

/// Arbitrary, possibly unsorted and duplicated, input.
pub fn unordered_vec(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    vec(-20i32..20, 0..=max_len)
}
