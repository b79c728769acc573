//! Opt-in check of the ordering contract.
//!
//! The merge itself never validates its inputs: an unsorted or duplicated
//! input still terminates, it just does not yield the true symmetric
//! difference. Callers that cannot vouch for their inputs run these checks
//! first, at the cost of an extra pass.

use std::cmp::Ordering;

use orddiff_types::{OrderError, OrderResult};

/// Verify that `seq` is strictly ascending under [`Ord`].
///
/// Returns the number of elements on success.
pub fn check_strictly_ascending<I>(seq: I) -> OrderResult<usize>
where
    I: IntoIterator,
    I::Item: Ord,
{
    check_strictly_ascending_by(seq, Ord::cmp)
}

/// Verify that `seq` is strictly ascending under `cmp`.
pub fn check_strictly_ascending_by<I, F>(seq: I, mut cmp: F) -> OrderResult<usize>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    let mut iter = seq.into_iter();
    let Some(mut prev) = iter.next() else {
        return Ok(0);
    };

    let mut position = 1;
    for item in iter {
        match cmp(&prev, &item) {
            Ordering::Less => {}
            Ordering::Equal => return Err(OrderError::Duplicate { position }),
            Ordering::Greater => return Err(OrderError::NotAscending { position }),
        }
        prev = item;
        position += 1;
    }

    Ok(position)
}
