//! Pull-based symmetric difference.
//!
//! [`SymDiff`] is an explicit state machine: two cursors plus a one-slot
//! remainder. Each call to [`Iterator::next`] resumes from that state, runs
//! the merge until it can emit one tagged value, and suspends again.
//!
//! # Invariants
//!
//! - At most one value is pending in the remainder slot.
//! - Every input value is pulled exactly once; a value that loses a
//!   comparison is parked in the remainder, never re-pulled and never lost.
//! - Emitted values are strictly ascending under the comparator, provided
//!   both inputs are.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use orddiff_types::Tag;
use tracing::trace;

use crate::cursor::{Cursor, IterCursor};

/// Comparator used by the `Ord`-based constructors.
pub type OrdCmp<T> = fn(&T, &T) -> Ordering;

/// Lazy symmetric difference of two ordered cursors.
///
/// Created by [`symmetric_difference`], [`symmetric_difference_by`], or
/// directly from cursors with [`SymDiff::new`].
pub struct SymDiff<A, B, F>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    left: A,
    right: B,
    cmp: F,
    /// Value already pulled from one side, deferred to the next step.
    rem: Option<Tag<A::Item>>,
    /// Values discarded because both sides held them.
    matched: usize,
    done: bool,
}

impl<A, B, F> SymDiff<A, B, F>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
    F: FnMut(&A::Item, &A::Item) -> Ordering,
{
    /// Merge two cursors ordered by `cmp`.
    pub fn new(left: A, right: B, cmp: F) -> Self {
        Self {
            left,
            right,
            cmp,
            rem: None,
            matched: 0,
            done: false,
        }
    }

    /// The value carried over from the previous step, if any.
    pub fn remainder(&self) -> Option<&Tag<A::Item>> {
        self.rem.as_ref()
    }

    /// Number of values seen in both inputs so far, and therefore skipped.
    pub fn matched(&self) -> usize {
        self.matched
    }

    /// Consume the iterator and hand back both cursors.
    ///
    /// A pending remainder is dropped with the iterator.
    pub fn into_cursors(self) -> (A, B) {
        (self.left, self.right)
    }
}

impl<A, B> SymDiff<A, B, OrdCmp<A::Item>>
where
    A: Cursor,
    A::Item: Ord,
    B: Cursor<Item = A::Item>,
{
    /// Merge two cursors ordered by [`Ord`].
    pub fn from_cursors(left: A, right: B) -> Self {
        let cmp: OrdCmp<A::Item> = Ord::cmp;
        Self::new(left, right, cmp)
    }
}

impl<A, B, F> Iterator for SymDiff<A, B, F>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
    F: FnMut(&A::Item, &A::Item) -> Ordering,
{
    type Item = Tag<A::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let (mut left, mut right) = match self.rem.take() {
            None => (self.left.pull(), self.right.pull()),
            Some(Tag::Left(v)) => (Some(v), self.right.pull()),
            Some(Tag::Right(v)) => (self.left.pull(), Some(v)),
        };

        loop {
            match (left, right) {
                (Some(l), None) => return Some(Tag::Left(l)),
                (None, Some(r)) => return Some(Tag::Right(r)),
                (Some(l), Some(r)) => match (self.cmp)(&l, &r) {
                    Ordering::Less => {
                        self.rem = Some(Tag::Right(r));
                        return Some(Tag::Left(l));
                    }
                    Ordering::Greater => {
                        self.rem = Some(Tag::Left(l));
                        return Some(Tag::Right(r));
                    }
                    Ordering::Equal => self.matched += 1,
                },
                (None, None) => {
                    self.done = true;
                    trace!(matched = self.matched, "symmetric difference exhausted");
                    return None;
                }
            }

            left = self.left.pull();
            right = self.right.pull();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }

        let (pending_left, pending_right) = match self.rem {
            Some(Tag::Left(_)) => (1, 0),
            Some(Tag::Right(_)) => (0, 1),
            None => (0, 0),
        };
        let (left_min, left_max) = self.left.size_hint();
        let (right_min, right_max) = self.right.size_hint();
        let left_min = left_min.saturating_add(pending_left);
        let right_min = right_min.saturating_add(pending_right);
        let left_max = left_max.and_then(|n| n.checked_add(pending_left));
        let right_max = right_max.and_then(|n| n.checked_add(pending_right));

        // Each match removes one value from each side, so at least the
        // surplus of the longer side survives.
        let min = match (left_max, right_max) {
            (Some(lmax), Some(rmax)) => {
                left_min.saturating_sub(rmax).max(right_min.saturating_sub(lmax))
            }
            (Some(lmax), None) => right_min.saturating_sub(lmax),
            (None, Some(rmax)) => left_min.saturating_sub(rmax),
            (None, None) => 0,
        };
        let max = left_max.and_then(|l| l.checked_add(right_max?));

        (min, max)
    }
}

impl<A, B, F> FusedIterator for SymDiff<A, B, F>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
    F: FnMut(&A::Item, &A::Item) -> Ordering,
{
}

impl<A, B, F> fmt::Debug for SymDiff<A, B, F>
where
    A: Cursor,
    A::Item: fmt::Debug,
    B: Cursor<Item = A::Item>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymDiff")
            .field("rem", &self.rem)
            .field("matched", &self.matched)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

/// Lazy symmetric difference of two strictly ascending sequences.
///
/// The result is single-pass and cannot be restarted. Inputs are not
/// checked; see [`check_strictly_ascending`](crate::check_strictly_ascending).
///
/// ```
/// use orddiff_merge::symmetric_difference;
/// use orddiff_types::Tag;
///
/// let out: Vec<_> = symmetric_difference([1, 2, 4, 5], [1, 3, 4, 5]).collect();
/// assert_eq!(out, vec![Tag::Left(2), Tag::Right(3)]);
/// ```
pub fn symmetric_difference<L, R>(
    left: L,
    right: R,
) -> SymDiff<IterCursor<L::IntoIter>, IterCursor<R::IntoIter>, OrdCmp<L::Item>>
where
    L: IntoIterator,
    L::Item: Ord,
    R: IntoIterator<Item = L::Item>,
{
    SymDiff::from_cursors(IterCursor::new(left), IterCursor::new(right))
}

/// Like [`symmetric_difference`], with both inputs ascending under `cmp`.
pub fn symmetric_difference_by<L, R, F>(
    left: L,
    right: R,
    cmp: F,
) -> SymDiff<IterCursor<L::IntoIter>, IterCursor<R::IntoIter>, F>
where
    L: IntoIterator,
    R: IntoIterator<Item = L::Item>,
    F: FnMut(&L::Item, &L::Item) -> Ordering,
{
    SymDiff::new(IterCursor::new(left), IterCursor::new(right), cmp)
}
