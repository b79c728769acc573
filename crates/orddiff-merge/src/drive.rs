//! Push-based symmetric difference.
//!
//! The driver runs the same merge as [`SymDiff`](crate::SymDiff) but as a
//! single local loop: both cursors and the pending values live on the stack
//! for the whole call, and every emitted value is handed to a callback. The
//! callback steers the loop with [`ControlFlow`]; `Break` stops it before any
//! further value is pulled from either cursor.

use std::cmp::Ordering;
use std::ops::ControlFlow;

use orddiff_types::{Side, Tag};
use tracing::debug;

use crate::cursor::{Cursor, IterCursor};

/// Running totals for one traversal, reported when it ends.
#[derive(Default)]
struct Counts {
    emitted: usize,
    matched: usize,
}

/// Merge two cursors ordered by `cmp`, pushing each value of the symmetric
/// difference into `on_item`.
///
/// Returns `Break(())` if `on_item` stopped the traversal, `Continue(())` if
/// both cursors ran dry. Exhausted cursors produce zero callbacks.
pub fn traverse<A, B, F, G>(mut left: A, mut right: B, mut cmp: F, mut on_item: G) -> ControlFlow<()>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
    F: FnMut(&A::Item, &A::Item) -> Ordering,
    G: FnMut(Tag<A::Item>) -> ControlFlow<()>,
{
    let mut counts = Counts::default();
    let mut curr_left = left.pull();
    let mut curr_right = right.pull();

    let flow = loop {
        match (curr_left.take(), curr_right.take()) {
            (None, None) => break ControlFlow::Continue(()),

            (Some(l), None) => {
                counts.emitted += 1;
                if on_item(Tag::Left(l)).is_break() {
                    break ControlFlow::Break(());
                }
                break drain(&mut left, Side::Left, &mut on_item, &mut counts);
            }

            (None, Some(r)) => {
                counts.emitted += 1;
                if on_item(Tag::Right(r)).is_break() {
                    break ControlFlow::Break(());
                }
                break drain(&mut right, Side::Right, &mut on_item, &mut counts);
            }

            (Some(l), Some(r)) => match cmp(&l, &r) {
                Ordering::Less => {
                    counts.emitted += 1;
                    if on_item(Tag::Left(l)).is_break() {
                        break ControlFlow::Break(());
                    }
                    curr_left = left.pull();
                    curr_right = Some(r);
                }
                Ordering::Greater => {
                    counts.emitted += 1;
                    if on_item(Tag::Right(r)).is_break() {
                        break ControlFlow::Break(());
                    }
                    curr_left = Some(l);
                    curr_right = right.pull();
                }
                Ordering::Equal => {
                    counts.matched += 1;
                    curr_left = left.pull();
                    curr_right = right.pull();
                }
            },
        }
    };

    debug!(
        emitted = counts.emitted,
        matched = counts.matched,
        stopped = flow.is_break(),
        "symmetric difference traversal finished"
    );
    flow
}

/// Push the rest of one cursor once the other side has ended.
fn drain<C, G>(cursor: &mut C, side: Side, on_item: &mut G, counts: &mut Counts) -> ControlFlow<()>
where
    C: Cursor,
    G: FnMut(Tag<C::Item>) -> ControlFlow<()>,
{
    while let Some(v) = cursor.pull() {
        counts.emitted += 1;
        if on_item(Tag::new(side, v)).is_break() {
            return ControlFlow::Break(());
        }
    }
    ControlFlow::Continue(())
}

/// Push-based form of [`symmetric_difference`](crate::symmetric_difference).
///
/// `on_item` sees exactly the values the iterator would yield, in the same
/// order, and can stop early by returning `ControlFlow::Break(())`.
///
/// ```
/// use std::ops::ControlFlow;
///
/// use orddiff_merge::symmetric_difference_for_each;
/// use orddiff_types::Tag;
///
/// let mut seen = Vec::new();
/// let _ = symmetric_difference_for_each([1, 3, 5], [2, 3], |tag| {
///     seen.push(tag);
///     ControlFlow::Continue(())
/// });
/// assert_eq!(seen, vec![Tag::Left(1), Tag::Right(2), Tag::Left(5)]);
/// ```
pub fn symmetric_difference_for_each<L, R, G>(left: L, right: R, on_item: G) -> ControlFlow<()>
where
    L: IntoIterator,
    L::Item: Ord,
    R: IntoIterator<Item = L::Item>,
    G: FnMut(Tag<L::Item>) -> ControlFlow<()>,
{
    traverse(IterCursor::new(left), IterCursor::new(right), Ord::cmp, on_item)
}

/// Like [`symmetric_difference_for_each`], with both inputs ascending under `cmp`.
pub fn symmetric_difference_for_each_by<L, R, F, G>(
    left: L,
    right: R,
    cmp: F,
    on_item: G,
) -> ControlFlow<()>
where
    L: IntoIterator,
    R: IntoIterator<Item = L::Item>,
    F: FnMut(&L::Item, &L::Item) -> Ordering,
    G: FnMut(Tag<L::Item>) -> ControlFlow<()>,
{
    traverse(IterCursor::new(left), IterCursor::new(right), cmp, on_item)
}

/// Run the driver to completion with one callback per side.
pub fn symmetric_difference_split<L, R, FL, FR>(left: L, right: R, mut on_left: FL, mut on_right: FR)
where
    L: IntoIterator,
    L::Item: Ord,
    R: IntoIterator<Item = L::Item>,
    FL: FnMut(L::Item),
    FR: FnMut(L::Item),
{
    let _ = symmetric_difference_for_each(left, right, |tag| {
        match tag {
            Tag::Left(v) => on_left(v),
            Tag::Right(v) => on_right(v),
        }
        ControlFlow::Continue(())
    });
}

/// Run the driver with a fallible callback.
///
/// The first error stops the traversal and is returned.
pub fn try_symmetric_difference_for_each<L, R, G, E>(left: L, right: R, mut on_item: G) -> Result<(), E>
where
    L: IntoIterator,
    L::Item: Ord,
    R: IntoIterator<Item = L::Item>,
    G: FnMut(Tag<L::Item>) -> Result<(), E>,
{
    let mut failure = None;
    let _ = symmetric_difference_for_each(left, right, |tag| match on_item(tag) {
        Ok(()) => ControlFlow::Continue(()),
        Err(e) => {
            failure = Some(e);
            ControlFlow::Break(())
        }
    });
    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
