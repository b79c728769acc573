//! Method syntax for both merge shapes on any [`IntoIterator`].

use std::cmp::Ordering;
use std::ops::ControlFlow;

use orddiff_types::Tag;

use crate::cursor::IterCursor;
use crate::drive::{symmetric_difference_for_each, symmetric_difference_split};
use crate::iter::{symmetric_difference, symmetric_difference_by, OrdCmp, SymDiff};

/// Symmetric difference against another ordered sequence.
///
/// Implemented for every [`IntoIterator`]; `self` is the left input.
pub trait SymmetricDifference: IntoIterator + Sized {
    /// See [`symmetric_difference`].
    fn sym_diff<R>(
        self,
        rhs: R,
    ) -> SymDiff<IterCursor<Self::IntoIter>, IterCursor<R::IntoIter>, OrdCmp<Self::Item>>
    where
        Self::Item: Ord,
        R: IntoIterator<Item = Self::Item>,
    {
        symmetric_difference(self, rhs)
    }

    /// See [`symmetric_difference_by`].
    fn sym_diff_by<R, F>(
        self,
        rhs: R,
        cmp: F,
    ) -> SymDiff<IterCursor<Self::IntoIter>, IterCursor<R::IntoIter>, F>
    where
        R: IntoIterator<Item = Self::Item>,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        symmetric_difference_by(self, rhs, cmp)
    }

    /// See [`symmetric_difference_for_each`].
    fn sym_diff_for_each<R, G>(self, rhs: R, on_item: G) -> ControlFlow<()>
    where
        Self::Item: Ord,
        R: IntoIterator<Item = Self::Item>,
        G: FnMut(Tag<Self::Item>) -> ControlFlow<()>,
    {
        symmetric_difference_for_each(self, rhs, on_item)
    }

    /// See [`symmetric_difference_split`].
    fn sym_diff_split<R, FL, FR>(self, rhs: R, on_left: FL, on_right: FR)
    where
        Self::Item: Ord,
        R: IntoIterator<Item = Self::Item>,
        FL: FnMut(Self::Item),
        FR: FnMut(Self::Item),
    {
        symmetric_difference_split(self, rhs, on_left, on_right)
    }
}

impl<T: IntoIterator> SymmetricDifference for T {}
