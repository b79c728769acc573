//! Single-pass pull handles over ordered input.

use std::iter::Fuse;

/// A one-directional pull handle over an ordered sequence.
///
/// Implementations must satisfy these invariants:
/// - A value is delivered at most once; there is no rewind.
/// - Once `pull` returns `None` it returns `None` on every later call.
pub trait Cursor {
    type Item;

    /// Pull the next value, or `None` at the end of the sequence.
    fn pull(&mut self) -> Option<Self::Item>;

    /// Bounds on the number of values still to be pulled.
    ///
    /// Same contract as [`Iterator::size_hint`]. The default knows nothing.
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn pull(&mut self) -> Option<Self::Item> {
        (**self).pull()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }
}

/// Cursor over any [`Iterator`].
///
/// The iterator is fused, so exhaustion is idempotent even when the
/// underlying iterator would resume after returning `None`.
#[derive(Clone, Debug)]
pub struct IterCursor<I> {
    inner: Fuse<I>,
}

impl<I: Iterator> IterCursor<I> {
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            inner: source.into_iter().fuse(),
        }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    #[inline]
    fn pull(&mut self) -> Option<I::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
