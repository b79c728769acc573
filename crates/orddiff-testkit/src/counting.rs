//! Observe how many values a consumer pulled from a source.

use std::cell::Cell;
use std::rc::Rc;

/// Shared view of a [`CountingIter`]'s tally.
#[derive(Clone, Debug, Default)]
pub struct PullCounter(Rc<Cell<usize>>);

impl PullCounter {
    /// Values delivered so far. End-of-sequence signals are not counted.
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

/// Iterator adapter that counts every value it yields.
#[derive(Debug)]
pub struct CountingIter<I> {
    inner: I,
    counter: PullCounter,
}

impl<I: Iterator> Iterator for CountingIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let item = self.inner.next();
        if item.is_some() {
            self.counter.0.set(self.counter.0.get() + 1);
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Wrap `source` and return the adapter together with its counter.
pub fn counted<S: IntoIterator>(source: S) -> (CountingIter<S::IntoIter>, PullCounter) {
    let counter = PullCounter::default();
    let iter = CountingIter {
        inner: source.into_iter(),
        counter: counter.clone(),
    };
    (iter, counter)
}
