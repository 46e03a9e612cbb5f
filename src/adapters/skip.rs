use crate::raw::{self, BackCursor, Cursor, Exact, Peek, PeekBack};

/// A chain that drops a number of leading elements.
///
/// The elements are discarded eagerly when the adapter is constructed.
/// Afterwards every primitive passes straight through to the upstream.
///
/// This is constructed by [`Adapter::skip`](crate::Adapter::skip).
#[derive(Debug)]
#[must_use = "adapters are lazy and do nothing unless driven by a terminal \
              operation"]
pub struct Skip<I> {
    inner: I,
}

impl<I: Cursor> Skip<I> {
    pub(crate) fn new(mut inner: I, n: usize) -> Skip<I> {
        let skipped = raw::advance_by(&mut inner, n);
        tracing::trace!(requested = n, skipped, "skip discarded elements");
        Skip { inner }
    }
}

impl<I: Cursor> Cursor for Skip<I> {
    type Item = I::Item;

    #[inline]
    fn empty(&self) -> bool {
        self.inner.empty()
    }

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.inner.next()
    }

    #[inline]
    fn distance(&self) -> usize {
        self.inner.distance()
    }

    #[inline]
    fn min_distance(&self) -> usize {
        self.inner.min_distance()
    }

    fn stop_iteration(&mut self) {
        self.inner.stop_iteration();
    }
}

impl<I: BackCursor> BackCursor for Skip<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        self.inner.next_back()
    }
}

impl<I: Peek> Peek for Skip<I> {
    fn get(&mut self) -> Option<I::Item> {
        self.inner.get()
    }
}

impl<I: PeekBack> PeekBack for Skip<I> {
    fn get_back(&mut self) -> Option<I::Item> {
        self.inner.get_back()
    }
}

impl<I: Exact> Exact for Skip<I> {}
