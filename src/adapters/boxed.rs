use std::fmt;

use crate::raw::{BackCursor, Cursor, Exact};

/// A double-ended chain whose concrete stage types have been erased.
///
/// Every composition step changes the type of a chain, which makes it
/// impossible to assemble a pipeline whose shape is only known at runtime
/// (for example, from command line arguments). Boxing a chain gives every
/// such pipeline the same type, at the cost of one dynamic call per
/// primitive.
///
/// The distance of a boxed chain is treated as an upper bound, so it cannot
/// be enumerated or stepped from the back. See [`ExactBoxed`] for chains
/// whose distance is exact.
///
/// This is constructed by [`Adapter::boxed`](crate::Adapter::boxed).
#[must_use = "adapters are lazy and do nothing unless driven by a terminal \
              operation"]
pub struct Boxed<'a, T> {
    inner: Box<dyn BackCursor<Item = T> + 'a>,
}

impl<'a, T> Boxed<'a, T> {
    pub(crate) fn new<C>(inner: C) -> Boxed<'a, T>
    where
        C: BackCursor<Item = T> + 'a,
    {
        Boxed { inner: Box::new(inner) }
    }
}

impl<'a, T> Cursor for Boxed<'a, T> {
    type Item = T;

    #[inline]
    fn empty(&self) -> bool {
        self.inner.empty()
    }

    #[inline]
    fn next(&mut self) -> Option<T> {
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

impl<'a, T> BackCursor for Boxed<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<'a, T> fmt::Debug for Boxed<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Boxed")
            .field("distance", &self.inner.distance())
            .finish()
    }
}

trait ExactBackCursor: BackCursor + Exact {}

impl<C: BackCursor + Exact> ExactBackCursor for C {}

/// A double-ended chain with an exact distance whose concrete stage types
/// have been erased.
///
/// Unlike [`Boxed`], this keeps the guarantee that the distance is exact, so
/// the result can still be enumerated or stepped from the back. Chains that
/// contain a `filter` cannot be erased this way.
///
/// This is constructed by
/// [`Adapter::boxed_exact`](crate::Adapter::boxed_exact).
#[must_use = "adapters are lazy and do nothing unless driven by a terminal \
              operation"]
pub struct ExactBoxed<'a, T> {
    inner: Box<dyn ExactBackCursor<Item = T> + 'a>,
}

impl<'a, T> ExactBoxed<'a, T> {
    pub(crate) fn new<C>(inner: C) -> ExactBoxed<'a, T>
    where
        C: BackCursor<Item = T> + Exact + 'a,
    {
        ExactBoxed { inner: Box::new(inner) }
    }
}

impl<'a, T> Cursor for ExactBoxed<'a, T> {
    type Item = T;

    #[inline]
    fn empty(&self) -> bool {
        self.inner.empty()
    }

    #[inline]
    fn next(&mut self) -> Option<T> {
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

impl<'a, T> BackCursor for ExactBoxed<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<'a, T> Exact for ExactBoxed<'a, T> {}

impl<'a, T> fmt::Debug for ExactBoxed<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExactBoxed")
            .field("distance", &self.inner.distance())
            .finish()
    }
}
