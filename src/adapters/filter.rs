use std::fmt;

use crate::raw::{BackCursor, Cursor, Peek, PeekBack};

/// A chain that only yields the elements satisfying a predicate.
///
/// Failing elements are skipped eagerly: at construction time for the
/// front, before the first backward access for the back, and after every
/// element consumed from either end. As a result, the element at each end of
/// a filter is always one that passed the predicate.
///
/// The passing element at each end is held by the filter itself, which is
/// what allows filtering mutable traversals (where an element can never be
/// read twice).
///
/// Since the number of passing elements between the two ends is unknown
/// until they are visited, the distance of a filter is an upper bound. A
/// filter therefore cannot be enumerated or stepped from the back.
///
/// This is constructed by [`Adapter::filter`](crate::Adapter::filter).
#[must_use = "adapters are lazy and do nothing unless driven by a terminal \
              operation"]
pub struct Filter<I: Cursor, P> {
    inner: I,
    pred: P,
    front: Option<I::Item>,
    back: Option<I::Item>,
}

impl<I, P> Filter<I, P>
where
    I: Cursor,
    P: FnMut(&I::Item) -> bool,
{
    pub(crate) fn new(inner: I, pred: P) -> Filter<I, P> {
        let mut filter = Filter { inner, pred, front: None, back: None };
        filter.front = filter.pull_front();
        filter
    }

    fn pull_front(&mut self) -> Option<I::Item> {
        let mut skipped = 0;
        while let Some(item) = self.inner.next() {
            if (self.pred)(&item) {
                if skipped > 0 {
                    tracing::trace!(skipped, "filter skipped front elements");
                }
                return Some(item);
            }
            skipped += 1;
        }
        None
    }
}

impl<I, P> Filter<I, P>
where
    I: BackCursor,
    P: FnMut(&I::Item) -> bool,
{
    fn pull_back(&mut self) -> Option<I::Item> {
        let mut skipped = 0;
        while let Some(item) = self.inner.next_back() {
            if (self.pred)(&item) {
                if skipped > 0 {
                    tracing::trace!(skipped, "filter skipped back elements");
                }
                return Some(item);
            }
            skipped += 1;
        }
        None
    }

    /// Makes sure the back slot holds the last passing element, if there is
    /// one that the front slot doesn't already hold.
    fn prime_back(&mut self) {
        if self.back.is_none() {
            self.back = self.pull_back();
        }
    }
}

impl<I, P> Cursor for Filter<I, P>
where
    I: Cursor,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    // When the front slot is empty the upstream has been drained, so at most
    // the back slot is left.
    #[inline]
    fn empty(&self) -> bool {
        self.front.is_none() && self.back.is_none()
    }

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        let item = match self.front.take() {
            Some(item) => item,
            None => return self.back.take(),
        };
        self.front = self.pull_front();
        Some(item)
    }

    #[inline]
    fn distance(&self) -> usize {
        self.inner.distance() + self.min_distance()
    }

    // Only the elements already held in the slots are known to pass.
    #[inline]
    fn min_distance(&self) -> usize {
        self.front.is_some() as usize + self.back.is_some() as usize
    }

    fn stop_iteration(&mut self) {
        self.front = None;
        self.back = None;
        self.inner.stop_iteration();
    }
}

impl<I, P> BackCursor for Filter<I, P>
where
    I: BackCursor,
    P: FnMut(&I::Item) -> bool,
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        self.prime_back();
        let item = match self.back.take() {
            Some(item) => item,
            None => return self.front.take(),
        };
        self.back = self.pull_back();
        Some(item)
    }
}

impl<I, P> Peek for Filter<I, P>
where
    I: Cursor,
    I::Item: Clone,
    P: FnMut(&I::Item) -> bool,
{
    fn get(&mut self) -> Option<I::Item> {
        self.front.clone().or_else(|| self.back.clone())
    }
}

impl<I, P> PeekBack for Filter<I, P>
where
    I: BackCursor,
    I::Item: Clone,
    P: FnMut(&I::Item) -> bool,
{
    fn get_back(&mut self) -> Option<I::Item> {
        self.prime_back();
        self.back.clone().or_else(|| self.front.clone())
    }
}

impl<I, P> fmt::Debug for Filter<I, P>
where
    I: Cursor + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("inner", &self.inner)
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}
