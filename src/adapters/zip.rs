use std::cmp;

use crate::raw::{BackCursor, Cursor, Exact, Peek, PeekBack};

/// A chain that pairs up the elements of `A` and `B`.
///
/// The shorter side governs the length. Each end is paired independently:
/// driving from the back pairs the back element of `A` with the back element
/// of `B`, which for sides of unequal length is not the pair that forward
/// traversal would have produced at that index.
///
/// This is constructed by [`Adapter::zip`](crate::Adapter::zip).
#[derive(Debug)]
#[must_use = "adapters are lazy and do nothing unless driven by a terminal \
              operation"]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

impl<A, B> Zip<A, B> {
    pub(crate) fn new(a: A, b: B) -> Zip<A, B> {
        Zip { a, b }
    }
}

impl<A: Cursor, B: Cursor> Cursor for Zip<A, B> {
    type Item = (A::Item, B::Item);

    #[inline]
    fn empty(&self) -> bool {
        self.a.empty() || self.b.empty()
    }

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.empty() {
            return None;
        }
        let x = self.a.next()?;
        let y = self.b.next()?;
        Some((x, y))
    }

    #[inline]
    fn distance(&self) -> usize {
        cmp::min(self.a.distance(), self.b.distance())
    }

    #[inline]
    fn min_distance(&self) -> usize {
        cmp::min(self.a.min_distance(), self.b.min_distance())
    }

    fn stop_iteration(&mut self) {
        self.a.stop_iteration();
        self.b.stop_iteration();
    }
}

impl<A: BackCursor, B: BackCursor> BackCursor for Zip<A, B> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.empty() {
            return None;
        }
        let x = self.a.next_back()?;
        let y = self.b.next_back()?;
        Some((x, y))
    }
}

impl<A: Peek, B: Peek> Peek for Zip<A, B> {
    fn get(&mut self) -> Option<Self::Item> {
        if self.empty() {
            return None;
        }
        Some((self.a.get()?, self.b.get()?))
    }
}

impl<A: PeekBack, B: PeekBack> PeekBack for Zip<A, B> {
    fn get_back(&mut self) -> Option<Self::Item> {
        if self.empty() {
            return None;
        }
        Some((self.a.get_back()?, self.b.get_back()?))
    }
}

impl<A: Exact, B: Exact> Exact for Zip<A, B> {}
