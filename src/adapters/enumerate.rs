use crate::raw::{BackCursor, Cursor, Exact, Peek, PeekBack};

/// A chain that pairs each element with its 0-based position.
///
/// Positions are counted from the front. When driven from the back, the
/// position of an element is derived from the front counter and the
/// remaining distance, so every element receives the same position no
/// matter which end produced it. Backward traversal therefore requires an
/// upstream with an exact distance.
///
/// This is constructed by [`Adapter::enumerate`](crate::Adapter::enumerate).
#[derive(Debug)]
#[must_use = "adapters are lazy and do nothing unless driven by a terminal \
              operation"]
pub struct Enumerate<I> {
    inner: I,
    count: usize,
}

impl<I> Enumerate<I> {
    pub(crate) fn new(inner: I) -> Enumerate<I> {
        Enumerate { inner, count: 0 }
    }
}

impl<I: Cursor> Cursor for Enumerate<I> {
    type Item = (usize, I::Item);

    #[inline]
    fn empty(&self) -> bool {
        self.inner.empty()
    }

    #[inline]
    fn next(&mut self) -> Option<(usize, I::Item)> {
        let item = self.inner.next()?;
        let i = self.count;
        self.count += 1;
        Some((i, item))
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

impl<I: BackCursor + Exact> BackCursor for Enumerate<I> {
    #[inline]
    fn next_back(&mut self) -> Option<(usize, I::Item)> {
        let item = self.inner.next_back()?;
        // Everything still between the front and the element taken here
        // comes before it.
        Some((self.count + self.inner.distance(), item))
    }
}

impl<I: Peek> Peek for Enumerate<I> {
    fn get(&mut self) -> Option<(usize, I::Item)> {
        Some((self.count, self.inner.get()?))
    }
}

impl<I: PeekBack + Exact> PeekBack for Enumerate<I> {
    fn get_back(&mut self) -> Option<(usize, I::Item)> {
        let item = self.inner.get_back()?;
        Some((self.count + self.inner.distance() - 1, item))
    }
}

impl<I: Exact> Exact for Enumerate<I> {}
