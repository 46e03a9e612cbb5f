use std::cmp;

use crate::raw::{BackCursor, Cursor, Exact, Peek, PeekBack};

/// A chain that yields at most `n` elements.
///
/// Elements are counted at whichever end is being driven. Once `n` elements
/// have been produced, the whole chain upstream is stopped, regardless of
/// how many elements it still had. Note that this means a `Take` driven
/// from the back yields the *last* `n` elements of its upstream.
///
/// This is constructed by [`Adapter::take`](crate::Adapter::take).
#[derive(Debug)]
#[must_use = "adapters are lazy and do nothing unless driven by a terminal \
              operation"]
pub struct Take<I> {
    inner: I,
    remaining: usize,
}

impl<I: Cursor> Take<I> {
    pub(crate) fn new(mut inner: I, n: usize) -> Take<I> {
        if n == 0 {
            tracing::trace!("take(0) stopped its upstream");
            inner.stop_iteration();
        }
        Take { inner, remaining: n }
    }

    fn consumed_one(&mut self) {
        self.remaining -= 1;
        if self.remaining == 0 {
            self.inner.stop_iteration();
        }
    }
}

impl<I: Cursor> Cursor for Take<I> {
    type Item = I::Item;

    #[inline]
    fn empty(&self) -> bool {
        self.remaining == 0 || self.inner.empty()
    }

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.inner.next()?;
        self.consumed_one();
        Some(item)
    }

    #[inline]
    fn distance(&self) -> usize {
        cmp::min(self.remaining, self.inner.distance())
    }

    #[inline]
    fn min_distance(&self) -> usize {
        cmp::min(self.remaining, self.inner.min_distance())
    }

    fn stop_iteration(&mut self) {
        self.remaining = 0;
        self.inner.stop_iteration();
    }
}

impl<I: BackCursor> BackCursor for Take<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.inner.next_back()?;
        self.consumed_one();
        Some(item)
    }
}

impl<I: Peek> Peek for Take<I> {
    fn get(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.inner.get()
    }
}

impl<I: PeekBack> PeekBack for Take<I> {
    fn get_back(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.inner.get_back()
    }
}

impl<I: Exact> Exact for Take<I> {}

#[cfg(test)]
mod tests {
    use crate::{iter, Adapter};

    #[test]
    fn takes_prefix() {
        let v = vec![1, 2, 3, 4];
        let got: Vec<&i32> = iter(&v).take(2).collect();
        assert_eq!(got, vec![&1, &2]);
    }

    #[test]
    fn take_more_than_available() {
        let v = vec![1, 2];
        assert_eq!(iter(&v).take(10).count(), 2);
    }

    #[test]
    fn take_zero_stops_immediately() {
        let v = vec![1, 2];
        let mut t = iter(&v).take(0);
        assert_eq!(t.peek(), None);
        assert_eq!(t.count(), 0);
    }

    #[test]
    fn counts_whichever_end_is_driven() {
        let v = vec![1, 2, 3, 4, 5];
        let got: Vec<&i32> = iter(&v).take(2).reverse().collect();
        assert_eq!(got, vec![&5, &4]);
    }

    #[test]
    fn stops_upstream_when_done() {
        let a = vec![1, 2, 3];
        let b = vec![4];
        // Take stops the first half of the chain; the second half is left
        // untouched.
        let got: Vec<&i32> = iter(&a).take(1).chain(iter(&b)).collect();
        assert_eq!(got, vec![&1, &4]);
    }

    #[test]
    fn window() {
        let v: Vec<u32> = (0..10).collect();
        let got: Vec<&u32> = iter(&v).skip(3).take(4).collect();
        assert_eq!(got, vec![&3, &4, &5, &6]);
    }
}
