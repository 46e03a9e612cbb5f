use crate::raw::{BackCursor, Cursor, Exact, Peek, PeekBack};

/// A chain that traverses its upstream from the back.
///
/// Every forward primitive is answered by the corresponding backward
/// primitive of the upstream and vice versa. Only double-ended chains can be
/// reversed.
///
/// This is constructed by [`Adapter::reverse`](crate::Adapter::reverse).
#[derive(Debug)]
#[must_use = "adapters are lazy and do nothing unless driven by a terminal \
              operation"]
pub struct Reverse<I> {
    inner: I,
}

impl<I> Reverse<I> {
    pub(crate) fn new(inner: I) -> Reverse<I> {
        Reverse { inner }
    }
}

impl<I: BackCursor> Cursor for Reverse<I> {
    type Item = I::Item;

    #[inline]
    fn empty(&self) -> bool {
        self.inner.empty()
    }

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.inner.next_back()
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

impl<I: BackCursor> BackCursor for Reverse<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        self.inner.next()
    }
}

impl<I: PeekBack> Peek for Reverse<I> {
    fn get(&mut self) -> Option<I::Item> {
        self.inner.get_back()
    }
}

impl<I: PeekBack> PeekBack for Reverse<I> {
    fn get_back(&mut self) -> Option<I::Item> {
        self.inner.get()
    }
}

impl<I: BackCursor + Exact> Exact for Reverse<I> {}

#[cfg(test)]
mod tests {
    use std::collections::LinkedList;

    use crate::{iter, Adapter};

    #[test]
    fn reverses() {
        let list: LinkedList<char> = "abc".chars().collect();
        let got: String = iter(&list).reverse().collect();
        assert_eq!(got, "cba");
    }

    #[test]
    fn involution() {
        let v = vec![1, 2, 3, 4];
        let got: Vec<&i32> = iter(&v).reverse().reverse().collect();
        assert_eq!(got, vec![&1, &2, &3, &4]);
    }

    #[test]
    fn peeks_swap() {
        let v = vec![1, 2, 3];
        let mut r = iter(&v).reverse();
        assert_eq!(r.peek(), Some(&3));
        assert_eq!(r.peek_back(), Some(&1));
    }
}
