use std::fmt;

use crate::raw::{BackCursor, Cursor, Exact, Peek, PeekBack};

/// A chain that transforms every element with a closure.
///
/// The closure is applied to whatever the upstream produces, from either
/// end, including peeked elements. No elements are buffered.
///
/// This is constructed by [`Adapter::map`](crate::Adapter::map).
#[must_use = "adapters are lazy and do nothing unless driven by a terminal \
              operation"]
pub struct Map<I, F> {
    inner: I,
    f: F,
}

impl<I, F> Map<I, F> {
    pub(crate) fn new(inner: I, f: F) -> Map<I, F> {
        Map { inner, f }
    }
}

impl<B, I: Cursor, F: FnMut(I::Item) -> B> Cursor for Map<I, F> {
    type Item = B;

    #[inline]
    fn empty(&self) -> bool {
        self.inner.empty()
    }

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.inner.next().map(&mut self.f)
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

impl<B, I: BackCursor, F: FnMut(I::Item) -> B> BackCursor for Map<I, F> {
    #[inline]
    fn next_back(&mut self) -> Option<B> {
        self.inner.next_back().map(&mut self.f)
    }
}

impl<B, I: Peek, F: FnMut(I::Item) -> B> Peek for Map<I, F> {
    fn get(&mut self) -> Option<B> {
        self.inner.get().map(&mut self.f)
    }
}

impl<B, I: PeekBack, F: FnMut(I::Item) -> B> PeekBack for Map<I, F> {
    fn get_back(&mut self) -> Option<B> {
        self.inner.get_back().map(&mut self.f)
    }
}

impl<B, I: Exact, F: FnMut(I::Item) -> B> Exact for Map<I, F> {}

impl<I: fmt::Debug, F> fmt::Debug for Map<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("inner", &self.inner).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{iter, Adapter};

    #[test]
    fn changes_type() {
        let v = vec![1, 2, 3];
        let got: Vec<String> = iter(&v).map(|x| x.to_string()).collect();
        assert_eq!(got, vec!["1", "2", "3"]);
    }

    #[test]
    fn applies_at_both_ends() {
        let v = vec![1, 2, 3];
        let got: Vec<i32> = iter(&v).map(|&x| x * x).reverse().collect();
        assert_eq!(got, vec![9, 4, 1]);
    }

    #[test]
    fn stateful_closure_sees_traversal_order() {
        let v = vec![5, 6, 7];
        let mut seen = vec![];
        let count = iter(&v)
            .map(|&x| {
                seen.push(x);
                x
            })
            .reverse()
            .count();
        assert_eq!(count, 3);
        assert_eq!(seen, vec![7, 6, 5]);
    }
}
