use crate::raw::{BackCursor, Cursor, Exact, Peek, PeekBack};

/// The innermost stage of every chain.
///
/// A leaf bounds a collection by a front and a back position. The positions
/// are represented by the collection's own exact-size iterator, so a leaf
/// can wrap anything from a slice to a linked list, a hash set or an integer
/// range.
///
/// Most callers construct leaves with [`iter`](crate::iter) or
/// [`iter_mut`](crate::iter_mut). `Leaf::new` accepts any exact-size
/// iterator directly.
///
/// Backward traversal (and therefore `reverse`) is available only when the
/// wrapped iterator is double-ended. Peeking is available only when the
/// wrapped iterator can be duplicated, which is the case for read-only
/// traversal but never for mutable traversal.
#[derive(Debug)]
#[must_use = "adapters are lazy and do nothing unless driven by a terminal \
              operation"]
pub struct Leaf<I> {
    positions: I,
    stopped: bool,
}

impl<I: ExactSizeIterator> Leaf<I> {
    /// Create a leaf over the positions of the given iterator.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::{Adapter, Leaf};
    ///
    /// let evens: Vec<u32> = Leaf::new(0u32..10).step_by(2).collect();
    /// assert_eq!(evens, vec![0, 2, 4, 6, 8]);
    /// ```
    pub fn new<T>(positions: T) -> Leaf<I>
    where
        T: IntoIterator<IntoIter = I>,
    {
        Leaf { positions: positions.into_iter(), stopped: false }
    }
}

impl<I: ExactSizeIterator> Cursor for Leaf<I> {
    type Item = I::Item;

    #[inline]
    fn empty(&self) -> bool {
        self.stopped || self.positions.len() == 0
    }

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.stopped {
            return None;
        }
        self.positions.next()
    }

    #[inline]
    fn distance(&self) -> usize {
        if self.stopped {
            0
        } else {
            self.positions.len()
        }
    }

    #[inline]
    fn min_distance(&self) -> usize {
        self.distance()
    }

    fn stop_iteration(&mut self) {
        self.stopped = true;
    }
}

impl<I: ExactSizeIterator + DoubleEndedIterator> BackCursor for Leaf<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        if self.stopped {
            return None;
        }
        self.positions.next_back()
    }
}

impl<I: ExactSizeIterator + Clone> Peek for Leaf<I> {
    #[inline]
    fn get(&mut self) -> Option<I::Item> {
        if self.stopped {
            return None;
        }
        self.positions.clone().next()
    }
}

impl<I> PeekBack for Leaf<I>
where
    I: ExactSizeIterator + DoubleEndedIterator + Clone,
{
    #[inline]
    fn get_back(&mut self) -> Option<I::Item> {
        if self.stopped {
            return None;
        }
        self.positions.clone().next_back()
    }
}

impl<I: ExactSizeIterator> Exact for Leaf<I> {}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, LinkedList};

    use super::Leaf;
    use crate::raw::{BackCursor, Cursor, Peek, PeekBack};

    #[test]
    fn front_and_back() {
        let v = vec![1, 2, 3];
        let mut leaf = Leaf::new(&v);
        assert_eq!(leaf.distance(), 3);
        assert_eq!(leaf.get(), Some(&1));
        assert_eq!(leaf.get_back(), Some(&3));
        assert_eq!(leaf.next(), Some(&1));
        assert_eq!(leaf.next_back(), Some(&3));
        assert_eq!(leaf.distance(), 1);
        assert!(!leaf.empty());
        assert_eq!(leaf.next_back(), Some(&2));
        assert!(leaf.empty());
        assert_eq!(leaf.next(), None);
        assert_eq!(leaf.get(), None);
    }

    #[test]
    fn peeking_does_not_move() {
        let list: LinkedList<&str> = vec!["a", "b"].into_iter().collect();
        let mut leaf = Leaf::new(&list);
        assert_eq!(leaf.get(), Some(&"a"));
        assert_eq!(leaf.get(), Some(&"a"));
        assert_eq!(leaf.get_back(), Some(&"b"));
        assert_eq!(leaf.distance(), 2);
    }

    #[test]
    fn stop_is_permanent() {
        let set: HashSet<u8> = (0..10).collect();
        let mut leaf = Leaf::new(&set);
        leaf.next();
        leaf.stop_iteration();
        assert!(leaf.empty());
        assert_eq!(leaf.distance(), 0);
        assert_eq!(leaf.next(), None);
        assert_eq!(leaf.get(), None);
    }

    #[test]
    fn mutable_positions() {
        let mut v = vec![1, 2, 3];
        {
            let mut leaf = Leaf::new(&mut v);
            *leaf.next().unwrap() *= 10;
            *leaf.next_back().unwrap() *= 100;
        }
        assert_eq!(v, vec![10, 2, 300]);
    }
}
