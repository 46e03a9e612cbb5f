use std::iter::FusedIterator;

use crate::adapters::{
    Boxed, Chain, Enumerate, ExactBoxed, Filter, Map, Reverse, Skip, StepBy,
    Take, Zip,
};
use crate::leaf::Leaf;
use crate::raw::{BackCursor, Cursor, Exact};

/// An ordinary iterator that drives a chain.
///
/// Every chain implements `IntoIterator`, which makes it usable in `for`
/// loops and with the combinators of `std::iter`. The resulting iterator is
/// double-ended when the chain is, and exact-size when the chain's distance
/// is exact.
///
/// # Example
///
/// ```rust
/// use lazyseq::{iter, Adapter};
///
/// let nums = vec![1, 2, 3, 4];
/// let mut seen = vec![];
/// for (i, x) in iter(&nums).skip(1).enumerate() {
///     seen.push(i as i32 * 10 + x);
/// }
/// assert_eq!(seen, vec![2, 13, 24]);
/// ```
#[derive(Debug)]
pub struct IntoIter<A> {
    chain: A,
}

impl<A: Cursor> Iterator for IntoIter<A> {
    type Item = A::Item;

    #[inline]
    fn next(&mut self) -> Option<A::Item> {
        self.chain.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.chain.min_distance(), Some(self.chain.distance()))
    }
}

impl<A: BackCursor> DoubleEndedIterator for IntoIter<A> {
    #[inline]
    fn next_back(&mut self) -> Option<A::Item> {
        self.chain.next_back()
    }
}

impl<A: Exact> ExactSizeIterator for IntoIter<A> {
    #[inline]
    fn len(&self) -> usize {
        self.chain.distance()
    }
}

impl<A: Cursor> FusedIterator for IntoIter<A> {}

macro_rules! into_iter {
    ($([$($param:tt)*] $ty:ty, [$($bound:tt)*];)*) => {$(
        impl<$($param)*> IntoIterator for $ty where $($bound)* {
            type Item = <$ty as Cursor>::Item;
            type IntoIter = IntoIter<$ty>;

            fn into_iter(self) -> IntoIter<$ty> {
                IntoIter { chain: self }
            }
        }
    )*}
}

into_iter! {
    [I] Leaf<I>, [I: ExactSizeIterator];
    [A, B] Chain<A, B>, [A: Cursor, B: Cursor<Item = A::Item>];
    [A, B] Zip<A, B>, [A: Cursor, B: Cursor];
    [I] Enumerate<I>, [I: Cursor];
    [I, P] Filter<I, P>, [I: Cursor, P: FnMut(&I::Item) -> bool];
    [B, I, F] Map<I, F>, [I: Cursor, F: FnMut(I::Item) -> B];
    [I] Reverse<I>, [I: BackCursor];
    [I] Skip<I>, [I: Cursor];
    [I] StepBy<I>, [I: Cursor];
    [I] Take<I>, [I: Cursor];
    ['a, T] Boxed<'a, T>, [T: 'a];
    ['a, T] ExactBoxed<'a, T>, [T: 'a];
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::{iter, Adapter};

    #[test]
    fn std_combinators() {
        let v = vec![3, 1, 2];
        let sum: i32 = iter(&v).map(|&x| x).into_iter().sum();
        assert_eq!(sum, 6);
        let max = iter(&v).into_iter().max();
        assert_eq!(max, Some(&3));
    }

    #[test]
    fn exact_len() {
        let v = vec![1, 2, 3, 4, 5];
        assert_eq!(iter(&v).skip(1).take(3).into_iter().len(), 3);
        assert_eq!(iter(&v).step_by(2).into_iter().len(), 3);
        assert_eq!(iter(&v).chain(iter(&v)).into_iter().len(), 10);
    }

    #[test]
    fn exact_size_hint() {
        let v = vec![1, 2, 3, 4, 5];
        assert_eq!(iter(&v).into_iter().size_hint(), (5, Some(5)));
        let mut it = iter(&v).skip(1).step_by(2).into_iter();
        assert_eq!(it.size_hint(), (2, Some(2)));
        it.next_back();
        assert_eq!(it.size_hint(), (1, Some(1)));
        let zipped = iter(&v).zip(iter(&v).take(2)).into_iter();
        assert_eq!(zipped.size_hint(), (2, Some(2)));
    }

    #[test]
    fn filtered_size_hint_brackets_count() {
        let v = vec![1, 2, 3, 4, 5, 6];
        let it = iter(&v).filter(|x| **x % 2 == 0).into_iter();
        let (lower, upper) = it.size_hint();
        assert_eq!(lower, 1);
        assert_eq!(upper, Some(5));
        assert_eq!(it.count(), 3);
        let none = iter(&v).filter(|x| **x > 10).into_iter();
        assert_eq!(none.size_hint(), (0, Some(0)));
    }

    #[test]
    fn forward_only_sources_iterate() {
        let set: HashSet<u32> = (0..20).collect();
        let mut got: Vec<u32> = vec![];
        for x in iter(&set).filter(|x| **x >= 10) {
            got.push(*x);
        }
        got.sort();
        assert_eq!(got, (10..20).collect::<Vec<u32>>());
    }

    #[test]
    fn fused() {
        let v = vec![1];
        let mut it = iter(&v).into_iter();
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
