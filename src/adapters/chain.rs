use crate::raw::{BackCursor, Cursor, Exact, Peek, PeekBack};

/// A chain that yields every element of `A` followed by every element of
/// `B`.
///
/// Both sides must produce the same element type. Driven from the back, the
/// tail of `B` comes out before the tail of `A`, consistent with `B` being
/// logically appended after `A`.
///
/// The remaining distance is the sum of both sides. Like
/// `std::iter::Chain::len`, this overflows when the sum exceeds
/// `usize::MAX`, which panics in debug builds.
///
/// This is constructed by [`Adapter::chain`](crate::Adapter::chain).
#[derive(Debug)]
#[must_use = "adapters are lazy and do nothing unless driven by a terminal \
              operation"]
pub struct Chain<A, B> {
    a: A,
    b: B,
}

impl<A, B> Chain<A, B> {
    pub(crate) fn new(a: A, b: B) -> Chain<A, B> {
        Chain { a, b }
    }
}

impl<A, B> Cursor for Chain<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    #[inline]
    fn empty(&self) -> bool {
        self.a.empty() && self.b.empty()
    }

    #[inline]
    fn next(&mut self) -> Option<A::Item> {
        if !self.a.empty() {
            self.a.next()
        } else {
            self.b.next()
        }
    }

    #[inline]
    fn distance(&self) -> usize {
        self.a.distance() + self.b.distance()
    }

    #[inline]
    fn min_distance(&self) -> usize {
        self.a.min_distance() + self.b.min_distance()
    }

    fn stop_iteration(&mut self) {
        self.a.stop_iteration();
        self.b.stop_iteration();
    }
}

impl<A, B> BackCursor for Chain<A, B>
where
    A: BackCursor,
    B: BackCursor<Item = A::Item>,
{
    #[inline]
    fn next_back(&mut self) -> Option<A::Item> {
        if !self.b.empty() {
            self.b.next_back()
        } else {
            self.a.next_back()
        }
    }
}

impl<A, B> Peek for Chain<A, B>
where
    A: Peek,
    B: Peek<Item = A::Item>,
{
    fn get(&mut self) -> Option<A::Item> {
        if !self.a.empty() {
            self.a.get()
        } else {
            self.b.get()
        }
    }
}

impl<A, B> PeekBack for Chain<A, B>
where
    A: PeekBack,
    B: PeekBack<Item = A::Item>,
{
    fn get_back(&mut self) -> Option<A::Item> {
        if !self.b.empty() {
            self.b.get_back()
        } else {
            self.a.get_back()
        }
    }
}

impl<A, B> Exact for Chain<A, B>
where
    A: Exact,
    B: Exact<Item = A::Item>,
{
}

#[cfg(test)]
mod tests {
    use crate::{iter, Adapter, Leaf};

    #[test]
    fn front_then_back() {
        let a = vec![1, 2, 3];
        let b = vec![4, 5];
        let got: Vec<&i32> = iter(&a).chain(iter(&b)).collect();
        assert_eq!(got, vec![&1, &2, &3, &4, &5]);
    }

    #[test]
    fn reversed_yields_second_tail_first() {
        let a = vec![1, 2, 3];
        let b = vec![4, 5];
        let got: Vec<&i32> = iter(&a).chain(iter(&b)).reverse().collect();
        assert_eq!(got, vec![&5, &4, &3, &2, &1]);
    }

    #[test]
    fn empty_sides() {
        let a: Vec<i32> = vec![];
        let b = vec![7];
        assert_eq!(iter(&a).chain(iter(&b)).count(), 1);
        assert_eq!(iter(&b).chain(iter(&a)).last(), Some(&7));
        assert_eq!(iter(&a).chain(iter(&a)).count(), 0);
    }

    #[test]
    fn peek_crosses_boundary() {
        let a = vec![1];
        let b = vec![2];
        let mut chain = iter(&a).chain(iter(&b));
        assert_eq!(chain.peek(), Some(&1));
        assert_eq!(chain.peek_back(), Some(&2));
        assert_eq!(chain.nth(1), Some(&2));
    }

    #[test]
    fn distance_is_sum_of_sides() {
        let a = vec![1, 2, 3];
        let b = vec![4, 5];
        let mut it = iter(&a).chain(iter(&b)).into_iter();
        assert_eq!(it.size_hint(), (5, Some(5)));
        it.next_back();
        it.next();
        assert_eq!(it.len(), 3);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "overflow")]
    fn distance_overflow_panics() {
        let chain = Leaf::new(0..usize::MAX).chain(Leaf::new(0..2));
        let _ = chain.into_iter().len();
    }
}
