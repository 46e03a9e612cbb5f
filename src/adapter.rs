use crate::adapters::{
    Boxed, Chain, Enumerate, ExactBoxed, Filter, Map, Reverse, Skip, StepBy,
    Take, Zip,
};
use crate::collect::Emplace;
use crate::error::Result;
use crate::raw::{self, BackCursor, Cursor, Exact, Peek, PeekBack};

/// Adapter describes a lazy chain of sequence stages.
///
/// It is implemented by every stage in this crate, from the [`Leaf`] that
/// wraps a collection to every adapter built on top of it. Methods fall into
/// two groups:
///
/// * *Composable* methods (`chain`, `zip`, `enumerate`, `filter`, `map`,
///   `reverse`, `skip`, `step_by`, `take`, `boxed`, `boxed_exact`) move the
///   chain into a new stage and return it. No element is visited, apart
///   from the eager skipping done by `filter` and `skip`.
/// * *Terminal* methods (`all`, `any`, `count`, `find`, `fold`, `for_each`,
///   `last`, `nth`, `partition`, `position`, `collect`) drive the chain by
///   pulling elements through every stage until it is exhausted or the
///   operation short-circuits. They consume the chain.
///
/// Since every method takes the chain by value (and chains cannot be
/// cloned), a chain has exactly one owner and can never be used again once
/// it has been composed further or drained.
///
/// This trait cannot be implemented outside of this crate. To drive a chain
/// with ordinary `for` loops or with `std::iter` combinators, convert it with
/// `IntoIterator`.
///
/// # Example
///
/// ```rust
/// use lazyseq::{iter, Adapter};
///
/// let nums = vec![1, 2, 3, 4, 5];
/// let squares: Vec<i32> = iter(&nums)
///     .reverse()
///     .filter(|&&x| x % 2 == 1)
///     .map(|&x| x * x)
///     .collect();
/// assert_eq!(squares, vec![25, 9, 1]);
/// ```
///
/// [`Leaf`]: crate::Leaf
pub trait Adapter: Cursor + Sized {
    /// Appends `other` after this chain.
    ///
    /// Both chains must produce the same element type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::{iter, Adapter};
    ///
    /// let (a, b) = (vec![1, 2], vec![3]);
    /// let all: Vec<&i32> = iter(&a).chain(iter(&b)).collect();
    /// assert_eq!(all, vec![&1, &2, &3]);
    /// ```
    fn chain<U>(self, other: U) -> Chain<Self, U>
    where
        U: Adapter<Item = Self::Item>,
    {
        Chain::new(self, other)
    }

    /// Pairs the elements of this chain with the elements of `other`.
    ///
    /// The resulting chain is as long as the shorter of the two.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::{iter, Adapter};
    ///
    /// let (keys, vals) = (vec!["a", "b", "c"], vec![1, 2]);
    /// let pairs: Vec<(&&str, &i32)> = iter(&keys).zip(iter(&vals)).collect();
    /// assert_eq!(pairs, vec![(&"a", &1), (&"b", &2)]);
    /// ```
    fn zip<U: Adapter>(self, other: U) -> Zip<Self, U> {
        Zip::new(self, other)
    }

    /// Pairs every element with its 0-based position.
    fn enumerate(self) -> Enumerate<Self> {
        Enumerate::new(self)
    }

    /// Keeps only the elements for which `pred` returns true.
    ///
    /// Leading elements failing the predicate are skipped right away.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::{iter_mut, Adapter};
    ///
    /// let mut nums = vec![1, 2, 3, 4];
    /// iter_mut(&mut nums).filter(|x| **x > 2).for_each(|x| *x *= 10);
    /// assert_eq!(nums, vec![1, 2, 30, 40]);
    /// ```
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, pred)
    }

    /// Transforms every element with `f`.
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, f)
    }

    /// Traverses this chain from the back.
    ///
    /// Only double-ended chains can be reversed. Chains over forward-only
    /// collections, such as hash sets, fail to compile:
    ///
    /// ```compile_fail
    /// use std::collections::HashSet;
    /// use lazyseq::{iter, Adapter};
    ///
    /// let set: HashSet<u8> = (0..5).collect();
    /// let _ = iter(&set).reverse();
    /// ```
    fn reverse(self) -> Reverse<Self>
    where
        Self: DoubleEndedAdapter,
    {
        Reverse::new(self)
    }

    /// Discards up to `n` leading elements right away.
    fn skip(self, n: usize) -> Skip<Self> {
        Skip::new(self, n)
    }

    /// Keeps every `step`-th element, starting with the first.
    ///
    /// Driving the result from either end selects the same elements.
    ///
    /// # Panics
    ///
    /// When `step` is zero. Use `try_step_by` to get an error instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::{iter, Adapter};
    ///
    /// let nums = vec![1, 2, 3, 4, 5, 6, 7];
    /// let fwd: Vec<&i32> = iter(&nums).step_by(3).collect();
    /// let bwd: Vec<&i32> = iter(&nums).step_by(3).reverse().collect();
    /// assert_eq!(fwd, vec![&1, &4, &7]);
    /// assert_eq!(bwd, vec![&7, &4, &1]);
    /// ```
    fn step_by(self, step: usize) -> StepBy<Self> {
        match self.try_step_by(step) {
            Ok(stepped) => stepped,
            Err(err) => panic!("invalid step_by: {}", err),
        }
    }

    /// Like `step_by`, but returns an error when `step` is zero.
    fn try_step_by(self, step: usize) -> Result<StepBy<Self>> {
        StepBy::new(self, step)
    }

    /// Yields at most `n` elements, counted at whichever end is driven.
    fn take(self, n: usize) -> Take<Self> {
        Take::new(self, n)
    }

    /// Erases the concrete type of this chain.
    ///
    /// This is useful when the shape of a pipeline is decided at runtime.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::{iter, Adapter, Boxed};
    ///
    /// let nums = vec![1, 2, 3, 4];
    /// let descending = true;
    /// let chain: Boxed<'_, &i32> = if descending {
    ///     iter(&nums).reverse().boxed()
    /// } else {
    ///     iter(&nums).boxed()
    /// };
    /// assert_eq!(chain.nth(1), Some(&3));
    /// ```
    fn boxed<'a>(self) -> Boxed<'a, Self::Item>
    where
        Self: DoubleEndedAdapter + 'a,
    {
        Boxed::new(self)
    }

    /// Erases the concrete type of this chain, keeping its exact distance.
    ///
    /// Chains containing a `filter` do not know their exact distance and
    /// cannot be erased this way.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::{iter, Adapter, ExactBoxed};
    ///
    /// let nums = vec![1, 2, 3, 4, 5];
    /// let mut chain: ExactBoxed<'_, &i32> = iter(&nums).boxed_exact();
    /// for _ in 0..2 {
    ///     chain = chain.skip(1).boxed_exact();
    /// }
    /// let got: Vec<&i32> = chain.step_by(2).reverse().collect();
    /// assert_eq!(got, vec![&5, &3]);
    /// ```
    fn boxed_exact<'a>(self) -> ExactBoxed<'a, Self::Item>
    where
        Self: DoubleEndedAdapter + Exact + 'a,
    {
        ExactBoxed::new(self)
    }

    /// Returns the front element without consuming it.
    ///
    /// Only chains over read-only traversals can be peeked, since their
    /// elements can be produced more than once. Peeking applies any `map`
    /// closure in the chain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::{iter, Adapter};
    ///
    /// let nums = vec![1, 2, 3];
    /// let mut chain = iter(&nums).skip(1);
    /// assert_eq!(chain.peek(), Some(&2));
    /// assert_eq!(chain.peek_back(), Some(&3));
    /// assert_eq!(chain.count(), 2);
    /// ```
    fn peek(&mut self) -> Option<Self::Item>
    where
        Self: Peek,
    {
        self.get()
    }

    /// Returns the back element without consuming it.
    fn peek_back(&mut self) -> Option<Self::Item>
    where
        Self: PeekBack,
    {
        self.get_back()
    }

    /// Returns true if `pred` holds for every element, stopping at the
    /// first element for which it doesn't.
    ///
    /// An empty chain returns true.
    fn all<F>(mut self, mut pred: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        while let Some(item) = self.next() {
            if !pred(item) {
                return false;
            }
        }
        true
    }

    /// Returns true if `pred` holds for any element, stopping at the first
    /// element for which it does.
    ///
    /// An empty chain returns false.
    fn any<F>(mut self, mut pred: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        while let Some(item) = self.next() {
            if pred(item) {
                return true;
            }
        }
        false
    }

    /// Drains the chain and returns the number of elements it produced.
    fn count(mut self) -> usize {
        let mut count = 0;
        while self.next().is_some() {
            count += 1;
        }
        count
    }

    /// Returns the first element satisfying `pred`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::{iter, Adapter};
    ///
    /// let words = vec!["apple", "banana", "cherry"];
    /// assert_eq!(iter(&words).find(|w| w.starts_with('b')), Some(&"banana"));
    /// assert_eq!(iter(&words).find(|w| w.is_empty()), None);
    /// ```
    fn find<P>(mut self, mut pred: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        while let Some(item) = self.next() {
            if pred(&item) {
                return Some(item);
            }
        }
        None
    }

    /// Folds every element into an accumulator, front to back.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::{iter, Adapter};
    ///
    /// let nums = vec![1, 2, 3];
    /// let digits = iter(&nums).fold(String::new(), |mut acc, x| {
    ///     acc.push_str(&x.to_string());
    ///     acc
    /// });
    /// assert_eq!(digits, "123");
    /// ```
    fn fold<B, F>(mut self, init: B, mut f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = init;
        while let Some(item) = self.next() {
            acc = f(acc, item);
        }
        acc
    }

    /// Calls `f` on every element, front to back.
    fn for_each<F>(mut self, mut f: F)
    where
        F: FnMut(Self::Item),
    {
        while let Some(item) = self.next() {
            f(item);
        }
    }

    /// Drains the chain and returns its final element.
    ///
    /// This visits every element of the chain.
    fn last(mut self) -> Option<Self::Item> {
        let mut last = None;
        while let Some(item) = self.next() {
            last = Some(item);
        }
        last
    }

    /// Discards `n` elements and returns the one after them.
    fn nth(mut self, n: usize) -> Option<Self::Item> {
        raw::advance_by(&mut self, n);
        self.next()
    }

    /// Splits the chain into the elements that satisfy `pred` and the ones
    /// that don't, preserving their relative order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::{Adapter, Leaf};
    ///
    /// let (odd, even): (Vec<u32>, Vec<u32>) =
    ///     Leaf::new(1u32..10).partition(|x| x % 2 == 1);
    /// assert_eq!(odd, vec![1, 3, 5, 7, 9]);
    /// assert_eq!(even, vec![2, 4, 6, 8]);
    /// ```
    fn partition<C, P>(mut self, mut pred: P) -> (C, C)
    where
        C: Default + Emplace<Self::Item>,
        P: FnMut(&Self::Item) -> bool,
    {
        let (mut yes, mut no) = (C::default(), C::default());
        while let Some(item) = self.next() {
            if pred(&item) {
                yes.emplace(item);
            } else {
                no.emplace(item);
            }
        }
        (yes, no)
    }

    /// Returns the 0-based index of the first element satisfying `pred`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::{iter, Adapter};
    ///
    /// let nums = vec![2, 4, 6, 8];
    /// assert_eq!(iter(&nums).position(|&x| x == 6), Some(2));
    /// assert_eq!(iter(&nums).position(|&x| x == 0), None);
    /// ```
    fn position<P>(mut self, mut pred: P) -> Option<usize>
    where
        P: FnMut(Self::Item) -> bool,
    {
        let mut i = 0;
        while let Some(item) = self.next() {
            if pred(item) {
                return Some(i);
            }
            i += 1;
        }
        None
    }

    /// Drains the chain into a new container.
    ///
    /// Elements are inserted one at a time, appended to sequences and
    /// inserted by key into maps and sets. See [`Emplace`] for the supported
    /// containers.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::{BTreeMap, BTreeSet};
    /// use lazyseq::{iter, Adapter};
    ///
    /// let words = vec!["b", "a", "b"];
    /// let unique: BTreeSet<&str> = iter(&words).map(|&w| w).collect();
    /// assert_eq!(unique.len(), 2);
    ///
    /// let last_index: BTreeMap<&str, usize> =
    ///     iter(&words).enumerate().map(|(i, &w)| (w, i)).collect();
    /// assert_eq!(last_index["b"], 2);
    /// ```
    fn collect<C>(mut self) -> C
    where
        C: Default + Emplace<Self::Item>,
    {
        let mut container = C::default();
        while let Some(item) = self.next() {
            container.emplace(item);
        }
        container
    }
}

impl<C: Cursor> Adapter for C {}

/// A chain that can also be driven from the back.
///
/// This is implemented automatically for every chain whose stages all
/// support backward traversal. It is required by `reverse` and `boxed`.
pub trait DoubleEndedAdapter: Adapter + BackCursor {}

impl<C: Adapter + BackCursor> DoubleEndedAdapter for C {}
