/*!
Crate `lazyseq` provides lazy, composable sequence adapters over borrowed
collections.

A chain starts with a [`Leaf`] that wraps a collection ([`iter`] for
read-only traversal, [`iter_mut`] for mutable traversal). Composable methods
on the [`Adapter`] trait (`map`, `filter`, `zip`, `chain`, `enumerate`,
`skip`, `take`, `step_by`, `reverse`) each move the chain into a new stage.
Nothing is evaluated until a terminal method (`collect`, `count`, `fold`,
`find`, `position`, ...) pulls elements through every stage.

Chains are double-ended whenever the collection and every stage support it.
Backward traversal is fully consistent with forward traversal: stepping,
enumerating and filtering select and number exactly the same elements no
matter which end drives them.

# Example

```rust
use lazyseq::{iter, Adapter};

let nums = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];

// Nothing happens here: the chain is only a description of the work.
let chain = iter(&nums)
    .enumerate()
    .filter(|&(_, &x)| x % 3 != 0)
    .map(|(i, &x)| (i, x * 10))
    .reverse();

// Draining it pulls every element through each stage, from the back.
let got: Vec<(usize, i32)> = chain.collect();
assert_eq!(got, vec![(7, 80), (6, 70), (4, 50), (3, 40), (1, 20), (0, 10)]);
```

`enumerate` comes before `filter` here, so positions refer to the original
collection. The other order would not compile once `reverse` is added: a
filter only knows an upper bound of how many elements it has left, and
numbering elements from the back requires the exact count.

# Ownership

Every composable and terminal method takes its chain by value, and chains
cannot be cloned. A chain therefore always has exactly one owner, and the
borrow checker guarantees that the underlying collection is neither mutated
nor dropped while a chain observes it.

# Errors

Most misuse is rejected at compile time: reversing a chain over a
forward-only collection, chaining sequences of different element types, or
driving an enumerated filter from the back. The only runtime precondition is
a non-zero `step_by` step, see [`Error`].
*/

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
pub struct ReadmeDoctests;

pub use crate::adapter::{Adapter, DoubleEndedAdapter};
pub use crate::adapters::{
    Boxed, Chain, Enumerate, ExactBoxed, Filter, Map, Reverse, Skip, StepBy,
    Take, Zip,
};
pub use crate::collect::Emplace;
pub use crate::error::{Error, Result};
pub use crate::iter::IntoIter;
pub use crate::leaf::Leaf;

mod adapter;
mod adapters;
mod collect;
mod error;
mod iter;
mod leaf;
mod raw;
#[cfg(test)]
mod tests;

/// Starts a read-only chain over a collection.
///
/// The chain yields shared references to the elements, in the collection's
/// own iteration order. It is double-ended when the collection can be
/// traversed backwards (slices, vectors, linked lists, B-trees, ...) and
/// forward-only otherwise (hash sets and maps).
///
/// # Example
///
/// ```rust
/// use std::collections::LinkedList;
/// use lazyseq::{iter, Adapter};
///
/// let list: LinkedList<u8> = vec![1, 2, 3].into_iter().collect();
/// assert_eq!(iter(&list).reverse().nth(0), Some(&3));
/// ```
pub fn iter<'a, C>(
    collection: &'a C,
) -> Leaf<<&'a C as IntoIterator>::IntoIter>
where
    C: ?Sized,
    &'a C: IntoIterator,
    <&'a C as IntoIterator>::IntoIter: ExactSizeIterator,
{
    Leaf::new(collection)
}

/// Starts a mutable chain over a collection.
///
/// The chain yields mutable references to the elements. Since an element
/// can only be handed out once, mutable chains cannot be peeked.
///
/// # Example
///
/// ```rust
/// use lazyseq::{iter_mut, Adapter};
///
/// let mut nums = vec![1, 2, 3, 4, 5, 6];
/// iter_mut(&mut nums).step_by(2).for_each(|x| *x = 0);
/// assert_eq!(nums, vec![0, 2, 0, 4, 0, 6]);
/// ```
pub fn iter_mut<'a, C>(
    collection: &'a mut C,
) -> Leaf<<&'a mut C as IntoIterator>::IntoIter>
where
    C: ?Sized,
    &'a mut C: IntoIterator,
    <&'a mut C as IntoIterator>::IntoIter: ExactSizeIterator,
{
    Leaf::new(collection)
}
