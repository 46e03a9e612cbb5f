/*!
The primitive operations every stage of an adapter chain provides.

These traits are public items inside a private module. Every stage in this
crate can call the primitives of the stages it wraps, but code outside the
crate can neither name nor implement them. The public surface of a chain is
the [`Adapter`](crate::Adapter) trait, which is implemented once for every
`Cursor`.

The contract shared by all of them:

* `next`, `next_back`, `get` and `get_back` return `None` exactly when
  `empty` returns `true`.
* `distance` is the number of elements left between the front and the back
  of the chain. It is exact for every stage that implements `Exact`, and an
  upper bound otherwise.
* `min_distance` is a lower bound on the same number. It equals `distance`
  for every stage that implements `Exact`.
* Once `stop_iteration` has been called, `empty` returns `true` forever.
*/

/// Forward traversal.
pub trait Cursor {
    /// The type of element produced by this stage.
    type Item;

    /// Returns true when no element remains between the front and the back.
    fn empty(&self) -> bool;

    /// Returns the front element and advances the front by one.
    fn next(&mut self) -> Option<Self::Item>;

    /// The number of elements remaining.
    fn distance(&self) -> usize;

    /// A lower bound on the number of elements remaining.
    fn min_distance(&self) -> usize;

    /// Permanently exhausts this stage (and everything upstream of it).
    fn stop_iteration(&mut self);
}

/// Backward traversal.
pub trait BackCursor: Cursor {
    /// Retreats the back by one and returns the element found there.
    fn next_back(&mut self) -> Option<Self::Item>;
}

/// Reading the front element without advancing.
pub trait Peek: Cursor {
    /// Returns the front element, leaving the front where it is.
    fn get(&mut self) -> Option<Self::Item>;
}

/// Reading the back element without retreating.
pub trait PeekBack: Peek + BackCursor {
    /// Returns the back element, leaving the back where it is.
    fn get_back(&mut self) -> Option<Self::Item>;
}

/// Marker for stages whose `distance` is exact rather than an upper bound.
///
/// Backward traversal of `Enumerate` and `StepBy` computes positions from
/// the remaining distance, so it is only offered over an `Exact` upstream.
pub trait Exact: Cursor {}

/// Calls `next` at most `n` times, returning how many elements were
/// actually discarded.
pub fn advance_by<C: Cursor + ?Sized>(cursor: &mut C, n: usize) -> usize {
    let mut steps = 0;
    while steps < n && cursor.next().is_some() {
        steps += 1;
    }
    steps
}

/// Calls `next_back` at most `n` times, returning how many elements were
/// actually discarded.
pub fn advance_back_by<C: BackCursor + ?Sized>(
    cursor: &mut C,
    n: usize,
) -> usize {
    let mut steps = 0;
    while steps < n && cursor.next_back().is_some() {
        steps += 1;
    }
    steps
}
