use crate::error::{Error, Result};
use crate::raw::{self, BackCursor, Cursor, Exact, Peek, PeekBack};

/// A chain that keeps every `step`-th element, starting with the first.
///
/// Driven from the front, each element produced is followed by discarding
/// `step - 1` elements. Driven from the back, the adapter first discards
/// `(distance - 1) % step` trailing elements (once), which puts the back on
/// a retained position. Both directions therefore select exactly the same
/// positions and only differ in the order they are produced.
///
/// The alignment depends on the exact remaining distance, so backward
/// traversal is only offered over an upstream whose distance is exact.
///
/// This is constructed by [`Adapter::step_by`](crate::Adapter::step_by) or
/// [`Adapter::try_step_by`](crate::Adapter::try_step_by).
#[derive(Debug)]
#[must_use = "adapters are lazy and do nothing unless driven by a terminal \
              operation"]
pub struct StepBy<I> {
    inner: I,
    step: Step,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Step {
    step: usize,
    /// Set once the back has been moved onto a retained position.
    aligned: bool,
}

impl Step {
    /// The number of retained positions among `n` upstream elements, the
    /// first of which is retained.
    fn retained(&self, n: usize) -> usize {
        n / self.step + (n % self.step != 0) as usize
    }
}

impl<I: Cursor> StepBy<I> {
    pub(crate) fn new(inner: I, step: usize) -> Result<StepBy<I>> {
        if step == 0 {
            return Err(Error::ZeroStep);
        }
        Ok(StepBy { inner, step: Step { step, aligned: false } })
    }

    /// Discards the elements following a retained element from the front.
    fn skip_front(&mut self) {
        raw::advance_by(&mut self.inner, self.step.step - 1);
    }
}

impl<I: BackCursor + Exact> StepBy<I> {
    fn align_back(&mut self) {
        if self.step.aligned {
            return;
        }
        self.step.aligned = true;
        let distance = self.inner.distance();
        if distance == 0 {
            return;
        }
        let offset = (distance - 1) % self.step.step;
        if offset > 0 {
            tracing::trace!(offset, distance, "step_by aligned back");
            raw::advance_back_by(&mut self.inner, offset);
        }
    }

    fn skip_back(&mut self) {
        raw::advance_back_by(&mut self.inner, self.step.step - 1);
    }
}

impl<I: Cursor> Cursor for StepBy<I> {
    type Item = I::Item;

    #[inline]
    fn empty(&self) -> bool {
        self.inner.empty()
    }

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        let item = self.inner.next()?;
        self.skip_front();
        Some(item)
    }

    #[inline]
    fn distance(&self) -> usize {
        self.step.retained(self.inner.distance())
    }

    #[inline]
    fn min_distance(&self) -> usize {
        self.step.retained(self.inner.min_distance())
    }

    fn stop_iteration(&mut self) {
        self.inner.stop_iteration();
    }
}

impl<I: BackCursor + Exact> BackCursor for StepBy<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        self.align_back();
        let item = self.inner.next_back()?;
        self.skip_back();
        Some(item)
    }
}

impl<I: Peek> Peek for StepBy<I> {
    fn get(&mut self) -> Option<I::Item> {
        self.inner.get()
    }
}

impl<I: PeekBack + Exact> PeekBack for StepBy<I> {
    fn get_back(&mut self) -> Option<I::Item> {
        self.align_back();
        self.inner.get_back()
    }
}

impl<I: Exact> Exact for StepBy<I> {}
