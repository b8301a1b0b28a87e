use std::cmp::max;

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::{CombineError, Result, Side};
use crate::numeric::Numeric;
use crate::operation::Operation;
use crate::promote::{Promote, Promoted};
use crate::bounded_cursor::SliceCursor;

/// Walks two numeric sequences in lockstep and reads them as one sequence of
/// combined values.
///
/// Each side is bounded independently. Stepping a side that already sits at
/// its bound leaves it in place, so sequences of different lengths can be
/// walked together: once the shorter side is exhausted, reads keep using its
/// last element.
///
/// Copies carry both positions and the operation. Two cursors are equal when
/// both sides walk the same storage and sit at the same positions; bounds and
/// operation are not compared.
#[derive(Debug, Clone, Copy, Default)]
pub struct CombiningCursor<C1, C2> {
    first: C1,
    second: C2,
    operation: Operation,
}

pub type SliceCombiningCursor<'a, T1, T2> = CombiningCursor<SliceCursor<'a, T1>, SliceCursor<'a, T2>>;

impl<'a, T1: Copy, T2: Copy> CombiningCursor<SliceCursor<'a, T1>, SliceCursor<'a, T2>> {
    pub fn over(first: &'a [T1], second: &'a [T2]) -> Self {
        CombiningCursor::new(SliceCursor::new(first), SliceCursor::new(second))
    }
}

impl<C1, C2> CombiningCursor<C1, C2> {
    pub fn new(first: C1, second: C2) -> Self {
        CombiningCursor {
            first,
            second,
            operation: Operation::Add,
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn set_operation(&mut self, operation: Operation) {
        debug!(from = %self.operation, to = %operation, "combine operation changed");
        self.operation = operation;
    }

    pub fn first(&self) -> &C1 {
        &self.first
    }

    pub fn second(&self) -> &C2 {
        &self.second
    }
}

impl<C1, C2> CombiningCursor<C1, C2>
where
    C1: Cursor,
    C2: Cursor,
    C1::Item: Promote<C2::Item>,
    C2::Item: Numeric,
{
    pub fn step_forward(&mut self) -> &mut Self {
        let moved_first = self.first.step_forward();
        let moved_second = self.second.step_forward();
        trace!(
            first = self.first.offset(),
            second = self.second.offset(),
            moved_first,
            moved_second,
            "stepped forward"
        );
        self
    }

    pub fn step_backward(&mut self) -> &mut Self {
        let moved_first = self.first.step_backward();
        let moved_second = self.second.step_backward();
        trace!(
            first = self.first.offset(),
            second = self.second.offset(),
            moved_first,
            moved_second,
            "stepped backward"
        );
        self
    }

    /// Step forward and return the cursor as it was before the step.
    pub fn post_step_forward(&mut self) -> Self
    where
        Self: Clone,
    {
        let prior = self.clone();
        self.step_forward();
        prior
    }

    /// Step backward and return the cursor as it was before the step.
    pub fn post_step_backward(&mut self) -> Self
    where
        Self: Clone,
    {
        let prior = self.clone();
        self.step_backward();
        prior
    }

    /// The two elements under the cursor.
    pub fn current(&self) -> Result<(C1::Item, C2::Item)> {
        let a = self
            .first
            .current()
            .ok_or(CombineError::EmptySequence(Side::First))?;
        let b = self
            .second
            .current()
            .ok_or(CombineError::EmptySequence(Side::Second))?;
        Ok((a, b))
    }

    /// Combine the two current elements with the selected operation.
    pub fn read(&self) -> Result<Promoted<C1::Item, C2::Item>> {
        let (a, b) = self.current()?;
        let result = self.operation.evaluate(a, b);
        if let Err(CombineError::DivisionByZero) = result {
            debug!(first = ?a, offset = self.second.offset(), "read divides by zero");
        }
        result
    }

    /// Combine the two current elements with `f`, ignoring the selected operation.
    pub fn apply<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce(C1::Item, C2::Item) -> R,
    {
        let (a, b) = self.current()?;
        Ok(f(a, b))
    }

    pub fn is_exhausted(&self) -> bool {
        self.first.at_end() && self.second.at_end()
    }
}

impl<C1: Cursor, C2: Cursor> PartialEq for CombiningCursor<C1, C2> {
    fn eq(&self, other: &Self) -> bool {
        self.first.same_storage(&other.first)
            && self.second.same_storage(&other.second)
            && self.first.offset() == other.first.offset()
            && self.second.offset() == other.second.offset()
    }
}

impl<C1: Cursor, C2: Cursor> Eq for CombiningCursor<C1, C2> {}

/// Reads, then steps forward, until both sides are exhausted.
impl<C1, C2> Iterator for CombiningCursor<C1, C2>
where
    C1: Cursor,
    C2: Cursor,
    C1::Item: Promote<C2::Item>,
    C2::Item: Numeric,
{
    type Item = Result<Promoted<C1::Item, C2::Item>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            return None;
        }
        let value = self.read();
        self.step_forward();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = max(self.first.remaining(), self.second.remaining());
        (remaining, Some(remaining))
    }
}
