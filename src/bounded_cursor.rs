use std::cmp::min;
use std::collections::VecDeque;
use std::ptr;

use crate::cursor::Cursor;

/// Indexable storage a [`BoundedCursor`] can walk.
pub trait Storage {
    type Element: Copy;

    fn len(&self) -> usize;
    fn element(&self, index: usize) -> Option<Self::Element>;
}

impl<T: Copy> Storage for [T] {
    type Element = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn element(&self, index: usize) -> Option<T> {
        self.get(index).copied()
    }
}

impl<T: Copy> Storage for VecDeque<T> {
    type Element = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn element(&self, index: usize) -> Option<T> {
        self.get(index).copied()
    }
}

/// A [`Cursor`] over the range `[begin, end)` of borrowed storage.
#[derive(Debug)]
pub struct BoundedCursor<'a, S: ?Sized> {
    storage: &'a S,
    begin: usize,
    pos: usize,
    end: usize,
}

pub type SliceCursor<'a, T> = BoundedCursor<'a, [T]>;
pub type DequeCursor<'a, T> = BoundedCursor<'a, VecDeque<T>>;

// Derived impls would require `S: Clone`.
impl<'a, S: ?Sized> Clone for BoundedCursor<'a, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S: ?Sized> Copy for BoundedCursor<'a, S> {}

impl<'a, S: Storage + ?Sized> BoundedCursor<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        BoundedCursor {
            storage,
            begin: 0,
            pos: 0,
            end: storage.len(),
        }
    }

    /// Bind the cursor to `[pos, end)`. `pos` also becomes the lower bound.
    pub fn with_bounds(storage: &'a S, pos: usize, end: usize) -> Self {
        assert!(end <= storage.len(), "End position out of bounds");
        assert!(pos <= end, "Position past end");
        BoundedCursor {
            storage,
            begin: pos,
            pos,
            end,
        }
    }
}

impl<'a, T> Default for BoundedCursor<'a, [T]> {
    fn default() -> Self {
        BoundedCursor {
            storage: &[],
            begin: 0,
            pos: 0,
            end: 0,
        }
    }
}

impl<'a, S: Storage + ?Sized> Cursor for BoundedCursor<'a, S> {
    type Item = S::Element;

    fn step_forward(&mut self) -> bool {
        if self.pos < self.end {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn step_backward(&mut self) -> bool {
        if self.pos > self.begin {
            self.pos -= 1;
            true
        } else {
            false
        }
    }

    fn current(&self) -> Option<S::Element> {
        if self.begin == self.end {
            return None;
        }
        self.storage.element(min(self.pos, self.end - 1))
    }

    fn offset(&self) -> usize {
        self.pos
    }

    fn remaining(&self) -> usize {
        self.end - self.pos
    }

    fn at_begin(&self) -> bool {
        self.pos == self.begin
    }

    fn at_end(&self) -> bool {
        self.pos == self.end
    }

    fn same_storage(&self, other: &Self) -> bool {
        ptr::eq(self.storage, other.storage)
    }
}
