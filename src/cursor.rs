/// A single bounded, bidirectional position into a sequence.
///
/// The position lives in `[begin, end]` where `end` is one past the last
/// element. Stepping past either bound is a no-op rather than an error.
pub trait Cursor {
    type Item: Copy;

    /// Advance by one unless already at the end. Returns whether the position moved.
    fn step_forward(&mut self) -> bool;
    /// Retreat by one unless already at the beginning. Returns whether the position moved.
    fn step_backward(&mut self) -> bool;
    /// The element under the position. A cursor that has reached its end keeps
    /// reading its last element; `None` means the bounded range is empty.
    fn current(&self) -> Option<Self::Item>;
    /// Index of the position in the underlying storage.
    fn offset(&self) -> usize;
    fn remaining(&self) -> usize;
    fn at_begin(&self) -> bool;
    fn at_end(&self) -> bool;
    /// Whether both cursors walk the same underlying storage.
    fn same_storage(&self, other: &Self) -> bool;

    fn position(&self) -> CursorPosition {
        if self.at_end() {
            CursorPosition::End
        } else if self.at_begin() {
            CursorPosition::Begin
        } else {
            CursorPosition::Mid(self.offset())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPosition {
    Begin,
    Mid(usize),
    End,
}
