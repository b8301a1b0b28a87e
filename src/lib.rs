pub use bounded_cursor::{BoundedCursor, DequeCursor, SliceCursor, Storage};
pub use combining_cursor::{CombiningCursor, SliceCombiningCursor};
pub use cursor::{Cursor, CursorPosition};
pub use error::{CombineError, Side};
pub use numeric::{Arithmetic, Numeric};
pub use operation::Operation;
pub use promote::{Common, Promote, Promoted, Widen};

mod bounded_cursor;
mod combining_cursor;
mod cursor;
mod error;
mod numeric;
mod operation;
mod promote;
