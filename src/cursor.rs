//! Wraparound cursor over an ordered sequence.
//!
//! A [`Cursor`] tracks which item of a sequence is "current". The gallery keeps
//! three independent cursors (carousel, lightbox, reviews) that share this one
//! contract but never share state.
//!
//! ## Position Rules
//!
//! - Empty sequence: the cursor is inactive. [`Cursor::position`] and
//!   [`Cursor::current`] return `None`, and stepping is a no-op.
//! - Non-empty sequence: the position is always in `[0, len)`. Stepping wraps
//!   in both directions, so stepping back from `0` lands on `len - 1`.
//! - [`Cursor::jump_to`] never clamps. An index outside `[0, len)` is an error
//!   and the position is left untouched.
//! - [`Cursor::set_items`] resets to `0` and makes no attempt to follow the
//!   previously current item into the new sequence.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    #[error("index {index} out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}

/// Step direction: `Forward` is +1, `Backward` is −1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn offset(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cursor<T> {
    items: Vec<T>,
    position: usize,
}

impl<T> Default for Cursor<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            position: 0,
        }
    }
}

impl<T> Cursor<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, position: 0 }
    }

    /// Replace the backing sequence and rewind to the first item.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.position = 0;
    }

    /// Move one item in `direction`, wrapping at either end.
    pub fn step(&mut self, direction: Direction) {
        if self.items.is_empty() {
            return;
        }
        let len = self.items.len() as isize;
        self.position = (self.position as isize + direction.offset()).rem_euclid(len) as usize;
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), CursorError> {
        if index >= self.items.len() {
            return Err(CursorError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.position = index;
        Ok(())
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.position)
    }

    /// Current index, or `None` while the cursor is inactive.
    pub fn position(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.position)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
