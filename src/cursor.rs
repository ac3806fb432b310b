//! Highlight cursor
//!
//! Pure index arithmetic over the combined row list
//! `visible options ++ [create row?]`. Knows nothing about rendering; the
//! render layer only reads `index()` to decide which row to emphasize.

/// What the highlighted position points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Index into the visible option rows
    Option(usize),
    /// The trailing "create new value" row
    Create,
}

/// Resolve a combined-list position into a row target
///
/// Returns None when the position is outside the combined list.
pub fn target_at(position: usize, visible_len: usize, creatable: bool) -> Option<Target> {
    if position < visible_len {
        Some(Target::Option(position))
    } else if creatable && position == visible_len {
        Some(Target::Create)
    } else {
        None
    }
}

/// Circular cursor into the combined row list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightCursor {
    index: usize,
}

impl HighlightCursor {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    /// Raw index; only meaningful while the combined list is non-empty
    pub fn index(&self) -> usize {
        self.index
    }

    /// Index if it points into a list of `len` rows
    pub fn get(&self, len: usize) -> Option<usize> {
        (self.index < len).then_some(self.index)
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Move down, wrapping to the first row
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index.min(len - 1) + 1) % len;
    }

    /// Move up, wrapping to the last row
    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let current = self.index.min(len - 1);
        self.index = (current + len - 1) % len;
    }

    /// Pointer hover always wins over keyboard position
    pub fn hover(&mut self, position: usize, len: usize) {
        if position < len {
            self.index = position;
        }
    }

    /// Pull the index back inside a list that shrank
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.index = 0;
        } else if self.index >= len {
            self.index = len - 1;
        }
    }
}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod cursor_tests;
