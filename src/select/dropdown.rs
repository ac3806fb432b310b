use crate::cursor::HighlightCursor;
use crate::outside::{Bounds, OutsideWatch, PointerRouter, WatchId};

/// Open/closed mechanics shared by every variant
///
/// Query and cursor only live while open; closing resets both. While open,
/// an `OutsideWatch` is held so presses outside the widget can cancel.
#[derive(Debug, Default)]
pub(crate) struct Dropdown {
    open: bool,
    focused: bool,
    query: String,
    cursor: HighlightCursor,
    bounds: Bounds,
    router: Option<PointerRouter>,
    watch: Option<OutsideWatch>,
}

impl Dropdown {
    pub fn new(router: Option<PointerRouter>) -> Self {
        Self {
            router,
            ..Self::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cursor(&self) -> &HighlightCursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut HighlightCursor {
        &mut self.cursor
    }

    /// Returns true if the dropdown was closed before
    pub fn open(&mut self) -> bool {
        self.focused = true;
        if self.open {
            return false;
        }

        self.open = true;
        self.cursor.reset();
        self.watch = self.router.as_ref().map(|router| router.watch(self.bounds));
        log::debug!("dropdown opened");
        true
    }

    /// Returns true if the dropdown was open before
    pub fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }

        self.open = false;
        self.query.clear();
        self.cursor.reset();
        self.watch = None;
        log::debug!("dropdown closed");
        true
    }

    /// Typing opens a closed dropdown and seeds the query
    pub fn type_str(&mut self, text: &str) {
        self.open();
        self.query.push_str(text);
        self.cursor.reset();
    }

    pub fn backspace(&mut self) -> bool {
        if self.query.pop().is_none() {
            return false;
        }
        self.cursor.reset();
        true
    }

    pub fn set_query(&mut self, query: &str) {
        self.open();
        self.query = query.to_string();
        self.cursor.reset();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.cursor.reset();
    }

    /// Focus without opening, as after pressing a clear control
    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.close();
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        if let Some(watch) = &self.watch {
            watch.set_bounds(bounds);
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Whether one of the reported outside presses belongs to this widget
    pub fn is_watched_by(&self, outside: &[WatchId]) -> bool {
        self.watch
            .as_ref()
            .is_some_and(|watch| outside.contains(&watch.id()))
    }

    pub fn is_watching(&self) -> bool {
        self.watch.is_some()
    }
}
