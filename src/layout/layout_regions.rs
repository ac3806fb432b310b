use ratatui::layout::Rect;

use crate::outside::Bounds;

/// A clickable part of the picker
///
/// Indices in `Row` and `Cell` are positions in the combined option list
/// (visible options, then the create entry). `Tag` and `TagRemove` index
/// the selected values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Input,
    ClearButton,
    Tag(usize),
    TagRemove(usize),
    Dropdown,
    Row(usize),
    Cell(usize),
}

/// Where each part was rendered on the last frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input: Option<Rect>,
    pub clear_button: Option<Rect>,
    pub tags: Vec<(usize, Rect)>,
    pub tag_removes: Vec<(usize, Rect)>,
    pub dropdown: Option<Rect>,
    pub rows: Vec<(usize, Rect)>,
    pub cells: Vec<(usize, Rect)>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything from the previous frame
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Area that counts as inside the widget: input and dropdown together
    pub fn root(&self) -> Bounds {
        let input = self.input.map(Bounds::from).unwrap_or_default();
        let dropdown = self.dropdown.map(Bounds::from).unwrap_or_default();
        input.union(dropdown)
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Bounds::new(rect.x, rect.y, rect.width, rect.height)
    }
}
