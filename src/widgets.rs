//! Picker rendering
//!
//! Each widget draws one part of the picker from engine state and records
//! where its clickable pieces landed in `LayoutRegions`.

pub mod input_box;
pub mod option_list;
pub mod palette_grid;
pub mod popup;
pub mod tag_list;

use ratatui::style::Color;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Border and highlight color of the accented variants
pub const ACCENT: Color = Color::Magenta;
/// Border color of a focused, non-accented picker
pub const FOCUS: Color = Color::Cyan;
pub const MUTED: Color = Color::DarkGray;

/// Cut `text` to at most `max_width` display columns, marking the cut with `…`
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
