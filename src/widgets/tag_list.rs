//! Tag chips for the multi-select input
//!
//! Each selected value is drawn as ` label × `. Chips wrap onto as many lines
//! as the area has; chips past the last line collapse into a `+N` marker.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use super::{ACCENT, MUTED, truncate_to_width};
use crate::layout::LayoutRegions;

const MAX_TAG_LABEL: usize = 16;
const CHIP_PADDING: u16 = 4;
const CHIP_GAP: u16 = 1;
const REMOVE_MARK: &str = "×";

/// Where one chip and its remove marker landed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSlot {
    pub index: usize,
    pub label: String,
    pub rect: Rect,
    pub remove: Rect,
}

/// Placed chips, the count that did not fit, and where text may continue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLayout {
    pub slots: Vec<TagSlot>,
    pub hidden: usize,
    pub end: Position,
}

fn overflow_marker(hidden: usize) -> String {
    format!("+{} ", hidden)
}

/// Lay chips out left to right, wrapping onto the following lines of `area`
pub fn layout_tags(values: &[String], area: Rect) -> TagLayout {
    if area.width == 0 || area.height == 0 {
        return TagLayout {
            slots: Vec::new(),
            hidden: values.len(),
            end: Position::new(area.x, area.y),
        };
    }

    let right = area.x.saturating_add(area.width);
    let bottom = area.y.saturating_add(area.height);
    let (mut x, mut y) = (area.x, area.y);
    let mut slots = Vec::new();

    for (index, value) in values.iter().enumerate() {
        let label = truncate_to_width(value, MAX_TAG_LABEL);
        let label_width = label.width() as u16;
        let width = label_width + CHIP_PADDING;

        if x > area.x && x.saturating_add(width) > right {
            x = area.x;
            y = y.saturating_add(1);
        }
        if y >= bottom || x.saturating_add(width) > right {
            return collapse(slots, values.len(), y.min(bottom - 1), area.x, right);
        }

        slots.push(TagSlot {
            index,
            label,
            rect: Rect::new(x, y, width, 1),
            remove: Rect::new(x + label_width + 2, y, 1, 1),
        });
        x = x.saturating_add(width + CHIP_GAP);
    }

    TagLayout {
        slots,
        hidden: 0,
        end: Position::new(x.min(right), y),
    }
}

/// Make room for the `+N` marker at the end of `line`
fn collapse(
    mut slots: Vec<TagSlot>,
    total: usize,
    line: u16,
    left: u16,
    right: u16,
) -> TagLayout {
    loop {
        let hidden = total - slots.len();
        let x = slots
            .last()
            .filter(|slot| slot.rect.y == line)
            .map_or(left, |slot| slot.rect.right() + CHIP_GAP);
        let end = x.saturating_add(overflow_marker(hidden).width() as u16);
        if end <= right || slots.is_empty() {
            return TagLayout {
                slots,
                hidden,
                end: Position::new(end.min(right), line),
            };
        }
        slots.pop();
    }
}

/// Draw the chips and record their regions; returns where text may continue
pub fn render_tags(
    frame: &mut Frame,
    values: &[String],
    area: Rect,
    accent: bool,
    disabled: bool,
    regions: &mut LayoutRegions,
) -> Position {
    let layout = layout_tags(values, area);
    if values.is_empty() || area.width == 0 || area.height == 0 {
        return layout.end;
    }

    let chip_bg = if disabled {
        MUTED
    } else if accent {
        ACCENT
    } else {
        Color::Blue
    };
    let chip_style = Style::default().fg(Color::White).bg(chip_bg);

    let mut lines = vec![Vec::new(); usize::from(layout.end.y - area.y) + 1];
    for slot in &layout.slots {
        let spans = &mut lines[usize::from(slot.rect.y - area.y)];
        spans.push(Span::styled(format!(" {} ", slot.label), chip_style));
        spans.push(Span::styled(
            REMOVE_MARK,
            chip_style.add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(" ", chip_style));
        spans.push(Span::raw(" "));

        if !disabled {
            regions.tags.push((slot.index, slot.rect));
            regions.tag_removes.push((slot.index, slot.remove));
        }
    }

    if layout.hidden > 0 {
        if let Some(spans) = lines.last_mut() {
            spans.push(Span::styled(
                overflow_marker(layout.hidden),
                Style::default().fg(MUTED),
            ));
        }
    }

    let last = lines.len() - 1;
    for (offset, spans) in lines.into_iter().enumerate() {
        let width = if offset == last {
            layout.end.x - area.x
        } else {
            area.width
        };
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(area.x, area.y + offset as u16, width, 1),
        );
    }
    layout.end
}

#[cfg(test)]
#[path = "tag_list_tests.rs"]
mod tag_list_tests;
