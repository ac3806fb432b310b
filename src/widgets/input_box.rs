//! Input box rendering
//!
//! A bordered box holding, depending on the variant, the swatch preview or
//! the tag chips, then the query, current value or placeholder. A clear `×`
//! sits at the right edge when a single value is set. The multi variant grows
//! by one line per line of wrapped tag chips.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::palette_grid::swatch_span;
use super::popup;
use super::tag_list::{layout_tags, render_tags};
use super::{ACCENT, FOCUS, MUTED, truncate_to_width};
use crate::layout::LayoutRegions;
use crate::select::{Picker, PickerKind};

pub const INPUT_HEIGHT: u16 = 3;
const BORDER_SIZE: u16 = 2;
const CLEAR_MARK: &str = "×";
const SWATCH_PREFIX: u16 = 3;
const MIN_QUERY_WIDTH: u16 = 8;

/// Height the input box needs at `width` so every tag chip has a place
pub fn input_height(picker: &Picker, width: u16) -> u16 {
    let PickerKind::Multi(select) = picker.kind() else {
        return INPUT_HEIGHT;
    };
    let inner_width = width.saturating_sub(BORDER_SIZE);
    if select.values().is_empty() || inner_width == 0 {
        return INPUT_HEIGHT;
    }

    let unbounded = Rect {
        x: 0,
        y: 0,
        width: inner_width,
        height: u16::MAX,
    };
    let end = layout_tags(select.values(), unbounded).end;
    let query_line = u16::from(inner_width - end.x < MIN_QUERY_WIDTH);
    end.y
        .saturating_add(1 + query_line)
        .saturating_add(BORDER_SIZE)
        .max(INPUT_HEIGHT)
}

/// Render the input box into `area` and record the input and clear regions
pub fn render_input(frame: &mut Frame, picker: &Picker, area: Rect, regions: &mut LayoutRegions) {
    let settings = picker.settings();
    let open = picker.is_open();

    let border_color = if settings.disabled {
        MUTED
    } else if picker.variant().is_accented() {
        ACCENT
    } else if open {
        FOCUS
    } else {
        MUTED
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if settings.required {
        let marker_style = if picker.is_missing_required() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        block = block.title(Line::from(Span::styled(" * ", marker_style)));
    }
    if let PickerKind::Multi(select) = picker.kind() {
        if let Some(counter) = select.counter() {
            block = block.title_bottom(Line::from(format!(" {} ", counter)).right_aligned());
        }
    }

    popup::clear_area(frame, area);
    frame.render_widget(block, area);
    regions.input = Some(area);

    let inner = popup::inset_rect(area, 1, 1);
    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let mut text_area = Rect::new(inner.x, inner.y, inner.width, 1);

    let can_clear = match picker.kind() {
        PickerKind::Single(select) => select.can_clear(),
        PickerKind::Palette(select) => select.can_clear(),
        PickerKind::Multi(_) => false,
    };
    if can_clear && text_area.width > 2 {
        let clear = Rect::new(text_area.x + text_area.width - 1, text_area.y, 1, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(CLEAR_MARK, Style::default().fg(Color::Red))),
            clear,
        );
        regions.clear_button = Some(clear);
        text_area.width -= 2;
    }

    let mut current = None;
    match picker.kind() {
        PickerKind::Single(select) => current = select.value(),
        PickerKind::Palette(select) => {
            current = select.value();
            if text_area.width > SWATCH_PREFIX {
                frame.render_widget(
                    Paragraph::new(swatch_span(select.swatch())),
                    Rect::new(text_area.x, text_area.y, SWATCH_PREFIX, 1),
                );
                text_area.x += SWATCH_PREFIX;
                text_area.width -= SWATCH_PREFIX;
            }
        }
        PickerKind::Multi(select) => {
            let end = render_tags(
                frame,
                select.values(),
                inner,
                picker.variant().is_accented(),
                settings.disabled,
                regions,
            );
            let room = inner.right() - end.x;
            text_area = if room < MIN_QUERY_WIDTH && end.y + 1 < inner.bottom() {
                Rect::new(inner.x, end.y + 1, inner.width, 1)
            } else {
                Rect::new(end.x, end.y, room, 1)
            };
        }
    }

    let query = picker.query();
    let has_tags = !picker.selected().is_empty() && matches!(picker.kind(), PickerKind::Multi(_));
    let (text, style) = if !query.is_empty() {
        (query.to_string(), Style::default())
    } else if let Some(value) = current {
        let style = if settings.disabled {
            Style::default().fg(MUTED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        (value.to_string(), style)
    } else if has_tags {
        (String::new(), Style::default())
    } else {
        (
            settings.placeholder.clone(),
            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        )
    };

    let shown = truncate_to_width(&text, text_area.width as usize);
    frame.render_widget(Paragraph::new(Span::styled(shown, style)), text_area);

    if open && !settings.disabled {
        let offset = (query.width() as u16).min(text_area.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(text_area.x + offset, text_area.y));
    }
}

#[cfg(test)]
#[path = "input_box_tests.rs"]
mod input_box_tests;
