//! Dropdown list rendering
//!
//! Draws the visible options plus the create row under the input, scrolled so
//! the highlighted row is always on screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::popup;
use super::{ACCENT, FOCUS, MUTED, truncate_to_width};
use crate::catalog::eq_ignore_case;
use crate::layout::LayoutRegions;
use crate::select::{Picker, PickerKind};

const BORDER_SIZE: u16 = 2;
const MARKER_WIDTH: usize = 2;
const CHECK_WIDTH: usize = 2;
const EMPTY_TEXT: &str = "No options";

/// What the dropdown shows for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView<'a> {
    pub options: Vec<&'a str>,
    pub create_label: Option<String>,
    pub highlighted: Option<usize>,
    /// Current value of a single select, marked with a check
    pub current: Option<&'a str>,
    /// Options can't be added (multi-select at its cap)
    pub options_disabled: bool,
    pub accent: bool,
}

impl<'a> ListView<'a> {
    /// List view of an open single or multi picker; None for the palette
    pub fn from_picker(picker: &'a Picker) -> Option<Self> {
        if !picker.is_open() {
            return None;
        }
        let accent = picker.variant().is_accented();

        match picker.kind() {
            PickerKind::Single(select) => Some(Self {
                options: select.visible(),
                create_label: select.create_label(),
                highlighted: select.highlighted(),
                current: select.value(),
                options_disabled: false,
                accent,
            }),
            PickerKind::Multi(select) => Some(Self {
                options: select.visible(),
                create_label: select.create_label(),
                highlighted: select.highlighted(),
                current: None,
                options_disabled: select.is_full(),
                accent,
            }),
            PickerKind::Palette(_) => None,
        }
    }

    pub fn row_count(&self) -> usize {
        self.options.len() + usize::from(self.create_label.is_some())
    }
}

/// First row to draw so that `highlighted` stays inside a window of `max_visible`
pub fn scroll_offset(highlighted: Option<usize>, rows: usize, max_visible: usize) -> usize {
    if max_visible == 0 || rows <= max_visible {
        return 0;
    }
    let Some(highlighted) = highlighted else {
        return 0;
    };
    let highlighted = highlighted.min(rows - 1);
    (highlighted + 1).saturating_sub(max_visible)
}

/// Render the dropdown below `anchor` and record its rows
pub fn render_dropdown(
    frame: &mut Frame,
    view: &ListView,
    anchor: Rect,
    max_visible: usize,
    regions: &mut LayoutRegions,
) {
    let rows = view.row_count();
    let max_visible = max_visible.max(1);
    let shown = rows.min(max_visible).max(1);
    let height = u16::try_from(shown)
        .unwrap_or(u16::MAX)
        .saturating_add(BORDER_SIZE);

    let area = popup::dropdown_area(anchor, anchor.width, height, frame.area());
    if area.height <= BORDER_SIZE || area.width <= BORDER_SIZE {
        return;
    }
    popup::clear_area(frame, area);
    regions.dropdown = Some(area);

    let inner = popup::inset_rect(area, 1, 1);
    let fits = (inner.height as usize).min(shown);
    let offset = scroll_offset(view.highlighted, rows, fits);
    let label_width = (inner.width as usize).saturating_sub(MARKER_WIDTH + CHECK_WIDTH);

    let border_color = if view.accent { ACCENT } else { FOCUS };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if rows > fits {
        block = block.title_bottom(
            Line::from(format!(
                " {}-{} of {} ",
                offset + 1,
                offset + fits.min(rows - offset),
                rows
            ))
            .right_aligned(),
        );
    }

    if rows == 0 {
        let item = ListItem::new(Line::from(Span::styled(
            format!("  {}", EMPTY_TEXT),
            Style::default().fg(MUTED),
        )));
        frame.render_widget(List::new(vec![item]).block(block), area);
        return;
    }

    let items: Vec<ListItem> = (offset..rows)
        .take(fits)
        .enumerate()
        .map(|(line, position)| {
            regions.rows.push((
                position,
                Rect::new(inner.x, inner.y + line as u16, inner.width, 1),
            ));
            ListItem::new(row_line(view, position, label_width, inner.width as usize))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn row_line(view: &ListView, position: usize, label_width: usize, row_width: usize) -> Line<'static> {
    let highlighted = view.highlighted == Some(position);
    let marker = if highlighted { "► " } else { "  " };

    let (label, base) = match view.options.get(position) {
        Some(option) => {
            let style = if view.options_disabled {
                Style::default().fg(MUTED)
            } else {
                Style::default()
            };
            (*option, style)
        }
        None => (
            view.create_label.as_deref().unwrap_or_default(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::ITALIC),
        ),
    };

    let is_current = view
        .current
        .is_some_and(|current| position < view.options.len() && eq_ignore_case(current, label));
    let check = if is_current { " ✓" } else { "" };

    let text = format!("{}{}{}", marker, truncate_to_width(label, label_width), check);
    let padded = format!("{:<width$}", text, width = row_width);

    let style = match (highlighted, view.accent) {
        (true, true) => base.fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD),
        (true, false) => base.add_modifier(Modifier::REVERSED),
        (false, _) => base,
    };

    Line::from(Span::styled(padded, style))
}

#[cfg(test)]
#[path = "option_list_tests.rs"]
mod option_list_tests;
