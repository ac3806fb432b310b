//! Palette grid rendering
//!
//! Options are laid out `columns` to a row as swatch cells. The create cell
//! previews the color the typed name resolves to.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::popup;
use super::{FOCUS, MUTED, truncate_to_width};
use crate::catalog::eq_ignore_case;
use crate::cursor::Target;
use crate::layout::LayoutRegions;
use crate::select::{ColorToken, PaletteSelect};

const BORDER_SIZE: u16 = 2;
const SWATCH: &str = "██";
const SWATCH_WIDTH: usize = 2;
const SWATCH_GAP: usize = 1;
const EMPTY_TEXT: &str = "No colors";

pub fn to_color(token: ColorToken) -> Color {
    let (r, g, b) = token.rgb();
    Color::Rgb(r, g, b)
}

/// Two-column color block
pub fn swatch_span(token: ColorToken) -> Span<'static> {
    Span::styled(SWATCH, Style::default().fg(to_color(token)))
}

/// Render the grid below `anchor` and record its cells
pub fn render_palette(
    frame: &mut Frame,
    select: &PaletteSelect,
    anchor: Rect,
    regions: &mut LayoutRegions,
) {
    if !select.is_open() {
        return;
    }

    let rows = select.grid_rows().max(1);
    let height = u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_add(BORDER_SIZE);
    let area = popup::dropdown_area(anchor, anchor.width, height, frame.area());
    if area.height <= BORDER_SIZE || area.width <= BORDER_SIZE {
        return;
    }
    popup::clear_area(frame, area);
    regions.dropdown = Some(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FOCUS));
    frame.render_widget(block, area);

    let inner = popup::inset_rect(area, 1, 1);
    if select.cell_count() == 0 {
        let empty = Paragraph::new(Span::styled(EMPTY_TEXT, Style::default().fg(MUTED)));
        frame.render_widget(
            empty,
            Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(1), 1),
        );
        return;
    }

    let cell_width = inner.width as usize / select.columns();
    if cell_width == 0 {
        return;
    }

    let visible = select.visible();
    let highlighted = select.highlighted();

    for index in 0..select.cell_count() {
        let (row, column) = select.grid_position(index);
        if row >= inner.height as usize {
            break;
        }
        // column * cell_width <= inner.width, so both fit in u16
        let rect = Rect::new(
            inner.x + (column * cell_width) as u16,
            inner.y + row as u16,
            cell_width as u16,
            1,
        );
        regions.cells.push((index, rect));

        let Some(color) = select.cell_color(index) else {
            continue;
        };
        let (label, mut style) = match select.cell_target(index) {
            Some(Target::Option(option)) => {
                let name = visible.get(option).copied().unwrap_or_default();
                let current = select.value().is_some_and(|v| eq_ignore_case(v, name));
                let style = if current {
                    Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default()
                };
                (name.to_string(), style)
            }
            Some(Target::Create) => (
                select.create_label().unwrap_or_default(),
                Style::default().fg(Color::Green).add_modifier(Modifier::ITALIC),
            ),
            None => continue,
        };
        if highlighted == Some(index) {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let label_width = cell_width.saturating_sub(SWATCH_WIDTH + SWATCH_GAP + 1);
        let line = Line::from(vec![
            swatch_span(color),
            Span::raw(" "),
            Span::styled(truncate_to_width(&label, label_width), style),
        ]);
        frame.render_widget(Paragraph::new(line), rect);
    }
}

#[cfg(test)]
#[path = "palette_grid_tests.rs"]
mod palette_grid_tests;
