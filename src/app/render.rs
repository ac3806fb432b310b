use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
};

use super::state::App;
use crate::select::PickerKind;
use crate::widgets::MUTED;
use crate::widgets::input_box::{INPUT_HEIGHT, input_height, render_input};
use crate::widgets::option_list::{ListView, render_dropdown};
use crate::widgets::palette_grid::render_palette;

const MAX_INPUT_WIDTH: u16 = 60;
const HINT: &str = "Enter select · Esc done · Ctrl+D clear · Ctrl+C abort";
const LOADING: &str = "Loading options...";

impl App {
    /// Render the UI and record where everything landed
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let [body, status_area] =
            Layout::vertical([Constraint::Min(INPUT_HEIGHT), Constraint::Length(1)])
                .areas(frame.area());

        // Status first so an open dropdown may cover it
        self.render_status(frame, status_area);

        let input_width = body.width.min(MAX_INPUT_WIDTH);
        let input_area = Rect::new(
            body.x,
            body.y,
            input_width,
            input_height(&self.picker, input_width).min(body.height),
        );
        render_input(frame, &self.picker, input_area, &mut self.layout_regions);

        if self.picker.is_open() {
            if let PickerKind::Palette(select) = self.picker.kind() {
                render_palette(frame, select, input_area, &mut self.layout_regions);
            } else if let Some(view) = ListView::from_picker(&self.picker) {
                render_dropdown(
                    frame,
                    &view,
                    input_area,
                    self.max_visible,
                    &mut self.layout_regions,
                );
            }
        }

        let root = self.layout_regions.root();
        self.picker.set_bounds(root);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let line = match (&self.status, self.loading) {
            (Some(status), _) => Span::styled(status.as_str(), Style::default().fg(Color::Yellow)),
            (None, true) => Span::styled(LOADING, Style::default().fg(MUTED)),
            (None, false) => Span::styled(HINT, Style::default().fg(MUTED)),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
