use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;
use std::time::Duration;

use super::mouse_click::handle_click;
use super::mouse_hover::handle_hover;
use super::state::App;
use crate::layout::region_at;

/// How long to wait for input before polling the option loader again
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        if !event::poll(EVENT_POLL_INTERVAL)? {
            self.poll_catalog();
            return Ok(());
        }

        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            _ => {}
        }
        self.poll_catalog();
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_control_keys(key) {
            return;
        }

        match key.code {
            KeyCode::Enter => {
                if self.picker.is_open() {
                    let change = self.picker.commit();
                    self.accept(change);
                } else {
                    self.finish();
                }
            }
            KeyCode::Esc => {
                if self.picker.is_open() {
                    self.picker.cancel();
                } else {
                    self.finish();
                }
            }
            KeyCode::Down => self.picker.next(),
            KeyCode::Up => self.picker.previous(),
            KeyCode::Backspace => self.picker.backspace(),
            KeyCode::Char(c) => {
                let mut buf = [0u8; 4];
                self.picker.type_str(c.encode_utf8(&mut buf));
            }
            _ => {}
        }
    }

    /// Ctrl shortcuts; returns true if the key was handled
    fn handle_control_keys(&mut self, key: KeyEvent) -> bool {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match key.code {
            // Ctrl+C: Exit without output
            KeyCode::Char('c') => self.abort(),
            KeyCode::Char('n') => self.picker.next(),
            KeyCode::Char('p') => self.picker.previous(),
            // Ctrl+D: Clear the value or drop the last tag
            KeyCode::Char('d') => {
                let change = self.picker.clear();
                self.accept(change);
            }
            _ => return false,
        }
        true
    }

    /// Route a mouse event through the layout recorded on the last frame
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let region = region_at(&self.layout_regions, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Document-level listener first, like a pointerdown on the page
                let outside = self.router.pointer_down(mouse.column, mouse.row);
                if !outside.is_empty() && self.picker.dismiss(&outside) {
                    return;
                }
                handle_click(self, region);
            }
            MouseEventKind::Moved => handle_hover(self, region),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
