#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crate::select::{SelectSettings, Variant};
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    pub const TEST_OPTIONS: &[&str] = &["Red", "Blue", "Light Blue", "Green"];

    pub const TEST_WIDTH: u16 = 60;
    pub const TEST_HEIGHT: u16 = 16;

    pub fn options(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    pub fn test_app(variant: Variant) -> App {
        app_with(variant, &[], SelectSettings::default())
    }

    pub fn app_with(variant: Variant, initial: &[&str], settings: SelectSettings) -> App {
        App::new(
            variant,
            options(TEST_OPTIONS),
            options(initial),
            settings,
            &Config::default(),
        )
    }

    /// Draw one frame so layout regions and outside bounds are current
    pub fn render_app(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(TEST_WIDTH, TEST_HEIGHT)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal.backend().to_string()
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    pub fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn mouse_move(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }
}
