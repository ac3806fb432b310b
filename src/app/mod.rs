mod events;
mod mouse_click;
mod mouse_hover;
mod render;
mod state;

// Re-export public types
pub use state::{App, OutputMode, Selection};
