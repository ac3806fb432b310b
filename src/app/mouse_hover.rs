//! Mouse hover handling
//!
//! Moving over a dropdown row moves the highlight to it.

use super::state::App;
use crate::layout::Region;

/// Handle mouse hover for the given region
pub fn handle_hover(app: &mut App, region: Option<Region>) {
    if let Some(Region::Row(position)) = region {
        app.picker.hover(position);
    }
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;
