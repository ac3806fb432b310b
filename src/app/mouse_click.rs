//! Mouse click handling
//!
//! Turns a click on a recorded region into the matching picker operation.

use super::state::App;
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>) {
    match region {
        Some(Region::Input) | Some(Region::Tag(_)) => app.picker.open(),
        Some(Region::ClearButton) => {
            let change = app.picker.clear();
            app.accept(change);
        }
        Some(Region::TagRemove(index)) => click_tag_remove(app, index),
        Some(Region::Row(position)) | Some(Region::Cell(position)) => {
            let change = app.picker.click(position);
            app.accept(change);
        }
        // Dropdown frame and empty space: nothing to do
        Some(Region::Dropdown) | None => {}
    }
}

fn click_tag_remove(app: &mut App, index: usize) {
    let Some(value) = app.picker.selected().get(index).cloned() else {
        return;
    };
    let change = app.picker.remove(&value);
    app.accept(change);
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
