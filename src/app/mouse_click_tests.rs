//! Tests for mouse click handling

use crate::layout::Region;
use crate::select::{SelectSettings, Variant};
use crate::test_utils::test_helpers::{app_with, click, render_app, test_app, type_text};

use super::handle_click;

#[test]
fn test_click_input_opens_dropdown() {
    let mut app = test_app(Variant::Default);
    render_app(&mut app);

    app.handle_mouse_event(click(10, 1));

    assert!(app.picker.is_open());
    assert!(app.picker.is_watching());
}

#[test]
fn test_click_row_commits_that_option() {
    let mut app = test_app(Variant::Default);
    app.picker.open();
    render_app(&mut app);

    // Rows start one line below the dropdown's top border
    app.handle_mouse_event(click(5, 5));

    assert_eq!(app.picker.selected(), vec!["Blue"]);
    assert!(!app.picker.is_open());
    assert!(!app.picker.is_watching());
}

#[test]
fn test_click_create_row_creates() {
    let mut app = test_app(Variant::Default);
    type_text(&mut app, "Purple");
    render_app(&mut app);

    app.handle_mouse_event(click(5, 4));

    assert_eq!(app.picker.selected(), vec!["Purple"]);
    assert_eq!(app.created(), vec!["Purple"]);
}

#[test]
fn test_click_outside_cancels_without_changing_value() {
    let mut app = app_with(Variant::Default, &["Green"], SelectSettings::default());
    type_text(&mut app, "bl");
    render_app(&mut app);

    app.handle_mouse_event(click(50, 13));

    assert!(!app.picker.is_open());
    assert_eq!(app.picker.query(), "");
    assert_eq!(app.picker.selected(), vec!["Green"]);
    assert!(!app.should_quit());
}

#[test]
fn test_click_inside_dropdown_frame_keeps_it_open() {
    let mut app = test_app(Variant::Default);
    app.picker.open();
    render_app(&mut app);

    // Left border of the dropdown
    app.handle_mouse_event(click(0, 5));

    assert!(app.picker.is_open());
}

#[test]
fn test_click_clear_button() {
    let mut app = app_with(Variant::Default, &["Red"], SelectSettings::default());
    render_app(&mut app);
    let clear = app.layout_regions.clear_button.unwrap();

    app.handle_mouse_event(click(clear.x, clear.y));

    assert!(app.picker.selected().is_empty());
}

#[test]
fn test_click_tag_remove() {
    let mut app = app_with(
        Variant::AccentedMulti,
        &["Red", "Blue"],
        SelectSettings::default(),
    );
    render_app(&mut app);
    let (_, remove) = app.layout_regions.tag_removes[0];

    app.handle_mouse_event(click(remove.x, remove.y));

    assert_eq!(app.picker.selected(), vec!["Blue"]);
    assert!(!app.picker.is_open());
}

#[test]
fn test_click_remove_on_wrapped_tag_line() {
    let tags: Vec<String> = (1..=12).map(|n| format!("Tag {}", n)).collect();
    let refs: Vec<&str> = tags.iter().map(String::as_str).collect();
    let mut app = app_with(Variant::AccentedMulti, &refs, SelectSettings::default());
    render_app(&mut app);

    // Three lines of chips inside the border
    assert_eq!(app.layout_regions.input.map(|r| r.height), Some(5));
    assert_eq!(app.layout_regions.tag_removes.len(), 12);
    let (index, remove) = app.layout_regions.tag_removes[11];
    assert_eq!(index, 11);
    assert_eq!(remove.y, 3);

    app.handle_mouse_event(click(remove.x, remove.y));

    let selected = app.picker.selected();
    assert_eq!(selected.len(), 11);
    assert!(!selected.iter().any(|value| value == "Tag 12"));
}

#[test]
fn test_click_palette_cell() {
    let mut app = test_app(Variant::Palette);
    app.picker.open();
    render_app(&mut app);
    let (index, cell) = app.layout_regions.cells[3];

    app.handle_mouse_event(click(cell.x, cell.y));

    assert_eq!(index, 3);
    assert_eq!(app.picker.selected(), vec!["Green"]);
}

#[test]
fn test_region_without_action_is_ignored() {
    let mut app = test_app(Variant::Default);

    handle_click(&mut app, Some(Region::Dropdown));
    handle_click(&mut app, None);

    assert!(!app.picker.is_open());
    assert!(app.picker.selected().is_empty());
}

#[test]
fn test_click_tag_remove_with_stale_index() {
    let mut app = app_with(Variant::AccentedMulti, &["Red"], SelectSettings::default());

    handle_click(&mut app, Some(Region::TagRemove(5)));

    assert_eq!(app.picker.selected(), vec!["Red"]);
}
