//! Tests for mouse hover handling

use crate::layout::Region;
use crate::select::Variant;
use crate::test_utils::test_helpers::{mouse_move, render_app, test_app};

use super::handle_hover;

#[test]
fn test_hover_moves_highlight() {
    let mut app = test_app(Variant::Default);
    app.picker.open();
    render_app(&mut app);

    app.handle_mouse_event(mouse_move(8, 6));
    let output = render_app(&mut app);

    assert!(output.contains("► Light Blue"));
}

#[test]
fn test_hover_then_enter_commits_hovered_row() {
    let mut app = test_app(Variant::Default);
    app.picker.open();

    handle_hover(&mut app, Some(Region::Row(3)));
    let change = app.picker.commit();
    app.accept(change);

    assert_eq!(app.picker.selected(), vec!["Green"]);
}

#[test]
fn test_hover_outside_rows_does_nothing() {
    let mut app = test_app(Variant::Default);
    app.picker.open();

    handle_hover(&mut app, Some(Region::Input));
    handle_hover(&mut app, None);
    let change = app.picker.commit();
    app.accept(change);

    assert_eq!(app.picker.selected(), vec!["Red"]);
}

#[test]
fn test_hover_when_closed_is_ignored() {
    let mut app = test_app(Variant::Default);

    handle_hover(&mut app, Some(Region::Row(2)));

    assert!(!app.picker.is_open());
}
