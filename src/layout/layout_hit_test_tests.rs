//! Tests for region hit testing

use super::*;
use proptest::prelude::*;
use ratatui::layout::Rect;

fn picker_regions() -> LayoutRegions {
    let mut regions = LayoutRegions::new();
    regions.input = Some(Rect::new(0, 0, 40, 3));
    regions.clear_button = Some(Rect::new(36, 1, 1, 1));
    regions.tags = vec![(0, Rect::new(1, 1, 6, 1)), (1, Rect::new(8, 1, 7, 1))];
    regions.tag_removes = vec![(0, Rect::new(6, 1, 1, 1)), (1, Rect::new(14, 1, 1, 1))];
    regions.dropdown = Some(Rect::new(0, 3, 40, 5));
    regions.rows = vec![
        (0, Rect::new(1, 4, 38, 1)),
        (1, Rect::new(1, 5, 38, 1)),
        (2, Rect::new(1, 6, 38, 1)),
    ];
    regions
}

#[test]
fn test_input_hit() {
    assert_eq!(region_at(&picker_regions(), 20, 1), Some(Region::Input));
    assert_eq!(region_at(&picker_regions(), 0, 0), Some(Region::Input));
}

#[test]
fn test_clear_button_wins_over_input() {
    assert_eq!(region_at(&picker_regions(), 36, 1), Some(Region::ClearButton));
}

#[test]
fn test_tag_remove_wins_over_tag() {
    let regions = picker_regions();
    assert_eq!(region_at(&regions, 6, 1), Some(Region::TagRemove(0)));
    assert_eq!(region_at(&regions, 3, 1), Some(Region::Tag(0)));
    assert_eq!(region_at(&regions, 14, 1), Some(Region::TagRemove(1)));
    assert_eq!(region_at(&regions, 10, 1), Some(Region::Tag(1)));
}

#[test]
fn test_rows_win_over_dropdown_frame() {
    let regions = picker_regions();
    assert_eq!(region_at(&regions, 5, 4), Some(Region::Row(0)));
    assert_eq!(region_at(&regions, 5, 6), Some(Region::Row(2)));
    // Border column belongs to the frame only
    assert_eq!(region_at(&regions, 0, 5), Some(Region::Dropdown));
    assert_eq!(region_at(&regions, 5, 7), Some(Region::Dropdown));
}

#[test]
fn test_cells_are_hit() {
    let mut regions = LayoutRegions::new();
    regions.dropdown = Some(Rect::new(0, 3, 30, 4));
    regions.cells = vec![(0, Rect::new(1, 4, 6, 1)), (1, Rect::new(8, 4, 6, 1))];

    assert_eq!(region_at(&regions, 9, 4), Some(Region::Cell(1)));
    assert_eq!(region_at(&regions, 7, 4), Some(Region::Dropdown));
}

#[test]
fn test_outside_everything() {
    assert_eq!(region_at(&picker_regions(), 60, 20), None);
    assert_eq!(region_at(&LayoutRegions::new(), 0, 0), None);
}

proptest! {
    // A hit is always inside the root area; a miss of the root is None
    #[test]
    fn prop_hits_lie_inside_root(column in 0u16..80, row in 0u16..20) {
        let regions = picker_regions();
        let hit = region_at(&regions, column, row);
        prop_assert_eq!(hit.is_some(), regions.root().contains(column, row));
    }
}
