use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly below `anchor`, clipped to the bottom of `bounds`
pub fn popup_below_anchor(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let bottom = bounds.y.saturating_add(bounds.height);
    let right = bounds.x.saturating_add(bounds.width);

    Rect {
        x: anchor.x,
        y: popup_y,
        width: width.min(right.saturating_sub(anchor.x)),
        height: height.min(bottom.saturating_sub(popup_y)),
    }
}

pub fn popup_above_anchor(anchor: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let popup_x = anchor.x + x_offset;
    let popup_y = anchor.y.saturating_sub(height);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(anchor.width.saturating_sub(x_offset * 2)),
        height: height.min(anchor.y),
    }
}

/// Place a dropdown under the anchor, flipping above when it fits better there
pub fn dropdown_area(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
    let below = popup_below_anchor(anchor, width, height, bounds);
    if below.height >= height {
        return below;
    }

    let room_above = anchor.y.saturating_sub(bounds.y);
    if room_above > below.height {
        return popup_above_anchor(anchor, width, height.min(room_above), 0);
    }
    below
}

/// Inner area of a bordered block
pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
