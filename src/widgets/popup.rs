use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup directly below `anchor`, right-aligned with its right edge
///
/// The popup is clamped to `frame_area`: it shifts left when the anchor sits
/// close to the left edge and shrinks when there is not enough room below.
pub fn popup_below_anchor(frame_area: Rect, anchor: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let anchor_right = anchor.x.saturating_add(anchor.width).min(frame_area.right());
    let popup_x = anchor_right
        .saturating_sub(popup_width)
        .max(frame_area.x);

    let popup_y = anchor.y.saturating_add(anchor.height);
    let available = frame_area.bottom().saturating_sub(popup_y);

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: height.min(available),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
