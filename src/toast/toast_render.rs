//! Toast rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::toast_state::ToastState;
use crate::widgets::popup;

/// Render the toast overlay in the bottom-right corner of the frame
///
/// Call after everything else so the toast sits on top.
pub fn render_toast(frame: &mut Frame, toast: &mut ToastState) {
    toast.clear_if_expired();

    let Some(current) = toast.current() else {
        return;
    };

    let message = &current.message;
    let style = &current.style;

    // 2 padding + 2 borders, 1 line of content
    let content_width = message.chars().count() as u16;
    let toast_width = content_width.saturating_add(4);
    let toast_height = 3;

    let frame_area = frame.area();
    let margin = 1;
    let width = toast_width.min(frame_area.width.saturating_sub(margin * 2));
    let height = toast_height.min(frame_area.height.saturating_sub(margin * 2));

    let toast_area = Rect {
        x: frame_area.width.saturating_sub(width + margin),
        y: frame_area.height.saturating_sub(height + margin + 1),
        width,
        height,
    };

    if toast_area.width < 5 || toast_area.height < 3 {
        return;
    }

    popup::clear_area(frame, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", message),
        Style::default().fg(style.fg).bg(style.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), toast_area);
}

#[cfg(test)]
#[path = "toast_render_tests.rs"]
mod toast_render_tests;
