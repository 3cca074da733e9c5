//! Dropdown rendering
//!
//! Draws a `DropdownView` and reports where every clickable element landed so
//! mouse presses can be hit-tested against the same geometry.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use super::view::{DropdownView, EMPTY_PLACEHOLDER, RowView};
use crate::config::DropdownConfig;
use crate::layout::{LayoutRegions, RowRegions};
use crate::theme;
use crate::widgets::popup;

const TRIGGER_LABEL: &str = " Inbox ";
const REFRESH_LABEL: &str = "Refresh";
const MARK_ALL_LABEL: &str = "Mark all as read";
const VIEW_ALL_LABEL: &str = "View all";

const ROW_HEIGHT: u16 = 2;
/// Accent bar, unread dot, space
const ROW_PREFIX_WIDTH: u16 = 3;
const CONTROL_WIDTH: u16 = 3;
const MIN_PANEL_WIDTH: u16 = 30;

/// Width the trigger needs for a given badge
pub fn trigger_width(badge: Option<&str>) -> u16 {
    let badge_width = badge.map_or(0, |b| b.chars().count() as u16 + 2);
    TRIGGER_LABEL.chars().count() as u16 + badge_width
}

/// Render the bell trigger with its unread badge; returns the clickable area
pub fn render_trigger(frame: &mut Frame, area: Rect, badge: Option<&str>, open: bool) -> Rect {
    let label_style = if open {
        theme::top_bar::BELL_OPEN
    } else {
        Style::default().fg(theme::top_bar::BELL)
    };

    let mut spans = vec![Span::styled(TRIGGER_LABEL, label_style)];
    if let Some(badge) = badge {
        spans.push(Span::styled(format!(" {} ", badge), theme::top_bar::BADGE));
    }

    let width = trigger_width(badge).min(area.width);
    let trigger_area = Rect {
        x: area.right().saturating_sub(width),
        y: area.y,
        width,
        height: area.height.min(1),
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), trigger_area);
    trigger_area
}

/// Rows visible at once and the first visible row, keeping `selected` in view
fn visible_window(total: usize, viewport_rows: usize, selected: Option<usize>) -> (usize, usize) {
    let viewport_rows = viewport_rows.max(1);
    let offset = match selected {
        Some(selected) if selected >= viewport_rows => selected + 1 - viewport_rows,
        _ => 0,
    };
    let max_offset = total.saturating_sub(viewport_rows);
    (viewport_rows, offset.min(max_offset))
}

/// Render the open panel under `anchor`
///
/// Returns the regions of the panel, its header/footer actions and every
/// visible row.
pub fn render_dropdown(
    frame: &mut Frame,
    anchor: Rect,
    view: &DropdownView,
    config: &DropdownConfig,
    selected: Option<usize>,
) -> LayoutRegions {
    let mut regions = LayoutRegions::new();

    let body_height = if view.is_empty() {
        1
    } else {
        u16::try_from(view.rows.len())
            .unwrap_or(u16::MAX)
            .saturating_mul(ROW_HEIGHT)
    };
    let footer_height: u16 = if view.shows_view_all() { 2 } else { 0 };
    // borders + header, summary, separator
    let wanted_height = (2 + 3 + footer_height).saturating_add(body_height);

    let width = config.width.max(MIN_PANEL_WIDTH);
    let panel = popup::popup_below_anchor(
        frame.area(),
        anchor,
        width,
        wanted_height.min(config.max_height),
    );
    if panel.width < MIN_PANEL_WIDTH.min(frame.area().width) || panel.height < 6 {
        return regions;
    }

    popup::clear_area(frame, panel);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Notifications ", theme::dropdown::TITLE))
        .border_style(Style::default().fg(theme::dropdown::BORDER))
        .style(Style::default().bg(theme::dropdown::BACKGROUND));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);
    regions.dropdown_panel = Some(panel);

    let [header, summary, separator, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(footer_height),
    ])
    .areas(inner);

    // Header: summary on the left, refresh on the right
    if let Some(text) = &view.summary {
        frame.render_widget(
            Paragraph::new(Span::styled(
                text.as_str(),
                Style::default().fg(theme::dropdown::SUMMARY),
            )),
            header,
        );
    }
    regions.refresh = Some(render_action_right(frame, header, REFRESH_LABEL));

    if view.show_mark_all {
        regions.mark_all_read = Some(render_action_right(frame, summary, MARK_ALL_LABEL));
    }

    render_separator(frame, separator);

    if view.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(EMPTY_PLACEHOLDER, theme::dropdown::EMPTY)).centered(),
            body,
        );
        return regions;
    }

    let viewport_rows = (body.height / ROW_HEIGHT) as usize;
    let (viewport_rows, offset) = visible_window(view.rows.len(), viewport_rows, selected);

    for (slot, (index, row)) in view
        .rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(viewport_rows)
        .enumerate()
    {
        let row_area = Rect {
            x: body.x,
            y: body.y + slot as u16 * ROW_HEIGHT,
            width: body.width,
            height: ROW_HEIGHT.min(body.bottom().saturating_sub(body.y + slot as u16 * ROW_HEIGHT)),
        };
        regions
            .rows
            .push(render_row(frame, row_area, index, row, selected == Some(index)));
    }

    if view.rows.len() > viewport_rows {
        render_scrollbar(frame, panel, view.rows.len(), viewport_rows, offset);
    }

    if footer_height > 0 {
        let [footer_separator, footer_line] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(footer);
        render_separator(frame, footer_separator);

        let label_width = VIEW_ALL_LABEL.chars().count() as u16;
        let view_all = Rect {
            x: footer_line.x + footer_line.width.saturating_sub(label_width) / 2,
            y: footer_line.y,
            width: label_width.min(footer_line.width),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(VIEW_ALL_LABEL, theme::dropdown::ACTION)),
            view_all,
        );
        regions.view_all = Some(view_all);
    }

    regions
}

fn render_action_right(frame: &mut Frame, line: Rect, label: &str) -> Rect {
    let width = (label.chars().count() as u16).min(line.width);
    let area = Rect {
        x: line.right().saturating_sub(width),
        y: line.y,
        width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Span::styled(label.to_string(), theme::dropdown::ACTION)),
        area,
    );
    area
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled(
        "─".repeat(area.width as usize),
        Style::default().fg(theme::dropdown::SEPARATOR),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Truncate to `width` characters, ending in an ellipsis when cut
fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return format!("{:<width$}", text, width = width);
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

fn render_row(
    frame: &mut Frame,
    area: Rect,
    index: usize,
    row: &RowView,
    selected: bool,
) -> RowRegions {
    let bg = if selected {
        theme::dropdown::ROW_SELECTED_BG
    } else {
        theme::dropdown::BACKGROUND
    };

    let (bar, dot, title_style) = if row.unread {
        (
            Span::styled("▌", Style::default().fg(theme::dropdown::ACCENT_BAR)),
            Span::styled("●", Style::default().fg(theme::dropdown::UNREAD_DOT)),
            theme::dropdown::TITLE_UNREAD,
        )
    } else {
        (
            Span::raw(" "),
            Span::raw(" "),
            theme::dropdown::TITLE_READ,
        )
    };

    let navigate = if row.navigable {
        Span::styled("›", Style::default().fg(theme::dropdown::NAVIGATE))
    } else {
        Span::raw(" ")
    };
    let mark_read = if row.shows_mark_read() {
        Span::styled(" ✓ ", Style::default().fg(theme::dropdown::MARK_READ))
    } else {
        Span::raw("   ")
    };
    let delete = Span::styled(" ✕ ", Style::default().fg(theme::dropdown::DELETE));

    // age, space, navigate, space, mark-read, delete
    let age_width = row.age.chars().count() as u16;
    let right_width = age_width + 3 + CONTROL_WIDTH * 2;
    let title_width = area
        .width
        .saturating_sub(ROW_PREFIX_WIDTH + right_width) as usize;

    let first_line = Line::from(vec![
        bar.clone(),
        dot,
        Span::raw(" "),
        Span::styled(fit(&row.title, title_width), title_style),
        Span::styled(row.age.clone(), Style::default().fg(theme::dropdown::AGE)),
        Span::raw(" "),
        navigate,
        Span::raw(" "),
        mark_read,
        delete,
    ]);

    let message_width = area.width.saturating_sub(ROW_PREFIX_WIDTH) as usize;
    let second_line = Line::from(vec![
        bar,
        Span::raw("  "),
        Span::styled(
            fit(&row.message, message_width),
            Style::default().fg(theme::dropdown::MESSAGE),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(vec![first_line, second_line]).style(Style::default().bg(bg)),
        area,
    );

    let delete_rect = Rect {
        x: area.right().saturating_sub(CONTROL_WIDTH),
        y: area.y,
        width: CONTROL_WIDTH.min(area.width),
        height: 1,
    };
    let mark_read_rect = row.shows_mark_read().then(|| Rect {
        x: area.right().saturating_sub(CONTROL_WIDTH * 2),
        y: area.y,
        width: CONTROL_WIDTH.min(area.width),
        height: 1,
    });

    RowRegions {
        index,
        row: area,
        mark_read: mark_read_rect,
        delete: delete_rect,
    }
}

fn render_scrollbar(
    frame: &mut Frame,
    panel: Rect,
    total_rows: usize,
    viewport_rows: usize,
    offset: usize,
) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(theme::dropdown::SCROLLBAR))
        .track_style(Style::default().fg(theme::dropdown::SCROLLBAR));

    // max_position = content_length - 1, so pass max_offset + 1 for the thumb to reach the end
    let max_offset = total_rows.saturating_sub(viewport_rows);
    let mut state = ScrollbarState::new(max_offset + 1)
        .position(offset.min(max_offset))
        .viewport_content_length(viewport_rows);

    let area = Rect {
        x: panel.x,
        y: panel.y.saturating_add(1),
        width: panel.width,
        height: panel.height.saturating_sub(2),
    };
    frame.render_stateful_widget(scrollbar, area, &mut state);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
