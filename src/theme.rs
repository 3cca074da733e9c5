//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    // Background colors - deep space blue tints
    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);
    pub const BG_HOVER: Color = Color::Rgb(45, 45, 72);

    // Accent colors
    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const GREEN: Color = Color::Rgb(107, 203, 119);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const RED: Color = Color::Rgb(224, 108, 117);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);

    pub const BOLD: Style = Style::new().add_modifier(Modifier::BOLD);
}

/// Top bar with the bell trigger
pub mod top_bar {
    use super::*;

    pub const BACKGROUND: Color = palette::BG_SURFACE;
    pub const TITLE: Style = Style::new()
        .fg(Color::Rgb(0, 217, 255))
        .add_modifier(Modifier::BOLD);

    pub const BELL: Color = palette::TEXT;
    pub const BELL_OPEN: Style = Style::new()
        .fg(Color::Rgb(26, 26, 46))
        .bg(Color::Rgb(0, 217, 255));

    // Unread badge - hot pink pill
    pub const BADGE: Style = Style::new()
        .fg(Color::Rgb(26, 26, 46))
        .bg(Color::Rgb(255, 107, 157))
        .add_modifier(Modifier::BOLD);
}

/// Main pane showing the current route
pub mod main_pane {
    use super::*;

    pub const BORDER: Color = palette::TEXT_DIM;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const LABEL: Color = palette::TEXT_MUTED;
    pub const ROUTE: Style = Style::new()
        .fg(Color::Rgb(107, 203, 119))
        .add_modifier(Modifier::BOLD);
    pub const HINT: Color = palette::TEXT_DIM;
}

/// Notification dropdown panel styles
pub mod dropdown {
    use super::*;

    // Border and header
    pub const BORDER: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const TITLE: Style = Style::new()
        .fg(Color::Rgb(0, 217, 255))
        .add_modifier(Modifier::BOLD);
    pub const SUMMARY: Color = palette::TEXT_MUTED;
    pub const SEPARATOR: Color = palette::TEXT_DIM;

    // Header and footer actions
    pub const ACTION: Style = Style::new()
        .fg(Color::Rgb(189, 147, 249))
        .add_modifier(Modifier::UNDERLINED);

    // Rows - unread rows get an accent bar, a dot and a bold title
    pub const ACCENT_BAR: Color = palette::PINK;
    pub const UNREAD_DOT: Color = palette::PINK;
    pub const TITLE_UNREAD: Style = Style::new()
        .fg(Color::Rgb(236, 236, 244))
        .add_modifier(Modifier::BOLD);
    pub const TITLE_READ: Style = Style::new().fg(Color::Rgb(130, 133, 158));
    pub const MESSAGE: Color = palette::TEXT_MUTED;
    pub const AGE: Color = palette::TEXT_DIM;
    pub const ROW_SELECTED_BG: Color = palette::BG_HOVER;

    // Per-row controls
    pub const NAVIGATE: Color = palette::CYAN;
    pub const MARK_READ: Color = palette::GREEN;
    pub const DELETE: Color = palette::RED;

    // Empty state
    pub const EMPTY: Style = Style::new()
        .fg(Color::Rgb(90, 92, 119))
        .add_modifier(Modifier::ITALIC);

    pub const SCROLLBAR: Color = palette::CYAN;
}

/// Toast notification styles
pub mod toast {
    use super::*;

    pub struct ToastColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: ToastColors = ToastColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(55, 55, 85),
        border: Color::Rgb(130, 133, 158),
    };

    pub const WARNING: ToastColors = ToastColors {
        fg: Color::Rgb(26, 26, 46),
        bg: Color::Rgb(255, 217, 61),
        border: Color::Rgb(255, 217, 61),
    };

    pub const ERROR: ToastColors = ToastColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(224, 108, 117),
        border: Color::Rgb(255, 135, 145),
    };
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::YELLOW;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const BACKGROUND: Color = palette::BG_DARK;
}
