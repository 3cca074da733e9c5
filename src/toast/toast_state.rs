//! Toast state management
//!
//! Transient status messages: action confirmations, config warnings and store
//! failures.

use ratatui::style::Color;
use std::time::{Duration, Instant};

use crate::theme;

/// Toast type - determines style and duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    /// Info - short duration (1.5s) - for confirmations like "Marked all as read"
    #[default]
    Info,
    /// Warning - long duration (10s) - for warnings like invalid config
    Warning,
    /// Error - 10s - for failed store operations
    Error,
}

impl ToastKind {
    fn duration(self) -> Duration {
        match self {
            ToastKind::Info => Duration::from_millis(1500),
            ToastKind::Warning | ToastKind::Error => Duration::from_secs(10),
        }
    }

    fn style(self) -> ToastStyle {
        let colors = match self {
            ToastKind::Info => &theme::toast::INFO,
            ToastKind::Warning => &theme::toast::WARNING,
            ToastKind::Error => &theme::toast::ERROR,
        };
        ToastStyle {
            fg: colors.fg,
            bg: colors.bg,
            border: colors.border,
        }
    }
}

/// Style configuration for a toast
#[derive(Debug, Clone)]
pub struct ToastStyle {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

/// A single toast with message, timing, and style
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub style: ToastStyle,
    pub kind: ToastKind,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: &str, kind: ToastKind) -> Self {
        Self {
            message: message.to_string(),
            style: kind.style(),
            kind,
            created_at: Instant::now(),
            duration: kind.duration(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

/// Toast state manager for the application
#[derive(Debug, Default)]
pub struct ToastState {
    pub current: Option<Toast>,
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an info toast (1.5s)
    ///
    /// A visible warning or error stays up until it expires.
    pub fn show(&mut self, message: &str) {
        if let Some(toast) = &self.current
            && toast.kind != ToastKind::Info
            && !toast.is_expired()
        {
            return;
        }
        self.current = Some(Toast::new(message, ToastKind::Info));
    }

    pub fn show_warning(&mut self, message: &str) {
        self.current = Some(Toast::new(message, ToastKind::Warning));
    }

    pub fn show_error(&mut self, message: &str) {
        self.current = Some(Toast::new(message, ToastKind::Error));
    }

    /// Clear expired toast, returns true if cleared
    pub fn clear_if_expired(&mut self) -> bool {
        if let Some(ref toast) = self.current
            && toast.is_expired()
        {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Get current toast message if visible
    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|t| t.message.as_str())
    }
}

#[cfg(test)]
#[path = "toast_state_tests.rs"]
mod toast_state_tests;
