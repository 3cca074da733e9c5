use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::dropdown::DropdownView;
use crate::dropdown::render::{render_dropdown, render_trigger};
use crate::layout::LayoutRegions;
use crate::store::NotificationStore;
use crate::theme;
use crate::toast::render_toast;

const HOME_ROUTE: &str = "/";

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

impl<S: NotificationStore + 'static> App<S> {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let snapshot = self.dropdown.snapshot();
        let view = DropdownView::build(
            &snapshot.notifications,
            snapshot.unread_count,
            (self.clock)(),
        );

        let [top_bar, main_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let trigger = self.render_top_bar(frame, top_bar, view.badge.as_deref());
        self.layout_regions.trigger = Some(trigger);

        self.render_main_pane(frame, main_area);
        self.render_help_line(frame, help_area);

        if self.dropdown.is_open() {
            let regions =
                render_dropdown(frame, trigger, &view, &self.dropdown_config, self.selected);
            self.layout_regions = LayoutRegions {
                trigger: Some(trigger),
                ..regions
            };
        }
        self.rendered = snapshot.notifications;

        render_toast(frame, &mut self.toast);
    }

    fn render_top_bar(&self, frame: &mut Frame, area: Rect, badge: Option<&str>) -> Rect {
        let title = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled("belltray", theme::top_bar::TITLE),
        ]))
        .style(Style::default().bg(theme::top_bar::BACKGROUND));
        frame.render_widget(title, area);

        render_trigger(frame, area, badge, self.dropdown.is_open())
    }

    fn render_main_pane(&self, frame: &mut Frame, area: Rect) {
        let route = self.current_route();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Current route ")
            .border_style(Style::default().fg(theme::main_pane::BORDER))
            .style(Style::default().bg(theme::main_pane::BACKGROUND));

        let lines = vec![
            Line::from(vec![
                Span::styled("Route: ", Style::default().fg(theme::main_pane::LABEL)),
                Span::styled(
                    route.unwrap_or_else(|| HOME_ROUTE.to_string()),
                    theme::main_pane::ROUTE,
                ),
            ]),
            Line::from(Span::styled(
                "Campaign notifications open their campaign page here.",
                Style::default().fg(theme::main_pane::HINT),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let hints = if self.dropdown.is_open() {
            hints!["j/k" => "Select", "Enter" => "Open", "r" => "Read", "d" => "Delete", "a" => "Read all", "R" => "Refresh", "Esc" => "Close"]
        } else {
            hints!["n" => "Notifications", "v" => "View all", "R" => "Refresh", "q" => "Quit"]
        };

        let key_style = Style::default().fg(theme::help_line::KEY);
        let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);

        let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
        spans.push(Span::raw(" "));
        for (i, (key, desc)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" \u{2022} ", desc_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*desc, desc_style));
        }

        let help = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(theme::help_line::BACKGROUND));
        frame.render_widget(help, area);
    }
}
