use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::App;
use super::mouse_click;
use crate::dropdown::{Action, ClickEffect};
use crate::store::NotificationStore;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl<S: NotificationStore + 'static> App<S> {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    mouse_click::handle_mouse_event(self, mouse_event);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.dropdown.is_open() && self.handle_dropdown_key(key) {
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') => self.toggle_dropdown(),
            KeyCode::Char('v') => self.view_all(),
            KeyCode::Char('a') => self.spawn_effect(ClickEffect::Perform(Action::MarkAllAsRead)),
            KeyCode::Char('R') => self.spawn_effect(ClickEffect::Perform(Action::Refresh)),
            _ => {}
        }
    }

    /// Keys that only mean something while the panel is open
    fn handle_dropdown_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => {
                self.dropdown.close();
                self.sync_selection();
            }
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Enter => {
                if let Some(notification) = self.selected_notification() {
                    self.spawn_effect(ClickEffect::Activate(notification));
                }
            }
            KeyCode::Char('r') => {
                if let Some(notification) = self.selected_notification()
                    && notification.is_unread()
                {
                    self.spawn_effect(ClickEffect::Perform(Action::MarkAsRead(notification.id)));
                }
            }
            KeyCode::Char('d') => {
                if let Some(notification) = self.selected_notification() {
                    self.spawn_effect(ClickEffect::Perform(Action::Delete(notification.id)));
                }
            }
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
