use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use chrono::{DateTime, Utc};
use tokio::task::LocalSet;

use crate::config::{Config, DropdownConfig};
use crate::dropdown::{Action, ClickEffect, DropdownController, RowActivation};
use crate::error::StoreError;
use crate::layout::LayoutRegions;
use crate::navigator::{RouteNavigator, Routes};
use crate::notification::Notification;
use crate::pointer::PointerHub;
use crate::store::NotificationStore;
use crate::toast::ToastState;

/// Result of a store task, sent back to the UI loop
#[derive(Debug)]
pub enum TaskOutcome {
    Performed(Action),
    Activated(RowActivation),
    Failed { action: String, error: StoreError },
}

pub struct App<S> {
    pub dropdown: DropdownController<S, RouteNavigator>,
    pub navigator: Rc<RouteNavigator>,
    pub pointer_hub: PointerHub,
    pub layout_regions: LayoutRegions,
    pub toast: ToastState,
    pub dropdown_config: DropdownConfig,
    /// Highlighted row while the dropdown is open
    pub selected: Option<usize>,
    /// Notifications as last drawn; row regions index into this
    pub rendered: Vec<Notification>,
    pub should_quit: bool,
    pub needs_render: bool,
    pub clock: fn() -> DateTime<Utc>,
    tasks: LocalSet,
    outcome_tx: Sender<TaskOutcome>,
    outcome_rx: Receiver<TaskOutcome>,
}

impl<S: NotificationStore + 'static> App<S> {
    pub fn new(store: Rc<S>, navigator: Rc<RouteNavigator>, config: &Config) -> Self {
        let pointer_hub = PointerHub::new();
        let dropdown = DropdownController::new(
            store,
            Rc::clone(&navigator),
            pointer_hub.clone(),
            Routes::from_config(&config.routes),
        );
        let (outcome_tx, outcome_rx) = mpsc::channel();

        Self {
            dropdown,
            navigator,
            pointer_hub,
            layout_regions: LayoutRegions::new(),
            toast: ToastState::new(),
            dropdown_config: config.dropdown,
            selected: None,
            rendered: Vec::new(),
            should_quit: false,
            needs_render: true,
            clock: Utc::now,
            tasks: LocalSet::new(),
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    /// A visible toast needs redraws so it disappears on expiry
    pub fn should_render(&self) -> bool {
        self.needs_render || self.toast.current().is_some()
    }

    pub fn current_route(&self) -> Option<String> {
        self.navigator.current_route()
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown.toggle();
        self.sync_selection();
    }

    pub fn view_all(&mut self) {
        self.dropdown.view_all();
        self.sync_selection();
    }

    pub fn select_next(&mut self) {
        let len = self.dropdown.snapshot().notifications.len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            None => Some(0),
            Some(index) => Some((index + 1).min(len - 1)),
        };
    }

    pub fn select_previous(&mut self) {
        let len = self.dropdown.snapshot().notifications.len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            None => Some(0),
            Some(index) => Some(index.saturating_sub(1)),
        };
    }

    pub fn selected_notification(&self) -> Option<Notification> {
        let index = self.selected?;
        self.dropdown
            .snapshot()
            .notifications
            .into_iter()
            .nth(index)
    }

    /// Drop the selection when closed and keep it inside the list otherwise
    pub(super) fn sync_selection(&mut self) {
        if !self.dropdown.is_open() {
            self.selected = None;
            return;
        }
        let len = self.dropdown.snapshot().notifications.len();
        self.selected = match self.selected {
            Some(_) if len == 0 => None,
            Some(index) => Some(index.min(len - 1)),
            None => None,
        };
    }

    /// Run store work from a click or key on the local task set
    ///
    /// The outcome arrives through `poll_outcomes` once the task finishes.
    pub fn spawn_effect(&self, effect: ClickEffect) {
        let outcome_tx = self.outcome_tx.clone();

        match effect {
            ClickEffect::Perform(action) => {
                let task = self.dropdown.perform(action.clone());
                self.tasks.spawn_local(async move {
                    let outcome = match task.await {
                        Ok(()) => TaskOutcome::Performed(action),
                        Err(error) => TaskOutcome::Failed {
                            action: action.to_string(),
                            error,
                        },
                    };
                    let _ = outcome_tx.send(outcome);
                });
            }
            ClickEffect::Activate(notification) => {
                let task = self.dropdown.handle_notification_click(&notification);
                self.tasks.spawn_local(async move {
                    let outcome = match task.await {
                        Ok(activation) => TaskOutcome::Activated(activation),
                        Err(error) => TaskOutcome::Failed {
                            action: Action::MarkAsRead(notification.id).to_string(),
                            error,
                        },
                    };
                    let _ = outcome_tx.send(outcome);
                });
            }
        }
    }

    /// Give spawned store tasks a chance to run
    pub async fn run_pending_tasks(&self) {
        self.tasks.run_until(tokio::task::yield_now()).await;
    }

    /// Apply finished task outcomes; returns true if any arrived
    pub fn poll_outcomes(&mut self) -> bool {
        let mut outcomes = Vec::new();

        loop {
            match self.outcome_rx.try_recv() {
                Ok(outcome) => outcomes.push(outcome),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        let had_outcomes = !outcomes.is_empty();
        for outcome in outcomes {
            self.apply_outcome(outcome);
        }

        if had_outcomes {
            self.sync_selection();
            self.mark_dirty();
        }
        had_outcomes
    }

    fn apply_outcome(&mut self, outcome: TaskOutcome) {
        match outcome {
            TaskOutcome::Performed(action) => self.toast.show(action.done_message()),
            TaskOutcome::Activated(RowActivation::Navigated(_)) => self.selected = None,
            TaskOutcome::Activated(RowActivation::Stayed) => {}
            TaskOutcome::Failed { action, error } => {
                #[cfg(debug_assertions)]
                log::error!("Task failed: {}: {}", action, error);

                self.toast
                    .show_error(&format!("Could not {}: {}", action, error));
            }
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
