//! Dropdown visibility and interaction routing
//!
//! `DropdownController` owns the only local state of the widget: whether the
//! panel is open. While open it holds a pointer subscription for
//! outside-click dismissal. The subscription lives inside the `Open` state,
//! so leaving `Open` by any route (toggle, outside press, navigation,
//! dropping the controller) releases it.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use super::actions::{Action, ActionMediator};
use super::click_event::{ClickEvent, dispatch_click};
use crate::error::StoreError;
use crate::layout::Region;
use crate::navigator::{Navigator, Routes};
use crate::notification::{Notification, NotificationKind};
use crate::pointer::{PointerHub, PointerSubscription};
use crate::store::NotificationStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Closed,
    Open,
}

enum DropdownState {
    Closed,
    Open { outside: PointerSubscription },
}

impl DropdownState {
    fn visibility(&self) -> Visibility {
        match self {
            DropdownState::Closed => Visibility::Closed,
            DropdownState::Open { .. } => Visibility::Open,
        }
    }

    fn open(&mut self, hub: &PointerHub) {
        if let DropdownState::Closed = self {
            *self = DropdownState::Open {
                outside: hub.subscribe(),
            };
            #[cfg(debug_assertions)]
            log::debug!("Dropdown opened");
        }
    }

    fn close(&mut self) {
        if let DropdownState::Open { .. } = self {
            *self = DropdownState::Closed;
            #[cfg(debug_assertions)]
            log::debug!("Dropdown closed");
        }
    }
}

/// Current store contents as one consistent read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownSnapshot {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

/// Async work a click resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickEffect {
    Perform(Action),
    Activate(Notification),
}

/// What row activation ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowActivation {
    /// Plain notification: nothing to open, the dropdown stays open
    Stayed,
    /// Campaign notification: navigated to the path and closed the dropdown
    Navigated(String),
}

pub struct DropdownController<S, N> {
    state: Rc<RefCell<DropdownState>>,
    mediator: ActionMediator<S>,
    navigator: Rc<N>,
    pointer_hub: PointerHub,
    routes: Rc<Routes>,
}

impl<S, N> DropdownController<S, N>
where
    S: NotificationStore + 'static,
    N: Navigator + 'static,
{
    pub fn new(store: Rc<S>, navigator: Rc<N>, pointer_hub: PointerHub, routes: Routes) -> Self {
        Self {
            state: Rc::new(RefCell::new(DropdownState::Closed)),
            mediator: ActionMediator::new(store),
            navigator,
            pointer_hub,
            routes: Rc::new(routes),
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.state.borrow().visibility()
    }

    pub fn is_open(&self) -> bool {
        self.visibility() == Visibility::Open
    }

    pub fn toggle(&self) {
        let mut state = self.state.borrow_mut();
        match state.visibility() {
            Visibility::Closed => state.open(&self.pointer_hub),
            Visibility::Open => state.close(),
        }
    }

    pub fn open(&self) {
        self.state.borrow_mut().open(&self.pointer_hub);
    }

    pub fn close(&self) {
        self.state.borrow_mut().close();
    }

    /// Close if any press since the last poll landed outside the dropdown root
    ///
    /// Returns true when this poll closed the dropdown.
    pub fn poll_outside_interactions(&self, root_contains: impl Fn(u16, u16) -> bool) -> bool {
        let presses = match &*self.state.borrow() {
            DropdownState::Open { outside } => outside.drain(),
            DropdownState::Closed => return false,
        };

        if presses.iter().any(|p| !root_contains(p.column, p.row)) {
            #[cfg(debug_assertions)]
            log::debug!("Outside press, dismissing dropdown");
            self.close();
            return true;
        }
        false
    }

    pub fn mediator(&self) -> &ActionMediator<S> {
        &self.mediator
    }

    pub fn routes(&self) -> &Routes {
        &self.routes
    }

    pub fn snapshot(&self) -> DropdownSnapshot {
        let store = self.mediator.store();
        DropdownSnapshot {
            notifications: store.notifications(),
            unread_count: store.unread_count(),
        }
    }

    /// Footer link: close, then open the full notification list
    pub fn view_all(&self) {
        self.close();
        self.navigator.navigate(self.routes.view_all_path());
    }

    /// Run a store action detached from the controller's lifetime
    pub fn perform(&self, action: Action) -> impl Future<Output = Result<(), StoreError>> + 'static {
        let mediator = self.mediator.clone();
        async move { mediator.perform(&action).await }
    }

    /// Activate a row
    ///
    /// An unread notification is marked read first and navigation waits for
    /// that to finish. A failed mark-as-read returns the error before any
    /// navigation. The returned future only keeps a weak handle on the
    /// dropdown state, so resolving after the controller is gone skips the
    /// close.
    pub fn handle_notification_click(
        &self,
        notification: &Notification,
    ) -> impl Future<Output = Result<RowActivation, StoreError>> + 'static {
        let mediator = self.mediator.clone();
        let navigator = Rc::clone(&self.navigator);
        let routes = Rc::clone(&self.routes);
        let state = Rc::downgrade(&self.state);
        let notification = notification.clone();

        async move {
            if notification.is_unread() {
                mediator.mark_as_read(&notification.id).await?;
            }

            match &notification.kind {
                NotificationKind::Plain => Ok(RowActivation::Stayed),
                NotificationKind::CampaignLinked { campaign_id } => {
                    let path = routes.campaign_path(campaign_id);
                    navigator.navigate(&path);
                    match state.upgrade() {
                        Some(state) => state.borrow_mut().close(),
                        None => {
                            #[cfg(debug_assertions)]
                            log::debug!("Dropdown gone before navigation finished");
                        }
                    }
                    Ok(RowActivation::Navigated(path))
                }
            }
        }
    }

    /// Route a click through the bubbling handlers
    ///
    /// Synchronous effects (toggle, view all) happen here; store work comes
    /// back as `ClickEffect`s for the caller to run.
    pub fn dispatch_click(&self, target: Region, notifications: &[Notification]) -> Vec<ClickEffect> {
        let mut effects = Vec::new();
        let mut event = ClickEvent::new(target);

        dispatch_click(&mut event, |region, event| match region {
            Region::Trigger => {
                self.toggle();
                event.stop_propagation();
            }
            Region::RowMarkRead(index) => {
                if let Some(n) = notifications.get(index) {
                    effects.push(ClickEffect::Perform(Action::MarkAsRead(n.id.clone())));
                }
                event.stop_propagation();
            }
            Region::RowDelete(index) => {
                if let Some(n) = notifications.get(index) {
                    effects.push(ClickEffect::Perform(Action::Delete(n.id.clone())));
                }
                event.stop_propagation();
            }
            Region::Row(index) => {
                if let Some(n) = notifications.get(index) {
                    effects.push(ClickEffect::Activate(n.clone()));
                }
            }
            Region::MarkAllRead => {
                effects.push(ClickEffect::Perform(Action::MarkAllAsRead));
                event.stop_propagation();
            }
            Region::Refresh => {
                effects.push(ClickEffect::Perform(Action::Refresh));
                event.stop_propagation();
            }
            Region::ViewAll => {
                self.view_all();
                event.stop_propagation();
            }
            Region::Panel => {}
        });

        effects
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
