//! Global pointer press stream
//!
//! The event loop publishes every mouse press to a `PointerHub`. Components
//! that need to react to presses anywhere on screen (outside-click dismissal)
//! hold a `PointerSubscription`, which unregisters itself when dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::mpsc::{self, Receiver, Sender};

/// A press at a terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPress {
    pub column: u16,
    pub row: u16,
}

impl PointerPress {
    pub fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }
}

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: Vec<(u64, Sender<PointerPress>)>,
}

/// Broadcast point for pointer presses
#[derive(Clone, Default)]
pub struct PointerHub {
    inner: Rc<RefCell<HubInner>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it stays registered until the guard is dropped
    pub fn subscribe(&self) -> PointerSubscription {
        let (sender, receiver) = mpsc::channel();
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, sender));

        #[cfg(debug_assertions)]
        log::debug!("Pointer listener {} subscribed", id);

        PointerSubscription {
            id,
            hub: Rc::downgrade(&self.inner),
            receiver,
        }
    }

    /// Deliver a press to every live listener
    pub fn publish(&self, press: PointerPress) {
        self.inner
            .borrow_mut()
            .listeners
            .retain(|(_, sender)| sender.send(press).is_ok());
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Scoped registration on a `PointerHub`
///
/// Dropping the guard is the only way to unsubscribe, so every exit path
/// (explicit close, owner dropped, panic unwinding) releases the listener.
pub struct PointerSubscription {
    id: u64,
    hub: Weak<RefCell<HubInner>>,
    receiver: Receiver<PointerPress>,
}

impl PointerSubscription {
    /// Presses published since the last drain
    pub fn drain(&self) -> Vec<PointerPress> {
        self.receiver.try_iter().collect()
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        let Some(hub) = self.hub.upgrade() else {
            return;
        };
        // A failed borrow means the hub is mid-publish; the dead receiver
        // gets pruned by that publish instead.
        if let Ok(mut inner) = hub.try_borrow_mut() {
            inner.listeners.retain(|(id, _)| *id != self.id);
        }

        #[cfg(debug_assertions)]
        log::debug!("Pointer listener {} released", self.id);
    }
}
