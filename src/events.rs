//! Process-wide publish/subscribe channel for view-state transitions.
//!
//! A single [`EventBus`] is created at startup and shared by reference with
//! whichever components need it; it is an explicit service instance, not a
//! global singleton. Components with no direct relationship to each other
//! (e.g. the overlay manager and the floating navigation control) communicate
//! through named events instead of coupling to one another.
//!
//! ## Dispatch contract
//!
//! [`EventBus::dispatch`] synchronously invokes, in registration order, every
//! handler registered under the event name at the moment dispatch begins.
//! Handlers registered during a dispatch are not invoked for that dispatch.
//! Dispatch is not panic-safe: a handler that panics aborts the remaining
//! handlers for that call and unwinds to the caller. Subscribers must not
//! panic.
//!
//! ## Lifecycle
//!
//! [`EventBus::on`] returns a [`Subscription`] that detaches the handler when
//! dropped (or via [`Subscription::dispose`]), so cleanup is a visible
//! obligation of the subscriber rather than a manually paired `remove` call.

use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// Dispatched once each time an overlay becomes visible.
pub const DRAWER_OPEN: &str = "drawer:open";
/// Dispatched once each time an overlay becomes hidden.
pub const DRAWER_CLOSE: &str = "drawer:close";

/// Handler callback invoked with the optional event payload.
pub type Handler = Rc<dyn Fn(Option<&Value>)>;

/// Opaque identifier for a registered handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerId(u64);

struct HandlerEntry {
    id: HandlerId,
    callback: Handler,
}

/// Publish/subscribe channel scoped to the UI event loop.
///
/// The bus is single-threaded by design (`Rc`/`RefCell`, deliberately not
/// `Send`): it lives on the UI loop and all dispatches are synchronous.
#[derive(Default)]
pub struct EventBus {
    registry: RefCell<HashMap<String, Vec<HandlerEntry>>>,
    next_id: Cell<u64>,
}

impl EventBus {
    /// Create the shared bus instance.
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Register `handler` under `event`.
    ///
    /// Handlers fire in registration order. No deduplication is applied: the
    /// same callback registered twice fires twice. The returned
    /// [`Subscription`] detaches the handler when dropped.
    pub fn on(self: &Rc<Self>, event: &str, handler: Handler) -> Subscription {
        let id = HandlerId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);

        self.registry
            .borrow_mut()
            .entry(event.to_string())
            .or_default()
            .push(HandlerEntry {
                id,
                callback: handler,
            });

        tracing::trace!(name = event, id = id.0, "handler registered");

        Subscription {
            bus: Rc::downgrade(self),
            event: event.to_string(),
            id,
        }
    }

    /// Remove the handler registered under `event` with the given id.
    ///
    /// Removing an unregistered handler is a no-op.
    pub fn remove(&self, event: &str, id: HandlerId) {
        let mut registry = self.registry.borrow_mut();
        if let Some(entries) = registry.get_mut(event) {
            entries.retain(|entry| entry.id != id);
            if entries.is_empty() {
                registry.remove(event);
            }
        }
    }

    /// Synchronously invoke every handler registered under `event`.
    ///
    /// The handler list is snapshotted before invocation, so handlers may
    /// safely register or remove handlers (including themselves) while the
    /// dispatch runs.
    pub fn dispatch(&self, event: &str, payload: Option<&Value>) {
        let handlers: Vec<Handler> = {
            let registry = self.registry.borrow();
            match registry.get(event) {
                Some(entries) => entries.iter().map(|e| Rc::clone(&e.callback)).collect(),
                None => return,
            }
        };

        tracing::trace!(name = event, handlers = handlers.len(), "dispatch");
        for handler in handlers {
            handler(payload);
        }
    }

    /// Number of handlers currently registered under `event`.
    pub fn handler_count(&self, event: &str) -> usize {
        self.registry
            .borrow()
            .get(event)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

/// Detaches its handler from the bus when dropped.
///
/// Hold the subscription for as long as the handler should stay registered;
/// call [`Subscription::dispose`] to detach early.
#[must_use = "dropping the subscription immediately detaches the handler"]
pub struct Subscription {
    bus: Weak<EventBus>,
    event: String,
    id: HandlerId,
}

impl Subscription {
    /// The id this subscription's handler is registered under.
    pub fn id(&self) -> HandlerId {
        self.id
    }

    /// Detach the handler now.
    pub fn dispose(self) {
        // Drop does the work.
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.remove(&self.event, self.id);
        }
    }
}
