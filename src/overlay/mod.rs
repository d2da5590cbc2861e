//! Overlay visibility coordination with outside-pointer dismissal.
//!
//! Each dismissible surface (notification panel, account panel) gets one
//! [`OverlayCoordinator`]; all coordinators are owned by the
//! [`OverlayManager`], which also owns pointer-capture scoping. A coordinator
//! is attached to the manager's pointer scope exactly while it is visible:
//! attach-on-show, detach-on-hide, tied strictly to the visibility
//! transition, never to component mount/unmount.
//!
//! Overlays are independent: opening one does not close another, and two may
//! be visible at the same time. Every visibility transition dispatches
//! [`DRAWER_OPEN`]/[`DRAWER_CLOSE`] on the bus exactly once, with a payload
//! naming the overlay, so unrelated components can react without coupling.

use crate::events::{EventBus, DRAWER_CLOSE, DRAWER_OPEN};
use ratatui::layout::{Position, Rect};
use serde_json::json;
use std::rc::Rc;

/// The dismissible surfaces the shell knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// Notification panel anchored to the header bell.
    Notifications,
    /// Account panel anchored to the header avatar.
    Account,
}

impl OverlayKind {
    /// Stable name used in event payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayKind::Notifications => "notifications",
            OverlayKind::Account => "account",
        }
    }
}

/// Visibility state and screen regions for one dismissible surface.
#[derive(Debug)]
pub struct OverlayCoordinator {
    kind: OverlayKind,
    visible: bool,
    trigger: Option<Rect>,
    content: Option<Rect>,
}

impl OverlayCoordinator {
    fn new(kind: OverlayKind) -> Self {
        Self {
            kind,
            visible: false,
            trigger: None,
            content: None,
        }
    }

    /// Whether the surface is currently visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a pointer-down at `pos` should dismiss this overlay.
    ///
    /// True only when the position lands outside both the trigger and the
    /// content regions. With no regions recorded (surface not laid out yet,
    /// or already torn down) the answer is always false; dismissal
    /// defensively no-ops instead of acting on stale geometry.
    fn should_dismiss(&self, pos: Position) -> bool {
        if self.trigger.is_none() && self.content.is_none() {
            return false;
        }
        let inside_trigger = self.trigger.is_some_and(|r| r.contains(pos));
        let inside_content = self.content.is_some_and(|r| r.contains(pos));
        !inside_trigger && !inside_content
    }
}

/// Owns all overlay coordinators and the pointer-capture scope.
///
/// The render pass records each overlay's trigger/content regions via
/// [`OverlayManager::set_regions`]; the shell feeds pointer-down positions
/// into [`OverlayManager::pointer_down`].
pub struct OverlayManager {
    bus: Rc<EventBus>,
    coordinators: Vec<OverlayCoordinator>,
    /// Kinds currently attached to the pointer scope. Membership here is the
    /// "global listener" of the dismissal contract: present iff visible.
    pointer_scope: Vec<OverlayKind>,
}

impl OverlayManager {
    /// Create a manager dispatching transitions on `bus`.
    pub fn new(bus: Rc<EventBus>) -> Self {
        Self {
            bus,
            coordinators: Vec::new(),
            pointer_scope: Vec::new(),
        }
    }

    /// Register a coordinator for `kind`. Registering twice is a no-op.
    pub fn register(&mut self, kind: OverlayKind) {
        if self.coordinator(kind).is_none() {
            self.coordinators.push(OverlayCoordinator::new(kind));
        }
    }

    fn coordinator(&self, kind: OverlayKind) -> Option<&OverlayCoordinator> {
        self.coordinators.iter().find(|c| c.kind == kind)
    }

    fn coordinator_mut(&mut self, kind: OverlayKind) -> Option<&mut OverlayCoordinator> {
        self.coordinators.iter_mut().find(|c| c.kind == kind)
    }

    /// Record the trigger/content regions for `kind`, as laid out this frame.
    pub fn set_regions(&mut self, kind: OverlayKind, trigger: Option<Rect>, content: Option<Rect>) {
        if let Some(coordinator) = self.coordinator_mut(kind) {
            coordinator.trigger = trigger;
            coordinator.content = content;
        }
    }

    /// Show `kind`: mark visible, attach it to the pointer scope, dispatch
    /// [`DRAWER_OPEN`]. Idempotent: showing a visible overlay does nothing.
    pub fn show(&mut self, kind: OverlayKind) {
        let Some(coordinator) = self.coordinator_mut(kind) else {
            tracing::debug!(overlay = kind.as_str(), "show on unregistered overlay ignored");
            return;
        };
        if coordinator.visible {
            return;
        }
        coordinator.visible = true;
        self.pointer_scope.push(kind);
        tracing::debug!(overlay = kind.as_str(), "overlay shown");
        self.bus
            .dispatch(DRAWER_OPEN, Some(&json!({ "overlay": kind.as_str() })));
    }

    /// Hide `kind`: mark hidden, detach it from the pointer scope, dispatch
    /// [`DRAWER_CLOSE`]. Idempotent: hiding a hidden overlay does nothing.
    pub fn hide(&mut self, kind: OverlayKind) {
        let Some(coordinator) = self.coordinator_mut(kind) else {
            return;
        };
        if !coordinator.visible {
            return;
        }
        coordinator.visible = false;
        self.pointer_scope.retain(|k| *k != kind);
        tracing::debug!(overlay = kind.as_str(), "overlay hidden");
        self.bus
            .dispatch(DRAWER_CLOSE, Some(&json!({ "overlay": kind.as_str() })));
    }

    /// Show if hidden, hide if visible.
    pub fn toggle(&mut self, kind: OverlayKind) {
        if self.is_visible(kind) {
            self.hide(kind);
        } else {
            self.show(kind);
        }
    }

    /// Feed a pointer-down. Every overlay attached to the pointer scope runs
    /// its dismissal predicate; a position outside both of an overlay's
    /// regions hides that overlay. Overlays are checked independently; one
    /// pointer-down can dismiss several at once.
    pub fn pointer_down(&mut self, pos: Position) {
        let attached: Vec<OverlayKind> = self.pointer_scope.clone();
        for kind in attached {
            let dismiss = self
                .coordinator(kind)
                .map(|c| c.should_dismiss(pos))
                .unwrap_or(false);
            if dismiss {
                self.hide(kind);
            }
        }
    }

    /// Whether `kind` is currently visible.
    pub fn is_visible(&self, kind: OverlayKind) -> bool {
        self.coordinator(kind).is_some_and(|c| c.visible)
    }

    /// Whether any overlay is visible.
    pub fn any_visible(&self) -> bool {
        self.coordinators.iter().any(|c| c.visible)
    }

    /// Whether `kind` is attached to the pointer scope. Holds iff visible.
    pub fn in_pointer_scope(&self, kind: OverlayKind) -> bool {
        self.pointer_scope.contains(&kind)
    }
}
