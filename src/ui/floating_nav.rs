//! Floating navigation control.
//!
//! The floating control has no direct relationship with the overlays; it
//! only needs to stay out of their way. It subscribes to the overlay
//! transition events on the bus and hides itself while any overlay it has
//! observed is open: the logical OR of the per-overlay flags, so closing
//! one overlay while another is still open keeps it hidden.

use crate::events::{EventBus, Handler, Subscription, DRAWER_CLOSE, DRAWER_OPEN};
use crate::ui::theme::COLOR_ACCENT;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Per-overlay visibility flags observed from the bus.
type ObservedFlags = Rc<RefCell<HashMap<String, bool>>>;

fn overlay_name(payload: Option<&Value>) -> String {
    payload
        .and_then(|p| p.get("overlay"))
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

fn flag_handler(flags: &ObservedFlags, visible: bool) -> Handler {
    let flags = Rc::clone(flags);
    Rc::new(move |payload| {
        flags.borrow_mut().insert(overlay_name(payload), visible);
    })
}

/// Hides itself while any overlay is open.
///
/// Holds its bus subscriptions for its own lifetime: dropping the control
/// detaches both handlers, so a defunct instance never retains state.
pub struct FloatingNav {
    flags: ObservedFlags,
    _subscriptions: [Subscription; 2],
}

impl FloatingNav {
    /// Subscribe to overlay transitions on `bus`.
    pub fn new(bus: &Rc<EventBus>) -> Self {
        let flags: ObservedFlags = Rc::new(RefCell::new(HashMap::new()));
        let subscriptions = [
            bus.on(DRAWER_OPEN, flag_handler(&flags, true)),
            bus.on(DRAWER_CLOSE, flag_handler(&flags, false)),
        ];
        Self {
            flags,
            _subscriptions: subscriptions,
        }
    }

    /// Whether the control should be hidden: true while any observed overlay
    /// is open.
    pub fn is_hidden(&self) -> bool {
        self.flags.borrow().values().any(|open| *open)
    }
}

/// Render the floating control unless an overlay has hidden it.
pub fn render_floating_nav(frame: &mut Frame, area: Rect, hidden: bool) {
    if hidden {
        return;
    }
    let control = Paragraph::new(" ▲ menu ").style(Style::default().fg(COLOR_ACCENT));
    frame.render_widget(control, area);
}
