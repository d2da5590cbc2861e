//! Responsive layout state shared by the sidebar, header and tab bar.
//!
//! [`LayoutController`] is constructed once at startup from the measured
//! viewport width and passed by reference into the component tree. Consumers
//! are read-only; every mutation routes through [`LayoutController::toggle_sidebar`]
//! or [`LayoutController::set_collapsed`], with [`LayoutController::handle_resize`]
//! feeding the viewport signal. There is no ambient/global layout context.

/// Viewport width breakpoints for responsive layout decisions.
pub mod breakpoints {
    /// Below this width the layout switches to mobile behavior.
    pub const MOBILE_WIDTH_PX: u32 = 1024;
}

/// Shared layout state: viewport width, mobile flag, sidebar collapse.
///
/// Invariants:
/// - `is_mobile == (width_px < MOBILE_WIDTH_PX)`, recomputed on every resize
///   signal.
/// - `is_collapsed` is forced to `true` once, at construction, if the initial
///   width is mobile; afterwards it changes only through the two mutation
///   entry points, never by viewport recomputation.
#[derive(Debug)]
pub struct LayoutController {
    width_px: u32,
    is_mobile: bool,
    is_collapsed: bool,
}

impl LayoutController {
    /// Create the controller from the initial viewport measurement.
    ///
    /// A mobile-width viewport starts with the sidebar collapsed. This is the
    /// only point where the viewport influences `is_collapsed`.
    pub fn new(initial_width_px: u32) -> Self {
        let is_mobile = initial_width_px < breakpoints::MOBILE_WIDTH_PX;
        tracing::debug!(
            width_px = initial_width_px,
            is_mobile,
            "layout initialized"
        );
        Self {
            width_px: initial_width_px,
            is_mobile,
            is_collapsed: is_mobile,
        }
    }

    /// Current viewport width in pixels.
    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    /// Whether the viewport is below the mobile breakpoint.
    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    /// Whether the sidebar is collapsed.
    pub fn is_collapsed(&self) -> bool {
        self.is_collapsed
    }

    /// Flip the sidebar collapse state. Two calls restore the original value.
    pub fn toggle_sidebar(&mut self) {
        self.is_collapsed = !self.is_collapsed;
        tracing::debug!(is_collapsed = self.is_collapsed, "sidebar toggled");
    }

    /// Directed override of the collapse state.
    ///
    /// Used by consumers that need a specific state, e.g. auto-collapsing
    /// after a navigation action on a mobile-width viewport.
    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.is_collapsed = collapsed;
    }

    /// Feed a resize signal: recomputes `is_mobile`, never `is_collapsed`.
    ///
    /// Applied on every signal with no debounce; resize storms are accepted
    /// since recomputation is a comparison.
    pub fn handle_resize(&mut self, width_px: u32) {
        self.width_px = width_px;
        let was_mobile = self.is_mobile;
        self.is_mobile = width_px < breakpoints::MOBILE_WIDTH_PX;
        if was_mobile != self.is_mobile {
            tracing::debug!(width_px, is_mobile = self.is_mobile, "breakpoint crossed");
        }
    }
}
