//! View state module: shared, display-ready state for UI rendering.
//!
//! The types here carry no rendering of their own. They hold the state that
//! layout-affected components and identity-displaying components read each
//! frame:
//!
//! - [`LayoutController`]: collapse/mobile layout state driven by the
//!   viewport signal, with exactly two mutation entry points.
//! - [`UserViewModel`]: the always-fully-populated display model produced by
//!   [`normalize`] from a raw profile payload.

pub mod layout;
pub mod user_view;

pub use layout::{breakpoints, LayoutController};
pub use user_view::{
    extract_trailing_int, normalize, StageView, UserViewModel, DEFAULT_AVATAR_PATH,
    UPLOADS_BASE_PATH,
};
