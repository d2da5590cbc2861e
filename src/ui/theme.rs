//! Color constants shared across the UI.

use ratatui::style::Color;

/// Border color for panels and overlays
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlighted text
pub const COLOR_ACCENT: Color = Color::White;

/// Dimmed/secondary text
pub const COLOR_DIM: Color = Color::DarkGray;

/// Positive values (balance, progress)
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Attention color (notification count, errors)
pub const COLOR_ALERT: Color = Color::Red;

/// Progress gauge fill
pub const COLOR_PROGRESS: Color = Color::White;
