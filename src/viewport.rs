//! Viewport signal adapter.
//!
//! The layout breakpoint is defined in pixels. Terminals that implement the
//! pixel-size extension report their true width via
//! [`crossterm::terminal::window_size`]; for the rest, width is estimated
//! from the column count.

/// Approximate cell width used when the terminal does not report pixels.
pub const FALLBACK_CELL_WIDTH_PX: u32 = 8;

/// Width assumed when nothing can be measured at all.
pub const DEFAULT_WIDTH_PX: u32 = 1280;

/// Estimate a pixel width from a column count.
pub fn width_px_for_columns(columns: u16) -> u32 {
    u32::from(columns) * FALLBACK_CELL_WIDTH_PX
}

/// Measure the current viewport width in pixels.
pub fn measure_width_px() -> u32 {
    match crossterm::terminal::window_size() {
        Ok(size) if size.width > 0 => u32::from(size.width),
        _ => match crossterm::terminal::size() {
            Ok((columns, _)) => width_px_for_columns(columns),
            Err(_) => DEFAULT_WIDTH_PX,
        },
    }
}
