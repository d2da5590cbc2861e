//! Sidebar navigation, sized from the shared layout state.

use crate::router::Route;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Sidebar width in columns when expanded.
pub const EXPANDED_WIDTH: u16 = 24;
/// Sidebar width in columns when collapsed (icons only).
pub const COLLAPSED_WIDTH: u16 = 4;

/// Navigation entries shown in the sidebar, in display order.
const NAV_ITEMS: [(Route, &str, &str); 4] = [
    (Route::Dashboard, "⌂", "Dashboard"),
    (Route::Wallet, "¤", "Wallet"),
    (Route::Orders, "≡", "Orders"),
    (Route::Account, "@", "Account"),
];

/// Width the sidebar occupies for the given collapse state.
pub fn sidebar_width(collapsed: bool) -> u16 {
    if collapsed {
        COLLAPSED_WIDTH
    } else {
        EXPANDED_WIDTH
    }
}

/// Build the sidebar nav lines. Collapsed shows icons only.
pub fn build_nav_lines(active: Route, collapsed: bool) -> Vec<Line<'static>> {
    NAV_ITEMS
        .iter()
        .map(|(route, icon, label)| {
            let style = if *route == active {
                Style::default().fg(COLOR_ACCENT)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            let text = if collapsed {
                format!(" {icon}")
            } else {
                format!(" {icon}  {label}")
            };
            Line::from(Span::styled(text, style))
        })
        .collect()
}

/// Render the sidebar into `area`.
pub fn render_sidebar(frame: &mut Frame, area: Rect, active: Route, collapsed: bool) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(COLOR_BORDER));
    let paragraph = Paragraph::new(build_nav_lines(active, collapsed)).block(block);
    frame.render_widget(paragraph, area);
}
