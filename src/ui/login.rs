//! Login and root-splash screens.

use crate::router::Location;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Build the login screen lines.
///
/// When the gate redirected here, the origin is shown so the user knows
/// where signing in will take them back to.
pub fn build_login_lines(return_to: Option<&Location>, dev_mode: bool) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(" sign in", Style::default().fg(COLOR_ACCENT))),
        Line::from(Span::raw("")),
        Line::from(Span::styled(
            " complete sign-in in your browser, then return here",
            Style::default().fg(COLOR_DIM),
        )),
    ];

    if let Some(location) = return_to {
        lines.push(Line::from(Span::styled(
            format!(" you will be returned to {}", location.pathname),
            Style::default().fg(COLOR_DIM),
        )));
    }

    if dev_mode {
        lines.push(Line::from(Span::raw("")));
        lines.push(Line::from(Span::styled(
            " dev mode: press l to sign in locally",
            Style::default().fg(COLOR_DIM),
        )));
    }

    lines
}

/// Render the login screen.
pub fn render_login(frame: &mut Frame, area: Rect, return_to: Option<&Location>, dev_mode: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" plaza ");
    frame.render_widget(
        Paragraph::new(build_login_lines(return_to, dev_mode)).block(block),
        area,
    );
}

/// Render the root splash. The gate never renders routed children at `/`;
/// this screen is the shell's own.
pub fn render_splash(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("  plaza", Style::default().fg(COLOR_ACCENT))),
        Line::from(Span::styled(
            "  storefront dashboard",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
