//! Overlay panels and their screen geometry.
//!
//! The geometry computed here serves double duty: the render pass draws the
//! panels with it, and the shell records the same rectangles on the
//! [`crate::overlay::OverlayManager`] so outside-pointer dismissal sees
//! exactly what is on screen.

use crate::overlay::OverlayKind;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};
use crate::view_state::UserViewModel;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

fn clamped(frame_area: Rect, x_from_right: u16, y: u16, width: u16, height: u16) -> Rect {
    let x = frame_area
        .x
        .saturating_add(frame_area.width.saturating_sub(x_from_right));
    Rect::new(x, y, width, height).intersection(frame_area)
}

/// Trigger and content rectangles for an overlay, given the frame area.
///
/// Triggers live in the header row; content panels hang below it.
pub fn overlay_regions(frame_area: Rect, kind: OverlayKind) -> (Rect, Rect) {
    match kind {
        OverlayKind::Notifications => (
            clamped(frame_area, 14, frame_area.y, 6, 3),
            clamped(frame_area, 40, frame_area.y.saturating_add(3), 38, 14),
        ),
        OverlayKind::Account => (
            clamped(frame_area, 7, frame_area.y, 6, 3),
            clamped(frame_area, 32, frame_area.y.saturating_add(3), 30, 12),
        ),
    }
}

/// Render the notification panel into its content region.
pub fn render_notifications_panel(frame: &mut Frame, content: Rect, count: u32) {
    frame.render_widget(Clear, content);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" notifications ");
    let body = if count == 0 {
        Line::from(Span::styled(" all caught up", Style::default().fg(COLOR_DIM)))
    } else {
        Line::from(Span::styled(
            format!(" {count} unread"),
            Style::default().fg(COLOR_ACCENT),
        ))
    };
    frame.render_widget(Paragraph::new(body).block(block), content);
}

/// Render the account panel into its content region.
pub fn render_account_panel(frame: &mut Frame, content: Rect, user: &UserViewModel) {
    frame.render_widget(Clear, content);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" account ");
    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", user.display_name),
            Style::default().fg(COLOR_ACCENT),
        )),
        Line::from(Span::styled(
            format!(" {}", user.email),
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(Span::styled(
            format!(" stage: {}", user.stage.name),
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(Span::styled(
            " [x] sign out",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), content);
}
