//! Header bar: identity display and overlay triggers.

use crate::ui::badges::{badge_label, current_badge_index};
use crate::ui::theme::{COLOR_ACCENT, COLOR_ALERT, COLOR_BORDER, COLOR_DIM};
use crate::view_state::UserViewModel;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Build the header content line.
///
/// Left: app title and the notification bell with the unread count. Right:
/// the user's display name and the achieved-level badge label. While the
/// profile is loading, identity shows a placeholder instead of defaults that
/// would flash and then change.
pub fn build_header_line(
    user: &UserViewModel,
    notification_count: u32,
    loading: bool,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![
        Span::styled(" plaza ", Style::default().fg(COLOR_ACCENT)),
        Span::styled("· ", Style::default().fg(COLOR_DIM)),
    ];

    if notification_count > 0 {
        spans.push(Span::styled(
            format!("bell({notification_count}) "),
            Style::default().fg(COLOR_ALERT),
        ));
    } else {
        spans.push(Span::styled("bell ", Style::default().fg(COLOR_DIM)));
    }

    spans.push(Span::styled("· ", Style::default().fg(COLOR_DIM)));

    if loading {
        spans.push(Span::styled("loading…", Style::default().fg(COLOR_DIM)));
    } else {
        spans.push(Span::styled(
            user.display_name.clone(),
            Style::default().fg(COLOR_ACCENT),
        ));
        // Badge label is omitted when no level index can be derived
        if let Some(label) = badge_label(current_badge_index(user)) {
            spans.push(Span::styled(
                format!(" [{label}]"),
                Style::default().fg(COLOR_DIM),
            ));
        }
    }

    Line::from(spans)
}

/// Render the header bar.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    user: &UserViewModel,
    notification_count: u32,
    loading: bool,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let paragraph =
        Paragraph::new(build_header_line(user, notification_count, loading)).block(block);
    frame.render_widget(paragraph, area);
}
