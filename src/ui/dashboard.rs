//! Dashboard body: balances, stage info and the next-stage progress panel.

use crate::ui::badges::{badge_label, next_badge_index};
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_PROGRESS, COLOR_SUCCESS};
use crate::view_state::UserViewModel;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

/// Build the balance/credit summary lines.
pub fn build_balance_lines(user: &UserViewModel) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(" Balance      ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                format!("{:.2}", user.balance),
                Style::default().fg(COLOR_SUCCESS),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Total credit ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                format!("{:.2}", user.total_credit),
                Style::default().fg(COLOR_ACCENT),
            ),
        ]),
    ]
}

/// Label on the next-stage progress gauge.
///
/// Shows the upcoming-level badge label when one can be derived; the numeric
/// label is omitted otherwise. On the last stage there is nothing to progress
/// toward.
pub fn build_progress_label(user: &UserViewModel) -> String {
    if user.is_last_stage {
        return format!("{:.0}% · top stage", user.progress_percent);
    }
    match badge_label(next_badge_index(user)) {
        Some(label) => format!("{:.0}% → {label}", user.progress_percent),
        None => format!("{:.0}%", user.progress_percent),
    }
}

/// Render the dashboard body.
pub fn render_dashboard(frame: &mut Frame, area: Rect, user: &UserViewModel, loading: bool) {
    if loading {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            " loading profile…",
            Style::default().fg(COLOR_DIM),
        )));
        frame.render_widget(placeholder, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let balances = Paragraph::new(build_balance_lines(user)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER))
            .title(" wallet "),
    );
    frame.render_widget(balances, rows[0]);

    let ratio = (user.progress_percent / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER))
                .title(" progress "),
        )
        .gauge_style(Style::default().fg(COLOR_PROGRESS))
        .ratio(ratio)
        .label(build_progress_label(user));
    frame.render_widget(gauge, rows[1]);

    let stage_line = Line::from(vec![
        Span::styled(" Stage ", Style::default().fg(COLOR_DIM)),
        Span::styled(user.stage.name.clone(), Style::default().fg(COLOR_ACCENT)),
        Span::styled(
            if user.stage.discount.is_empty() {
                String::new()
            } else {
                format!("  ·  {} {} off", user.stage.discount, user.stage.discount_type)
            },
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(stage_line), rows[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RawProfile, RawStage};
    use crate::view_state::normalize;

    fn user(stage: &str, next: Option<&str>, percentage: f64, last: bool) -> UserViewModel {
        normalize(&RawProfile {
            stage: Some(RawStage {
                name: Some(stage.to_string()),
                ..RawStage::default()
            }),
            next_stage: next.map(str::to_string),
            percentage: Some(percentage),
            is_last_stage: Some(last),
            ..RawProfile::default()
        })
    }

    #[test]
    fn test_progress_label_shows_upcoming_level() {
        // Stage "Level 3" with no explicit next stage: next badge is 4
        let label = build_progress_label(&user("Level 3", None, 62.0, false));
        assert_eq!(label, "62% → Lv 4");
    }

    #[test]
    fn test_progress_label_uses_next_stage_when_named() {
        let label = build_progress_label(&user("Level 3", Some("Level 5"), 10.0, false));
        assert_eq!(label, "10% → Lv 6");
    }

    #[test]
    fn test_progress_label_omits_numeric_label_when_unparseable() {
        let label = build_progress_label(&user("Gold", None, 50.0, false));
        assert_eq!(label, "50%");
    }

    #[test]
    fn test_progress_label_on_last_stage() {
        let label = build_progress_label(&user("Level 9", None, 100.0, true));
        assert_eq!(label, "100% · top stage");
    }

    #[test]
    fn test_balance_lines_format() {
        let vm = normalize(&RawProfile {
            balance: Some(120.5),
            total_credit: Some(300.0),
            ..RawProfile::default()
        });
        let text: String = build_balance_lines(&vm)
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.as_ref()))
            .collect();
        assert!(text.contains("120.50"));
        assert!(text.contains("300.00"));
    }
}
