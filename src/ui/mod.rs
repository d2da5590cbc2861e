//! Rendering layer.
//!
//! Pure functions from view state to widgets. Behavior (visibility, layout
//! state, gating, normalization) lives in the core modules; everything here
//! only reads the snapshot handed to it through [`RenderContext`].

pub mod badges;
pub mod dashboard;
pub mod floating_nav;
pub mod header;
pub mod login;
pub mod panels;
pub mod sidebar;
pub mod theme;

pub use floating_nav::FloatingNav;

use crate::overlay::OverlayKind;
use crate::router::{Location, Route};
use crate::view_state::UserViewModel;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Snapshot of everything the render pass needs, borrowed from the shell.
pub struct RenderContext<'a> {
    pub route: Route,
    pub user: &'a UserViewModel,
    pub profile_loading: bool,
    pub is_collapsed: bool,
    pub notification_count: u32,
    pub notifications_visible: bool,
    pub account_visible: bool,
    pub floating_nav_hidden: bool,
    pub return_to: Option<&'a Location>,
    pub dev_mode: bool,
}

/// Render one frame.
pub fn render(frame: &mut Frame, ctx: &RenderContext) {
    let area = frame.area();

    match ctx.route {
        Route::Splash => {
            login::render_splash(frame, area);
            return;
        }
        Route::Login | Route::Signup | Route::Registration => {
            login::render_login(frame, area, ctx.return_to, ctx.dev_mode);
            return;
        }
        _ => {}
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    header::render_header(
        frame,
        rows[0],
        ctx.user,
        ctx.notification_count,
        ctx.profile_loading,
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(sidebar::sidebar_width(ctx.is_collapsed)),
            Constraint::Min(0),
        ])
        .split(rows[1]);

    sidebar::render_sidebar(frame, columns[0], ctx.route, ctx.is_collapsed);

    match ctx.route {
        Route::Dashboard => {
            dashboard::render_dashboard(frame, columns[1], ctx.user, ctx.profile_loading);
        }
        other => render_section_placeholder(frame, columns[1], other),
    }

    if area.height > 1 {
        let nav_area = Rect::new(
            area.x + area.width.saturating_sub(12),
            area.y + area.height - 1,
            12.min(area.width),
            1,
        );
        floating_nav::render_floating_nav(frame, nav_area, ctx.floating_nav_hidden);
    }

    if ctx.notifications_visible {
        let (_, content) = panels::overlay_regions(area, OverlayKind::Notifications);
        panels::render_notifications_panel(frame, content, ctx.notification_count);
    }
    if ctx.account_visible {
        let (_, content) = panels::overlay_regions(area, OverlayKind::Account);
        panels::render_account_panel(frame, content, ctx.user);
    }
}

fn render_section_placeholder(frame: &mut Frame, area: Rect, route: Route) {
    let title = match route {
        Route::Wallet => " wallet ",
        Route::Orders => " orders ",
        Route::Account => " account ",
        _ => " plaza ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::COLOR_BORDER))
        .title(title);
    let body = Line::from(Span::styled(
        " nothing here yet",
        Style::default().fg(theme::COLOR_DIM),
    ));
    frame.render_widget(Paragraph::new(body).block(block), area);
}
