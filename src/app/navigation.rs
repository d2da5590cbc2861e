//! Navigation: every route change runs through the session gate.

use super::App;
use crate::router::{GateDecision, Location, Route, SessionGate};

impl App {
    /// Navigate to a known route.
    pub fn navigate(&mut self, route: Route) {
        self.navigate_to_path(route.path());
    }

    /// Navigate to a path, honoring the gate decision.
    ///
    /// A redirect stores the origin so [`App::complete_login`] can return to
    /// it. An unknown-but-permitted path has no screen to show; the shell
    /// stays put and logs it.
    pub fn navigate_to_path(&mut self, path: &str) {
        let location = Location::new(path);
        match SessionGate::evaluate(self.session.is_logged_in(), &location) {
            GateDecision::Redirect { from, .. } => {
                self.return_to = Some(from);
                self.set_route(Route::Login);
            }
            GateDecision::RenderNothing => {
                self.set_route(Route::Splash);
            }
            GateDecision::Render => match Route::from_path(path) {
                Some(route) => self.set_route(route),
                None => {
                    tracing::warn!(path, "no screen for path, staying put");
                }
            },
        }
    }

    /// Re-enter the app after the external login flow.
    ///
    /// Targets the origin remembered by the redirect, falling back to the
    /// dashboard. If the session is still inactive the gate denies again and
    /// restores the origin, so nothing is lost by pressing this early.
    pub fn complete_login(&mut self) {
        let target = self
            .return_to
            .take()
            .map(|location| location.pathname)
            .unwrap_or_else(|| Route::Dashboard.path().to_string());
        self.navigate_to_path(&target);
    }

    fn set_route(&mut self, route: Route) {
        if route == self.route {
            return;
        }

        let was_gated = Self::is_gated_section(self.route);
        let now_gated = Self::is_gated_section(route);

        if was_gated && !now_gated {
            // The chrome unmounts: discard any in-flight profile result and
            // tear down the overlay surfaces.
            self.profile.invalidate();
            self.overlays.hide(crate::overlay::OverlayKind::Notifications);
            self.overlays.hide(crate::overlay::OverlayKind::Account);
            self.overlays
                .set_regions(crate::overlay::OverlayKind::Notifications, None, None);
            self.overlays
                .set_regions(crate::overlay::OverlayKind::Account, None, None);
        }

        if !was_gated && now_gated {
            // Mounting the gated section: exactly one profile fetch
            self.start_profile_fetch();
        }

        // A navigation action on a mobile-width viewport puts the sidebar away
        if self.layout.is_mobile() {
            self.layout.set_collapsed(true);
        }

        tracing::debug!(from = self.route.path(), to = route.path(), "navigated");
        self.route = route;
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_gate_denies_and_remembers_origin() {
        let (mut app, _rx, _session) = test_app(false, vec![], 1280);

        app.navigate_to_path("/dashboard/wallet");
        assert_eq!(app.route(), Route::Login);
        assert_eq!(
            app.return_to().map(|l| l.pathname.as_str()),
            Some("/dashboard/wallet")
        );
    }

    #[test]
    fn test_root_path_renders_splash_for_any_session() {
        let (mut app, _rx, _session) = test_app(false, vec![], 1280);
        app.navigate_to_path("/");
        assert_eq!(app.route(), Route::Splash);

        let (mut app, _rx, _session) = test_app(true, vec![], 1280);
        app.navigate_to_path("/");
        assert_eq!(app.route(), Route::Splash);
    }

    #[test]
    fn test_public_paths_reachable_logged_out() {
        let (mut app, _rx, _session) = test_app(false, vec![], 1280);
        app.navigate_to_path("/registration");
        assert_eq!(app.route(), Route::Registration);
        assert!(app.return_to().is_none());
    }

    #[test]
    fn test_unknown_path_logged_in_stays_put() {
        let (mut app, _rx, _session) = test_app(true, vec![], 1280);
        app.navigate_to_path("/registration");
        assert_eq!(app.route(), Route::Registration);

        app.navigate_to_path("/not/a/screen");
        assert_eq!(app.route(), Route::Registration);
    }

    #[tokio::test]
    async fn test_login_returns_to_origin() {
        let (mut app, _rx, session) = test_app(false, vec![], 1280);

        app.navigate_to_path("/dashboard/orders");
        assert_eq!(app.route(), Route::Login);

        // Login completes externally; the session flag flips
        session.set(true);
        app.complete_login();
        assert_eq!(app.route(), Route::Orders);
        assert!(app.return_to().is_none());
    }

    #[tokio::test]
    async fn test_early_login_keeps_origin() {
        let (mut app, _rx, _session) = test_app(false, vec![], 1280);

        app.navigate_to_path("/dashboard/orders");
        // Still logged out: the gate denies again and restores the origin
        app.complete_login();
        assert_eq!(app.route(), Route::Login);
        assert_eq!(
            app.return_to().map(|l| l.pathname.as_str()),
            Some("/dashboard/orders")
        );
    }

    #[tokio::test]
    async fn test_login_without_origin_lands_on_dashboard() {
        let (mut app, _rx, _session) = test_app(true, vec![], 1280);
        app.complete_login();
        assert_eq!(app.route(), Route::Dashboard);
    }

    #[tokio::test]
    async fn test_mobile_navigation_auto_collapses() {
        let (mut app, _rx, _session) = test_app(true, vec![], 800);
        app.navigate(Route::Dashboard);

        // User opens the sidebar, then navigates: it collapses again
        app.layout.toggle_sidebar();
        assert!(!app.layout.is_collapsed());
        app.navigate(Route::Wallet);
        assert!(app.layout.is_collapsed());
    }

    #[tokio::test]
    async fn test_desktop_navigation_leaves_sidebar_alone() {
        let (mut app, _rx, _session) = test_app(true, vec![], 1280);
        app.navigate(Route::Dashboard);
        assert!(!app.layout.is_collapsed());
        app.navigate(Route::Wallet);
        assert!(!app.layout.is_collapsed());
    }

    #[tokio::test]
    async fn test_leaving_section_tears_down_overlays() {
        let (mut app, _rx, _session) = test_app(true, vec![], 1280);
        app.navigate(Route::Dashboard);
        app.overlays.show(crate::overlay::OverlayKind::Account);

        app.navigate(Route::Splash);
        assert!(!app.overlays.any_visible());
        assert!(!app.profile.is_loading());
    }
}
