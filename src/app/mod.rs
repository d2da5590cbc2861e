//! Application shell.
//!
//! [`App`] owns the view-state core (layout controller, overlay manager,
//! event bus, profile and notification state) and maps terminal events onto
//! it. Async work (profile fetch, logout, notification polls) runs on the
//! runtime and reports back through [`AppMessage`]s so all state mutation
//! stays on the UI loop.

mod navigation;

use crate::config::PlazaConfig;
use crate::error::ApiResult;
use crate::events::EventBus;
use crate::models::RawProfile;
use crate::overlay::{OverlayKind, OverlayManager};
use crate::router::{Location, Route};
use crate::state::{NotificationState, ProfileState};
use crate::traits::{ProfileService, SessionStore};
use crate::ui::{self, FloatingNav, RenderContext};
use crate::view_state::LayoutController;
use crate::viewport;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use ratatui::Frame;
use std::rc::Rc;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Messages sent back to the UI loop by async tasks.
#[derive(Debug)]
pub enum AppMessage {
    /// Profile fetch finished for the given generation token.
    ProfileLoaded {
        generation: u64,
        result: ApiResult<RawProfile>,
    },
    /// Notification poll produced a fresh count.
    NotificationCount(u32),
    /// Logout completed; the session store is already cleared.
    LoggedOut,
}

/// The shell: view-state core plus event wiring.
pub struct App {
    config: PlazaConfig,
    bus: Rc<EventBus>,
    pub layout: LayoutController,
    pub overlays: OverlayManager,
    pub profile: ProfileState,
    pub notifications: NotificationState,
    floating_nav: FloatingNav,
    session: Arc<dyn SessionStore>,
    profile_service: Arc<dyn ProfileService>,
    tx: mpsc::UnboundedSender<AppMessage>,
    route: Route,
    return_to: Option<Location>,
    last_frame_area: Rect,
    should_quit: bool,
}

impl App {
    /// Wire up the shell.
    ///
    /// The bus, overlay manager and floating control are constructed here so
    /// their subscriptions exist before the first event arrives.
    pub fn new(
        config: PlazaConfig,
        session: Arc<dyn SessionStore>,
        profile_service: Arc<dyn ProfileService>,
        tx: mpsc::UnboundedSender<AppMessage>,
        initial_width_px: u32,
    ) -> Self {
        let bus = EventBus::new();
        let floating_nav = FloatingNav::new(&bus);

        let mut overlays = OverlayManager::new(Rc::clone(&bus));
        overlays.register(OverlayKind::Notifications);
        overlays.register(OverlayKind::Account);

        Self {
            config,
            bus,
            layout: LayoutController::new(initial_width_px),
            overlays,
            profile: ProfileState::new(),
            notifications: NotificationState::new(),
            floating_nav,
            session,
            profile_service,
            tx,
            route: Route::Splash,
            return_to: None,
            last_frame_area: Rect::default(),
            should_quit: false,
        }
    }

    /// Current route.
    pub fn route(&self) -> Route {
        self.route
    }

    /// The shared event bus, for embedders adding their own subscribers.
    pub fn bus(&self) -> &Rc<EventBus> {
        &self.bus
    }

    /// Origin remembered by the last gate redirect.
    pub fn return_to(&self) -> Option<&Location> {
        self.return_to.as_ref()
    }

    /// Whether the shell should exit its loop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether the floating navigation control is hidden by an open overlay.
    pub fn floating_nav_hidden(&self) -> bool {
        self.floating_nav.is_hidden()
    }

    fn in_chrome(&self) -> bool {
        Self::is_gated_section(self.route)
    }

    pub(crate) fn is_gated_section(route: Route) -> bool {
        matches!(
            route,
            Route::Dashboard | Route::Wallet | Route::Orders | Route::Account
        )
    }

    // ========================================================================
    // Terminal events
    // ========================================================================

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.route {
            Route::Splash => {
                if key.code == KeyCode::Enter {
                    self.navigate(Route::Dashboard);
                } else if key.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            Route::Login | Route::Signup | Route::Registration => match key.code {
                KeyCode::Enter => self.complete_login(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            _ => self.handle_chrome_key(key),
        }
    }

    fn handle_chrome_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('t') | KeyCode::Tab => self.layout.toggle_sidebar(),
            KeyCode::Char('n') => self.overlays.toggle(OverlayKind::Notifications),
            KeyCode::Char('a') => self.overlays.toggle(OverlayKind::Account),
            KeyCode::Esc => {
                self.overlays.hide(OverlayKind::Notifications);
                self.overlays.hide(OverlayKind::Account);
            }
            KeyCode::Char('1') => self.navigate(Route::Dashboard),
            KeyCode::Char('2') => self.navigate(Route::Wallet),
            KeyCode::Char('3') => self.navigate(Route::Orders),
            KeyCode::Char('4') => self.navigate(Route::Account),
            KeyCode::Char('x') => self.request_logout(),
            _ => {}
        }
    }

    /// Handle a mouse event. Only pointer-downs matter to the core.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if let MouseEventKind::Down(_) = event.kind {
            self.handle_pointer_down(event.column, event.row);
        }
    }

    /// Feed a pointer-down into the overlay scope, then the triggers.
    ///
    /// Order matters and is safe: the dismissal predicate treats a position
    /// inside a trigger as not-outside, so a trigger click falls through to
    /// the toggle below without double-handling.
    pub fn handle_pointer_down(&mut self, column: u16, row: u16) {
        if !self.in_chrome() {
            return;
        }
        let pos = Position::new(column, row);
        self.overlays.pointer_down(pos);

        for kind in [OverlayKind::Notifications, OverlayKind::Account] {
            let (trigger, _) = ui::panels::overlay_regions(self.last_frame_area, kind);
            if trigger.contains(pos) {
                self.overlays.toggle(kind);
            }
        }
    }

    /// Feed a viewport resize, in pixels.
    pub fn handle_resize(&mut self, width_px: u32) {
        self.layout.handle_resize(width_px);
    }

    /// Feed a terminal resize, in columns.
    pub fn handle_resize_columns(&mut self, columns: u16) {
        self.handle_resize(viewport::width_px_for_columns(columns));
    }

    // ========================================================================
    // Async results
    // ========================================================================

    /// Apply a message from an async task.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::ProfileLoaded { generation, result } => {
                self.profile.finish_load(generation, result);
            }
            AppMessage::NotificationCount(count) => {
                self.notifications.set_count(count);
            }
            AppMessage::LoggedOut => {
                // Re-run the gate against the now-cleared session; it will
                // redirect to login and remember where the user was.
                self.navigate_to_path(self.route.path());
            }
        }
    }

    /// Kick off the per-mount profile fetch. Exactly one attempt; failures
    /// resolve to the default view model, stale results are discarded by
    /// generation.
    fn start_profile_fetch(&mut self) {
        let generation = self.profile.begin_load();
        let service = Arc::clone(&self.profile_service);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = service.fetch_profile().await;
            let _ = tx.send(AppMessage::ProfileLoaded { generation, result });
        });
    }

    /// Start logout; completion comes back as [`AppMessage::LoggedOut`].
    fn request_logout(&mut self) {
        let session = Arc::clone(&self.session);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            if let Err(err) = session.logout().await {
                tracing::warn!(error = %err, "logout failed");
            }
            let _ = tx.send(AppMessage::LoggedOut);
        });
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Render one frame and record overlay geometry for dismissal.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_frame_area = area;

        if self.in_chrome() {
            for kind in [OverlayKind::Notifications, OverlayKind::Account] {
                let (trigger, content) = ui::panels::overlay_regions(area, kind);
                self.overlays
                    .set_regions(kind, Some(trigger), Some(content));
            }
        }

        let ctx = RenderContext {
            route: self.route,
            user: self.profile.view(),
            profile_loading: self.profile.is_loading(),
            is_collapsed: self.layout.is_collapsed(),
            notification_count: self.notifications.count(),
            notifications_visible: self.overlays.is_visible(OverlayKind::Notifications),
            account_visible: self.overlays.is_visible(OverlayKind::Account),
            floating_nav_hidden: self.floating_nav.is_hidden(),
            return_to: self.return_to.as_ref(),
            dev_mode: self.config.dev_mode,
        };
        ui::render(frame, &ctx);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::error::ApiError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    /// Session store with a settable flag.
    pub struct FlagSession {
        flag: AtomicBool,
    }

    impl FlagSession {
        pub fn new(logged_in: bool) -> Arc<Self> {
            Arc::new(Self {
                flag: AtomicBool::new(logged_in),
            })
        }

        pub fn set(&self, logged_in: bool) {
            self.flag.store(logged_in, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl SessionStore for FlagSession {
        fn is_logged_in(&self) -> bool {
            self.flag.load(Ordering::SeqCst)
        }

        async fn logout(&self) -> ApiResult<()> {
            self.flag.store(false, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Profile service handing out a queued result per call.
    pub struct ScriptedProfiles {
        results: Mutex<Vec<ApiResult<RawProfile>>>,
    }

    impl ScriptedProfiles {
        pub fn new(results: Vec<ApiResult<RawProfile>>) -> Arc<Self> {
            Arc::new(Self {
                results: Mutex::new(results),
            })
        }
    }

    #[async_trait]
    impl ProfileService for ScriptedProfiles {
        async fn fetch_profile(&self) -> ApiResult<RawProfile> {
            let mut results = self.results.lock().expect("results lock");
            if results.is_empty() {
                Err(ApiError::Status { status: 500 })
            } else {
                results.remove(0)
            }
        }
    }

    pub fn test_app(
        logged_in: bool,
        profiles: Vec<ApiResult<RawProfile>>,
        width_px: u32,
    ) -> (App, mpsc::UnboundedReceiver<AppMessage>, Arc<FlagSession>) {
        let session = FlagSession::new(logged_in);
        let (tx, rx) = mpsc::unbounded_channel();
        let app = App::new(
            PlazaConfig::default(),
            Arc::clone(&session) as Arc<dyn SessionStore>,
            ScriptedProfiles::new(profiles),
            tx,
            width_px,
        );
        (app, rx, session)
    }
}
