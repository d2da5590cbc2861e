//! Route definitions and the session gate.
//!
//! [`SessionGate::evaluate`] wraps the routed tree: it runs before anything
//! mounts and decides render-or-redirect from the cached session flag alone.
//! The check is synchronous and makes no network call. Unauthenticated access
//! fails closed: any path not explicitly public is treated as protected,
//! with no distinction between unknown and known-protected paths.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Path of the login screen, the redirect target for denied navigation.
pub const LOGIN_PATH: &str = "/login";

/// Paths reachable without a session.
static PUBLIC_PATHS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from([LOGIN_PATH, "/signup", "/registration", "/"]));

/// Prefix covering the multi-step signup flow.
const SIGNUP_PREFIX: &str = "/signup/";

/// A point in the navigation history, carried through redirects so a
/// post-login flow can return to where the user was headed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
}

impl Location {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
        }
    }
}

/// The screens the shell navigates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Root splash, rendered by the shell itself (never by gated children).
    Splash,
    Login,
    Signup,
    Registration,
    Dashboard,
    Wallet,
    Orders,
    Account,
}

impl Route {
    /// The path this route lives at.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Splash => "/",
            Route::Login => LOGIN_PATH,
            Route::Signup => "/signup",
            Route::Registration => "/registration",
            Route::Dashboard => "/dashboard",
            Route::Wallet => "/dashboard/wallet",
            Route::Orders => "/dashboard/orders",
            Route::Account => "/dashboard/account",
        }
    }

    /// Resolve a path back to a route, if the shell knows it.
    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            "/" => Some(Route::Splash),
            LOGIN_PATH => Some(Route::Login),
            "/signup" => Some(Route::Signup),
            "/registration" => Some(Route::Registration),
            "/dashboard" => Some(Route::Dashboard),
            "/dashboard/wallet" => Some(Route::Wallet),
            "/dashboard/orders" => Some(Route::Orders),
            "/dashboard/account" => Some(Route::Account),
            _ => None,
        }
    }

    /// Location for this route.
    pub fn location(&self) -> Location {
        Location::new(self.path())
    }
}

/// Outcome of a gate evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Render the gated children.
    Render,
    /// Render nothing: the root splash is owned by the shell, and rendering
    /// children at `/` would duplicate it.
    RenderNothing,
    /// Do not render children; navigate to `to`, remembering `from`.
    Redirect {
        to: &'static str,
        from: Location,
    },
}

/// Route-level authorization check.
pub struct SessionGate;

impl SessionGate {
    /// Decide render-or-redirect for `location` given the cached session flag.
    ///
    /// Rules, in order:
    /// 1. No session and a non-public path: redirect to [`LOGIN_PATH`],
    ///    carrying `location` so login can return to it.
    /// 2. The root path never renders children, session or not.
    /// 3. Everything else renders.
    pub fn evaluate(logged_in: bool, location: &Location) -> GateDecision {
        let path = location.pathname.as_str();

        if !logged_in && !Self::is_public_path(path) {
            tracing::debug!(path, "gate denied, redirecting to login");
            return GateDecision::Redirect {
                to: LOGIN_PATH,
                from: location.clone(),
            };
        }

        if path == "/" {
            return GateDecision::RenderNothing;
        }

        GateDecision::Render
    }

    /// Whether `path` is reachable without a session.
    fn is_public_path(path: &str) -> bool {
        PUBLIC_PATHS.contains(path) || path.starts_with(SIGNUP_PREFIX)
    }
}
