//! Service trait abstractions.
//!
//! The view-state core talks to the outside world only through these seams,
//! enabling dependency injection and mocking in tests. Production
//! implementations live in [`crate::adapters`].

use crate::error::ApiResult;
use crate::models::RawProfile;
use async_trait::async_trait;

/// Cached-session authority.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Whether a session is currently active.
    ///
    /// Synchronous and side-effect-free: answers from cached state, never
    /// from the network. This is the flag the session gate reads on every
    /// evaluation.
    fn is_logged_in(&self) -> bool;

    /// End the session: clear persisted state and best-effort invalidate the
    /// remote session.
    async fn logout(&self) -> ApiResult<()>;
}

/// Remote profile retrieval.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Fetch the raw profile payload for the current user.
    async fn fetch_profile(&self) -> ApiResult<RawProfile>;
}

/// Remote unread-notification count.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Fetch the current unread count. Polled by the shell on a fixed
    /// interval.
    async fn fetch_notification_count(&self) -> ApiResult<u32>;
}
