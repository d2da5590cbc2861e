//! Production implementations of the service traits.
//!
//! - [`ApiClient`]: reqwest-based client for the profile, notification and
//!   session-invalidation endpoints.
//! - [`SessionFileStore`]: persisted session credentials backing the cached
//!   login flag the session gate reads.

pub mod api;
pub mod session_file;

pub use api::ApiClient;
pub use session_file::{SessionCredentials, SessionFileStore};

use crate::error::ApiResult;
use crate::traits::SessionStore;
use async_trait::async_trait;

/// Always-active session for local development (PLAZA_DEV); logout is a
/// no-op.
pub struct DevSession;

#[async_trait]
impl SessionStore for DevSession {
    fn is_logged_in(&self) -> bool {
        true
    }

    async fn logout(&self) -> ApiResult<()> {
        Ok(())
    }
}
