//! Mock service implementations for integration tests.

use async_trait::async_trait;
use plaza::error::{ApiError, ApiResult};
use plaza::models::RawProfile;
use plaza::traits::{NotificationService, ProfileService, SessionStore};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

/// Session store with an externally settable flag.
pub struct FlagSession {
    flag: AtomicBool,
}

impl FlagSession {
    pub fn new(logged_in: bool) -> Arc<Self> {
        Arc::new(Self {
            flag: AtomicBool::new(logged_in),
        })
    }

    /// Simulate the external login flow completing.
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

/// Profile service handing out one queued result per call, counting calls.
pub struct ScriptedProfiles {
    results: Mutex<Vec<ApiResult<RawProfile>>>,
    calls: AtomicU32,
}

impl ScriptedProfiles {
    pub fn new(results: Vec<ApiResult<RawProfile>>) -> Arc<Self> {
        Arc::new(Self {
            results: Mutex::new(results),
            calls: AtomicU32::new(0),
        })
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileService for ScriptedProfiles {
    async fn fetch_profile(&self) -> ApiResult<RawProfile> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut results = self.results.lock().expect("results lock");
        if results.is_empty() {
            Err(ApiError::Status { status: 500 })
        } else {
            results.remove(0)
        }
    }
}

/// Notification service returning a fixed count.
pub struct FixedNotifications(pub u32);

#[async_trait]
impl NotificationService for FixedNotifications {
    async fn fetch_notification_count(&self) -> ApiResult<u32> {
        Ok(self.0)
    }
}
