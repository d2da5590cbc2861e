//! Mutable application state containers.
//!
//! - [`ProfileState`]: the current user view model with a per-activation
//!   generation counter guarding against stale fetch results.
//! - [`NotificationState`]: latest unread notification count from the
//!   polling task.

use crate::error::ApiError;
use crate::models::RawProfile;
use crate::view_state::{normalize, UserViewModel};
use chrono::{DateTime, Utc};

/// Profile display state with stale-result protection.
///
/// The profile fetch resolves on the runtime while the consuming screen may
/// already have navigated away. A naive fetch-then-set is unsafe under fast
/// navigation, so every activation takes a new generation token via
/// [`ProfileState::begin_load`]; a result arriving with any other token is
/// discarded without side effect.
#[derive(Debug)]
pub struct ProfileState {
    view: UserViewModel,
    loading: bool,
    generation: u64,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileState {
    /// Start with the fully-defaulted view model, not loading.
    pub fn new() -> Self {
        Self {
            view: UserViewModel::default(),
            loading: false,
            generation: 0,
        }
    }

    /// The current display model. Always fully populated.
    pub fn view(&self) -> &UserViewModel {
        &self.view
    }

    /// Whether a fetch for the current generation is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current generation token.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Begin a fetch for a fresh activation and return its token.
    ///
    /// Bumping the generation invalidates any result still in flight from a
    /// previous activation.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        tracing::debug!(generation = self.generation, "profile load started");
        self.generation
    }

    /// Invalidate the current activation without starting a new fetch.
    ///
    /// Called when the consuming screen is torn down while a fetch is in
    /// flight; the eventual result will no longer match and gets discarded.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.loading = false;
    }

    /// Apply a fetch result for the given generation token.
    ///
    /// A stale token is a silent no-op (returns `false`). A matching `Ok`
    /// installs the normalized model; a matching `Err` installs the fixed
    /// default model; the failure never propagates, and no retry is issued.
    pub fn finish_load(&mut self, generation: u64, result: Result<RawProfile, ApiError>) -> bool {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "stale profile result discarded"
            );
            return false;
        }

        self.loading = false;
        self.view = match result {
            Ok(raw) => normalize(&raw),
            Err(err) => {
                tracing::warn!(error = %err, "profile fetch failed, using defaults");
                UserViewModel::default()
            }
        };
        true
    }
}

/// Latest unread notification count.
#[derive(Debug, Default)]
pub struct NotificationState {
    count: u32,
    updated_at: Option<DateTime<Utc>>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unread count as of the last successful poll.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// When the count was last updated, if ever.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Record a freshly polled count.
    pub fn set_count(&mut self, count: u32) {
        self.count = count;
        self.updated_at = Some(Utc::now());
    }
}
