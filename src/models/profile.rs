//! Raw profile payload as delivered by the profile endpoint.
//!
//! Every field is optional: the backend omits fields freely depending on
//! account age and stage, and the display layer must not depend on any of
//! them being present. [`crate::view_state::normalize`] turns this shape into
//! the always-fully-populated [`crate::view_state::UserViewModel`].

use serde::{Deserialize, Serialize};

/// Loyalty-stage sub-object of the raw profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawStage {
    /// Stage display name, e.g. "Level 3". The trailing integer doubles as
    /// the badge asset index.
    pub name: Option<String>,
    /// Discount amount, sent as a string by the backend.
    pub discount: Option<String>,
    /// Discount type label ("percent", "fixed", ...).
    pub discount_type: Option<String>,
    /// Order-free threshold label.
    pub no_order: Option<String>,
}

/// Raw user profile payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawProfile {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Pre-joined name, used when the first/last pair is incomplete.
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub gender: Option<String>,
    pub status: Option<String>,
    /// Filename of an uploaded profile image, relative to the uploads path.
    pub profile_image: Option<String>,
    /// Absolute avatar URL, used when no uploaded image exists.
    pub avatar: Option<String>,
    pub balance: Option<f64>,
    pub total_credit: Option<f64>,
    pub stage: Option<RawStage>,
    /// Numeric level, used when the stage name carries no trailing integer.
    pub level: Option<u32>,
    /// Progress toward the next stage, 0..=100.
    pub percentage: Option<f64>,
    /// Legacy name for `percentage`, still sent by older backends.
    pub progress: Option<f64>,
    pub next_stage: Option<String>,
    pub is_last_stage: Option<bool>,
}
