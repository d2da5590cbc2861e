//! Common test utilities for integration tests.
//!
//! Provides mock service implementations and profile fixtures shared by the
//! integration test binaries.

pub mod mocks;

#[allow(unused_imports)]
pub use mocks::*;

use plaza::models::{RawProfile, RawStage};

/// A representative fully-populated profile payload.
#[allow(dead_code)]
pub fn sample_profile() -> RawProfile {
    RawProfile {
        id: Some("u-42".to_string()),
        first_name: Some("Sana".to_string()),
        last_name: Some("Karimi".to_string()),
        email: Some("sana@example.com".to_string()),
        profile_image: Some("sana.png".to_string()),
        balance: Some(120.5),
        total_credit: Some(300.0),
        stage: Some(RawStage {
            name: Some("Level 3".to_string()),
            discount: Some("10".to_string()),
            discount_type: Some("percent".to_string()),
            no_order: Some("2".to_string()),
        }),
        percentage: Some(62.0),
        next_stage: Some("Level 4".to_string()),
        is_last_stage: Some(false),
        ..RawProfile::default()
    }
}
