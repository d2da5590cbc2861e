//! User display model and the normalizer that builds it.
//!
//! [`normalize`] is the single seam between the profile-fetch boundary and
//! every component that displays user identity, level or progress. It is a
//! pure, total function: any [`RawProfile`], however sparse or malformed,
//! produces a fully-populated [`UserViewModel`]. Missing fields resolve
//! through fixed fallback chains; nothing here performs I/O.

use crate::models::RawProfile;
use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix applied to uploaded profile image filenames.
pub const UPLOADS_BASE_PATH: &str = "/uploads/";

/// Avatar shown when the profile carries neither an upload nor an avatar URL.
pub const DEFAULT_AVATAR_PATH: &str = "assets/icons/avatar-default.png";

/// Display name used when no name information survives the fallback chain.
const FALLBACK_DISPLAY_NAME: &str = "User";

/// Matches the last run of digits in a string.
static TRAILING_INT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\D*$").expect("trailing-int pattern is valid"));

/// Loyalty-stage fields of the display model. Always fully populated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageView {
    pub name: String,
    pub discount: String,
    pub discount_type: String,
    pub no_order: String,
}

/// Display-ready user model.
///
/// Constructed fresh on every normalization call, immutable once built, and
/// superseded (not mutated) by the next fetch. Every field is populated; no
/// consumer needs to re-check for absence.
#[derive(Debug, Clone, PartialEq)]
pub struct UserViewModel {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub email: String,
    pub phone_number: String,
    pub gender: String,
    pub status: String,
    pub profile_image: String,
    pub avatar_url: String,
    pub balance: f64,
    pub total_credit: f64,
    pub stage: StageView,
    pub level_number: u32,
    pub progress_percent: f64,
    pub next_stage: String,
    pub is_last_stage: bool,
}

impl Default for UserViewModel {
    /// The fixed default model: what an empty payload normalizes to.
    fn default() -> Self {
        normalize(&RawProfile::default())
    }
}

/// Extract the last run of digits in `s` as an integer.
///
/// Returns `None` for an empty string, a string with no digits, or a digit
/// run too large for `u32`. Callers holding an `Option<&str>` map through
/// this, so absent input also yields `None`.
pub fn extract_trailing_int(s: &str) -> Option<u32> {
    TRAILING_INT
        .captures(s)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Build a [`UserViewModel`] from a raw payload.
///
/// Fallback chains, first defined wins:
/// - `display_name`: `first_name + " " + last_name` (both non-empty) →
///   `full_name` → `"User"`.
/// - `avatar_url`: uploads-prefixed `profile_image` → `avatar` →
///   [`DEFAULT_AVATAR_PATH`].
/// - `level_number`: trailing integer of `stage.name` → `level` → `1`.
/// - `progress_percent`: `percentage` → `progress` → `0.0`.
/// - Stage strings come from the `stage` sub-object, defaulting to `""`.
///
/// Idempotent over its own output: feeding the already-defaulted values back
/// through produces the same values.
pub fn normalize(raw: &RawProfile) -> UserViewModel {
    let stage = raw.stage.clone().unwrap_or_default();
    let stage_name = stage.name.clone().unwrap_or_default();

    let display_name = match (non_empty(&raw.first_name), non_empty(&raw.last_name)) {
        (Some(first), Some(last)) => format!("{first} {last}"),
        _ => non_empty(&raw.full_name)
            .unwrap_or(FALLBACK_DISPLAY_NAME)
            .to_string(),
    };

    let avatar_url = match non_empty(&raw.profile_image) {
        Some(image) => format!("{UPLOADS_BASE_PATH}{image}"),
        None => non_empty(&raw.avatar)
            .unwrap_or(DEFAULT_AVATAR_PATH)
            .to_string(),
    };

    let level_number = extract_trailing_int(&stage_name)
        .or(raw.level)
        .unwrap_or(1);

    let progress_percent = raw.percentage.or(raw.progress).unwrap_or(0.0);

    UserViewModel {
        id: raw.id.clone().unwrap_or_default(),
        first_name: raw.first_name.clone().unwrap_or_default(),
        last_name: raw.last_name.clone().unwrap_or_default(),
        display_name,
        email: raw.email.clone().unwrap_or_default(),
        phone_number: raw.phone_number.clone().unwrap_or_default(),
        gender: raw.gender.clone().unwrap_or_default(),
        status: raw.status.clone().unwrap_or_default(),
        profile_image: raw.profile_image.clone().unwrap_or_default(),
        avatar_url,
        balance: raw.balance.unwrap_or(0.0),
        total_credit: raw.total_credit.unwrap_or(0.0),
        stage: StageView {
            name: stage_name,
            discount: stage.discount.unwrap_or_default(),
            discount_type: stage.discount_type.unwrap_or_default(),
            no_order: stage.no_order.unwrap_or_default(),
        },
        level_number,
        progress_percent,
        next_stage: raw.next_stage.clone().unwrap_or_default(),
        is_last_stage: raw.is_last_stage.unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawStage;

    fn full_raw() -> RawProfile {
        RawProfile {
            id: Some("u-1".to_string()),
            first_name: Some("Sana".to_string()),
            last_name: Some("Karimi".to_string()),
            full_name: Some("S. Karimi".to_string()),
            email: Some("sana@example.com".to_string()),
            phone_number: Some("555-0147".to_string()),
            gender: Some("female".to_string()),
            status: Some("active".to_string()),
            profile_image: Some("sana.png".to_string()),
            avatar: Some("https://cdn.example.com/a.png".to_string()),
            balance: Some(120.5),
            total_credit: Some(300.0),
            stage: Some(RawStage {
                name: Some("Level 3".to_string()),
                discount: Some("10".to_string()),
                discount_type: Some("percent".to_string()),
                no_order: Some("2".to_string()),
            }),
            level: Some(7),
            percentage: Some(62.0),
            progress: Some(10.0),
            next_stage: Some("Level 4".to_string()),
            is_last_stage: Some(false),
        }
    }

    // -------------------- extract_trailing_int --------------------

    #[test]
    fn test_extract_trailing_int_basic() {
        assert_eq!(extract_trailing_int("Level 3"), Some(3));
        assert_eq!(extract_trailing_int("Level 12"), Some(12));
        assert_eq!(extract_trailing_int("stage-07"), Some(7));
    }

    #[test]
    fn test_extract_trailing_int_takes_last_run() {
        assert_eq!(extract_trailing_int("2nd Level 3"), Some(3));
        assert_eq!(extract_trailing_int("a1b2c"), Some(2));
        assert_eq!(extract_trailing_int("Level 3!"), Some(3));
    }

    #[test]
    fn test_extract_trailing_int_none_cases() {
        assert_eq!(extract_trailing_int(""), None);
        assert_eq!(extract_trailing_int("Gold"), None);
        assert_eq!(extract_trailing_int("   "), None);
    }

    #[test]
    fn test_extract_trailing_int_overflow_is_none() {
        assert_eq!(extract_trailing_int("Level 99999999999999"), None);
    }

    // -------------------- normalize: empty payload --------------------

    #[test]
    fn test_normalize_empty_produces_defaults() {
        let vm = normalize(&RawProfile::default());
        assert_eq!(vm.display_name, "User");
        assert_eq!(vm.avatar_url, DEFAULT_AVATAR_PATH);
        assert_eq!(vm.level_number, 1);
        assert_eq!(vm.progress_percent, 0.0);
        assert_eq!(vm.balance, 0.0);
        assert_eq!(vm.stage, StageView::default());
        assert_eq!(vm.next_stage, "");
        assert!(!vm.is_last_stage);
    }

    #[test]
    fn test_default_view_model_matches_empty_normalize() {
        assert_eq!(UserViewModel::default(), normalize(&RawProfile::default()));
    }

    // -------------------- normalize: fallback chains --------------------

    #[test]
    fn test_display_name_prefers_name_pair() {
        let vm = normalize(&full_raw());
        assert_eq!(vm.display_name, "Sana Karimi");
    }

    #[test]
    fn test_display_name_falls_back_to_full_name() {
        let mut raw = full_raw();
        raw.first_name = None;
        let vm = normalize(&raw);
        assert_eq!(vm.display_name, "S. Karimi");

        // Empty strings fall through just like absent fields
        raw.first_name = Some(String::new());
        raw.last_name = Some("Karimi".to_string());
        assert_eq!(normalize(&raw).display_name, "S. Karimi");
    }

    #[test]
    fn test_display_name_literal_fallback() {
        let mut raw = full_raw();
        raw.first_name = None;
        raw.last_name = None;
        raw.full_name = Some(String::new());
        assert_eq!(normalize(&raw).display_name, "User");
    }

    #[test]
    fn test_avatar_prefers_uploaded_image() {
        let vm = normalize(&full_raw());
        assert_eq!(vm.avatar_url, "/uploads/sana.png");
    }

    #[test]
    fn test_avatar_falls_back_to_avatar_url_then_default() {
        let mut raw = full_raw();
        raw.profile_image = None;
        assert_eq!(normalize(&raw).avatar_url, "https://cdn.example.com/a.png");

        raw.avatar = None;
        assert_eq!(normalize(&raw).avatar_url, DEFAULT_AVATAR_PATH);
    }

    #[test]
    fn test_level_prefers_stage_name_over_level_field() {
        let vm = normalize(&full_raw());
        assert_eq!(vm.level_number, 3);
    }

    #[test]
    fn test_level_falls_back_to_level_then_one() {
        let mut raw = full_raw();
        raw.stage = Some(RawStage {
            name: Some("Gold".to_string()),
            ..RawStage::default()
        });
        assert_eq!(normalize(&raw).level_number, 7);

        raw.level = None;
        assert_eq!(normalize(&raw).level_number, 1);
    }

    #[test]
    fn test_progress_prefers_percentage() {
        let vm = normalize(&full_raw());
        assert_eq!(vm.progress_percent, 62.0);
    }

    #[test]
    fn test_progress_falls_back_to_progress_then_zero() {
        let mut raw = full_raw();
        raw.percentage = None;
        assert_eq!(normalize(&raw).progress_percent, 10.0);

        raw.progress = None;
        assert_eq!(normalize(&raw).progress_percent, 0.0);
    }

    #[test]
    fn test_stage_strings_default_to_empty() {
        let mut raw = full_raw();
        raw.stage = Some(RawStage {
            name: Some("Level 2".to_string()),
            ..RawStage::default()
        });
        let vm = normalize(&raw);
        assert_eq!(vm.stage.discount, "");
        assert_eq!(vm.stage.discount_type, "");
        assert_eq!(vm.stage.no_order, "");
    }

    // -------------------- idempotence --------------------

    #[test]
    fn test_normalize_is_idempotent_over_defaults() {
        let first = normalize(&RawProfile::default());

        // Feed the already-defaulted values back through as a raw payload
        let roundtrip = RawProfile {
            id: Some(first.id.clone()),
            full_name: Some(first.display_name.clone()),
            avatar: Some(first.avatar_url.clone()),
            level: Some(first.level_number),
            progress: Some(first.progress_percent),
            balance: Some(first.balance),
            total_credit: Some(first.total_credit),
            next_stage: Some(first.next_stage.clone()),
            is_last_stage: Some(first.is_last_stage),
            ..RawProfile::default()
        };

        let second = normalize(&roundtrip);
        assert_eq!(second.display_name, first.display_name);
        assert_eq!(second.avatar_url, first.avatar_url);
        assert_eq!(second.level_number, first.level_number);
        assert_eq!(second.progress_percent, first.progress_percent);
        assert_eq!(second.stage, first.stage);
    }

    #[test]
    fn test_fresh_model_per_call() {
        let raw = full_raw();
        let a = normalize(&raw);
        let b = normalize(&raw);
        assert_eq!(a, b);
    }
}
