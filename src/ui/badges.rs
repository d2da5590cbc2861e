//! Level-badge asset selection.
//!
//! Badge assets are indexed by integer level. The "current" badge shows the
//! achieved level and uses the stage name's trailing integer directly; the
//! "next" badge, shown in progress/next-stage contexts, uses the trailing
//! integer of the next stage (or the current stage when none is named) plus
//! one. The off-by-one is deliberate and must stay on the consumer side: the
//! avatar shows where the user is, the progress panel shows where they are
//! headed.
//!
//! An asset exists for every reachable index; that guarantee belongs to the
//! asset pipeline, not this module.

use crate::view_state::{extract_trailing_int, UserViewModel};

/// Badge asset shown when no level index can be derived.
pub const DEFAULT_BADGE_PATH: &str = "assets/levels/level-default.png";

/// Path of the badge asset for a level index.
pub fn level_badge_path(index: u32) -> String {
    format!("assets/levels/level-{index}.png")
}

/// Asset index for the achieved-level badge.
pub fn current_badge_index(user: &UserViewModel) -> Option<u32> {
    extract_trailing_int(&user.stage.name)
}

/// Asset index for the upcoming-level badge.
pub fn next_badge_index(user: &UserViewModel) -> Option<u32> {
    let source = if user.next_stage.is_empty() {
        &user.stage.name
    } else {
        &user.next_stage
    };
    extract_trailing_int(source).map(|level| level + 1)
}

/// Badge asset path for an optional index, falling back to the default badge.
pub fn badge_path(index: Option<u32>) -> String {
    match index {
        Some(index) => level_badge_path(index),
        None => DEFAULT_BADGE_PATH.to_string(),
    }
}

/// Numeric label for a badge. `None` means render the badge without a label.
pub fn badge_label(index: Option<u32>) -> Option<String> {
    index.map(|i| format!("Lv {i}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RawProfile, RawStage};
    use crate::view_state::normalize;

    fn user_with_stage(stage_name: &str, next_stage: Option<&str>) -> UserViewModel {
        normalize(&RawProfile {
            stage: Some(RawStage {
                name: Some(stage_name.to_string()),
                ..RawStage::default()
            }),
            next_stage: next_stage.map(str::to_string),
            ..RawProfile::default()
        })
    }

    #[test]
    fn test_badge_asymmetry_without_next_stage() {
        // "Level 3": current badge shows 3, next badge shows 4
        let user = user_with_stage("Level 3", None);
        assert_eq!(current_badge_index(&user), Some(3));
        assert_eq!(next_badge_index(&user), Some(4));
    }

    #[test]
    fn test_next_badge_prefers_next_stage() {
        let user = user_with_stage("Level 3", Some("Level 7"));
        assert_eq!(current_badge_index(&user), Some(3));
        assert_eq!(next_badge_index(&user), Some(8));
    }

    #[test]
    fn test_unparseable_stage_yields_no_index() {
        let user = user_with_stage("Gold", None);
        assert_eq!(current_badge_index(&user), None);
        assert_eq!(next_badge_index(&user), None);
    }

    #[test]
    fn test_badge_path_fallback() {
        assert_eq!(badge_path(Some(3)), "assets/levels/level-3.png");
        assert_eq!(badge_path(None), DEFAULT_BADGE_PATH);
    }

    #[test]
    fn test_badge_label_omitted_when_no_index() {
        assert_eq!(badge_label(Some(4)).as_deref(), Some("Lv 4"));
        assert_eq!(badge_label(None), None);
    }
}
