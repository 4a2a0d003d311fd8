use serde::{Deserialize, Serialize};

use super::level::Level;
use super::preference::LikeValue;

/// An observable state transition, queued by the widget for the host
/// rendering layer to consume on its next update pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BugChange {
    LevelChanged { old: Level, new: Level },
    PreferenceChanged { old: LikeValue, new: LikeValue },
}

impl BugChange {
    /// Return the serde tag string for this variant.
    pub fn change_type_str(&self) -> &'static str {
        match self {
            BugChange::LevelChanged { .. } => "level_changed",
            BugChange::PreferenceChanged { .. } => "preference_changed",
        }
    }
}
