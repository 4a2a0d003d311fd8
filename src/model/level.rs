use std::fmt;

use serde::{Deserialize, Serialize};

/// A bug's growth level. Always at least 1.
///
/// Level 1 is the identity level: deriving attributes at level 1 reproduces
/// the base set exactly. The constructor clamps anything below 1 up to 1, so
/// derivation never has to validate its input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u32", from = "u32")]
pub struct Level(u32);

impl Level {
    pub const MIN: Level = Level(1);

    /// Create a level, clamping values below 1 up to 1.
    pub fn new(value: u32) -> Self {
        Self(value.max(1))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// One level up.
    pub fn up(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// One level down, saturating at 1.
    pub fn down(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::MIN
    }
}

impl From<u32> for Level {
    fn from(value: u32) -> Self {
        Level::new(value)
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_zero_to_one() {
        assert_eq!(Level::new(0), Level::MIN);
        assert_eq!(Level::new(1), Level::MIN);
        assert_eq!(Level::new(7).get(), 7);
    }

    #[test]
    fn down_saturates_at_one() {
        assert_eq!(Level::MIN.down(), Level::MIN);
        assert_eq!(Level::new(3).down(), Level::new(2));
    }

    #[test]
    fn up_then_down_is_identity() {
        let level = Level::new(4);
        assert_eq!(level.up().down(), level);
    }

    #[test]
    fn serde_as_bare_integer() {
        let json = serde_json::to_value(Level::new(5)).unwrap();
        assert_eq!(json, 5);

        let back: Level = serde_json::from_value(serde_json::json!(0)).unwrap();
        assert_eq!(back, Level::MIN);
    }
}
