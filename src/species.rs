//! Preset base attribute sets for the bundled bug species.
//!
//! Convenience only; [`crate::BugWidget`] accepts any base set, including ones
//! loaded from JSON via `AttributeSet::try_from`.

use crate::model::AttributeSet;

/// The starter bug.
pub fn caterpillar() -> AttributeSet {
    AttributeSet::new()
        .with("name", "Caterpillar")
        .with("health", 10.0)
        .with("attack", 3.0)
}

pub fn ladybug() -> AttributeSet {
    AttributeSet::new()
        .with("name", "Ladybug")
        .with("health", 12.0)
        .with("attack", 2.0)
        .with("charm", 5.0)
}

pub fn firefly() -> AttributeSet {
    AttributeSet::new()
        .with("name", "Firefly")
        .with("health", 8.0)
        .with("attack", 4.0)
        .with("glow", 6.0)
}

/// All bundled species, in catalog order.
pub fn all() -> Vec<AttributeSet> {
    vec![caterpillar(), ladybug(), firefly()]
}
