pub mod model;
pub mod species;
pub mod widget;

pub use model::{
    AttributeSet, AttributeValue, BugChange, GROWTH_PER_LEVEL, Level, LikeValue, PreferenceChoice,
};
pub use widget::BugWidget;
