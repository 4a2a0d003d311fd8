pub mod attribute;
pub mod change;
pub mod level;
pub mod preference;

pub use attribute::{AttributeSet, AttributeValue, GROWTH_PER_LEVEL};
pub use change::BugChange;
pub use level::Level;
pub use preference::{LikeValue, PreferenceChoice};
