use bugdex::{BugWidget, Level, LikeValue, species};

/// A level-1 caterpillar widget with no preference set.
pub fn caterpillar_widget() -> BugWidget {
    BugWidget::new(species::caterpillar(), Level::MIN, LikeValue::Unset)
}
