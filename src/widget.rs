use crate::model::{AttributeSet, BugChange, Level, LikeValue, PreferenceChoice};

/// The state layer of a bug widget: a creature with leveling attributes and a
/// like/dislike control. Rendering is the host's job; the widget only owns
/// state and reports what changed.
///
/// The base attribute set is fixed at construction and every level change
/// derives a fresh attribute set from it, never from the previous derived
/// set. The like value is seeded once from the constructor argument and
/// afterwards changes only through [`BugWidget::set_preference`].
#[derive(Debug, Clone)]
pub struct BugWidget {
    base: AttributeSet,
    level: Level,
    like: LikeValue,
    derived: AttributeSet,
    pending: Vec<BugChange>,
}

impl BugWidget {
    pub fn new(base: AttributeSet, level: Level, initial_like: LikeValue) -> Self {
        let derived = base.at_level(level);
        Self {
            base,
            level,
            like: initial_like,
            derived,
            pending: Vec::new(),
        }
    }

    /// Current derived attributes at the current level.
    pub fn attributes(&self) -> &AttributeSet {
        &self.derived
    }

    /// The base attributes the widget was constructed with.
    pub fn base_attributes(&self) -> &AttributeSet {
        &self.base
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn like(&self) -> LikeValue {
        self.like
    }

    /// Change the level and recompute derived attributes from the base set.
    /// Setting the current level again is a no-op.
    pub fn set_level(&mut self, level: Level) {
        if level == self.level {
            return;
        }
        let old = self.level;
        self.level = level;
        self.derived = self.base.at_level(level);
        tracing::debug!("level changed: {old} -> {level}");
        self.pending.push(BugChange::LevelChanged { old, new: level });
    }

    pub fn level_up(&mut self) {
        self.set_level(self.level.up());
    }

    pub fn level_down(&mut self) {
        self.set_level(self.level.down());
    }

    /// Record the user's like/dislike choice. Re-choosing the current
    /// preference is a no-op.
    pub fn set_preference(&mut self, choice: PreferenceChoice) {
        let new = LikeValue::from(choice);
        if new == self.like {
            return;
        }
        let old = std::mem::replace(&mut self.like, new);
        tracing::debug!("preference changed: {old} -> {new}");
        self.pending.push(BugChange::PreferenceChanged { old, new });
    }

    /// Hand pending change notifications to the host, emptying the queue.
    pub fn drain_changes(&mut self) -> Vec<BugChange> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AttributeValue;

    fn firefly_widget() -> BugWidget {
        let base = AttributeSet::new()
            .with("health", 8.0)
            .with("glow", 6.0)
            .with("name", "Firefly");
        BugWidget::new(base, Level::MIN, LikeValue::Unset)
    }

    #[test]
    fn construction_derives_eagerly() {
        let base = AttributeSet::new().with("health", 8.0);
        let widget = BugWidget::new(base.clone(), Level::new(2), LikeValue::Unset);
        assert_eq!(widget.attributes().number("health"), Some(10.0));
        assert_eq!(widget.base_attributes(), &base);
    }

    #[test]
    fn set_level_recomputes_from_base() {
        let mut widget = firefly_widget();
        widget.set_level(Level::new(3));
        widget.set_level(Level::new(2));
        // 8 + (2-1)*2, not a further bump on top of level 3's values.
        assert_eq!(widget.attributes().number("health"), Some(10.0));
    }

    #[test]
    fn same_level_is_a_no_op() {
        let mut widget = firefly_widget();
        widget.set_level(Level::MIN);
        assert!(widget.drain_changes().is_empty());
    }

    #[test]
    fn same_preference_is_a_no_op() {
        let mut widget = firefly_widget();
        widget.set_preference(PreferenceChoice::Like);
        widget.drain_changes();
        widget.set_preference(PreferenceChoice::Like);
        assert!(widget.drain_changes().is_empty());
    }

    #[test]
    fn level_down_saturates() {
        let mut widget = firefly_widget();
        widget.level_down();
        assert_eq!(widget.level(), Level::MIN);
        assert!(widget.drain_changes().is_empty());
    }

    #[test]
    fn drains_one_change_per_mutation() {
        let mut widget = firefly_widget();
        widget.level_up();
        widget.set_preference(PreferenceChoice::Dislike);

        let changes = widget.drain_changes();
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].change_type_str(), "level_changed");
        assert_eq!(changes[1].change_type_str(), "preference_changed");
        assert!(widget.drain_changes().is_empty());
    }

    #[test]
    fn text_attributes_survive_leveling() {
        let mut widget = firefly_widget();
        widget.set_level(Level::new(10));
        assert_eq!(
            widget.attributes().get("name"),
            Some(&AttributeValue::Text("Firefly".to_string()))
        );
    }
}
