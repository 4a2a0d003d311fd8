use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::level::Level;

/// Flat bonus every numeric attribute gains per level above the first.
pub const GROWTH_PER_LEVEL: f64 = 2.0;

/// A single attribute entry. Numeric attributes grow with level; text
/// attributes (like a display name) pass through derivation unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AttributeValue {
    Number(f64),
    Text(String),
}

impl AttributeValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(v) => Some(*v),
            AttributeValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            AttributeValue::Number(_) => None,
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        AttributeValue::Number(f64::from(value))
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

/// Ordered mapping from attribute name to value.
///
/// Created once as a base set; leveling always produces a new derived copy via
/// [`AttributeSet::at_level`], never a mutation of the base in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct AttributeSet(BTreeMap<String, AttributeValue>);

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert for assembling base sets.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0.get(name)
    }

    /// The numeric value of an attribute, or `None` if absent or text.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(AttributeValue::as_number)
    }

    /// The text value of an attribute, or `None` if absent or numeric.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttributeValue::as_text)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Derive the attribute set at `level`.
    ///
    /// Every numeric entry `v` becomes `v + (level - 1) * 2`; text entries are
    /// copied unchanged. Returns a fresh set sharing nothing with `self`;
    /// deriving at level 1 reproduces the base exactly.
    pub fn at_level(&self, level: Level) -> AttributeSet {
        let bonus = f64::from(level.get() - 1) * GROWTH_PER_LEVEL;
        let entries = self
            .0
            .iter()
            .map(|(name, value)| {
                let value = match value {
                    AttributeValue::Number(v) => AttributeValue::Number(v + bonus),
                    text => text.clone(),
                };
                (name.clone(), value)
            })
            .collect();
        AttributeSet(entries)
    }
}

impl FromIterator<(String, AttributeValue)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (String, AttributeValue)>>(iter: I) -> Self {
        AttributeSet(iter.into_iter().collect())
    }
}

impl TryFrom<serde_json::Value> for AttributeSet {
    type Error = String;

    /// Build a set from a JSON object. Only numbers and strings are valid
    /// attribute values; anything else is rejected by name.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        let serde_json::Value::Object(map) = value else {
            return Err("attribute set must be a JSON object".to_string());
        };
        map.into_iter()
            .map(|(name, value)| {
                let value = match value {
                    serde_json::Value::Number(n) => {
                        let v = n
                            .as_f64()
                            .ok_or_else(|| format!("attribute '{name}' is out of range"))?;
                        AttributeValue::Number(v)
                    }
                    serde_json::Value::String(s) => AttributeValue::Text(s),
                    other => {
                        return Err(format!(
                            "attribute '{name}' must be a number or string, got {other}"
                        ));
                    }
                };
                Ok((name, value))
            })
            .collect()
    }
}

impl From<AttributeSet> for serde_json::Value {
    fn from(set: AttributeSet) -> Self {
        let entries = set
            .0
            .into_iter()
            .map(|(name, value)| {
                let value = match value {
                    AttributeValue::Number(v) => serde_json::json!(v),
                    AttributeValue::Text(s) => serde_json::Value::String(s),
                };
                (name, value)
            })
            .collect();
        serde_json::Value::Object(entries)
    }
}
