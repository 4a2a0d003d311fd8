use std::fmt;

use serde::{Deserialize, Serialize};

/// The like/dislike state shown next to a bug.
///
/// Starts from a constructor-supplied value and is thereafter owned
/// exclusively by the widget; nothing outside the widget can write it back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum LikeValue {
    Like,
    Dislike,
    #[default]
    Unset,
}

impl LikeValue {
    pub fn as_str(&self) -> &str {
        match self {
            LikeValue::Like => "like",
            LikeValue::Dislike => "dislike",
            LikeValue::Unset => "unset",
        }
    }
}

impl fmt::Display for LikeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<LikeValue> for String {
    fn from(v: LikeValue) -> Self {
        v.as_str().to_string()
    }
}

impl TryFrom<String> for LikeValue {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_str() {
            "like" => Ok(LikeValue::Like),
            "dislike" => Ok(LikeValue::Dislike),
            "unset" => Ok(LikeValue::Unset),
            other => Err(format!("unknown LikeValue: {other}")),
        }
    }
}

/// The two choices a user can actually make. "Unset" is an initial state
/// only, so it is not representable here; invalid choices cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PreferenceChoice {
    Like,
    Dislike,
}

impl PreferenceChoice {
    pub fn as_str(&self) -> &str {
        match self {
            PreferenceChoice::Like => "like",
            PreferenceChoice::Dislike => "dislike",
        }
    }
}

impl fmt::Display for PreferenceChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PreferenceChoice> for String {
    fn from(v: PreferenceChoice) -> Self {
        v.as_str().to_string()
    }
}

impl TryFrom<String> for PreferenceChoice {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_str() {
            "like" => Ok(PreferenceChoice::Like),
            "dislike" => Ok(PreferenceChoice::Dislike),
            other => Err(format!("unknown PreferenceChoice: {other}")),
        }
    }
}

impl From<PreferenceChoice> for LikeValue {
    fn from(choice: PreferenceChoice) -> Self {
        match choice {
            PreferenceChoice::Like => LikeValue::Like,
            PreferenceChoice::Dislike => LikeValue::Dislike,
        }
    }
}
