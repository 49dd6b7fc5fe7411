use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;

/// A job-title label cycled through by the hero headline.
///
/// Length is counted in extended grapheme clusters, so an accented letter or
/// an emoji sequence is typed and deleted as one visible character.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Role {
    text: String,
    graphemes: usize,
}

impl Role {
    pub fn new(value: impl Into<String>) -> Self {
        let text = value.into();
        let graphemes = text.graphemes(true).count();
        Self { text, graphemes }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.graphemes
    }

    pub fn is_empty(&self) -> bool {
        self.graphemes == 0
    }

    /// The first `count` visible characters of the role.
    pub fn prefix(&self, count: usize) -> &str {
        match self.text.grapheme_indices(true).nth(count) {
            Some((offset, _)) => &self.text[..offset],
            None => &self.text,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Role::new(value))
    }
}

/// Ordered, non-empty, immutable sequence of roles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleList {
    roles: Vec<Role>,
}

impl RoleList {
    pub fn new<I, S>(values: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles: Vec<Role> = values.into_iter().map(Role::new).collect();
        if roles.is_empty() {
            return Err("role list must contain at least one role".into());
        }
        Ok(Self { roles })
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Role at `index`, wrapping around the end of the list.
    pub fn get(&self, index: usize) -> &Role {
        &self.roles[index % self.roles.len()]
    }

    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.roles.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        self.roles.iter()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterTimings {
    pub typing_speed: Duration,
    pub deleting_speed: Duration,
    pub pause_at_end: Duration,
    pub pause_at_start: Duration,
}

impl TypewriterTimings {
    pub fn from_millis(typing: u64, deleting: u64, pause_at_end: u64, pause_at_start: u64) -> Self {
        Self {
            typing_speed: Duration::from_millis(typing),
            deleting_speed: Duration::from_millis(deleting),
            pause_at_end: Duration::from_millis(pause_at_end),
            pause_at_start: Duration::from_millis(pause_at_start),
        }
    }
}

impl Default for TypewriterTimings {
    fn default() -> Self {
        Self::from_millis(110, 60, 1100, 400)
    }
}
