use serde::{Deserialize, Serialize};
use std::fmt;

/// A guessed format name, usable directly as a file extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatTag(String);

impl FormatTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of characters in the tag.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A single character (or nothing) is too weak to count as a guess.
    pub fn is_conclusive(&self) -> bool {
        self.len() > 1
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FormatTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FormatTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for FormatTag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl From<FormatTag> for String {
    fn from(tag: FormatTag) -> Self {
        tag.0
    }
}

impl PartialEq<str> for FormatTag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FormatTag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
