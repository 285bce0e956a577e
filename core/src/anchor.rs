use std::fmt;

use thiserror::Error;

/// An element id addressed through a URL fragment (`#id`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnchorId(String);

impl AnchorId {
    pub fn parse(value: &str) -> Result<Self, AnchorError> {
        if value.is_empty() {
            return Err(AnchorError::Empty);
        }
        for (index, ch) in value.chars().enumerate() {
            if ch.is_whitespace() || ch == '#' {
                return Err(AnchorError::InvalidCharacter { ch, index });
            }
        }
        Ok(Self(value.to_string()))
    }

    /// Parses a `#id` fragment or selector. A lone `#` is rejected.
    pub fn from_fragment(fragment: &str) -> Result<Self, AnchorError> {
        let Some(rest) = fragment.trim().strip_prefix('#') else {
            return Err(AnchorError::MissingHash);
        };
        Self::parse(rest)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn fragment(&self) -> String {
        crate::markup::fragment_for(&self.0)
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for AnchorId {
    type Err = AnchorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnchorError {
    #[error("fragment must start with '#'")]
    MissingHash,
    #[error("anchor id is empty")]
    Empty,
    #[error("invalid character {ch:?} at position {index}")]
    InvalidCharacter { ch: char, index: usize },
}
