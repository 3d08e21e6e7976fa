//! Newtype wrappers for card style identifiers and image lookup keys.
//!
//! These keep style ids, image keys and free-form card ids from being mixed
//! up when they all travel as strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Which face of a card (and which page of a duplex sheet) is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSide {
    Front,
    Back,
}

impl CardSide {
    pub fn as_str(self) -> &'static str {
        match self {
            CardSide::Front => "front",
            CardSide::Back => "back",
        }
    }
}

impl fmt::Display for CardSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a front or back card style.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct StyleId(Arc<str>);

impl StyleId {
    pub const DEFAULT_FRONT: &'static str = "default-front";
    pub const DEFAULT_BACK: &'static str = "default-back";

    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// The sentinel style used when a card leaves its style id empty.
    pub fn default_for(side: CardSide) -> Self {
        match side {
            CardSide::Front => Self::new(Self::DEFAULT_FRONT),
            CardSide::Back => Self::new(Self::DEFAULT_BACK),
        }
    }

    /// Resolves a possibly empty raw id, falling back to the side's default.
    pub fn resolve(raw: &str, side: CardSide) -> Self {
        if raw.is_empty() {
            Self::default_for(side)
        } else {
            Self::new(raw)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StyleId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<String> for StyleId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for StyleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lookup key of a pre-rendered card image: `"{style}-{side}"`.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ImageKey(Arc<str>);

impl ImageKey {
    pub fn new(style: &StyleId, side: CardSide) -> Self {
        Self(format!("{}-{}", style, side).into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ImageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_style_resolves_to_side_default() {
        assert_eq!(StyleId::resolve("", CardSide::Front).as_str(), "default-front");
        assert_eq!(StyleId::resolve("", CardSide::Back).as_str(), "default-back");
        assert_eq!(StyleId::resolve("hero", CardSide::Back).as_str(), "hero");
    }

    #[test]
    fn image_key_joins_style_and_side() {
        let key = ImageKey::new(&StyleId::from("hero"), CardSide::Back);
        assert_eq!(key.as_str(), "hero-back");
        assert_eq!(
            ImageKey::new(&StyleId::default_for(CardSide::Front), CardSide::Front).to_string(),
            "default-front-front"
        );
    }
}
