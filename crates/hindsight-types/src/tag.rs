//! Validated country tags and country references.
//!
//! A country tag is the three-character code the save format uses as the
//! unique key for a country within one snapshot (`SWE`, `FRA`, `D01`).
//! [`CountryTag`] validates on construction and on deserialization, so a
//! tag that exists in memory is always well-formed.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Errors that can occur when constructing a [`CountryTag`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    /// The code was not exactly three characters long.
    #[error("country tag must be exactly 3 characters, got {actual}: {code:?}")]
    WrongLength {
        /// The rejected input.
        code: String,
        /// Its character count.
        actual: usize,
    },

    /// The code contained a character outside `A-Z` / `0-9`.
    #[error("country tag may only contain ASCII uppercase letters and digits: {code:?}")]
    InvalidCharacter {
        /// The rejected input.
        code: String,
    },
}

/// A three-character country code, unique within one snapshot.
///
/// The save format uses uppercase ASCII letters for static countries
/// (`SWE`, `DNK`) and a letter-digit mix for dynamically created ones
/// (`D01`, `K00`). Validation happens in [`CountryTag::new`] and again on
/// deserialization via `try_from`, so hostile input never produces a
/// malformed tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "String", into = "String")]
#[ts(export, export_to = "bindings/")]
pub struct CountryTag(String);

impl CountryTag {
    /// Validate and construct a tag from a three-character code.
    pub fn new(code: &str) -> Result<Self, TagError> {
        if code.chars().count() != 3 {
            return Err(TagError::WrongLength {
                code: String::from(code),
                actual: code.chars().count(),
            });
        }
        if !code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(TagError::InvalidCharacter {
                code: String::from(code),
            });
        }
        Ok(Self(String::from(code)))
    }

    /// Return the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CountryTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CountryTag {
    type Error = TagError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::new(&code)
    }
}

impl From<CountryTag> for String {
    fn from(tag: CountryTag) -> Self {
        tag.0
    }
}

/// One side of a diplomatic edge: a tag plus the name recorded in the save.
///
/// The name here is the save's own record and may lag behind the display
/// name in the country directory (e.g. after a tag switch). Display
/// resolution prefers the directory and falls back to this field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CountryRef {
    /// The country's tag.
    pub tag: CountryTag,
    /// The country's name as recorded in the save.
    pub name: String,
}

impl CountryRef {
    /// Construct a reference from a tag and a save-recorded name.
    pub fn new(tag: CountryTag, name: impl Into<String>) -> Self {
        Self {
            tag,
            name: name.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
