//! Display metadata lookup (name, flag) keyed by tag.
//!
//! The directory is the authoritative source of display names and flag
//! identifiers for the countries in a snapshot. A tag missing from the
//! directory degrades to the raw tag for both name and flag rather than
//! failing -- the rendering path must stay non-fatal.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::tag::CountryTag;

/// Display metadata for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DirectoryEntry {
    /// The country's display name.
    pub name: String,
    /// Identifier of the country's flag asset, when one exists.
    pub flag: Option<String>,
}

impl DirectoryEntry {
    /// Construct an entry with a name and no flag.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flag: None,
        }
    }
}

/// Maps country tags to display metadata for one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CountryDirectory {
    /// Per-tag display metadata.
    entries: BTreeMap<CountryTag, DirectoryEntry>,
}

impl CountryDirectory {
    /// Create an empty directory.
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert or replace the entry for a tag.
    pub fn insert(&mut self, tag: CountryTag, entry: DirectoryEntry) {
        self.entries.insert(tag, entry);
    }

    /// Look up the entry for a tag.
    pub fn get(&self, tag: &CountryTag) -> Option<&DirectoryEntry> {
        self.entries.get(tag)
    }

    /// The display name for a tag, falling back to the raw tag.
    pub fn display_name(&self, tag: &CountryTag) -> String {
        self.entries
            .get(tag)
            .map_or_else(|| String::from(tag.as_str()), |e| e.name.clone())
    }

    /// The flag identifier for a tag, falling back to the raw tag.
    pub fn flag_id(&self, tag: &CountryTag) -> String {
        self.entries
            .get(tag)
            .and_then(|e| e.flag.clone())
            .unwrap_or_else(|| String::from(tag.as_str()))
    }

    /// Number of countries in the directory.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(CountryTag, DirectoryEntry)> for CountryDirectory {
    fn from_iter<I: IntoIterator<Item = (CountryTag, DirectoryEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
