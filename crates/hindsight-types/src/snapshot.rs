//! The immutable per-save edge store and its identity.
//!
//! The upstream parser produces one [`DiplomacySnapshot`] per loaded save.
//! Derived category views are pure functions of the snapshot plus a
//! viewpoint tag; callers that memoize keyed on
//! `(SaveId, viewpoint)` never recompute a view for the same save twice.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::edge::DiplomaticEdge;

/// Identity of one loaded save snapshot.
///
/// Uses UUID v7 (time-ordered) like every other identifier in the stack.
/// Assigned by whoever loads the save; two loads of the same file are two
/// distinct snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SaveId(pub Uuid);

impl SaveId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for SaveId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for SaveId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for SaveId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<SaveId> for Uuid {
    fn from(id: SaveId) -> Self {
        id.0
    }
}

/// The flat, perspective-free collection of diplomatic edges for one save.
///
/// Immutable once constructed: the classification engine only ever reads
/// it, and re-invocation with a different viewpoint must not invalidate it.
/// Edge order is irrelevant to classification in the set sense, but it is
/// preserved and flows through to relation order within each category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DiplomacySnapshot {
    /// This snapshot's identity.
    save_id: SaveId,
    /// Every diplomatic edge in the save.
    edges: Vec<DiplomaticEdge>,
}

impl DiplomacySnapshot {
    /// Construct a snapshot from parsed edges.
    pub const fn new(save_id: SaveId, edges: Vec<DiplomaticEdge>) -> Self {
        Self { save_id, edges }
    }

    /// This snapshot's identity.
    pub const fn save_id(&self) -> SaveId {
        self.save_id
    }

    /// All edges, in parser emission order.
    pub fn edges(&self) -> &[DiplomaticEdge] {
        &self.edges
    }

    /// Iterate over all edges.
    pub fn iter(&self) -> core::slice::Iter<'_, DiplomaticEdge> {
        self.edges.iter()
    }

    /// Number of edges in the snapshot.
    pub const fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the snapshot holds no edges at all.
    pub const fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<'a> IntoIterator for &'a DiplomacySnapshot {
    type Item = &'a DiplomaticEdge;
    type IntoIter = core::slice::Iter<'a, DiplomaticEdge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::EdgeData;
    use crate::tag::{CountryRef, CountryTag, TagError};

    fn alliance(first: &str, second: &str) -> Result<DiplomaticEdge, TagError> {
        Ok(DiplomaticEdge {
            first: CountryRef::new(CountryTag::new(first)?, first),
            second: CountryRef::new(CountryTag::new(second)?, second),
            start_date: None,
            end_date: None,
            data: EdgeData::Alliance,
        })
    }

    #[test]
    fn save_ids_are_distinct() {
        let a = SaveId::new();
        let b = SaveId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn save_id_display_matches_uuid() {
        let id = SaveId::new();
        assert_eq!(id.to_string(), id.into_inner().to_string());
    }

    #[test]
    fn snapshot_preserves_edge_order() -> Result<(), TagError> {
        let edges = vec![alliance("FRA", "ENG")?, alliance("SWE", "DNK")?];
        let snapshot = DiplomacySnapshot::new(SaveId::new(), edges.clone());

        assert_eq!(snapshot.len(), 2);
        assert!(!snapshot.is_empty());
        assert_eq!(snapshot.edges(), edges.as_slice());
        Ok(())
    }

    #[test]
    fn empty_snapshot_is_empty() {
        let snapshot = DiplomacySnapshot::new(SaveId::new(), Vec::new());
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.iter().count(), 0);
    }
}
