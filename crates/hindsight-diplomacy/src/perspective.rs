//! The single shared perspective normalizer.
//!
//! Every category rule reduces to the same primitive: given an edge known
//! to involve the viewpoint, return the country on the other side. This
//! module is the one place that flip lives, so no category can drift into
//! its own inline variant of it.

use serde::{Deserialize, Serialize};

use hindsight_types::{CountryRef, CountryTag, DiplomaticEdge};

/// A data-integrity defect found while normalizing an edge's perspective.
///
/// Neither variant is a normal outcome: category membership guarantees the
/// viewpoint sits on exactly one side before [`counterpart`] runs. A fault
/// means the snapshot itself is malformed, and the classifier responds by
/// skipping the edge and recording it, never by guessing a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum PerspectiveFault {
    /// The viewpoint tag matched neither side of the edge.
    #[error("viewpoint is on neither side of the edge")]
    ViewpointAbsent,

    /// The viewpoint tag matched both sides of the edge.
    #[error("viewpoint is on both sides of the edge")]
    BothSides,
}

/// Return the side of `edge` opposite `viewpoint`.
///
/// Precondition: `viewpoint` equals exactly one of `edge.first.tag`,
/// `edge.second.tag`. The result never carries the viewpoint tag.
pub fn counterpart<'a>(
    edge: &'a DiplomaticEdge,
    viewpoint: &CountryTag,
) -> Result<&'a CountryRef, PerspectiveFault> {
    match (
        edge.first.tag == *viewpoint,
        edge.second.tag == *viewpoint,
    ) {
        (true, false) => Ok(&edge.second),
        (false, true) => Ok(&edge.first),
        (true, true) => Err(PerspectiveFault::BothSides),
        (false, false) => Err(PerspectiveFault::ViewpointAbsent),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
