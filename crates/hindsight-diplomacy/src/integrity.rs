//! Non-fatal diagnostics for malformed edges.
//!
//! Classification sits on a rendering path, so a malformed edge must never
//! abort it. Instead the classifier skips the edge and records what it saw
//! here, giving diagnostics and tests something concrete to inspect.

use serde::{Deserialize, Serialize};

use hindsight_types::{CountryTag, DiplomaticEdge, EdgeKind};

use crate::perspective::PerspectiveFault;

/// One edge the classifier skipped, with the fault that disqualified it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEdge {
    /// The skipped edge's kind.
    pub kind: EdgeKind,
    /// The tag on the edge's first side.
    pub first: CountryTag,
    /// The tag on the edge's second side.
    pub second: CountryTag,
    /// Why perspective normalization rejected the edge.
    pub fault: PerspectiveFault,
}

/// Accumulated integrity faults from one classification run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityReport {
    /// Every edge skipped during the run, in encounter order.
    skipped: Vec<SkippedEdge>,
}

impl IntegrityReport {
    /// Create an empty report.
    pub const fn new() -> Self {
        Self {
            skipped: Vec::new(),
        }
    }

    /// Record a skipped edge.
    pub fn record(&mut self, edge: &DiplomaticEdge, fault: PerspectiveFault) {
        self.skipped.push(SkippedEdge {
            kind: edge.kind(),
            first: edge.first.tag.clone(),
            second: edge.second.tag.clone(),
            fault,
        });
    }

    /// Every edge skipped during the run, in encounter order.
    pub fn skipped(&self) -> &[SkippedEdge] {
        &self.skipped
    }

    /// Whether the run skipped nothing.
    pub const fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
