//! Perspective-specific diplomatic relationship classification.
//!
//! This crate turns the flat, perspective-free edge collection of a
//! [`DiplomacySnapshot`] into the ordered, mutually exclusive relationship
//! categories seen from one country's viewpoint. It is the logic layer
//! between `hindsight-types` (which defines the data structures) and
//! `hindsight-view` (which joins the output with display metadata).
//!
//! The entire pipeline is synchronous, single-threaded, and side-effect
//! free: [`classify`] is a pure function of the snapshot and the viewpoint
//! tag, and re-invocation never mutates or invalidates the snapshot.
//!
//! # Modules
//!
//! - [`perspective`] -- The single shared perspective normalizer
//! - [`category`] -- The declarative, ordered category registry
//! - [`classify`] -- The single-pass classification driver
//! - [`integrity`] -- Non-fatal diagnostics for malformed edges
//!
//! [`DiplomacySnapshot`]: hindsight_types::DiplomacySnapshot

pub mod category;
pub mod classify;
pub mod integrity;
pub mod perspective;

// Re-export primary types at crate root for convenience.
pub use category::{CategoryId, CategoryRule, REGISTRY, Side, SubjectFilter, candidates};
pub use classify::{CategoryRelations, Classification, RelationRecord, classify};
pub use integrity::{IntegrityReport, SkippedEdge};
pub use perspective::{PerspectiveFault, counterpart};
