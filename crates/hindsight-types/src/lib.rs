//! Shared type definitions for the Hindsight save analysis workspace.
//!
//! This crate is the single source of truth for the diplomatic data model
//! shared by the classification engine and the view assembler. Types defined
//! here flow downstream to `TypeScript` via `ts-rs` for the web frontend
//! that renders the assembled views.
//!
//! # Modules
//!
//! - [`tag`] -- Validated country tags and country references
//! - [`edge`] -- Diplomatic edge records, kinds, and subject types
//! - [`snapshot`] -- The immutable per-save edge store and its identity
//! - [`directory`] -- Display metadata lookup (name, flag) keyed by tag

pub mod directory;
pub mod edge;
pub mod snapshot;
pub mod tag;

// Re-export all public types at crate root for convenience.
pub use directory::{CountryDirectory, DirectoryEntry};
pub use edge::{DiplomaticEdge, EdgeData, EdgeKind, SubjectType};
pub use snapshot::{DiplomacySnapshot, SaveId};
pub use tag::{CountryRef, CountryTag, TagError};
