//! Render-ready diplomacy view assembly.
//!
//! Joins classification output with display metadata from the country
//! directory and produces the ordered structure the frontend renders,
//! one row per category. Everything here is pure and deterministic: same
//! classification, directory, and options in, same view out. View models
//! are exported to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`assemble`] -- The view assembler and its view-model types
//! - [`format`] -- Display formatting helpers (ducat amounts)

pub mod assemble;
pub mod format;

// Re-export primary types at crate root for convenience.
pub use assemble::{
    CategoryView, DiplomacyView, RelationView, ViewOptions, assemble, country_diplomacy,
};
pub use format::format_ducats;
