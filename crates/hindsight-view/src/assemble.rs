//! The view assembler and its view-model types.
//!
//! The classifier's output is display-format-agnostic; this module is
//! where presentation decisions live. It resolves display names and flag
//! identifiers through the [`CountryDirectory`] (degrading to the raw tag
//! rather than failing), strips the `_colony` suffix from colonial
//! subject labels when asked to, and drops nothing else -- category order
//! and relation order pass through from the classifier untouched.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use hindsight_diplomacy::{Classification, RelationRecord, classify};
use hindsight_types::{CountryDirectory, CountryTag, DiplomacySnapshot};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Presentation knobs for the assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Strip the `_colony` suffix from colonial subject labels
    /// (`self_governing_colony` renders as `self_governing`). Purely
    /// cosmetic; the classifier's subject types are never touched.
    pub strip_colony_suffix: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            strip_colony_suffix: true,
        }
    }
}

// ---------------------------------------------------------------------------
// View models
// ---------------------------------------------------------------------------

/// One relationship as the frontend renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RelationView {
    /// The counterpart country's tag.
    pub tag: CountryTag,
    /// The counterpart country's resolved display name.
    pub name: String,
    /// The counterpart country's flag identifier.
    pub flag: String,
    /// When the relationship began, when the save records it.
    pub since: Option<NaiveDate>,
    /// When the relationship ends, when the save records it.
    pub until: Option<NaiveDate>,
    /// The subject kind label, on dependency relations.
    pub subject_kind: Option<String>,
    /// Monthly ducats, on subsidy relations.
    #[ts(as = "Option<String>")]
    pub monthly_amount: Option<Decimal>,
    /// Accumulated ducats, on subsidy relations that record a total.
    #[ts(as = "Option<String>")]
    pub accumulated_total: Option<Decimal>,
    /// Inheritance chance (0-100), on junior partner relations.
    pub inheritance_value: Option<u32>,
}

/// One rendered category row: a title and its relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CategoryView {
    /// The row title.
    pub title: String,
    /// The relations rendered inside the row.
    pub relations: Vec<RelationView>,
}

/// The full diplomacy panel for one viewpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DiplomacyView {
    /// The viewpoint the panel was computed for.
    pub viewpoint: CountryTag,
    /// Non-empty categories in display order.
    pub categories: Vec<CategoryView>,
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Resolve one relation record against the directory.
fn resolve(
    record: &RelationRecord,
    directory: &CountryDirectory,
    options: ViewOptions,
) -> RelationView {
    let name = directory.get(&record.tag).map_or_else(
        || {
            if record.name.is_empty() {
                String::from(record.tag.as_str())
            } else {
                record.name.clone()
            }
        },
        |entry| entry.name.clone(),
    );

    let subject_kind = record.subject_type.as_ref().map(|subject| {
        let label = subject.as_str();
        if options.strip_colony_suffix {
            String::from(label.strip_suffix("_colony").unwrap_or(label))
        } else {
            String::from(label)
        }
    });

    RelationView {
        tag: record.tag.clone(),
        name,
        flag: directory.flag_id(&record.tag),
        since: record.start_date,
        until: record.end_date,
        subject_kind,
        monthly_amount: record.amount,
        accumulated_total: record.total,
        inheritance_value: record.pu_inheritance_value,
    }
}

/// Join a classification with display metadata into a render-ready view.
///
/// Categories arrive non-empty and display-ordered from the classifier
/// and leave the same way; a tag absent from the directory degrades to
/// the save-recorded name (or the raw tag) rather than failing.
pub fn assemble(
    classification: &Classification,
    directory: &CountryDirectory,
    options: ViewOptions,
) -> DiplomacyView {
    let categories = classification
        .categories
        .iter()
        .map(|category| CategoryView {
            title: String::from(category.id.title()),
            relations: category
                .relations
                .iter()
                .map(|record| resolve(record, directory, options))
                .collect(),
        })
        .collect();

    DiplomacyView {
        viewpoint: classification.viewpoint.clone(),
        categories,
    }
}

/// Classify and assemble in one step.
///
/// Convenience for callers that do not need the integrity report; use
/// [`classify`] plus [`assemble`] separately to inspect it. Skipped-edge
/// diagnostics are still emitted through `tracing` either way.
pub fn country_diplomacy(
    snapshot: &DiplomacySnapshot,
    viewpoint: &CountryTag,
    directory: &CountryDirectory,
    options: ViewOptions,
) -> DiplomacyView {
    assemble(&classify(snapshot, viewpoint), directory, options)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
