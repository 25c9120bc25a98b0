//! The single-pass classification driver.
//!
//! [`classify`] is the whole engine: one pass over the edge store, per-edge
//! dispatch to the handful of candidate rules for its kind, perspective
//! normalization through [`counterpart`], and extraction into
//! [`RelationRecord`]s bucketed by category. Output categories come back
//! in display order with empty categories omitted.
//!
//! The per-category scan over [`REGISTRY`] described by the registry module
//! produces identical output at `O(categories x edges)` cost; it lives in
//! this file's test module as the oracle the driver is checked against.
//!
//! [`REGISTRY`]: crate::category::REGISTRY

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use hindsight_types::{
    CountryRef, CountryTag, DiplomacySnapshot, DiplomaticEdge, EdgeData, SubjectType,
};

use crate::category::{CategoryId, CategoryRule, candidates};
use crate::integrity::IntegrityReport;
use crate::perspective::counterpart;

// ---------------------------------------------------------------------------
// Output model
// ---------------------------------------------------------------------------

/// One counterpart relationship, normalized to the viewpoint's perspective.
///
/// `tag` and `name` always identify the country on the *other* side of the
/// edge. Kind-specific fields are populated only where the edge kind
/// carries them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRecord {
    /// The counterpart country's tag.
    pub tag: CountryTag,
    /// The counterpart country's name as recorded in the save.
    pub name: String,
    /// When the relationship began, when the save records it.
    pub start_date: Option<NaiveDate>,
    /// When the relationship ends, when the save records it.
    pub end_date: Option<NaiveDate>,
    /// The subject type, on dependency edges.
    pub subject_type: Option<SubjectType>,
    /// Monthly ducats, on subsidy edges.
    pub amount: Option<Decimal>,
    /// Accumulated ducats, on subsidy edges that record a total.
    pub total: Option<Decimal>,
    /// Inheritance chance (0-100), on junior partner edges.
    pub pu_inheritance_value: Option<u32>,
}

/// One non-empty category and its normalized relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRelations {
    /// Which category this is.
    pub id: CategoryId,
    /// The counterpart relations, in edge store order.
    pub relations: Vec<RelationRecord>,
}

/// The full classification result for one viewpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// The viewpoint the categories were computed for.
    pub viewpoint: CountryTag,
    /// Non-empty categories in display order.
    pub categories: Vec<CategoryRelations>,
    /// Edges skipped as malformed during the run.
    pub integrity: IntegrityReport,
}

impl Classification {
    /// Look up one category, if it came back non-empty.
    pub fn category(&self, id: CategoryId) -> Option<&CategoryRelations> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// The relations of one category; empty if the category was omitted.
    pub fn relations(&self, id: CategoryId) -> &[RelationRecord] {
        self.category(id).map_or(&[], |c| c.relations.as_slice())
    }

    /// Whether no category matched at all.
    pub const fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Build the relation record for `edge` with `other` on the far side.
fn extract(edge: &DiplomaticEdge, other: &CountryRef) -> RelationRecord {
    let mut record = RelationRecord {
        tag: other.tag.clone(),
        name: other.name.clone(),
        start_date: edge.start_date,
        end_date: edge.end_date,
        subject_type: None,
        amount: None,
        total: None,
        pu_inheritance_value: None,
    };
    match &edge.data {
        EdgeData::Dependency { subject_type } => {
            record.subject_type = Some(subject_type.clone());
        }
        EdgeData::Subsidy { amount, total } => {
            record.amount = Some(*amount);
            record.total = *total;
        }
        EdgeData::JuniorPartner {
            pu_inheritance_value,
        } => {
            record.pu_inheritance_value = Some(*pu_inheritance_value);
        }
        EdgeData::Alliance
        | EdgeData::RoyalMarriage
        | EdgeData::Warning
        | EdgeData::Reparations
        | EdgeData::TransferTrade
        | EdgeData::SteerTrade => {}
    }
    record
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Classify every edge in `snapshot` from `viewpoint`'s perspective.
///
/// Pure and idempotent: identical inputs produce structurally identical
/// output, and the snapshot is never mutated. Edges that fail perspective
/// normalization are skipped, logged, and recorded in the returned
/// [`IntegrityReport`]; they never abort the run.
pub fn classify(snapshot: &DiplomacySnapshot, viewpoint: &CountryTag) -> Classification {
    let mut buckets: BTreeMap<CategoryId, Vec<RelationRecord>> = BTreeMap::new();
    let mut integrity = IntegrityReport::new();

    for edge in snapshot {
        let matched: Vec<&CategoryRule> = candidates(edge.kind())
            .iter()
            .filter(|rule| rule.matches(edge, viewpoint))
            .collect();
        if matched.is_empty() {
            continue;
        }

        // Membership guarantees the viewpoint is on the edge, so the only
        // reachable fault here is a self-referential edge.
        match counterpart(edge, viewpoint) {
            Ok(other) => {
                for rule in matched {
                    buckets
                        .entry(rule.id)
                        .or_default()
                        .push(extract(edge, other));
                }
            }
            Err(fault) => {
                tracing::warn!(
                    kind = ?edge.kind(),
                    first = %edge.first.tag,
                    second = %edge.second.tag,
                    %fault,
                    "skipping diplomatic edge that fails perspective normalization"
                );
                integrity.record(edge, fault);
            }
        }
    }

    let categories = buckets
        .into_iter()
        .map(|(id, relations)| CategoryRelations { id, relations })
        .collect();

    Classification {
        viewpoint: viewpoint.clone(),
        categories,
        integrity,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use hindsight_types::{EdgeKind, SaveId, TagError};

    use crate::category::REGISTRY;
    use crate::perspective::PerspectiveFault;

    use super::*;

    fn edge(first: &str, second: &str, data: EdgeData) -> Result<DiplomaticEdge, TagError> {
        Ok(DiplomaticEdge {
            first: CountryRef::new(CountryTag::new(first)?, first),
            second: CountryRef::new(CountryTag::new(second)?, second),
            start_date: None,
            end_date: None,
            data,
        })
    }

    fn snapshot(edges: Vec<DiplomaticEdge>) -> DiplomacySnapshot {
        DiplomacySnapshot::new(SaveId::new(), edges)
    }

    fn tags(records: &[RelationRecord]) -> Vec<&str> {
        records.iter().map(|r| r.tag.as_str()).collect()
    }

    /// The declarative per-category scan: the cost-naive form of the
    /// registry the single-pass driver must agree with exactly.
    fn classify_scan(
        snapshot: &DiplomacySnapshot,
        viewpoint: &CountryTag,
    ) -> Vec<CategoryRelations> {
        let mut out = Vec::new();
        for rule in &REGISTRY {
            let relations: Vec<RelationRecord> = snapshot
                .iter()
                .filter(|e| rule.matches(e, viewpoint))
                .filter_map(|e| counterpart(e, viewpoint).ok().map(|o| extract(e, o)))
                .collect();
            if !relations.is_empty() {
                out.push(CategoryRelations {
                    id: rule.id,
                    relations,
                });
            }
        }
        out
    }

    /// A snapshot exercising every edge kind plus malformed edges.
    fn mixed_snapshot() -> Result<DiplomacySnapshot, TagError> {
        Ok(snapshot(vec![
            edge("SWE", "DNK", EdgeData::Dependency {
                subject_type: SubjectType::Vassal,
            })?,
            edge("SWE", "NOR", EdgeData::Dependency {
                subject_type: SubjectType::CrownColony,
            })?,
            edge("SWE", "FIN", EdgeData::Dependency {
                subject_type: SubjectType::TributaryState,
            })?,
            edge("FRA", "SWE", EdgeData::Alliance)?,
            edge("SWE", "ENG", EdgeData::RoyalMarriage)?,
            edge("SWE", "POR", EdgeData::Subsidy {
                amount: Decimal::new(25, 0),
                total: Some(Decimal::new(300, 0)),
            })?,
            edge("ENG", "SWE", EdgeData::Warning)?,
            edge("SWE", "RUS", EdgeData::Reparations)?,
            edge("DAN", "SWE", EdgeData::TransferTrade)?,
            edge("SWE", "LUB", EdgeData::SteerTrade)?,
            edge("SWE", "GOT", EdgeData::JuniorPartner {
                pu_inheritance_value: 47,
            })?,
            // Involves SWE on both sides: must be skipped, not guessed at.
            edge("SWE", "SWE", EdgeData::Alliance)?,
            // Involves SWE on neither side: silently irrelevant.
            edge("FRA", "ENG", EdgeData::Alliance)?,
            // Unrecognized subject type: no dependency category at all.
            edge("SWE", "PRU", EdgeData::Dependency {
                subject_type: SubjectType::Other(String::from("march")),
            })?,
        ]))
    }

    // -----------------------------------------------------------------------
    // Core scenarios
    // -----------------------------------------------------------------------

    #[test]
    fn vassalage_seen_from_both_sides() -> Result<(), TagError> {
        let snap = snapshot(vec![edge("SWE", "DNK", EdgeData::Dependency {
            subject_type: SubjectType::Vassal,
        })?]);

        let from_overlord = classify(&snap, &CountryTag::new("SWE")?);
        assert_eq!(tags(from_overlord.relations(CategoryId::Vassals)), ["DNK"]);
        assert!(from_overlord.category(CategoryId::Overlord).is_none());

        let from_subject = classify(&snap, &CountryTag::new("DNK")?);
        assert_eq!(tags(from_subject.relations(CategoryId::Overlord)), ["SWE"]);
        assert!(from_subject.category(CategoryId::Vassals).is_none());
        Ok(())
    }

    #[test]
    fn alliance_is_symmetric() -> Result<(), TagError> {
        let snap = snapshot(vec![edge("FRA", "ENG", EdgeData::Alliance)?]);

        let from_first = classify(&snap, &CountryTag::new("FRA")?);
        assert_eq!(tags(from_first.relations(CategoryId::Allies)), ["ENG"]);

        let from_second = classify(&snap, &CountryTag::new("ENG")?);
        assert_eq!(tags(from_second.relations(CategoryId::Allies)), ["FRA"]);
        Ok(())
    }

    #[test]
    fn subsidy_amount_visible_from_both_sides() -> Result<(), TagError> {
        let snap = snapshot(vec![edge("ENG", "POR", EdgeData::Subsidy {
            amount: Decimal::new(50, 0),
            total: None,
        })?]);

        let from_payer = classify(&snap, &CountryTag::new("ENG")?);
        let paying = from_payer.relations(CategoryId::Subsidizing);
        assert_eq!(tags(paying), ["POR"]);
        assert_eq!(paying.first().and_then(|r| r.amount), Some(Decimal::new(50, 0)));
        assert!(from_payer.category(CategoryId::SubsidizedBy).is_none());

        let from_recipient = classify(&snap, &CountryTag::new("POR")?);
        let receiving = from_recipient.relations(CategoryId::SubsidizedBy);
        assert_eq!(tags(receiving), ["ENG"]);
        assert_eq!(
            receiving.first().and_then(|r| r.amount),
            Some(Decimal::new(50, 0))
        );
        Ok(())
    }

    #[test]
    fn empty_store_produces_empty_output() -> Result<(), TagError> {
        let snap = snapshot(Vec::new());
        let result = classify(&snap, &CountryTag::new("SWE")?);
        assert!(result.is_empty());
        assert!(result.integrity.is_clean());
        Ok(())
    }

    #[test]
    fn uninvolved_viewpoint_produces_empty_output() -> Result<(), TagError> {
        let snap = snapshot(vec![
            edge("FRA", "ENG", EdgeData::Alliance)?,
            edge("FRA", "BUR", EdgeData::Dependency {
                subject_type: SubjectType::Vassal,
            })?,
        ]);
        let result = classify(&snap, &CountryTag::new("SWE")?);
        assert!(result.is_empty());
        // Not being on an edge is normal, never an integrity fault.
        assert!(result.integrity.is_clean());
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Directionality
    // -----------------------------------------------------------------------

    #[test]
    fn warning_splits_by_side() -> Result<(), TagError> {
        let snap = snapshot(vec![
            edge("SWE", "DNK", EdgeData::Warning)?,
            edge("RUS", "SWE", EdgeData::Warning)?,
        ]);

        let result = classify(&snap, &CountryTag::new("SWE")?);
        assert_eq!(tags(result.relations(CategoryId::Warning)), ["DNK"]);
        assert_eq!(tags(result.relations(CategoryId::WarnedBy)), ["RUS"]);
        Ok(())
    }

    #[test]
    fn junior_partner_matches_either_side() -> Result<(), TagError> {
        let snap = snapshot(vec![edge("SWE", "GOT", EdgeData::JuniorPartner {
            pu_inheritance_value: 47,
        })?]);

        let from_senior = classify(&snap, &CountryTag::new("SWE")?);
        let juniors = from_senior.relations(CategoryId::JuniorPartners);
        assert_eq!(tags(juniors), ["GOT"]);
        assert_eq!(
            juniors.first().and_then(|r| r.pu_inheritance_value),
            Some(47)
        );

        let from_junior = classify(&snap, &CountryTag::new("GOT")?);
        assert_eq!(
            tags(from_junior.relations(CategoryId::JuniorPartners)),
            ["SWE"]
        );
        Ok(())
    }

    #[test]
    fn colonies_keep_their_subject_type() -> Result<(), TagError> {
        let snap = snapshot(vec![edge("ENG", "VIR", EdgeData::Dependency {
            subject_type: SubjectType::SelfGoverningColony,
        })?]);

        let result = classify(&snap, &CountryTag::new("ENG")?);
        let colonies = result.relations(CategoryId::Colonies);
        assert_eq!(tags(colonies), ["VIR"]);
        assert_eq!(
            colonies.first().and_then(|r| r.subject_type.clone()),
            Some(SubjectType::SelfGoverningColony)
        );
        Ok(())
    }

    #[test]
    fn unrecognized_subject_type_is_excluded_everywhere() -> Result<(), TagError> {
        let snap = snapshot(vec![edge("SWE", "PRU", EdgeData::Dependency {
            subject_type: SubjectType::Other(String::from("march")),
        })?]);

        let from_first = classify(&snap, &CountryTag::new("SWE")?);
        assert!(from_first.is_empty());

        let from_second = classify(&snap, &CountryTag::new("PRU")?);
        assert!(from_second.is_empty());
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Integrity faults
    // -----------------------------------------------------------------------

    #[test]
    fn self_referential_edge_is_skipped_and_reported() -> Result<(), TagError> {
        let snap = snapshot(vec![
            edge("SWE", "SWE", EdgeData::Alliance)?,
            edge("SWE", "FRA", EdgeData::Alliance)?,
        ]);

        let result = classify(&snap, &CountryTag::new("SWE")?);
        // The well-formed alliance survives; the corrupt one is absent.
        assert_eq!(tags(result.relations(CategoryId::Allies)), ["FRA"]);
        assert!(matches!(
            result.integrity.skipped(),
            [crate::integrity::SkippedEdge {
                kind: EdgeKind::Alliance,
                fault: PerspectiveFault::BothSides,
                ..
            }]
        ));
        Ok(())
    }

    #[test]
    fn corrupt_edge_is_reported_once_even_with_two_candidate_rules() -> Result<(), TagError> {
        // A self-referential warning satisfies the side check of both the
        // Warning and WarnedBy rules; the report must still carry one entry.
        let snap = snapshot(vec![edge("SWE", "SWE", EdgeData::Warning)?]);

        let result = classify(&snap, &CountryTag::new("SWE")?);
        assert!(result.is_empty());
        assert_eq!(result.integrity.skipped().len(), 1);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Structural properties
    // -----------------------------------------------------------------------

    #[test]
    fn output_is_in_display_order_with_empties_omitted() -> Result<(), TagError> {
        let snap = mixed_snapshot()?;
        let result = classify(&snap, &CountryTag::new("SWE")?);

        let ids: Vec<CategoryId> = result.categories.iter().map(|c| c.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert!(result.categories.iter().all(|c| !c.relations.is_empty()));
        Ok(())
    }

    #[test]
    fn classification_is_idempotent() -> Result<(), TagError> {
        let snap = mixed_snapshot()?;
        let viewpoint = CountryTag::new("SWE")?;
        assert_eq!(classify(&snap, &viewpoint), classify(&snap, &viewpoint));
        Ok(())
    }

    #[test]
    fn category_membership_is_permutation_invariant() -> Result<(), TagError> {
        let snap = mixed_snapshot()?;
        let mut reversed_edges = snap.edges().to_vec();
        reversed_edges.reverse();
        let reversed = snapshot(reversed_edges);

        let viewpoint = CountryTag::new("SWE")?;
        let forward = classify(&snap, &viewpoint);
        let backward = classify(&reversed, &viewpoint);

        let as_sets = |c: &Classification| -> Vec<(CategoryId, Vec<RelationRecord>)> {
            c.categories
                .iter()
                .map(|cat| {
                    let mut relations = cat.relations.clone();
                    relations.sort_by(|a, b| a.tag.cmp(&b.tag));
                    (cat.id, relations)
                })
                .collect()
        };
        assert_eq!(as_sets(&forward), as_sets(&backward));
        Ok(())
    }

    #[test]
    fn single_pass_driver_matches_registry_scan() -> Result<(), TagError> {
        let snap = mixed_snapshot()?;
        for code in ["SWE", "DNK", "FRA", "ENG", "POR", "GOT", "PRU", "ZZZ"] {
            let viewpoint = CountryTag::new(code)?;
            let driven = classify(&snap, &viewpoint);
            let scanned = classify_scan(&snap, &viewpoint);
            assert_eq!(driven.categories, scanned, "viewpoint {code}");
        }
        Ok(())
    }
}
