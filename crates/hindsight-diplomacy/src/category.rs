//! The declarative, ordered category registry.
//!
//! Every UI row the frontend renders corresponds to one [`CategoryId`].
//! A category's membership rule is data, not code: [`CategoryRule`] names
//! the edge kind it draws from, which side the viewpoint must occupy, and
//! (for dependencies) which subject types qualify. [`REGISTRY`] lists all
//! twenty rules in display order, and [`candidates`] pre-buckets them by
//! edge kind so the classifier touches each edge once.
//!
//! # Invariants
//!
//! - Declaration order of [`CategoryId`] is display order; the derived
//!   `Ord` is the ordering the view layer renders in.
//! - For `Dependency` edges, the mapping from (viewpoint side, subject
//!   type) to category is a function: no dependency edge satisfies two
//!   rules at once. `Overlord` draws from the second side, every other
//!   dependency rule from the first, and the first-side rules partition
//!   the recognized subject types.
//! - An unrecognized subject type satisfies no dependency rule at all.

use serde::{Deserialize, Serialize};

use hindsight_types::{CountryTag, DiplomaticEdge, EdgeData, EdgeKind, SubjectType};

// ---------------------------------------------------------------------------
// Category identifiers
// ---------------------------------------------------------------------------

/// One relationship category, i.e. one rendered UI row.
///
/// Variants are declared in display order and the derived `Ord` is the
/// display ordering -- stable and declaration-driven, never data-derived.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CategoryId {
    /// Mutual defensive alliances.
    Allies,
    /// Royal marriages.
    RoyalMarriages,
    /// The viewpoint's overlord, when the viewpoint is any kind of subject.
    Overlord,
    /// Vassals of the viewpoint.
    Vassals,
    /// Appanages of the viewpoint.
    Appanage,
    /// Core eyalets of the viewpoint.
    CoreEyalets,
    /// Eyalets of the viewpoint.
    Eyalets,
    /// Tributaries of the viewpoint.
    Tributaries,
    /// Colonial subjects of the viewpoint.
    Colonies,
    /// Junior partners in personal unions led by the viewpoint.
    JuniorPartners,
    /// Countries the viewpoint has warned.
    Warning,
    /// Countries that have warned the viewpoint.
    WarnedBy,
    /// Countries the viewpoint pays a subsidy to.
    Subsidizing,
    /// Countries paying a subsidy to the viewpoint.
    SubsidizedBy,
    /// Countries paying reparations to the viewpoint.
    ReparationsReceiving,
    /// Countries the viewpoint pays reparations to.
    ReparationsGiving,
    /// Countries transferring trade power to the viewpoint.
    TradePowerReceiving,
    /// Countries the viewpoint transfers trade power to.
    TradePowerGiving,
    /// Countries steering trade for the viewpoint.
    SteerTradeReceiving,
    /// Countries the viewpoint steers trade for.
    SteerTradeGiving,
}

impl CategoryId {
    /// The row title the frontend renders for this category.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Allies => "Allies",
            Self::RoyalMarriages => "Royal Marriages",
            Self::Overlord => "Overlord",
            Self::Vassals => "Vassals",
            Self::Appanage => "Appanage",
            Self::CoreEyalets => "Core Eyalets",
            Self::Eyalets => "Eyalets",
            Self::Tributaries => "Tributaries",
            Self::Colonies => "Colonies",
            Self::JuniorPartners => "Junior Partners",
            Self::Warning => "Warning",
            Self::WarnedBy => "Warned by",
            Self::Subsidizing => "Subsidizing",
            Self::SubsidizedBy => "Subsidized by",
            Self::ReparationsReceiving => "Reparations (receiving)",
            Self::ReparationsGiving => "Reparations (giving)",
            Self::TradePowerReceiving => "Trade Power (receiving)",
            Self::TradePowerGiving => "Trade Power (giving)",
            Self::SteerTradeReceiving => "Steer Trade (receiving)",
            Self::SteerTradeGiving => "Steer Trade (giving)",
        }
    }
}

// ---------------------------------------------------------------------------
// Rule components
// ---------------------------------------------------------------------------

/// Which side of an edge the viewpoint must occupy for a rule to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// The viewpoint must be the initiating or superior party.
    First,
    /// The viewpoint must be the recipient or subordinate party.
    Second,
    /// The viewpoint may be on either side (symmetric kinds).
    Either,
}

/// Which subject types a rule admits on a `Dependency` edge.
///
/// Rules for non-dependency kinds use [`SubjectFilter::Any`]; the filter
/// is only consulted against a dependency payload's subject type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectFilter {
    /// No subject-type constraint.
    Any,
    /// Exactly one subject type qualifies.
    Exactly(SubjectType),
    /// Any recognized subject type qualifies (the overlord rule).
    AnySubject,
    /// Any of the colonial subject types qualifies.
    Colonial,
}

impl SubjectFilter {
    /// Whether a dependency with the given subject type passes this filter.
    pub fn admits(&self, subject: &SubjectType) -> bool {
        match self {
            Self::Any => true,
            Self::Exactly(expected) => subject == expected,
            Self::AnySubject => subject.is_subject(),
            Self::Colonial => subject.is_colonial(),
        }
    }
}

/// One declarative category membership rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    /// The category this rule feeds.
    pub id: CategoryId,
    /// The edge kind this rule draws from.
    pub kind: EdgeKind,
    /// The side the viewpoint must occupy.
    pub side: Side,
    /// The subject types admitted on dependency edges.
    pub subjects: SubjectFilter,
}

impl CategoryRule {
    /// Whether `edge`, seen from `viewpoint`, belongs to this category.
    pub fn matches(&self, edge: &DiplomaticEdge, viewpoint: &CountryTag) -> bool {
        if edge.kind() != self.kind {
            return false;
        }
        let side_ok = match self.side {
            Side::First => edge.first.tag == *viewpoint,
            Side::Second => edge.second.tag == *viewpoint,
            Side::Either => edge.involves(viewpoint),
        };
        if !side_ok {
            return false;
        }
        match (&self.subjects, &edge.data) {
            (SubjectFilter::Any, _) => true,
            (filter, EdgeData::Dependency { subject_type }) => filter.admits(subject_type),
            // A subject-constrained rule on a non-dependency payload admits
            // nothing; the registry never declares such a rule.
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// The registry
// ---------------------------------------------------------------------------

const ALLIES: CategoryRule = CategoryRule {
    id: CategoryId::Allies,
    kind: EdgeKind::Alliance,
    side: Side::Either,
    subjects: SubjectFilter::Any,
};

const ROYAL_MARRIAGES: CategoryRule = CategoryRule {
    id: CategoryId::RoyalMarriages,
    kind: EdgeKind::RoyalMarriage,
    side: Side::Either,
    subjects: SubjectFilter::Any,
};

const OVERLORD: CategoryRule = CategoryRule {
    id: CategoryId::Overlord,
    kind: EdgeKind::Dependency,
    side: Side::Second,
    subjects: SubjectFilter::AnySubject,
};

const VASSALS: CategoryRule = CategoryRule {
    id: CategoryId::Vassals,
    kind: EdgeKind::Dependency,
    side: Side::First,
    subjects: SubjectFilter::Exactly(SubjectType::Vassal),
};

const APPANAGE: CategoryRule = CategoryRule {
    id: CategoryId::Appanage,
    kind: EdgeKind::Dependency,
    side: Side::First,
    subjects: SubjectFilter::Exactly(SubjectType::Appanage),
};

const CORE_EYALETS: CategoryRule = CategoryRule {
    id: CategoryId::CoreEyalets,
    kind: EdgeKind::Dependency,
    side: Side::First,
    subjects: SubjectFilter::Exactly(SubjectType::CoreEyalet),
};

const EYALETS: CategoryRule = CategoryRule {
    id: CategoryId::Eyalets,
    kind: EdgeKind::Dependency,
    side: Side::First,
    subjects: SubjectFilter::Exactly(SubjectType::Eyalet),
};

const TRIBUTARIES: CategoryRule = CategoryRule {
    id: CategoryId::Tributaries,
    kind: EdgeKind::Dependency,
    side: Side::First,
    subjects: SubjectFilter::Exactly(SubjectType::TributaryState),
};

const COLONIES: CategoryRule = CategoryRule {
    id: CategoryId::Colonies,
    kind: EdgeKind::Dependency,
    side: Side::First,
    subjects: SubjectFilter::Colonial,
};

const JUNIOR_PARTNERS: CategoryRule = CategoryRule {
    id: CategoryId::JuniorPartners,
    kind: EdgeKind::JuniorPartner,
    side: Side::Either,
    subjects: SubjectFilter::Any,
};

const WARNING: CategoryRule = CategoryRule {
    id: CategoryId::Warning,
    kind: EdgeKind::Warning,
    side: Side::First,
    subjects: SubjectFilter::Any,
};

const WARNED_BY: CategoryRule = CategoryRule {
    id: CategoryId::WarnedBy,
    kind: EdgeKind::Warning,
    side: Side::Second,
    subjects: SubjectFilter::Any,
};

const SUBSIDIZING: CategoryRule = CategoryRule {
    id: CategoryId::Subsidizing,
    kind: EdgeKind::Subsidy,
    side: Side::First,
    subjects: SubjectFilter::Any,
};

const SUBSIDIZED_BY: CategoryRule = CategoryRule {
    id: CategoryId::SubsidizedBy,
    kind: EdgeKind::Subsidy,
    side: Side::Second,
    subjects: SubjectFilter::Any,
};

const REPARATIONS_RECEIVING: CategoryRule = CategoryRule {
    id: CategoryId::ReparationsReceiving,
    kind: EdgeKind::Reparations,
    side: Side::Second,
    subjects: SubjectFilter::Any,
};

const REPARATIONS_GIVING: CategoryRule = CategoryRule {
    id: CategoryId::ReparationsGiving,
    kind: EdgeKind::Reparations,
    side: Side::First,
    subjects: SubjectFilter::Any,
};

const TRADE_POWER_RECEIVING: CategoryRule = CategoryRule {
    id: CategoryId::TradePowerReceiving,
    kind: EdgeKind::TransferTrade,
    side: Side::Second,
    subjects: SubjectFilter::Any,
};

const TRADE_POWER_GIVING: CategoryRule = CategoryRule {
    id: CategoryId::TradePowerGiving,
    kind: EdgeKind::TransferTrade,
    side: Side::First,
    subjects: SubjectFilter::Any,
};

const STEER_TRADE_RECEIVING: CategoryRule = CategoryRule {
    id: CategoryId::SteerTradeReceiving,
    kind: EdgeKind::SteerTrade,
    side: Side::Second,
    subjects: SubjectFilter::Any,
};

const STEER_TRADE_GIVING: CategoryRule = CategoryRule {
    id: CategoryId::SteerTradeGiving,
    kind: EdgeKind::SteerTrade,
    side: Side::First,
    subjects: SubjectFilter::Any,
};

/// Every category rule, in display order.
///
/// A per-category scan can iterate this table directly; the production
/// driver reaches the same rules through [`candidates`].
pub static REGISTRY: [CategoryRule; 20] = [
    ALLIES,
    ROYAL_MARRIAGES,
    OVERLORD,
    VASSALS,
    APPANAGE,
    CORE_EYALETS,
    EYALETS,
    TRIBUTARIES,
    COLONIES,
    JUNIOR_PARTNERS,
    WARNING,
    WARNED_BY,
    SUBSIDIZING,
    SUBSIDIZED_BY,
    REPARATIONS_RECEIVING,
    REPARATIONS_GIVING,
    TRADE_POWER_RECEIVING,
    TRADE_POWER_GIVING,
    STEER_TRADE_RECEIVING,
    STEER_TRADE_GIVING,
];

static DEPENDENCY_RULES: [CategoryRule; 7] = [
    OVERLORD,
    VASSALS,
    APPANAGE,
    CORE_EYALETS,
    EYALETS,
    TRIBUTARIES,
    COLONIES,
];
static ALLIANCE_RULES: [CategoryRule; 1] = [ALLIES];
static ROYAL_MARRIAGE_RULES: [CategoryRule; 1] = [ROYAL_MARRIAGES];
static WARNING_RULES: [CategoryRule; 2] = [WARNING, WARNED_BY];
static SUBSIDY_RULES: [CategoryRule; 2] = [SUBSIDIZING, SUBSIDIZED_BY];
static REPARATIONS_RULES: [CategoryRule; 2] = [REPARATIONS_RECEIVING, REPARATIONS_GIVING];
static TRANSFER_TRADE_RULES: [CategoryRule; 2] = [TRADE_POWER_RECEIVING, TRADE_POWER_GIVING];
static STEER_TRADE_RULES: [CategoryRule; 2] = [STEER_TRADE_RECEIVING, STEER_TRADE_GIVING];
static JUNIOR_PARTNER_RULES: [CategoryRule; 1] = [JUNIOR_PARTNERS];

/// The rules that can possibly match an edge of the given kind.
///
/// Pre-bucketed dispatch for the single-pass classifier: each edge is
/// tested only against the handful of rules drawing from its kind, so a
/// full classification touches each edge once.
pub fn candidates(kind: EdgeKind) -> &'static [CategoryRule] {
    match kind {
        EdgeKind::Dependency => &DEPENDENCY_RULES,
        EdgeKind::Alliance => &ALLIANCE_RULES,
        EdgeKind::RoyalMarriage => &ROYAL_MARRIAGE_RULES,
        EdgeKind::Warning => &WARNING_RULES,
        EdgeKind::Subsidy => &SUBSIDY_RULES,
        EdgeKind::Reparations => &REPARATIONS_RULES,
        EdgeKind::TransferTrade => &TRANSFER_TRADE_RULES,
        EdgeKind::SteerTrade => &STEER_TRADE_RULES,
        EdgeKind::JuniorPartner => &JUNIOR_PARTNER_RULES,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
