//! Diplomatic edge records, kinds, and subject types.
//!
//! An edge is one diplomatic relation between two countries as emitted by
//! the upstream save parser. Edges are perspective-free: for directed kinds
//! `first` is the initiating or superior party and `second` the recipient
//! or subordinate party, while for symmetric kinds side order carries no
//! meaning. The classification engine turns this flat collection into
//! perspective-specific category views.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::tag::{CountryRef, CountryTag};

// ---------------------------------------------------------------------------
// Subject types
// ---------------------------------------------------------------------------

/// Sub-classification of a `Dependency` edge.
///
/// The save format carries this as a free-form string; the closed set below
/// is what the game actually emits. Anything else is preserved losslessly
/// in [`SubjectType::Other`] so that a round-trip through serde never drops
/// data -- but an `Other` subject matches no dependency category.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubjectType {
    /// A vassal state.
    Vassal,
    /// The junior side of a personal union.
    PersonalUnion,
    /// A core eyalet.
    CoreEyalet,
    /// An eyalet.
    Eyalet,
    /// An appanage.
    Appanage,
    /// A tributary state.
    TributaryState,
    /// A directly administered colony.
    Colony,
    /// A colony run as a private enterprise.
    PrivateEnterprise,
    /// A self-governing colony.
    SelfGoverningColony,
    /// A crown colony.
    CrownColony,
    /// A subject type the engine does not recognize, kept verbatim.
    Other(String),
}

impl SubjectType {
    /// The save-format string for this subject type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Vassal => "vassal",
            Self::PersonalUnion => "personal_union",
            Self::CoreEyalet => "core_eyalet",
            Self::Eyalet => "eyalet",
            Self::Appanage => "appanage",
            Self::TributaryState => "tributary_state",
            Self::Colony => "colony",
            Self::PrivateEnterprise => "private_enterprise",
            Self::SelfGoverningColony => "self_governing_colony",
            Self::CrownColony => "crown_colony",
            Self::Other(code) => code,
        }
    }

    /// Whether this is one of the colonial subject types.
    pub const fn is_colonial(&self) -> bool {
        matches!(
            self,
            Self::Colony
                | Self::PrivateEnterprise
                | Self::SelfGoverningColony
                | Self::CrownColony
        )
    }

    /// Whether this subject type binds the subject to an overlord.
    ///
    /// Every recognized subject type does; only [`SubjectType::Other`]
    /// falls outside the set.
    pub const fn is_subject(&self) -> bool {
        matches!(
            self,
            Self::Vassal
                | Self::PersonalUnion
                | Self::CoreEyalet
                | Self::Eyalet
                | Self::Appanage
                | Self::TributaryState
        ) || self.is_colonial()
    }
}

impl From<&str> for SubjectType {
    fn from(code: &str) -> Self {
        match code {
            "vassal" => Self::Vassal,
            "personal_union" => Self::PersonalUnion,
            "core_eyalet" => Self::CoreEyalet,
            "eyalet" => Self::Eyalet,
            "appanage" => Self::Appanage,
            "tributary_state" => Self::TributaryState,
            "colony" => Self::Colony,
            "private_enterprise" => Self::PrivateEnterprise,
            "self_governing_colony" => Self::SelfGoverningColony,
            "crown_colony" => Self::CrownColony,
            other => Self::Other(String::from(other)),
        }
    }
}

impl From<String> for SubjectType {
    fn from(code: String) -> Self {
        Self::from(code.as_str())
    }
}

impl From<SubjectType> for String {
    fn from(subject: SubjectType) -> Self {
        match subject {
            SubjectType::Other(code) => code,
            known => Self::from(known.as_str()),
        }
    }
}

impl core::fmt::Display for SubjectType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Edge kinds and payloads
// ---------------------------------------------------------------------------

/// Discriminant for [`EdgeData`], used for bucketed classifier dispatch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum EdgeKind {
    /// Overlord-subject relationship, refined by a [`SubjectType`].
    Dependency,
    /// Mutual defensive alliance.
    Alliance,
    /// Royal marriage between ruling dynasties.
    RoyalMarriage,
    /// A warning issued against expansion.
    Warning,
    /// A monthly monetary subsidy.
    Subsidy,
    /// War reparations payments.
    Reparations,
    /// Transfer of trade power.
    TransferTrade,
    /// Steering of trade toward the recipient's home node.
    SteerTrade,
    /// The senior-junior pairing of a personal union.
    JuniorPartner,
}

/// Kind-specific payload of a diplomatic edge.
///
/// Serialized internally tagged on `kind`, matching the wire shape the
/// upstream parser emits and the frontend consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind")]
#[ts(export, export_to = "bindings/")]
pub enum EdgeData {
    /// Overlord-subject relationship. `first` is the overlord.
    Dependency {
        /// The flavor of subjection.
        #[ts(as = "String")]
        subject_type: SubjectType,
    },
    /// Mutual defensive alliance. Side order carries no meaning.
    Alliance,
    /// Royal marriage. Side order carries no meaning.
    RoyalMarriage,
    /// A warning. `first` warns `second`.
    Warning,
    /// A monthly subsidy. `first` pays `second`.
    Subsidy {
        /// Ducats transferred per month.
        #[ts(as = "String")]
        amount: Decimal,
        /// Ducats transferred since the start date, when the save records it.
        #[ts(as = "Option<String>")]
        total: Option<Decimal>,
    },
    /// War reparations. `first` pays `second`.
    Reparations,
    /// Trade power transfer. `first` gives power to `second`.
    TransferTrade,
    /// Trade steering. `first` steers trade for `second`.
    SteerTrade,
    /// Personal union pairing. `first` is the senior partner.
    JuniorPartner {
        /// Chance (0-100) that the senior partner inherits the junior.
        pu_inheritance_value: u32,
    },
}

impl EdgeData {
    /// The discriminant of this payload.
    pub const fn kind(&self) -> EdgeKind {
        match self {
            Self::Dependency { .. } => EdgeKind::Dependency,
            Self::Alliance => EdgeKind::Alliance,
            Self::RoyalMarriage => EdgeKind::RoyalMarriage,
            Self::Warning => EdgeKind::Warning,
            Self::Subsidy { .. } => EdgeKind::Subsidy,
            Self::Reparations => EdgeKind::Reparations,
            Self::TransferTrade => EdgeKind::TransferTrade,
            Self::SteerTrade => EdgeKind::SteerTrade,
            Self::JuniorPartner { .. } => EdgeKind::JuniorPartner,
        }
    }
}

// ---------------------------------------------------------------------------
// DiplomaticEdge
// ---------------------------------------------------------------------------

/// One diplomatic relation between two countries.
///
/// Produced wholesale by the upstream parser when a save is loaded; the
/// classification engine never creates, mutates, or deletes edges. In
/// well-formed data `first.tag` and `second.tag` are distinct valid tags
/// in the snapshot's country directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DiplomaticEdge {
    /// The initiating or superior party for directed kinds.
    pub first: CountryRef,
    /// The recipient or subordinate party for directed kinds.
    pub second: CountryRef,
    /// When the relationship began, when the save records it.
    pub start_date: Option<NaiveDate>,
    /// When the relationship ends, when the save records it.
    pub end_date: Option<NaiveDate>,
    /// The kind-specific payload.
    pub data: EdgeData,
}

impl DiplomaticEdge {
    /// The discriminant of this edge's payload.
    pub const fn kind(&self) -> EdgeKind {
        self.data.kind()
    }

    /// Whether either side of the edge carries the given tag.
    pub fn involves(&self, tag: &CountryTag) -> bool {
        self.first.tag == *tag || self.second.tag == *tag
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
