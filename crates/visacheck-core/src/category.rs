//! Access categories and the ordering used to pick the best entry outcome.
//!
//! Categories are the common currency of the engine: raw dataset cells are
//! folded into an [`AccessCategory`], visa-benefit rules map onto the same
//! scale through [`BenefitAccessType::category`], and group merging picks
//! winners by [`AccessCategory::rank`].

use serde::{Deserialize, Serialize};

/// What a traveler must arrange before entering a destination.
///
/// Variants are declared from least to most restrictive, so the derived
/// `Ord` agrees with [`AccessCategory::rank`] and `BTreeMap` keys iterate
/// in rank order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AccessCategory {
    /// Entry with no prior paperwork.
    VisaFree,
    /// Electronic travel authorization obtained before departure.
    Eta,
    /// Electronic visa obtained before departure.
    EVisa,
    /// Visa issued at the border.
    VisaOnArrival,
    /// Embassy or consulate visa required before travel.
    VisaRequired,
    /// Entry is not permitted.
    NoAdmission,
    /// The destination issued the passport; no entry requirement applies.
    #[serde(rename = "self")]
    Home,
}

impl AccessCategory {
    /// Categories a traveler can use without an embassy visa.
    pub const ACCESSIBLE: [Self; 4] =
        [Self::VisaFree, Self::Eta, Self::EVisa, Self::VisaOnArrival];

    /// Categories offered as result filters; `Home` is never listed.
    pub const FILTERABLE: [Self; 6] = [
        Self::VisaFree,
        Self::Eta,
        Self::EVisa,
        Self::VisaOnArrival,
        Self::VisaRequired,
        Self::NoAdmission,
    ];

    /// Restrictiveness rank; lower means easier entry.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::VisaFree => 0,
            Self::Eta => 1,
            Self::EVisa => 2,
            Self::VisaOnArrival => 3,
            Self::VisaRequired => 4,
            Self::NoAdmission => 5,
            Self::Home => 6,
        }
    }

    /// The more restrictive of two categories.
    #[must_use]
    pub fn worst_of(lhs: Self, rhs: Self) -> Self {
        if rhs.rank() > lhs.rank() {
            rhs
        } else {
            lhs
        }
    }

    /// Wire identifier, matching the serde representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VisaFree => "visa-free",
            Self::Eta => "eta",
            Self::EVisa => "e-visa",
            Self::VisaOnArrival => "visa-on-arrival",
            Self::VisaRequired => "visa-required",
            Self::NoAdmission => "no-admission",
            Self::Home => "self",
        }
    }

    /// Human-readable label used by renderers and exports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::VisaFree => "Visa Free",
            Self::Eta => "eTA",
            Self::EVisa => "E-Visa",
            Self::VisaOnArrival => "Visa on Arrival",
            Self::VisaRequired => "Visa Required",
            Self::NoAdmission => "No Admission",
            Self::Home => "Home Country",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "visa-free" => Some(Self::VisaFree),
            "eta" => Some(Self::Eta),
            "e-visa" => Some(Self::EVisa),
            "visa-on-arrival" => Some(Self::VisaOnArrival),
            "visa-required" => Some(Self::VisaRequired),
            "no-admission" => Some(Self::NoAdmission),
            "self" => Some(Self::Home),
            _ => None,
        }
    }

    /// Whether travel is practical without an embassy visa.
    #[must_use]
    pub fn is_accessible(self) -> bool {
        matches!(self, Self::VisaFree | Self::Eta | Self::EVisa | Self::VisaOnArrival)
    }
}

/// Entry mode granted by a visa-benefit rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BenefitAccessType {
    VisaFree,
    VisaOnArrival,
    EVisaSimplified,
    TransitFree,
}

impl BenefitAccessType {
    /// The access category a rule of this type grants.
    ///
    /// Transit-free rules still let the holder enter without a visa, so
    /// they collapse onto [`AccessCategory::VisaFree`].
    #[must_use]
    pub fn category(self) -> AccessCategory {
        match self {
            Self::VisaFree | Self::TransitFree => AccessCategory::VisaFree,
            Self::VisaOnArrival => AccessCategory::VisaOnArrival,
            Self::EVisaSimplified => AccessCategory::EVisa,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VisaFree => "visa_free",
            Self::VisaOnArrival => "visa_on_arrival",
            Self::EVisaSimplified => "e_visa_simplified",
            Self::TransitFree => "transit_free",
        }
    }
}

/// How well-sourced a visa-benefit rule is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
}

impl ConfidenceLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
        }
    }
}
