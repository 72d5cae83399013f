//! Visa-benefit resolution on top of a passport baseline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::{AccessCategory, ConfidenceLevel};
use crate::country::CountryCode;
use crate::holding::{HoldingCatalog, HoldingId};
use crate::resolve::PassportAccess;

/// Where an access entry came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AccessSource {
    Passport,
    VisaBenefit,
}

impl AccessSource {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Passport => "passport",
            Self::VisaBenefit => "visa_benefit",
        }
    }

    /// Human-readable label used in exports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Passport => "Passport",
            Self::VisaBenefit => "Visa Benefit",
        }
    }
}

/// An access entry enriched with its provenance.
///
/// Passport entries carry no holding, conditions, or confidence; benefit
/// entries carry all three.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct EnhancedAccess {
    pub destination: CountryCode,
    pub category: AccessCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    pub source: AccessSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holding: Option<HoldingId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<ConfidenceLevel>,
}

impl EnhancedAccess {
    /// Wrap a passport result.
    #[must_use]
    pub fn from_passport(access: &PassportAccess) -> Self {
        Self {
            destination: access.destination,
            category: access.category,
            days: access.days,
            source: AccessSource::Passport,
            holding: None,
            conditions: None,
            confidence: None,
        }
    }
}

/// Destinations unlocked by `holdings` beyond the passport `baseline`.
///
/// A rule is kept only when it strictly improves on the passport entry for
/// its destination. Across holdings and duplicate rows, the first rule seen
/// per destination wins unless a later one is strictly better.
#[must_use]
pub fn resolve_benefits(
    catalog: &HoldingCatalog,
    holdings: &[HoldingId],
    baseline: &BTreeMap<CountryCode, PassportAccess>,
) -> Vec<EnhancedAccess> {
    let mut best: BTreeMap<CountryCode, EnhancedAccess> = BTreeMap::new();

    for holding in holdings {
        for rule in catalog.rules(holding) {
            let category = rule.access.category();
            let passport_blocks = baseline
                .get(&rule.destination)
                .is_some_and(|held| held.category.rank() <= category.rank());
            if passport_blocks {
                debug!(
                    holding = %holding,
                    destination = %rule.destination,
                    "skipping benefit already covered by passport"
                );
                continue;
            }

            let improves = best
                .get(&rule.destination)
                .map_or(true, |held| category.rank() < held.category.rank());
            if improves {
                best.insert(
                    rule.destination,
                    EnhancedAccess {
                        destination: rule.destination,
                        category,
                        days: rule.days,
                        source: AccessSource::VisaBenefit,
                        holding: Some(holding.clone()),
                        conditions: Some(rule.conditions.clone()),
                        confidence: Some(rule.confidence),
                    },
                );
            }
        }
    }

    best.into_values().collect()
}

/// Per-holding count of rules that improve on the passport baseline.
///
/// Counts are independent per holding, so two holdings unlocking the same
/// destination both count it. Unknown holdings count zero.
#[must_use]
pub fn summarize_new_destinations(
    catalog: &HoldingCatalog,
    holdings: &[HoldingId],
    baseline: &BTreeMap<CountryCode, PassportAccess>,
) -> BTreeMap<HoldingId, usize> {
    let mut counts = BTreeMap::new();
    for holding in holdings {
        let unlocked = catalog
            .rules(holding)
            .iter()
            .filter(|rule| {
                let category = rule.access.category();
                baseline
                    .get(&rule.destination)
                    .map_or(true, |held| held.category.rank() > category.rank())
            })
            .count();
        counts.insert(holding.clone(), unlocked);
    }
    counts
}
