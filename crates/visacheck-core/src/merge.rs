//! Merging access results across a group of travelers.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::benefit::{resolve_benefits, summarize_new_destinations, AccessSource, EnhancedAccess};
use crate::category::AccessCategory;
use crate::country::CountryCode;
use crate::holding::{HoldingCatalog, HoldingId};
use crate::resolve::PassportResolver;

/// Identifier of a traveler within a group.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct TravelerId(pub String);

impl TravelerId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TravelerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TravelerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One member of a traveler group.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Traveler {
    pub id: TravelerId,
    pub name: String,
    pub passports: Vec<CountryCode>,
    #[serde(default)]
    pub holdings: Vec<HoldingId>,
}

impl Traveler {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: TravelerId(id.into()),
            name: name.into(),
            passports: Vec::new(),
            holdings: Vec::new(),
        }
    }

    /// A traveler participates in merging only with at least one passport.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.passports.is_empty()
    }
}

/// One destination every active traveler can reach.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct GroupAccess {
    pub destination: CountryCode,
    pub category: AccessCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub per_person: BTreeMap<TravelerId, EnhancedAccess>,
    pub source: AccessSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holding: Option<HoldingId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<String>>,
}

/// Output of [`merge_group`].
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Default)]
pub struct MergeOutcome {
    pub results: Vec<GroupAccess>,
    /// Per traveler, how many rules each holding unlocked beyond the passport
    /// baseline.
    pub benefit_counts: BTreeMap<TravelerId, BTreeMap<HoldingId, usize>>,
}

/// Merge passport and benefit access across a traveler group.
///
/// Travelers without passports are ignored. A single active traveler yields
/// its own deduplicated access list with an empty `per_person` map. With
/// several active travelers only destinations reachable by all of them
/// survive: the group category is the worst across travelers, days are the
/// group minimum and reported only for visa-free access, and the benefit
/// attribution comes from the last traveler whose entry was benefit-sourced.
#[must_use]
pub fn merge_group(
    resolver: &PassportResolver,
    catalog: &HoldingCatalog,
    travelers: &[Traveler],
) -> MergeOutcome {
    let active: Vec<&Traveler> = travelers.iter().filter(|traveler| traveler.is_active()).collect();
    if active.is_empty() {
        return MergeOutcome::default();
    }

    let mut benefit_counts = BTreeMap::new();
    let mut full_maps: Vec<(&Traveler, BTreeMap<CountryCode, EnhancedAccess>)> =
        Vec::with_capacity(active.len());
    for traveler in &active {
        let baseline = resolver.best_per_destination(&traveler.passports);
        let benefits = resolve_benefits(catalog, &traveler.holdings, &baseline);
        benefit_counts.insert(
            traveler.id.clone(),
            summarize_new_destinations(catalog, &traveler.holdings, &baseline),
        );

        let mut full: BTreeMap<CountryCode, EnhancedAccess> = baseline
            .values()
            .map(|access| (access.destination, EnhancedAccess::from_passport(access)))
            .collect();
        // Benefits only exist where they beat the passport, so overwriting is
        // always an upgrade.
        for benefit in benefits {
            full.insert(benefit.destination, benefit);
        }
        full_maps.push((traveler, full));
    }

    if let [(_, only)] = full_maps.as_slice() {
        let results = only
            .values()
            .map(|access| GroupAccess {
                destination: access.destination,
                category: access.category,
                days: access.days,
                per_person: BTreeMap::new(),
                source: access.source,
                holding: access.holding.clone(),
                conditions: access.conditions.clone(),
            })
            .collect();
        return MergeOutcome { results, benefit_counts };
    }

    let mut shared: BTreeSet<CountryCode> =
        full_maps[0].1.keys().copied().collect();
    for (_, map) in &full_maps[1..] {
        shared.retain(|destination| map.contains_key(destination));
    }
    debug!(travelers = active.len(), shared = shared.len(), "intersected group destinations");

    let mut results = Vec::with_capacity(shared.len());
    for destination in shared {
        let mut category = AccessCategory::VisaFree;
        let mut days: Option<u32> = None;
        let mut source = AccessSource::Passport;
        let mut holding = None;
        let mut conditions = None;
        let mut per_person = BTreeMap::new();

        for (traveler, map) in &full_maps {
            let Some(entry) = map.get(&destination) else { continue };
            category = AccessCategory::worst_of(category, entry.category);
            if let Some(allowed) = entry.days {
                days = Some(days.map_or(allowed, |held| held.min(allowed)));
            }
            if entry.source == AccessSource::VisaBenefit {
                source = AccessSource::VisaBenefit;
                holding = entry.holding.clone();
                conditions = entry.conditions.clone();
            }
            per_person.insert(traveler.id.clone(), entry.clone());
        }

        results.push(GroupAccess {
            destination,
            category,
            days: if category == AccessCategory::VisaFree { days } else { None },
            per_person,
            source,
            holding,
            conditions,
        });
    }

    MergeOutcome { results, benefit_counts }
}
