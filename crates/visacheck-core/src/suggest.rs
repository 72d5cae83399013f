//! Destination suggestions over a merged result list.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::category::AccessCategory;
use crate::country::{CountryCode, CountryIndex, Region};
use crate::merge::GroupAccess;

/// Destinations commonly searched for, in pick order.
const POPULAR: [&str; 15] = [
    "TH", "JP", "FR", "ES", "IT", "TR", "AE", "SG", "GB", "US", "MY", "GR", "PT", "KR", "MX",
];

const PICK_LIMIT: usize = 5;

/// Three ready-made shortlists over the caller's results.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Default)]
pub struct Suggestions {
    /// Longest visa-free stays, best first.
    pub longest_stays: Vec<GroupAccess>,
    /// Visa-free destinations outside the regions the caller favors.
    pub hidden_gems: Vec<GroupAccess>,
    /// Accessible entries from the fixed popular list, in list order.
    pub popular_picks: Vec<GroupAccess>,
}

/// Build suggestion shortlists from merged results.
///
/// Hidden gems exclude favorited destinations and, when any favorites are
/// set, every region those favorites belong to. Unknown destinations never
/// appear as gems.
#[must_use]
pub fn suggest(
    countries: &CountryIndex,
    results: &[GroupAccess],
    favorites: &BTreeSet<CountryCode>,
) -> Suggestions {
    let mut longest_stays: Vec<GroupAccess> = results
        .iter()
        .filter(|access| access.category == AccessCategory::VisaFree && access.days.is_some())
        .cloned()
        .collect();
    longest_stays.sort_by(|a, b| b.days.unwrap_or(0).cmp(&a.days.unwrap_or(0)));
    longest_stays.truncate(PICK_LIMIT);

    let favored_regions: BTreeSet<Region> = favorites
        .iter()
        .filter_map(|&code| countries.get(code).map(|country| country.region))
        .collect();
    let mut hidden_gems: Vec<GroupAccess> = results
        .iter()
        .filter(|access| {
            access.category == AccessCategory::VisaFree
                && !favorites.contains(&access.destination)
                && countries
                    .get(access.destination)
                    .is_some_and(|country| !favored_regions.contains(&country.region))
        })
        .cloned()
        .collect();
    hidden_gems.sort_by(|a, b| b.days.unwrap_or(0).cmp(&a.days.unwrap_or(0)));
    hidden_gems.truncate(PICK_LIMIT);

    let popular_picks: Vec<GroupAccess> = POPULAR
        .iter()
        .filter_map(|&raw| {
            let code: CountryCode = raw.parse().ok()?;
            results
                .iter()
                .find(|access| access.destination == code && access.category.is_accessible())
                .cloned()
        })
        .take(PICK_LIMIT)
        .collect();

    Suggestions { longest_stays, hidden_gems, popular_picks }
}
