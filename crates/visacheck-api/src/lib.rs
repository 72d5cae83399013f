use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use visacheck_core::{
    category_counts, filter_and_sort, merge_group, summarize, AccessCategory, AccessSource,
    AccessSummary, CategoryCount, Country, CountryCode, EnhancedAccess, FilterSpec, GroupAccess,
    HoldingCatalog, HoldingId, LinkDirectory, OfficialLink, PassportComparison, PassportResolver,
    Region, RequirementDataset, SortKey, Suggestions, Traveler, TravelerId, VisaHoldingType,
};

pub mod share;

pub use share::{decode_share, encode_share};

pub const API_CONTRACT_VERSION: &str = "api.v1";

/// One traveler group plus display preferences.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TravelQuery {
    pub travelers: Vec<Traveler>,
    #[serde(default)]
    pub filter: FilterSpec,
    #[serde(default)]
    pub sort: SortKey,
}

/// A merged destination joined with country metadata and official links.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct DestinationEntry {
    pub destination: CountryCode,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    pub flag: String,
    pub category: AccessCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    pub source: AccessSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holding: Option<HoldingId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub per_person: BTreeMap<TravelerId, EnhancedAccess>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<OfficialLink>,
}

/// Full answer to a [`TravelQuery`].
///
/// `summary` and `category_counts` describe the merged set before filtering,
/// so they stay stable while the caller narrows `results`.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct TravelReport {
    pub results: Vec<DestinationEntry>,
    pub summary: AccessSummary,
    pub category_counts: Vec<CategoryCount>,
    pub benefit_counts: BTreeMap<TravelerId, BTreeMap<HoldingId, usize>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct ComparePassportsRequest {
    pub first: CountryCode,
    pub second: CountryCode,
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct CompareReport {
    pub first: CountryCode,
    pub first_name: String,
    pub second: CountryCode,
    pub second_name: String,
    pub comparison: PassportComparison,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SuggestRequest {
    pub travelers: Vec<Traveler>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty", default)]
    pub favorites: BTreeSet<CountryCode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct SuggestReport {
    pub longest_stays: Vec<DestinationEntry>,
    pub hidden_gems: Vec<DestinationEntry>,
    pub popular_picks: Vec<DestinationEntry>,
}

/// A country reference row with its derived flag.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct CountryEntry {
    pub code: CountryCode,
    pub name: String,
    pub region: Region,
    pub flag: String,
}

/// The engine façade: owns the dataset, resolver, and static catalogs.
#[derive(Debug)]
pub struct VisaCheck {
    resolver: PassportResolver,
    catalog: HoldingCatalog,
    links: LinkDirectory,
}

impl VisaCheck {
    #[must_use]
    pub fn new(dataset: RequirementDataset) -> Self {
        Self {
            resolver: PassportResolver::new(dataset, visacheck_core::CountryIndex::builtin()),
            catalog: HoldingCatalog::builtin(),
            links: LinkDirectory::builtin(),
        }
    }

    /// Load the requirement dataset from a JSON file.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read or does not hold a
    /// passport-to-destination requirement object.
    pub fn open(path: &Path) -> Result<Self> {
        let dataset = RequirementDataset::from_path(path)?;
        Ok(Self::new(dataset))
    }

    #[must_use]
    pub fn resolver(&self) -> &PassportResolver {
        &self.resolver
    }

    #[must_use]
    pub fn catalog(&self) -> &HoldingCatalog {
        &self.catalog
    }

    /// Merge, filter, and sort a traveler group's destinations.
    #[must_use]
    pub fn destinations(&self, query: &TravelQuery) -> TravelReport {
        let outcome = merge_group(&self.resolver, &self.catalog, &query.travelers);
        let summary = summarize(&outcome.results);
        let counts = category_counts(&outcome.results);
        let ordered = filter_and_sort(
            self.resolver.countries(),
            &outcome.results,
            &query.filter,
            query.sort,
        );

        TravelReport {
            results: ordered.into_iter().map(|access| self.join(access)).collect(),
            summary,
            category_counts: counts,
            benefit_counts: outcome.benefit_counts,
        }
    }

    /// Compare two passports destination by destination.
    #[must_use]
    pub fn compare(&self, request: &ComparePassportsRequest) -> CompareReport {
        let countries = self.resolver.countries();
        CompareReport {
            first: request.first,
            first_name: countries.display_name(request.first),
            second: request.second,
            second_name: countries.display_name(request.second),
            comparison: visacheck_core::compare(&self.resolver, request.first, request.second),
        }
    }

    /// Suggestion shortlists for a traveler group.
    #[must_use]
    pub fn suggest(&self, request: &SuggestRequest) -> SuggestReport {
        let outcome = merge_group(&self.resolver, &self.catalog, &request.travelers);
        let Suggestions { longest_stays, hidden_gems, popular_picks } = visacheck_core::suggest(
            self.resolver.countries(),
            &outcome.results,
            &request.favorites,
        );

        let join = |rows: Vec<GroupAccess>| -> Vec<DestinationEntry> {
            rows.into_iter().map(|access| self.join(access)).collect()
        };
        SuggestReport {
            longest_stays: join(longest_stays),
            hidden_gems: join(hidden_gems),
            popular_picks: join(popular_picks),
        }
    }

    /// The built-in holding catalog, in catalog order.
    #[must_use]
    pub fn holding_types(&self) -> Vec<VisaHoldingType> {
        self.catalog.types().to_vec()
    }

    /// The built-in country reference table, in code order.
    #[must_use]
    pub fn countries(&self) -> Vec<CountryEntry> {
        self.resolver
            .countries()
            .iter()
            .map(|country| CountryEntry {
                code: country.code,
                name: country.name.clone(),
                region: country.region,
                flag: country.flag(),
            })
            .collect()
    }

    fn join(&self, access: GroupAccess) -> DestinationEntry {
        let countries = self.resolver.countries();
        let country = countries.get(access.destination);
        DestinationEntry {
            destination: access.destination,
            name: countries.display_name(access.destination),
            region: country.map(|country| country.region),
            flag: country.map_or_else(String::new, Country::flag),
            category: access.category,
            days: access.days,
            source: access.source,
            holding: access.holding,
            conditions: access.conditions,
            per_person: access.per_person,
            links: self.links.get(access.destination).cloned(),
        }
    }
}
