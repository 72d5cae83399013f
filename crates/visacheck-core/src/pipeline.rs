//! Filtering and ordering of merged access results.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::benefit::AccessSource;
use crate::category::AccessCategory;
use crate::country::{CountryCode, CountryIndex, Region};
use crate::merge::GroupAccess;

/// Raised when a filter keyword is not recognized.
#[derive(Debug, Error)]
#[error("unknown filter `{input}`: expected `all`, `accessible`, `favorites`, or a visa category")]
pub struct FilterParseError {
    pub input: String,
}

/// The mutually exclusive main filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Default)]
#[serde(try_from = "String", into = "String")]
pub enum PrimaryFilter {
    #[default]
    All,
    Accessible,
    Favorites,
    Category(AccessCategory),
}

impl PrimaryFilter {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Accessible => "accessible",
            Self::Favorites => "favorites",
            Self::Category(category) => category.as_str(),
        }
    }

    /// Parse a filter keyword.
    ///
    /// # Errors
    ///
    /// Returns [`FilterParseError`] when the keyword is neither a built-in
    /// filter nor a visa category.
    pub fn parse(value: &str) -> Result<Self, FilterParseError> {
        match value {
            "all" => Ok(Self::All),
            "accessible" => Ok(Self::Accessible),
            "favorites" => Ok(Self::Favorites),
            other => AccessCategory::parse(other)
                .map(Self::Category)
                .ok_or_else(|| FilterParseError { input: value.to_string() }),
        }
    }
}

impl TryFrom<String> for PrimaryFilter {
    type Error = FilterParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PrimaryFilter> for String {
    fn from(filter: PrimaryFilter) -> Self {
        filter.as_str().to_string()
    }
}

/// Which results to keep.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FilterSpec {
    #[serde(default)]
    pub primary: PrimaryFilter,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub region: Option<Region>,
    /// Case-insensitive substring match on the destination display name.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty", default)]
    pub favorites: BTreeSet<CountryCode>,
}

impl FilterSpec {
    #[must_use]
    pub fn matches(&self, countries: &CountryIndex, access: &GroupAccess) -> bool {
        let primary_ok = match self.primary {
            PrimaryFilter::All => true,
            PrimaryFilter::Accessible => access.category.is_accessible(),
            PrimaryFilter::Favorites => self.favorites.contains(&access.destination),
            PrimaryFilter::Category(category) => access.category == category,
        };
        if !primary_ok {
            return false;
        }

        if let Some(region) = self.region {
            let in_region = countries
                .get(access.destination)
                .is_some_and(|country| country.region == region);
            if !in_region {
                return false;
            }
        }

        if let Some(query) = &self.search {
            let name = countries.display_name(access.destination).to_lowercase();
            if !name.contains(&query.to_lowercase()) {
                return false;
            }
        }

        true
    }
}

/// Selectable ordering applied after the fixed favorite/source precedence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Name,
    DaysDesc,
    Category,
    Region,
}

impl SortKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::DaysDesc => "days_desc",
            Self::Category => "category",
            Self::Region => "region",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(Self::Name),
            "days" | "days_desc" => Some(Self::DaysDesc),
            "category" => Some(Self::Category),
            "region" => Some(Self::Region),
            _ => None,
        }
    }
}

/// Filter and order merged results for display.
///
/// Favorited destinations sort first (unless the favorites filter already
/// restricts to them), then passport-sourced entries before benefit-sourced
/// ones, then the selected key. The sort is stable, so equal rows keep the
/// merge order.
#[must_use]
pub fn filter_and_sort(
    countries: &CountryIndex,
    results: &[GroupAccess],
    filter: &FilterSpec,
    sort: SortKey,
) -> Vec<GroupAccess> {
    let mut rows: Vec<GroupAccess> =
        results.iter().filter(|access| filter.matches(countries, access)).cloned().collect();

    let favorites_pinned = filter.primary != PrimaryFilter::Favorites;
    rows.sort_by(|lhs, rhs| {
        let pin = |access: &GroupAccess| {
            u8::from(!(favorites_pinned && filter.favorites.contains(&access.destination)))
        };
        let source = |access: &GroupAccess| match access.source {
            AccessSource::Passport => 0u8,
            AccessSource::VisaBenefit => 1u8,
        };
        pin(lhs)
            .cmp(&pin(rhs))
            .then_with(|| source(lhs).cmp(&source(rhs)))
            .then_with(|| compare_by_key(countries, sort, lhs, rhs))
    });
    rows
}

fn compare_by_key(
    countries: &CountryIndex,
    sort: SortKey,
    lhs: &GroupAccess,
    rhs: &GroupAccess,
) -> Ordering {
    match sort {
        SortKey::Name => {
            countries.display_name(lhs.destination).cmp(&countries.display_name(rhs.destination))
        }
        SortKey::DaysDesc => rhs.days.unwrap_or(0).cmp(&lhs.days.unwrap_or(0)),
        SortKey::Category => lhs.category.rank().cmp(&rhs.category.rank()),
        SortKey::Region => region_label(countries, lhs.destination)
            .cmp(region_label(countries, rhs.destination))
            .then_with(|| {
                countries
                    .display_name(lhs.destination)
                    .cmp(&countries.display_name(rhs.destination))
            }),
    }
}

fn region_label(countries: &CountryIndex, code: CountryCode) -> &'static str {
    countries.get(code).map_or("", |country| country.region.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::TravelerId;
    use std::collections::BTreeMap;

    fn code(raw: &str) -> CountryCode {
        match raw.parse() {
            Ok(code) => code,
            Err(err) => panic!("code fixture should parse: {err}"),
        }
    }

    fn mk_access(
        destination: &str,
        category: AccessCategory,
        days: Option<u32>,
        source: AccessSource,
    ) -> GroupAccess {
        GroupAccess {
            destination: code(destination),
            category,
            days,
            per_person: BTreeMap::<TravelerId, _>::new(),
            source,
            holding: None,
            conditions: None,
        }
    }

    fn mk_results() -> Vec<GroupAccess> {
        vec![
            mk_access("TH", AccessCategory::VisaFree, Some(30), AccessSource::Passport),
            mk_access("JP", AccessCategory::VisaFree, Some(90), AccessSource::Passport),
            mk_access("TR", AccessCategory::EVisa, Some(30), AccessSource::VisaBenefit),
            mk_access("US", AccessCategory::VisaRequired, None, AccessSource::Passport),
            mk_access("GE", AccessCategory::VisaFree, Some(365), AccessSource::VisaBenefit),
        ]
    }

    fn codes(rows: &[GroupAccess]) -> Vec<&str> {
        rows.iter().map(|access| access.destination.as_str()).collect()
    }

    // Test IDs: TPIP-001
    #[test]
    fn accessible_filter_keeps_only_accessible_categories() {
        let countries = CountryIndex::builtin();
        let spec = FilterSpec { primary: PrimaryFilter::Accessible, ..FilterSpec::default() };

        let rows = filter_and_sort(&countries, &mk_results(), &spec, SortKey::Category);
        assert!(rows.iter().all(|access| access.category.is_accessible()));
        let ranks: Vec<u8> = rows.iter().map(|access| access.category.rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        assert_eq!(ranks, sorted);
    }

    // Test IDs: TPIP-002
    #[test]
    fn name_sort_is_alphabetical_with_passport_entries_first() {
        let countries = CountryIndex::builtin();
        let spec = FilterSpec::default();

        let rows = filter_and_sort(&countries, &mk_results(), &spec, SortKey::Name);
        // Passport block: Japan, Thailand, United States; then benefits.
        assert_eq!(codes(&rows), vec!["JP", "TH", "US", "GE", "TR"]);
    }

    // Test IDs: TPIP-003
    #[test]
    fn favorites_sort_first_unless_the_favorites_filter_is_active() {
        let countries = CountryIndex::builtin();
        let mut spec = FilterSpec::default();
        spec.favorites.insert(code("TR"));

        let rows = filter_and_sort(&countries, &mk_results(), &spec, SortKey::Name);
        assert_eq!(rows[0].destination, code("TR"));

        spec.primary = PrimaryFilter::Favorites;
        let only = filter_and_sort(&countries, &mk_results(), &spec, SortKey::Name);
        assert_eq!(codes(&only), vec!["TR"]);
    }

    // Test IDs: TPIP-004
    #[test]
    fn days_sort_is_descending_with_missing_days_last() {
        let countries = CountryIndex::builtin();
        let spec = FilterSpec::default();

        let rows = filter_and_sort(&countries, &mk_results(), &spec, SortKey::DaysDesc);
        assert_eq!(codes(&rows), vec!["JP", "TH", "US", "GE", "TR"]);
        let passport_days: Vec<Option<u32>> =
            rows.iter().take(3).map(|access| access.days).collect();
        assert_eq!(passport_days, vec![Some(90), Some(30), None]);
    }

    // Test IDs: TPIP-005
    #[test]
    fn region_and_search_filters_compose() {
        let countries = CountryIndex::builtin();
        let spec = FilterSpec { region: Some(Region::Asia), ..FilterSpec::default() };
        let rows = filter_and_sort(&countries, &mk_results(), &spec, SortKey::Name);
        assert_eq!(codes(&rows), vec!["JP", "TH", "GE"]);

        let spec = FilterSpec { search: Some("LAND".to_string()), ..FilterSpec::default() };
        let rows = filter_and_sort(&countries, &mk_results(), &spec, SortKey::Name);
        assert_eq!(codes(&rows), vec!["TH"]);
    }

    // Test IDs: TPIP-006
    #[test]
    fn category_filter_and_keyword_parsing_round_trip() {
        let parsed = match PrimaryFilter::parse("e-visa") {
            Ok(filter) => filter,
            Err(err) => panic!("keyword should parse: {err}"),
        };
        assert_eq!(parsed, PrimaryFilter::Category(AccessCategory::EVisa));
        assert_eq!(parsed.as_str(), "e-visa");
        assert!(PrimaryFilter::parse("everything").is_err());

        let countries = CountryIndex::builtin();
        let spec = FilterSpec { primary: parsed, ..FilterSpec::default() };
        let rows = filter_and_sort(&countries, &mk_results(), &spec, SortKey::Name);
        assert_eq!(codes(&rows), vec!["TR"]);
    }

    // Test IDs: TPIP-007
    #[test]
    fn region_sort_groups_by_region_label_then_name() {
        let countries = CountryIndex::builtin();
        let spec = FilterSpec::default();
        let results = vec![
            mk_access("TH", AccessCategory::VisaFree, Some(30), AccessSource::Passport),
            mk_access("FR", AccessCategory::VisaFree, Some(90), AccessSource::Passport),
            mk_access("JP", AccessCategory::VisaFree, Some(90), AccessSource::Passport),
            mk_access("DE", AccessCategory::VisaFree, Some(90), AccessSource::Passport),
        ];

        let rows = filter_and_sort(&countries, &results, &spec, SortKey::Region);
        assert_eq!(codes(&rows), vec!["JP", "TH", "FR", "DE"]);
    }
}
