//! Side-by-side comparison of two passports.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::category::AccessCategory;
use crate::country::CountryCode;
use crate::resolve::PassportResolver;

/// One passport's access for a compared destination.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
pub struct ComparisonEntry {
    pub category: AccessCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
}

/// A destination where the two passports differ.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct ComparisonRow {
    pub destination: CountryCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<ComparisonEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<ComparisonEntry>,
}

/// Differences between two passports over the union of their destinations.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Default)]
pub struct PassportComparison {
    /// Rows where category or days differ, ordered by destination name.
    pub rows: Vec<ComparisonRow>,
    pub first_better: usize,
    pub second_better: usize,
    pub same: usize,
}

/// Compare two passports destination by destination.
///
/// Identical (category, days) pairs are counted in `same` and omitted from
/// `rows`. A passport with no entry for a destination counts as worse
/// there. Ties on category fall back to the day allowance, missing days
/// counting as zero.
#[must_use]
pub fn compare(
    resolver: &PassportResolver,
    first: CountryCode,
    second: CountryCode,
) -> PassportComparison {
    let first_map = entry_map(resolver, first);
    let second_map = entry_map(resolver, second);

    let destinations: BTreeSet<CountryCode> =
        first_map.keys().chain(second_map.keys()).copied().collect();

    let mut comparison = PassportComparison::default();
    for destination in destinations {
        let lhs = first_map.get(&destination).copied();
        let rhs = second_map.get(&destination).copied();
        match (lhs, rhs) {
            (Some(a), Some(b)) if a == b => {
                comparison.same += 1;
                continue;
            }
            (Some(a), Some(b)) => {
                if better(a, b) {
                    comparison.first_better += 1;
                } else {
                    comparison.second_better += 1;
                }
            }
            (Some(_), None) => comparison.first_better += 1,
            (None, Some(_)) => comparison.second_better += 1,
            (None, None) => continue,
        }
        comparison.rows.push(ComparisonRow { destination, first: lhs, second: rhs });
    }

    let countries = resolver.countries();
    comparison.rows.sort_by(|a, b| {
        countries.display_name(a.destination).cmp(&countries.display_name(b.destination))
    });
    comparison
}

fn entry_map(
    resolver: &PassportResolver,
    passport: CountryCode,
) -> BTreeMap<CountryCode, ComparisonEntry> {
    resolver
        .resolve(passport)
        .iter()
        .map(|access| {
            (access.destination, ComparisonEntry { category: access.category, days: access.days })
        })
        .collect()
}

fn better(a: ComparisonEntry, b: ComparisonEntry) -> bool {
    if a.category.rank() != b.category.rank() {
        return a.category.rank() < b.category.rank();
    }
    a.days.unwrap_or(0) > b.days.unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::CountryIndex;
    use crate::dataset::RequirementDataset;

    fn code(raw: &str) -> CountryCode {
        match raw.parse() {
            Ok(code) => code,
            Err(err) => panic!("code fixture should parse: {err}"),
        }
    }

    fn mk_resolver() -> PassportResolver {
        let mut dataset = RequirementDataset::default();
        dataset.insert_requirement(code("DE"), code("TH"), "30");
        dataset.insert_requirement(code("DE"), code("JP"), "90");
        dataset.insert_requirement(code("DE"), code("TR"), "visa free");
        dataset.insert_requirement(code("DE"), code("KH"), "visa on arrival");
        dataset.insert_requirement(code("US"), code("TH"), "30");
        dataset.insert_requirement(code("US"), code("JP"), "visa required");
        dataset.insert_requirement(code("US"), code("TR"), "visa required");
        dataset.insert_requirement(code("US"), code("MX"), "180");
        PassportResolver::new(dataset, CountryIndex::builtin())
    }

    // Test IDs: TCMP-001
    #[test]
    fn identical_entries_are_counted_but_not_listed() {
        let resolver = mk_resolver();
        let comparison = compare(&resolver, code("DE"), code("US"));

        assert_eq!(comparison.same, 1);
        assert!(comparison.rows.iter().all(|row| row.destination != code("TH")));
    }

    // Test IDs: TCMP-002
    #[test]
    fn rows_are_sorted_by_destination_name_with_missing_sides_kept() {
        let resolver = mk_resolver();
        let comparison = compare(&resolver, code("DE"), code("US"));

        let order: Vec<&str> =
            comparison.rows.iter().map(|row| row.destination.as_str()).collect();
        // Cambodia, Japan, Mexico, Turkey by name.
        assert_eq!(order, vec!["KH", "JP", "MX", "TR"]);
        assert_eq!(comparison.first_better, 3);
        assert_eq!(comparison.second_better, 1);

        let mexico = &comparison.rows[2];
        assert_eq!(mexico.first, None);
        assert_eq!(
            mexico.second,
            Some(ComparisonEntry { category: AccessCategory::VisaFree, days: Some(180) })
        );
    }

    // Test IDs: TCMP-003
    #[test]
    fn equal_categories_fall_back_to_day_allowance() {
        let mut dataset = RequirementDataset::default();
        dataset.insert_requirement(code("DE"), code("TH"), "90");
        dataset.insert_requirement(code("FR"), code("TH"), "30");
        let resolver = PassportResolver::new(dataset, CountryIndex::builtin());

        let comparison = compare(&resolver, code("DE"), code("FR"));
        assert_eq!(comparison.first_better, 1);
        assert_eq!(comparison.second_better, 0);
        assert_eq!(comparison.same, 0);
        assert_eq!(comparison.rows.len(), 1);
    }

    // Test IDs: TCMP-004
    #[test]
    fn unknown_passports_compare_as_empty() {
        let resolver = mk_resolver();
        let comparison = compare(&resolver, code("ZZ"), code("DE"));

        assert_eq!(comparison.first_better, 0);
        assert_eq!(comparison.second_better, 4);
        assert_eq!(comparison.same, 0);
        assert!(comparison.rows.iter().all(|row| row.first.is_none()));
    }
}
