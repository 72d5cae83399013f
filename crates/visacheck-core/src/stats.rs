//! Headline numbers over a merged result list.

use serde::{Deserialize, Serialize};

use crate::category::AccessCategory;
use crate::country::CountryCode;
use crate::merge::GroupAccess;

/// The visa-free stay with the most days.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
pub struct LongestStay {
    pub destination: CountryCode,
    pub days: u32,
}

/// Headline counts for a result list.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Default)]
pub struct AccessSummary {
    pub visa_free: usize,
    /// Visa-free plus visa-on-arrival.
    pub easy_access: usize,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_stay: Option<LongestStay>,
}

/// How many results fall into one category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
pub struct CategoryCount {
    pub category: AccessCategory,
    pub count: usize,
}

/// Summarize a merged result list.
///
/// `longest_stay` is the visa-free entry with the largest day allowance;
/// on ties the first entry in list order wins. It is absent when no
/// visa-free entry carries a day count.
#[must_use]
pub fn summarize(results: &[GroupAccess]) -> AccessSummary {
    let mut summary = AccessSummary { total: results.len(), ..AccessSummary::default() };
    for access in results {
        match access.category {
            AccessCategory::VisaFree => {
                summary.visa_free += 1;
                summary.easy_access += 1;
                if let Some(days) = access.days {
                    let longer = summary.longest_stay.map_or(true, |held| days > held.days);
                    if longer {
                        summary.longest_stay =
                            Some(LongestStay { destination: access.destination, days });
                    }
                }
            }
            AccessCategory::VisaOnArrival => summary.easy_access += 1,
            _ => {}
        }
    }
    summary
}

/// Result counts per category, in rank order, omitting empty categories.
#[must_use]
pub fn category_counts(results: &[GroupAccess]) -> Vec<CategoryCount> {
    AccessCategory::FILTERABLE
        .into_iter()
        .filter_map(|category| {
            let count = results.iter().filter(|access| access.category == category).count();
            (count > 0).then_some(CategoryCount { category, count })
        })
        .collect()
}
