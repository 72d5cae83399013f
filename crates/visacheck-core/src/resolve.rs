//! Passport resolution: raw requirement cells to categorized access lists.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::AccessCategory;
use crate::country::{CountryCode, CountryIndex};
use crate::dataset::RequirementDataset;

type CacheMap = HashMap<CountryCode, Arc<Vec<PassportAccess>>>;

/// Interpret one raw requirement cell.
///
/// Purely numeric cells are visa-free stays with a day count; `"-1"` marks
/// the passport's own country. Unrecognized text is treated conservatively
/// as requiring a visa.
#[must_use]
pub fn categorize(raw: &str) -> (AccessCategory, Option<u32>) {
    match raw {
        "-1" => (AccessCategory::Home, None),
        "no admission" => (AccessCategory::NoAdmission, None),
        "visa required" => (AccessCategory::VisaRequired, None),
        "e-visa" => (AccessCategory::EVisa, None),
        "eta" => (AccessCategory::Eta, None),
        "visa on arrival" => (AccessCategory::VisaOnArrival, None),
        "visa free" => (AccessCategory::VisaFree, None),
        other => match other.parse::<u32>() {
            Ok(days) => (AccessCategory::VisaFree, Some(days)),
            Err(_) => (AccessCategory::VisaRequired, None),
        },
    }
}

/// One destination's entry requirement for a single passport.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct PassportAccess {
    pub destination: CountryCode,
    pub category: AccessCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    pub raw: String,
}

/// Memoizing resolver from passports to categorized destination lists.
///
/// Results sit behind `Arc` so repeated lookups hand out the cached list
/// without cloning it.
#[derive(Debug)]
pub struct PassportResolver {
    dataset: RequirementDataset,
    countries: CountryIndex,
    cache: RwLock<CacheMap>,
}

impl PassportResolver {
    #[must_use]
    pub fn new(dataset: RequirementDataset, countries: CountryIndex) -> Self {
        Self { dataset, countries, cache: RwLock::new(HashMap::new()) }
    }

    #[must_use]
    pub fn countries(&self) -> &CountryIndex {
        &self.countries
    }

    #[must_use]
    pub fn dataset(&self) -> &RequirementDataset {
        &self.dataset
    }

    /// Categorized access list for one passport.
    ///
    /// Home-country rows and destinations missing from the country index
    /// are dropped. Unknown passports resolve to an empty list. Results
    /// are memoized per passport.
    #[must_use]
    pub fn resolve(&self, passport: CountryCode) -> Arc<Vec<PassportAccess>> {
        if let Some(cached) = self.read_cache().get(&passport) {
            return Arc::clone(cached);
        }

        debug!(passport = %passport, "resolving passport access list");
        // Concurrent misses may compute twice; the entries are identical.
        let resolved = Arc::new(self.compute(passport));
        self.write_cache().insert(passport, Arc::clone(&resolved));
        resolved
    }

    /// Drop all memoized results.
    pub fn clear_cache(&self) {
        self.write_cache().clear();
        debug!("cleared passport resolution cache");
    }

    /// Best access per destination across several passports.
    ///
    /// The union of destinations is folded; a strictly lower rank replaces
    /// the held entry, so the first passport in the slice wins ties.
    #[must_use]
    pub fn best_per_destination(
        &self,
        passports: &[CountryCode],
    ) -> BTreeMap<CountryCode, PassportAccess> {
        let mut best: BTreeMap<CountryCode, PassportAccess> = BTreeMap::new();
        for &passport in passports {
            for access in self.resolve(passport).iter() {
                let improves = best
                    .get(&access.destination)
                    .map_or(true, |held| access.category.rank() < held.category.rank());
                if improves {
                    best.insert(access.destination, access.clone());
                }
            }
        }
        best
    }

    fn compute(&self, passport: CountryCode) -> Vec<PassportAccess> {
        let Some(requirements) = self.dataset.requirements(passport) else {
            return Vec::new();
        };

        requirements
            .iter()
            .filter_map(|(&destination, raw)| {
                let (category, days) = categorize(raw);
                if category == AccessCategory::Home {
                    return None;
                }
                if !self.countries.contains(destination) {
                    debug!(
                        passport = %passport,
                        destination = %destination,
                        "dropping destination missing from country index"
                    );
                    return None;
                }
                Some(PassportAccess { destination, category, days, raw: raw.clone() })
            })
            .collect()
    }

    fn read_cache(&self) -> RwLockReadGuard<'_, CacheMap> {
        match self.cache.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, CacheMap> {
        match self.cache.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
