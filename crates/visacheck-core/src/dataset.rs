//! Raw requirement dataset: passport to destination to requirement cell.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::country::CountryCode;

/// Errors raised while loading a requirement dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is not valid JSON")]
    Json(#[from] serde_json::Error),
    #[error("dataset root must be a JSON object of passport entries")]
    Shape,
}

/// Visa requirement matrix keyed by passport, then destination.
///
/// Cells hold the raw requirement strings from the source dataset;
/// interpretation happens in [`crate::resolve::categorize`].
#[derive(Debug, Clone, Default)]
pub struct RequirementDataset {
    entries: BTreeMap<CountryCode, BTreeMap<CountryCode, String>>,
}

impl RequirementDataset {
    /// Parse a dataset from its JSON text.
    ///
    /// The expected shape is `{"DE": {"TH": "30", ...}, ...}`. Entries with
    /// malformed codes or non-string cells are skipped with a debug event
    /// rather than failing the whole load.
    ///
    /// # Errors
    ///
    /// Returns an error when the text is not JSON or the root is not an
    /// object.
    pub fn from_json_str(text: &str) -> Result<Self, DatasetError> {
        let root: Value = serde_json::from_str(text)?;
        let Value::Object(passports) = root else {
            return Err(DatasetError::Shape);
        };

        let mut dataset = Self::default();
        for (passport_raw, body) in passports {
            let Ok(passport) = passport_raw.parse::<CountryCode>() else {
                debug!(passport = %passport_raw, "skipping malformed passport code");
                continue;
            };
            let Value::Object(destinations) = body else {
                debug!(passport = %passport, "skipping passport entry with non-object body");
                continue;
            };
            for (destination_raw, cell) in destinations {
                let Ok(destination) = destination_raw.parse::<CountryCode>() else {
                    debug!(
                        passport = %passport,
                        destination = %destination_raw,
                        "skipping malformed destination code"
                    );
                    continue;
                };
                let Value::String(requirement) = cell else {
                    debug!(
                        passport = %passport,
                        destination = %destination,
                        "skipping non-string requirement cell"
                    );
                    continue;
                };
                dataset.insert_requirement(passport, destination, requirement);
            }
        }
        Ok(dataset)
    }

    /// Load a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or its content does
    /// not parse.
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let text = fs::read_to_string(path)
            .map_err(|source| DatasetError::Io { path: path.to_path_buf(), source })?;
        Self::from_json_str(&text)
    }

    /// Insert or replace a single requirement cell.
    pub fn insert_requirement(
        &mut self,
        passport: CountryCode,
        destination: CountryCode,
        requirement: impl Into<String>,
    ) {
        self.entries.entry(passport).or_default().insert(destination, requirement.into());
    }

    /// All raw requirement cells for one passport.
    #[must_use]
    pub fn requirements(&self, passport: CountryCode) -> Option<&BTreeMap<CountryCode, String>> {
        self.entries.get(&passport)
    }

    /// Passports that carry at least one requirement cell.
    pub fn passports(&self) -> impl Iterator<Item = CountryCode> + '_ {
        self.entries.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;

    fn code(raw: &str) -> CountryCode {
        match raw.parse() {
            Ok(code) => code,
            Err(err) => panic!("code fixture should parse: {err}"),
        }
    }

    fn load(text: &str) -> RequirementDataset {
        match RequirementDataset::from_json_str(text) {
            Ok(dataset) => dataset,
            Err(err) => panic!("dataset fixture should load: {err}"),
        }
    }

    // Test IDs: TDAT-001
    #[test]
    fn loads_passport_entries_with_raw_cells() {
        let dataset = load(r#"{"DE": {"TH": "30", "US": "eta", "DE": "-1"}, "US": {"TH": "30"}}"#);
        assert_eq!(dataset.len(), 2);
        assert!(!dataset.is_empty());

        let germany = match dataset.requirements(code("DE")) {
            Some(map) => map,
            None => panic!("DE entry should exist"),
        };
        assert_eq!(germany.len(), 3);
        assert_eq!(germany.get(&code("TH")).map(String::as_str), Some("30"));
        assert_eq!(germany.get(&code("DE")).map(String::as_str), Some("-1"));
        assert!(dataset.requirements(code("FR")).is_none());
    }

    // Test IDs: TDAT-002
    #[test]
    fn rejects_non_object_roots() {
        assert!(matches!(
            RequirementDataset::from_json_str("[1, 2]"),
            Err(DatasetError::Shape)
        ));
        assert!(matches!(
            RequirementDataset::from_json_str("\"DE\""),
            Err(DatasetError::Shape)
        ));
        assert!(matches!(
            RequirementDataset::from_json_str("{not json"),
            Err(DatasetError::Json(_))
        ));
    }

    // Test IDs: TDAT-003
    #[test]
    fn skips_malformed_codes_and_non_string_cells() {
        let dataset = load(
            r#"{
                "DE": {"TH": "visa free", "XYZ": "30", "FR": 90},
                "BAD": {"TH": "30"},
                "US": "not-an-object"
            }"#,
        );
        assert_eq!(dataset.len(), 1);

        let germany = match dataset.requirements(code("DE")) {
            Some(map) => map,
            None => panic!("DE entry should survive the partial load"),
        };
        assert_eq!(germany.len(), 1);
        assert_eq!(germany.get(&code("TH")).map(String::as_str), Some("visa free"));
    }

    // Test IDs: TDAT-004
    #[test]
    fn from_path_reports_missing_files_with_the_path() {
        let path = Path::new("/nonexistent/visacheck/requirements.json");
        let err = match RequirementDataset::from_path(path) {
            Ok(_) => panic!("missing file should not load"),
            Err(err) => err,
        };
        assert!(err.to_string().contains("/nonexistent/visacheck/requirements.json"));
    }

    // Test IDs: TDAT-005
    #[test]
    fn from_path_round_trips_a_file_on_disk() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or_default();
        let path = std::env::temp_dir().join(format!("visacheck-dataset-{nanos}.json"));
        if let Err(err) = fs::write(&path, r#"{"JP": {"TH": "30"}}"#) {
            panic!("failed to write dataset fixture {}: {err}", path.display());
        }

        let dataset = match RequirementDataset::from_path(&path) {
            Ok(dataset) => dataset,
            Err(err) => panic!("dataset file should load: {err}"),
        };
        assert_eq!(dataset.passports().collect::<Vec<_>>(), vec![code("JP")]);

        let _ = fs::remove_file(&path);
    }
}
