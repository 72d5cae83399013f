use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

use jsonschema::JSONSchema;
use serde_json::Value;

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|err| panic!("clock should be >= UNIX_EPOCH: {err}"))
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{prefix}-{now}"));
    fs::create_dir_all(&dir)
        .unwrap_or_else(|err| panic!("failed to create temp dir {}: {err}", dir.display()));
    dir
}

fn write_dataset(dir: &Path) -> PathBuf {
    let dataset = serde_json::json!({
        "DE": { "DE": "-1", "TH": "30", "JP": "90", "TR": "visa free", "MX": "180", "KH": "e-visa" },
        "US": { "US": "-1", "TH": "30", "JP": "visa required", "TR": "visa required", "MX": "180", "KH": "visa on arrival" },
        "IN": { "TH": "visa on arrival", "JP": "visa required" }
    });
    let path = dir.join("requirements.json");
    let body = serde_json::to_string_pretty(&dataset)
        .unwrap_or_else(|err| panic!("failed to serialize fixture dataset: {err}"));
    fs::write(&path, body)
        .unwrap_or_else(|err| panic!("failed to write fixture dataset {}: {err}", path.display()));
    path
}

fn run_vck<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_vck"))
        .args(args)
        .output()
        .unwrap_or_else(|err| panic!("failed to execute vck binary: {err}"))
}

fn run_json<I, S>(args: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = run_vck(args);
    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "vck command failed (status={}):\nstdout:\n{}\nstderr:\n{}",
            output.status, stdout, stderr
        );
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    serde_json::from_str(&stdout)
        .unwrap_or_else(|err| panic!("stdout is not valid JSON: {err}\nstdout:\n{stdout}"))
}

fn as_i64(value: &Value, key: &str) -> i64 {
    value
        .get(key)
        .and_then(Value::as_i64)
        .unwrap_or_else(|| panic!("missing integer field `{key}` in payload: {value}"))
}

fn as_str<'a>(value: &'a Value, key: &str) -> &'a str {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_else(|| panic!("missing string field `{key}` in payload: {value}"))
}

fn as_array<'a>(value: &'a Value, key: &str) -> &'a Vec<Value> {
    value
        .get(key)
        .and_then(Value::as_array)
        .unwrap_or_else(|| panic!("missing array field `{key}` in payload: {value}"))
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap_or_else(|| panic!("path should be valid UTF-8: {}", path.display()))
}

fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .canonicalize()
        .unwrap_or_else(|err| panic!("failed to canonicalize repo root: {err}"))
}

fn read_json_file(path: &Path) -> Value {
    let body = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read JSON file {}: {err}", path.display()));
    serde_json::from_str(&body)
        .unwrap_or_else(|err| panic!("failed to parse JSON file {}: {err}", path.display()))
}

fn validate_schema(schema_file: &str, instance: &Value) {
    let schema_path = repo_root().join("contracts/v1/schemas").join(schema_file);
    let schema_json = read_json_file(&schema_path);
    let compiled = JSONSchema::compile(&schema_json)
        .unwrap_or_else(|err| panic!("failed to compile schema {}: {err}", schema_path.display()));

    let errors = compiled
        .validate(instance)
        .err()
        .map(|iter| iter.map(|err| err.to_string()).collect::<Vec<_>>());
    if let Some(errors) = errors {
        panic!("schema validation failed for {}:\n{}", schema_file, errors.join("\n"));
    }
}

fn assert_envelope(value: &Value) {
    assert_eq!(value.get("contract_version").and_then(Value::as_str), Some("cli.v1"));
    assert_eq!(value.get("api_contract_version").and_then(Value::as_str), Some("api.v1"));
}

fn find_destination<'a>(results: &'a [Value], code: &str) -> &'a Value {
    results
        .iter()
        .find(|entry| entry.get("destination").and_then(Value::as_str) == Some(code))
        .unwrap_or_else(|| panic!("destination `{code}` should be present in results"))
}

// Test IDs: TCLI-001
#[test]
fn destinations_resolves_passport_access_with_envelope() {
    let sandbox = unique_temp_dir("visacheck-cli-destinations");
    let dataset = write_dataset(&sandbox);

    let report = run_json(["--dataset", path_str(&dataset), "destinations", "--passport", "DE"]);
    assert_envelope(&report);
    validate_schema("destinations.response.schema.json", &report);

    let results = as_array(&report, "results");
    let codes: Vec<&str> = results.iter().map(|entry| as_str(entry, "destination")).collect();
    assert_eq!(codes, ["KH", "JP", "MX", "TH", "TR"]);

    let thailand = find_destination(results, "TH");
    assert_eq!(as_str(thailand, "name"), "Thailand");
    assert_eq!(as_str(thailand, "category"), "visa-free");
    assert_eq!(as_i64(thailand, "days"), 30);
    assert_eq!(as_str(thailand, "source"), "passport");

    let turkey = find_destination(results, "TR");
    assert_eq!(as_str(turkey, "category"), "visa-free");
    assert!(turkey.get("days").is_none());

    let summary = report
        .get("summary")
        .unwrap_or_else(|| panic!("report should include summary: {report}"));
    assert_eq!(as_i64(summary, "total"), 5);
    assert_eq!(as_i64(summary, "visa_free"), 4);
    assert_eq!(as_i64(summary, "easy_access"), 4);
    let longest = summary
        .get("longest_stay")
        .unwrap_or_else(|| panic!("summary should include longest_stay: {summary}"));
    assert_eq!(as_str(longest, "destination"), "MX");
    assert_eq!(as_i64(longest, "days"), 180);

    let counts = as_array(&report, "category_counts");
    assert_eq!(counts.len(), 2);
    assert_eq!(as_str(&counts[0], "category"), "visa-free");
    assert_eq!(as_i64(&counts[0], "count"), 4);
    assert_eq!(as_str(&counts[1], "category"), "e-visa");
    assert_eq!(as_i64(&counts[1], "count"), 1);
}

// Test IDs: TCLI-002
#[test]
fn destinations_applies_holding_benefits() {
    let sandbox = unique_temp_dir("visacheck-cli-benefits");
    let dataset = write_dataset(&sandbox);

    let report = run_json([
        "--dataset",
        path_str(&dataset),
        "destinations",
        "--passport",
        "US",
        "--holding",
        "us-visa",
    ]);
    validate_schema("destinations.response.schema.json", &report);

    let results = as_array(&report, "results");
    let turkey = find_destination(results, "TR");
    assert_eq!(as_str(turkey, "category"), "e-visa");
    assert_eq!(as_i64(turkey, "days"), 30);
    assert_eq!(as_str(turkey, "source"), "visa_benefit");
    assert_eq!(as_str(turkey, "holding"), "us-visa");
    assert_eq!(as_array(turkey, "conditions").len(), 2);

    // An equal-rank benefit never displaces the passport row.
    let mexico = find_destination(results, "MX");
    assert_eq!(as_str(mexico, "source"), "passport");
    assert_eq!(as_i64(mexico, "days"), 180);

    let benefit_counts = report
        .get("benefit_counts")
        .and_then(|counts| counts.get("1"))
        .unwrap_or_else(|| panic!("benefit_counts should cover traveler 1: {report}"));
    assert!(as_i64(benefit_counts, "us-visa") > 0);
}

// Test IDs: TCLI-003
#[test]
fn destinations_filters_sorts_and_pins_favorites() {
    let sandbox = unique_temp_dir("visacheck-cli-filters");
    let dataset = write_dataset(&sandbox);

    let report = run_json([
        "--dataset",
        path_str(&dataset),
        "destinations",
        "--passport",
        "DE",
        "--filter",
        "accessible",
        "--sort",
        "days",
        "--favorite",
        "MX",
    ]);
    let results = as_array(&report, "results");
    let codes: Vec<&str> = results.iter().map(|entry| as_str(entry, "destination")).collect();
    assert_eq!(codes, ["MX", "JP", "TH", "KH", "TR"]);

    // Narrowing results never changes the summary.
    let summary = report
        .get("summary")
        .unwrap_or_else(|| panic!("report should include summary: {report}"));
    assert_eq!(as_i64(summary, "total"), 5);

    let visa_free = run_json([
        "--dataset",
        path_str(&dataset),
        "destinations",
        "--passport",
        "DE",
        "--filter",
        "visa-free",
    ]);
    let codes: Vec<&str> = as_array(&visa_free, "results")
        .iter()
        .map(|entry| as_str(entry, "destination"))
        .collect();
    assert_eq!(codes, ["JP", "MX", "TH", "TR"]);
}

// Test IDs: TCLI-004
#[test]
fn destinations_renders_csv_to_file() {
    let sandbox = unique_temp_dir("visacheck-cli-csv");
    let dataset = write_dataset(&sandbox);
    let out = sandbox.join("export.csv");

    let output = run_vck([
        "--dataset",
        path_str(&dataset),
        "destinations",
        "--passport",
        "DE",
        "--format",
        "csv",
        "--out",
        path_str(&out),
    ]);
    assert!(output.status.success(), "csv export should succeed: {output:?}");

    let body = fs::read_to_string(&out)
        .unwrap_or_else(|err| panic!("failed to read csv export {}: {err}", out.display()));
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines[0], "# VisaCheck Export");
    assert_eq!(lines[1], "# Passports: Germany");
    assert!(lines[2].starts_with("# Date: "));
    assert_eq!(lines[3], "# Total destinations: 5");
    assert_eq!(lines[4], "Country,Code,Visa Category,Days Allowed,Region,Source");
    assert!(lines.contains(&"Thailand,TH,Visa Free,30,Asia,Passport"));
    assert!(lines.contains(&"Turkey,TR,Visa Free,,Middle East,Passport"));
}

// Test IDs: TCLI-005
#[test]
fn destinations_renders_text_and_table() {
    let sandbox = unique_temp_dir("visacheck-cli-render");
    let dataset = write_dataset(&sandbox);

    let text = run_vck([
        "--dataset",
        path_str(&dataset),
        "destinations",
        "--passport",
        "DE",
        "--format",
        "text",
    ]);
    assert!(text.status.success());
    let text = String::from_utf8_lossy(&text.stdout).to_string();
    assert!(text.starts_with("VisaCheck Results\n=================\n"));
    assert!(text.contains("Passports: Germany"));
    assert!(text.contains("Total: 5 destinations"));
    assert!(text.contains("Visa Free (4)\n-------------\n"));
    assert!(text.contains("  Japan (JP) - 90 days"));
    assert!(text.contains("  Turkey (TR)\n"));
    assert!(text.contains("E-Visa (1)"));
    assert!(text.contains("  Cambodia (KH)"));

    let table = run_vck([
        "--dataset",
        path_str(&dataset),
        "destinations",
        "--passport",
        "DE",
        "--format",
        "table",
    ]);
    assert!(table.status.success());
    let table = String::from_utf8_lossy(&table.stdout).to_string();
    assert!(table.starts_with("COUNTRY"));
    assert!(table.contains("Japan"));
    assert!(table.contains("5 destinations | 4 visa-free | 4 easy access"));
}

// Test IDs: TCLI-006
#[test]
fn compare_reports_relative_passport_strength() {
    let sandbox = unique_temp_dir("visacheck-cli-compare");
    let dataset = write_dataset(&sandbox);

    let report = run_json(["--dataset", path_str(&dataset), "compare", "DE", "US"]);
    assert_envelope(&report);
    validate_schema("compare.response.schema.json", &report);

    assert_eq!(as_str(&report, "first"), "DE");
    assert_eq!(as_str(&report, "first_name"), "Germany");
    assert_eq!(as_str(&report, "second"), "US");
    assert_eq!(as_str(&report, "second_name"), "United States");

    let comparison = report
        .get("comparison")
        .unwrap_or_else(|| panic!("report should include comparison: {report}"));
    assert_eq!(as_i64(comparison, "same"), 2);
    assert_eq!(as_i64(comparison, "first_better"), 3);
    assert_eq!(as_i64(comparison, "second_better"), 0);

    let rows = as_array(comparison, "rows");
    let codes: Vec<&str> = rows.iter().map(|row| as_str(row, "destination")).collect();
    assert_eq!(codes, ["KH", "JP", "TR"]);
}

// Test IDs: TCLI-007
#[test]
fn suggest_surfaces_easy_destinations() {
    let sandbox = unique_temp_dir("visacheck-cli-suggest");
    let dataset = write_dataset(&sandbox);

    let report = run_json(["--dataset", path_str(&dataset), "suggest", "--passport", "DE"]);
    assert_envelope(&report);
    validate_schema("suggest.response.schema.json", &report);

    let longest = as_array(&report, "longest_stays");
    assert_eq!(longest.len(), 3);
    assert_eq!(as_str(&longest[0], "destination"), "MX");
    assert_eq!(as_i64(&longest[0], "days"), 180);

    let picks = as_array(&report, "popular_picks");
    let codes: Vec<&str> = picks.iter().map(|entry| as_str(entry, "destination")).collect();
    assert_eq!(codes, ["TH", "JP", "TR", "MX"]);

    assert_eq!(as_array(&report, "hidden_gems").len(), 4);
}

// Test IDs: TCLI-008
#[test]
fn holdings_and_countries_list_builtin_catalogs() {
    let holdings = run_json(["holdings"]);
    assert_envelope(&holdings);
    validate_schema("holdings.response.schema.json", &holdings);
    assert_eq!(as_i64(&holdings, "total"), 13);
    let us_visa = as_array(&holdings, "holding_types")
        .iter()
        .find(|row| row.get("id").and_then(Value::as_str) == Some("us-visa"))
        .unwrap_or_else(|| panic!("holding type us-visa should be listed: {holdings}"));
    assert_eq!(as_str(us_visa, "kind"), "visa");
    assert_eq!(as_i64(us_visa, "rule_count"), 22);

    let residences = run_json(["holdings", "--kind", "residence"]);
    for row in as_array(&residences, "holding_types") {
        assert_eq!(as_str(row, "kind"), "residence");
    }

    let countries = run_json(["countries"]);
    assert_envelope(&countries);
    validate_schema("countries.response.schema.json", &countries);
    assert!(as_i64(&countries, "total") > 190);

    let europe = run_json(["countries", "--region", "europe"]);
    let rows = as_array(&europe, "countries");
    assert!(rows.iter().all(|row| row.get("region").and_then(Value::as_str) == Some("europe")));
    assert!(rows.iter().any(|row| row.get("code").and_then(Value::as_str) == Some("DE")));
}

// Test IDs: TCLI-009
#[test]
fn share_codes_round_trip_traveler_groups() {
    let encoded = run_json([
        "share",
        "encode",
        "--traveler",
        "Alice:DE,US;us-visa",
        "--traveler",
        "Bob:IN",
    ]);
    assert_envelope(&encoded);
    validate_schema("share-encode.response.schema.json", &encoded);
    assert_eq!(as_str(&encoded, "share_code"), "Alice:DE,US;us-visa|Bob:IN");
    assert_eq!(as_i64(&encoded, "travelers"), 2);

    let decoded = run_json(["share", "decode", "Alice:DE,US;us-visa|Bob:IN"]);
    assert_envelope(&decoded);
    validate_schema("share-decode.response.schema.json", &decoded);
    assert_eq!(as_i64(&decoded, "total"), 2);

    let travelers = as_array(&decoded, "travelers");
    assert_eq!(as_str(&travelers[0], "id"), "1");
    assert_eq!(as_str(&travelers[0], "name"), "Alice");
    let passports = as_array(&travelers[0], "passports");
    assert_eq!(passports.len(), 2);
    assert_eq!(passports[0], Value::String("DE".to_string()));
    let holdings = as_array(&travelers[0], "holdings");
    assert_eq!(holdings[0], Value::String("us-visa".to_string()));
    assert_eq!(as_str(&travelers[1], "id"), "2");
    assert_eq!(as_str(&travelers[1], "name"), "Bob");
}

// Test IDs: TCLI-010
#[test]
fn invalid_inputs_fail_with_clear_errors() {
    let sandbox = unique_temp_dir("visacheck-cli-errors");
    let dataset = write_dataset(&sandbox);

    let missing = run_vck([
        "--dataset",
        "/nonexistent/requirements.json",
        "destinations",
        "--passport",
        "DE",
    ]);
    assert!(!missing.status.success());
    let stderr = String::from_utf8_lossy(&missing.stderr).to_string();
    assert!(stderr.contains("failed to load requirement dataset"), "stderr: {stderr}");

    let bad_code =
        run_vck(["--dataset", path_str(&dataset), "destinations", "--passport", "XYZ"]);
    assert!(!bad_code.status.success());
    let stderr = String::from_utf8_lossy(&bad_code.stderr).to_string();
    assert!(stderr.contains("invalid country code"), "stderr: {stderr}");

    let no_travelers = run_vck(["--dataset", path_str(&dataset), "destinations"]);
    assert!(!no_travelers.status.success());
    let stderr = String::from_utf8_lossy(&no_travelers.stderr).to_string();
    assert!(stderr.contains("provide at least one"), "stderr: {stderr}");

    let bad_filter = run_vck([
        "--dataset",
        path_str(&dataset),
        "destinations",
        "--passport",
        "DE",
        "--filter",
        "nonsense",
    ]);
    assert!(!bad_filter.status.success());
    let stderr = String::from_utf8_lossy(&bad_filter.stderr).to_string();
    assert!(stderr.contains("unknown filter"), "stderr: {stderr}");
}
