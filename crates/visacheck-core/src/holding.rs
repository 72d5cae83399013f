//! Visa and residence holdings and the benefit rules they unlock.
//!
//! The built-in catalog ports the curated benefits table: thirteen holding
//! types, each mapping to the destinations a holder can enter beyond what
//! their passport alone allows. Only high and medium confidence rules are
//! included.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::{BenefitAccessType, ConfidenceLevel};
use crate::country::CountryCode;

/// Identifier of a holding type, e.g. `us-green-card`.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct HoldingId(pub String);

impl HoldingId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HoldingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HoldingId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Broad class of a holding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HoldingKind {
    Residence,
    Visa,
    Special,
}

impl HoldingKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Residence => "residence",
            Self::Visa => "visa",
            Self::Special => "special",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Residence => "Residence",
            Self::Visa => "Visa",
            Self::Special => "Special Permit",
        }
    }
}

/// A recognized visa or residence holding.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct VisaHoldingType {
    pub id: HoldingId,
    pub name: String,
    pub short_name: String,
    pub kind: HoldingKind,
    /// Issuing country, or a scheme marker such as `EU` or `XX`.
    pub issuing: CountryCode,
    pub description: String,
}

/// One destination unlocked by a holding.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct BenefitRule {
    pub destination: CountryCode,
    pub access: BenefitAccessType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    pub conditions: Vec<String>,
    pub confidence: ConfidenceLevel,
}

/// Catalog of holding types and the benefit rules each unlocks.
///
/// Rule order within a holding is meaningful: the benefit resolver keeps
/// the first rule it sees per destination unless a later one is strictly
/// better.
#[derive(Debug, Clone, Default)]
pub struct HoldingCatalog {
    types: Vec<VisaHoldingType>,
    rules: BTreeMap<HoldingId, Vec<BenefitRule>>,
}

impl HoldingCatalog {
    /// Catalog with the built-in holding types and rule tables.
    #[must_use]
    pub fn builtin() -> Self {
        let rules = BTreeMap::from([
            (HoldingId::from("us-green-card"), expand_rows(US_GREEN_CARD_ROWS)),
            (HoldingId::from("us-visa"), expand_rows(US_VISA_ROWS)),
            (
                HoldingId::from("schengen-visa"),
                with_schengen_area(
                    &["Within 90/180-day rule", "Must have valid Schengen visa"],
                    SCHENGEN_VISA_ROWS,
                ),
            ),
            (
                HoldingId::from("schengen-residence"),
                with_schengen_area(
                    &["Valid EU/Schengen residence permit"],
                    SCHENGEN_RESIDENCE_ROWS,
                ),
            ),
            (HoldingId::from("uk-visa"), expand_rows(UK_VISA_ROWS)),
            (HoldingId::from("ca-pr"), expand_rows(CA_PR_ROWS)),
            (HoldingId::from("ca-visa"), expand_rows(CA_VISA_ROWS)),
            (HoldingId::from("au-pr"), expand_rows(AU_PR_ROWS)),
            (HoldingId::from("uae-residence"), expand_rows(UAE_RESIDENCE_ROWS)),
            (HoldingId::from("jp-visa"), expand_rows(JP_VISA_ROWS)),
            (HoldingId::from("gcc-residence"), expand_rows(GCC_RESIDENCE_ROWS)),
            (HoldingId::from("sg-visa"), expand_rows(SG_VISA_ROWS)),
            (HoldingId::from("apec-card"), expand_rows(APEC_CARD_ROWS)),
        ]);
        Self { types: builtin_types(), rules }
    }

    /// All holding types, in catalog order.
    #[must_use]
    pub fn types(&self) -> &[VisaHoldingType] {
        &self.types
    }

    #[must_use]
    pub fn get_type(&self, id: &HoldingId) -> Option<&VisaHoldingType> {
        self.types.iter().find(|holding| &holding.id == id)
    }

    /// Benefit rules for a holding; unknown ids yield an empty slice.
    #[must_use]
    pub fn rules(&self, id: &HoldingId) -> &[BenefitRule] {
        self.rules.get(id).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Schengen member states as of 2025, including Bulgaria and Romania.
pub const SCHENGEN_STATES: [&str; 29] = [
    "AT", "BE", "BG", "HR", "CZ", "DK", "EE", "FI", "FR", "DE", "GR", "HU", "IS", "IT", "LV",
    "LT", "LU", "MT", "NL", "NO", "PL", "PT", "RO", "SK", "SI", "ES", "SE", "CH", "LI",
];

fn builtin_types() -> Vec<VisaHoldingType> {
    TYPE_TABLE
        .iter()
        .filter_map(|&(id, name, short_name, kind, issuing, description)| {
            Some(VisaHoldingType {
                id: HoldingId::from(id),
                name: name.to_string(),
                short_name: short_name.to_string(),
                kind,
                issuing: issuing.parse().ok()?,
                description: description.to_string(),
            })
        })
        .collect()
}

fn expand_rows(rows: &[RuleRow]) -> Vec<BenefitRule> {
    rows.iter()
        .filter_map(|&(destination, access, days, conditions, confidence)| {
            Some(BenefitRule {
                destination: destination.parse().ok()?,
                access,
                days,
                conditions: conditions.iter().map(|condition| (*condition).to_string()).collect(),
                confidence,
            })
        })
        .collect()
}

/// Visa-free access to every Schengen state, followed by the holding's
/// third-country rows.
fn with_schengen_area(conditions: &[&str], extra: &[RuleRow]) -> Vec<BenefitRule> {
    let mut rows: Vec<BenefitRule> = SCHENGEN_STATES
        .iter()
        .filter_map(|raw| {
            Some(BenefitRule {
                destination: raw.parse().ok()?,
                access: BenefitAccessType::VisaFree,
                days: Some(90),
                conditions: conditions.iter().map(|condition| (*condition).to_string()).collect(),
                confidence: ConfidenceLevel::High,
            })
        })
        .collect();
    rows.extend(expand_rows(extra));
    rows
}

type TypeRow = (&'static str, &'static str, &'static str, HoldingKind, &'static str, &'static str);

const TYPE_TABLE: &[TypeRow] = &[
    (
        "us-green-card",
        "US Permanent Residency (Green Card)",
        "US Green Card",
        HoldingKind::Residence,
        "US",
        "US Lawful Permanent Resident card",
    ),
    (
        "us-visa",
        "Valid US Visa (B1/B2, F1, H1B, etc.)",
        "US Visa",
        HoldingKind::Visa,
        "US",
        "Any valid, unexpired US visa stamp",
    ),
    (
        "schengen-visa",
        "Schengen Visa",
        "Schengen Visa",
        HoldingKind::Visa,
        "EU",
        "Valid Schengen area short-stay visa (type C)",
    ),
    (
        "schengen-residence",
        "Schengen/EU Residence Permit",
        "EU Residence",
        HoldingKind::Residence,
        "EU",
        "Residence permit from any Schengen/EU member state",
    ),
    (
        "uk-visa",
        "Valid UK Visa / BRP",
        "UK Visa",
        HoldingKind::Visa,
        "GB",
        "Valid UK visa or Biometric Residence Permit",
    ),
    (
        "ca-pr",
        "Canadian Permanent Residency",
        "Canada PR",
        HoldingKind::Residence,
        "CA",
        "Canadian Permanent Resident card",
    ),
    (
        "ca-visa",
        "Valid Canadian Visa",
        "Canada Visa",
        HoldingKind::Visa,
        "CA",
        "Valid Canadian temporary resident visa",
    ),
    (
        "au-pr",
        "Australian Permanent Residency",
        "Australia PR",
        HoldingKind::Residence,
        "AU",
        "Australian Permanent Resident visa",
    ),
    (
        "uae-residence",
        "UAE Residence Visa",
        "UAE Residence",
        HoldingKind::Residence,
        "AE",
        "UAE residence visa/permit",
    ),
    (
        "jp-visa",
        "Valid Japanese Visa",
        "Japan Visa",
        HoldingKind::Visa,
        "JP",
        "Valid Japanese visa or residence card",
    ),
    (
        "gcc-residence",
        "GCC Residency (Saudi/Qatar/Oman/Bahrain/Kuwait)",
        "GCC Residence",
        HoldingKind::Residence,
        "SA",
        "Residence permit from any GCC member state",
    ),
    (
        "sg-visa",
        "Singapore Work/Residence Permit",
        "Singapore Permit",
        HoldingKind::Visa,
        "SG",
        "Singapore Employment Pass, S Pass, or PR",
    ),
    (
        "apec-card",
        "APEC Business Travel Card",
        "APEC Card",
        HoldingKind::Special,
        "XX",
        "APEC Business Travel Card (ABTC) for expedited border crossing",
    ),
];

type RuleRow =
    (&'static str, BenefitAccessType, Option<u32>, &'static [&'static str], ConfidenceLevel);

use crate::category::BenefitAccessType::{EVisaSimplified, TransitFree, VisaFree, VisaOnArrival};
use crate::category::ConfidenceLevel::{High, Medium};

const US_GREEN_CARD_ROWS: &[RuleRow] = &[
    ("MX", VisaFree, Some(180), &["Must obtain FMM tourist card on arrival", "Valid passport required"], High),
    ("CA", VisaFree, Some(180), &["Must hold valid passport", "May be admitted for up to 6 months at officer discretion"], High),
    ("CR", VisaFree, Some(30), &["Green card must be valid", "Extensions possible at Office of Migration"], High),
    ("PA", VisaFree, Some(30), &["Valid US residency document required"], High),
    ("BS", VisaFree, Some(30), &["Valid passport and green card required"], High),
    ("BZ", VisaFree, Some(30), &["Valid passport required"], Medium),
    ("BM", VisaFree, Some(90), &["Valid passport required"], Medium),
    ("DO", VisaFree, Some(30), &["Tourist card may be required on arrival"], Medium),
    ("SV", VisaFree, Some(90), &["Valid passport and green card"], Medium),
    ("GT", VisaFree, Some(90), &["CA-4 agreement country", "90 days shared with Honduras, El Salvador, Nicaragua"], Medium),
    ("HN", VisaFree, Some(90), &["CA-4 agreement country", "90 days shared with Guatemala, El Salvador, Nicaragua"], Medium),
    ("NI", VisaFree, Some(90), &["CA-4 agreement country"], Medium),
    ("JM", VisaFree, Some(30), &["Valid passport and return ticket required"], Medium),
    ("AG", VisaFree, Some(30), &["Valid passport required"], Medium),
    ("AI", VisaFree, Some(90), &["British Overseas Territory"], Medium),
    ("KY", VisaFree, Some(30), &["Valid passport required"], Medium),
    ("TC", VisaFree, Some(90), &["Valid passport required"], Medium),
    ("CW", VisaFree, Some(30), &["Valid green card required"], Medium),
    ("BQ", VisaFree, Some(30), &["Dutch Caribbean territory"], Medium),
    ("SX", VisaFree, Some(30), &["Dutch side of the island"], Medium),
    ("GE", VisaFree, Some(90), &["Valid green card must be presented"], High),
    ("AL", VisaFree, Some(90), &["Must have multiple-entry green card (standard green cards qualify)"], High),
    ("BA", VisaFree, Some(30), &["Valid green card required"], Medium),
    ("ME", VisaFree, Some(30), &["Valid green card required"], Medium),
    ("RS", VisaFree, Some(90), &["Valid green card required"], Medium),
    ("TR", EVisaSimplified, Some(30), &["E-visa available online", "Green card holders can apply for simplified e-visa"], High),
    ("MA", VisaFree, Some(90), &["Valid passport required"], Medium),
    ("KR", VisaFree, Some(30), &["K-ETA may be required", "Check current requirements"], Medium),
    ("TW", VisaFree, Some(30), &["Travel Authorization Certificate may be required for some nationalities"], Medium),
    ("SG", VisaFree, Some(30), &["Valid green card and passport required"], Medium),
    ("MY", VisaFree, Some(30), &["Valid green card and passport required"], Medium),
    ("PH", VisaFree, Some(30), &["Valid green card and passport required"], Medium),
    ("AM", VisaFree, Some(180), &["Valid passport required"], Medium),
    ("BH", VisaOnArrival, Some(14), &["Visa on arrival available for US green card holders"], Medium),
    ("QA", VisaOnArrival, Some(30), &["Valid green card required"], Medium),
    ("OM", VisaOnArrival, Some(14), &["E-visa or visa on arrival available"], Medium),
    ("AE", VisaFree, Some(30), &["Valid passport required"], Medium),
    ("CL", VisaFree, Some(90), &["Valid passport required"], Medium),
];

const US_VISA_ROWS: &[RuleRow] = &[
    ("MX", VisaFree, Some(180), &["All valid used/unused multiple-entry US visas accepted", "FMM tourist card required"], High),
    ("CA", VisaFree, Some(180), &["Valid used/unused multiple-entry non-immigrant US visas only: B1, B2, B1/B2, F, M, J, H, L types", "Must also hold valid passport"], High),
    ("PA", VisaFree, Some(30), &["Must have valid US visa with at least 2 prior entries to US"], High),
    ("CR", VisaFree, Some(30), &["Must have valid multiple-entry US visa"], High),
    ("AL", VisaFree, Some(90), &["Must have valid multiple-entry US visa that has been used at least once prior to arrival"], High),
    ("GE", VisaFree, Some(90), &["Valid US visa required"], High),
    ("TR", EVisaSimplified, Some(30), &["E-visa available online for holders of valid US visa", "Some nationalities may need sticker visa"], High),
    ("CO", VisaFree, Some(90), &["Valid US visa required", "Some nationalities eligible"], Medium),
    ("GT", VisaFree, Some(90), &["CA-4 agreement", "Valid US visa required"], Medium),
    ("HN", VisaFree, Some(90), &["CA-4 agreement", "Valid US visa required"], Medium),
    ("SV", VisaFree, Some(90), &["CA-4 agreement", "Valid US visa required"], Medium),
    ("NI", VisaFree, Some(90), &["CA-4 agreement", "Valid US visa required"], Medium),
    ("DO", VisaFree, Some(30), &["Tourist card fee may apply", "Valid US visa required"], Medium),
    ("AW", VisaFree, Some(30), &["Valid US visa required", "ED card application needed"], Medium),
    ("BS", VisaFree, Some(30), &["Valid US visa required"], Medium),
    ("BM", VisaFree, Some(21), &["Valid US visa required"], Medium),
    ("BA", VisaFree, Some(30), &["Valid multiple-entry US visa required"], Medium),
    ("ME", VisaFree, Some(30), &["Valid US visa required"], Medium),
    ("RS", VisaFree, Some(90), &["Valid US visa required"], Medium),
    ("MK", VisaFree, Some(15), &["Valid multiple-entry US visa required"], Medium),
    ("AE", VisaFree, Some(14), &["Valid US visa required", "Some nationality restrictions apply"], Medium),
    ("SG", TransitFree, Some(4), &["96-hour Visa Free Transit Facility", "Must be transiting to/from a third country by air with valid US visa", "Available to Chinese and Indian nationals"], High),
];

const SCHENGEN_VISA_ROWS: &[RuleRow] = &[
    ("AL", VisaFree, Some(90), &["Must have multiple-entry Schengen visa", "Must have used the visa at least once in a Schengen country before arrival", "90 days within 180-day period"], High),
    ("BA", VisaFree, Some(30), &["Valid multiple-entry Schengen visa required"], High),
    ("ME", VisaFree, Some(30), &["Valid Schengen visa required"], High),
    ("MK", VisaFree, Some(15), &["Valid Schengen visa required"], High),
    ("RS", VisaFree, Some(90), &["Valid Schengen visa required", "90 days within 6-month period"], High),
    ("XK", VisaFree, Some(15), &["Valid Schengen visa required"], Medium),
    ("GE", VisaFree, Some(90), &["Valid Schengen visa or residence permit required"], High),
    ("TR", EVisaSimplified, Some(30), &["E-visa required, available online", "Valid Schengen visa simplifies e-visa process", "Some nationalities only"], High),
    ("CO", VisaFree, Some(90), &["Valid Schengen visa must have at least 180 days validity on arrival", "No prior Schengen entry required"], High),
    ("PA", VisaFree, Some(30), &["Valid Schengen visa required"], Medium),
    ("CR", VisaFree, Some(30), &["Valid multiple-entry Schengen visa required"], Medium),
    ("DO", VisaFree, Some(30), &["Valid Schengen visa required"], Medium),
    ("RO", VisaFree, Some(90), &["Now part of Schengen as of Jan 2025", "Schengen visa valid for entry"], High),
    ("BG", VisaFree, Some(90), &["Now part of Schengen as of Jan 2025", "Schengen visa valid for entry"], High),
    ("CY", VisaFree, Some(90), &["EU member but NOT in Schengen", "Accepts Schengen visa for entry", "Days do NOT count against Schengen 90/180 limit"], Medium),
    ("AM", VisaFree, Some(180), &["Valid Schengen visa accepted"], Medium),
];

const SCHENGEN_RESIDENCE_ROWS: &[RuleRow] = &[
    ("AL", VisaFree, Some(90), &["Valid Schengen residence permit required"], High),
    ("BA", VisaFree, Some(30), &["Valid Schengen residence permit required"], High),
    ("ME", VisaFree, Some(30), &["Valid Schengen residence permit required"], High),
    ("RS", VisaFree, Some(90), &["Valid Schengen residence permit required"], High),
    ("MK", VisaFree, Some(15), &["Valid Schengen residence permit required"], High),
    ("GE", VisaFree, Some(90), &["Valid Schengen residence permit required"], High),
    ("CO", VisaFree, Some(90), &["Accepts both temporary and permanent Schengen residence permits"], High),
    ("MX", VisaFree, Some(180), &["IMPORTANT: As of 2025, Mexico only accepts PERMANENT residence permits", "Temporary residence permit holders may be denied boarding or deported"], High),
    ("TR", EVisaSimplified, Some(30), &["E-visa available online with valid Schengen residence permit"], High),
    ("PA", VisaFree, Some(30), &["Valid Schengen residence permit required"], Medium),
    ("CR", VisaFree, Some(30), &["Valid Schengen residence permit required"], Medium),
    ("CY", VisaFree, Some(90), &["EU member, not in Schengen", "Accepts Schengen residence permits"], Medium),
    ("AM", VisaFree, Some(180), &["Valid Schengen residence permit accepted"], Medium),
    ("IE", VisaFree, Some(90), &["Short Stay Visa Waiver for certain nationalities with EU residence"], Medium),
];

const UK_VISA_ROWS: &[RuleRow] = &[
    ("AL", VisaFree, Some(90), &["Must have used UK visa once in issuing country before arrival"], High),
    ("GE", VisaFree, Some(90), &["90 days within 180-day period", "Valid UK residence permit required"], High),
    ("GI", VisaFree, Some(21), &["Tourism only", "No work permitted"], High),
    ("ME", VisaFree, Some(90), &["Valid UK BRP/eVisa required"], High),
    ("RS", VisaFree, Some(90), &["Valid UK BRP/eVisa required"], High),
    ("MK", VisaFree, Some(15), &["Valid UK BRP/eVisa required"], Medium),
    ("MX", VisaFree, Some(180), &["FMM form required", "One of the longest visa-free stays available"], High),
    ("PA", VisaFree, Some(90), &["Valid UK BRP/eVisa required"], Medium),
    ("BB", VisaFree, Some(180), &["Tourism only"], Medium),
    ("AI", VisaFree, Some(90), &["Tourism/business", "Return ticket may be required"], Medium),
    ("AG", VisaFree, Some(30), &["Tourism only", "Proof of accommodation required"], Medium),
    ("AW", VisaFree, Some(30), &["Tourism only", "ED card application required"], Medium),
    ("BS", VisaFree, Some(90), &["Tourism/business", "Return ticket required"], Medium),
    ("BM", VisaFree, Some(90), &["Tourism/business", "TA form required"], Medium),
    ("JM", VisaFree, Some(90), &["Tourism only", "Return ticket required"], Medium),
    ("AM", VisaFree, Some(90), &["Passport nationality must not separately require visa for Armenia"], Medium),
    ("TR", EVisaSimplified, Some(30), &["E-visa required", "Most popular BRP destination", "Apply online"], High),
    ("BH", EVisaSimplified, Some(14), &["E-visa required", "Apply online before travel"], Medium),
    ("AE", VisaFree, Some(30), &["Some nationalities excluded"], Medium),
    ("IE", VisaFree, None, &["British-Irish Visa Scheme (BIVS) - select nationalities"], Medium),
];

const CA_PR_ROWS: &[RuleRow] = &[
    ("MX", VisaFree, Some(180), &["FMM tourist card required", "Valid Canadian PR card and passport"], High),
    ("CR", VisaFree, Some(30), &["Valid Canadian PR card required"], High),
    ("PA", VisaFree, Some(30), &["Valid Canadian PR card required"], Medium),
    ("BS", VisaFree, Some(30), &["Valid passport and PR card"], Medium),
    ("AW", VisaFree, Some(90), &["Dutch Caribbean territory"], Medium),
    ("CW", VisaFree, Some(90), &["Dutch Caribbean territory"], Medium),
    ("BQ", VisaFree, Some(90), &["Dutch Caribbean territory"], Medium),
    ("SX", VisaFree, Some(90), &["Dutch Caribbean territory"], Medium),
    ("AI", VisaFree, Some(90), &["Valid passport and PR card"], Medium),
    ("AG", VisaFree, Some(30), &["Valid passport and PR card"], Medium),
    ("BZ", VisaFree, Some(30), &["Valid passport and PR card"], Medium),
    ("BM", VisaFree, Some(30), &["Valid passport and PR card"], Medium),
    ("KY", VisaFree, Some(30), &["Valid passport and PR card"], Medium),
    ("AM", VisaFree, Some(90), &["Valid passport and Canadian PR card"], Medium),
    ("GE", VisaFree, Some(90), &["Valid passport and Canadian PR card"], Medium),
    ("MD", VisaFree, Some(90), &["Valid Canadian PR card required"], Medium),
];

const CA_VISA_ROWS: &[RuleRow] = &[
    ("MX", VisaFree, Some(180), &["Valid Canadian visa"], Medium),
    ("CR", VisaFree, Some(30), &["Valid Canadian visa"], Medium),
    ("PA", VisaFree, Some(30), &["Valid Canadian visa"], Medium),
    ("GE", VisaFree, Some(90), &["Valid Canadian visa"], Medium),
    ("GT", VisaFree, Some(90), &["Valid Canadian visa"], Medium),
    ("HN", VisaFree, Some(90), &["Valid Canadian visa"], Medium),
    ("SV", VisaFree, Some(90), &["Valid Canadian visa"], Medium),
    ("NI", VisaFree, Some(90), &["Valid Canadian visa"], Medium),
    ("AL", VisaFree, Some(90), &["Valid Canadian visa"], Medium),
    ("DO", VisaFree, Some(30), &["Valid Canadian visa"], Medium),
];

const AU_PR_ROWS: &[RuleRow] = &[
    ("NZ", VisaFree, Some(90), &["Australian PR holders traveling on Australian passport do not need visa or NZeTA", "Other passport holders with Australian PR need NZeTA"], High),
    ("SG", TransitFree, Some(4), &["96-hour Visa Free Transit Facility for certain nationalities (Chinese, Indian) holding valid Australian visa", "Must transit by air to/from third country"], High),
    ("AL", VisaFree, Some(90), &["Valid multiple-entry Australian visa that has been used at least once"], Medium),
    ("GE", VisaFree, Some(90), &["Valid Australian visa or residence permit required"], Medium),
    ("TR", EVisaSimplified, Some(30), &["E-visa available for holders of valid Australian visa"], Medium),
    ("MX", VisaFree, Some(180), &["Valid Australian PR accepted", "FMM tourist card required"], Medium),
];

const UAE_RESIDENCE_ROWS: &[RuleRow] = &[
    ("GE", VisaFree, Some(90), &["Must have multiple-entry UAE residence permit valid for at least 1 year on date of entry", "Stricter rules from May 2025"], High),
    ("OM", VisaFree, Some(14), &["UAE residents can enter visa-free for 14 days"], High),
    ("TR", VisaFree, Some(90), &["UAE residents enjoy visa-free access", "90 days within 180-day period"], High),
    ("AL", VisaFree, Some(90), &["Valid UAE residence permit required"], Medium),
    ("BA", VisaFree, Some(30), &["Valid UAE residence permit required"], Medium),
    ("RS", VisaFree, Some(30), &["Valid UAE residence permit required"], Medium),
    ("ME", VisaFree, Some(30), &["Valid UAE residence permit required"], Medium),
    ("AM", VisaFree, Some(90), &["Valid UAE residence permit and passport"], Medium),
    ("AZ", EVisaSimplified, Some(30), &["E-visa available for UAE residents"], Medium),
    ("BH", VisaFree, Some(14), &["GCC resident benefit", "Inter-GCC travel facilitated"], High),
    ("KW", VisaFree, Some(90), &["GCC resident benefit", "Some profession restrictions may apply"], Medium),
    ("QA", VisaFree, Some(30), &["GCC resident benefit"], Medium),
    ("SA", EVisaSimplified, Some(90), &["E-visa available for GCC residents"], Medium),
];

const JP_VISA_ROWS: &[RuleRow] = &[
    ("AL", VisaFree, Some(90), &["Valid multiple-entry Japan visa that has been used at least once"], Medium),
    ("GE", VisaFree, Some(90), &["Valid Japan visa or residence permit required"], Medium),
    ("TR", EVisaSimplified, Some(30), &["E-visa available for Japan visa holders"], Medium),
    ("SG", TransitFree, Some(4), &["96-hour VFTF for Chinese/Indian nationals with valid Japan visa, transiting by air"], High),
];

const GCC_RESIDENCE_ROWS: &[RuleRow] = &[
    ("GE", VisaFree, Some(365), &["Must have multiple-entry GCC residence permit valid for at least 1 year", "Stricter rules from May 2025 including new stay limits for certain nationalities"], High),
    ("TR", EVisaSimplified, Some(30), &["E-visa available online for GCC residents", "Simplified application"], High),
    ("AL", VisaFree, Some(90), &["Valid GCC residence permit required", "Must have been used"], Medium),
    ("BA", VisaFree, Some(30), &["Valid GCC residence permit required"], Medium),
    ("AE", VisaFree, Some(30), &["Inter-GCC travel", "GCC residents from other GCC states can enter"], High),
    ("BH", VisaFree, Some(14), &["Inter-GCC travel facilitated"], High),
    ("KW", VisaFree, Some(90), &["Inter-GCC travel", "GCC residents can enter with GCC ID card", "Some profession restrictions for Oman"], High),
    ("OM", VisaFree, Some(14), &["Approved professions list may apply", "Check current requirements"], Medium),
    ("QA", VisaFree, Some(30), &["Inter-GCC travel facilitated"], High),
    ("SA", EVisaSimplified, Some(90), &["E-visa available for GCC residents", "May have profession/salary requirements"], Medium),
    ("EG", VisaOnArrival, Some(30), &["Visa on arrival for GCC residents"], Medium),
];

const SG_VISA_ROWS: &[RuleRow] = &[
    ("KR", TransitFree, Some(30), &["Transit with Singapore work permit"], Medium),
    ("GE", VisaFree, Some(90), &["Singapore residence permit"], Medium),
    ("TR", EVisaSimplified, Some(30), &["Singapore permit enables e-Visa"], Medium),
];

const APEC_CARD_ROWS: &[RuleRow] = &[
    ("AU", VisaFree, Some(90), &["Pre-cleared ABTC holders", "Business purposes", "Fast-track immigration lanes"], High),
    ("BN", VisaFree, Some(90), &["Pre-cleared ABTC holders", "Business purposes"], High),
    ("CL", VisaFree, Some(90), &["Pre-cleared ABTC holders", "Business purposes"], High),
    ("CN", VisaFree, Some(60), &["Pre-cleared ABTC holders", "Business purposes"], High),
    ("HK", VisaFree, Some(60), &["Pre-cleared ABTC holders", "Business purposes"], High),
    ("ID", VisaFree, Some(60), &["Pre-cleared ABTC holders", "Business purposes"], High),
    ("JP", VisaFree, Some(90), &["Pre-cleared ABTC holders", "Business purposes", "Fast-track lanes at major airports"], High),
    ("KR", VisaFree, Some(90), &["Pre-cleared ABTC holders", "Business purposes"], High),
    ("MY", VisaFree, Some(60), &["Pre-cleared ABTC holders", "Business purposes"], High),
    ("MX", VisaFree, Some(90), &["Pre-cleared ABTC holders", "Business purposes"], High),
    ("NZ", VisaFree, Some(90), &["Pre-cleared ABTC holders", "Business purposes"], High),
    ("PG", VisaFree, Some(60), &["Pre-cleared ABTC holders", "Business purposes"], High),
    ("PE", VisaFree, Some(90), &["Pre-cleared ABTC holders", "Business purposes"], High),
    ("PH", VisaFree, Some(59), &["Pre-cleared ABTC holders", "Business purposes"], High),
    ("RU", VisaFree, Some(90), &["Pre-cleared ABTC holders", "NOTE: Participation may be affected by sanctions", "Verify current status"], Medium),
    ("SG", VisaFree, Some(60), &["Pre-cleared ABTC holders", "Business purposes"], High),
    ("TW", VisaFree, Some(90), &["Pre-cleared ABTC holders", "Business purposes"], High),
    ("TH", VisaFree, Some(90), &["Pre-cleared ABTC holders", "Business purposes"], High),
    ("VN", VisaFree, Some(60), &["Pre-cleared ABTC holders", "Business purposes"], High),
];
