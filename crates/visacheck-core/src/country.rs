//! Country codes, regions, and the built-in country index.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a raw string is not a two-letter country code.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("invalid country code `{input}`: expected exactly two ASCII letters")]
pub struct CodeParseError {
    pub input: String,
}

/// ISO 3166-1 alpha-2 style country code, stored uppercase.
///
/// Codes compare bytewise, so `BTreeMap<CountryCode, _>` iterates in
/// alphabetical code order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Construction guarantees two ASCII uppercase letters.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl FromStr for CountryCode {
    type Err = CodeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let bytes = value.as_bytes();
        if bytes.len() == 2 && bytes.iter().all(u8::is_ascii_alphabetic) {
            Ok(Self([bytes[0].to_ascii_uppercase(), bytes[1].to_ascii_uppercase()]))
        } else {
            Err(CodeParseError { input: value.to_string() })
        }
    }
}

impl TryFrom<String> for CountryCode {
    type Error = CodeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Continental grouping used for filtering and suggestion variety.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Africa,
    Americas,
    Asia,
    Caribbean,
    Europe,
    MiddleEast,
    Oceania,
}

impl Region {
    pub const ALL: [Self; 7] = [
        Self::Africa,
        Self::Americas,
        Self::Asia,
        Self::Caribbean,
        Self::Europe,
        Self::MiddleEast,
        Self::Oceania,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Africa => "africa",
            Self::Americas => "americas",
            Self::Asia => "asia",
            Self::Caribbean => "caribbean",
            Self::Europe => "europe",
            Self::MiddleEast => "middle_east",
            Self::Oceania => "oceania",
        }
    }

    /// Human-readable label used by renderers and exports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::Americas => "Americas",
            Self::Asia => "Asia",
            Self::Caribbean => "Caribbean",
            Self::Europe => "Europe",
            Self::MiddleEast => "Middle East",
            Self::Oceania => "Oceania",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "africa" => Some(Self::Africa),
            "americas" => Some(Self::Americas),
            "asia" => Some(Self::Asia),
            "caribbean" => Some(Self::Caribbean),
            "europe" => Some(Self::Europe),
            "middle_east" => Some(Self::MiddleEast),
            "oceania" => Some(Self::Oceania),
            _ => None,
        }
    }
}

/// A country (or territory with its own entry rules) known to the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Country {
    pub code: CountryCode,
    pub name: String,
    pub region: Region,
}

impl Country {
    /// Flag emoji derived from the code's regional indicator symbols.
    #[must_use]
    pub fn flag(&self) -> String {
        self.code
            .as_str()
            .chars()
            .filter(char::is_ascii_uppercase)
            .filter_map(|ch| char::from_u32(0x1F1E6 + u32::from(ch) - u32::from('A')))
            .collect()
    }
}

/// Lookup table over the known countries, keyed by code.
#[derive(Debug, Clone, Default)]
pub struct CountryIndex {
    countries: BTreeMap<CountryCode, Country>,
}

impl CountryIndex {
    /// Index over the built-in country table.
    #[must_use]
    pub fn builtin() -> Self {
        let countries = COUNTRY_TABLE
            .iter()
            .filter_map(|&(code, name, region)| {
                let code = code.parse::<CountryCode>().ok()?;
                Some((code, Country { code, name: name.to_string(), region }))
            })
            .collect();
        Self { countries }
    }

    #[must_use]
    pub fn get(&self, code: CountryCode) -> Option<&Country> {
        self.countries.get(&code)
    }

    #[must_use]
    pub fn contains(&self, code: CountryCode) -> bool {
        self.countries.contains_key(&code)
    }

    /// Display name for a code, falling back to the raw code when unknown.
    #[must_use]
    pub fn display_name(&self, code: CountryCode) -> String {
        self.get(code).map_or_else(|| code.as_str().to_string(), |country| country.name.clone())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.countries.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

#[rustfmt::skip]
const COUNTRY_TABLE: &[(&str, &str, Region)] = {
    use Region::{Africa, Americas, Asia, Caribbean, Europe, MiddleEast, Oceania};
    &[
        // Europe
        ("AD", "Andorra", Europe),
        ("AL", "Albania", Europe),
        ("AT", "Austria", Europe),
        ("BA", "Bosnia and Herzegovina", Europe),
        ("BE", "Belgium", Europe),
        ("BG", "Bulgaria", Europe),
        ("BY", "Belarus", Europe),
        ("CH", "Switzerland", Europe),
        ("CY", "Cyprus", Europe),
        ("CZ", "Czechia", Europe),
        ("DE", "Germany", Europe),
        ("DK", "Denmark", Europe),
        ("EE", "Estonia", Europe),
        ("ES", "Spain", Europe),
        ("FI", "Finland", Europe),
        ("FR", "France", Europe),
        ("GB", "United Kingdom", Europe),
        ("GI", "Gibraltar", Europe),
        ("GR", "Greece", Europe),
        ("HR", "Croatia", Europe),
        ("HU", "Hungary", Europe),
        ("IE", "Ireland", Europe),
        ("IS", "Iceland", Europe),
        ("IT", "Italy", Europe),
        ("LI", "Liechtenstein", Europe),
        ("LT", "Lithuania", Europe),
        ("LU", "Luxembourg", Europe),
        ("LV", "Latvia", Europe),
        ("MC", "Monaco", Europe),
        ("MD", "Moldova", Europe),
        ("ME", "Montenegro", Europe),
        ("MK", "North Macedonia", Europe),
        ("MT", "Malta", Europe),
        ("NL", "Netherlands", Europe),
        ("NO", "Norway", Europe),
        ("PL", "Poland", Europe),
        ("PT", "Portugal", Europe),
        ("RO", "Romania", Europe),
        ("RS", "Serbia", Europe),
        ("RU", "Russia", Europe),
        ("SE", "Sweden", Europe),
        ("SI", "Slovenia", Europe),
        ("SK", "Slovakia", Europe),
        ("SM", "San Marino", Europe),
        ("UA", "Ukraine", Europe),
        ("VA", "Vatican City", Europe),
        ("XK", "Kosovo", Europe),
        // Americas
        ("AR", "Argentina", Americas),
        ("BO", "Bolivia", Americas),
        ("BR", "Brazil", Americas),
        ("BZ", "Belize", Americas),
        ("CA", "Canada", Americas),
        ("CL", "Chile", Americas),
        ("CO", "Colombia", Americas),
        ("CR", "Costa Rica", Americas),
        ("EC", "Ecuador", Americas),
        ("GT", "Guatemala", Americas),
        ("GY", "Guyana", Americas),
        ("HN", "Honduras", Americas),
        ("MX", "Mexico", Americas),
        ("NI", "Nicaragua", Americas),
        ("PA", "Panama", Americas),
        ("PE", "Peru", Americas),
        ("PY", "Paraguay", Americas),
        ("SR", "Suriname", Americas),
        ("SV", "El Salvador", Americas),
        ("US", "United States", Americas),
        ("UY", "Uruguay", Americas),
        ("VE", "Venezuela", Americas),
        // Caribbean
        ("AG", "Antigua and Barbuda", Caribbean),
        ("AI", "Anguilla", Caribbean),
        ("AW", "Aruba", Caribbean),
        ("BB", "Barbados", Caribbean),
        ("BM", "Bermuda", Caribbean),
        ("BQ", "Caribbean Netherlands", Caribbean),
        ("BS", "Bahamas", Caribbean),
        ("CU", "Cuba", Caribbean),
        ("CW", "Curacao", Caribbean),
        ("DM", "Dominica", Caribbean),
        ("DO", "Dominican Republic", Caribbean),
        ("GD", "Grenada", Caribbean),
        ("HT", "Haiti", Caribbean),
        ("JM", "Jamaica", Caribbean),
        ("KN", "Saint Kitts and Nevis", Caribbean),
        ("KY", "Cayman Islands", Caribbean),
        ("LC", "Saint Lucia", Caribbean),
        ("PR", "Puerto Rico", Caribbean),
        ("SX", "Sint Maarten", Caribbean),
        ("TC", "Turks and Caicos Islands", Caribbean),
        ("TT", "Trinidad and Tobago", Caribbean),
        ("VC", "Saint Vincent and the Grenadines", Caribbean),
        ("VG", "British Virgin Islands", Caribbean),
        // Middle East
        ("AE", "United Arab Emirates", MiddleEast),
        ("BH", "Bahrain", MiddleEast),
        ("IL", "Israel", MiddleEast),
        ("IQ", "Iraq", MiddleEast),
        ("IR", "Iran", MiddleEast),
        ("JO", "Jordan", MiddleEast),
        ("KW", "Kuwait", MiddleEast),
        ("LB", "Lebanon", MiddleEast),
        ("OM", "Oman", MiddleEast),
        ("PS", "Palestine", MiddleEast),
        ("QA", "Qatar", MiddleEast),
        ("SA", "Saudi Arabia", MiddleEast),
        ("SY", "Syria", MiddleEast),
        ("TR", "Turkey", MiddleEast),
        ("YE", "Yemen", MiddleEast),
        // Africa
        ("AO", "Angola", Africa),
        ("BF", "Burkina Faso", Africa),
        ("BI", "Burundi", Africa),
        ("BJ", "Benin", Africa),
        ("BW", "Botswana", Africa),
        ("CD", "DR Congo", Africa),
        ("CG", "Congo", Africa),
        ("CI", "Cote d'Ivoire", Africa),
        ("CM", "Cameroon", Africa),
        ("CV", "Cabo Verde", Africa),
        ("DJ", "Djibouti", Africa),
        ("DZ", "Algeria", Africa),
        ("EG", "Egypt", Africa),
        ("ET", "Ethiopia", Africa),
        ("GA", "Gabon", Africa),
        ("GH", "Ghana", Africa),
        ("GM", "Gambia", Africa),
        ("GN", "Guinea", Africa),
        ("KE", "Kenya", Africa),
        ("LY", "Libya", Africa),
        ("MA", "Morocco", Africa),
        ("MG", "Madagascar", Africa),
        ("ML", "Mali", Africa),
        ("MR", "Mauritania", Africa),
        ("MU", "Mauritius", Africa),
        ("MW", "Malawi", Africa),
        ("MZ", "Mozambique", Africa),
        ("NA", "Namibia", Africa),
        ("NE", "Niger", Africa),
        ("NG", "Nigeria", Africa),
        ("RW", "Rwanda", Africa),
        ("SC", "Seychelles", Africa),
        ("SD", "Sudan", Africa),
        ("SL", "Sierra Leone", Africa),
        ("SN", "Senegal", Africa),
        ("SO", "Somalia", Africa),
        ("TD", "Chad", Africa),
        ("TG", "Togo", Africa),
        ("TN", "Tunisia", Africa),
        ("TZ", "Tanzania", Africa),
        ("UG", "Uganda", Africa),
        ("ZA", "South Africa", Africa),
        ("ZM", "Zambia", Africa),
        ("ZW", "Zimbabwe", Africa),
        // Asia
        ("AF", "Afghanistan", Asia),
        ("AM", "Armenia", Asia),
        ("AZ", "Azerbaijan", Asia),
        ("BD", "Bangladesh", Asia),
        ("BN", "Brunei", Asia),
        ("BT", "Bhutan", Asia),
        ("CN", "China", Asia),
        ("GE", "Georgia", Asia),
        ("HK", "Hong Kong", Asia),
        ("ID", "Indonesia", Asia),
        ("IN", "India", Asia),
        ("JP", "Japan", Asia),
        ("KG", "Kyrgyzstan", Asia),
        ("KH", "Cambodia", Asia),
        ("KP", "North Korea", Asia),
        ("KR", "South Korea", Asia),
        ("KZ", "Kazakhstan", Asia),
        ("LA", "Laos", Asia),
        ("LK", "Sri Lanka", Asia),
        ("MM", "Myanmar", Asia),
        ("MN", "Mongolia", Asia),
        ("MO", "Macao", Asia),
        ("MV", "Maldives", Asia),
        ("MY", "Malaysia", Asia),
        ("NP", "Nepal", Asia),
        ("PH", "Philippines", Asia),
        ("PK", "Pakistan", Asia),
        ("SG", "Singapore", Asia),
        ("TH", "Thailand", Asia),
        ("TJ", "Tajikistan", Asia),
        ("TM", "Turkmenistan", Asia),
        ("TW", "Taiwan", Asia),
        ("UZ", "Uzbekistan", Asia),
        ("VN", "Vietnam", Asia),
        // Oceania
        ("AU", "Australia", Oceania),
        ("FJ", "Fiji", Oceania),
        ("FM", "Micronesia", Oceania),
        ("KI", "Kiribati", Oceania),
        ("MH", "Marshall Islands", Oceania),
        ("NR", "Nauru", Oceania),
        ("NZ", "New Zealand", Oceania),
        ("PG", "Papua New Guinea", Oceania),
        ("PW", "Palau", Oceania),
        ("SB", "Solomon Islands", Oceania),
        ("TO", "Tonga", Oceania),
        ("TV", "Tuvalu", Oceania),
        ("VU", "Vanuatu", Oceania),
        ("WS", "Samoa", Oceania),
    ]
};
