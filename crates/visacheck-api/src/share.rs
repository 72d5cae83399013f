//! Compact text encoding of a traveler group.
//!
//! Each traveler becomes a `Name:P1,P2;h1,h2` segment (passports after the
//! colon, holdings after the semicolon, both comma-joined); segments are
//! joined with `|`. The holdings part is omitted when the traveler has none,
//! and travelers without passports are not encoded at all.

use visacheck_core::{CountryCode, HoldingId, Traveler};

/// Encode a traveler group as a share code.
#[must_use]
pub fn encode_share(travelers: &[Traveler]) -> String {
    travelers
        .iter()
        .filter(|traveler| traveler.is_active())
        .map(|traveler| {
            let passports: Vec<&str> =
                traveler.passports.iter().map(CountryCode::as_str).collect();
            let mut segment = format!("{}:{}", traveler.name, passports.join(","));
            if !traveler.holdings.is_empty() {
                let holdings: Vec<&str> =
                    traveler.holdings.iter().map(HoldingId::as_str).collect();
                segment.push(';');
                segment.push_str(&holdings.join(","));
            }
            segment
        })
        .collect::<Vec<_>>()
        .join("|")
}

/// Decode a share code back into travelers.
///
/// Decoding is lenient: segments without a colon are skipped, passport
/// codes that fail validation are dropped, and unknown holding identifiers
/// are kept as-is since they simply resolve to no benefits. Travelers are
/// re-numbered from 1.
#[must_use]
pub fn decode_share(code: &str) -> Vec<Traveler> {
    let mut travelers = Vec::new();
    for segment in code.split('|') {
        let Some((name, rest)) = segment.split_once(':') else { continue };
        let (passports_raw, holdings_raw) = match rest.split_once(';') {
            Some((passports, holdings)) => (passports, Some(holdings)),
            None => (rest, None),
        };

        let mut traveler = Traveler::new((travelers.len() + 1).to_string(), name);
        traveler.passports =
            passports_raw.split(',').filter_map(|raw| raw.parse().ok()).collect();
        traveler.holdings = holdings_raw
            .map(|raw| {
                raw.split(',').filter(|id| !id.is_empty()).map(HoldingId::from).collect()
            })
            .unwrap_or_default();
        travelers.push(traveler);
    }
    travelers
}
