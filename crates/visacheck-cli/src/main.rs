use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use visacheck_api::{
    decode_share, encode_share, ComparePassportsRequest, SuggestRequest, TravelQuery,
    TravelReport, VisaCheck, API_CONTRACT_VERSION,
};
use visacheck_core::{
    AccessCategory, CountryCode, FilterSpec, HoldingId, HoldingKind, PrimaryFilter, Region,
    RequirementDataset, SortKey, Traveler, VisaHoldingType,
};

const CLI_CONTRACT_VERSION: &str = "cli.v1";

#[derive(Debug, Parser)]
#[command(name = "vck")]
#[command(about = "VisaCheck travel requirement CLI")]
struct Cli {
    /// Requirement dataset: JSON object of passport code -> destination code
    /// -> raw requirement cell.
    #[arg(long, env = "VCK_DATASET", default_value = "./data/requirements.json")]
    dataset: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve, merge, and rank destinations for a traveler group.
    Destinations(DestinationsArgs),
    /// Compare two passports destination by destination.
    Compare(CompareArgs),
    /// Suggest destinations the group can reach with the least friction.
    Suggest(SuggestArgs),
    /// List the built-in visa and residence holding types.
    Holdings(HoldingsArgs),
    /// List the built-in country reference table.
    Countries(CountriesArgs),
    /// Encode or decode shareable traveler-group codes.
    Share {
        #[command(subcommand)]
        command: ShareCommand,
    },
}

#[derive(Debug, Args)]
struct TravelerArgs {
    /// Traveler segment `Name:DE,US;us-visa` (repeatable).
    #[arg(long = "traveler", value_name = "SEGMENT")]
    travelers: Vec<String>,
    /// Passport code for a single unnamed traveler (repeatable).
    #[arg(long = "passport", value_name = "CODE", conflicts_with = "travelers")]
    passports: Vec<String>,
    /// Holding id for the single-traveler shorthand (repeatable).
    #[arg(long = "holding", value_name = "ID", conflicts_with = "travelers")]
    holdings: Vec<String>,
}

#[derive(Debug, Args)]
struct DestinationsArgs {
    #[command(flatten)]
    group: TravelerArgs,
    /// Primary filter: all, accessible, favorites, or a visa category.
    #[arg(long, default_value = "all")]
    filter: String,
    /// Keep only destinations in this region.
    #[arg(long, value_enum)]
    region: Option<RegionArg>,
    /// Case-insensitive substring match on country names.
    #[arg(long)]
    search: Option<String>,
    /// Favorite country code (repeatable); favorites sort first.
    #[arg(long = "favorite", value_name = "CODE")]
    favorites: Vec<String>,
    #[arg(long, value_enum, default_value_t = SortArg::Name)]
    sort: SortArg,
    #[arg(long, value_enum, default_value_t = FormatArg::Json)]
    format: FormatArg,
    /// Write the rendered output to a file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct CompareArgs {
    /// First passport code.
    #[arg(value_name = "FIRST")]
    first: String,
    /// Second passport code.
    #[arg(value_name = "SECOND")]
    second: String,
}

#[derive(Debug, Args)]
struct SuggestArgs {
    #[command(flatten)]
    group: TravelerArgs,
    /// Favorite country code (repeatable); hidden gems avoid favored regions.
    #[arg(long = "favorite", value_name = "CODE")]
    favorites: Vec<String>,
}

#[derive(Debug, Args)]
struct HoldingsArgs {
    /// Keep only holding types of this kind.
    #[arg(long, value_enum)]
    kind: Option<KindArg>,
}

#[derive(Debug, Args)]
struct CountriesArgs {
    /// Keep only countries in this region.
    #[arg(long, value_enum)]
    region: Option<RegionArg>,
}

#[derive(Debug, Subcommand)]
enum ShareCommand {
    /// Encode a traveler group as a compact share code.
    Encode(ShareEncodeArgs),
    /// Decode a share code back into a traveler group.
    Decode(ShareDecodeArgs),
}

#[derive(Debug, Args)]
struct ShareEncodeArgs {
    #[command(flatten)]
    group: TravelerArgs,
}

#[derive(Debug, Args)]
struct ShareDecodeArgs {
    /// Share code produced by `vck share encode`.
    #[arg(value_name = "CODE")]
    code: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Table,
    Csv,
    Text,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Name,
    Days,
    Category,
    Region,
}

impl SortArg {
    fn into_sort_key(self) -> SortKey {
        match self {
            Self::Name => SortKey::Name,
            Self::Days => SortKey::DaysDesc,
            Self::Category => SortKey::Category,
            Self::Region => SortKey::Region,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RegionArg {
    Africa,
    Americas,
    Asia,
    Caribbean,
    Europe,
    MiddleEast,
    Oceania,
}

impl RegionArg {
    fn into_region(self) -> Region {
        match self {
            Self::Africa => Region::Africa,
            Self::Americas => Region::Americas,
            Self::Asia => Region::Asia,
            Self::Caribbean => Region::Caribbean,
            Self::Europe => Region::Europe,
            Self::MiddleEast => Region::MiddleEast,
            Self::Oceania => Region::Oceania,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Residence,
    Visa,
    Special,
}

impl KindArg {
    fn into_kind(self) -> HoldingKind {
        match self {
            Self::Residence => HoldingKind::Residence,
            Self::Visa => HoldingKind::Visa,
            Self::Special => HoldingKind::Special,
        }
    }
}

fn with_contract_version(value: Value) -> Value {
    match value {
        Value::Object(mut object) => {
            object.insert(
                "contract_version".to_string(),
                Value::String(CLI_CONTRACT_VERSION.to_string()),
            );
            object.insert(
                "api_contract_version".to_string(),
                Value::String(API_CONTRACT_VERSION.to_string()),
            );
            Value::Object(object)
        }
        other => serde_json::json!({
            "contract_version": CLI_CONTRACT_VERSION,
            "api_contract_version": API_CONTRACT_VERSION,
            "payload": other
        }),
    }
}

fn emit_json(value: Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&with_contract_version(value))?);
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("VCK_LOG").unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Destinations(args) => run_destinations(&args, &open_engine(&cli.dataset)?),
        Command::Compare(args) => run_compare(&args, &open_engine(&cli.dataset)?),
        Command::Suggest(args) => run_suggest(&args, &open_engine(&cli.dataset)?),
        Command::Holdings(args) => run_holdings(&args),
        Command::Countries(args) => run_countries(&args),
        Command::Share { command } => run_share(&command),
    }
}

fn open_engine(path: &Path) -> Result<VisaCheck> {
    let engine = VisaCheck::open(path)
        .with_context(|| format!("failed to load requirement dataset {}", path.display()))?;
    debug!(
        dataset = %path.display(),
        passports = engine.resolver().dataset().len(),
        "dataset loaded"
    );
    Ok(engine)
}

fn run_destinations(args: &DestinationsArgs, engine: &VisaCheck) -> Result<()> {
    let travelers = gather_travelers(&args.group)?;
    let filter = FilterSpec {
        primary: PrimaryFilter::parse(&args.filter)?,
        region: args.region.map(RegionArg::into_region),
        search: args.search.clone(),
        favorites: parse_favorites(&args.favorites)?,
    };
    let query = TravelQuery { travelers, filter, sort: args.sort.into_sort_key() };
    let report = engine.destinations(&query);

    let rendered = match args.format {
        FormatArg::Json => {
            serde_json::to_string_pretty(&with_contract_version(serde_json::to_value(&report)?))?
        }
        FormatArg::Table => render_table(&report),
        FormatArg::Csv => render_csv(&report, &passport_names(engine, &query.travelers)),
        FormatArg::Text => render_text(&report, &passport_names(engine, &query.travelers)),
    };
    emit_rendered(args.out.as_deref(), &rendered)
}

fn run_compare(args: &CompareArgs, engine: &VisaCheck) -> Result<()> {
    let request = ComparePassportsRequest {
        first: parse_code(&args.first)?,
        second: parse_code(&args.second)?,
    };
    let report = engine.compare(&request);
    emit_json(serde_json::to_value(&report)?)
}

fn run_suggest(args: &SuggestArgs, engine: &VisaCheck) -> Result<()> {
    let request = SuggestRequest {
        travelers: gather_travelers(&args.group)?,
        favorites: parse_favorites(&args.favorites)?,
    };
    let report = engine.suggest(&request);
    emit_json(serde_json::to_value(&report)?)
}

#[derive(Debug, Serialize)]
struct HoldingTypeRow {
    #[serde(flatten)]
    holding: VisaHoldingType,
    rule_count: usize,
}

fn run_holdings(args: &HoldingsArgs) -> Result<()> {
    let engine = VisaCheck::new(RequirementDataset::default());
    let rows: Vec<HoldingTypeRow> = engine
        .holding_types()
        .into_iter()
        .filter(|holding| args.kind.map_or(true, |kind| holding.kind == kind.into_kind()))
        .map(|holding| {
            let rule_count = engine.catalog().rules(&holding.id).len();
            HoldingTypeRow { holding, rule_count }
        })
        .collect();
    let total = rows.len();
    emit_json(serde_json::json!({
        "holding_types": rows,
        "total": total
    }))
}

fn run_countries(args: &CountriesArgs) -> Result<()> {
    let engine = VisaCheck::new(RequirementDataset::default());
    let countries: Vec<_> = engine
        .countries()
        .into_iter()
        .filter(|country| {
            args.region.map_or(true, |region| country.region == region.into_region())
        })
        .collect();
    let total = countries.len();
    emit_json(serde_json::json!({
        "countries": countries,
        "total": total
    }))
}

fn run_share(command: &ShareCommand) -> Result<()> {
    match command {
        ShareCommand::Encode(args) => {
            let travelers = gather_travelers(&args.group)?;
            emit_json(serde_json::json!({
                "share_code": encode_share(&travelers),
                "travelers": travelers.len()
            }))
        }
        ShareCommand::Decode(args) => {
            let travelers = decode_share(&args.code);
            let total = travelers.len();
            emit_json(serde_json::json!({
                "travelers": travelers,
                "total": total
            }))
        }
    }
}

fn gather_travelers(group: &TravelerArgs) -> Result<Vec<Traveler>> {
    if !group.travelers.is_empty() {
        return group
            .travelers
            .iter()
            .enumerate()
            .map(|(index, raw)| parse_traveler(raw, index))
            .collect();
    }
    if group.passports.is_empty() {
        bail!("provide at least one --traveler segment or a --passport code");
    }
    let mut traveler = Traveler::new("1", "Traveler 1");
    for raw in &group.passports {
        traveler.passports.push(parse_code(raw)?);
    }
    traveler.holdings = group.holdings.iter().map(|raw| HoldingId::from(raw.as_str())).collect();
    Ok(vec![traveler])
}

fn parse_traveler(raw: &str, index: usize) -> Result<Traveler> {
    let (name, rest) = raw
        .split_once(':')
        .ok_or_else(|| anyhow!("traveler `{raw}` must look like `Name:DE,US;us-visa`"))?;
    if name.is_empty() {
        bail!("traveler `{raw}` has an empty name");
    }
    let (passports, holdings) = match rest.split_once(';') {
        Some((passports, holdings)) => (passports, Some(holdings)),
        None => (rest, None),
    };
    let mut traveler = Traveler::new((index + 1).to_string(), name);
    for code in passports.split(',').filter(|part| !part.is_empty()) {
        traveler.passports.push(parse_code(code)?);
    }
    if let Some(holdings) = holdings {
        traveler.holdings =
            holdings.split(',').filter(|part| !part.is_empty()).map(HoldingId::from).collect();
    }
    Ok(traveler)
}

fn parse_code(raw: &str) -> Result<CountryCode> {
    Ok(raw.parse()?)
}

fn parse_favorites(raw: &[String]) -> Result<BTreeSet<CountryCode>> {
    raw.iter().map(|code| parse_code(code)).collect()
}

/// Deduplicated passport display names across the group, first-seen order.
fn passport_names(engine: &VisaCheck, travelers: &[Traveler]) -> String {
    let countries = engine.resolver().countries();
    let mut seen: Vec<CountryCode> = Vec::new();
    for traveler in travelers {
        for code in &traveler.passports {
            if !seen.contains(code) {
                seen.push(*code);
            }
        }
    }
    let names: Vec<String> = seen.iter().map(|&code| countries.display_name(code)).collect();
    names.join(", ")
}

fn export_date() -> String {
    let today = OffsetDateTime::now_utc().date();
    format!("{} {}, {}", today.month(), today.day(), today.year())
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn render_csv(report: &TravelReport, passports: &str) -> String {
    let mut lines = vec![
        "# VisaCheck Export".to_string(),
        format!("# Passports: {passports}"),
        format!("# Date: {}", export_date()),
        format!("# Total destinations: {}", report.results.len()),
        "Country,Code,Visa Category,Days Allowed,Region,Source".to_string(),
    ];
    for entry in &report.results {
        let days = entry.days.map_or_else(String::new, |days| days.to_string());
        let region = entry.region.map_or("", Region::label);
        lines.push(format!(
            "{},{},{},{},{},{}",
            csv_field(&entry.name),
            entry.destination,
            csv_field(entry.category.label()),
            days,
            csv_field(region),
            csv_field(entry.source.label()),
        ));
    }
    lines.join("\n")
}

fn render_text(report: &TravelReport, passports: &str) -> String {
    const TITLE: &str = "VisaCheck Results";
    let mut lines = vec![
        TITLE.to_string(),
        "=".repeat(TITLE.len()),
        format!("Passports: {passports}"),
        format!("Date: {}", export_date()),
        format!("Total: {} destinations", report.results.len()),
    ];
    for category in AccessCategory::FILTERABLE {
        let group: Vec<_> =
            report.results.iter().filter(|entry| entry.category == category).collect();
        if group.is_empty() {
            continue;
        }
        let heading = format!("{} ({})", category.label(), group.len());
        lines.push(String::new());
        lines.push(heading.clone());
        lines.push("-".repeat(heading.len()));
        for entry in group {
            lines.push(match entry.days {
                Some(days) => format!("  {} ({}) - {} days", entry.name, entry.destination, days),
                None => format!("  {} ({})", entry.name, entry.destination),
            });
        }
    }
    lines.join("\n")
}

fn render_table(report: &TravelReport) -> String {
    let name_width =
        report.results.iter().map(|entry| entry.name.len()).max().unwrap_or(0).max("COUNTRY".len());
    let mut lines = vec![format!(
        "{:<name_width$}  CODE  {:<15}  {:>4}  SOURCE",
        "COUNTRY", "CATEGORY", "DAYS"
    )];
    for entry in &report.results {
        let days = entry.days.map_or_else(String::new, |days| days.to_string());
        lines.push(format!(
            "{:<name_width$}  {:<4}  {:<15}  {:>4}  {}",
            entry.name,
            entry.destination.as_str(),
            entry.category.label(),
            days,
            entry.source.label(),
        ));
    }
    let summary = &report.summary;
    lines.push(String::new());
    lines.push(format!(
        "{} destinations | {} visa-free | {} easy access",
        summary.total, summary.visa_free, summary.easy_access
    ));
    lines.join("\n")
}

fn emit_rendered(out: Option<&Path>, rendered: &str) -> Result<()> {
    match out {
        Some(path) => fs::write(path, format!("{rendered}\n"))
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            println!("{rendered}");
            Ok(())
        }
    }
}
