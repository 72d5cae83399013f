//! Passport and visa-requirement lookup engine.
//!
//! The crate resolves raw requirement datasets into categorized access
//! lists, layers curated visa-benefit rules on top, merges results across
//! traveler groups, and filters, sorts, and summarizes the outcome. All
//! operations are synchronous and deterministic; the only mutable state is
//! the resolver's memoization cache.

pub mod benefit;
pub mod category;
pub mod compare;
pub mod country;
pub mod dataset;
pub mod holding;
pub mod links;
pub mod merge;
pub mod pipeline;
pub mod resolve;
pub mod stats;
pub mod suggest;

pub use benefit::{resolve_benefits, summarize_new_destinations, AccessSource, EnhancedAccess};
pub use category::{AccessCategory, BenefitAccessType, ConfidenceLevel};
pub use compare::{compare, ComparisonEntry, ComparisonRow, PassportComparison};
pub use country::{CodeParseError, Country, CountryCode, CountryIndex, Region};
pub use dataset::{DatasetError, RequirementDataset};
pub use holding::{
    BenefitRule, HoldingCatalog, HoldingId, HoldingKind, VisaHoldingType, SCHENGEN_STATES,
};
pub use links::{LinkDirectory, OfficialLink};
pub use merge::{merge_group, GroupAccess, MergeOutcome, Traveler, TravelerId};
pub use pipeline::{filter_and_sort, FilterParseError, FilterSpec, PrimaryFilter, SortKey};
pub use resolve::{categorize, PassportAccess, PassportResolver};
pub use stats::{category_counts, summarize, AccessSummary, CategoryCount, LongestStay};
pub use suggest::{suggest, Suggestions};
