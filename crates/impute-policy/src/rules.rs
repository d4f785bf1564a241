//! Priority-ordered handling rules
//!
//! Rules are evaluated top to bottom and the first match wins. The order is
//! the table below; `ManualReview` is the catch-all.
//!
//! | # | Rule | Fires when | Strategy |
//! |---|------|------------|----------|
//! | 1 | `NoOutliers` | count is 0 | leave as is |
//! | 2 | `HighContamination` | percentage > 20% | leave as is |
//! | 3 | `UniqueIdentifier` | column is an identifier | leave as is |
//! | 4 | `Categorical` | declared categorical | leave as is |
//! | 5 | `BusinessBounds` | a fence lies beyond a declared business bound | cap to bounds |
//! | 6 | `LowContamination` | percentage < configured threshold and numeric | cap to bounds |
//! | 7 | `ModerateContamination` | percentage < 10% | convert to missing |
//! | 8 | `ManualReview` | otherwise | leave as is |

use impute_core::{AnalysisConfig, ColumnMetadata, DataType, OutlierHandling};
use std::fmt;

/// Outlier fraction above which the column is left for manual investigation
pub const HIGH_CONTAMINATION: f64 = 0.20;

/// Outlier fraction below which outliers are converted to missing
pub const MODERATE_CONTAMINATION: f64 = 0.10;

/// Summary of a detection run, the selector's input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierStats {
    /// Number of outliers in the full column
    pub count: usize,
    /// Outliers as a fraction of non-missing values
    pub percentage: f64,
    /// Statistical lower fence
    pub lower_bound: Option<f64>,
    /// Statistical upper fence
    pub upper_bound: Option<f64>,
}

/// Identifies which rule produced a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyRule {
    /// No outliers were detected
    NoOutliers,
    /// Too many outliers to trust the distribution
    HighContamination,
    /// Identifier columns are never altered
    UniqueIdentifier,
    /// Unusual categories are still valid categories
    Categorical,
    /// Fences reach past the declared business range
    BusinessBounds,
    /// Few outliers in a numeric column
    LowContamination,
    /// Some outliers, handed to imputation
    ModerateContamination,
    /// Nothing else applied
    ManualReview,
}

impl PolicyRule {
    /// Strategy this rule always recommends
    pub fn strategy(&self) -> OutlierHandling {
        match self {
            PolicyRule::NoOutliers
            | PolicyRule::HighContamination
            | PolicyRule::UniqueIdentifier
            | PolicyRule::Categorical
            | PolicyRule::ManualReview => OutlierHandling::LeaveAsIs,
            PolicyRule::BusinessBounds | PolicyRule::LowContamination => OutlierHandling::CapToBounds,
            PolicyRule::ModerateContamination => OutlierHandling::ConvertToMissing,
        }
    }
}

impl fmt::Display for PolicyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolicyRule::NoOutliers => "no outliers",
            PolicyRule::HighContamination => "high contamination",
            PolicyRule::UniqueIdentifier => "unique identifier",
            PolicyRule::Categorical => "categorical",
            PolicyRule::BusinessBounds => "business bounds",
            PolicyRule::LowContamination => "low contamination",
            PolicyRule::ModerateContamination => "moderate contamination",
            PolicyRule::ManualReview => "manual review",
        };
        f.write_str(name)
    }
}

/// A handling strategy with the reason it was chosen
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Recommended handling
    pub strategy: OutlierHandling,
    /// Human-readable reason
    pub rationale: String,
    /// Rule that fired
    pub rule: PolicyRule,
}

struct RuleInput<'a> {
    stats: &'a OutlierStats,
    metadata: &'a ColumnMetadata,
    config: &'a AnalysisConfig,
}

type Predicate = fn(&RuleInput<'_>) -> bool;
type Rationale = fn(&RuleInput<'_>) -> String;

/// Ordered rule table; first match wins
static RULES: [(PolicyRule, Predicate, Rationale); 7] = [
    (PolicyRule::NoOutliers, has_no_outliers, no_outliers_rationale),
    (PolicyRule::HighContamination, is_highly_contaminated, high_contamination_rationale),
    (PolicyRule::UniqueIdentifier, is_unique_identifier, unique_identifier_rationale),
    (PolicyRule::Categorical, is_categorical, categorical_rationale),
    (PolicyRule::BusinessBounds, violates_business_bounds, business_bounds_rationale),
    (PolicyRule::LowContamination, is_low_contamination, low_contamination_rationale),
    (PolicyRule::ModerateContamination, is_moderate_contamination, moderate_contamination_rationale),
];

/// Rules in evaluation order, catch-all last
pub fn rule_order() -> impl Iterator<Item = PolicyRule> {
    RULES
        .iter()
        .map(|(rule, _, _)| *rule)
        .chain(std::iter::once(PolicyRule::ManualReview))
}

/// Recommend a handling strategy for a column's outliers
///
/// Deterministic: the same inputs always give the same recommendation and
/// rationale text.
pub fn suggest_outlier_handling(
    stats: &OutlierStats,
    metadata: &ColumnMetadata,
    config: &AnalysisConfig,
) -> Recommendation {
    let input = RuleInput {
        stats,
        metadata,
        config,
    };

    let (rule, rationale) = RULES
        .iter()
        .find(|(_, applies, _)| applies(&input))
        .map(|(rule, _, rationale)| (*rule, rationale(&input)))
        .unwrap_or_else(|| (PolicyRule::ManualReview, manual_review_rationale(&input)));

    Recommendation {
        strategy: rule.strategy(),
        rationale,
        rule,
    }
}

/// Format a fraction as a percentage with one decimal, e.g. `23.4%`
pub fn format_percentage(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

fn describe_bound(bound: Option<f64>) -> String {
    bound.map_or_else(|| "none".to_string(), |value| value.to_string())
}

fn has_no_outliers(input: &RuleInput<'_>) -> bool {
    input.stats.count == 0
}

fn is_highly_contaminated(input: &RuleInput<'_>) -> bool {
    input.stats.percentage > HIGH_CONTAMINATION
}

fn is_unique_identifier(input: &RuleInput<'_>) -> bool {
    input.metadata.unique_flag
}

fn is_categorical(input: &RuleInput<'_>) -> bool {
    input.metadata.data_type == DataType::Categorical
}

// Declared but unviolated bounds fall through to the remaining rules.
fn violates_business_bounds(input: &RuleInput<'_>) -> bool {
    let (stats, metadata) = (input.stats, input.metadata);
    let below_min = matches!(
        (stats.lower_bound, metadata.min_value),
        (Some(lower), Some(min)) if lower < min
    );
    let above_max = matches!(
        (stats.upper_bound, metadata.max_value),
        (Some(upper), Some(max)) if upper > max
    );
    below_min || above_max
}

fn is_low_contamination(input: &RuleInput<'_>) -> bool {
    input.stats.percentage < input.config.outlier_threshold && input.metadata.data_type.is_numeric()
}

fn is_moderate_contamination(input: &RuleInput<'_>) -> bool {
    input.stats.percentage < MODERATE_CONTAMINATION
}

fn no_outliers_rationale(_: &RuleInput<'_>) -> String {
    "No outliers detected".to_string()
}

fn high_contamination_rationale(input: &RuleInput<'_>) -> String {
    format!(
        "High outlier percentage ({}) suggests potential data distribution issue - investigate before handling",
        format_percentage(input.stats.percentage)
    )
}

fn unique_identifier_rationale(_: &RuleInput<'_>) -> String {
    "Unique identifier column - outliers should not be modified".to_string()
}

fn categorical_rationale(_: &RuleInput<'_>) -> String {
    "Categorical data - outliers represent valid categories".to_string()
}

fn business_bounds_rationale(input: &RuleInput<'_>) -> String {
    format!(
        "Outliers violate business rules (min: {}, max: {}) - cap to valid range",
        describe_bound(input.metadata.min_value),
        describe_bound(input.metadata.max_value)
    )
}

fn low_contamination_rationale(input: &RuleInput<'_>) -> String {
    format!(
        "Low outlier percentage ({}) - cap to statistical bounds to preserve data distribution",
        format_percentage(input.stats.percentage)
    )
}

fn moderate_contamination_rationale(input: &RuleInput<'_>) -> String {
    format!(
        "Medium outlier percentage ({}) - convert to missing for imputation to avoid bias",
        format_percentage(input.stats.percentage)
    )
}

fn manual_review_rationale(input: &RuleInput<'_>) -> String {
    format!(
        "Outlier percentage ({}) requires manual review",
        format_percentage(input.stats.percentage)
    )
}
