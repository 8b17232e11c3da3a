//! Profile-result classification.
//!
//! A workunit can carry many result sets; only the ones whose schemas look
//! like column-profile output should feed the report. Classification counts
//! how many schema column names fall inside a fixed vocabulary of known
//! profiling fields and compares that count against a threshold.

use dpr_model::ResultSchema;

/// The known column-profiling output fields. Membership here is the only
/// signal used to recognize a profile result; order carries no meaning.
pub const PROFILE_FIELDS: [&str; 24] = [
    "attribute",
    "given_attribute_type",
    "best_attribute_type",
    "rec_count",
    "fill_count",
    "fill_rate",
    "cardinality",
    "cardinality_breakdown",
    "modes",
    "min_length",
    "max_length",
    "ave_length",
    "popular_patterns",
    "rare_patterns",
    "is_numeric",
    "numeric_min",
    "numeric_max",
    "numeric_mean",
    "numeric_std_dev",
    "numeric_lower_quartile",
    "numeric_median",
    "numeric_upper_quartile",
    "numeric_correlations",
    "correlations",
];

/// Minimum number of vocabulary matches for a schema to classify as
/// profile output.
pub const DEFAULT_PROFILE_FIELD_THRESHOLD: usize = 4;

/// Returns true if the column name is one of the known profiling fields.
pub fn is_known_profile_field(name: &str) -> bool {
    PROFILE_FIELDS.contains(&name)
}

/// Count schema columns whose names are known profiling fields.
/// Columns with empty names never match.
pub fn count_profile_fields(schema: &ResultSchema) -> usize {
    schema
        .column_names()
        .filter(|name| is_known_profile_field(name))
        .count()
}

/// Classify a result schema as profile output at the default threshold.
pub fn is_profile_result(schema: &ResultSchema) -> bool {
    is_profile_result_with_threshold(schema, DEFAULT_PROFILE_FIELD_THRESHOLD)
}

/// Classify with an explicit threshold. A malformed or empty schema counts
/// zero matches and classifies as not-a-profile rather than erroring.
pub fn is_profile_result_with_threshold(schema: &ResultSchema, threshold: usize) -> bool {
    count_profile_fields(schema) >= threshold
}
