//! One attribute's profiling record as delivered by the service.
//!
//! The service nests the breakdown and pattern sequences inside a
//! `{"Row": [...]}` wrapper; deserialization flattens that wrapper and
//! also accepts a bare array so locally saved row dumps round-trip.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ProfileError, Result};

/// Per-distinct-value record count from the cardinality breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: String,
    pub rec_count: u64,
}

/// Frequency of one structural pattern observed in a column's values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternCount {
    pub data_pattern: String,
    pub rec_count: u64,
}

/// Five-number summary plus mean and standard deviation for a numeric
/// attribute. Only obtainable through [`ProfileRow::numeric_summary`],
/// which enforces the is_numeric branch contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub min: f64,
    pub lower_quartile: f64,
    pub median: f64,
    pub upper_quartile: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

/// Length statistics for a non-numeric attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthSummary {
    pub min_length: u64,
    pub ave_length: u64,
    pub max_length: u64,
}

/// One profiled attribute. Exactly one of the numeric-stats fields and the
/// length-statistics fields is meaningful, selected by `is_numeric`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRow {
    pub attribute: String,
    #[serde(default)]
    pub given_attribute_type: String,
    #[serde(default)]
    pub best_attribute_type: String,
    #[serde(default)]
    pub rec_count: u64,
    #[serde(default)]
    pub fill_count: u64,
    #[serde(default)]
    pub fill_rate: f64,
    #[serde(default)]
    pub cardinality: u64,
    #[serde(default, deserialize_with = "nested_rows")]
    pub cardinality_breakdown: Vec<ValueCount>,
    #[serde(default)]
    pub is_numeric: bool,
    #[serde(default)]
    pub numeric_min: Option<f64>,
    #[serde(default)]
    pub numeric_max: Option<f64>,
    #[serde(default)]
    pub numeric_mean: Option<f64>,
    #[serde(default)]
    pub numeric_std_dev: Option<f64>,
    #[serde(default)]
    pub numeric_lower_quartile: Option<f64>,
    #[serde(default)]
    pub numeric_median: Option<f64>,
    #[serde(default)]
    pub numeric_upper_quartile: Option<f64>,
    #[serde(default)]
    pub min_length: Option<u64>,
    #[serde(default)]
    pub max_length: Option<u64>,
    #[serde(default)]
    pub ave_length: Option<u64>,
    #[serde(default, deserialize_with = "nested_rows")]
    pub popular_patterns: Vec<PatternCount>,
}

impl ProfileRow {
    /// Numeric branch fields, or a contract violation if the row claims
    /// `is_numeric` without carrying them.
    pub fn numeric_summary(&self) -> Result<NumericSummary> {
        if !self.is_numeric {
            return Err(ProfileError::row_contract(
                &self.attribute,
                "numeric summary requested for a non-numeric row",
            ));
        }
        let missing = |field: &str| {
            ProfileError::row_contract(&self.attribute, format!("missing {field} on numeric row"))
        };
        Ok(NumericSummary {
            min: self.numeric_min.ok_or_else(|| missing("numeric_min"))?,
            lower_quartile: self
                .numeric_lower_quartile
                .ok_or_else(|| missing("numeric_lower_quartile"))?,
            median: self.numeric_median.ok_or_else(|| missing("numeric_median"))?,
            upper_quartile: self
                .numeric_upper_quartile
                .ok_or_else(|| missing("numeric_upper_quartile"))?,
            max: self.numeric_max.ok_or_else(|| missing("numeric_max"))?,
            mean: self.numeric_mean.ok_or_else(|| missing("numeric_mean"))?,
            std_dev: self
                .numeric_std_dev
                .ok_or_else(|| missing("numeric_std_dev"))?,
        })
    }

    /// Length-statistics branch fields, or a contract violation if absent.
    pub fn length_summary(&self) -> Result<LengthSummary> {
        let missing = |field: &str| {
            ProfileError::row_contract(&self.attribute, format!("missing {field}"))
        };
        Ok(LengthSummary {
            min_length: self.min_length.ok_or_else(|| missing("min_length"))?,
            ave_length: self.ave_length.ok_or_else(|| missing("ave_length"))?,
            max_length: self.max_length.ok_or_else(|| missing("max_length"))?,
        })
    }
}

/// Accept either the service's `{"Row": [...]}` wrapper or a bare array.
fn nested_rows<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Shape<T> {
        Wrapped {
            #[serde(rename = "Row", default = "Vec::new")]
            row: Vec<T>,
        },
        Bare(Vec<T>),
    }

    Ok(match Shape::deserialize(deserializer)? {
        Shape::Wrapped { row } => row,
        Shape::Bare(rows) => rows,
    })
}
