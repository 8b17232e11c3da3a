//! Data model for workunit column-profile reports.
//!
//! The types here mirror what the workunit service returns for a
//! data-profiling job: result-set schemas and one [`ProfileRow`] per
//! profiled attribute. They are read-only inputs to classification and
//! presentation selection; nothing mutates a row after it is fetched.

pub mod error;
pub mod profile;
pub mod result;

pub use error::{ProfileError, Result};
pub use profile::{LengthSummary, NumericSummary, PatternCount, ProfileRow, ValueCount};
pub use result::{ResultMeta, ResultSchema, SchemaColumn};
