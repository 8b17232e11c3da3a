//! Plain cell descriptors handed to the rendering stage.
//!
//! Presentation policy produces these tagged variants; renderers turn them
//! into terminal cells, HTML fragments, or JSON without re-deriving any
//! decision. No markup or styling lives here.

use serde::{Deserialize, Serialize};

use dpr_model::{LengthSummary, NumericSummary, PatternCount, ValueCount};

/// Icon shown next to an attribute type badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconKind {
    String,
    Numeric,
}

/// One attribute type annotation (given or best) with its icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeBadge {
    pub type_name: String,
    pub icon: IconKind,
}

/// Attribute name, type badges, and the derived fill/cardinality figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDescCell {
    pub attribute: String,
    pub given_type: TypeBadge,
    pub best_type: TypeBadge,
    pub cardinality: u64,
    /// Rounded percentage of filled records that are distinct; `None` when
    /// fill_count is zero (rendered as a placeholder, never NaN).
    pub cardinality_percent: Option<String>,
    pub fill_count: u64,
    pub fill_rate: String,
}

/// Contents of the stats column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatsCell {
    Numeric(NumericSummary),
    Lengths(LengthSummary),
}

/// A single grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cell", rename_all = "snake_case")]
pub enum CellDescriptor {
    AttributeDesc(AttributeDescCell),
    Stats(StatsCell),
    Breakdown {
        rows: Vec<ValueCount>,
        /// True when the breakdown is large enough to need a paged table
        /// instead of the simple styled one.
        paged: bool,
    },
    Quartile(NumericSummary),
    PopularPatterns { rows: Vec<PatternCount> },
    NotAvailable,
}

impl CellDescriptor {
    pub fn is_not_available(&self) -> bool {
        matches!(self, CellDescriptor::NotAvailable)
    }
}

/// One visual row of the report grid.
///
/// `secondary` is the priority pick (breakdown over quartile over popular
/// patterns) used by single-widget layouts; the dedicated `quartile`,
/// `breakdown` and `popular_patterns` cells feed layouts that render each
/// as its own column, gated by [`ColumnVisibility`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowLayout {
    pub attribute: String,
    pub description: AttributeDescCell,
    pub stats: CellDescriptor,
    pub secondary: CellDescriptor,
    pub quartile: CellDescriptor,
    pub breakdown: CellDescriptor,
    pub popular_patterns: CellDescriptor,
}

/// Set-level column toggles: a column renders at all only if at least one
/// row has data for it. Rows without data show a placeholder in a visible
/// column rather than collapsing it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnVisibility {
    pub show_quartile: bool,
    pub show_breakdown: bool,
    pub show_popular_patterns: bool,
}

/// The whole report grid: rows in fetch order plus the column toggles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportLayout {
    pub rows: Vec<RowLayout>,
    pub columns: ColumnVisibility,
}

impl ReportLayout {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
