//! Per-row presentation selection and derived display values.
//!
//! Everything here is a stateless derivation over already-fetched rows,
//! evaluated once per render pass. Failures are local to one row: a cell
//! that cannot be derived degrades to [`CellDescriptor::NotAvailable`] and
//! the rest of the report renders normally.

use tracing::warn;

use dpr_model::{ProfileRow, Result};

use crate::descriptor::{
    AttributeDescCell, CellDescriptor, ColumnVisibility, IconKind, ReportLayout, RowLayout,
    StatsCell, TypeBadge,
};

/// Breakdowns larger than this render as a paged table instead of the
/// simple styled one.
pub const BREAKDOWN_PAGE_THRESHOLD: usize = 4;

/// Pick the icon for an attribute type string. The service spells string
/// types as "stringN"; only the first six characters are compared, so a
/// type shorter than six characters can never match and falls through to
/// the numeric icon.
pub fn attribute_type_icon(type_name: &str) -> IconKind {
    if type_name.starts_with("string") {
        IconKind::String
    } else {
        IconKind::Numeric
    }
}

fn type_badge(type_name: &str) -> TypeBadge {
    TypeBadge {
        type_name: type_name.to_string(),
        icon: attribute_type_icon(type_name),
    }
}

/// Render a fill rate for display: exact 0 and 100 as integers, anything
/// else with exactly one decimal digit. Halves round away from zero
/// (12.25 shows as "12.3", not the formatter's ties-to-even "12.2").
pub fn display_fill_rate(fill_rate: f64) -> String {
    if fill_rate == 100.0 || fill_rate == 0.0 {
        format!("{fill_rate:.0}")
    } else {
        format!("{:.1}", (fill_rate * 10.0).round() / 10.0)
    }
}

/// Cardinality as a whole percentage of filled records, halves rounded
/// away from zero, or `None` when fill_count is zero (the division is
/// undefined; callers render "N/A").
pub fn cardinality_percent(cardinality: u64, fill_count: u64) -> Option<String> {
    if fill_count == 0 {
        return None;
    }
    let percent = (cardinality as f64 / fill_count as f64 * 100.0).round();
    Some(format!("{percent}%"))
}

/// Build the attribute-description cell for a row.
pub fn select_attribute_desc(row: &ProfileRow) -> AttributeDescCell {
    AttributeDescCell {
        attribute: row.attribute.clone(),
        given_type: type_badge(&row.given_attribute_type),
        best_type: type_badge(&row.best_attribute_type),
        cardinality: row.cardinality,
        cardinality_percent: cardinality_percent(row.cardinality, row.fill_count),
        fill_count: row.fill_count,
        fill_rate: display_fill_rate(row.fill_rate),
    }
}

/// The breakdown column cell: trimmed value/count pairs, paged when large.
pub fn breakdown_cell(row: &ProfileRow) -> CellDescriptor {
    if row.cardinality_breakdown.is_empty() {
        return CellDescriptor::NotAvailable;
    }
    let rows = row
        .cardinality_breakdown
        .iter()
        .map(|entry| dpr_model::ValueCount {
            value: entry.value.trim().to_string(),
            rec_count: entry.rec_count,
        })
        .collect::<Vec<_>>();
    let paged = rows.len() > BREAKDOWN_PAGE_THRESHOLD;
    CellDescriptor::Breakdown { rows, paged }
}

/// The quartile column cell: a five-number summary for numeric rows.
/// Errors when a numeric row is missing its stats fields.
pub fn quartile_cell(row: &ProfileRow) -> Result<CellDescriptor> {
    if !row.is_numeric {
        return Ok(CellDescriptor::NotAvailable);
    }
    Ok(CellDescriptor::Quartile(row.numeric_summary()?))
}

/// The popular-patterns column cell: trimmed pattern/count pairs.
pub fn patterns_cell(row: &ProfileRow) -> CellDescriptor {
    if row.popular_patterns.is_empty() {
        return CellDescriptor::NotAvailable;
    }
    let rows = row
        .popular_patterns
        .iter()
        .map(|entry| dpr_model::PatternCount {
            data_pattern: entry.data_pattern.trim().to_string(),
            rec_count: entry.rec_count,
        })
        .collect();
    CellDescriptor::PopularPatterns { rows }
}

/// Priority pick for single-widget layouts: a non-empty cardinality
/// breakdown wins over the quartile chart, which wins over popular
/// patterns; a row with none of the three gets a placeholder.
pub fn select_secondary(row: &ProfileRow) -> Result<CellDescriptor> {
    if !row.cardinality_breakdown.is_empty() {
        Ok(breakdown_cell(row))
    } else if row.is_numeric {
        Ok(CellDescriptor::Quartile(row.numeric_summary()?))
    } else if !row.popular_patterns.is_empty() {
        Ok(patterns_cell(row))
    } else {
        Ok(CellDescriptor::NotAvailable)
    }
}

/// The stats column cell: numeric summary for numeric rows, length
/// statistics for pattern-bearing text rows, otherwise the attribute
/// description again (intentional fill for otherwise-empty cells).
pub fn select_stats(row: &ProfileRow) -> Result<CellDescriptor> {
    if row.is_numeric {
        Ok(CellDescriptor::Stats(StatsCell::Numeric(
            row.numeric_summary()?,
        )))
    } else if !row.popular_patterns.is_empty() {
        Ok(CellDescriptor::Stats(StatsCell::Lengths(
            row.length_summary()?,
        )))
    } else {
        Ok(CellDescriptor::AttributeDesc(select_attribute_desc(row)))
    }
}

/// Set-level column toggles: each flag is true iff any row in the set
/// qualifies for that column.
pub fn visible_columns(rows: &[ProfileRow]) -> ColumnVisibility {
    ColumnVisibility {
        show_quartile: rows.iter().any(|row| row.is_numeric),
        show_breakdown: rows
            .iter()
            .any(|row| !row.cardinality_breakdown.is_empty()),
        show_popular_patterns: rows.iter().any(|row| !row.popular_patterns.is_empty()),
    }
}

/// Lay out one row, degrading failed cells to Not Available.
pub fn layout_row(row: &ProfileRow) -> RowLayout {
    RowLayout {
        attribute: row.attribute.clone(),
        description: select_attribute_desc(row),
        stats: degrade(row, "stats", select_stats(row)),
        secondary: degrade(row, "secondary", select_secondary(row)),
        quartile: degrade(row, "quartile", quartile_cell(row)),
        breakdown: breakdown_cell(row),
        popular_patterns: patterns_cell(row),
    }
}

/// Lay out a whole result set in fetch order.
pub fn layout_rows(rows: &[ProfileRow]) -> ReportLayout {
    ReportLayout {
        rows: rows.iter().map(layout_row).collect(),
        columns: visible_columns(rows),
    }
}

fn degrade(row: &ProfileRow, cell: &str, result: Result<CellDescriptor>) -> CellDescriptor {
    match result {
        Ok(descriptor) => descriptor,
        Err(error) => {
            warn!(attribute = %row.attribute, cell, %error, "cell degraded to placeholder");
            CellDescriptor::NotAvailable
        }
    }
}
