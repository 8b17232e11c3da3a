//! Shared column width across heterogeneous rows.
//!
//! The stats column holds whichever numeric figures each row carries; to
//! align the column, its width is the maximum rendered width of any figure
//! across all rows. Actual text measurement belongs to the rendering
//! toolkit, so it enters through a trait.

use dpr_model::ProfileRow;

/// Measures the rendered width of a text fragment, in whatever unit the
/// renderer uses (pixels, terminal cells, ...).
pub trait TextMeasure {
    fn text_width(&self, text: &str) -> u32;
}

/// Character-count measurement: every character is one fixed advance.
/// Good enough for monospace terminal output and for tests.
#[derive(Debug, Clone, Copy)]
pub struct CharWidthMeasure {
    pub char_width: u32,
}

impl Default for CharWidthMeasure {
    fn default() -> Self {
        Self { char_width: 1 }
    }
}

impl TextMeasure for CharWidthMeasure {
    fn text_width(&self, text: &str) -> u32 {
        text.chars().count() as u32 * self.char_width
    }
}

/// Format one stats figure the way renderers display it.
pub fn format_stat(value: f64) -> String {
    format!("{value}")
}

/// Width of the widest stats figure across all rows. Rows whose branch
/// fields are missing contribute nothing (their cells degrade elsewhere).
pub fn column_width<M: TextMeasure>(rows: &[ProfileRow], measure: &M) -> u32 {
    let mut width = 0;
    for row in rows {
        if let Ok(summary) = row.numeric_summary() {
            for value in [
                summary.mean,
                summary.std_dev,
                summary.min,
                summary.lower_quartile,
                summary.median,
                summary.upper_quartile,
                summary.max,
            ] {
                width = width.max(measure.text_width(&format_stat(value)));
            }
        } else if let Ok(lengths) = row.length_summary() {
            for value in [lengths.min_length, lengths.ave_length, lengths.max_length] {
                width = width.max(measure.text_width(&value.to_string()));
            }
        }
    }
    width
}
