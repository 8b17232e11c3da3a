//! Presentation selection for column-profile report rows.
//!
//! Given profiled-attribute rows, this crate decides which widget belongs
//! in each grid cell, derives the display values (fill rates, percentages,
//! shared column widths), and emits plain [`CellDescriptor`] structures for
//! an independent rendering stage.

pub mod descriptor;
pub mod measure;
pub mod select;

pub use descriptor::{
    AttributeDescCell, CellDescriptor, ColumnVisibility, IconKind, ReportLayout, RowLayout,
    StatsCell, TypeBadge,
};
pub use measure::{CharWidthMeasure, TextMeasure, column_width, format_stat};
pub use select::{
    BREAKDOWN_PAGE_THRESHOLD, attribute_type_icon, breakdown_cell, cardinality_percent,
    display_fill_rate, layout_row, layout_rows, patterns_cell, quartile_cell, select_attribute_desc,
    select_secondary, select_stats, visible_columns,
};
