//! Terminal rendering of the report grid.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, ColumnConstraint, ContentArrangement, Table, Width,
};

use dpr_layout::{
    AttributeDescCell, BREAKDOWN_PAGE_THRESHOLD, CellDescriptor, IconKind, StatsCell, format_stat,
};
use dpr_model::NumericSummary;

use crate::report::ProfileReport;

/// Character width of the quartile box sketch.
const SKETCH_WIDTH: usize = 21;

/// Build the report as a styled terminal table. Columns for quartiles,
/// breakdowns and popular patterns only appear when at least one row has
/// data for them; rows without data show a dimmed placeholder there.
pub fn render_table(report: &ProfileReport) -> Table {
    let columns = report.layout.columns;
    let mut table = Table::new();
    let mut header = vec![
        header_cell("Attribute"),
        header_cell("Type"),
        header_cell("Filled"),
        header_cell("Cardinality"),
        header_cell("Stats"),
    ];
    if columns.show_quartile {
        header.push(header_cell("Quartiles"));
    }
    if columns.show_breakdown {
        header.push(header_cell("Breakdown"));
    }
    if columns.show_popular_patterns {
        header.push(header_cell("Popular Patterns"));
    }
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    for row in &report.layout.rows {
        let desc = &row.description;
        let mut cells = vec![
            Cell::new(&row.attribute)
                .fg(comfy_table::Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(type_lines(desc)),
            Cell::new(format!("{} ({}%)", desc.fill_count, desc.fill_rate)),
            cardinality_cell(desc),
            stats_cell(&row.stats),
        ];
        if columns.show_quartile {
            cells.push(quartile_column_cell(&row.quartile));
        }
        if columns.show_breakdown {
            cells.push(listing_cell(&row.breakdown));
        }
        if columns.show_popular_patterns {
            cells.push(listing_cell(&row.popular_patterns));
        }
        table.add_row(cells);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(200);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(20)),
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(16)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(comfy_table::Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(comfy_table::Color::DarkGrey)
}

fn na_cell() -> Cell {
    dim_cell("Not Available")
}

fn icon_marker(icon: IconKind) -> &'static str {
    match icon {
        IconKind::String => "a",
        IconKind::Numeric => "#",
    }
}

fn type_lines(desc: &AttributeDescCell) -> String {
    format!(
        "{} {} (given)\n{} {} (best)",
        icon_marker(desc.given_type.icon),
        desc.given_type.type_name,
        icon_marker(desc.best_type.icon),
        desc.best_type.type_name,
    )
}

fn cardinality_cell(desc: &AttributeDescCell) -> Cell {
    match &desc.cardinality_percent {
        Some(percent) => Cell::new(format!("{} (~{percent})", desc.cardinality)),
        None => Cell::new(format!("{} (N/A)", desc.cardinality)),
    }
}

fn stats_cell(cell: &CellDescriptor) -> Cell {
    match cell {
        CellDescriptor::Stats(StatsCell::Numeric(summary)) => Cell::new(format!(
            "Mean {}\nStd. Deviation {}\nQuantiles {} / {} / {} / {} / {}",
            format_stat(summary.mean),
            format_stat(summary.std_dev),
            format_stat(summary.min),
            format_stat(summary.lower_quartile),
            format_stat(summary.median),
            format_stat(summary.upper_quartile),
            format_stat(summary.max),
        )),
        CellDescriptor::Stats(StatsCell::Lengths(lengths)) => Cell::new(format!(
            "Min Length {}\nAvg Length {}\nMax Length {}",
            lengths.min_length, lengths.ave_length, lengths.max_length,
        )),
        // Intentional fill: rows with no stats repeat their description.
        CellDescriptor::AttributeDesc(desc) => Cell::new(type_lines(desc)),
        _ => na_cell(),
    }
}

fn quartile_column_cell(cell: &CellDescriptor) -> Cell {
    match cell {
        CellDescriptor::Quartile(summary) => Cell::new(format!(
            "{}\n{} · {} · {} · {} · {}",
            quartile_sketch(summary, SKETCH_WIDTH),
            format_stat(summary.min),
            format_stat(summary.lower_quartile),
            format_stat(summary.median),
            format_stat(summary.upper_quartile),
            format_stat(summary.max),
        )),
        _ => na_cell(),
    }
}

fn listing_cell(cell: &CellDescriptor) -> Cell {
    match cell {
        CellDescriptor::Breakdown { rows, paged } => {
            let lines: Vec<String> = rows
                .iter()
                .map(|entry| format!("{} · {}", entry.value, entry.rec_count))
                .collect();
            Cell::new(clip_lines(lines, *paged))
        }
        CellDescriptor::PopularPatterns { rows } => {
            let lines: Vec<String> = rows
                .iter()
                .map(|entry| format!("{} · {}", entry.data_pattern, entry.rec_count))
                .collect();
            Cell::new(clip_lines(lines, rows.len() > BREAKDOWN_PAGE_THRESHOLD))
        }
        _ => na_cell(),
    }
}

/// A paged listing shows the leading page plus a remainder marker; a small
/// one shows everything.
fn clip_lines(lines: Vec<String>, paged: bool) -> String {
    if !paged || lines.len() <= BREAKDOWN_PAGE_THRESHOLD {
        return lines.join("\n");
    }
    let hidden = lines.len() - BREAKDOWN_PAGE_THRESHOLD;
    let mut shown: Vec<String> = lines
        .into_iter()
        .take(BREAKDOWN_PAGE_THRESHOLD)
        .collect();
    shown.push(format!("(+{hidden} more)"));
    shown.join("\n")
}

/// One-line box plot: whisker ends at min and max, a filled box between
/// the quartiles, and the median marked inside it.
pub fn quartile_sketch(summary: &NumericSummary, width: usize) -> String {
    let width = width.max(5);
    let span = summary.max - summary.min;
    if span <= 0.0 {
        // Degenerate distribution, every value identical.
        let mut line = " ".repeat(width);
        line.replace_range(width / 2..width / 2 + 1, "█");
        return line;
    }
    let position = |value: f64| -> usize {
        let scaled = (value - summary.min) / span * (width - 1) as f64;
        (scaled.round() as usize).min(width - 1)
    };
    let (lq, median, uq) = (
        position(summary.lower_quartile),
        position(summary.median),
        position(summary.upper_quartile),
    );
    let mut chars: Vec<char> = (0..width)
        .map(|i| if i >= lq && i <= uq { '▓' } else { '─' })
        .collect();
    chars[0] = '├';
    chars[width - 1] = '┤';
    chars[median] = '█';
    chars.into_iter().collect()
}
