//! Self-contained HTML rendering.
//!
//! All markup and styling for the report lives here, behind
//! [`render_html`]; the presentation policy upstream never sees a tag.
//! The visual configuration mirrors the hosted report: 180px rows, 20px
//! primary text, the grey/blue palette.

use dpr_layout::{AttributeDescCell, CellDescriptor, IconKind, StatsCell, format_stat};
use dpr_model::{NumericSummary, PatternCount, ValueCount};

use crate::report::ProfileReport;

const ROW_HEIGHT: u32 = 180;
const PRIMARY_FONT_SIZE: u32 = 20;
const SECONDARY_FONT_SIZE: u32 = 14;
const PRIMARY_COLOR: &str = "#494949";
const SECONDARY_COLOR: &str = "#DDD";
const OFFWHITE_COLOR: &str = "#FBFBFB";
const BLUE_COLOR: &str = "#1A99D5";

const SVG_WIDTH: f64 = 240.0;
const SVG_HEIGHT: f64 = 60.0;
const SVG_EDGE_PADDING: f64 = 30.0;
const SVG_DATA_HEIGHT: f64 = 20.0;

/// Render the whole report as one self-contained HTML document.
pub fn render_html(report: &ProfileReport) -> String {
    let rows: String = report.layout.rows.iter().map(render_row).collect();
    let body = if report.layout.is_empty() {
        r#"<p class="empty">No profile result found in this workunit.</p>"#.to_string()
    } else {
        rows
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Data Profile Report{title_suffix}</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        <header>
            <h1>Data Profile Report</h1>
            <p class="meta">{meta}</p>
        </header>
        {body}
        <footer>Generated {generated_at}</footer>
    </div>
</body>
</html>"#,
        title_suffix = report
            .wuid
            .as_deref()
            .map(|wuid| format!(" - {}", escape_html(wuid)))
            .unwrap_or_default(),
        css = inline_css(),
        meta = header_meta(report),
        body = body,
        generated_at = escape_html(&report.generated_at),
    )
}

fn header_meta(report: &ProfileReport) -> String {
    match (&report.wuid, &report.result_name) {
        (Some(wuid), Some(name)) => format!(
            "Workunit {} &middot; result {}",
            escape_html(wuid),
            escape_html(name)
        ),
        (Some(wuid), None) => format!("Workunit {}", escape_html(wuid)),
        _ => "Local row dump".to_string(),
    }
}

fn render_row(row: &dpr_layout::RowLayout) -> String {
    format!(
        r#"<div class="profile-row">
            <div class="cell description">{description}</div>
            <div class="cell stats">{stats}</div>
            <div class="cell secondary">{secondary}</div>
        </div>"#,
        description = render_description(&row.description),
        stats = render_cell(&row.stats),
        secondary = render_cell(&row.secondary),
    )
}

fn render_cell(cell: &CellDescriptor) -> String {
    match cell {
        CellDescriptor::AttributeDesc(desc) => render_description(desc),
        CellDescriptor::Stats(StatsCell::Numeric(summary)) => render_numeric_stats(summary),
        CellDescriptor::Stats(StatsCell::Lengths(lengths)) => format!(
            r#"<table class="stats-table">
                <tr><th>Min Length</th><td>{}</td></tr>
                <tr><th>Avg Length</th><td>{}</td></tr>
                <tr><th>Max Length</th><td>{}</td></tr>
            </table>"#,
            lengths.min_length, lengths.ave_length, lengths.max_length,
        ),
        CellDescriptor::Breakdown { rows, paged } => {
            render_listing("Cardinality Breakdown", *paged, rows.iter().map(value_pair))
        }
        CellDescriptor::PopularPatterns { rows } => {
            render_listing("Popular Patterns", true, rows.iter().map(pattern_pair))
        }
        CellDescriptor::Quartile(summary) => render_candlestick(summary),
        CellDescriptor::NotAvailable => r#"<span class="na">Not Available</span>"#.to_string(),
    }
}

fn render_description(desc: &AttributeDescCell) -> String {
    let cardinality_percent = desc
        .cardinality_percent
        .as_deref()
        .map(|percent| format!("~{percent}"))
        .unwrap_or_else(|| "N/A".to_string());
    format!(
        r#"<span class="attribute">{attribute}</span><br/>
        <span class="type-badge">{given_icon} {given} (given)</span>
        <span class="type-badge">{best_icon} {best} (best)</span>
        <table class="stats-table">
            <tr><th>Cardinality</th><td>{cardinality}</td><td>{cardinality_percent}</td></tr>
            <tr><th>Filled</th><td>{fill_count}</td><td>{fill_rate}%</td></tr>
        </table>"#,
        attribute = escape_html(&desc.attribute),
        given_icon = icon_glyph(desc.given_type.icon),
        given = escape_html(&desc.given_type.type_name),
        best_icon = icon_glyph(desc.best_type.icon),
        best = escape_html(&desc.best_type.type_name),
        cardinality = desc.cardinality,
        cardinality_percent = escape_html(&cardinality_percent),
        fill_count = desc.fill_count,
        fill_rate = escape_html(&desc.fill_rate),
    )
}

fn render_numeric_stats(summary: &NumericSummary) -> String {
    format!(
        r#"<table class="stats-table">
            <tr><th>Mean</th><td>{mean}</td><td></td></tr>
            <tr><th>Std. Deviation</th><td>{std_dev}</td><td></td></tr>
            <tr><th>Quantiles</th><td>{min}</td><td>Min</td></tr>
            <tr><th></th><td>{lq}</td><td>25%</td></tr>
            <tr><th></th><td>{median}</td><td>50%</td></tr>
            <tr><th></th><td>{uq}</td><td>75%</td></tr>
            <tr><th></th><td>{max}</td><td>Max</td></tr>
        </table>"#,
        mean = format_stat(summary.mean),
        std_dev = format_stat(summary.std_dev),
        min = format_stat(summary.min),
        lq = format_stat(summary.lower_quartile),
        median = format_stat(summary.median),
        uq = format_stat(summary.upper_quartile),
        max = format_stat(summary.max),
    )
}

fn render_listing<I>(title: &str, paged: bool, pairs: I) -> String
where
    I: Iterator<Item = (String, u64)>,
{
    let rows: String = pairs
        .map(|(label, count)| {
            format!(
                "<tr><td>{}</td><td>{}</td></tr>",
                escape_html(&label),
                count
            )
        })
        .collect();
    let class = if paged {
        "listing-table paged"
    } else {
        "listing-table"
    };
    format!(
        r#"<table class="{class}">
            <thead><tr><th>{title}</th><th></th></tr></thead>
            <tbody>{rows}</tbody>
        </table>"#,
        class = class,
        title = escape_html(title),
        rows = rows,
    )
}

fn value_pair(entry: &ValueCount) -> (String, u64) {
    (entry.value.clone(), entry.rec_count)
}

fn pattern_pair(entry: &PatternCount) -> (String, u64) {
    (entry.data_pattern.clone(), entry.rec_count)
}

/// Inline SVG candlestick: whiskers at min and max, a box between the
/// quartiles, the median as a vertical line through the box.
fn render_candlestick(summary: &NumericSummary) -> String {
    let span = summary.max - summary.min;
    let usable = SVG_WIDTH - 2.0 * SVG_EDGE_PADDING;
    let x = |value: f64| -> f64 {
        if span <= 0.0 {
            SVG_WIDTH / 2.0
        } else {
            SVG_EDGE_PADDING + (value - summary.min) / span * usable
        }
    };
    let mid = SVG_HEIGHT / 2.0;
    let (top, bottom) = (mid - SVG_DATA_HEIGHT / 2.0, mid + SVG_DATA_HEIGHT / 2.0);
    let (x_min, x_lq, x_med, x_max) = (
        x(summary.min),
        x(summary.lower_quartile),
        x(summary.median),
        x(summary.max),
    );
    let box_width = (x(summary.upper_quartile) - x_lq).max(1.0);
    format!(
        r#"<svg class="candlestick" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
            <line x1="{x_min}" y1="{mid}" x2="{x_max}" y2="{mid}" stroke="{color}" stroke-width="1"/>
            <line x1="{x_min}" y1="{top}" x2="{x_min}" y2="{bottom}" stroke="{color}" stroke-width="1"/>
            <line x1="{x_max}" y1="{top}" x2="{x_max}" y2="{bottom}" stroke="{color}" stroke-width="1"/>
            <rect x="{x_lq}" y="{top}" width="{box_width}" height="{dh}" rx="1" fill="{fill}" stroke="{color}" stroke-width="1"/>
            <line x1="{x_med}" y1="{top}" x2="{x_med}" y2="{bottom}" stroke="{color}" stroke-width="1"/>
            <text x="{x_min}" y="{label_y}" text-anchor="middle">{min}</text>
            <text x="{x_max}" y="{label_y}" text-anchor="middle">{max}</text>
        </svg>"#,
        w = SVG_WIDTH,
        h = SVG_HEIGHT,
        mid = mid,
        top = top,
        bottom = bottom,
        dh = SVG_DATA_HEIGHT,
        label_y = SVG_HEIGHT - 4.0,
        x_min = x_min,
        x_lq = x_lq,
        x_med = x_med,
        x_max = x_max,
        box_width = box_width,
        color = PRIMARY_COLOR,
        fill = BLUE_COLOR,
        min = format_stat(summary.min),
        max = format_stat(summary.max),
    )
}

fn icon_glyph(icon: IconKind) -> &'static str {
    match icon {
        IconKind::String => "a",
        IconKind::Numeric => "#",
    }
}

fn inline_css() -> String {
    format!(
        r#"
* {{ box-sizing: border-box; margin: 0; padding: 0; }}
body {{
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    color: {primary};
    background: #fff;
}}
.container {{ max-width: 1200px; margin: 0 auto; padding: 1.5rem; }}
header {{ margin-bottom: 1.5rem; border-bottom: 2px solid {secondary}; padding-bottom: 0.75rem; }}
header h1 {{ font-size: 1.6rem; }}
header .meta {{ color: {primary}; font-size: {secondary_font}px; }}
.profile-row {{
    display: grid;
    grid-template-columns: 1fr 1fr 1fr;
    gap: 12px;
    min-height: {row_height}px;
    border-bottom: 1px solid {secondary};
    padding: 8px 0;
}}
.cell {{ overflow: hidden; }}
.attribute {{ padding-top: 6px; display: inline-block; font-size: {primary_font}px; }}
.type-badge {{
    color: {primary};
    padding: 8px;
    display: inline-block;
    font-size: {secondary_font}px;
    margin-top: 4px;
    border: 1px solid {secondary};
    border-radius: 4px;
    background-color: {offwhite};
}}
.stats-table {{ border-collapse: collapse; font-size: {secondary_font}px; margin-top: 6px; }}
.stats-table th {{ text-align: left; font-weight: bold; padding-right: 10px; }}
.stats-table td {{ padding-right: 10px; }}
.listing-table {{ border-collapse: collapse; font-size: {secondary_font}px; width: 100%; }}
.listing-table thead th {{ text-align: left; font-size: {secondary_font}px; }}
.listing-table td {{ padding: 1px 8px 1px 0; }}
.listing-table.paged tbody {{ display: block; max-height: {row_height}px; overflow-y: auto; }}
.candlestick text {{ font-size: 10px; fill: {primary}; }}
.na {{ color: {secondary}; font-size: {secondary_font}px; }}
.empty {{ color: {primary}; font-size: {primary_font}px; padding: 2rem 0; }}
footer {{ margin-top: 1.5rem; color: {secondary}; font-size: 12px; }}
"#,
        primary = PRIMARY_COLOR,
        secondary = SECONDARY_COLOR,
        offwhite = OFFWHITE_COLOR,
        row_height = ROW_HEIGHT,
        primary_font = PRIMARY_FONT_SIZE,
        secondary_font = SECONDARY_FONT_SIZE,
    )
}

/// Minimal HTML escaping for text interpolated into markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
