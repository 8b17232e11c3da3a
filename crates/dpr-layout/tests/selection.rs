use dpr_layout::{
    CellDescriptor, CharWidthMeasure, IconKind, StatsCell, attribute_type_icon, breakdown_cell,
    cardinality_percent, column_width, display_fill_rate, layout_row, layout_rows,
    select_secondary, select_stats, visible_columns,
};
use dpr_model::{PatternCount, ProfileRow, ValueCount};
use proptest::prelude::{ProptestConfig, proptest};

fn text_row(attribute: &str) -> ProfileRow {
    ProfileRow {
        attribute: attribute.to_string(),
        given_attribute_type: "string12".to_string(),
        best_attribute_type: "string12".to_string(),
        rec_count: 1000,
        fill_count: 1000,
        fill_rate: 100.0,
        cardinality: 250,
        cardinality_breakdown: Vec::new(),
        is_numeric: false,
        numeric_min: None,
        numeric_max: None,
        numeric_mean: None,
        numeric_std_dev: None,
        numeric_lower_quartile: None,
        numeric_median: None,
        numeric_upper_quartile: None,
        min_length: Some(2),
        max_length: Some(24),
        ave_length: Some(9),
        popular_patterns: Vec::new(),
    }
}

fn numeric_row(attribute: &str) -> ProfileRow {
    ProfileRow {
        attribute: attribute.to_string(),
        given_attribute_type: "integer8".to_string(),
        best_attribute_type: "integer1".to_string(),
        is_numeric: true,
        numeric_min: Some(0.0),
        numeric_max: Some(93.0),
        numeric_mean: Some(42.5),
        numeric_std_dev: Some(11.25),
        numeric_lower_quartile: Some(30.0),
        numeric_median: Some(41.0),
        numeric_upper_quartile: Some(55.0),
        min_length: None,
        max_length: None,
        ave_length: None,
        ..text_row(attribute)
    }
}

fn breakdown(values: &[(&str, u64)]) -> Vec<ValueCount> {
    values
        .iter()
        .map(|(value, rec_count)| ValueCount {
            value: (*value).to_string(),
            rec_count: *rec_count,
        })
        .collect()
}

fn patterns(values: &[(&str, u64)]) -> Vec<PatternCount> {
    values
        .iter()
        .map(|(data_pattern, rec_count)| PatternCount {
            data_pattern: (*data_pattern).to_string(),
            rec_count: *rec_count,
        })
        .collect()
}

#[test]
fn type_icon_matches_string_prefix() {
    assert_eq!(attribute_type_icon("string40"), IconKind::String);
    assert_eq!(attribute_type_icon("integer8"), IconKind::Numeric);
    // Shorter than the six-character prefix can never match.
    assert_eq!(attribute_type_icon("str"), IconKind::Numeric);
}

#[test]
fn fill_rate_exact_bounds_render_as_integers() {
    assert_eq!(display_fill_rate(0.0), "0");
    assert_eq!(display_fill_rate(100.0), "100");
}

#[test]
fn fill_rate_otherwise_renders_one_decimal() {
    assert_eq!(display_fill_rate(42.567), "42.6");
    assert_eq!(display_fill_rate(99.0), "99.0");
}

#[test]
fn cardinality_percent_rounds_to_whole_percent() {
    assert_eq!(cardinality_percent(50, 200).as_deref(), Some("25%"));
}

#[test]
fn cardinality_percent_rounds_halves_away_from_zero() {
    // 25 of 200 is exactly 12.5%; it must display as 13, not the
    // formatter's ties-to-even 12.
    assert_eq!(cardinality_percent(25, 200).as_deref(), Some("13%"));
}

#[test]
fn fill_rate_halves_round_away_from_zero() {
    assert_eq!(display_fill_rate(12.25), "12.3");
}

#[test]
fn cardinality_percent_with_zero_fill_count_is_none() {
    assert_eq!(cardinality_percent(50, 0), None);
}

#[test]
fn breakdown_takes_priority_over_quartile() {
    let mut row = numeric_row("age");
    row.cardinality_breakdown = breakdown(&[("0-18", 120), ("19-65", 700)]);
    let cell = select_secondary(&row).expect("secondary cell");
    assert!(matches!(cell, CellDescriptor::Breakdown { .. }));
}

#[test]
fn numeric_row_without_breakdown_gets_quartile() {
    let cell = select_secondary(&numeric_row("age")).expect("secondary cell");
    assert!(matches!(cell, CellDescriptor::Quartile(_)));
}

#[test]
fn patterns_win_when_no_breakdown_and_not_numeric() {
    let mut row = text_row("zip");
    row.popular_patterns = patterns(&[("99999", 800), ("99999-9999", 150)]);
    let cell = select_secondary(&row).expect("secondary cell");
    assert!(matches!(cell, CellDescriptor::PopularPatterns { .. }));
}

#[test]
fn nothing_applicable_yields_placeholder() {
    let cell = select_secondary(&text_row("notes")).expect("secondary cell");
    assert!(cell.is_not_available());
}

#[test]
fn small_breakdown_is_simple_large_is_paged() {
    let mut row = text_row("state");
    row.cardinality_breakdown = breakdown(&[("FL", 1), ("NY", 2), ("CA", 3), ("TX", 4)]);
    let CellDescriptor::Breakdown { paged, .. } = breakdown_cell(&row) else {
        panic!("expected breakdown cell");
    };
    assert!(!paged);

    row.cardinality_breakdown.push(ValueCount {
        value: "WA".to_string(),
        rec_count: 5,
    });
    let CellDescriptor::Breakdown { paged, rows } = breakdown_cell(&row) else {
        panic!("expected breakdown cell");
    };
    assert!(paged);
    assert_eq!(rows.len(), 5);
}

#[test]
fn breakdown_values_are_trimmed() {
    let mut row = text_row("state");
    row.cardinality_breakdown = breakdown(&[("FL   ", 12)]);
    let CellDescriptor::Breakdown { rows, .. } = breakdown_cell(&row) else {
        panic!("expected breakdown cell");
    };
    assert_eq!(rows[0].value, "FL");
}

#[test]
fn stats_cell_prefers_numeric_summary() {
    let cell = select_stats(&numeric_row("age")).expect("stats cell");
    let CellDescriptor::Stats(StatsCell::Numeric(summary)) = cell else {
        panic!("expected numeric stats");
    };
    assert_eq!(summary.mean, 42.5);
}

#[test]
fn stats_cell_uses_lengths_for_pattern_rows() {
    let mut row = text_row("city");
    row.popular_patterns = patterns(&[("Aaaaaa", 400)]);
    let cell = select_stats(&row).expect("stats cell");
    assert!(matches!(
        cell,
        CellDescriptor::Stats(StatsCell::Lengths(_))
    ));
}

#[test]
fn stats_cell_falls_back_to_description() {
    let cell = select_stats(&text_row("notes")).expect("stats cell");
    let CellDescriptor::AttributeDesc(desc) = cell else {
        panic!("expected description fallback");
    };
    assert_eq!(desc.attribute, "notes");
}

#[test]
fn one_numeric_row_makes_quartile_column_visible_for_all() {
    let rows = vec![text_row("city"), numeric_row("age"), text_row("notes")];
    let columns = visible_columns(&rows);
    assert!(columns.show_quartile);
    assert!(!columns.show_breakdown);

    let layout = layout_rows(&rows);
    assert!(layout.columns.show_quartile);
    // Non-numeric rows keep a placeholder in the visible column.
    assert!(layout.rows[0].quartile.is_not_available());
    assert!(matches!(layout.rows[1].quartile, CellDescriptor::Quartile(_)));
    assert!(layout.rows[2].quartile.is_not_available());
}

#[test]
fn contract_violation_degrades_only_the_affected_row() {
    let mut broken = numeric_row("broken");
    broken.numeric_mean = None;
    let rows = vec![numeric_row("age"), broken, text_row("city")];

    let layout = layout_rows(&rows);
    assert_eq!(layout.rows.len(), 3);
    assert!(matches!(
        layout.rows[0].stats,
        CellDescriptor::Stats(StatsCell::Numeric(_))
    ));
    assert!(layout.rows[1].stats.is_not_available());
    assert!(layout.rows[1].secondary.is_not_available());
    assert!(matches!(
        layout.rows[2].stats,
        CellDescriptor::AttributeDesc(_)
    ));
}

#[test]
fn select_stats_surfaces_missing_numeric_fields_as_error() {
    let mut row = numeric_row("age");
    row.numeric_std_dev = None;
    let error = select_stats(&row).unwrap_err();
    assert!(error.to_string().contains("numeric_std_dev"));
}

#[test]
fn layout_row_fill_figures_land_in_description() {
    let mut row = numeric_row("age");
    row.fill_count = 200;
    row.cardinality = 50;
    row.fill_rate = 42.567;
    let layout = layout_row(&row);
    assert_eq!(layout.description.cardinality_percent.as_deref(), Some("25%"));
    assert_eq!(layout.description.fill_rate, "42.6");
}

#[test]
fn zero_fill_count_renders_placeholder_not_nan() {
    let mut row = text_row("empty");
    row.fill_count = 0;
    row.fill_rate = 0.0;
    let layout = layout_row(&row);
    assert_eq!(layout.description.cardinality_percent, None);
    assert_eq!(layout.description.fill_rate, "0");
}

#[test]
fn column_width_spans_widest_stat_across_rows() {
    let mut wide = numeric_row("wide");
    wide.numeric_std_dev = Some(1234.5678);
    let rows = vec![numeric_row("age"), wide];
    let width = column_width(&rows, &CharWidthMeasure::default());
    assert_eq!(width, "1234.5678".len() as u32);
}

#[test]
fn report_layout_serializes_to_tagged_json() {
    let layout = layout_rows(&[numeric_row("age")]);
    let json = serde_json::to_value(&layout).expect("serialize layout");
    assert_eq!(json["rows"][0]["secondary"]["cell"], "quartile");
    assert_eq!(json["columns"]["show_quartile"], true);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn fill_rate_display_stays_close_and_well_formed(rate in 0.0f64..=100.0f64) {
        let text = display_fill_rate(rate);
        let parsed: f64 = text.parse().expect("display form parses back");
        check_fill_rate_display(&text, rate, parsed);
    }
}

fn check_fill_rate_display(text: &str, rate: f64, parsed: f64) {
    if rate == 0.0 || rate == 100.0 {
        assert!(!text.contains('.'), "integer form expected for {rate}: {text}");
    } else {
        let decimals = text.split('.').nth(1).map(str::len);
        assert_eq!(decimals, Some(1), "one decimal expected for {rate}: {text}");
    }
    assert!((parsed - rate).abs() <= 0.05 + 1e-9);
}
