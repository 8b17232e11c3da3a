use async_trait::async_trait;

use dpr_client::ResultProvider;
use dpr_model::{ProfileRow, ResultMeta, ResultSchema};
use dpr_report::{ProfileReport, build_report, render_html, render_json, render_table};

/// Serves canned results: one ordinary result followed by one
/// profile-shaped result with two rows.
struct FixtureProvider {
    results: Vec<ResultMeta>,
    rows: Vec<ProfileRow>,
}

impl FixtureProvider {
    fn with_profile() -> Self {
        Self {
            results: vec![
                ResultMeta {
                    name: "rawData".to_string(),
                    sequence: 0,
                    schema: ResultSchema::from_names(["firstname", "lastname", "age"]),
                },
                ResultMeta {
                    name: "profileResults".to_string(),
                    sequence: 1,
                    schema: ResultSchema::from_names([
                        "attribute",
                        "given_attribute_type",
                        "best_attribute_type",
                        "rec_count",
                        "fill_count",
                        "fill_rate",
                        "cardinality",
                        "is_numeric",
                    ]),
                },
            ],
            rows: fixture_rows(),
        }
    }

    fn without_profile() -> Self {
        Self {
            results: vec![ResultMeta {
                name: "rawData".to_string(),
                sequence: 0,
                schema: ResultSchema::from_names(["firstname", "lastname", "age"]),
            }],
            rows: Vec::new(),
        }
    }
}

#[async_trait]
impl ResultProvider for FixtureProvider {
    async fn fetch_results(&self) -> dpr_client::Result<Vec<ResultMeta>> {
        Ok(self.results.clone())
    }

    async fn fetch_rows(&self, result_name: &str) -> dpr_client::Result<Vec<ProfileRow>> {
        assert_eq!(result_name, "profileResults");
        Ok(self.rows.clone())
    }
}

fn fixture_rows() -> Vec<ProfileRow> {
    serde_json::from_value(serde_json::json!([
        {
            "attribute": "age",
            "given_attribute_type": "integer8",
            "best_attribute_type": "integer1",
            "rec_count": 1000,
            "fill_count": 1000,
            "fill_rate": 100.0,
            "cardinality": 73,
            "is_numeric": true,
            "numeric_min": 0.0,
            "numeric_max": 93.0,
            "numeric_mean": 42.5,
            "numeric_std_dev": 11.25,
            "numeric_lower_quartile": 30.0,
            "numeric_median": 41.0,
            "numeric_upper_quartile": 55.0
        },
        {
            "attribute": "state",
            "given_attribute_type": "string2",
            "best_attribute_type": "string2",
            "rec_count": 1000,
            "fill_count": 800,
            "fill_rate": 80.0,
            "cardinality": 5,
            "cardinality_breakdown": {"Row": [
                {"value": "FL ", "rec_count": 300},
                {"value": "NY", "rec_count": 250},
                {"value": "CA", "rec_count": 150},
                {"value": "TX", "rec_count": 60},
                {"value": "WA", "rec_count": 40}
            ]},
            "is_numeric": false,
            "min_length": 2,
            "max_length": 2,
            "ave_length": 2
        }
    ]))
    .expect("fixture rows")
}

#[tokio::test]
async fn build_report_picks_first_profile_result_in_fetch_order() {
    let provider = FixtureProvider::with_profile();
    let report = build_report(&provider, Some("W1")).await.expect("report");
    assert_eq!(report.result_name.as_deref(), Some("profileResults"));
    assert_eq!(report.layout.rows.len(), 2);
    assert_eq!(report.layout.rows[0].attribute, "age");
    assert!(report.layout.columns.show_quartile);
    assert!(report.layout.columns.show_breakdown);
    assert!(!report.layout.columns.show_popular_patterns);
}

#[tokio::test]
async fn workunit_without_profile_result_yields_empty_report() {
    let provider = FixtureProvider::without_profile();
    let report = build_report(&provider, Some("W1")).await.expect("report");
    assert!(report.is_empty());
    assert_eq!(report.result_name, None);
}

#[tokio::test]
async fn terminal_render_toggles_columns_and_placeholders() {
    let provider = FixtureProvider::with_profile();
    let report = build_report(&provider, Some("W1")).await.expect("report");
    let rendered = render_table(&report).to_string();
    assert!(rendered.contains("Quartiles"));
    assert!(rendered.contains("Breakdown"));
    assert!(!rendered.contains("Popular Patterns"));
    // The numeric row has no breakdown, so its breakdown cell is a
    // placeholder rather than a hidden column.
    assert!(rendered.contains("Not Available"));
    assert!(rendered.contains("FL"));
}

#[tokio::test]
async fn html_render_is_self_contained() {
    let provider = FixtureProvider::with_profile();
    let report = build_report(&provider, Some("W20240115-101530"))
        .await
        .expect("report");
    let html = render_html(&report);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("W20240115-101530"));
    assert!(html.contains("age"));
    assert!(html.contains("<svg"));
    assert!(html.contains("Cardinality Breakdown"));
    // Five breakdown entries exceed the paging threshold.
    assert!(html.contains("listing-table paged"));
}

#[tokio::test]
async fn json_render_exposes_descriptor_tags() {
    let provider = FixtureProvider::with_profile();
    let report = build_report(&provider, Some("W1")).await.expect("report");
    let json = render_json(&report).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse json");
    assert_eq!(value["layout"]["rows"][0]["secondary"]["cell"], "quartile");
    assert_eq!(value["layout"]["rows"][1]["secondary"]["cell"], "breakdown");
}

#[test]
fn offline_report_from_rows_has_no_workunit() {
    let report = ProfileReport::from_rows(&fixture_rows());
    assert_eq!(report.wuid, None);
    assert_eq!(report.layout.rows.len(), 2);
}
