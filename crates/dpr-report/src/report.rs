//! Report assembly: fetch, classify, lay out.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use dpr_classify::{DEFAULT_PROFILE_FIELD_THRESHOLD, is_profile_result_with_threshold};
use dpr_client::ResultProvider;
use dpr_layout::{ReportLayout, layout_rows};

/// A fully laid-out profile report, ready for any renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileReport {
    /// Workunit id, when the rows came from the live service.
    pub wuid: Option<String>,
    /// Name of the result set the rows came from.
    pub result_name: Option<String>,
    /// RFC 3339 timestamp of report generation.
    pub generated_at: String,
    pub layout: ReportLayout,
}

impl ProfileReport {
    /// Lay out rows that are already in memory (offline rendering).
    pub fn from_rows(rows: &[dpr_model::ProfileRow]) -> Self {
        Self {
            wuid: None,
            result_name: None,
            generated_at: now_rfc3339(),
            layout: layout_rows(rows),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }
}

/// Fetch the workunit's results, pick the first profile-shaped one in
/// fetch order, and lay out its rows. A workunit without a profile result
/// yields an empty report rather than an error.
pub async fn build_report<P: ResultProvider>(provider: &P, wuid: Option<&str>) -> Result<ProfileReport> {
    build_report_with_threshold(provider, wuid, DEFAULT_PROFILE_FIELD_THRESHOLD).await
}

pub async fn build_report_with_threshold<P: ResultProvider>(
    provider: &P,
    wuid: Option<&str>,
    threshold: usize,
) -> Result<ProfileReport> {
    let results = provider
        .fetch_results()
        .await
        .context("fetch workunit results")?;
    let profile = results
        .iter()
        .find(|result| is_profile_result_with_threshold(&result.schema, threshold));

    let Some(meta) = profile else {
        warn!(result_count = results.len(), "no profile result in workunit");
        return Ok(ProfileReport {
            wuid: wuid.map(String::from),
            result_name: None,
            generated_at: now_rfc3339(),
            layout: ReportLayout::default(),
        });
    };

    let rows = provider
        .fetch_rows(&meta.name)
        .await
        .with_context(|| format!("fetch rows of result '{}'", meta.name))?;
    info!(
        result_name = %meta.name,
        row_count = rows.len(),
        "profile result laid out"
    );
    Ok(ProfileReport {
        wuid: wuid.map(String::from),
        result_name: Some(meta.name.clone()),
        generated_at: now_rfc3339(),
        layout: layout_rows(&rows),
    })
}

/// Serialize the descriptor tree for machine consumers.
pub fn render_json(report: &ProfileReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("serialize report")
}

fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
