use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use dpr_client::{CachedProvider, WorkunitClient};
use dpr_model::ProfileRow;
use dpr_report::{
    ProfileReport, build_report_with_threshold, render_html, render_json, render_table,
};

use crate::cli::{OutputFormatArg, RenderArgs, ReportArgs};

pub async fn run_report(args: &ReportArgs) -> Result<()> {
    let client = WorkunitClient::from_report_url(&args.url).context("parse report url")?;
    let wuid = client.wuid().to_string();
    info!(wuid = %wuid, "fetching profile results");

    let provider = CachedProvider::new(client);
    let report = build_report_with_threshold(&provider, Some(&wuid), args.threshold)
        .await
        .context("build report")?;
    if report.is_empty() {
        info!(wuid = %wuid, "workunit has no profile result");
    }
    emit(&report, args.output_format, args.out.as_deref())
}

pub fn run_render(args: &RenderArgs) -> Result<()> {
    let rows = load_rows(&args.rows)
        .with_context(|| format!("load rows from {}", args.rows.display()))?;
    info!(row_count = rows.len(), "rows loaded");
    let report = ProfileReport::from_rows(&rows);
    emit(&report, args.output_format, args.out.as_deref())
}

/// Accept a bare row array or the service's `{"Row": [...]}` wrapper.
fn load_rows(path: &Path) -> Result<Vec<ProfileRow>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RowDump {
        Wrapped {
            #[serde(rename = "Row")]
            row: Vec<ProfileRow>,
        },
        Bare(Vec<ProfileRow>),
    }

    let text = std::fs::read_to_string(path)?;
    let dump: RowDump = serde_json::from_str(&text)?;
    Ok(match dump {
        RowDump::Wrapped { row } => row,
        RowDump::Bare(rows) => rows,
    })
}

fn emit(report: &ProfileReport, format: OutputFormatArg, out: Option<&Path>) -> Result<()> {
    let rendered = match format {
        OutputFormatArg::Table => render_table(report).to_string(),
        OutputFormatArg::Html => render_html(report),
        OutputFormatArg::Json => render_json(report)?,
    };
    match out {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("write report to {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
