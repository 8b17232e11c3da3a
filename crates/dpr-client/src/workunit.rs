//! HTTP client for the WsWorkunits service.
//!
//! Fetches the result list (`WUInfo.json`) and row data (`WUResult.json`)
//! for one workunit. The service's envelope shapes stay private to this
//! module; callers only see [`ResultMeta`] and [`ProfileRow`].

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use dpr_model::{ProfileRow, ResultMeta, ResultSchema, SchemaColumn};

use crate::error::{ClientError, Result};
use crate::provider::ResultProvider;
use crate::url::ReportUrl;

/// Upper bound on rows fetched per result. A profile result has one row
/// per source column, so this is generous.
const MAX_RESULT_ROWS: u32 = 10_000;

pub struct WorkunitClient {
    http: reqwest::Client,
    base_url: String,
    wuid: String,
}

impl WorkunitClient {
    pub fn new(base_url: &str, wuid: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            wuid: wuid.to_string(),
        })
    }

    /// Attach to the workunit named by a hosted report URL.
    pub fn from_report_url(url: &str) -> Result<Self> {
        let parsed = ReportUrl::parse(url)?;
        Self::new(&parsed.base_url, &parsed.wuid)
    }

    pub fn wuid(&self) -> &str {
        &self.wuid
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}/{path}", self.base_url);
        debug!(%url, "workunit service request");
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ResultProvider for WorkunitClient {
    async fn fetch_results(&self) -> Result<Vec<ResultMeta>> {
        let envelope: WuInfoEnvelope = self
            .get_json(
                "WsWorkunits/WUInfo.json",
                &[("Wuid", self.wuid.as_str()), ("IncludeResults", "1")],
            )
            .await?;
        let workunit = envelope
            .response
            .workunit
            .ok_or_else(|| ClientError::Api(format!("workunit {} not found", self.wuid)))?;
        let results = workunit
            .results
            .map(|list| list.results)
            .unwrap_or_default();
        Ok(results.into_iter().map(EclResult::into_meta).collect())
    }

    async fn fetch_rows(&self, result_name: &str) -> Result<Vec<ProfileRow>> {
        let count = MAX_RESULT_ROWS.to_string();
        let envelope: WuResultEnvelope = self
            .get_json(
                "WsWorkunits/WUResult.json",
                &[
                    ("Wuid", self.wuid.as_str()),
                    ("ResultName", result_name),
                    ("Count", count.as_str()),
                ],
            )
            .await?;
        let result = envelope
            .response
            .result
            .ok_or_else(|| ClientError::Api(format!("result '{result_name}' has no data")))?;
        Ok(result.row)
    }
}

#[derive(Debug, Deserialize)]
struct WuInfoEnvelope {
    #[serde(rename = "WUInfoResponse")]
    response: WuInfoResponse,
}

#[derive(Debug, Deserialize)]
struct WuInfoResponse {
    #[serde(rename = "Workunit")]
    workunit: Option<WorkunitInfo>,
}

#[derive(Debug, Deserialize)]
struct WorkunitInfo {
    #[serde(rename = "Results")]
    results: Option<EclResultList>,
}

#[derive(Debug, Deserialize)]
struct EclResultList {
    #[serde(rename = "ECLResult", default)]
    results: Vec<EclResult>,
}

#[derive(Debug, Deserialize)]
struct EclResult {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Sequence", default)]
    sequence: u32,
    #[serde(rename = "ECLSchemas")]
    schemas: Option<EclSchemaList>,
}

impl EclResult {
    fn into_meta(self) -> ResultMeta {
        let columns = self
            .schemas
            .map(|list| list.items)
            .unwrap_or_default()
            .into_iter()
            .map(|item| SchemaColumn {
                column_name: item.column_name,
                column_type: item.column_type,
            })
            .collect();
        ResultMeta {
            name: self.name,
            sequence: self.sequence,
            schema: ResultSchema::new(columns),
        }
    }
}

#[derive(Debug, Deserialize)]
struct EclSchemaList {
    #[serde(rename = "ECLSchemaItem", default)]
    items: Vec<EclSchemaItem>,
}

#[derive(Debug, Deserialize)]
struct EclSchemaItem {
    #[serde(rename = "ColumnName", default)]
    column_name: String,
    #[serde(rename = "ColumnType")]
    column_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WuResultEnvelope {
    #[serde(rename = "WUResultResponse")]
    response: WuResultResponse,
}

#[derive(Debug, Deserialize)]
struct WuResultResponse {
    #[serde(rename = "Result")]
    result: Option<WuResultRows>,
}

#[derive(Debug, Deserialize)]
struct WuResultRows {
    #[serde(rename = "Row", default)]
    row: Vec<ProfileRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wuinfo_envelope_maps_to_result_meta() {
        let envelope: WuInfoEnvelope = serde_json::from_value(serde_json::json!({
            "WUInfoResponse": {
                "Workunit": {
                    "Results": {
                        "ECLResult": [
                            {
                                "Name": "profileResults",
                                "Sequence": 0,
                                "ECLSchemas": {
                                    "ECLSchemaItem": [
                                        {"ColumnName": "attribute", "ColumnType": "string"},
                                        {"ColumnName": "rec_count", "ColumnType": "integer8"}
                                    ]
                                }
                            }
                        ]
                    }
                }
            }
        }))
        .expect("deserialize envelope");
        let workunit = envelope.response.workunit.expect("workunit");
        let metas: Vec<ResultMeta> = workunit
            .results
            .expect("results")
            .results
            .into_iter()
            .map(EclResult::into_meta)
            .collect();
        assert_eq!(metas.len(), 1);
        assert_eq!(metas[0].name, "profileResults");
        let names: Vec<&str> = metas[0].schema.column_names().collect();
        assert_eq!(names, vec!["attribute", "rec_count"]);
    }

    #[test]
    fn wuresult_envelope_flattens_rows() {
        let envelope: WuResultEnvelope = serde_json::from_value(serde_json::json!({
            "WUResultResponse": {
                "Result": {
                    "Row": [
                        {"attribute": "age", "is_numeric": true}
                    ]
                }
            }
        }))
        .expect("deserialize envelope");
        let rows = envelope.response.result.expect("result").row;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].attribute, "age");
    }

    #[test]
    fn missing_results_section_is_empty_not_an_error() {
        let envelope: WuInfoEnvelope = serde_json::from_value(serde_json::json!({
            "WUInfoResponse": {"Workunit": {}}
        }))
        .expect("deserialize envelope");
        assert!(envelope.response.workunit.expect("workunit").results.is_none());
    }
}
