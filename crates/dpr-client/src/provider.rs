//! Result provider seam and the fetch-once cache.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{Mutex, OnceCell};
use tracing::debug;

use dpr_model::{ProfileRow, ResultMeta};

use crate::error::Result;

/// Source of workunit result metadata and row data. The report stage only
/// talks to this trait, so tests run against in-memory fakes.
#[async_trait]
pub trait ResultProvider: Send + Sync {
    /// All result sets of the workunit, in service order.
    async fn fetch_results(&self) -> Result<Vec<ResultMeta>>;

    /// Row data of one result set, by result name.
    async fn fetch_rows(&self, result_name: &str) -> Result<Vec<ProfileRow>>;
}

/// Fetch-once wrapper: repeated render calls share one outstanding
/// request instead of re-triggering the fetch. A render invoked while the
/// first fetch is still in flight awaits that same request.
pub struct CachedProvider<P> {
    inner: P,
    results: OnceCell<Vec<ResultMeta>>,
    rows: Mutex<HashMap<String, Vec<ProfileRow>>>,
}

impl<P: ResultProvider> CachedProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            results: OnceCell::new(),
            rows: Mutex::new(HashMap::new()),
        }
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

#[async_trait]
impl<P: ResultProvider> ResultProvider for CachedProvider<P> {
    async fn fetch_results(&self) -> Result<Vec<ResultMeta>> {
        let results = self
            .results
            .get_or_try_init(|| self.inner.fetch_results())
            .await?;
        Ok(results.clone())
    }

    async fn fetch_rows(&self, result_name: &str) -> Result<Vec<ProfileRow>> {
        // The lock is held across the fetch so a concurrent call for the
        // same result awaits the first request instead of issuing its own.
        let mut cache = self.rows.lock().await;
        if let Some(rows) = cache.get(result_name) {
            debug!(result_name, "row cache hit");
            return Ok(rows.clone());
        }
        let rows = self.inner.fetch_rows(result_name).await?;
        cache.insert(result_name.to_string(), rows.clone());
        Ok(rows)
    }
}
