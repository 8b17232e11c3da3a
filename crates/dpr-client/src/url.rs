//! Report URL parsing.
//!
//! The report is hosted at
//! `<baseUrl>/WsWorkunits/res/<wuid>/report/res/index.html`; the base URL
//! and workunit id are recovered by splitting on those two literal
//! markers. The hosting environment depends on this exact contract: the
//! first marker is required, while a missing second marker leaves the
//! whole remainder as the wuid.

use crate::error::{ClientError, Result};

const WS_WORKUNITS_MARKER: &str = "/WsWorkunits/res/";
const REPORT_SUFFIX_MARKER: &str = "/report/res/index.html";

/// Base URL and workunit id extracted from a hosted report URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportUrl {
    pub base_url: String,
    pub wuid: String,
}

impl ReportUrl {
    pub fn parse(url: &str) -> Result<Self> {
        let (base_url, rest) = url.split_once(WS_WORKUNITS_MARKER).ok_or_else(|| {
            ClientError::Url(format!("missing '{WS_WORKUNITS_MARKER}' in '{url}'"))
        })?;
        let wuid = match rest.split_once(REPORT_SUFFIX_MARKER) {
            Some((wuid, _)) => wuid,
            None => rest,
        };
        Ok(Self {
            base_url: base_url.to_string(),
            wuid: wuid.to_string(),
        })
    }
}
