//! Client for the remote workunit service.
//!
//! Parses hosted report URLs, fetches result metadata and profile rows
//! over HTTP, and caches the fetch so repeated renders reuse one request.

pub mod error;
pub mod provider;
pub mod url;
pub mod workunit;

pub use error::{ClientError, Result};
pub use provider::{CachedProvider, ResultProvider};
pub use url::ReportUrl;
pub use workunit::WorkunitClient;
