//! Report generation for workunit column profiles.
//!
//! Assembles a [`ProfileReport`] from a result provider (fetch, classify,
//! lay out) and renders it as a terminal table, a self-contained HTML
//! document, or JSON descriptors.

pub mod html;
pub mod report;
pub mod terminal;

pub use html::render_html;
pub use report::{ProfileReport, build_report, build_report_with_threshold, render_json};
pub use terminal::render_table;
