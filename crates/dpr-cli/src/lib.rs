//! CLI library components for the data-profile report tool.

pub mod logging;
