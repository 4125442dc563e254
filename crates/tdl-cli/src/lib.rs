//! CLI library components for Tabular Data Lens.

pub mod logging;
pub mod report;
