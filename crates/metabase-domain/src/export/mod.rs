//! Export of a source instance's collections, cards and dashboards.
//!
//! Produces a self-contained graph whose identifiers are renumbered from 1
//! and whose cross-references all resolve inside the graph.

pub mod exporter;
pub mod models;

pub use exporter::{Exporter, Sources};
pub use models::{ExportOptions, ExportReport, ExportedState};
