//! Shared pieces of the benchmark report tools: loading loosely formatted
//! result CSVs, normalizing them, aggregating runs and rendering charts.

pub mod aggregate;
pub mod columns;
pub mod error;
pub mod graph;
pub mod loader;
pub mod logging;
pub mod overview;
pub mod prompt;
pub mod render;
pub mod representation;
pub mod size;
pub mod stats;
pub mod summary;

pub use error::{ReportError, Result};
pub use loader::RawTable;
pub use representation::Representation;
