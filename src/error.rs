//! Error kinds raised while extracting compliance tables
//!
//! Only `InvalidSelector` and `InvalidRequest` stop a run. The table and row
//! kinds are reported through events and counted in the run report.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrapeError {
    /// Table label matches none of the requested formats
    #[error("table label {label:?} matches no requested format")]
    UnrecognizedFormat { label: String },

    #[error("table {table_id} has no rows")]
    EmptyTable { table_id: String },

    /// Row is too short for the format's service/SDK columns
    #[error("row {row} of table {table_id} has {cells} cells, format needs {needed}")]
    MalformedRow {
        table_id: String,
        row: usize,
        cells: usize,
        needed: usize,
    },

    #[error("row {row} of table {table_id} has no status column {column}")]
    MissingStatusColumn {
        table_id: String,
        row: usize,
        column: usize,
    },

    #[error("invalid table selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("invalid scrape request: {0}")]
    InvalidRequest(String),
}
