//! Table format extractors
//!
//! Each format is a fixed column layout. One row-walking loop serves all of
//! them; the layouts only say where the service, SDK and status columns are
//! and which StandardName each status column stands for.

mod dodccsrg;
mod fedramp;
mod gsma;
mod standard;

pub use dodccsrg::DODCCSRG_LAYOUT;
pub use fedramp::FEDRAMP_LAYOUT;
pub use gsma::GSMA_LAYOUT;
pub use standard::{STANDARD_EXCLUSIONS, STANDARD_LAYOUT};

use std::fmt;
use std::str::FromStr;

use scraper::ElementRef;
use serde::{Deserialize, Serialize};

use crate::config::ScrapeConfig;
use crate::document::{row_cells, RawTable};
use crate::error::{Result, ScrapeError};
use crate::normalize::{cell_text, parse_sdk_list, status_of, CellStatus};

/// The table shapes published on the compliance pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    Standard,
    FedRamp,
    DodCcSrg,
    Gsma,
}

impl TableFormat {
    /// Specific formats first; `Standard` is the catch-all and goes last
    pub const ALL: [TableFormat; 4] = [
        TableFormat::FedRamp,
        TableFormat::DodCcSrg,
        TableFormat::Gsma,
        TableFormat::Standard,
    ];

    pub fn layout(self) -> &'static FormatLayout {
        match self {
            TableFormat::Standard => &STANDARD_LAYOUT,
            TableFormat::FedRamp => &FEDRAMP_LAYOUT,
            TableFormat::DodCcSrg => &DODCCSRG_LAYOUT,
            TableFormat::Gsma => &GSMA_LAYOUT,
        }
    }

    pub fn name(self) -> &'static str {
        self.layout().name
    }

    /// Whether a cleaned tab label belongs to this format
    pub fn matches(self, format_key: &str) -> bool {
        self.layout().matcher.accepts(format_key)
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableFormat {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(TableFormat::Standard),
            "fedramp" => Ok(TableFormat::FedRamp),
            "dodccsrg" | "dod_cc_srg" => Ok(TableFormat::DodCcSrg),
            "gsma" => Ok(TableFormat::Gsma),
            _ => Err(ScrapeError::InvalidRequest(format!("unknown table format: {}", s))),
        }
    }
}

/// Which tab labels a format accepts
#[derive(Debug, Clone, Copy)]
pub enum FormatMatch {
    Labels(&'static [&'static str]),
    /// Every label except the listed irregular ones
    AnyExcept(&'static [&'static str]),
}

impl FormatMatch {
    pub fn accepts(&self, format_key: &str) -> bool {
        match self {
            FormatMatch::Labels(labels) => labels.contains(&format_key),
            FormatMatch::AnyExcept(excluded) => !excluded.contains(&format_key),
        }
    }
}

/// Where a status column gets its StandardName from
#[derive(Debug, Clone, Copy)]
pub enum StandardSource {
    Fixed(&'static str),
    /// The cleaned tab label of the table itself
    TabLabel,
}

#[derive(Debug, Clone, Copy)]
pub struct StatusColumn {
    pub index: usize,
    pub standard: StandardSource,
}

impl StatusColumn {
    pub const fn fixed(index: usize, standard: &'static str) -> Self {
        Self {
            index,
            standard: StandardSource::Fixed(standard),
        }
    }

    fn standard_name(&self, format_key: &str) -> String {
        match self.standard {
            StandardSource::Fixed(name) => name.to_string(),
            StandardSource::TabLabel => format_key.to_string(),
        }
    }
}

/// Column layout of one table format
#[derive(Debug)]
pub struct FormatLayout {
    pub name: &'static str,
    pub matcher: FormatMatch,
    pub service_column: usize,
    /// `None` when the format has no SDK column
    pub sdk_column: Option<usize>,
    pub status_columns: &'static [StatusColumn],
}

impl FormatLayout {
    /// Cells a row needs before any status column is read
    fn required_cells(&self) -> usize {
        self.service_column.max(self.sdk_column.unwrap_or(0)) + 1
    }
}

/// One present status cell bound to its row's service and SDK data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extracted {
    pub standard: String,
    pub service: String,
    pub sdks: Vec<String>,
    pub status: CellStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Header and separator rows have zero or one `td`
    TooFewCells,
    BlankService,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Skipped { row: usize, reason: SkipReason },
    Failed(ScrapeError),
    /// May be empty when no status column is present
    Extracted { row: usize, tuples: Vec<Extracted> },
}

/// Named accessors over one row's cells, validated before use
struct RowCells<'a, 't> {
    table_id: &'t str,
    row: usize,
    cells: Vec<ElementRef<'a>>,
}

impl<'a> RowCells<'a, '_> {
    fn required(&self, column: usize, needed: usize) -> Result<ElementRef<'a>> {
        self.cells
            .get(column)
            .copied()
            .ok_or_else(|| ScrapeError::MalformedRow {
                table_id: self.table_id.to_string(),
                row: self.row,
                cells: self.cells.len(),
                needed,
            })
    }

    fn status(&self, column: usize) -> Result<ElementRef<'a>> {
        self.cells
            .get(column)
            .copied()
            .ok_or_else(|| ScrapeError::MissingStatusColumn {
                table_id: self.table_id.to_string(),
                row: self.row,
                column,
            })
    }
}

/// Walk every row of a table already classified as `format`.
///
/// `format_key` is the cleaned tab label. Rejects the table with
/// `UnrecognizedFormat` when the label does not belong to the format and with
/// `EmptyTable` when no row has more than one cell; row problems never abort
/// the table.
pub fn extract_table(
    table: &RawTable<'_>,
    format_key: &str,
    format: TableFormat,
    config: &ScrapeConfig,
) -> Result<Vec<RowOutcome>> {
    if !format.matches(format_key) {
        return Err(ScrapeError::UnrecognizedFormat {
            label: format_key.to_string(),
        });
    }

    let rows: Vec<Vec<ElementRef<'_>>> = table.rows().into_iter().map(row_cells).collect();

    // Header and separator rows alone do not make a table
    if rows.iter().all(|cells| cells.len() <= 1) {
        return Err(ScrapeError::EmptyTable {
            table_id: table.id.clone(),
        });
    }

    let layout = format.layout();
    let outcomes = rows
        .into_iter()
        .enumerate()
        .map(|(index, cells)| {
            if cells.len() <= 1 {
                return RowOutcome::Skipped {
                    row: index,
                    reason: SkipReason::TooFewCells,
                };
            }
            let accessor = RowCells {
                table_id: &table.id,
                row: index,
                cells,
            };
            match extract_row(&accessor, layout, format_key, config) {
                Ok(Some(tuples)) => RowOutcome::Extracted { row: index, tuples },
                Ok(None) => RowOutcome::Skipped {
                    row: index,
                    reason: SkipReason::BlankService,
                },
                Err(e) => RowOutcome::Failed(e),
            }
        })
        .collect();

    Ok(outcomes)
}

fn extract_row(
    row: &RowCells<'_, '_>,
    layout: &FormatLayout,
    format_key: &str,
    config: &ScrapeConfig,
) -> Result<Option<Vec<Extracted>>> {
    let needed = layout.required_cells();

    let service = cell_text(row.required(layout.service_column, needed)?);
    if service.is_empty() {
        return Ok(None);
    }

    let sdks = match layout.sdk_column {
        Some(column) => parse_sdk_list(row.required(column, needed)?),
        None => Vec::new(),
    };

    // All status cells must exist before anything is yielded for the row
    let status_cells = layout
        .status_columns
        .iter()
        .map(|column| row.status(column.index).map(|cell| (column, cell)))
        .collect::<Result<Vec<_>>>()?;

    let tuples = status_cells
        .into_iter()
        .filter_map(|(column, cell)| {
            let status = status_of(cell, config);
            status.present.then(|| Extracted {
                standard: column.standard_name(format_key),
                service: service.clone(),
                sdks: sdks.clone(),
                status,
            })
        })
        .collect();

    Ok(Some(tuples))
}
