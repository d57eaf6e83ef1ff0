//! Document-level scraping
//!
//! Runs index, classification, extraction and emission over one HTML
//! document. Progress goes to a caller-supplied observer and to `tracing`.

use scraper::Html;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::classify::classify;
use crate::config::ScrapeConfig;
use crate::document::index_tables;
use crate::emit::{emit, Fact, FactSink};
use crate::error::{Result, ScrapeError};
use crate::extractors::{extract_table, RowOutcome, SkipReason, TableFormat};

/// Progress of a scrape run, in the order it happens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeEvent {
    TableMatched {
        table_id: String,
        format_key: String,
        format: TableFormat,
    },
    /// Unrecognized or empty table
    TableSkipped { table_id: String, error: ScrapeError },
    RowSkipped {
        table_id: String,
        row: usize,
        reason: SkipReason,
    },
    RowFailed(ScrapeError),
    FactEmitted(Fact),
}

/// Observer that drops every event
pub fn ignore_events(_: &ScrapeEvent) {}

/// Counters for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeReport {
    pub tables_seen: usize,
    pub tables_matched: usize,
    pub tables_skipped: usize,
    pub empty_tables: usize,
    pub rows_processed: usize,
    pub rows_skipped: usize,
    pub rows_failed: usize,
    pub facts_emitted: usize,
}

/// Scrape every table of `html` that one of `formats` claims.
///
/// Only an invalid table selector fails the call; unknown tables, empty
/// tables and broken rows are reported and skipped.
pub fn scrape_document<S, O>(
    html: &str,
    formats: &[TableFormat],
    config: &ScrapeConfig,
    sink: &mut S,
    mut observer: O,
) -> Result<ScrapeReport>
where
    S: FactSink + ?Sized,
    O: FnMut(&ScrapeEvent),
{
    let document = Html::parse_document(html);
    let tables = index_tables(&document, config)?;
    let mut report = ScrapeReport {
        tables_seen: tables.len(),
        ..ScrapeReport::default()
    };

    for table in tables {
        let table_id = table.id.clone();

        let classified = match classify(table, formats, config) {
            Ok(classified) => classified,
            Err(error) => {
                debug!(table = %table_id, %error, "skipping table");
                report.tables_skipped += 1;
                observer(&ScrapeEvent::TableSkipped { table_id, error });
                continue;
            }
        };

        let outcomes = match extract_table(
            &classified.table,
            &classified.format_key,
            classified.format,
            config,
        ) {
            Ok(outcomes) => outcomes,
            Err(error) => {
                debug!(table = %table_id, %error, "skipping table");
                if matches!(error, ScrapeError::EmptyTable { .. }) {
                    report.empty_tables += 1;
                }
                report.tables_skipped += 1;
                observer(&ScrapeEvent::TableSkipped { table_id, error });
                continue;
            }
        };

        debug!(
            table = %table_id,
            standard = %classified.format_key,
            format = %classified.format,
            rows = outcomes.len(),
            "scraping table"
        );
        report.tables_matched += 1;
        observer(&ScrapeEvent::TableMatched {
            table_id: table_id.clone(),
            format_key: classified.format_key.clone(),
            format: classified.format,
        });

        for outcome in outcomes {
            match outcome {
                RowOutcome::Skipped { row, reason } => {
                    report.rows_skipped += 1;
                    observer(&ScrapeEvent::RowSkipped {
                        table_id: table_id.clone(),
                        row,
                        reason,
                    });
                }
                RowOutcome::Failed(error) => {
                    warn!(table = %table_id, %error, "malformed row");
                    report.rows_failed += 1;
                    observer(&ScrapeEvent::RowFailed(error));
                }
                RowOutcome::Extracted { tuples, .. } => {
                    report.rows_processed += 1;
                    for tuple in &tuples {
                        report.facts_emitted += emit(tuple, sink, |fact| {
                            observer(&ScrapeEvent::FactEmitted(fact.clone()))
                        });
                    }
                }
            }
        }
    }

    info!(
        tables = report.tables_seen,
        matched = report.tables_matched,
        rows = report.rows_processed,
        failed = report.rows_failed,
        facts = report.facts_emitted,
        "scrape finished"
    );

    Ok(report)
}

/// Scrape one format with the default configuration and no observer
pub fn scrape_with_format<S>(html: &str, format: TableFormat, sink: &mut S) -> Result<ScrapeReport>
where
    S: FactSink + ?Sized,
{
    scrape_document(html, &[format], &ScrapeConfig::default(), sink, ignore_events)
}
