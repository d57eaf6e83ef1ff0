//! Standard classifier
//!
//! Turns a table's tab label into a format key and picks the requested
//! format that claims it.

use crate::config::ScrapeConfig;
use crate::document::RawTable;
use crate::error::{Result, ScrapeError};
use crate::extractors::TableFormat;
use crate::normalize::clean_standard_name;

/// A table together with the format that claimed it
#[derive(Debug, Clone)]
pub struct ClassifiedTable<'a> {
    pub table: RawTable<'a>,
    /// Cleaned tab label; the StandardName for single-standard tables
    pub format_key: String,
    pub format: TableFormat,
}

/// Cleaned tab label of a table
pub fn format_key(table: &RawTable<'_>, config: &ScrapeConfig) -> String {
    clean_standard_name(&table.label, config)
}

/// Match a table against the requested formats.
///
/// Specific formats are tried before `Standard` whatever the request order,
/// so the catch-all never steals a table that has its own layout.
pub fn classify<'a>(
    table: RawTable<'a>,
    formats: &[TableFormat],
    config: &ScrapeConfig,
) -> Result<ClassifiedTable<'a>> {
    let key = format_key(&table, config);

    let format = TableFormat::ALL
        .iter()
        .copied()
        .filter(|f| formats.contains(f))
        .find(|f| f.matches(&key));

    match format {
        Some(format) => Ok(ClassifiedTable {
            table,
            format_key: key,
            format,
        }),
        None => Err(ScrapeError::UnrecognizedFormat { label: key }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::index_tables;
    use scraper::Html;

    const PAGE: &str = r#"
    <div class="lb-tbl" id="a"><span>FedRAMP</span><table></table></div>
    <div class="lb-tbl" id="b"><span>DoD  CC
        SRG</span><table></table></div>
    <div class="lb-tbl" id="c"><span>SOC 1,2,3</span><table></table></div>
    <div class="lb-tbl" id="d"><span>HITRUST CSF</span><table></table></div>
    "#;

    fn classify_all(formats: &[TableFormat]) -> Vec<std::result::Result<(String, TableFormat), String>> {
        let document = Html::parse_document(PAGE);
        let config = ScrapeConfig::default();
        index_tables(&document, &config)
            .unwrap()
            .into_iter()
            .map(|t| match classify(t, formats, &config) {
                Ok(c) => Ok((c.format_key, c.format)),
                Err(ScrapeError::UnrecognizedFormat { label }) => Err(label),
                Err(e) => panic!("unexpected error {}", e),
            })
            .collect()
    }

    #[test]
    fn test_all_formats() {
        let results = classify_all(&TableFormat::ALL);
        assert_eq!(results[0], Ok(("FedRAMP".to_string(), TableFormat::FedRamp)));
        assert_eq!(results[1], Ok(("DoD_CC_SRG".to_string(), TableFormat::DodCcSrg)));
        assert_eq!(results[2], Ok(("SOC".to_string(), TableFormat::Standard)));
        assert_eq!(results[3], Err("HITRUST_CSF".to_string()));
    }

    #[test]
    fn test_standard_never_claims_specific_tables() {
        let results = classify_all(&[TableFormat::Standard]);
        assert_eq!(results[0], Err("FedRAMP".to_string()));
        assert_eq!(results[1], Err("DoD_CC_SRG".to_string()));
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_single_format_request() {
        let results = classify_all(&[TableFormat::Gsma]);
        assert!(results.iter().all(|r| r.is_err()));
    }
}
