//! JSON request interface
//!
//! A scrape request and its response travel as JSON strings, so callers in
//! other processes only need the HTML text and a small request document.

use serde::{Deserialize, Serialize};

use crate::config::ScrapeConfig;
use crate::emit::{Fact, FactSet};
use crate::error::{Result, ScrapeError};
use crate::extractors::TableFormat;
use crate::scrape::{scrape_document, ScrapeEvent, ScrapeReport};

/// Formats to scrape and optional configuration overrides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeRequest {
    /// Defaults to every known format
    #[serde(default = "all_formats")]
    pub formats: Vec<TableFormat>,
    #[serde(default)]
    pub config: ScrapeConfig,
}

fn all_formats() -> Vec<TableFormat> {
    TableFormat::ALL.to_vec()
}

impl Default for ScrapeRequest {
    fn default() -> Self {
        Self {
            formats: all_formats(),
            config: ScrapeConfig::default(),
        }
    }
}

/// Deduplicated facts in sorted order, plus run counters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrapeResponse {
    pub facts: Vec<Fact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ScrapeReport>,
    /// Row-level problems, one message each
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn parse_request(request_json: &str) -> Result<ScrapeRequest> {
    if request_json.trim().is_empty() {
        return Ok(ScrapeRequest::default());
    }
    serde_json::from_str(request_json).map_err(|e| ScrapeError::InvalidRequest(e.to_string()))
}

/// Run a parsed request over one document
pub fn perform_scrape(html: &str, request: &ScrapeRequest) -> Result<ScrapeResponse> {
    let mut facts = FactSet::new();
    let mut warnings = Vec::new();

    let report = scrape_document(html, &request.formats, &request.config, &mut facts, |event| {
        if let ScrapeEvent::RowFailed(error) = event {
            warnings.push(error.to_string());
        }
    })?;

    Ok(ScrapeResponse {
        facts: facts.into_vec(),
        report: Some(report),
        warnings,
        error: None,
    })
}

/// JSON in, JSON out. Failures are reported in the `error` field rather
/// than returned, so the result is always a valid response document.
pub fn scrape_json(html: &str, request_json: &str) -> String {
    let response = parse_request(request_json)
        .and_then(|request| perform_scrape(html, &request))
        .unwrap_or_else(|e| make_error_response(&e.to_string()));

    serde_json::to_string(&response)
        .unwrap_or_else(|e| format!(r#"{{"facts":[],"error":{:?}}}"#, e.to_string()))
}

fn make_error_response(msg: &str) -> ScrapeResponse {
    ScrapeResponse {
        error: Some(msg.to_string()),
        ..ScrapeResponse::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
    <div class="lb-tbl" id="t1">
        <span>GSMA</span>
        <table>
            <tr><td>Amazon S3</td><td>&#10003;</td><td>&#10003;</td></tr>
            <tr><td>Amazon S3</td><td>&#10003;</td></tr>
        </table>
    </div>
    "#;

    #[test]
    fn test_default_request() {
        let request = parse_request("").unwrap();
        assert_eq!(request.formats.len(), 4);
        let request = parse_request("{}").unwrap();
        assert_eq!(request.config, ScrapeConfig::default());
    }

    #[test]
    fn test_scrape_json() {
        let out = scrape_json(PAGE, r#"{"formats": ["gsma"]}"#);
        let response: ScrapeResponse = serde_json::from_str(&out).unwrap();

        assert!(response.error.is_none());
        assert_eq!(
            response.facts,
            vec![
                Fact::new("GSMA_EU", "", "Amazon S3"),
                Fact::new("GSMA_US", "", "Amazon S3"),
            ]
        );
        let report = response.report.unwrap();
        assert_eq!(report.rows_processed, 1);
        assert_eq!(report.rows_failed, 1);
        assert_eq!(response.warnings.len(), 1);
    }

    #[test]
    fn test_bad_request_json() {
        let out = scrape_json(PAGE, r#"{"formats": ["hipaa"]}"#);
        let response: ScrapeResponse = serde_json::from_str(&out).unwrap();
        assert!(response.facts.is_empty());
        assert!(response.error.unwrap().contains("invalid scrape request"));
    }

    #[test]
    fn test_config_override() {
        let request = r#"{"formats": ["gsma"], "config": {"table_selector": "section[id]"}}"#;
        let response: ScrapeResponse = serde_json::from_str(&scrape_json(PAGE, request)).unwrap();
        assert!(response.facts.is_empty());
        assert_eq!(response.report.unwrap().tables_seen, 0);
    }
}
