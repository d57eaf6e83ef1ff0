//! Document index
//!
//! Finds the tab-structured tables of a compliance page. A container counts
//! when it matches the configured selector, carries an `id`, and its first
//! child element holds non-blank label text (the tab name).

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Node, Selector};

use crate::config::ScrapeConfig;
use crate::error::{Result, ScrapeError};

static ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());

/// One candidate table together with its tab label
#[derive(Debug, Clone)]
pub struct RawTable<'a> {
    pub id: String,
    /// Label text as found in the markup, not yet chomped
    pub label: String,
    pub element: ElementRef<'a>,
}

impl<'a> RawTable<'a> {
    /// All rows of the table in document order
    pub fn rows(&self) -> Vec<ElementRef<'a>> {
        self.element.select(&ROW_SELECTOR).collect()
    }
}

/// `td` cells of a row; header `th` cells are not counted
pub fn row_cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| cell.value().name() == "td")
        .collect()
}

/// Index all labelled tables of a document, in document order
pub fn index_tables<'a>(document: &'a Html, config: &ScrapeConfig) -> Result<Vec<RawTable<'a>>> {
    let selector = table_selector(config)?;

    Ok(document
        .select(&selector)
        .filter_map(|element| {
            let id = element.value().attr("id")?.trim();
            if id.is_empty() {
                return None;
            }
            let label = tab_label(element)?;
            Some(RawTable {
                id: id.to_string(),
                label,
                element,
            })
        })
        .collect())
}

/// Element ids of all labelled tables, in document order
pub fn table_ids(document: &Html, config: &ScrapeConfig) -> Result<Vec<String>> {
    Ok(index_tables(document, config)?
        .into_iter()
        .map(|table| table.id)
        .collect())
}

/// Look up one indexed table by its element id
pub fn find_table<'a>(
    document: &'a Html,
    config: &ScrapeConfig,
    id: &str,
) -> Result<Option<RawTable<'a>>> {
    Ok(index_tables(document, config)?
        .into_iter()
        .find(|table| table.id == id))
}

fn table_selector(config: &ScrapeConfig) -> Result<Selector> {
    Selector::parse(&config.table_selector).map_err(|e| ScrapeError::InvalidSelector {
        selector: config.table_selector.clone(),
        reason: format!("{:?}", e),
    })
}

/// Label of a container: the first non-blank text node directly under its
/// first child element, or that element's whole text.
fn tab_label(container: ElementRef<'_>) -> Option<String> {
    let tab = container.children().find_map(ElementRef::wrap)?;

    let direct = tab.children().find_map(|child| match child.value() {
        Node::Text(text) if !text.trim().is_empty() => Some(text.to_string()),
        _ => None,
    });

    let label = direct.unwrap_or_else(|| tab.text().collect::<String>());
    if label.trim().is_empty() {
        None
    } else {
        Some(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
    <html>
    <body>
        <div class="lb-tbl" id="first">
            <span>
                FedRAMP
            </span>
            <table><tr><td>S3</td><td>boto3</td></tr></table>
        </div>
        <div class="lb-tbl" id="second">
            <h4><b>GSMA</b></h4>
            <table>
                <tr><th>Service</th><th>US</th></tr>
                <tr><td>EC2</td><td>&#10003;</td></tr>
            </table>
        </div>
        <div class="lb-tbl" id="blank"><span>  </span><table></table></div>
        <div class="lb-tbl"><span>No id</span><table></table></div>
        <div class="other" id="unrelated"><span>Menu</span></div>
    </body>
    </html>
    "#;

    #[test]
    fn test_index_in_document_order() {
        let document = Html::parse_document(PAGE);
        let config = ScrapeConfig::default();
        let ids = table_ids(&document, &config).unwrap();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn test_labels() {
        let document = Html::parse_document(PAGE);
        let tables = index_tables(&document, &ScrapeConfig::default()).unwrap();
        assert_eq!(tables[0].label.trim(), "FedRAMP");
        assert_eq!(tables[1].label, "GSMA");
    }

    #[test]
    fn test_rows_and_cells() {
        let document = Html::parse_document(PAGE);
        let table = find_table(&document, &ScrapeConfig::default(), "second")
            .unwrap()
            .unwrap();
        let rows = table.rows();
        assert_eq!(rows.len(), 2);
        assert!(row_cells(rows[0]).is_empty());
        assert_eq!(row_cells(rows[1]).len(), 2);
    }

    #[test]
    fn test_invalid_selector() {
        let document = Html::parse_document(PAGE);
        let config = ScrapeConfig {
            table_selector: "div[".to_string(),
            ..ScrapeConfig::default()
        };
        let err = index_tables(&document, &config).unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidSelector { .. }));
    }
}
