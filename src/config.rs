//! Scrape configuration
//!
//! Everything here is tunable markup convention. Column layouts of the table
//! formats are fixed data in `extractors`, not configuration.

use serde::{Deserialize, Serialize};

/// Selector for the tab-structured table containers on AWS compliance pages
pub const DEFAULT_TABLE_SELECTOR: &str = "div.lb-tbl[id]";

/// Cell texts that mean "not applicable" in a status column
pub const DEFAULT_ABSENT_MARKERS: &[&str] = &["-", "\u{2013}", "\u{2014}"];

/// Raw (already underscored) standard names and their canonical spelling
pub const DEFAULT_STANDARD_ALIASES: &[(&str, &str)] = &[
    ("SOC_1,2,3", "SOC"),
    ("SOC_1,_2,_3", "SOC"),
    ("PCI_DSS", "PCI"),
    ("ISO_and_CSA_STAR_Certificates", "ISO"),
    ("ISO_and_CSA_STAR", "ISO"),
    ("DoD_SRG", "DoD_CC_SRG"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardAlias {
    pub raw: String,
    pub canonical: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// CSS selector matching table containers; each must carry an `id`
    pub table_selector: String,
    /// Status texts treated as absent in addition to blank cells
    pub absent_markers: Vec<String>,
    /// Applied in order after whitespace and separator cleanup
    pub standard_aliases: Vec<StandardAlias>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            table_selector: DEFAULT_TABLE_SELECTOR.to_string(),
            absent_markers: DEFAULT_ABSENT_MARKERS.iter().map(|m| m.to_string()).collect(),
            standard_aliases: DEFAULT_STANDARD_ALIASES
                .iter()
                .map(|(raw, canonical)| StandardAlias {
                    raw: raw.to_string(),
                    canonical: canonical.to_string(),
                })
                .collect(),
        }
    }
}

impl ScrapeConfig {
    pub fn is_absent_marker(&self, text: &str) -> bool {
        self.absent_markers.iter().any(|m| m == text)
    }

    pub fn canonical_alias<'a>(&'a self, name: &str) -> Option<&'a str> {
        self.standard_aliases
            .iter()
            .find(|a| a.raw == name)
            .map(|a| a.canonical.as_str())
    }
}
