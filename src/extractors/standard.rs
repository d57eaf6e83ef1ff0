//! Standard table
//!
//! Service, SDK and a single status column. The StandardName is the cleaned
//! tab label, so one layout covers every regular compliance program.

use super::{FormatLayout, FormatMatch, StandardSource, StatusColumn};

/// Labels whose tables do not have the standard shape
pub const STANDARD_EXCLUSIONS: &[&str] = &[
    "FedRAMP",
    "DoD_CC_SRG",
    "HIPAA_BAA",
    "MTCS",
    "HITRUST_CSF",
    "GSMA",
];

pub static STANDARD_LAYOUT: FormatLayout = FormatLayout {
    name: "Standard",
    matcher: FormatMatch::AnyExcept(STANDARD_EXCLUSIONS),
    service_column: 0,
    sdk_column: Some(1),
    status_columns: &[StatusColumn {
        index: 2,
        standard: StandardSource::TabLabel,
    }],
};
