//! FedRAMP table
//!
//! Service, SDK, then one status column per authorization level.

use super::{FormatLayout, FormatMatch, StatusColumn};

pub static FEDRAMP_LAYOUT: FormatLayout = FormatLayout {
    name: "FedRAMP",
    matcher: FormatMatch::Labels(&["FedRAMP"]),
    service_column: 0,
    sdk_column: Some(1),
    status_columns: &[
        // Moderate (East/West)
        StatusColumn::fixed(2, "FedRAMP_Moderate"),
        // High (GovCloud)
        StatusColumn::fixed(3, "FedRAMP_High"),
        // Not in scope
        StatusColumn::fixed(4, "FedRAMP_NA"),
    ],
};
