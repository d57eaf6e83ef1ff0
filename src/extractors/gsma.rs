//! GSMA table
//!
//! No SDK column; status columns follow the service name directly.

use super::{FormatLayout, FormatMatch, StatusColumn};

pub static GSMA_LAYOUT: FormatLayout = FormatLayout {
    name: "GSMA",
    matcher: FormatMatch::Labels(&["GSMA"]),
    service_column: 0,
    sdk_column: None,
    status_columns: &[
        // US (East)
        StatusColumn::fixed(1, "GSMA_US"),
        // EU (Paris)
        StatusColumn::fixed(2, "GSMA_EU"),
    ],
};

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::TableFormat;

    #[test]
    fn test_regions() {
        let html = page(
            "GSMA",
            r#"<tr><td>Amazon S3</td><td>&#10003;</td><td></td></tr>
               <tr><td>Amazon EC2</td><td>&#10003;</td><td>&#10003;</td></tr>"#,
        );
        let extracted = tuples(&run(&html, TableFormat::Gsma).unwrap());
        let pairs: Vec<(&str, &str)> = extracted
            .iter()
            .map(|t| (t.standard.as_str(), t.service.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("GSMA_US", "Amazon S3"),
                ("GSMA_US", "Amazon EC2"),
                ("GSMA_EU", "Amazon EC2"),
            ]
        );
        assert!(extracted.iter().all(|t| t.sdks.is_empty()));
    }
}
