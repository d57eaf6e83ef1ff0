//! DoD CC SRG table
//!
//! Same leading columns as the standard table, followed by one status column
//! per impact level.

use super::{FormatLayout, FormatMatch, StatusColumn};

pub static DODCCSRG_LAYOUT: FormatLayout = FormatLayout {
    name: "DoD CC SRG",
    matcher: FormatMatch::Labels(&["DoD_CC_SRG"]),
    service_column: 0,
    sdk_column: Some(1),
    status_columns: &[
        StatusColumn::fixed(2, "DoDCCSRG_IL2_EW"),
        StatusColumn::fixed(3, "DoDCCSRG_IL2_GC"),
        StatusColumn::fixed(4, "DoDCCSRG_IL4_GC"),
        StatusColumn::fixed(5, "DoDCCSRG_IL5_GC"),
        StatusColumn::fixed(6, "DoDCCSRG_IL6_GC"),
    ],
};

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::TableFormat;

    fn row(service: &str, statuses: [&str; 5]) -> String {
        let cells: String = statuses.iter().map(|s| format!("<td>{}</td>", s)).collect();
        format!("<tr><td>{}</td><td></td>{}</tr>", service, cells)
    }

    #[test]
    fn test_only_il5() {
        let html = page("DoD CC SRG", &row("Amazon RDS", ["", "-", "", "\u{2713}", " "]));
        let extracted = tuples(&run(&html, TableFormat::DodCcSrg).unwrap());
        assert_eq!(extracted.len(), 1);
        assert_eq!(extracted[0].standard, "DoDCCSRG_IL5_GC");
        assert!(extracted[0].sdks.is_empty());
    }

    #[test]
    fn test_column_order() {
        let html = page(
            "DoD CC SRG",
            &row("AWS Lambda", ["\u{2713}", "\u{2713}", "\u{2713}", "\u{2713}", "\u{2713}"]),
        );
        let standards: Vec<String> = tuples(&run(&html, TableFormat::DodCcSrg).unwrap())
            .into_iter()
            .map(|t| t.standard)
            .collect();
        assert_eq!(
            standards,
            vec![
                "DoDCCSRG_IL2_EW",
                "DoDCCSRG_IL2_GC",
                "DoDCCSRG_IL4_GC",
                "DoDCCSRG_IL5_GC",
                "DoDCCSRG_IL6_GC"
            ]
        );
    }

    #[test]
    fn test_no_level_present() {
        let html = page("DoD CC SRG", &row("Amazon Lex", ["", "", "", "", ""]));
        assert!(tuples(&run(&html, TableFormat::DodCcSrg).unwrap()).is_empty());
    }
}
