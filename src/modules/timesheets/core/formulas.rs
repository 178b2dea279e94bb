// Spreadsheet formulas written as literal cell text. Existing timesheets are
// evaluated by the spreadsheet engine, so the text must not drift.

/// Per-row duration, or a missing-punch flag when only one side is filled.
pub fn duration_formula(row: u32) -> String {
    format!(
        r#"=IF(B{row}<>"",IF(C{row}="","MISSING OUT",C{row}-B{row}),IF(C{row}<>"", "MISSING IN", ""))"#
    )
}

/// Sum of column E for dates between the start (H2) and end (H3) cells.
pub const TOTAL_TIME_FORMULA: &str = r#"=SUMIFS(E2:E,A2:A,">="&H2,A2:A,"<="&H3)"#;
