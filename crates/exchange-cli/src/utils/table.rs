use exchange::workflows::analyze::Analysis;
use std::fmt::Write;

const SYMBOL_WIDTH: usize = 8;
const COUNT_WIDTH: usize = 10;

fn signed(delta: i128) -> String {
    if delta > 0 {
        format!("+{delta}")
    } else {
        delta.to_string()
    }
}

/// Formats the per-element counts of an analysis as an aligned plain-text table.
///
/// The `Diff` column is `right - left`, so a positive value marks a missing element and a
/// negative value an extra one.
pub fn format_counts_table(analysis: &Analysis) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<SYMBOL_WIDTH$}{:>COUNT_WIDTH$}{:>COUNT_WIDTH$}{:>COUNT_WIDTH$}",
        "Element", "Left", "Right", "Diff"
    );
    for row in analysis.rows() {
        let _ = writeln!(
            out,
            "{:<SYMBOL_WIDTH$}{:>COUNT_WIDTH$}{:>COUNT_WIDTH$}{:>COUNT_WIDTH$}",
            row.symbol.as_str(),
            row.left,
            row.right,
            signed(row.delta)
        );
    }
    let _ = write!(
        out,
        "{:<SYMBOL_WIDTH$}{:>COUNT_WIDTH$}{:>COUNT_WIDTH$}",
        "Total",
        analysis.left_total(),
        analysis.right_total()
    );
    out
}
