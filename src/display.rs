use crate::Symbol;
use itertools::Itertools;

/// Draws a snapshot as a bordered grid with 1-indexed row and column headers.
///
/// ```text
///  |123|
/// -|---|
/// 1|/1.|
/// 2|*..|
/// -|---|
/// ```
///
/// Columns widen to fit the largest label on boards wider than nine cells.
pub fn render(snapshot: &[Vec<Symbol>]) -> String {
    let height = snapshot.len();
    let width = snapshot.first().map_or(0, Vec::len);
    let label_width = height.to_string().len();
    let column_width = width.to_string().len();

    let rule = format!(
        "{}|{}|\n",
        "-".repeat(label_width),
        "-".repeat(width * column_width)
    );
    let header = (1..=width)
        .map(|column| format!("{:>w$}", column, w = column_width))
        .join("");

    let mut out = format!("{:>w$}|{}|\n", "", header, w = label_width);
    out.push_str(&rule);
    for (i, row) in snapshot.iter().enumerate() {
        let symbols = row
            .iter()
            .map(|symbol| format!("{:>w$}", symbol.to_string(), w = column_width))
            .join("");
        out.push_str(&format!("{:>w$}|{}|\n", i + 1, symbols, w = label_width));
    }
    out.push_str(&rule);
    out
}
