// SPDX-License-Identifier: MPL-2.0
//! CSV serialization for table exports.
//!
//! Follows the portal's cell rules exactly: embedded line breaks are
//! stripped, each pair of consecutive whitespace characters collapses to a
//! single space, embedded quotes are doubled, and every cell is wrapped in
//! quotes. Cells join with commas, rows with `\n`.

use super::table::DataTable;

/// Serializes a table snapshot to CSV. The header row comes first when the
/// table has headers; an empty table serializes to an empty string.
#[must_use]
pub fn serialize(table: &DataTable) -> String {
    let mut lines = Vec::with_capacity(table.rows.len() + 1);

    if !table.headers.is_empty() {
        lines.push(serialize_row(&table.headers));
    }
    for row in &table.rows {
        lines.push(serialize_row(row));
    }

    lines.join("\n")
}

fn serialize_row(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| format!("\"{}\"", escape_cell(cell)))
        .collect::<Vec<_>>()
        .join(",")
}

fn escape_cell(cell: &str) -> String {
    let stripped: String = cell.chars().filter(|c| *c != '\r' && *c != '\n').collect();
    collapse_whitespace_pairs(&stripped).replace('"', "\"\"")
}

/// Single left-to-right pass replacing each whitespace pair with one space,
/// mirroring the portal's `\s\s` substitution.
fn collapse_whitespace_pairs(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() && chars.peek().is_some_and(|next| next.is_whitespace()) {
            chars.next();
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}
