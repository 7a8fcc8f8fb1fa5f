//! Plain-text rendering of a [`ResultTable`].
//!
//! Columns are `x`, `y`, `n`, then one column per iteration headed by its
//! `(u_k, v_k)` label. Absent cells print as `-`.

use std::fmt::Write;

use dioptra_triples::ResultTable;

/// Renders `table` with every column padded to its widest entry.
#[must_use]
pub fn render_table(table: &ResultTable) -> String {
    let mut header = vec!["x".to_string(), "y".to_string(), "n".to_string()];
    header.extend(table.labels().map(ToString::to_string));

    let rows: Vec<Vec<String>> = table
        .rows()
        .map(|(record, cells)| {
            let mut row = vec![record.x.to_string(), record.y.to_string(), record.n.to_string()];
            row.extend(cells.iter().map(ToString::to_string));
            row
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(header[col].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for line in std::iter::once(&header).chain(rows.iter()) {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:>width$}"))
            .collect();
        // writing to a String cannot fail
        let _ = writeln!(out, "{}", cells.join("  ").trim_end());
    }
    out
}
