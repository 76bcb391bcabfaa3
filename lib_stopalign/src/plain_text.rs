use std::{fmt::Display, io::Write};

use crate::{aligned_sequence::AlignedSequence, error::Result};

/// Writes named aligned sequences as a table with one row per sequence.
///
/// Each row starts with the left-aligned name, followed by `|` and the aligned symbols.
/// Every column is padded to its widest symbol, and gaps are written as `-`.
pub fn write_alignment_table<Symbol: Display>(
    mut output: impl Write,
    rows: &[(&str, &AlignedSequence<Symbol>)],
) -> Result<()> {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|(_, sequence)| sequence.iter().map(ToString::to_string).collect())
        .collect();

    let name_width = rows
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);
    let column_count = cells.iter().map(Vec::len).max().unwrap_or(0);
    let column_widths: Vec<_> = (0..column_count)
        .map(|column| {
            cells
                .iter()
                .filter_map(|row| row.get(column))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(1)
        })
        .collect();

    for ((name, _), row) in rows.iter().zip(&cells) {
        let mut line = format!("{name:<name_width$} |");
        for (cell, width) in row.iter().zip(&column_widths) {
            line.push(' ');
            line.push_str(&format!("{cell:<width$}"));
        }
        writeln!(output, "{}", line.trim_end())?;
    }

    Ok(())
}
