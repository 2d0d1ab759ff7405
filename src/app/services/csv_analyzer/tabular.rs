//! Strict tabular parsing of raw delimited text
//!
//! This module turns a raw text blob into an ordered sequence of
//! header-keyed rows. The splitter is deliberately strict: cells are split
//! on `,` with surrounding whitespace and double quotes stripped, and it is
//! NOT escaping-aware. Quoted fields containing commas or embedded newlines
//! are a known limitation of the export format this tool consumes and are
//! not silently repaired; a row whose field count disagrees with the header
//! is dropped and counted.

use crate::app::models::RawRow;
use tracing::debug;

/// Parsed tabular data: header names plus accepted rows
#[derive(Debug, Clone)]
pub struct RawTable {
    /// Header names in column order, trimmed and unquoted
    pub headers: Vec<String>,

    /// Accepted data rows (field count equal to the header count)
    pub rows: Vec<RawRow>,

    /// Data lines rejected because their field count mismatched the header
    pub dropped_rows: usize,
}

impl RawTable {
    /// Total data lines inspected, accepted and dropped together
    pub fn data_lines(&self) -> usize {
        self.rows.len() + self.dropped_rows
    }
}

/// Parse raw export text into a [`RawTable`].
///
/// The first non-blank line is the header line; every subsequent non-blank
/// line is a candidate data row. Returns `None` when fewer than two
/// non-blank lines are present (callers must check before proceeding).
pub fn parse_table(text: &str) -> Option<RawTable> {
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();

    if lines.len() < 2 {
        return None;
    }

    let headers = split_line(lines[0]);
    let mut rows = Vec::with_capacity(lines.len() - 1);
    let mut dropped_rows = 0;

    for (line_number, line) in lines[1..].iter().enumerate() {
        let cells = split_line(line);

        if cells.len() == headers.len() {
            rows.push(RawRow::new(&headers, cells));
        } else {
            dropped_rows += 1;
            debug!(
                "Dropped data line {}: {} fields, expected {}",
                line_number + 2,
                cells.len(),
                headers.len()
            );
        }
    }

    Some(RawTable {
        headers,
        rows,
        dropped_rows,
    })
}

/// Split one line on commas, trimming each cell and stripping wrapping quotes
fn split_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(|cell| strip_quotes(cell.trim()).to_string())
        .collect()
}

/// Strip one pair of surrounding double quotes, if present
fn strip_quotes(cell: &str) -> &str {
    if cell.len() >= 2 && cell.starts_with('"') && cell.ends_with('"') {
        &cell[1..cell.len() - 1]
    } else {
        cell
    }
}
