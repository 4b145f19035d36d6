//! Plain-text rendering of the station listing.
//!
//! Two layouts:
//! - table: a header row and one aligned row per station;
//! - quiet: one compact line per station, no header.

use std::io::{self, Write};

use crate::model::Station;

pub const HEADER: [&str; 5] = ["Id", "Location", "Index", "Time", "Status"];

/// Minimum number of spaces between two table columns.
const COLUMN_GAP: usize = 2;

/// Clock format for the observation time, in the station's own zone.
const TIME_FORMAT: &str = "%H:%M";

/// Renders `stations` in the requested layout, one string per line.
pub fn render(stations: &[Station], quiet: bool) -> Vec<String> {
    if quiet {
        render_quiet(stations)
    } else {
        render_table(stations)
    }
}

/// Header plus one row per station. The header is emitted even when there
/// are no stations.
pub fn render_table(stations: &[Station]) -> Vec<String> {
    let mut rows: Vec<[String; 5]> = Vec::with_capacity(stations.len() + 1);
    rows.push(HEADER.map(String::from));
    rows.extend(stations.iter().map(table_cells));

    let mut widths = [0usize; 5];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    rows.iter().map(|row| align_row(row, &widths)).collect()
}

fn table_cells(s: &Station) -> [String; 5] {
    let status = if s.available { "-".to_string() } else { s.status.clone() };
    [
        s.id.clone(),
        s.name.clone(),
        format!("{:.1}", s.uv_index),
        s.time.format(TIME_FORMAT).to_string(),
        status,
    ]
}

fn align_row(row: &[String; 5], widths: &[usize; 5]) -> String {
    let last = row.len() - 1;
    let mut line = String::new();
    for (i, cell) in row.iter().enumerate() {
        if i == last {
            line.push_str(cell);
        } else {
            let pad = widths[i] - cell.chars().count() + COLUMN_GAP;
            line.push_str(cell);
            line.extend(std::iter::repeat(' ').take(pad));
        }
    }
    line
}

/// One line per station: name, index and, for unavailable stations, the
/// status in parentheses.
pub fn render_quiet(stations: &[Station]) -> Vec<String> {
    stations
        .iter()
        .map(|s| {
            if s.available {
                format!("{} {:.1}", s.name, s.uv_index)
            } else {
                format!("{} {:.1} ({})", s.name, s.uv_index, s.status)
            }
        })
        .collect()
}

/// Writes rendered lines to `out`, each terminated by a newline.
pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
