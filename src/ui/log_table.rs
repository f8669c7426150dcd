// DipLog - GPL-3.0-or-later
// This file is part of DipLog.
//
// Copyright (C) 2026 The DipLog Authors
//
// DipLog is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// DipLog is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with DipLog.  If not, see <https://www.gnu.org/licenses/>.

use crate::core::ClassifiedLogEntry;
use std::fmt::Write as _;

const HEADERS: [&str; 4] = ["Timestamp", "Level", "Request", "Response Time"];

/// Placeholder for numeric fields that could not be read
pub const UNREADABLE: &str = "-";

/// Response time with unit, e.g. "45ms" or "12.5ms"
#[must_use]
pub fn format_response_time(entry: &ClassifiedLogEntry) -> String {
    entry
        .response_time_ms
        .map_or_else(|| UNREADABLE.to_string(), |ms| format!("{ms}ms"))
}

/// Status code as shown to the user
#[must_use]
pub fn format_status(entry: &ClassifiedLogEntry) -> String {
    entry
        .status_code
        .map_or_else(|| UNREADABLE.to_string(), |code| code.to_string())
}

/// The text cells of one table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub timestamp: String,
    pub level_badge: String,
    pub request: String,
    pub response_time: String,
}

impl TableRow {
    #[must_use]
    pub fn from_entry(entry: &ClassifiedLogEntry) -> Self {
        Self {
            timestamp: entry.formatted_timestamp.clone(),
            level_badge: entry.level.as_str().to_uppercase(),
            request: format!(
                "{} {} ({})",
                entry.parsed.method,
                entry.parsed.url,
                format_status(entry)
            ),
            response_time: format_response_time(entry),
        }
    }

    const fn cells(&self) -> [&str; 4] {
        [
            self.timestamp.as_str(),
            self.level_badge.as_str(),
            self.request.as_str(),
            self.response_time.as_str(),
        ]
    }
}

/// Plain-text table of log entries
pub struct LogTable;

impl LogTable {
    /// Render `entries` as aligned columns with a leading row index.
    ///
    /// The index is what `--detail` expects.
    #[must_use]
    pub fn render(entries: &[ClassifiedLogEntry]) -> String {
        let rows: Vec<TableRow> = entries.iter().map(TableRow::from_entry).collect();
        let index_width = rows.len().saturating_sub(1).to_string().len().max(1);

        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        Self::write_row(&mut out, &" ".repeat(index_width), HEADERS, &widths);

        if rows.is_empty() {
            out.push_str("No log entries\n");
            return out;
        }

        for (i, row) in rows.iter().enumerate() {
            Self::write_row(
                &mut out,
                &format!("{i:>index_width$}"),
                row.cells(),
                &widths,
            );
        }
        out
    }

    fn write_row(out: &mut String, index: &str, cells: [&str; 4], widths: &[usize; 4]) {
        let _ = write!(out, "{index}");
        for (cell, &width) in cells.iter().zip(widths) {
            let _ = write!(out, "  {cell:<width$}");
        }
        // No trailing padding after the last column
        let trimmed_len = out.trim_end_matches(' ').len();
        out.truncate(trimmed_len);
        out.push('\n');
    }
}
