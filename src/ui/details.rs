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
use crate::ui::log_table::{format_response_time, format_status};
use std::fmt::Write as _;

/// Every field of one entry followed by its raw line
#[must_use]
pub fn render_details(entry: &ClassifiedLogEntry) -> String {
    let parsed = &entry.parsed;
    let fields = [
        ("Remote Address", parsed.remote_addr.clone()),
        ("Method", parsed.method.clone()),
        ("Timestamp", entry.formatted_timestamp.clone()),
        ("URL", parsed.url.clone()),
        (
            "Status",
            format!("{} [{}]", format_status(entry), entry.level.as_str().to_uppercase()),
        ),
        ("Content Length", format!("{} bytes", parsed.content_length)),
        (
            "Response Time",
            format!("{} ({})", format_response_time(entry), entry.response_level),
        ),
    ];
    let label_width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;

    let mut out = String::from("Request Details\n\n");
    for (label, value) in &fields {
        let label = format!("{label}:");
        let _ = writeln!(out, "{label:<label_width$}  {value}");
    }
    let _ = write!(out, "\nRaw Log:\n{}\n", entry.raw_log);
    out
}
