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

use serde::{Deserialize, Serialize};

/// Separator between fields of an access-log line
pub const FIELD_DELIMITER: &str = " - ";

/// Number of leading fields every well-formed line carries
pub const FIELD_COUNT: usize = 7;

/// One access-log line split into its positional fields.
///
/// All fields are kept as text exactly as they appeared in the line.
/// Numeric interpretation happens during classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedLogEntry {
    /// Client address
    pub remote_addr: String,
    /// HTTP method token
    pub method: String,
    /// Request time as written by the server
    pub timestamp: String,
    /// Request path
    pub url: String,
    /// HTTP status code as text
    pub status: String,
    /// Response size as text
    pub content_length: String,
    /// Response latency in milliseconds, as text
    pub response_time: String,
}

impl ParsedLogEntry {
    /// Build an entry from the first [`FIELD_COUNT`] parts of a split line.
    ///
    /// Returns `None` when fewer parts are available. Extra parts are ignored.
    #[must_use]
    pub fn from_parts<'a, I>(parts: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut parts = parts.into_iter();
        let mut next = || parts.next().map(str::to_string);

        Some(Self {
            remote_addr: next()?,
            method: next()?,
            timestamp: next()?,
            url: next()?,
            status: next()?,
            content_length: next()?,
            response_time: next()?,
        })
    }
}
