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

pub mod line;
pub mod numeric;
pub mod timestamp;

pub use line::{ParsedLogEntry, FIELD_COUNT, FIELD_DELIMITER};

/// Split one raw access-log line into its positional fields.
///
/// Lines with fewer than [`FIELD_COUNT`] `" - "`-separated parts are
/// malformed and yield `None`. Anything after the seventh part is ignored,
/// so a delimiter inside an early field shifts the remaining fields.
#[must_use]
pub fn parse_line(raw: &str) -> Option<ParsedLogEntry> {
    ParsedLogEntry::from_parts(raw.split(FIELD_DELIMITER))
}
