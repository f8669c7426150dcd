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

//! Free-text search over classified entries.
//!
//! Matching is a case-insensitive substring test against the method, URL,
//! status code, level name and remote address of each entry.

use crate::core::ClassifiedLogEntry;

/// A search query prepared for matching against many entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMatcher {
    needle: String,
}

impl EntryMatcher {
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// An empty query matches everything
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    #[must_use]
    pub fn matches(&self, entry: &ClassifiedLogEntry) -> bool {
        if self.is_empty() {
            return true;
        }

        let parsed = &entry.parsed;
        parsed.method.to_lowercase().contains(&self.needle)
            || parsed.url.to_lowercase().contains(&self.needle)
            || entry.status_text().contains(&self.needle)
            || entry.level.as_str().contains(&self.needle)
            || parsed.remote_addr.to_lowercase().contains(&self.needle)
    }
}

/// Keep the entries matching `query`, preserving their order.
///
/// An empty query returns every entry.
#[must_use]
pub fn filter_entries(entries: Vec<ClassifiedLogEntry>, query: &str) -> Vec<ClassifiedLogEntry> {
    let matcher = EntryMatcher::new(query);
    if matcher.is_empty() {
        return entries;
    }

    entries
        .into_iter()
        .filter(|entry| matcher.matches(entry))
        .collect()
}
