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

//! Raw lines in, display-ready entries out.

use crate::core::classify::{LogClassifier, TimestampStyle};
use crate::core::filter::filter_entries;
use crate::core::ClassifiedLogEntry;
use crate::parser::parse_line;

/// Composes parsing, classification and filtering over a fetched snapshot
#[derive(Debug, Clone, Default)]
pub struct LogPresenter {
    classifier: LogClassifier,
}

impl LogPresenter {
    #[must_use]
    pub const fn new(style: TimestampStyle) -> Self {
        Self {
            classifier: LogClassifier::new(style),
        }
    }

    /// Turn a snapshot of raw lines (oldest first) into the entries to show.
    ///
    /// Blank and malformed lines are dropped, the rest are classified and
    /// filtered by `query`. The result is most recent first.
    #[must_use]
    pub fn present<S: AsRef<str>>(&self, raw_lines: &[S], query: &str) -> Vec<ClassifiedLogEntry> {
        let mut malformed = 0usize;
        let entries: Vec<ClassifiedLogEntry> = raw_lines
            .iter()
            .map(AsRef::<str>::as_ref)
            .filter(|raw| !raw.is_empty())
            .filter_map(|raw| {
                let parsed = parse_line(raw);
                if parsed.is_none() {
                    malformed += 1;
                }
                parsed.map(|parsed| self.classifier.classify(raw, parsed))
            })
            .collect();

        let classified = entries.len();
        let mut shown = filter_entries(entries, query);
        shown.reverse();

        tracing::debug!(
            total = raw_lines.len(),
            malformed,
            classified,
            shown = shown.len(),
            "Presented log snapshot"
        );

        shown
    }
}
