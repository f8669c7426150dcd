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

//! User-facing state of the log viewer: how many lines to fetch, what to
//! search for and which entry is open in the detail view.

use crate::core::ClassifiedLogEntry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How many trailing log lines to request from the log source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum LineLimit {
    Last50,
    #[default]
    Last100,
    Last500,
    Last1000,
}

impl LineLimit {
    const ALL: [Self; 4] = [Self::Last50, Self::Last100, Self::Last500, Self::Last1000];

    #[must_use]
    pub const fn lines(self) -> u32 {
        match self {
            Self::Last50 => 50,
            Self::Last100 => 100,
            Self::Last500 => 500,
            Self::Last1000 => 1000,
        }
    }

    /// Label used in selection lists, e.g. "Last 100 lines"
    #[must_use]
    pub fn label(self) -> String {
        format!("Last {} lines", self.lines())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineLimitError {
    #[error("unsupported line limit {0} (expected one of 50, 100, 500, 1000)")]
    Unsupported(u32),
    #[error("invalid line limit {0:?}")]
    NotANumber(String),
}

impl TryFrom<u32> for LineLimit {
    type Error = LineLimitError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|limit| limit.lines() == value)
            .ok_or(LineLimitError::Unsupported(value))
    }
}

impl From<LineLimit> for u32 {
    fn from(limit: LineLimit) -> Self {
        limit.lines()
    }
}

impl FromStr for LineLimit {
    type Err = LineLimitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| LineLimitError::NotANumber(s.to_string()))?;
        Self::try_from(value)
    }
}

impl fmt::Display for LineLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines())
    }
}

/// Current viewer settings plus the entry shown in the detail view
#[derive(Debug, Clone, Default)]
pub struct LogViewState {
    pub line_limit: LineLimit,
    pub query: String,
    selected: Option<ClassifiedLogEntry>,
}

impl LogViewState {
    #[must_use]
    pub const fn new(line_limit: LineLimit) -> Self {
        Self {
            line_limit,
            query: String::new(),
            selected: None,
        }
    }

    /// Open `entry` in the detail view, replacing any previous selection
    pub fn select(&mut self, entry: ClassifiedLogEntry) {
        self.selected = Some(entry);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&ClassifiedLogEntry> {
        self.selected.as_ref()
    }
}
