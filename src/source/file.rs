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

use super::{FetchError, LogSource};
use crate::state::LineLimit;
use std::path::{Path, PathBuf};

/// Reads the tail of a local access-log file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Last `count` lines of `content`, in their original order
#[must_use]
pub fn tail_lines(content: &str, count: usize) -> Vec<String> {
    let lines: Vec<&str> = content.lines().collect();
    let start = lines.len().saturating_sub(count);
    lines[start..].iter().map(|line| (*line).to_string()).collect()
}

impl LogSource for FileSource {
    fn fetch_lines(&self, limit: LineLimit) -> Result<Vec<String>, FetchError> {
        let start_time = std::time::Instant::now();

        // Lossy conversion keeps lines with stray non-UTF-8 bytes
        let buffer = std::fs::read(&self.path).map_err(|source| FetchError::Io {
            path: self.path.clone(),
            source,
        })?;
        let content = String::from_utf8_lossy(&buffer);
        let lines = tail_lines(&content, limit.lines() as usize);

        tracing::info!(
            "Read {} lines from {} in {:?}",
            lines.len(),
            self.path.display(),
            start_time.elapsed()
        );
        Ok(lines)
    }
}
