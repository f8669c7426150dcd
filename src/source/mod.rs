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

//! Where raw access-log lines come from.

pub mod api;
pub mod file;

pub use api::ApiClient;
pub use file::FileSource;

use crate::state::LineLimit;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("response from {url} has no `logs` array")]
    MissingLogs { url: String },
    #[error("invalid API credential: {0}")]
    InvalidCredential(String),
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Supplies the most recent raw log lines, oldest first
pub trait LogSource {
    /// Fetch up to `limit` trailing lines
    fn fetch_lines(&self, limit: LineLimit) -> Result<Vec<String>, FetchError>;
}

impl<T: LogSource + ?Sized> LogSource for &T {
    fn fetch_lines(&self, limit: LineLimit) -> Result<Vec<String>, FetchError> {
        (**self).fetch_lines(limit)
    }
}

impl<T: LogSource + ?Sized> LogSource for Box<T> {
    fn fetch_lines(&self, limit: LineLimit) -> Result<Vec<String>, FetchError> {
        (**self).fetch_lines(limit)
    }
}
