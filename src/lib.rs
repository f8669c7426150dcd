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

//! `DipLog` - access-log viewer for the DIP admin platform.
//!
//! Raw `" - "`-delimited access-log lines are parsed, classified by status
//! and latency, filtered by a free-text query and shown most recent first.

pub mod config;
pub mod core;
pub mod logging;
pub mod parser;
pub mod source;
pub mod state;
pub mod ui;

pub use crate::core::{ClassifiedLogEntry, Level, LogPresenter, LogView, ResponseLevel};
pub use crate::parser::{parse_line, ParsedLogEntry};
pub use crate::source::{ApiClient, FetchError, FileSource, LogSource};
pub use crate::state::{LineLimit, LogViewState};
