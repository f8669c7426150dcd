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

//! The log viewer: owns the fetched snapshot and the view state.
//!
//! Changing the line limit fetches a new snapshot. Changing the query only
//! re-presents the snapshot already held.

use crate::core::presenter::LogPresenter;
use crate::core::ClassifiedLogEntry;
use crate::source::{FetchError, LogSource};
use crate::state::{LineLimit, LogViewState};

pub struct LogView<S> {
    source: S,
    presenter: LogPresenter,
    state: LogViewState,
    /// Raw lines from the last successful fetch, oldest first
    snapshot: Vec<String>,
    /// `snapshot` presented with the current query
    entries: Vec<ClassifiedLogEntry>,
}

impl<S: LogSource> LogView<S> {
    /// Create a viewer. Nothing is fetched until [`Self::refresh`].
    #[must_use]
    pub const fn new(source: S, presenter: LogPresenter, state: LogViewState) -> Self {
        Self {
            source,
            presenter,
            state,
            snapshot: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Fetch a new snapshot with the current line limit.
    ///
    /// On failure the previous snapshot stays in place.
    pub fn refresh(&mut self) -> Result<(), FetchError> {
        self.fetch(self.state.line_limit)
    }

    /// Change the line limit, refetching only if it differs.
    ///
    /// The new limit is only committed once its fetch succeeds.
    pub fn set_line_limit(&mut self, limit: LineLimit) -> Result<(), FetchError> {
        if self.state.line_limit == limit {
            return Ok(());
        }
        self.fetch(limit)
    }

    fn fetch(&mut self, limit: LineLimit) -> Result<(), FetchError> {
        let lines = self.source.fetch_lines(limit).inspect_err(|e| {
            tracing::warn!("Failed to fetch logs, keeping previous snapshot: {e}");
        })?;

        self.state.line_limit = limit;
        self.snapshot = lines;
        self.represent();
        tracing::debug!("Fetched {} lines (limit {limit})", self.snapshot.len());
        Ok(())
    }

    /// Change the search query and re-filter the current snapshot
    pub fn set_query(&mut self, query: &str) {
        if self.state.query == query {
            return;
        }
        query.clone_into(&mut self.state.query);
        self.represent();
    }

    fn represent(&mut self) {
        self.entries = self.presenter.present(&self.snapshot, &self.state.query);
    }

    /// Entries to display, most recent first
    #[must_use]
    pub const fn entries(&self) -> &[ClassifiedLogEntry] {
        self.entries.as_slice()
    }

    /// Number of raw lines held from the last fetch
    #[must_use]
    pub const fn snapshot_len(&self) -> usize {
        self.snapshot.len()
    }

    /// Open the entry at `index` of [`Self::entries`] in the detail view
    pub fn select(&mut self, index: usize) -> Option<&ClassifiedLogEntry> {
        let entry = self.entries.get(index)?.clone();
        self.state.select(entry);
        self.state.selected()
    }

    pub fn clear_selection(&mut self) {
        self.state.clear_selection();
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&ClassifiedLogEntry> {
        self.state.selected()
    }

    #[must_use]
    pub const fn state(&self) -> &LogViewState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// In-memory source that records each requested limit
    struct StubSource {
        lines: RefCell<Result<Vec<String>, String>>,
        requests: RefCell<Vec<LineLimit>>,
        calls: Cell<usize>,
    }

    impl StubSource {
        fn with_lines(lines: &[&str]) -> Self {
            Self {
                lines: RefCell::new(Ok(lines.iter().map(|l| (*l).to_string()).collect())),
                requests: RefCell::new(Vec::new()),
                calls: Cell::new(0),
            }
        }

        fn fail_next(&self) {
            *self.lines.borrow_mut() = Err("boom".to_string());
        }

        fn recover(&self, lines: &[&str]) {
            *self.lines.borrow_mut() = Ok(lines.iter().map(|l| (*l).to_string()).collect());
        }
    }

    impl LogSource for StubSource {
        fn fetch_lines(&self, limit: LineLimit) -> Result<Vec<String>, FetchError> {
            self.calls.set(self.calls.get() + 1);
            self.requests.borrow_mut().push(limit);
            self.lines.borrow().clone().map_err(|msg| FetchError::Io {
                path: msg.into(),
                source: std::io::Error::other("stub failure"),
            })
        }
    }

    const LINES: [&str; 3] = [
        "127.0.0.1 - GET - 2024-01-05T10:15:30Z - /api/doctor - 200 - 512 - 45",
        "127.0.0.1 - POST - 2024-01-05T10:15:31Z - /api/brand - 201 - 80 - 300",
        "127.0.0.1 - GET - 2024-01-05T10:15:32Z - /api/logs - 500 - 0 - 1400",
    ];

    fn viewer(source: &StubSource) -> LogView<&StubSource> {
        LogView::new(source, LogPresenter::default(), LogViewState::default())
    }

    fn urls<S: LogSource>(view: &LogView<S>) -> Vec<String> {
        view.entries().iter().map(|e| e.parsed.url.clone()).collect()
    }

    #[test]
    fn test_refresh_presents_most_recent_first() {
        let source = StubSource::with_lines(&LINES);
        let mut view = viewer(&source);
        assert!(view.entries().is_empty());

        view.refresh().expect("refresh");
        assert_eq!(urls(&view), ["/api/logs", "/api/brand", "/api/doctor"]);
        assert_eq!(*source.requests.borrow(), [LineLimit::Last100]);
    }

    #[test]
    fn test_query_change_does_not_fetch() {
        let source = StubSource::with_lines(&LINES);
        let mut view = viewer(&source);
        view.refresh().expect("refresh");

        view.set_query("post");
        assert_eq!(urls(&view), ["/api/brand"]);
        view.set_query("");
        assert_eq!(view.entries().len(), 3);
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn test_limit_change_fetches_once() {
        let source = StubSource::with_lines(&LINES);
        let mut view = viewer(&source);
        view.refresh().expect("refresh");

        view.set_line_limit(LineLimit::Last100).expect("same limit");
        assert_eq!(source.calls.get(), 1);

        view.set_line_limit(LineLimit::Last1000).expect("new limit");
        assert_eq!(source.calls.get(), 2);
        assert_eq!(
            *source.requests.borrow(),
            [LineLimit::Last100, LineLimit::Last1000]
        );
        assert_eq!(view.state().line_limit, LineLimit::Last1000);
    }

    #[test]
    fn test_failed_fetch_keeps_snapshot() {
        let source = StubSource::with_lines(&LINES);
        let mut view = viewer(&source);
        view.refresh().expect("refresh");

        source.fail_next();
        assert!(view.set_line_limit(LineLimit::Last500).is_err());
        assert_eq!(view.entries().len(), 3);
        assert_eq!(view.snapshot_len(), 3);
        assert_eq!(view.state().line_limit, LineLimit::Last100);
    }

    #[test]
    fn test_failed_limit_change_can_be_retried() {
        let source = StubSource::with_lines(&LINES);
        let mut view = viewer(&source);
        view.refresh().expect("refresh");

        source.fail_next();
        assert!(view.set_line_limit(LineLimit::Last500).is_err());
        assert_eq!(source.calls.get(), 2);

        source.recover(&LINES[..1]);
        view.set_line_limit(LineLimit::Last500).expect("retry");
        assert_eq!(source.calls.get(), 3);
        assert_eq!(
            *source.requests.borrow(),
            [LineLimit::Last100, LineLimit::Last500, LineLimit::Last500]
        );
        assert_eq!(view.state().line_limit, LineLimit::Last500);
        assert_eq!(view.snapshot_len(), 1);
    }

    #[test]
    fn test_selection_survives_query_change() {
        let source = StubSource::with_lines(&LINES);
        let mut view = viewer(&source);
        view.refresh().expect("refresh");

        let selected = view.select(0).expect("entry 0").parsed.url.clone();
        assert_eq!(selected, "/api/logs");

        view.set_query("doctor");
        assert_eq!(
            view.selected().map(|e| e.parsed.url.as_str()),
            Some("/api/logs")
        );

        assert!(view.select(5).is_none());
        view.clear_selection();
        assert!(view.selected().is_none());
    }
}
