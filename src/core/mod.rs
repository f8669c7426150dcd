pub mod classify;
pub mod filter;
pub mod log_view;
pub mod presenter;

pub use classify::{ClassifiedLogEntry, Level, LogClassifier, ResponseLevel, TimestampStyle};
pub use filter::{filter_entries, EntryMatcher};
pub use log_view::LogView;
pub use presenter::LogPresenter;
