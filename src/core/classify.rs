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

//! Classification of parsed access-log entries.
//!
//! Derives a severity level from the status code, a speed bucket from the
//! response time and a display timestamp in the configured timezone.
//! Numeric fields that cannot be read are kept as `None` and fall into the
//! lowest severity and fastest bucket.

use crate::parser::numeric::{parse_float_prefix, parse_int_prefix};
use crate::parser::timestamp::parse_timestamp;
use crate::parser::ParsedLogEntry;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

/// Display timezone used when none is configured (Indian Standard Time)
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Kolkata;

/// Year, abbreviated month, 2-digit day and 12-hour time with seconds
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d %b %Y, %I:%M:%S %p";

const SLOW_THRESHOLD_MS: f64 = 200.0;
const VERY_SLOW_THRESHOLD_MS: f64 = 1000.0;

/// Request outcome derived from the HTTP status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Warning,
    Error,
}

impl Level {
    /// `>= 500` is an error, `>= 400` a warning, anything else (including an
    /// unreadable status) a success.
    #[must_use]
    pub const fn from_status(status_code: Option<i64>) -> Self {
        match status_code {
            Some(code) if code >= 500 => Self::Error,
            Some(code) if code >= 400 => Self::Warning,
            _ => Self::Success,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Latency bucket derived from the response time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseLevel {
    Normal,
    Slow,
    VerySlow,
}

impl ResponseLevel {
    /// Under 200ms is normal, under 1000ms slow, anything above very slow.
    /// An unreadable response time counts as normal.
    #[must_use]
    pub const fn from_millis(response_time_ms: Option<f64>) -> Self {
        match response_time_ms {
            Some(ms) if ms >= VERY_SLOW_THRESHOLD_MS => Self::VerySlow,
            Some(ms) if ms >= SLOW_THRESHOLD_MS => Self::Slow,
            _ => Self::Normal,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Slow => "slow",
            Self::VerySlow => "very-slow",
        }
    }
}

impl fmt::Display for ResponseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check that a strftime format string only contains known specifiers
#[must_use]
pub fn is_valid_timestamp_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Timezone and format used to render request timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampStyle {
    pub timezone: Tz,
    pub format: String,
}

impl Default for TimestampStyle {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl TimestampStyle {
    #[must_use]
    pub const fn new(timezone: Tz, format: String) -> Self {
        Self { timezone, format }
    }

    /// Render `instant` in the display timezone.
    ///
    /// Falls back to RFC 3339 in the display timezone if the format string
    /// is invalid.
    #[must_use]
    pub fn format(&self, instant: DateTime<Utc>) -> String {
        let local = instant.with_timezone(&self.timezone);
        let mut out = String::new();
        if write!(out, "{}", local.format(&self.format)).is_err() {
            tracing::warn!("Invalid timestamp format {:?}, using RFC 3339", self.format);
            return local.to_rfc3339();
        }
        out
    }
}

/// A parsed entry enriched with numeric fields, derived levels and the
/// display timestamp. Retains the raw line for the detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedLogEntry {
    #[serde(flatten)]
    pub parsed: ParsedLogEntry,
    pub status_code: Option<i64>,
    pub response_time_ms: Option<f64>,
    pub level: Level,
    pub response_level: ResponseLevel,
    pub instant: Option<DateTime<Utc>>,
    pub formatted_timestamp: String,
    pub raw_log: String,
}

impl ClassifiedLogEntry {
    /// Status code as text, empty if the status field was unreadable
    #[must_use]
    pub fn status_text(&self) -> String {
        self.status_code.map(|code| code.to_string()).unwrap_or_default()
    }
}

/// Turns parsed entries into classified ones
#[derive(Debug, Clone, Default)]
pub struct LogClassifier {
    style: TimestampStyle,
}

impl LogClassifier {
    #[must_use]
    pub const fn new(style: TimestampStyle) -> Self {
        Self { style }
    }

    /// Classify one parsed entry. `raw` is the line it was parsed from.
    #[must_use]
    pub fn classify(&self, raw: &str, parsed: ParsedLogEntry) -> ClassifiedLogEntry {
        let status_code = parse_int_prefix(&parsed.status);
        let response_time_ms = parse_float_prefix(&parsed.response_time);
        let instant = parse_timestamp(&parsed.timestamp);

        // Unreadable timestamps are shown as written
        let formatted_timestamp = instant.map_or_else(
            || parsed.timestamp.clone(),
            |instant| self.style.format(instant),
        );

        ClassifiedLogEntry {
            status_code,
            response_time_ms,
            level: Level::from_status(status_code),
            response_level: ResponseLevel::from_millis(response_time_ms),
            instant,
            formatted_timestamp,
            raw_log: raw.to_string(),
            parsed,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::parser::parse_line;

    /// Parse and classify `raw` with the default style
    pub(crate) fn classified(raw: &str) -> ClassifiedLogEntry {
        let parsed = parse_line(raw).expect("test line should parse");
        LogClassifier::default().classify(raw, parsed)
    }

    fn line(status: &str, response_time: &str) -> String {
        format!("10.0.0.1 - GET - 2024-01-05T10:15:30Z - /x - {status} - 10 - {response_time}")
    }

    #[test]
    fn test_severity_boundaries() {
        for code in [500, 503, 599] {
            assert_eq!(Level::from_status(Some(code)), Level::Error, "{code}");
        }
        for code in [400, 404, 499] {
            assert_eq!(Level::from_status(Some(code)), Level::Warning, "{code}");
        }
        for code in [200, 301, 399] {
            assert_eq!(Level::from_status(Some(code)), Level::Success, "{code}");
        }
    }

    #[test]
    fn test_speed_boundaries() {
        for ms in [0.0, 199.9] {
            assert_eq!(ResponseLevel::from_millis(Some(ms)), ResponseLevel::Normal);
        }
        for ms in [200.0, 999.9] {
            assert_eq!(ResponseLevel::from_millis(Some(ms)), ResponseLevel::Slow);
        }
        for ms in [1000.0, 5000.0] {
            assert_eq!(ResponseLevel::from_millis(Some(ms)), ResponseLevel::VerySlow);
        }
    }

    #[test]
    fn test_classify_sample_line() {
        let raw = "127.0.0.1 - GET - 2024-01-05T10:15:30Z - /api/doctor - 200 - 512 - 45";
        let entry = classified(raw);

        assert_eq!(entry.status_code, Some(200));
        assert_eq!(entry.response_time_ms, Some(45.0));
        assert_eq!(entry.level, Level::Success);
        assert_eq!(entry.response_level, ResponseLevel::Normal);
        assert_eq!(entry.raw_log, raw);
        // 10:15:30 UTC is 15:45:30 IST
        assert_eq!(entry.formatted_timestamp, "05 Jan 2024, 03:45:30 PM");
    }

    #[test]
    fn test_classify_error_and_slow() {
        let entry = classified(&line("502", "1500.5"));
        assert_eq!(entry.level, Level::Error);
        assert_eq!(entry.response_level, ResponseLevel::VerySlow);
        assert_eq!(entry.response_time_ms, Some(1500.5));

        let entry = classified(&line("404", "250"));
        assert_eq!(entry.level, Level::Warning);
        assert_eq!(entry.response_level, ResponseLevel::Slow);
    }

    #[test]
    fn test_overflowing_response_time_is_very_slow() {
        for response_time in ["1e400", "Infinity"] {
            let entry = classified(&line("200", response_time));
            assert_eq!(entry.response_time_ms, Some(f64::INFINITY));
            assert_eq!(entry.response_level, ResponseLevel::VerySlow);
        }
    }

    #[test]
    fn test_unreadable_numbers_use_lowest_buckets() {
        let entry = classified(&line("-", "-"));
        assert_eq!(entry.status_code, None);
        assert_eq!(entry.response_time_ms, None);
        assert_eq!(entry.level, Level::Success);
        assert_eq!(entry.response_level, ResponseLevel::Normal);
        assert_eq!(entry.status_text(), "");
    }

    #[test]
    fn test_unreadable_timestamp_kept_verbatim() {
        let raw = "10.0.0.1 - GET - sometime - /x - 200 - 10 - 5";
        let entry = classified(raw);
        assert_eq!(entry.instant, None);
        assert_eq!(entry.formatted_timestamp, "sometime");
    }

    #[test]
    fn test_other_timezone() {
        let classifier = LogClassifier::new(TimestampStyle::new(
            chrono_tz::UTC,
            "%Y-%m-%d %H:%M:%S".to_string(),
        ));
        let raw = line("200", "1");
        let parsed = parse_line(&raw).expect("should parse");
        let entry = classifier.classify(&raw, parsed);
        assert_eq!(entry.formatted_timestamp, "2024-01-05 10:15:30");
    }

    #[test]
    fn test_invalid_format_falls_back_to_rfc3339() {
        assert!(is_valid_timestamp_format(DEFAULT_TIMESTAMP_FORMAT));
        assert!(!is_valid_timestamp_format("%Q"));

        let style = TimestampStyle::new(DEFAULT_TIMEZONE, "%Q".to_string());
        let instant = parse_timestamp("2024-01-05T10:15:30Z").expect("valid");
        assert_eq!(style.format(instant), "2024-01-05T15:45:30+05:30");
    }

    #[test]
    fn test_serialized_names() {
        let entry = classified(&line("503", "1200"));
        let json = serde_json::to_value(&entry).expect("serialize");
        assert_eq!(json["level"], "error");
        assert_eq!(json["responseLevel"], "very-slow");
        assert_eq!(json["statusCode"], 503);
        assert_eq!(json["remoteAddr"], "10.0.0.1");
        assert_eq!(json["contentLength"], "10");
        assert!(json["rawLog"].as_str().is_some());
    }
}
