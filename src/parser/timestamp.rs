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

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Common Log Format: 05/Jan/2024:10:15:30 +0000
const CLF_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Timestamps without an offset are read as UTC
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a request timestamp into an absolute instant.
///
/// Tries RFC 3339, RFC 2822 (which covers the `GMT` form of HTTP dates),
/// Common Log Format, naive date-times and finally bare dates.
#[must_use]
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_str(text, CLF_FORMAT) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
            .single()
            .expect("valid test date")
    }

    #[test]
    fn test_rfc3339() {
        assert_eq!(
            parse_timestamp("2024-01-05T10:15:30Z"),
            Some(utc(2024, 1, 5, 10, 15, 30))
        );
        assert_eq!(
            parse_timestamp("2024-01-05T15:45:30+05:30"),
            Some(utc(2024, 1, 5, 10, 15, 30))
        );
    }

    #[test]
    fn test_http_date() {
        assert_eq!(
            parse_timestamp("Fri, 05 Jan 2024 10:15:30 GMT"),
            Some(utc(2024, 1, 5, 10, 15, 30))
        );
    }

    #[test]
    fn test_common_log_format() {
        assert_eq!(
            parse_timestamp("05/Jan/2024:10:15:30 +0000"),
            Some(utc(2024, 1, 5, 10, 15, 30))
        );
    }

    #[test]
    fn test_naive_is_utc() {
        assert_eq!(
            parse_timestamp("2024-01-05 10:15:30"),
            Some(utc(2024, 1, 5, 10, 15, 30))
        );
        assert_eq!(
            parse_timestamp("2024-01-05T10:15:30.250"),
            utc(2024, 1, 5, 10, 15, 30).checked_add_signed(chrono::Duration::milliseconds(250))
        );
    }

    #[test]
    fn test_date_only() {
        assert_eq!(parse_timestamp("2024-01-05"), Some(utc(2024, 1, 5, 0, 0, 0)));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2024-13-45T99:00:00Z"), None);
    }
}
