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

//! Lenient number parsing for text fields of an access-log line.
//!
//! Servers sometimes append units or padding to numeric fields (`"45.2 ms"`,
//! `" 200"`). Only the leading numeric prefix is read; a field with no such
//! prefix yields `None`.

use fancy_regex::Regex;
use std::sync::LazyLock;

static INT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid regex literal"));

static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?))")
        .expect("valid regex literal")
});

fn leading_match<'a>(pattern: &Regex, text: &'a str) -> Option<&'a str> {
    pattern
        .captures(text)
        .ok()
        .flatten()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse the leading base-10 integer of `text`.
///
/// Returns `None` if there is no leading integer or it does not fit in an `i64`.
#[must_use]
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    leading_match(&INT_PREFIX, text)?.parse().ok()
}

/// Parse the leading decimal number (optionally with exponent) of `text`.
///
/// `Infinity` and exponents beyond the `f64` range read as infinite.
#[must_use]
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    leading_match(&FLOAT_PREFIX, text)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_prefix_plain() {
        assert_eq!(parse_int_prefix("200"), Some(200));
        assert_eq!(parse_int_prefix("  404"), Some(404));
        assert_eq!(parse_int_prefix("-1"), Some(-1));
    }

    #[test]
    fn test_int_prefix_trailing_garbage() {
        assert_eq!(parse_int_prefix("503 Service Unavailable"), Some(503));
        assert_eq!(parse_int_prefix("12.7"), Some(12));
    }

    #[test]
    fn test_int_prefix_rejects_non_numeric() {
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("abc200"), None);
        assert_eq!(parse_int_prefix("99999999999999999999999"), None);
    }

    #[test]
    fn test_float_prefix() {
        assert_eq!(parse_float_prefix("45"), Some(45.0));
        assert_eq!(parse_float_prefix("199.9"), Some(199.9));
        assert_eq!(parse_float_prefix(" 12.5ms"), Some(12.5));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("1e3"), Some(1000.0));
        assert_eq!(parse_float_prefix("3."), Some(3.0));
    }

    #[test]
    fn test_float_prefix_overflow_is_infinite() {
        assert_eq!(parse_float_prefix("1e400"), Some(f64::INFINITY));
        assert_eq!(parse_float_prefix("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float_prefix("-Infinity ms"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_float_prefix("NaN"), None);
    }

    #[test]
    fn test_float_prefix_rejects_non_numeric() {
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("-"), None);
        assert_eq!(parse_float_prefix("fast"), None);
    }
}
