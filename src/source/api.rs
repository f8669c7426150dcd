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

//! HTTP client for the admin API's server log endpoint.
//!
//! The bearer credential is bound when the client is built. A new
//! credential means a new client (see [`ApiClient::with_credential`]).

use super::{FetchError, LogSource};
use crate::state::LineLimit;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Deserialize;

/// Body of `GET /server/logs`
#[derive(Debug, Deserialize)]
struct LogsResponse {
    #[serde(default)]
    logs: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    authenticated: bool,
    http: Client,
}

impl ApiClient {
    /// Build a client for `base_url`, attaching `credential` as a bearer
    /// token to every request when present.
    pub fn new(base_url: &str, credential: Option<&str>) -> Result<Self, FetchError> {
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut headers = HeaderMap::new();
        if let Some(token) = credential {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| FetchError::InvalidCredential(e.to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("diplog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| FetchError::Http {
                url: base_url.clone(),
                source,
            })?;

        tracing::debug!(
            base_url = %base_url,
            authenticated = credential.is_some(),
            "Created API client"
        );

        Ok(Self {
            base_url,
            authenticated: credential.is_some(),
            http,
        })
    }

    /// Same API, different credential
    pub fn with_credential(&self, credential: Option<&str>) -> Result<Self, FetchError> {
        Self::new(&self.base_url, credential)
    }

    #[must_use]
    pub const fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    #[must_use]
    pub fn logs_url(&self) -> String {
        format!("{}/server/logs", self.base_url)
    }

    /// Fetch the last `limit` lines of the server's access log.
    ///
    /// Blank lines are dropped.
    pub fn fetch_logs(&self, limit: LineLimit) -> Result<Vec<String>, FetchError> {
        let url = self.logs_url();
        tracing::info!("Fetching last {limit} log lines from {url}");

        let response = self
            .http
            .get(&url)
            .query(&[("lines", limit.lines())])
            .send()
            .map_err(|source| FetchError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        let body: LogsResponse = response.json().map_err(|source| FetchError::Http {
            url: url.clone(),
            source,
        })?;
        let logs = body.logs.ok_or(FetchError::MissingLogs { url })?;

        let lines: Vec<String> = logs.into_iter().filter(|line| !line.is_empty()).collect();
        tracing::debug!("Received {} log lines", lines.len());
        Ok(lines)
    }
}

impl LogSource for ApiClient {
    fn fetch_lines(&self, limit: LineLimit) -> Result<Vec<String>, FetchError> {
        self.fetch_logs(limit)
    }
}
