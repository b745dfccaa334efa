// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::trino::error::TrinoError;
use crate::trino::types::{Column, QueryResults};
use http::StatusCode;
use reqwest::{Client as ReqwestClient, Method};
use serde_json::Value;
use std::time::Duration;

pub const STATEMENT_PATH: &str = "/v1/statement";

const X_TRINO_USER: &str = "X-Trino-User";
const X_TRINO_SOURCE: &str = "X-Trino-Source";
const SOURCE: &str = "iceberg-init";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_RETRIES: u32 = 3;
const RETRY_PAUSE: Duration = Duration::from_millis(100);

/// Connection to a Trino coordinator
///
/// Holds the HTTP client and session identity; statements run through a
/// [`Cursor`]. Dropping the client releases its connection pool.
#[derive(Clone, Debug)]
pub struct TrinoClient {
    http_client: ReqwestClient,
    base_url: String,
    user: String,
}

impl TrinoClient {
    /// Connects to `http://{host}:{port}` as `user`.
    ///
    /// No request is made here; the first statement surfaces unreachable
    /// coordinators.
    pub fn connect(host: &str, port: u16, user: &str) -> Result<Self, TrinoError> {
        Self::with_base_url(format!("http://{host}:{port}"), user)
    }

    /// Connects to an explicit base URL, e.g. `https://trino.example.com`.
    pub fn with_base_url(base_url: impl Into<String>, user: &str) -> Result<Self, TrinoError> {
        let http_client = ReqwestClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .tcp_nodelay(true)
            .build()?;
        let base_url: String = base_url.into();
        Ok(TrinoClient {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            user: user.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn cursor(&self) -> Cursor<'_> {
        Cursor {
            client: self,
            query_id: None,
            next_uri: None,
            columns: Vec::new(),
            rows: Vec::new(),
            closed: false,
        }
    }

    /// Sends one protocol request, retrying while the coordinator is busy.
    async fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<&str>,
    ) -> Result<QueryResults, TrinoError> {
        let mut retries = 0;
        loop {
            let mut req = self
                .http_client
                .request(method.clone(), url)
                .header(X_TRINO_USER, &self.user)
                .header(X_TRINO_SOURCE, SOURCE);
            if let Some(sql) = body {
                req = req.body(sql.to_string());
            }

            let resp = req.send().await?;
            let status = resp.status();
            if is_retryable(status) && retries < MAX_RETRIES {
                retries += 1;
                log::debug!("Trino answered {status} for {method} {url}, retry {retries}");
                tokio::time::sleep(RETRY_PAUSE).await;
                continue;
            }

            let bytes = resp.bytes().await?;
            if status != StatusCode::OK {
                return Err(TrinoError::UnexpectedStatus {
                    status,
                    body: String::from_utf8_lossy(&bytes).into_owned(),
                });
            }
            return serde_json::from_slice(&bytes)
                .map_err(|e| TrinoError::MalformedResponse(e.to_string()));
        }
    }
}

fn is_retryable(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT
    )
}

/// Executes statements and buffers their rows
///
/// A cursor must be [closed](Cursor::close) on every path: closing cancels a
/// query that is still running on the coordinator.
#[derive(Debug)]
pub struct Cursor<'a> {
    client: &'a TrinoClient,
    query_id: Option<String>,
    next_uri: Option<String>,
    columns: Vec<Column>,
    rows: Vec<Vec<Value>>,
    closed: bool,
}

impl Cursor<'_> {
    /// Runs `sql` to completion, buffering every row it returns.
    pub async fn execute(&mut self, sql: &str) -> Result<(), TrinoError> {
        if self.closed {
            return Err(TrinoError::CursorClosed);
        }
        self.query_id = None;
        self.next_uri = None;
        self.columns.clear();
        self.rows.clear();

        let url = format!("{}{}", self.client.base_url, STATEMENT_PATH);
        let mut results = self.client.request(Method::POST, &url, Some(sql)).await?;
        loop {
            self.absorb(results)?;
            let Some(next_uri) = self.next_uri.clone() else {
                return Ok(());
            };
            results = self.client.request(Method::GET, &next_uri, None).await?;
        }
    }

    fn absorb(&mut self, results: QueryResults) -> Result<(), TrinoError> {
        if self.query_id.is_none() {
            log::debug!("Trino query {} submitted", results.id);
            self.query_id = Some(results.id);
        }
        self.next_uri = results.next_uri;
        if let Some(columns) = results.columns {
            self.columns = columns;
        }
        if let Some(data) = results.data {
            self.rows.extend(data);
        }
        match results.error {
            Some(e) => Err(TrinoError::QueryFailed(e)),
            None => Ok(()),
        }
    }

    pub fn query_id(&self) -> Option<&str> {
        self.query_id.as_deref()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Takes the rows buffered by the last [`execute`](Cursor::execute).
    pub fn fetch_all(&mut self) -> Vec<Vec<Value>> {
        std::mem::take(&mut self.rows)
    }

    /// Releases the cursor.
    ///
    /// A query interrupted mid-protocol is cancelled with `DELETE {nextUri}`.
    /// Cancellation failures are only logged.
    pub async fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.rows.clear();
        let Some(next_uri) = self.next_uri.take() else {
            return;
        };
        let cancel = self
            .client
            .http_client
            .delete(&next_uri)
            .header(X_TRINO_USER, &self.client.user)
            .send()
            .await;
        match cancel {
            Ok(resp) => log::debug!("cancelled Trino query at {next_uri}: {}", resp.status()),
            Err(e) => log::debug!("could not cancel Trino query at {next_uri}: {e}"),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_builds_base_url() {
        let client = TrinoClient::connect("trino", 8080, "trino").unwrap();
        assert_eq!(client.base_url(), "http://trino:8080");
        assert_eq!(client.user(), "trino");

        let client = TrinoClient::with_base_url("https://trino.local/", "alice").unwrap();
        assert_eq!(client.base_url(), "https://trino.local");
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable(StatusCode::SERVICE_UNAVAILABLE));
        assert!(is_retryable(StatusCode::BAD_GATEWAY));
        assert!(is_retryable(StatusCode::GATEWAY_TIMEOUT));
        assert!(!is_retryable(StatusCode::OK));
        assert!(!is_retryable(StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn test_closed_cursor_rejects_execute() {
        let client = TrinoClient::connect("127.0.0.1", 1, "trino").unwrap();
        let mut cursor = client.cursor();
        cursor.close().await;
        assert!(cursor.is_closed());
        assert!(matches!(
            cursor.execute("SELECT 1").await,
            Err(TrinoError::CursorClosed)
        ));
    }
}
