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

//! Error types for the Trino client

use crate::trino::types::QueryError;
use http::StatusCode;
use thiserror::Error;

/// Error names Trino uses when a created object is already present
const ALREADY_EXISTS_ERROR_NAMES: &[&str] = &["ALREADY_EXISTS", "CATALOG_ALREADY_EXISTS"];

#[derive(Debug, Error)]
pub enum TrinoError {
    /// Transport failure: connection refused, DNS, timeout, TLS
    #[error("HTTP request to Trino failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Trino returned HTTP {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
    #[error("malformed Trino response: {0}")]
    MalformedResponse(String),
    #[error("query failed: {0}")]
    QueryFailed(QueryError),
    #[error("cursor is closed")]
    CursorClosed,
}

impl TrinoError {
    /// The coordinator's structured error, if the query itself failed
    pub fn query_error(&self) -> Option<&QueryError> {
        match self {
            TrinoError::QueryFailed(e) => Some(e),
            _ => None,
        }
    }

    /// Whether this error means the object being created is already there.
    ///
    /// The structured error name is checked first. The message match covers
    /// servers and proxies that only pass text through.
    pub fn is_already_exists(&self) -> bool {
        if let Some(e) = self.query_error()
            && ALREADY_EXISTS_ERROR_NAMES.contains(&e.error_name.as_str())
        {
            return true;
        }
        self.to_string().to_lowercase().contains("already exists")
    }
}
