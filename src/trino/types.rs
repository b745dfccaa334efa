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

//! Wire types of the Trino client protocol
//!
//! Only the fields this crate reads are modelled; unknown fields are ignored.
//!
//! ## QueryResults
//!
//! | Field     | Type                   | Description                              |
//! |-----------|------------------------|------------------------------------------|
//! | `id`      | `string`               | Query identifier                         |
//! | `nextUri` | `string` or absent     | Where to fetch the next batch            |
//! | `columns` | `array[Column]`        | Result columns, once known               |
//! | `data`    | `array[array[any]]`    | Rows of this batch                       |
//! | `stats`   | `StatementStats`       | Execution state (`QUEUED`, `FINISHED`..) |
//! | `error`   | `QueryError` or absent | Set when the query failed                |

use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// One response document of the statement protocol
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResults {
    pub id: String,
    #[serde(default)]
    pub next_uri: Option<String>,
    #[serde(default)]
    pub columns: Option<Vec<Column>>,
    #[serde(default)]
    pub data: Option<Vec<Vec<Value>>>,
    #[serde(default)]
    pub stats: Option<StatementStats>,
    #[serde(default)]
    pub error: Option<QueryError>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementStats {
    #[serde(default)]
    pub state: String,
}

/// Structured failure reported by the coordinator
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QueryError {
    pub message: String,
    #[serde(default)]
    pub error_code: i32,
    /// Symbolic code, e.g. `ALREADY_EXISTS` or `CATALOG_NOT_FOUND`
    #[serde(default)]
    pub error_name: String,
    /// `USER_ERROR`, `INTERNAL_ERROR`, `INSUFFICIENT_RESOURCES` or `EXTERNAL`
    #[serde(default)]
    pub error_type: String,
    #[serde(default)]
    pub sql_state: Option<String>,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.error_name.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} ({}): {}", self.error_name, self.error_code, self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_running_batch() {
        let body = r#"{
            "id": "20250101_000000_00001_abcde",
            "infoUri": "http://trino:8080/ui/query.html?20250101_000000_00001_abcde",
            "nextUri": "http://trino:8080/v1/statement/executing/20250101_000000_00001_abcde/y1/1",
            "columns": [{"name": "Schema", "type": "varchar(7)", "typeSignature": {}}],
            "data": [["default"], ["information_schema"]],
            "stats": {"state": "RUNNING", "queued": false},
            "warnings": []
        }"#;
        let results: QueryResults = serde_json::from_str(body).unwrap();
        assert!(results.next_uri.is_some());
        assert_eq!(
            results.columns.unwrap(),
            vec![Column {
                name: "Schema".to_string(),
                column_type: "varchar(7)".to_string()
            }]
        );
        assert_eq!(results.data.unwrap().len(), 2);
        assert_eq!(results.stats.unwrap().state, "RUNNING");
        assert!(results.error.is_none());
    }

    #[test]
    fn test_parse_failed_query() {
        let body = r#"{
            "id": "q1",
            "stats": {"state": "FAILED"},
            "error": {
                "message": "line 1:1: Catalog 'api_logs' already exists",
                "errorCode": 28,
                "errorName": "ALREADY_EXISTS",
                "errorType": "USER_ERROR",
                "failureInfo": {"type": "io.trino.spi.TrinoException"}
            }
        }"#;
        let results: QueryResults = serde_json::from_str(body).unwrap();
        let error = results.error.unwrap();
        assert_eq!(error.error_name, "ALREADY_EXISTS");
        assert_eq!(
            error.to_string(),
            "ALREADY_EXISTS (28): line 1:1: Catalog 'api_logs' already exists"
        );
    }
}
