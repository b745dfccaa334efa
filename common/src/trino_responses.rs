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

//! Canned `QueryResults` documents of the Trino statement protocol

use serde_json::{Value, json};

pub fn queued(id: &str, next_uri: &str) -> Value {
    json!({
        "id": id,
        "infoUri": format!("http://trino:8080/ui/query.html?{id}"),
        "nextUri": next_uri,
        "stats": {"state": "QUEUED", "queued": true},
        "warnings": []
    })
}

pub fn finished(id: &str) -> Value {
    json!({
        "id": id,
        "stats": {"state": "FINISHED"},
        "updateType": "CREATE CATALOG",
        "warnings": []
    })
}

pub fn finished_with_rows(id: &str, column: &str, rows: &[&str]) -> Value {
    let data: Vec<Value> = rows.iter().map(|r| json!([r])).collect();
    json!({
        "id": id,
        "columns": [{"name": column, "type": "varchar"}],
        "data": data,
        "stats": {"state": "FINISHED"},
        "warnings": []
    })
}

pub fn failed(id: &str, error_name: &str, message: &str) -> Value {
    json!({
        "id": id,
        "stats": {"state": "FAILED"},
        "error": {
            "message": message,
            "errorCode": 28,
            "errorName": error_name,
            "errorType": "USER_ERROR",
            "failureInfo": {"type": "io.trino.spi.TrinoException", "message": message}
        },
        "warnings": []
    })
}
