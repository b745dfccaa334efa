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

use std::net::TcpListener;

/// Random bucket name with hyphens, e.g. `logs-1b4e28ba-2fa1-11d2-883f-0016d3cca427`
pub fn rand_bucket_name() -> String {
    format!("logs-{}", uuid::Uuid::new_v4())
}

/// Random Iceberg-safe identifier
pub fn rand_identifier(prefix: &str) -> String {
    format!("{prefix}_{}", uuid::Uuid::new_v4().to_string().replace('-', ""))
}

/// Base URL of a local port nothing listens on
pub fn unreachable_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
