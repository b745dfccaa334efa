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

use crate::trino_responses;
use httpmock::prelude::*;
use httpmock::Mock;
use iceberg_init::config::InitConfig;
use iceberg_init::health::HEALTH_LIVE_PATH;
use iceberg_init::trino::TrinoClient;
use serde_json::Value;

/// One mock server standing in for both MinIO and the Trino coordinator
pub struct TestContext {
    pub server: MockServer,
    pub config: InitConfig,
}

impl TestContext {
    pub fn new() -> Self {
        let server = MockServer::start();
        let config = InitConfig {
            minio_endpoint: server.base_url(),
            trino_host: server.host(),
            trino_port: server.port(),
            health_max_attempts: 3,
            health_interval_secs: 0,
            health_timeout_secs: 1,
            ..InitConfig::default()
        };
        log::debug!("mock server at {}", server.base_url());
        Self { server, config }
    }

    pub fn with_bucket(bucket: &str) -> Self {
        let mut ctx = Self::new();
        ctx.config.warehouse_bucket = bucket.to_string();
        ctx
    }

    pub fn trino_client(&self) -> TrinoClient {
        TrinoClient::with_base_url(self.server.base_url(), &self.config.trino_user).unwrap()
    }

    /// Answers the MinIO liveness probe with `status`.
    pub fn mock_health(&self, status: u16) -> Mock<'_> {
        self.server.mock(|when, then| {
            when.method(GET).path(HEALTH_LIVE_PATH);
            then.status(status);
        })
    }

    /// Answers any submitted statement containing `sql_fragment` with `body`.
    pub fn mock_statement(&self, sql_fragment: &str, body: Value) -> Mock<'_> {
        let fragment = sql_fragment.to_string();
        self.server.mock(|when, then| {
            when.method(POST)
                .path("/v1/statement")
                .header("x-trino-user", "trino")
                .body_includes(fragment);
            then.status(200).json_body(body);
        })
    }

    /// Answers a `nextUri` poll at `path` with `body`.
    pub fn mock_next(&self, path: &str, body: Value) -> Mock<'_> {
        let path = path.to_string();
        self.server.mock(|when, then| {
            when.method(GET).path(path);
            then.status(200).json_body(body);
        })
    }

    /// Mocks a successful `CREATE CATALOG` and the `SHOW SCHEMAS` that follows.
    pub fn mock_successful_registration(&self, catalog: &str, schemas: &[&str]) -> (Mock<'_>, Mock<'_>) {
        let create = self.mock_statement("CREATE CATALOG", trino_responses::finished("create_1"));
        let show = self.mock_statement(
            &format!("SHOW SCHEMAS FROM {catalog}"),
            trino_responses::finished_with_rows("show_1", "Schema", schemas),
        );
        (create, show)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
