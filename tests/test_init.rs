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

use httpmock::prelude::*;
use iceberg_init::catalog::RegistrationOutcome;
use iceberg_init::init::run;
use iceberg_init::instructions::render_instructions;
use iceberg_init_common::test_context::TestContext;
use iceberg_init_common::trino_responses;
use iceberg_init_common::utils::rand_identifier;

#[tokio::test]
async fn init_full_run_against_healthy_environment() {
    let ctx = TestContext::new();
    let live = ctx.mock_health(200);
    let (create, show) = ctx.mock_successful_registration("api_logs", &["default", "minio"]);

    let summary = run(&ctx.config).await;

    assert!(summary.minio_ready);
    assert_eq!(summary.catalog_name.as_str(), "api_logs");
    assert_eq!(
        summary.registration,
        RegistrationOutcome::Created {
            schemas: vec!["default".to_string(), "minio".to_string()]
        }
    );
    live.assert_calls(1);
    create.assert_calls(1);
    show.assert_calls(1);
}

#[tokio::test]
async fn init_registers_even_when_minio_never_becomes_ready() {
    let ctx = TestContext::new();
    let unavailable = ctx.mock_health(503);
    let create = ctx.mock_statement(
        "CREATE CATALOG",
        trino_responses::failed("c1", "ALREADY_EXISTS", "Catalog already exists"),
    );

    let summary = run(&ctx.config).await;

    assert!(!summary.minio_ready);
    assert_eq!(summary.registration, RegistrationOutcome::AlreadyExists);
    unavailable.assert_calls(ctx.config.health_max_attempts as usize);
    create.assert_calls(1);
}

#[tokio::test]
async fn init_completes_when_everything_fails() {
    let mut ctx = TestContext::new();
    ctx.config.minio_endpoint = "not a url".to_string();
    ctx.config.health_max_attempts = 1;
    ctx.server.mock(|when, then| {
        when.method(POST).path("/v1/statement");
        then.status(500);
    });

    let summary = run(&ctx.config).await;

    assert!(!summary.minio_ready);
    assert!(!summary.registration.is_registered());
    assert_eq!(summary.catalog_name.as_str(), "api_logs");
}

#[tokio::test]
async fn init_instructions_use_configured_names() {
    let mut ctx = TestContext::with_bucket("audit-trail");
    ctx.config.namespace = rand_identifier("ns");
    ctx.config.table_name = rand_identifier("tbl");
    ctx.mock_health(200);
    ctx.mock_successful_registration("audit_trail", &["default"]);

    let summary = run(&ctx.config).await;
    let text = render_instructions(&summary.catalog_name, &ctx.config);

    let namespace = &ctx.config.namespace;
    let table = &ctx.config.table_name;
    assert!(text.contains(&format!("audit-trail/{namespace}/{table}")));
    assert!(text.contains(&format!("USE audit_trail.{namespace};")));
    assert!(text.contains(&format!("SELECT COUNT(*) FROM {table};")));
    assert!(text.contains(&format!("FROM {table} LIMIT 10;")));
    assert!(text.contains("CREATE CATALOG audit_trail USING iceberg WITH ("));
}
