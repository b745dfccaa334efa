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

//! Operator instructions printed once setup is done

use crate::catalog::{CatalogName, IcebergCatalogProperties};
use crate::config::InitConfig;

const RULE_WIDTH: usize = 70;

/// Prints the instruction block to stdout.
pub fn print_instructions(catalog_name: &CatalogName, config: &InitConfig) {
    println!("{}", render_instructions(catalog_name, config));
}

/// Renders the instruction block.
pub fn render_instructions(catalog_name: &CatalogName, config: &InitConfig) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let bucket = &config.warehouse_bucket;
    let namespace = &config.namespace;
    let table = &config.table_name;
    let access_key = &config.access_key;
    let secret_key = &config.secret_key;
    let mc_url = &config.mc_alias_url;
    let console_url = &config.console_url;
    let trino_ui_url = &config.trino_ui_url;
    let manual_ddl = IcebergCatalogProperties::from_config(config)
        .create_catalog_sql(catalog_name)
        .lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"
{rule}
SETUP COMPLETE
{rule}

The MinIO cluster is configured to write API logs to an Iceberg table.
Logs will be written to: {bucket}/{namespace}/{table}

CONFIGURATION:
  - Write interval: logs are batched and written to Parquet files periodically
  - Commit interval: Parquet files are committed to Iceberg periodically
  - Both intervals are configurable via environment variables

STEP 1: Generate API Traffic
============================
Use the mc client to generate API traffic that will be logged:

  # Install mc if not already installed
  # https://min.io/docs/minio/linux/reference/minio-mc.html

  # Set up alias
  mc alias set minio {mc_url} {access_key} {secret_key}

  # Create a test bucket and upload files
  mc mb minio/test-bucket
  for i in $(seq 1 100); do
    echo "test data $i" | mc pipe minio/test-bucket/file-$i.txt
  done

  # List objects, get objects, etc.
  mc ls minio/test-bucket
  mc cat minio/test-bucket/file-1.txt
  mc stat minio/test-bucket/file-1.txt

STEP 2: Wait for Logs to be Committed
=====================================
The API logs are:
  1. Written to local storage on each MinIO node
  2. Periodically batched into Parquet files (write_interval)
  3. Committed to the Iceberg table by the leader (commit_interval)

Default intervals are 30s write / 1m commit for this test setup.
Wait at least 2 minutes after generating traffic for logs to appear.

STEP 3: Query Logs with Trino
=============================
Connect to Trino and query the API logs:

  # Using Trino CLI
  docker exec -it trino trino

  # In Trino, query the table
  USE {catalog_name}.{namespace};
  SELECT COUNT(*) FROM {table};
  SELECT time, name, bucket, object, httpStatusCode FROM {table} LIMIT 10;
  SELECT name, COUNT(*) as cnt FROM {table} GROUP BY name ORDER BY cnt DESC;

  # Time-based queries
  SELECT * FROM {table} WHERE time > TIMESTAMP '2024-01-01 00:00:00';

ALTERNATIVE: Create Trino Catalog Manually
==========================================
If the catalog wasn't created automatically, create it in Trino:

{manual_ddl};

WEB INTERFACES:
  - MinIO Console: {console_url} ({access_key}/{secret_key})
  - Trino UI: {trino_ui_url}

{rule}"#
    )
}
