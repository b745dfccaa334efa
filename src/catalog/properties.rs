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

//! Trino Iceberg connector properties for MinIO's REST catalog
//!
//! The catalog talks to `{endpoint}/_iceberg` with SigV4 signing under the
//! `s3tables` service name, and reads data files through Trino's native S3
//! filesystem with path-style addressing.

use crate::catalog::CatalogName;
use crate::config::InitConfig;
use typed_builder::TypedBuilder;

/// Service name MinIO expects in SigV4 signatures for the Tables API
pub const SIGNING_NAME: &str = "s3tables";

#[derive(Clone, TypedBuilder)]
pub struct IcebergCatalogProperties {
    #[builder(setter(into))]
    rest_catalog_uri: String,
    #[builder(setter(into))]
    warehouse: String,
    #[builder(setter(into))]
    region: String,
    #[builder(setter(into))]
    access_key: String,
    #[builder(setter(into))]
    secret_key: String,
    #[builder(setter(into))]
    s3_endpoint: String,
}

impl IcebergCatalogProperties {
    pub fn from_config(config: &InitConfig) -> Self {
        IcebergCatalogProperties::builder()
            .rest_catalog_uri(config.rest_catalog_uri())
            .warehouse(config.warehouse_bucket.as_str())
            .region(config.region.as_str())
            .access_key(config.access_key.as_str())
            .secret_key(config.secret_key.as_str())
            .s3_endpoint(config.endpoint())
            .build()
    }

    /// Connector properties in the order they appear in the DDL
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("iceberg.catalog.type", "rest".to_string()),
            ("iceberg.rest-catalog.uri", self.rest_catalog_uri.clone()),
            ("iceberg.rest-catalog.warehouse", self.warehouse.clone()),
            (
                "iceberg.rest-catalog.vended-credentials-enabled",
                "true".to_string(),
            ),
            ("iceberg.rest-catalog.security", "SIGV4".to_string()),
            ("iceberg.rest-catalog.signing-name", SIGNING_NAME.to_string()),
            ("s3.region", self.region.clone()),
            ("s3.aws-access-key", self.access_key.clone()),
            ("s3.aws-secret-key", self.secret_key.clone()),
            ("s3.endpoint", self.s3_endpoint.clone()),
            ("s3.path-style-access", "true".to_string()),
            ("fs.hadoop.enabled", "false".to_string()),
            ("fs.native-s3.enabled", "true".to_string()),
        ]
    }

    /// `CREATE CATALOG` statement, one property per line, without a trailing `;`.
    pub fn create_catalog_sql(&self, catalog_name: &CatalogName) -> String {
        let props = self
            .entries()
            .into_iter()
            .map(|(key, value)| format!("  \"{key}\" = {}", sql_literal(&value)))
            .collect::<Vec<_>>()
            .join(",\n");
        format!("CREATE CATALOG {catalog_name} USING iceberg WITH (\n{props}\n)")
    }
}

/// Quotes a value as a SQL string literal.
fn sql_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Verification query run after the catalog is created
pub fn show_schemas_sql(catalog_name: &CatalogName) -> String {
    format!("SHOW SCHEMAS FROM {catalog_name}")
}
