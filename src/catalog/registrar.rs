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

use crate::catalog::properties::{IcebergCatalogProperties, show_schemas_sql};
use crate::catalog::CatalogName;
use crate::config::InitConfig;
use crate::trino::{Cursor, TrinoClient, TrinoError};
use serde_json::Value;

/// What a registration attempt ended in
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// Catalog created; schemas listed by the verification query
    Created { schemas: Vec<String> },
    /// A previous run already created the catalog
    AlreadyExists,
    /// Anything else; the catalog has to be created by hand
    Failed { reason: String },
}

impl RegistrationOutcome {
    pub fn is_registered(&self) -> bool {
        !matches!(self, RegistrationOutcome::Failed { .. })
    }
}

/// Registers the Iceberg catalog in Trino and returns its name.
///
/// Never fails: errors are logged and the derived name is returned either way,
/// so the printed instructions stay consistent.
pub async fn register_catalog(config: &InitConfig) -> CatalogName {
    try_register_catalog(config).await.0
}

/// Like [`register_catalog`], but also reports the outcome.
pub async fn try_register_catalog(config: &InitConfig) -> (CatalogName, RegistrationOutcome) {
    log::info!("Setting up Trino catalog...");
    let catalog_name = CatalogName::from_bucket(&config.warehouse_bucket);

    let outcome = match create_and_verify(config, &catalog_name).await {
        Ok(schemas) => RegistrationOutcome::Created { schemas },
        Err(e) if e.is_already_exists() => {
            log::info!("Trino catalog '{catalog_name}' already exists");
            RegistrationOutcome::AlreadyExists
        }
        Err(e) => {
            log::warn!("Could not create Trino catalog: {e}");
            log::info!("You may need to create the catalog manually");
            RegistrationOutcome::Failed {
                reason: e.to_string(),
            }
        }
    };
    (catalog_name, outcome)
}

async fn create_and_verify(
    config: &InitConfig,
    catalog_name: &CatalogName,
) -> Result<Vec<String>, TrinoError> {
    let client = TrinoClient::connect(&config.trino_host, config.trino_port, &config.trino_user)?;
    let mut cursor = client.cursor();
    let result = run_statements(&mut cursor, config, catalog_name).await;
    cursor.close().await;
    result
}

async fn run_statements(
    cursor: &mut Cursor<'_>,
    config: &InitConfig,
    catalog_name: &CatalogName,
) -> Result<Vec<String>, TrinoError> {
    let create_sql = IcebergCatalogProperties::from_config(config).create_catalog_sql(catalog_name);

    log::info!("Creating Trino catalog: {catalog_name}");
    cursor.execute(&create_sql).await?;
    log::info!("Trino catalog '{catalog_name}' created successfully");

    cursor.execute(&show_schemas_sql(catalog_name)).await?;
    let schemas: Vec<String> = cursor
        .fetch_all()
        .into_iter()
        .filter_map(|row| row.into_iter().next())
        .map(value_to_string)
        .collect();
    log::info!("Available schemas in {catalog_name}: {schemas:?}");
    Ok(schemas)
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_to_string() {
        assert_eq!(value_to_string(json!("default")), "default");
        assert_eq!(value_to_string(json!(7)), "7");
        assert_eq!(value_to_string(Value::Null), "null");
    }

    #[test]
    fn test_outcome_is_registered() {
        assert!(RegistrationOutcome::Created { schemas: vec![] }.is_registered());
        assert!(RegistrationOutcome::AlreadyExists.is_registered());
        assert!(
            !RegistrationOutcome::Failed {
                reason: "boom".to_string()
            }
            .is_registered()
        );
    }
}
