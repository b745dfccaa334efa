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

//! Sequential, best-effort initialization

use crate::catalog::{CatalogName, RegistrationOutcome, try_register_catalog};
use crate::config::InitConfig;
use crate::health::HealthProbe;
use crate::instructions::print_instructions;

const BANNER_WIDTH: usize = 60;

/// What happened during a run; informational only
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub minio_ready: bool,
    pub catalog_name: CatalogName,
    pub registration: RegistrationOutcome,
}

/// Probes MinIO, registers the Trino catalog and prints the instructions.
///
/// Each step runs whatever the previous one reported.
pub async fn run(config: &InitConfig) -> RunSummary {
    banner("API Log Iceberg Integration Test - Initialization");
    log::debug!("configuration: {config:?}");

    if let Err(e) = config.validate() {
        log::warn!("{e}");
    }

    let minio_ready = HealthProbe::from_config(config).wait().await;
    let (catalog_name, registration) = try_register_catalog(config).await;
    print_instructions(&catalog_name, config);

    banner("Initialization complete!");

    RunSummary {
        minio_ready,
        catalog_name,
        registration,
    }
}

fn banner(title: &str) {
    let rule = "=".repeat(BANNER_WIDTH);
    log::info!("{rule}");
    log::info!("{title}");
    log::info!("{rule}");
}
