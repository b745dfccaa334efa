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

//! # API Log Iceberg Integration Test - Initialization
//!
//! This crate prepares an integration-test environment in which a MinIO
//! cluster writes its API logs into an Iceberg table, and Trino is used to
//! query that table.
//!
//! The initialization is a strictly sequential, best-effort routine:
//!
//! 1. [`health::wait_for_ready`] polls `GET /minio/health/live` until the
//!    cluster answers `200 OK` or the attempt budget runs out.
//! 2. [`catalog::register_catalog`] connects to Trino and issues a
//!    `CREATE CATALOG ... USING iceberg` statement pointing at MinIO's
//!    Iceberg REST catalog (`/_iceberg`), then verifies it with
//!    `SHOW SCHEMAS`.
//! 3. [`instructions::print_instructions`] prints how to generate traffic and
//!    query the resulting logs.
//!
//! None of the steps is fatal; problems are reported as log warnings and the
//! binary always exits with status `0`.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use iceberg_init::config::InitConfig;
//!
//! #[tokio::main]
//! async fn main() {
//!     iceberg_init::logging::init();
//!     let config = InitConfig::load().unwrap_or_default();
//!     let summary = iceberg_init::init::run(&config).await;
//!     println!("catalog: {}", summary.catalog_name);
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod health;
pub mod init;
pub mod instructions;
pub mod logging;
pub mod trino;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
