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

//! Trino catalog registration for the MinIO Iceberg REST catalog
//!
//! The catalog is created dynamically with `CREATE CATALOG ... USING iceberg`
//! (Trino must run with `catalog.management=dynamic`) and verified with
//! `SHOW SCHEMAS`. A catalog left over from a previous run counts as success.

mod name;
pub mod properties;
mod registrar;

pub use name::CatalogName;
pub use properties::IcebergCatalogProperties;
pub use registrar::{RegistrationOutcome, register_catalog, try_register_catalog};
