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

//! Minimal Trino client over the HTTP statement protocol
//!
//! A statement is submitted with `POST /v1/statement`; the coordinator answers
//! with a [`QueryResults`] document whose `nextUri` is followed with `GET`
//! until it disappears. Rows arrive in the `data` field of any batch, and a
//! failed query carries an `error` object instead.
//!
//! # Example
//!
//! ```no_run
//! use iceberg_init::trino::TrinoClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TrinoClient::connect("localhost", 8080, "trino")?;
//! let mut cursor = client.cursor();
//! cursor.execute("SHOW CATALOGS").await?;
//! for row in cursor.fetch_all() {
//!     println!("{row:?}");
//! }
//! cursor.close().await;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod types;

pub use client::{Cursor, TrinoClient};
pub use error::TrinoError;
pub use types::{Column, QueryError, QueryResults, StatementStats};
