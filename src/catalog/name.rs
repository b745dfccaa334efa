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

use std::fmt;

/// Trino catalog identifier derived from a warehouse bucket name
///
/// Bucket names may contain hyphens, unquoted Trino identifiers may not, so
/// every `-` becomes `_`.
///
/// # Example
///
/// ```
/// use iceberg_init::catalog::CatalogName;
///
/// let name = CatalogName::from_bucket("api-logs");
/// assert_eq!(name.as_str(), "api_logs");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CatalogName(String);

impl CatalogName {
    pub fn from_bucket(bucket: &str) -> Self {
        CatalogName(bucket.replace('-', "_"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for CatalogName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CatalogName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bucket() {
        assert_eq!(CatalogName::from_bucket("api-logs").as_str(), "api_logs");
    }

    #[test]
    fn test_names_without_hyphens_are_unchanged() {
        assert_eq!(CatalogName::from_bucket("warehouse").as_str(), "warehouse");
        assert_eq!(CatalogName::from_bucket("api_logs").as_str(), "api_logs");
        assert_eq!(CatalogName::from_bucket("").as_str(), "");
    }

    #[test]
    fn test_display() {
        let name = CatalogName::from_bucket("my-log-bucket");
        assert_eq!(format!("{name}"), "my_log_bucket");
        assert_eq!(name.into_inner(), "my_log_bucket");
    }

    quickcheck! {
        fn prop_no_hyphens_survive(bucket: String) -> bool {
            !CatalogName::from_bucket(&bucket).as_str().contains('-')
        }

        fn prop_hyphens_map_to_underscores(bucket: String) -> bool {
            let name = CatalogName::from_bucket(&bucket);
            name.as_str().chars().count() == bucket.chars().count()
                && bucket
                    .chars()
                    .zip(name.as_str().chars())
                    .all(|(b, c)| if b == '-' { c == '_' } else { b == c })
        }
    }
}
