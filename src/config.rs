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

//! Run configuration sourced from the process environment
//!
//! Every setting has a default, so the binary runs unconfigured inside the
//! docker-compose test environment. Command-line flags override environment
//! variables.

use clap::Parser;
use std::ffi::OsString;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_MINIO_ENDPOINT: &str = "http://nginx:9000";
pub const DEFAULT_ACCESS_KEY: &str = "minioadmin";
pub const DEFAULT_SECRET_KEY: &str = "minioadmin";
pub const DEFAULT_WAREHOUSE_BUCKET: &str = "api-logs";
pub const DEFAULT_NAMESPACE: &str = "minio";
pub const DEFAULT_TABLE_NAME: &str = "api_logs";
pub const DEFAULT_TRINO_HOST: &str = "trino";
pub const DEFAULT_TRINO_PORT: u16 = 8080;
pub const DEFAULT_TRINO_USER: &str = "trino";
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_HEALTH_MAX_ATTEMPTS: u32 = 60;
pub const DEFAULT_HEALTH_INTERVAL_SECS: u64 = 2;
pub const DEFAULT_HEALTH_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_MC_ALIAS_URL: &str = "http://localhost:9000";
pub const DEFAULT_CONSOLE_URL: &str = "http://localhost:9001";
pub const DEFAULT_TRINO_UI_URL: &str = "http://localhost:9999";

/// Errors reported by [`InitConfig::validate`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid MinIO endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("invalid Trino port {0}")]
    InvalidPort(u16),
    #[error("{0} must be greater than zero")]
    ZeroValue(&'static str),
}

/// Raw command-line and environment settings
///
/// Numeric knobs are kept as strings here so that one malformed value does not
/// reject the whole command line. [`InitConfig::from`] parses them one by one.
#[derive(Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct InitArgs {
    /// MinIO (or load balancer) endpoint URL
    #[arg(long, env = "MINIO_ENDPOINT", default_value = DEFAULT_MINIO_ENDPOINT)]
    pub minio_endpoint: String,

    /// Access key used for the catalog and the printed `mc` commands
    #[arg(long, env = "MINIO_ACCESS_KEY", default_value = DEFAULT_ACCESS_KEY)]
    pub access_key: String,

    /// Secret key used for the catalog and the printed `mc` commands
    #[arg(
        long,
        env = "MINIO_SECRET_KEY",
        default_value = DEFAULT_SECRET_KEY,
        hide_env_values = true
    )]
    pub secret_key: String,

    /// Warehouse bucket the API logs are written to
    #[arg(long, env = "WAREHOUSE_BUCKET", default_value = DEFAULT_WAREHOUSE_BUCKET)]
    pub warehouse_bucket: String,

    /// Iceberg namespace holding the log table
    #[arg(long, env = "NAMESPACE", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Iceberg table holding the API logs
    #[arg(long, env = "TABLE_NAME", default_value = DEFAULT_TABLE_NAME)]
    pub table_name: String,

    /// Trino coordinator host
    #[arg(long, env = "TRINO_HOST", default_value = DEFAULT_TRINO_HOST)]
    pub trino_host: String,

    /// Trino coordinator HTTP port
    #[arg(long, env = "TRINO_PORT", default_value_t = DEFAULT_TRINO_PORT.to_string())]
    pub trino_port: String,

    /// User name sent to Trino
    #[arg(long, env = "TRINO_USER", default_value = DEFAULT_TRINO_USER)]
    pub trino_user: String,

    /// Region used for SigV4 signing against the Iceberg REST catalog
    #[arg(long, env = "S3_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Number of health probes before giving up
    #[arg(
        long,
        env = "HEALTH_MAX_ATTEMPTS",
        default_value_t = DEFAULT_HEALTH_MAX_ATTEMPTS.to_string()
    )]
    pub health_max_attempts: String,

    /// Seconds to wait between health probes
    #[arg(
        long,
        env = "HEALTH_INTERVAL_SECS",
        default_value_t = DEFAULT_HEALTH_INTERVAL_SECS.to_string()
    )]
    pub health_interval_secs: String,

    /// Per-request timeout of a health probe, in seconds
    #[arg(
        long,
        env = "HEALTH_TIMEOUT_SECS",
        default_value_t = DEFAULT_HEALTH_TIMEOUT_SECS.to_string()
    )]
    pub health_timeout_secs: String,

    /// Host-side URL of the MinIO endpoint used in the `mc alias` instruction
    #[arg(long, env = "MC_ALIAS_URL", default_value = DEFAULT_MC_ALIAS_URL)]
    pub mc_alias_url: String,

    /// Host-side URL of the MinIO console
    #[arg(long, env = "CONSOLE_URL", default_value = DEFAULT_CONSOLE_URL)]
    pub console_url: String,

    /// Host-side URL of the Trino web UI
    #[arg(long, env = "TRINO_UI_URL", default_value = DEFAULT_TRINO_UI_URL)]
    pub trino_ui_url: String,
}

/// Settings for one initialization run. Immutable once parsed.
#[derive(Clone)]
pub struct InitConfig {
    pub minio_endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    pub warehouse_bucket: String,
    pub namespace: String,
    pub table_name: String,
    pub trino_host: String,
    pub trino_port: u16,
    pub trino_user: String,
    pub region: String,
    pub health_max_attempts: u32,
    pub health_interval_secs: u64,
    pub health_timeout_secs: u64,
    pub mc_alias_url: String,
    pub console_url: String,
    pub trino_ui_url: String,
}

/// Parses one numeric setting, keeping `default` when the value is malformed.
fn parse_or_default<T>(name: &str, raw: &str, default: T) -> T
where
    T: FromStr + fmt::Display,
{
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            log::warn!("Invalid {name} '{raw}', using default {default}");
            default
        }
    }
}

impl From<InitArgs> for InitConfig {
    fn from(args: InitArgs) -> Self {
        InitConfig {
            trino_port: parse_or_default("TRINO_PORT", &args.trino_port, DEFAULT_TRINO_PORT),
            health_max_attempts: parse_or_default(
                "HEALTH_MAX_ATTEMPTS",
                &args.health_max_attempts,
                DEFAULT_HEALTH_MAX_ATTEMPTS,
            ),
            health_interval_secs: parse_or_default(
                "HEALTH_INTERVAL_SECS",
                &args.health_interval_secs,
                DEFAULT_HEALTH_INTERVAL_SECS,
            ),
            health_timeout_secs: parse_or_default(
                "HEALTH_TIMEOUT_SECS",
                &args.health_timeout_secs,
                DEFAULT_HEALTH_TIMEOUT_SECS,
            ),
            minio_endpoint: args.minio_endpoint,
            access_key: args.access_key,
            secret_key: args.secret_key,
            warehouse_bucket: args.warehouse_bucket,
            namespace: args.namespace,
            table_name: args.table_name,
            trino_host: args.trino_host,
            trino_user: args.trino_user,
            region: args.region,
            mc_alias_url: args.mc_alias_url,
            console_url: args.console_url,
            trino_ui_url: args.trino_ui_url,
        }
    }
}

/// Built-in defaults, ignoring the environment
impl Default for InitConfig {
    fn default() -> Self {
        InitConfig {
            minio_endpoint: DEFAULT_MINIO_ENDPOINT.to_string(),
            access_key: DEFAULT_ACCESS_KEY.to_string(),
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            warehouse_bucket: DEFAULT_WAREHOUSE_BUCKET.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            trino_host: DEFAULT_TRINO_HOST.to_string(),
            trino_port: DEFAULT_TRINO_PORT,
            trino_user: DEFAULT_TRINO_USER.to_string(),
            region: DEFAULT_REGION.to_string(),
            health_max_attempts: DEFAULT_HEALTH_MAX_ATTEMPTS,
            health_interval_secs: DEFAULT_HEALTH_INTERVAL_SECS,
            health_timeout_secs: DEFAULT_HEALTH_TIMEOUT_SECS,
            mc_alias_url: DEFAULT_MC_ALIAS_URL.to_string(),
            console_url: DEFAULT_CONSOLE_URL.to_string(),
            trino_ui_url: DEFAULT_TRINO_UI_URL.to_string(),
        }
    }
}

impl InitConfig {
    /// Reads the process command line and environment. See [`InitConfig::load_from`].
    pub fn load() -> Result<Self, clap::Error> {
        Self::load_from(std::env::args_os())
    }

    /// Builds the configuration from `args` and the environment.
    ///
    /// Only `--help` and `--version` produce an error. A malformed numeric
    /// value falls back to its own default, and an unusable command line is
    /// ignored in favour of the environment alone.
    pub fn load_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match InitArgs::try_parse_from(args) {
            Ok(args) => Ok(args.into()),
            Err(e) if !e.use_stderr() => Err(e),
            Err(e) => {
                log::warn!(
                    "Ignoring command-line arguments: {}",
                    e.to_string().trim_end()
                );
                match InitArgs::try_parse_from([env!("CARGO_PKG_NAME")]) {
                    Ok(args) => Ok(args.into()),
                    Err(e) => {
                        log::warn!(
                            "Unusable environment, using built-in defaults: {}",
                            e.to_string().trim_end()
                        );
                        Ok(InitConfig::default())
                    }
                }
            }
        }
    }

    /// Endpoint without a trailing slash, ready for path concatenation
    pub fn endpoint(&self) -> &str {
        self.minio_endpoint.trim_end_matches('/')
    }

    /// URI of MinIO's Iceberg REST catalog
    pub fn rest_catalog_uri(&self) -> String {
        format!("{}/_iceberg", self.endpoint())
    }

    pub fn health_interval(&self) -> Duration {
        Duration::from_secs(self.health_interval_secs)
    }

    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }

    /// Checks the settings that would make every network step fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.minio_endpoint).map_err(|e| ConfigError::InvalidEndpoint {
            endpoint: self.minio_endpoint.clone(),
            reason: e.to_string(),
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidEndpoint {
                endpoint: self.minio_endpoint.clone(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        if self.trino_port == 0 {
            return Err(ConfigError::InvalidPort(self.trino_port));
        }
        if self.health_max_attempts == 0 {
            return Err(ConfigError::ZeroValue("health_max_attempts"));
        }
        Ok(())
    }
}

impl fmt::Debug for InitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitConfig")
            .field("minio_endpoint", &self.minio_endpoint)
            .field("access_key", &self.access_key)
            .field("secret_key", &"*****")
            .field("warehouse_bucket", &self.warehouse_bucket)
            .field("namespace", &self.namespace)
            .field("table_name", &self.table_name)
            .field("trino_host", &self.trino_host)
            .field("trino_port", &self.trino_port)
            .field("trino_user", &self.trino_user)
            .field("region", &self.region)
            .field("health_max_attempts", &self.health_max_attempts)
            .field("health_interval_secs", &self.health_interval_secs)
            .field("health_timeout_secs", &self.health_timeout_secs)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> InitConfig {
        let mut argv = vec!["iceberg-init"];
        argv.extend_from_slice(args);
        InitConfig::from(InitArgs::parse_from(argv))
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = parse(&[
            "--minio-endpoint",
            "http://localhost:9000/",
            "--warehouse-bucket",
            "my-logs",
            "--trino-port",
            "8081",
        ]);
        assert_eq!(config.endpoint(), "http://localhost:9000");
        assert_eq!(config.rest_catalog_uri(), "http://localhost:9000/_iceberg");
        assert_eq!(config.warehouse_bucket, "my-logs");
        assert_eq!(config.trino_port, 8081);
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let config = parse(&["--minio-endpoint", "nginx:9000:bad"]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEndpoint { .. })
        ));

        let config = parse(&["--minio-endpoint", "ftp://nginx:9000"]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let config = parse(&["--minio-endpoint", "http://nginx:9000", "--trino-port", "0"]);
        assert_eq!(config.validate(), Err(ConfigError::InvalidPort(0)));

        let config = parse(&[
            "--minio-endpoint",
            "http://nginx:9000",
            "--health-max-attempts",
            "0",
        ]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroValue("health_max_attempts"))
        );
    }

    #[test]
    fn test_default_matches_documented_values() {
        let config = InitConfig::default();
        assert_eq!(config.endpoint(), "http://nginx:9000");
        assert_eq!(config.warehouse_bucket, "api-logs");
        assert_eq!(config.namespace, "minio");
        assert_eq!(config.table_name, "api_logs");
        assert_eq!(config.trino_host, "trino");
        assert_eq!(config.trino_port, 8080);
        assert_eq!(config.health_interval(), Duration::from_secs(2));
        assert_eq!(config.health_timeout(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debug_masks_secret_key() {
        let config = parse(&["--secret-key", "super-secret-value"]);
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret-value"));
        assert!(rendered.contains("*****"));
    }

    #[test]
    fn test_malformed_number_keeps_other_settings() {
        let config = parse(&[
            "--trino-port",
            "abc",
            "--minio-endpoint",
            "http://minio-prod:9000",
            "--warehouse-bucket",
            "audit-logs",
            "--secret-key",
            "real-secret",
            "--health-max-attempts",
            "10",
            "--health-interval-secs",
            "two",
        ]);
        assert_eq!(config.trino_port, DEFAULT_TRINO_PORT);
        assert_eq!(config.health_interval_secs, DEFAULT_HEALTH_INTERVAL_SECS);
        assert_eq!(config.health_max_attempts, 10);
        assert_eq!(config.endpoint(), "http://minio-prod:9000");
        assert_eq!(config.warehouse_bucket, "audit-logs");
        assert_eq!(config.secret_key, "real-secret");
    }

    #[test]
    fn test_out_of_range_port_falls_back() {
        let config = parse(&["--trino-port", "70000"]);
        assert_eq!(config.trino_port, DEFAULT_TRINO_PORT);
        let config = parse(&["--trino-port", " 8443 "]);
        assert_eq!(config.trino_port, 8443);
    }

    #[test]
    fn test_load_from_ignores_unknown_flags() {
        let config = InitConfig::load_from(["iceberg-init", "--no-such-flag"]).unwrap();
        assert_eq!(config.trino_user, DEFAULT_TRINO_USER);
        assert_eq!(config.region, DEFAULT_REGION);
    }

    #[test]
    fn test_load_from_reports_help() {
        let err = InitConfig::load_from(["iceberg-init", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
