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

//! MinIO readiness probing
//!
//! Polls the liveness endpoint at a fixed interval. Transport errors and
//! non-200 answers are both treated as "not ready yet".

use crate::config::{
    DEFAULT_HEALTH_INTERVAL_SECS, DEFAULT_HEALTH_MAX_ATTEMPTS, DEFAULT_HEALTH_TIMEOUT_SECS,
    InitConfig,
};
use http::StatusCode;
use reqwest::Client as ReqwestClient;
use std::time::Duration;
use typed_builder::TypedBuilder;

/// Liveness path served by every MinIO node
pub const HEALTH_LIVE_PATH: &str = "/minio/health/live";

pub const DEFAULT_MAX_ATTEMPTS: u32 = DEFAULT_HEALTH_MAX_ATTEMPTS;
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(DEFAULT_HEALTH_INTERVAL_SECS);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_HEALTH_TIMEOUT_SECS);

/// Result of a single probe
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeStatus {
    Ready,
    /// The server answered, but not with `200 OK`
    NotReady(StatusCode),
    /// The request never produced a response
    Unreachable(String),
}

/// Fixed-interval readiness probe against a MinIO endpoint
#[derive(Clone, Debug, TypedBuilder)]
pub struct HealthProbe {
    #[builder(setter(into))]
    endpoint: String,
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,
    #[builder(default = DEFAULT_INTERVAL)]
    interval: Duration,
    #[builder(default = DEFAULT_TIMEOUT)]
    timeout: Duration,
}

impl HealthProbe {
    pub fn from_config(config: &InitConfig) -> Self {
        HealthProbe::builder()
            .endpoint(config.endpoint())
            .max_attempts(config.health_max_attempts)
            .interval(config.health_interval())
            .timeout(config.health_timeout())
            .build()
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.endpoint.trim_end_matches('/'), HEALTH_LIVE_PATH)
    }

    /// Issues one liveness request.
    pub async fn probe_once(&self, http_client: &ReqwestClient) -> ProbeStatus {
        match http_client.get(self.url()).send().await {
            Ok(resp) if resp.status() == StatusCode::OK => ProbeStatus::Ready,
            Ok(resp) => ProbeStatus::NotReady(resp.status()),
            Err(e) => ProbeStatus::Unreachable(e.to_string()),
        }
    }

    /// Polls until the endpoint answers `200 OK` or the attempt budget is spent.
    ///
    /// Returns `false` on exhaustion; it never returns an error. The interval
    /// sleep follows every failed attempt, so a failed run lasts roughly
    /// `max_attempts * interval`.
    pub async fn wait(&self) -> bool {
        log::info!("Waiting for MinIO cluster to be ready...");

        let http_client = match ReqwestClient::builder().timeout(self.timeout).build() {
            Ok(c) => c,
            Err(e) => {
                log::warn!("could not create HTTP client for health checks: {e}");
                return false;
            }
        };

        for attempt in 1..=self.max_attempts {
            match self.probe_once(&http_client).await {
                ProbeStatus::Ready => {
                    log::info!("MinIO cluster is ready");
                    return true;
                }
                ProbeStatus::NotReady(status) => {
                    log::debug!(
                        "health probe {attempt}/{} returned {status}",
                        self.max_attempts
                    );
                }
                ProbeStatus::Unreachable(reason) => {
                    log::debug!(
                        "health probe {attempt}/{} failed: {reason}",
                        self.max_attempts
                    );
                }
            }
            tokio::time::sleep(self.interval).await;
        }

        log::warn!("MinIO health check timed out");
        false
    }
}

/// Polls `{endpoint}/minio/health/live` until it answers `200 OK`.
///
/// Uses the default per-request timeout. See [`HealthProbe::wait`].
pub async fn wait_for_ready(endpoint: &str, max_attempts: u32, interval: Duration) -> bool {
    HealthProbe::builder()
        .endpoint(endpoint)
        .max_attempts(max_attempts)
        .interval(interval)
        .build()
        .wait()
        .await
}
