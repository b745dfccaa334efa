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

//! Timestamped stdout logging on top of `env_logger`
//!
//! Lines look like `[14:03:27] MinIO cluster is ready`. Warnings and errors
//! get a `Warning:`/`Error:` prefix so they stand out in container logs.
//! Set `RUST_LOG` to change the default `info` filter.

use chrono::Local;
use env_logger::{Builder, Env, Target};
use log::Level;
use std::io::Write;

/// Installs the global logger. Calling it twice is harmless.
pub fn init() {
    let _ = builder().try_init();
}

/// Logger builder with the timestamped format, without installing it
pub fn builder() -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.target(Target::Stdout).format(|buf, record| {
        let line = format_line(
            &Local::now().format("%H:%M:%S").to_string(),
            record.level(),
            &record.args().to_string(),
        );
        writeln!(buf, "{line}")
    });
    builder
}

fn format_line(time: &str, level: Level, message: &str) -> String {
    match level {
        Level::Error => format!("[{time}] Error: {message}"),
        Level::Warn => format!("[{time}] Warning: {message}"),
        _ => format!("[{time}] {message}"),
    }
}
