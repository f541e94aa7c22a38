/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use std::path::Path;
use std::time::Duration;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Order in which messages an actor sends to itself meet the rest of its
/// mailbox backlog.
///
/// Per-actor FIFO is guaranteed for messages from any single producer; what a
/// runtime may still choose is where a handler's own self-sends land relative
/// to messages already queued. Both policies below are legitimate scheduler
/// shapes observed in real actor frameworks, and protocols that re-send
/// messages to themselves behave very differently under each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryPolicy {
    /// Self-sends are enqueued at the mailbox tail like any other send.
    #[default]
    Fifo,
    /// Messages a handler sends to its own actor are delivered, in emission
    /// order, before the remainder of the backlog. A handler that re-sends a
    /// message to itself on every invocation will starve everything queued
    /// behind it.
    DepthFirst,
}

/// Timeout-related configuration values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// Grace period in milliseconds when waiting for an actor's worker task
    /// to finish during `stop`.
    pub shutdown_grace_ms: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            shutdown_grace_ms: 10_000,
        }
    }
}

/// Configuration for a [`Runtime`](crate::common::Runtime).
///
/// Loaded from a TOML document; every field falls back to its default when
/// absent, so an empty document is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Self-send delivery order. See [`DeliveryPolicy`].
    pub delivery: DeliveryPolicy,
    /// Timeout configuration.
    pub timeouts: TimeoutConfig,
}

impl RuntimeConfig {
    /// Parses a configuration from a TOML document.
    pub fn from_toml_str(document: &str) -> anyhow::Result<Self> {
        toml::from_str(document).context("invalid runtime configuration")
    }

    /// Loads a configuration from a TOML file, falling back to defaults when
    /// the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let document = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&document)
    }

    /// The shutdown grace period as a [`Duration`].
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_millis(self.timeouts.shutdown_grace_ms)
    }
}
