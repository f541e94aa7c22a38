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

use crate::common::{Runtime, RuntimeConfig};

/// Entry point for the mailroom system.
///
/// `Mailroom` constructs the [`Runtime`] that owns the actor registry. The
/// runtime is an explicit value handed to the caller, never a hidden global;
/// a process may launch several independent runtimes if it wants to.
#[derive(Default, Debug, Clone)]
pub struct Mailroom;

impl Mailroom {
    /// Launches a runtime with default configuration.
    pub fn launch() -> Runtime {
        Runtime::new(RuntimeConfig::default())
    }

    /// Launches a runtime with the given configuration.
    pub fn launch_with_config(config: RuntimeConfig) -> Runtime {
        Runtime::new(config)
    }
}
