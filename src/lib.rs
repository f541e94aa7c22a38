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

#![forbid(unsafe_code)]
//! Mailroom
//!
//! A minimal single-process actor runtime: actors are identified by an
//! [`ActorId`](prelude::ActorId), own an ordered unbounded mailbox, and process
//! one message at a time to completion. Concurrency exists only across distinct
//! actors. The crate also ships the counting task the runtime was built to
//! host; see [`Counter`](prelude::Counter) and [`CounterMsg`](prelude::CounterMsg).
//!
//! The order in which an actor's own re-sent messages meet the rest of its
//! backlog is deliberately a property of the runtime, not the protocol. It is
//! selected through [`DeliveryPolicy`](prelude::DeliveryPolicy).

pub(crate) mod actor;
/// Runtime object, actor handles, and configuration.
pub(crate) mod common;
pub(crate) mod counter;
pub(crate) mod message;
/// Trait definitions used throughout the crate.
pub(crate) mod traits;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use async_trait::async_trait;

    pub use crate::actor::Context;
    pub use crate::common::{
        ActorHandle, ActorId, DeliveryPolicy, Mailroom, Runtime, RuntimeConfig, TimeoutConfig,
    };
    pub use crate::counter::{Counter, CounterMsg, Phase, ReportSink};
    pub use crate::message::{Envelope, SendError};
    pub use crate::traits::{ActorMessage, Behavior};
}
