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

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::actor::Context;
use crate::traits::ActorMessage;

/// The state and message handler of one actor.
///
/// A behavior owns its state exclusively: nothing outside the worker loop ever
/// reads or writes it, so no locking is involved. `handle` is invoked once per
/// dequeued message and runs to completion before the next dequeue; it must
/// not block on anything other than the awaits it performs itself.
#[async_trait]
pub trait Behavior: Send + 'static {
    /// The message type this behavior understands.
    type Message: ActorMessage + Clone;

    /// Handles one message. The [`Context`] identifies the current actor and
    /// is the handler's only way to reach the rest of the system.
    async fn handle(&mut self, ctx: &mut Context<'_>, message: Self::Message);

    /// Runs once before the first message is processed.
    async fn started(&mut self, _ctx: &mut Context<'_>) {}

    /// Runs once after the worker loop exits.
    async fn stopped(&mut self, _ctx: &mut Context<'_>) {}

    /// Invoked when a delivered message is not a `Self::Message`.
    ///
    /// The default policy is log-and-continue: a diagnostic is emitted and no
    /// state changes.
    async fn unhandled(&mut self, ctx: &mut Context<'_>, message: Arc<dyn ActorMessage>) {
        warn!(actor = %ctx.id(), message = ?message, "received invalid message, ignoring");
    }
}
