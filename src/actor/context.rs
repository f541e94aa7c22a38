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

use tracing::trace;

use crate::common::{ActorHandle, ActorId, DeliveryPolicy, MailboxSender, Runtime};
use crate::message::{Envelope, SendError};
use crate::traits::{ActorMessage, Behavior};

/// The current actor's view of the system, handed to every handler invocation.
///
/// A `Context` identifies the actor whose handler is running, so no message
/// needs to carry a self-reference as payload. Sends addressed to the current
/// actor are routed according to the runtime's [`DeliveryPolicy`]; all other
/// sends go through the runtime registry.
pub struct Context<'a> {
    id: ActorId,
    runtime: &'a Runtime,
    outbox: &'a MailboxSender,
    policy: DeliveryPolicy,
    /// Self-sends held back for depth-first delivery; drained by the worker
    /// loop after the handler returns.
    deferred: &'a mut Vec<Envelope>,
}

impl<'a> Context<'a> {
    pub(crate) fn new(
        id: ActorId,
        runtime: &'a Runtime,
        outbox: &'a MailboxSender,
        policy: DeliveryPolicy,
        deferred: &'a mut Vec<Envelope>,
    ) -> Self {
        Context {
            id,
            runtime,
            outbox,
            policy,
            deferred,
        }
    }

    /// The id of the actor whose handler is running.
    pub fn id(&self) -> ActorId {
        self.id
    }

    /// The runtime this actor lives in.
    pub fn runtime(&self) -> &Runtime {
        self.runtime
    }

    /// Spawns a new actor beside this one.
    pub fn spawn<B: Behavior>(&self, behavior: B) -> ActorHandle {
        self.runtime.spawn(behavior)
    }

    /// Sends `message` to `target`, which may be the current actor.
    pub fn send(
        &mut self,
        target: ActorId,
        message: impl ActorMessage,
    ) -> Result<(), SendError> {
        if target == self.id {
            self.send_self(message)
        } else {
            self.runtime
                .send_erased(target, Arc::new(message), Some(self.id))
        }
    }

    /// Sends `message` to the current actor, subject to the delivery policy.
    pub fn send_self(&mut self, message: impl ActorMessage) -> Result<(), SendError> {
        let envelope = Envelope::new(Arc::new(message), Some(self.id));
        match self.policy {
            DeliveryPolicy::Fifo => {
                self.outbox.send(envelope).map_err(|_| {
                    SendError::MailboxClosed(self.id)
                })
            }
            DeliveryPolicy::DepthFirst => {
                trace!(actor = %self.id, "deferring self-send for depth-first delivery");
                self.deferred.push(envelope);
                Ok(())
            }
        }
    }
}
