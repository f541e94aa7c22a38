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

use std::collections::VecDeque;

use tokio_util::sync::CancellationToken;
use tracing::{instrument, trace};

use crate::actor::Context;
use crate::common::{ActorId, DeliveryPolicy, MailboxReceiver, MailboxSender, Runtime};
use crate::message::Envelope;
use crate::traits::Behavior;

/// The task driving one actor: dequeues a message, runs the handler to
/// completion, repeats.
pub(crate) struct Worker<B: Behavior> {
    id: ActorId,
    behavior: B,
    inbox: MailboxReceiver,
    outbox: MailboxSender,
    runtime: Runtime,
    cancellation: CancellationToken,
    policy: DeliveryPolicy,
    /// Messages promoted ahead of the inbox under depth-first delivery.
    local: VecDeque<Envelope>,
}

impl<B: Behavior> Worker<B> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: ActorId,
        behavior: B,
        inbox: MailboxReceiver,
        outbox: MailboxSender,
        runtime: Runtime,
        cancellation: CancellationToken,
        policy: DeliveryPolicy,
    ) -> Self {
        Worker {
            id,
            behavior,
            inbox,
            outbox,
            runtime,
            cancellation,
            policy,
            local: VecDeque::new(),
        }
    }

    /// The actor's message loop.
    ///
    /// An empty mailbox suspends here in `recv`; the actor is simply not
    /// scheduled until a producer enqueues something. Cancellation retires the
    /// loop between handler executions, never mid-handler.
    #[instrument(skip(self), fields(actor = %self.id))]
    pub(crate) async fn wake(mut self) {
        self.run_hook(Hook::Started).await;

        loop {
            let envelope = if let Some(envelope) = self.local.pop_front() {
                envelope
            } else {
                tokio::select! {
                    _ = self.cancellation.cancelled() => {
                        trace!("cancellation requested");
                        break;
                    }
                    received = self.inbox.recv() => {
                        let Some(envelope) = received else { break };
                        envelope
                    }
                }
            };
            if self.cancellation.is_cancelled() {
                trace!("cancellation requested");
                break;
            }
            self.dispatch(envelope).await;
            // A handler that keeps feeding its own local queue must not
            // monopolize the executor thread; other actors stay runnable.
            if !self.local.is_empty() {
                tokio::task::yield_now().await;
            }
        }

        trace!("message loop finished");
        self.inbox.close();
        self.run_hook(Hook::Stopped).await;
        self.runtime.deregister(self.id);
    }

    /// Runs one handler invocation and routes whatever it emitted to itself.
    async fn dispatch(&mut self, envelope: Envelope) {
        let Self {
            id,
            behavior,
            outbox,
            runtime,
            policy,
            local,
            ..
        } = self;

        let mut deferred = Vec::new();
        {
            let mut ctx = Context::new(*id, runtime, outbox, *policy, &mut deferred);
            match envelope.message.as_any().downcast_ref::<B::Message>() {
                Some(message) => {
                    trace!(message = ?message, "dispatching");
                    let message = message.clone();
                    behavior.handle(&mut ctx, message).await;
                }
                None => {
                    behavior.unhandled(&mut ctx, envelope.message.clone()).await;
                }
            }
        }
        // Deferred self-sends jump the backlog as a block, keeping their
        // emission order at the front of the queue.
        for envelope in deferred.drain(..).rev() {
            local.push_front(envelope);
        }
    }

    async fn run_hook(&mut self, hook: Hook) {
        let mut deferred = Vec::new();
        {
            let Self {
                id,
                behavior,
                outbox,
                runtime,
                policy,
                ..
            } = self;
            let mut ctx = Context::new(*id, runtime, outbox, *policy, &mut deferred);
            match hook {
                Hook::Started => behavior.started(&mut ctx).await,
                Hook::Stopped => behavior.stopped(&mut ctx).await,
            }
        }
        // Hooks may send to self; those land at the mailbox tail regardless
        // of policy.
        for envelope in deferred.drain(..) {
            let _ = self.outbox.send(envelope);
        }
    }
}

enum Hook {
    Started,
    Stopped,
}
