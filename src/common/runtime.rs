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

use dashmap::DashMap;
use futures::future::join_all;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{instrument, trace, warn};

use crate::actor::Worker;
use crate::common::{ActorHandle, ActorId, RuntimeConfig};
use crate::message::SendError;
use crate::traits::{ActorMessage, Behavior};

#[derive(Debug, Default)]
pub(crate) struct RuntimeInner {
    config: RuntimeConfig,
    /// Live actors, keyed by id. Entries are removed when a worker loop exits.
    registry: DashMap<ActorId, ActorHandle>,
}

/// The mailbox/task runtime.
///
/// Owns the mapping from [`ActorId`] to mailbox and schedules each actor's
/// handler executions. Scheduling is per-actor run-to-completion: exactly one
/// message is dequeued and fully handled before the next is considered for the
/// same actor, while distinct actors run concurrently on the tokio executor
/// with no fairness guarantee between them.
///
/// Clones share the same registry.
#[derive(Debug, Clone, Default)]
pub struct Runtime(pub(crate) Arc<RuntimeInner>);

impl Runtime {
    pub(crate) fn new(config: RuntimeConfig) -> Self {
        Runtime(Arc::new(RuntimeInner {
            config,
            registry: DashMap::new(),
        }))
    }

    /// The configuration this runtime was launched with.
    pub fn config(&self) -> &RuntimeConfig {
        &self.0.config
    }

    /// Spawns `behavior` as a new actor and returns its handle.
    ///
    /// Allocates a fresh [`ActorId`], attaches an empty mailbox, registers the
    /// actor, and starts its worker task. Never blocks; the new actor
    /// processes nothing until something is sent to it.
    #[instrument(skip(self, behavior))]
    pub fn spawn<B: Behavior>(&self, behavior: B) -> ActorHandle {
        let id = ActorId::next();
        let (outbox, inbox) = mpsc::unbounded_channel();
        let tracker = TaskTracker::new();
        let cancellation = CancellationToken::new();

        let handle = ActorHandle {
            id,
            outbox: outbox.clone(),
            tracker: tracker.clone(),
            cancellation: cancellation.clone(),
            shutdown_grace: self.0.config.shutdown_grace(),
        };
        self.0.registry.insert(id, handle.clone());
        trace!(actor = %id, "registered");

        let worker = Worker::new(
            id,
            behavior,
            inbox,
            outbox,
            self.clone(),
            cancellation,
            self.0.config.delivery,
        );
        tracker.spawn(worker.wake());
        tracker.close();

        handle
    }

    /// Enqueues `message` at the tail of `target`'s mailbox.
    ///
    /// Sending to an id with no live actor is the runtime's one error
    /// condition; the policy is report-and-drop, never a process failure.
    pub fn send(&self, target: ActorId, message: impl ActorMessage) -> Result<(), SendError> {
        self.send_erased(target, Arc::new(message), None)
    }

    pub(crate) fn send_erased(
        &self,
        target: ActorId,
        message: Arc<dyn ActorMessage>,
        from: Option<ActorId>,
    ) -> Result<(), SendError> {
        let Some(handle) = self.0.registry.get(&target).map(|entry| entry.value().clone())
        else {
            warn!(%target, message = ?message, "no such actor, message dropped");
            return Err(SendError::UnknownActor(target));
        };
        handle.send_erased(message, from)
    }

    /// Looks up the handle of a live actor.
    pub fn find(&self, id: ActorId) -> Option<ActorHandle> {
        self.0.registry.get(&id).map(|entry| entry.value().clone())
    }

    /// The number of actors currently live in this runtime.
    pub fn actor_count(&self) -> usize {
        self.0.registry.len()
    }

    /// Removes a retired actor from the registry. Called by the worker loop
    /// as its final act.
    pub(crate) fn deregister(&self, id: ActorId) {
        self.0.registry.remove(&id);
        trace!(actor = %id, "deregistered");
    }

    /// Stops every live actor concurrently and waits for all of them.
    #[instrument(skip(self))]
    pub async fn shutdown_all(&self) -> anyhow::Result<()> {
        let handles: Vec<ActorHandle> = self
            .0
            .registry
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        trace!(count = handles.len(), "stopping all actors");

        let results = join_all(handles.iter().map(|handle| handle.stop())).await;
        for result in results {
            result?;
        }
        Ok(())
    }
}
