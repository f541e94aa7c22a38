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

use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{instrument, trace, warn};

use crate::common::{ActorId, MailboxSender};
use crate::message::{Envelope, SendError};
use crate::traits::ActorMessage;

/// A cheaply clonable reference to a spawned actor.
///
/// The handle is the only way code outside the actor touches it: it can
/// enqueue messages and it can stop the actor. The actor's state itself is
/// never reachable through a handle.
#[derive(Debug, Clone)]
pub struct ActorHandle {
    pub(crate) id: ActorId,
    /// Producer half of the actor's mailbox.
    pub(crate) outbox: MailboxSender,
    /// Tracks the actor's worker task.
    pub(crate) tracker: TaskTracker,
    /// Cancelling this token retires the worker loop.
    pub(crate) cancellation: CancellationToken,
    pub(crate) shutdown_grace: Duration,
}

impl PartialEq for ActorHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ActorHandle {}

impl Hash for ActorHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl ActorHandle {
    /// The actor's unique identifier.
    pub fn id(&self) -> ActorId {
        self.id
    }

    /// Enqueues `message` at the tail of the actor's mailbox.
    ///
    /// Never blocks; the mailbox is unbounded. Fails only when the actor has
    /// already stopped, in which case the message is dropped and the drop is
    /// reported through the returned error and a `warn` log line.
    pub fn send(&self, message: impl ActorMessage) -> Result<(), SendError> {
        self.send_erased(Arc::new(message), None)
    }

    pub(crate) fn send_erased(
        &self,
        message: Arc<dyn ActorMessage>,
        from: Option<ActorId>,
    ) -> Result<(), SendError> {
        trace!(actor = %self.id, message = ?message, "enqueueing");
        self.outbox
            .send(Envelope::new(message, from))
            .map_err(|_| {
                warn!(actor = %self.id, "mailbox closed, message dropped");
                SendError::MailboxClosed(self.id)
            })
    }

    /// Whether the actor's mailbox has been closed.
    pub fn is_stopped(&self) -> bool {
        self.outbox.is_closed()
    }

    /// Stops the actor and waits for its worker task to finish.
    ///
    /// Cancellation is the runtime-level retirement signal; the protocol
    /// itself has no stop primitive beyond "never emit another message".
    /// Returns an error if the worker does not finish within the configured
    /// shutdown grace period.
    #[instrument(skip(self), fields(actor = %self.id))]
    pub async fn stop(&self) -> anyhow::Result<()> {
        trace!("requesting stop");
        self.cancellation.cancel();
        timeout(self.shutdown_grace, self.tracker.wait())
            .await
            .map_err(|_| {
                anyhow::anyhow!(
                    "actor {} did not stop within {:?}",
                    self.id,
                    self.shutdown_grace
                )
            })?;
        trace!("worker task finished");
        Ok(())
    }
}
