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

//! The counting task: a single actor type driven by four message kinds.
//!
//! `Start` resets the count and enqueues a `Go` followed by a `Stop`; every
//! `Go` increments the count and re-sends itself. Whether the `Stop` ever
//! reaches the head of the queue is a property of the runtime's
//! [`DeliveryPolicy`](crate::common::DeliveryPolicy), not of this protocol:
//! under `Fifo` the re-sent `Go` lands behind `Stop` and the count reaches
//! exactly 1; under `DepthFirst` the `Go` stream perpetually displaces `Stop`
//! and the task never terminates on its own. Both outcomes are intended.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, trace, warn};

use crate::actor::Context;
use crate::common::ActorId;
use crate::traits::Behavior;

/// Consumes the final count, exactly once, when the `Stop` transition fires.
pub type ReportSink = Arc<dyn Fn(u64) + Send + Sync>;

/// The counter's message kinds.
///
/// `Start` and `Go` carry the counter's own id, mirroring the protocol's
/// self-addressed sends; in practice the target is always the processing
/// actor itself.
#[derive(Debug, Clone)]
pub enum CounterMsg {
    /// Spawn a fresh counter and send it `Start`.
    Boot,
    /// Reset the count and kick off the `Go`/`Stop` race.
    Start(ActorId),
    /// Increment the count and re-send.
    Go(ActorId),
    /// Report the final count and stop reacting.
    Stop,
}

/// Explicit protocol state, in place of "whichever messages make sense next".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created; counting has not begun.
    Idle,
    /// A `Start` has been processed; `Go` messages are being counted.
    Counting,
    /// The final count has been reported; all further messages are ignored.
    Stopped,
}

/// The counting actor.
///
/// `count` is owned exclusively by this value and mutated only inside its own
/// handler executions; at any instant it equals the number of `Go` messages
/// finished since the last `Start`.
pub struct Counter {
    phase: Phase,
    count: u64,
    report: ReportSink,
}

impl Counter {
    pub fn new(report: ReportSink) -> Self {
        Counter {
            phase: Phase::Idle,
            count: 0,
            report,
        }
    }

    /// A counter that prints `Counter got to <N>` on stop.
    pub fn to_stdout() -> Self {
        Self::new(Arc::new(|count| println!("Counter got to {count}")))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

impl fmt::Debug for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counter")
            .field("phase", &self.phase)
            .field("count", &self.count)
            .finish()
    }
}

#[async_trait]
impl Behavior for Counter {
    type Message = CounterMsg;

    // Delivery failures inside the transitions are already logged and dropped
    // by the runtime, so the handler does not inspect them.
    async fn handle(&mut self, ctx: &mut Context<'_>, message: CounterMsg) {
        match (self.phase, message) {
            (Phase::Idle, CounterMsg::Boot) => {
                let peer = ctx.spawn(Counter::new(self.report.clone()));
                trace!(booter = %ctx.id(), peer = %peer.id(), "booted a new counter");
                let _ = ctx.send(peer.id(), CounterMsg::Start(peer.id()));
            }
            (Phase::Idle, CounterMsg::Start(target)) => {
                self.count = 0;
                let _ = ctx.send(target, CounterMsg::Go(target));
                let _ = ctx.send(target, CounterMsg::Stop);
                self.phase = Phase::Counting;
            }
            (Phase::Counting, CounterMsg::Go(target)) => {
                self.count += 1;
                let _ = ctx.send(target, CounterMsg::Go(target));
            }
            (Phase::Counting, CounterMsg::Stop) => {
                info!(actor = %ctx.id(), count = self.count, "Counter got to {}", self.count);
                (self.report)(self.count);
                self.phase = Phase::Stopped;
            }
            (Phase::Stopped, message) => {
                trace!(actor = %ctx.id(), message = ?message, "stopped, ignoring");
            }
            (phase, message) => {
                warn!(
                    actor = %ctx.id(),
                    phase = ?phase,
                    message = ?message,
                    "message not valid in current phase, ignoring"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use tokio::sync::mpsc;

    use super::*;
    use crate::common::{DeliveryPolicy, Mailroom};
    use crate::message::Envelope;

    fn recording_sink() -> (ReportSink, Arc<Mutex<Vec<u64>>>) {
        let reports: Arc<Mutex<Vec<u64>>> = Arc::default();
        let writer = reports.clone();
        let sink: ReportSink = Arc::new(move |count| {
            writer.lock().unwrap().push(count);
        });
        (sink, reports)
    }

    /// Drives the handler directly, with emitted self-sends left unprocessed
    /// in a scratch mailbox.
    async fn drive(counter: &mut Counter, messages: Vec<CounterMsg>) {
        let runtime = Mailroom::launch();
        let (outbox, _inbox) = mpsc::unbounded_channel::<Envelope>();
        let id = ActorId::next();
        let mut deferred = Vec::new();
        let mut ctx = Context::new(id, &runtime, &outbox, DeliveryPolicy::Fifo, &mut deferred);
        for message in messages {
            counter.handle(&mut ctx, message).await;
        }
    }

    #[tokio::test]
    async fn count_equals_processed_go_messages() {
        let (sink, reports) = recording_sink();
        let mut counter = Counter::new(sink);
        let id = ActorId::next();

        let mut script = vec![CounterMsg::Start(id)];
        script.extend(std::iter::repeat_with(|| CounterMsg::Go(id)).take(5));
        script.push(CounterMsg::Stop);
        drive(&mut counter, script).await;

        assert_eq!(counter.phase(), Phase::Stopped);
        assert_eq!(*reports.lock().unwrap(), vec![5]);
    }

    #[tokio::test]
    async fn go_messages_accumulate_until_stop() {
        let (sink, reports) = recording_sink();
        let mut counter = Counter::new(sink);
        let id = ActorId::next();

        drive(
            &mut counter,
            vec![CounterMsg::Start(id), CounterMsg::Go(id), CounterMsg::Go(id)],
        )
        .await;
        assert_eq!(counter.count(), 2);
        assert!(reports.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn go_before_start_is_ignored() {
        let (sink, reports) = recording_sink();
        let mut counter = Counter::new(sink);
        let id = ActorId::next();

        drive(&mut counter, vec![CounterMsg::Go(id), CounterMsg::Stop]).await;

        assert_eq!(counter.phase(), Phase::Idle);
        assert_eq!(counter.count(), 0);
        assert!(reports.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn stopped_counter_never_reports_twice() {
        let (sink, reports) = recording_sink();
        let mut counter = Counter::new(sink);
        let id = ActorId::next();

        drive(
            &mut counter,
            vec![
                CounterMsg::Start(id),
                CounterMsg::Go(id),
                CounterMsg::Stop,
                CounterMsg::Stop,
                CounterMsg::Go(id),
                CounterMsg::Start(id),
            ],
        )
        .await;

        assert_eq!(counter.phase(), Phase::Stopped);
        assert_eq!(*reports.lock().unwrap(), vec![1]);
    }
}
