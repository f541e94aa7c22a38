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

//! End-to-end counter scenarios over a live runtime.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::time::timeout;

use mailroom::prelude::*;

mod setup;

const REPORT_WAIT: Duration = Duration::from_secs(5);

fn channel_sink() -> (ReportSink, UnboundedReceiver<u64>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let sink: ReportSink = Arc::new(move |count| {
        let _ = tx.send(count);
    });
    (sink, rx)
}

/// Under FIFO delivery the `Stop` queued by `Start` sits behind exactly one
/// `Go`: the re-sent `Go` lands at the tail, behind `Stop`. Final count is 1.
#[tokio::test]
async fn fifo_counter_reports_one() -> anyhow::Result<()> {
    setup::initialize_tracing();
    let runtime = Mailroom::launch();
    let (sink, mut reports) = channel_sink();
    let counter = runtime.spawn(Counter::new(sink));

    counter.send(CounterMsg::Start(counter.id()))?;

    let count = timeout(REPORT_WAIT, reports.recv()).await?.unwrap();
    assert_eq!(count, 1, "expected Counter got to 1");

    runtime.shutdown_all().await?;
    Ok(())
}

/// An unrecognized message kind produces a diagnostic and no state change.
#[tokio::test]
async fn invalid_message_is_ignored_without_state_change() -> anyhow::Result<()> {
    setup::initialize_tracing();

    #[derive(Debug, Clone)]
    struct Gibberish;

    let runtime = Mailroom::launch();
    let (sink, mut reports) = channel_sink();
    let counter = runtime.spawn(Counter::new(sink));

    counter.send(Gibberish)?;
    // Still idle and healthy: a Start afterwards runs the protocol as usual.
    counter.send(CounterMsg::Start(counter.id()))?;

    let count = timeout(REPORT_WAIT, reports.recv()).await?.unwrap();
    assert_eq!(count, 1);

    runtime.shutdown_all().await?;
    Ok(())
}

/// `Boot` spawns exactly one new counter, and that new actor receives the
/// `Start`. The booter itself never leaves `Idle`.
#[tokio::test]
async fn boot_starts_a_fresh_counter() -> anyhow::Result<()> {
    setup::initialize_tracing();
    let runtime = Mailroom::launch();
    let (sink, mut reports) = channel_sink();
    let booter = runtime.spawn(Counter::new(sink));

    assert_eq!(runtime.actor_count(), 1);
    booter.send(CounterMsg::Boot)?;

    // The booted peer runs Start/Go/Stop and reports.
    let count = timeout(REPORT_WAIT, reports.recv()).await?.unwrap();
    assert_eq!(count, 1);
    assert_eq!(runtime.actor_count(), 2, "Boot spawns exactly one actor");

    // A Stop at the idle booter is an illegal transition and changes nothing.
    booter.send(CounterMsg::Stop)?;
    // Proof the booter is still Idle: it can be started and reports in turn.
    booter.send(CounterMsg::Start(booter.id()))?;
    let count = timeout(REPORT_WAIT, reports.recv()).await?.unwrap();
    assert_eq!(count, 1);

    runtime.shutdown_all().await?;
    Ok(())
}

/// Two counters never perturb each other's counts.
#[tokio::test]
async fn counters_are_isolated() -> anyhow::Result<()> {
    setup::initialize_tracing();
    let runtime = Mailroom::launch();
    let (sink_a, mut reports_a) = channel_sink();
    let (sink_b, mut reports_b) = channel_sink();
    let a = runtime.spawn(Counter::new(sink_a));
    let b = runtime.spawn(Counter::new(sink_b));

    a.send(CounterMsg::Start(a.id()))?;
    b.send(CounterMsg::Start(b.id()))?;

    let count_a = timeout(REPORT_WAIT, reports_a.recv()).await?.unwrap();
    let count_b = timeout(REPORT_WAIT, reports_b.recv()).await?.unwrap();
    assert_eq!((count_a, count_b), (1, 1));

    runtime.shutdown_all().await?;
    Ok(())
}
