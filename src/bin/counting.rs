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

//! End-to-end counting demo.
//!
//! Spawns one counter, starts it, waits for the final report, and shuts the
//! runtime down. Under the default FIFO delivery the re-sent `Go` lands behind
//! the queued `Stop`, so this prints `Counter got to 1` and exits. Run with
//! `delivery = "depth_first"` in a config file to watch it never finish.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use mailroom::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => RuntimeConfig::load(path)?,
        None => RuntimeConfig::default(),
    };
    let runtime = Mailroom::launch_with_config(config);

    // The report sink doubles as the "actor finished" signal the entry point
    // waits on before exiting.
    let (finished_tx, mut finished_rx) = mpsc::unbounded_channel();
    let counter = runtime.spawn(Counter::new(Arc::new(move |count| {
        println!("Counter got to {count}");
        let _ = finished_tx.send(count);
    })));

    counter.send(CounterMsg::Start(counter.id()))?;
    finished_rx.recv().await;

    runtime.shutdown_all().await?;
    Ok(())
}
