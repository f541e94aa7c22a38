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

//! Internal channel type aliases shared by the runtime and the worker loop.

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::message::Envelope;

/// Producer half of an actor's mailbox. Enqueueing never blocks; the mailbox
/// is unbounded by contract.
pub(crate) type MailboxSender = UnboundedSender<Envelope>;

/// Consumer half of an actor's mailbox, owned exclusively by its worker task.
pub(crate) type MailboxReceiver = UnboundedReceiver<Envelope>;
