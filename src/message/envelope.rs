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
use std::time::SystemTime;

use static_assertions::assert_impl_all;

use crate::common::ActorId;
use crate::traits::ActorMessage;

/// Carries one type-erased message through an actor's mailbox.
#[derive(Debug, Clone)]
pub struct Envelope {
    /// The message contained in the envelope.
    pub message: Arc<dyn ActorMessage>,
    /// The time when the message was sent.
    pub sent_at: SystemTime,
    /// The sending actor, when the send originated inside a handler.
    pub from: Option<ActorId>,
}

impl Envelope {
    pub fn new(message: Arc<dyn ActorMessage>, from: Option<ActorId>) -> Self {
        Envelope {
            message,
            sent_at: SystemTime::now(),
            from,
        }
    }
}

assert_impl_all!(Envelope: Send);
