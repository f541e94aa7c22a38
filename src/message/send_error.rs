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

use crate::common::ActorId;

/// Why a send did not reach a mailbox.
///
/// Delivery failure is never fatal to the process: the message is dropped,
/// the drop is logged, and the caller may inspect the error if it cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendError {
    /// The target id is not registered with the runtime.
    UnknownActor(ActorId),
    /// The target actor existed but its mailbox has been closed.
    MailboxClosed(ActorId),
}

impl std::fmt::Display for SendError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SendError::UnknownActor(id) => write!(f, "no such actor: {id}"),
            SendError::MailboxClosed(id) => write!(f, "mailbox closed for {id}"),
        }
    }
}

impl std::error::Error for SendError {}
