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

//! Core traits of the crate.
//!
//! *   [`ActorMessage`]: marker trait for anything sendable through a mailbox;
//!     supports downcasting via `Any` so a mailbox can carry messages of any
//!     type, including kinds the receiving actor does not recognize.
//! *   [`Behavior`]: the handler an actor runs once per dequeued message.

pub use actor_message::ActorMessage;
pub use behavior::Behavior;

mod actor_message;
mod behavior;
