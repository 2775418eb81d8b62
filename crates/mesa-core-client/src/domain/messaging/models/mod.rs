// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use conversation::Conversation;
pub use message::{Message, MessageDeliveryState, Reconciliation};
pub use message_id::{ConversationId, MessageId, MessageServerId};

mod conversation;
mod message;
mod message_id;
