// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::connection::models::ConnectionError;
use crate::domain::messaging::models::{ConversationId, MessageId};
use crate::domain::shared::models::UserId;
use crate::domain::tickets::models::{TicketId, TicketStatus};

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The status of the connection has changed.
    ConnectionStatusChanged { event: ConnectionEvent },

    /// The message list of a conversation has changed.
    ConversationChanged {
        id: ConversationId,
        r#type: ConversationEventType,
    },

    /// Users came online or went offline.
    PresenceChanged { ids: Vec<UserId> },

    /// A ticket moved to a different status, either optimistically after a
    /// drop or back to its previous column after a failed update.
    TicketChanged { id: TicketId, status: TicketStatus },

    /// A recoverable failure the consumer may want to surface, e.g. as a
    /// toast. The operation that caused it has already been rolled back.
    TransientError { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConversationEventType {
    /// One or many messages were either received or sent.
    MessagesAppended { message_ids: Vec<MessageId> },

    /// One or many earlier messages changed in place (e.g. a pending send
    /// was confirmed or marked failed).
    MessagesUpdated { message_ids: Vec<MessageId> },

    /// The local log changed in a way that is neither an append nor an
    /// in-place update (e.g. a failed message was dismissed). Consumers
    /// should re-read the message list.
    MessagesNeedReload,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionEvent {
    Connect,
    Disconnect { error: Option<ConnectionError> },
}
