// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::connection::models::ConnectionError;
use crate::domain::messaging::models::ConversationId;

use super::{UserBasicInfo, UserId};

/// An event pushed by the backend over the realtime channel, already mapped
/// to domain terms by the transport implementation.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    /// Events related to the connection status.
    Connection(ServerConnectionEvent),
    /// Events from the shared "online" presence channel.
    Presence(PresenceEvent),
    /// Events from the private per-user message channel.
    Message(MessageEvent),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ServerConnectionEvent {
    Connected,
    Disconnected { error: Option<ConnectionError> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum PresenceEvent {
    /// The channel's "who is here right now" roster. May fire more than once;
    /// each occurrence is merged into the presence map, not substituted.
    Snapshot { users: Vec<UserBasicInfo> },
    Joined { user: UserBasicInfo },
    Left { user_id: UserId },
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageEvent {
    /// A new message arrived in the given conversation. The payload is only a
    /// trigger; the message list is re-fetched and reconciled.
    Received { conversation_id: ConversationId },
}
