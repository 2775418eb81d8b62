// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use mesa_utils::id_string;

id_string!(
    /// Identifies a message in the local log. Client-generated for outgoing
    /// messages until the server confirms the send, at which point it is
    /// replaced in place by the server-assigned id.
    MessageId
);

id_string!(
    /// The id the server assigned to a message it accepted.
    MessageServerId
);

id_string!(ConversationId);

impl MessageServerId {
    pub fn into_message_id(self) -> MessageId {
        MessageId::from(self.into_inner())
    }
}
