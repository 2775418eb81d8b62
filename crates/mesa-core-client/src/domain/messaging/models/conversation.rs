// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::UserBasicInfo;
use crate::domain::tickets::models::TicketId;

use super::ConversationId;

/// A chat thread between the connected user and one counterpart, anchored to
/// a ticket. Fetched as a list when the inbox mounts; immutable on the client
/// apart from being selected.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub id: ConversationId,
    pub counterpart: UserBasicInfo,
    pub ticket_id: TicketId,
    pub ticket_title: String,
}
