// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use url::Url;

pub use crate::domain::{
    connection::models::ConnectionError,
    messaging::models::{
        Conversation, ConversationId, Message, MessageDeliveryState, MessageId, MessageServerId,
    },
    shared::models::{ConnectionState, Session, UserBasicInfo, UserId},
    tickets::models::{
        group_tickets_by_status, Ticket, TicketId, TicketStatus, TicketStatusMetadata,
    },
};
