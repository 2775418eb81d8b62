// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use mesa_utils::id_string;

use crate::domain::shared::models::UserId;

use super::TicketStatus;

id_string!(TicketId);

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub status: TicketStatus,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub assignee: Option<UserId>,
}
