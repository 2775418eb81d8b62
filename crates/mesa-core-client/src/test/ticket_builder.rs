// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::UserId;
use crate::domain::tickets::models::{Ticket, TicketStatus};

pub struct TicketBuilder {
    ticket: Ticket,
}

impl TicketBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            ticket: Ticket {
                id: id.into(),
                title: format!("Ticket {id}"),
                status: TicketStatus::Open,
                priority: None,
                category: None,
                assignee: None,
            },
        }
    }

    pub fn set_status(mut self, status: TicketStatus) -> Self {
        self.ticket.status = status;
        self
    }

    pub fn set_priority(mut self, priority: impl Into<String>) -> Self {
        self.ticket.priority = Some(priority.into());
        self
    }

    pub fn set_assignee(mut self, assignee: UserId) -> Self {
        self.ticket.assignee = Some(assignee);
        self
    }

    pub fn build(self) -> Ticket {
        self.ticket
    }
}
