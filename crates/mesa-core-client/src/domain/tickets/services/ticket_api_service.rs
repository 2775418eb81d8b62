// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::shared::models::UserId;
use crate::domain::tickets::models::{Ticket, TicketId, TicketStatus};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait TicketApiService: Send + Sync {
    async fn load_tickets(&self) -> Result<Vec<Ticket>>;

    async fn update_status(&self, ticket_id: &TicketId, status: &TicketStatus) -> Result<()>;

    async fn assign(&self, ticket_id: &TicketId, assignee: &UserId) -> Result<()>;
}
