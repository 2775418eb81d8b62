// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::tickets::models::{Ticket, TicketId};

type UpdateHandler = Box<dyn FnOnce(&mut Ticket) + Send>;

#[cfg_attr(feature = "test", mockall::automock)]
pub trait TicketsRepository: Send + Sync {
    fn get(&self, ticket_id: &TicketId) -> Option<Ticket>;

    /// All tickets in the order the server returned them.
    fn get_all(&self) -> Vec<Ticket>;

    fn replace_all(&self, tickets: Vec<Ticket>);

    /// If a ticket with `ticket_id` was found applies `block` to it and
    /// returns the modified ticket, otherwise returns `None`.
    fn update(&self, ticket_id: &TicketId, block: UpdateHandler) -> Option<Ticket>;

    fn clear(&self);
}
