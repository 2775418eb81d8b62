// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::domain::tickets::models::{Ticket, TicketId};
use crate::domain::tickets::repos::TicketsRepository;

/// Keyed by ticket id but iteration keeps the order the server returned the
/// tickets in, which is the order columns render them in.
pub struct InMemoryTicketsRepository {
    tickets: RwLock<IndexMap<TicketId, Ticket>>,
}

impl InMemoryTicketsRepository {
    pub fn new() -> Self {
        Self {
            tickets: Default::default(),
        }
    }
}

impl TicketsRepository for InMemoryTicketsRepository {
    fn get(&self, ticket_id: &TicketId) -> Option<Ticket> {
        self.tickets.read().get(ticket_id).cloned()
    }

    fn get_all(&self) -> Vec<Ticket> {
        self.tickets.read().values().cloned().collect()
    }

    fn replace_all(&self, tickets: Vec<Ticket>) {
        *self.tickets.write() = tickets
            .into_iter()
            .map(|ticket| (ticket.id.clone(), ticket))
            .collect();
    }

    fn update(
        &self,
        ticket_id: &TicketId,
        block: Box<dyn FnOnce(&mut Ticket) + Send>,
    ) -> Option<Ticket> {
        let mut tickets = self.tickets.write();
        let ticket = tickets.get_mut(ticket_id)?;
        block(ticket);
        Some(ticket.clone())
    }

    fn clear(&self) {
        self.tickets.write().clear();
    }
}
