// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;

use indexmap::IndexMap;
use parking_lot::Mutex;
use tracing::warn;

use mesa_proc_macros::InjectDependencies;

use crate::app::deps::{DynClientEventDispatcher, DynTicketApiService, DynTicketsRepository};
use crate::domain::shared::models::UserId;
use crate::domain::tickets::models::{
    group_tickets_by_status, Ticket, TicketId, TicketStatus,
};
use crate::ClientEvent;

/// Drives the Kanban board: optimistic status transitions with rollback.
/// Columns are derived from the ticket list on every read, never stored.
#[derive(InjectDependencies)]
pub struct BoardService {
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    ticket_api_service: DynTicketApiService,
    #[inject]
    tickets_repo: DynTicketsRepository,
    in_flight: Mutex<HashSet<TicketId>>,
}

impl BoardService {
    pub async fn load_tickets(&self) -> Vec<Ticket> {
        match self.ticket_api_service.load_tickets().await {
            Ok(tickets) => {
                self.tickets_repo.replace_all(tickets.clone());
                tickets
            }
            Err(err) => {
                warn!("Failed to load tickets. Reason: {}", err);
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::TransientError {
                        message: "Failed to load tickets.".to_string(),
                    });
                self.tickets_repo.get_all()
            }
        }
    }

    pub fn tickets(&self) -> Vec<Ticket> {
        self.tickets_repo.get_all()
    }

    pub fn grouped_tickets(&self) -> IndexMap<TicketStatus, Vec<Ticket>> {
        group_tickets_by_status(&self.tickets_repo.get_all())
    }

    /// Moves a ticket to the column named by `drop_target`.
    ///
    /// The local ticket is rewritten before the request is issued; when the
    /// server rejects the update the status captured at drop time is restored
    /// and a transient error is emitted. A drop target that is not a known
    /// column and a drop on a ticket whose previous move is still in flight
    /// are complete no-ops. Returns whether the server accepted the move.
    pub async fn move_ticket(&self, ticket_id: &TicketId, drop_target: &str) -> bool {
        let status = TicketStatus::parse(drop_target);
        if !status.is_recognized() {
            return false;
        }

        if !self.in_flight.lock().insert(ticket_id.clone()) {
            return false;
        }

        let accepted = self.perform_move(ticket_id, status).await;
        self.in_flight.lock().remove(ticket_id);
        accepted
    }

    pub async fn assign_ticket(&self, ticket_id: &TicketId, assignee: &UserId) -> bool {
        match self.ticket_api_service.assign(ticket_id, assignee).await {
            Ok(()) => {
                let assignee = assignee.clone();
                self.tickets_repo.update(
                    ticket_id,
                    Box::new(move |ticket| ticket.assignee = Some(assignee)),
                );
                true
            }
            Err(err) => {
                warn!("Failed to assign ticket. Reason: {}", err);
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::TransientError {
                        message: "Failed to assign ticket.".to_string(),
                    });
                false
            }
        }
    }
}

impl BoardService {
    async fn perform_move(&self, ticket_id: &TicketId, status: TicketStatus) -> bool {
        let Some(previous_status) = self.tickets_repo.get(ticket_id).map(|t| t.status) else {
            return false;
        };
        if previous_status == status {
            return false;
        }

        self.tickets_repo.update(
            ticket_id,
            Box::new({
                let status = status.clone();
                move |ticket| ticket.status = status
            }),
        );
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::TicketChanged {
                id: ticket_id.clone(),
                status: status.clone(),
            });

        match self.ticket_api_service.update_status(ticket_id, &status).await {
            Ok(()) => true,
            Err(err) => {
                warn!("Failed to update ticket status. Reason: {}", err);

                // Roll back to the status captured when the drop happened.
                self.tickets_repo.update(
                    ticket_id,
                    Box::new({
                        let previous_status = previous_status.clone();
                        move |ticket| ticket.status = previous_status
                    }),
                );
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::TicketChanged {
                        id: ticket_id.clone(),
                        status: previous_status,
                    });
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::TransientError {
                        message: "Failed to update ticket status.".to_string(),
                    });
                false
            }
        }
    }
}
