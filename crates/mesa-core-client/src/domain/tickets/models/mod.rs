// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use board::group_tickets_by_status;
pub use ticket::{Ticket, TicketId};
pub use ticket_status::{TicketStatus, TicketStatusMetadata};

mod board;
mod ticket;
mod ticket_status;
