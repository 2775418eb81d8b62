// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use indexmap::IndexMap;

use super::{Ticket, TicketStatus};

/// Groups tickets into board columns. Every known column is present even when
/// empty, in display order. Tickets with an unrecognized status are omitted
/// from the grouping but remain in the underlying list; columns are derived
/// state, never stored.
pub fn group_tickets_by_status(tickets: &[Ticket]) -> IndexMap<TicketStatus, Vec<Ticket>> {
    let mut columns = TicketStatus::columns()
        .into_iter()
        .map(|status| (status, Vec::new()))
        .collect::<IndexMap<_, _>>();

    for ticket in tickets {
        if let Some(column) = columns.get_mut(&ticket.status) {
            column.push(ticket.clone());
        }
    }

    columns
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ticket(id: &str, status: TicketStatus) -> Ticket {
        Ticket {
            id: id.into(),
            title: format!("Ticket {id}"),
            status,
            priority: None,
            category: None,
            assignee: None,
        }
    }

    #[test]
    fn test_every_column_is_present() {
        let grouped = group_tickets_by_status(&[]);

        assert_eq!(
            grouped.keys().cloned().collect::<Vec<_>>(),
            TicketStatus::columns()
        );
        assert!(grouped.values().all(|column| column.is_empty()));
    }

    #[test]
    fn test_grouping_is_idempotent() {
        let tickets = vec![
            ticket("t1", TicketStatus::Open),
            ticket("t2", TicketStatus::InProgress),
            ticket("t3", TicketStatus::Open),
        ];

        let first = group_tickets_by_status(&tickets);
        let second = group_tickets_by_status(&tickets);

        assert_eq!(first, second);
        assert_eq!(first[&TicketStatus::Open].len(), 2);
        assert_eq!(first[&TicketStatus::InProgress].len(), 1);
    }

    #[test]
    fn test_omits_unrecognized_statuses() {
        let tickets = vec![
            ticket("t1", TicketStatus::Open),
            ticket("t2", TicketStatus::Unrecognized("triage".to_string())),
        ];

        let grouped = group_tickets_by_status(&tickets);

        assert_eq!(grouped.values().flatten().count(), 1);
    }
}
