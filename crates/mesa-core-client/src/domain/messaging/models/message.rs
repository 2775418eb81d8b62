// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::domain::shared::models::UserId;

use super::MessageId;

/// Client-side delivery status of a message. Only messages authored in this
/// session ever carry `Pending` or `Failed`; everything fetched from the
/// server is `Confirmed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageDeliveryState {
    #[default]
    Confirmed,
    Pending,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub sender_id: UserId,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    pub delivery: MessageDeliveryState,
}

impl Message {
    pub fn is_pending(&self) -> bool {
        self.delivery == MessageDeliveryState::Pending
    }

    pub fn is_failed(&self) -> bool {
        self.delivery == MessageDeliveryState::Failed
    }
}

/// The outcome of merging a freshly fetched message list into the local log.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reconciliation {
    pub messages: Vec<Message>,
    pub appended_ids: Vec<MessageId>,
    pub updated_ids: Vec<MessageId>,
}

impl Message {
    /// Merges `fetched` into `local` without duplicating in-flight sends.
    ///
    /// Messages whose id is already known are skipped. A fetched message
    /// authored by `own_id` that matches a local `Pending` entry by body is a
    /// server echo of an outstanding send and confirms that entry in place,
    /// preserving its list position. Everything else is appended in arrival
    /// order. `Failed` entries are left untouched; they stay visible until
    /// retried or dismissed.
    pub fn reconciling_fetched(
        local: Vec<Message>,
        fetched: Vec<Message>,
        own_id: &UserId,
    ) -> Reconciliation {
        let mut messages = local;
        let mut known_ids = messages
            .iter()
            .map(|message| message.id.clone())
            .collect::<HashSet<_>>();
        let mut appended_ids = Vec::new();
        let mut updated_ids = Vec::new();

        for fetched_message in fetched {
            if known_ids.contains(&fetched_message.id) {
                continue;
            }

            if &fetched_message.sender_id == own_id {
                let pending = messages.iter_mut().find(|message| {
                    message.is_pending() && message.body == fetched_message.body
                });

                if let Some(message) = pending {
                    message.id = fetched_message.id.clone();
                    message.timestamp = fetched_message.timestamp;
                    message.delivery = MessageDeliveryState::Confirmed;
                    known_ids.insert(fetched_message.id.clone());
                    updated_ids.push(fetched_message.id);
                    continue;
                }
            }

            known_ids.insert(fetched_message.id.clone());
            appended_ids.push(fetched_message.id.clone());
            messages.push(Message {
                delivery: MessageDeliveryState::Confirmed,
                ..fetched_message
            });
        }

        Reconciliation {
            messages,
            appended_ids,
            updated_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn message(id: &str, sender: &str, body: &str) -> Message {
        Message {
            id: id.into(),
            sender_id: sender.into(),
            body: body.to_string(),
            timestamp: Utc.with_ymd_and_hms(2025, 3, 14, 10, 0, 0).unwrap(),
            delivery: MessageDeliveryState::Confirmed,
        }
    }

    #[test]
    fn test_skips_known_ids() {
        let local = vec![message("m1", "u2", "Hello"), message("m2", "u1", "Hi")];
        let fetched = vec![
            message("m1", "u2", "Hello"),
            message("m2", "u1", "Hi"),
            message("m3", "u2", "How can I help?"),
        ];

        let outcome =
            Message::reconciling_fetched(local.clone(), fetched, &UserId::from("u1"));

        assert_eq!(outcome.appended_ids, vec![MessageId::from("m3")]);
        assert_eq!(outcome.updated_ids, Vec::<MessageId>::new());
        assert_eq!(outcome.messages.len(), 3);
        assert_eq!(outcome.messages[..2], local[..]);
    }

    #[test]
    fn test_confirms_in_flight_send_in_place() {
        let mut pending = message("temp-1", "u1", "On my way");
        pending.delivery = MessageDeliveryState::Pending;

        let local = vec![message("m1", "u2", "Hello"), pending];
        let fetched = vec![
            message("m1", "u2", "Hello"),
            message("srv-9", "u1", "On my way"),
        ];

        let outcome = Message::reconciling_fetched(local, fetched, &UserId::from("u1"));

        assert_eq!(outcome.appended_ids, Vec::<MessageId>::new());
        assert_eq!(outcome.updated_ids, vec![MessageId::from("srv-9")]);
        assert_eq!(outcome.messages.len(), 2);
        assert_eq!(outcome.messages[1].id, MessageId::from("srv-9"));
        assert_eq!(
            outcome.messages[1].delivery,
            MessageDeliveryState::Confirmed
        );
    }

    #[test]
    fn test_leaves_failed_entries_alone() {
        let mut failed = message("temp-1", "u1", "Did you get this?");
        failed.delivery = MessageDeliveryState::Failed;

        let local = vec![failed.clone()];
        let fetched = vec![message("m5", "u2", "Got it")];

        let outcome = Message::reconciling_fetched(local, fetched, &UserId::from("u1"));

        assert_eq!(outcome.messages[0], failed);
        assert_eq!(outcome.appended_ids, vec![MessageId::from("m5")]);
    }

    #[test]
    fn test_appends_own_message_sent_from_another_device() {
        // No pending entry matches, so our own message from elsewhere is a
        // regular append rather than a confirmation.
        let local = vec![message("m1", "u2", "Hello")];
        let fetched = vec![
            message("m1", "u2", "Hello"),
            message("m2", "u1", "Closing this ticket"),
        ];

        let outcome = Message::reconciling_fetched(local, fetched, &UserId::from("u1"));

        assert_eq!(outcome.appended_ids, vec![MessageId::from("m2")]);
        assert_eq!(outcome.messages.len(), 2);
    }
}
