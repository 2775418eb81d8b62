// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use mockall::predicate;
use pretty_assertions::assert_eq;

use mesa_core_client::app::event_handlers::{
    MessageEvent, MessagesEventHandler, ServerEvent, ServerEventHandler,
};
use mesa_core_client::dtos::{ConversationId, MessageDeliveryState, MessageId};
use mesa_core_client::test::{
    mock_conversation_id, mock_user_id, MessageBuilder, MockAppDependencies,
};
use mesa_core_client::{ClientEvent, ConversationEventType};

#[tokio::test]
async fn test_merges_pushed_messages_by_id() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let conversation_id = mock_conversation_id();

    let local = vec![
        MessageBuilder::new("m1").build(),
        MessageBuilder::new("m2").set_sender(mock_user_id()).build(),
    ];
    let fetched = vec![
        MessageBuilder::new("m1").build(),
        MessageBuilder::new("m2").set_sender(mock_user_id()).build(),
        MessageBuilder::new("m3").set_body("Anything else?").build(),
    ];

    deps.messaging_service
        .expect_load_messages()
        .once()
        .with(predicate::eq(conversation_id.clone()))
        .return_once(|_| Box::pin(async move { Ok(fetched) }));

    deps.messages_repo
        .expect_get_all()
        .once()
        .return_once(|_| Box::pin(async move { Ok(local) }));

    deps.messages_repo
        .expect_set_all()
        .once()
        .withf(|_, messages| {
            messages.len() == 3 && messages[2].id == MessageId::from("m3")
        })
        .return_once(|_, _| Box::pin(async { Ok(()) }));

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::ConversationChanged {
            id: conversation_id.clone(),
            r#type: ConversationEventType::MessagesAppended {
                message_ids: vec!["m3".into()],
            },
        }))
        .return_once(|_| ());

    let event_handler = MessagesEventHandler::from(&deps.into_deps());
    let result = event_handler
        .handle_event(ServerEvent::Message(MessageEvent::Received {
            conversation_id,
        }))
        .await?;

    assert_eq!(result, None);

    Ok(())
}

#[tokio::test]
async fn test_confirms_in_flight_send_instead_of_duplicating() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let conversation_id = mock_conversation_id();

    // Our own send is still awaiting its response while the server already
    // pushed the message to everyone.
    let local = vec![
        MessageBuilder::new("m1").build(),
        MessageBuilder::new("id-1")
            .set_sender(mock_user_id())
            .set_body("On my way")
            .set_delivery(MessageDeliveryState::Pending)
            .build(),
    ];
    let fetched = vec![
        MessageBuilder::new("m1").build(),
        MessageBuilder::new("srv-9")
            .set_sender(mock_user_id())
            .set_body("On my way")
            .build(),
    ];

    deps.messaging_service
        .expect_load_messages()
        .once()
        .return_once(|_| Box::pin(async move { Ok(fetched) }));

    deps.messages_repo
        .expect_get_all()
        .once()
        .return_once(|_| Box::pin(async move { Ok(local) }));

    deps.messages_repo
        .expect_set_all()
        .once()
        .withf(|_, messages| {
            messages.len() == 2
                && messages[1].id == MessageId::from("srv-9")
                && messages[1].delivery == MessageDeliveryState::Confirmed
        })
        .return_once(|_, _| Box::pin(async { Ok(()) }));

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::ConversationChanged {
            id: conversation_id.clone(),
            r#type: ConversationEventType::MessagesUpdated {
                message_ids: vec!["srv-9".into()],
            },
        }))
        .return_once(|_| ());

    let event_handler = MessagesEventHandler::from(&deps.into_deps());
    event_handler
        .handle_event(ServerEvent::Message(MessageEvent::Received {
            conversation_id,
        }))
        .await?;

    Ok(())
}

#[tokio::test]
async fn test_ignores_events_for_inactive_conversations() -> Result<()> {
    let deps = MockAppDependencies::default();

    let event_handler = MessagesEventHandler::from(&deps.into_deps());
    let result = event_handler
        .handle_event(ServerEvent::Message(MessageEvent::Received {
            conversation_id: ConversationId::from("conversation-2"),
        }))
        .await?;

    assert_eq!(result, None);

    Ok(())
}
