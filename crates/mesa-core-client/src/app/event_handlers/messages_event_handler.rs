// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use mesa_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynMessagesRepository, DynMessagingService,
};
use crate::app::event_handlers::{MessageEvent, ServerEvent, ServerEventHandler};
use crate::domain::messaging::models::{ConversationId, Message};
use crate::{ClientEvent, ConversationEventType};

#[derive(InjectDependencies)]
pub struct MessagesEventHandler {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    messages_repo: DynMessagesRepository,
    #[inject]
    messaging_service: DynMessagingService,
}

#[async_trait]
impl ServerEventHandler for MessagesEventHandler {
    fn name(&self) -> &'static str {
        "messages"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Message(MessageEvent::Received { conversation_id }) => {
                self.handle_received_message(conversation_id).await?
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl MessagesEventHandler {
    /// The push payload is only a trigger. We re-fetch the conversation and
    /// merge by id so that a message that raced our own in-flight send never
    /// shows up twice.
    async fn handle_received_message(&self, conversation_id: ConversationId) -> Result<()> {
        let is_active_conversation = self
            .ctx
            .active_conversation
            .read()
            .as_ref()
            .map(|active_id| active_id == &conversation_id)
            .unwrap_or(false);

        if !is_active_conversation {
            return Ok(());
        }

        let fetched = self.messaging_service.load_messages(&conversation_id).await?;
        let local = self.messages_repo.get_all(&conversation_id).await?;
        let own_id = self.ctx.connected_user_id()?;

        let reconciliation = Message::reconciling_fetched(local, fetched, &own_id);
        self.messages_repo
            .set_all(&conversation_id, reconciliation.messages)
            .await?;

        if !reconciliation.updated_ids.is_empty() {
            self.client_event_dispatcher
                .dispatch_event(ClientEvent::ConversationChanged {
                    id: conversation_id.clone(),
                    r#type: ConversationEventType::MessagesUpdated {
                        message_ids: reconciliation.updated_ids,
                    },
                });
        }

        if !reconciliation.appended_ids.is_empty() {
            self.client_event_dispatcher
                .dispatch_event(ClientEvent::ConversationChanged {
                    id: conversation_id,
                    r#type: ConversationEventType::MessagesAppended {
                        message_ids: reconciliation.appended_ids,
                    },
                });
        }

        Ok(())
    }
}
