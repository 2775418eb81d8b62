// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::RwLock;
use tracing::warn;

use mesa_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynIDProvider, DynMessagesRepository,
    DynMessagingService, DynPresenceRepository, DynTimeProvider,
};
use crate::domain::messaging::models::{
    Conversation, ConversationId, Message, MessageDeliveryState, MessageId,
};
use crate::domain::shared::models::{UserBasicInfo, UserId};
use crate::{ClientEvent, ConversationEventType};

/// Drives the messaging inbox: conversation selection, optimistic sends and
/// the local message log. Network failures never escape its methods, a failed
/// operation leaves a `Failed` entry or an empty log behind instead.
#[derive(InjectDependencies)]
pub struct ChatService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    id_provider: DynIDProvider,
    #[inject]
    messages_repo: DynMessagesRepository,
    #[inject]
    messaging_service: DynMessagingService,
    #[inject]
    presence_repo: DynPresenceRepository,
    #[inject]
    time_provider: DynTimeProvider,
    conversations: RwLock<Vec<Conversation>>,
}

impl ChatService {
    pub async fn load_conversations(&self) -> Vec<Conversation> {
        match self.messaging_service.load_conversations().await {
            Ok(conversations) => {
                *self.conversations.write() = conversations.clone();
                conversations
            }
            Err(err) => {
                warn!("Failed to load conversations. Reason: {}", err);
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::TransientError {
                        message: "Failed to load conversations.".to_string(),
                    });
                self.conversations.read().clone()
            }
        }
    }

    pub fn conversations(&self) -> Vec<Conversation> {
        self.conversations.read().clone()
    }

    pub fn active_conversation(&self) -> Option<ConversationId> {
        self.ctx.active_conversation.read().clone()
    }

    /// Selects `conversation_id` and replaces its local log with the server
    /// list. The previously selected conversation's log is cleared so that no
    /// messages leak across conversations. On failure the log degrades to
    /// empty.
    pub async fn load_messages(&self, conversation_id: &ConversationId) -> Vec<Message> {
        let previous = self
            .ctx
            .active_conversation
            .write()
            .replace(conversation_id.clone());

        if let Some(previous) = previous.filter(|previous| previous != conversation_id) {
            if let Err(err) = self.messages_repo.set_all(&previous, Vec::new()).await {
                warn!("Failed to clear conversation log. Reason: {}", err);
            }
        }

        match self.messaging_service.load_messages(conversation_id).await {
            Ok(messages) => {
                if let Err(err) = self
                    .messages_repo
                    .set_all(conversation_id, messages.clone())
                    .await
                {
                    warn!("Failed to store messages. Reason: {}", err);
                }
                messages
            }
            Err(err) => {
                warn!("Failed to load messages. Reason: {}", err);
                _ = self.messages_repo.set_all(conversation_id, Vec::new()).await;
                Vec::new()
            }
        }
    }

    /// The local log of the active conversation.
    pub async fn messages(&self) -> Vec<Message> {
        let Some(conversation_id) = self.active_conversation() else {
            return Vec::new();
        };
        match self.messages_repo.get_all(&conversation_id).await {
            Ok(messages) => messages,
            Err(err) => {
                warn!("Failed to read messages. Reason: {}", err);
                Vec::new()
            }
        }
    }

    /// Sends `text` to the active conversation. The message appears in the
    /// log as `Pending` before the request is issued and is either confirmed
    /// in place with the server-assigned id or marked `Failed` in place.
    /// Returns `false` without side effects when `text` is blank or no
    /// conversation is selected.
    pub async fn send_message(&self, text: &str) -> bool {
        let body = text.trim();
        if body.is_empty() {
            return false;
        }
        let Some(conversation_id) = self.active_conversation() else {
            return false;
        };
        let Ok(sender_id) = self.ctx.connected_user_id() else {
            return false;
        };

        let message = Message {
            id: self.id_provider.new_id().into(),
            sender_id,
            body: body.to_string(),
            timestamp: self.time_provider.now(),
            delivery: MessageDeliveryState::Pending,
        };
        let client_id = message.id.clone();

        if let Err(err) = self.messages_repo.append(&conversation_id, message).await {
            warn!("Failed to append message. Reason: {}", err);
            return false;
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConversationChanged {
                id: conversation_id.clone(),
                r#type: ConversationEventType::MessagesAppended {
                    message_ids: vec![client_id.clone()],
                },
            });

        self.perform_send(conversation_id, client_id, body.to_string())
            .await;
        true
    }

    /// Re-issues the send for a `Failed` entry. The entry goes back to
    /// `Pending` in its original list position.
    pub async fn retry_message(&self, id: &MessageId) -> bool {
        let Some(conversation_id) = self.active_conversation() else {
            return false;
        };
        let Some(message) = self.failed_message(&conversation_id, id).await else {
            return false;
        };

        let update = self
            .messages_repo
            .update(
                &conversation_id,
                id,
                Box::new(|message| message.delivery = MessageDeliveryState::Pending),
            )
            .await;
        if !matches!(update, Ok(Some(_))) {
            return false;
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConversationChanged {
                id: conversation_id.clone(),
                r#type: ConversationEventType::MessagesUpdated {
                    message_ids: vec![id.clone()],
                },
            });

        self.perform_send(conversation_id, id.clone(), message.body)
            .await;
        true
    }

    /// Removes a `Failed` entry from the log.
    pub async fn dismiss_message(&self, id: &MessageId) -> bool {
        let Some(conversation_id) = self.active_conversation() else {
            return false;
        };
        if self.failed_message(&conversation_id, id).await.is_none() {
            return false;
        }

        if let Err(err) = self.messages_repo.remove(&conversation_id, id).await {
            warn!("Failed to remove message. Reason: {}", err);
            return false;
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConversationChanged {
                id: conversation_id,
                r#type: ConversationEventType::MessagesNeedReload,
            });
        true
    }

    pub fn is_user_online(&self, user_id: &UserId) -> bool {
        self.presence_repo.is_online(user_id)
    }

    pub fn online_users(&self) -> Vec<UserBasicInfo> {
        self.presence_repo.online_users()
    }
}

impl ChatService {
    async fn failed_message(
        &self,
        conversation_id: &ConversationId,
        id: &MessageId,
    ) -> Option<Message> {
        let messages = match self.messages_repo.get_all(conversation_id).await {
            Ok(messages) => messages,
            Err(err) => {
                warn!("Failed to read messages. Reason: {}", err);
                return None;
            }
        };
        messages
            .into_iter()
            .find(|message| &message.id == id && message.is_failed())
    }

    async fn perform_send(
        &self,
        conversation_id: ConversationId,
        client_id: MessageId,
        body: String,
    ) {
        match self
            .messaging_service
            .send_message(&conversation_id, &body)
            .await
        {
            Ok(server_id) => {
                let message_id = server_id.into_message_id();
                let update = self
                    .messages_repo
                    .update(
                        &conversation_id,
                        &client_id,
                        Box::new({
                            let message_id = message_id.clone();
                            move |message| {
                                message.id = message_id;
                                message.delivery = MessageDeliveryState::Confirmed;
                            }
                        }),
                    )
                    .await;

                match update {
                    // A push event raced us and already confirmed the entry.
                    Ok(None) => (),
                    Ok(Some(_)) => {
                        self.client_event_dispatcher.dispatch_event(
                            ClientEvent::ConversationChanged {
                                id: conversation_id,
                                r#type: ConversationEventType::MessagesUpdated {
                                    message_ids: vec![message_id],
                                },
                            },
                        );
                    }
                    Err(err) => {
                        warn!("Failed to confirm message. Reason: {}", err);
                    }
                }
            }
            Err(err) => {
                warn!("Failed to send message. Reason: {}", err);

                let update = self
                    .messages_repo
                    .update(
                        &conversation_id,
                        &client_id,
                        Box::new(|message| message.delivery = MessageDeliveryState::Failed),
                    )
                    .await;

                if let Ok(Some(_)) = update {
                    self.client_event_dispatcher.dispatch_event(
                        ClientEvent::ConversationChanged {
                            id: conversation_id,
                            r#type: ConversationEventType::MessagesUpdated {
                                message_ids: vec![client_id],
                            },
                        },
                    );
                }

                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::TransientError {
                        message: "Failed to send message.".to_string(),
                    });
            }
        }
    }
}
