// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::messaging::models::{ConversationId, Message, MessageId};
use crate::domain::messaging::repos::{MessagesRepository, UpdateHandler};

pub struct InMemoryMessagesRepository {
    messages: RwLock<HashMap<ConversationId, Vec<Message>>>,
}

impl InMemoryMessagesRepository {
    pub fn new() -> Self {
        Self {
            messages: Default::default(),
        }
    }
}

#[async_trait]
impl MessagesRepository for InMemoryMessagesRepository {
    async fn get_all(&self, conversation_id: &ConversationId) -> Result<Vec<Message>> {
        Ok(self
            .messages
            .read()
            .get(conversation_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn set_all(
        &self,
        conversation_id: &ConversationId,
        messages: Vec<Message>,
    ) -> Result<()> {
        self.messages
            .write()
            .insert(conversation_id.clone(), messages);
        Ok(())
    }

    async fn append(&self, conversation_id: &ConversationId, message: Message) -> Result<()> {
        self.messages
            .write()
            .entry(conversation_id.clone())
            .or_default()
            .push(message);
        Ok(())
    }

    async fn update(
        &self,
        conversation_id: &ConversationId,
        id: &MessageId,
        block: UpdateHandler,
    ) -> Result<Option<Message>> {
        let mut messages = self.messages.write();
        let Some(message) = messages
            .get_mut(conversation_id)
            .and_then(|log| log.iter_mut().find(|message| &message.id == id))
        else {
            return Ok(None);
        };
        block(message);
        Ok(Some(message.clone()))
    }

    async fn remove(&self, conversation_id: &ConversationId, id: &MessageId) -> Result<()> {
        if let Some(log) = self.messages.write().get_mut(conversation_id) {
            log.retain(|message| &message.id != id);
        }
        Ok(())
    }

    async fn clear_cache(&self) -> Result<()> {
        self.messages.write().clear();
        Ok(())
    }
}
