// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::messaging::models::{
    Conversation, ConversationId, Message, MessageServerId,
};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait MessagingService: Send + Sync {
    async fn load_conversations(&self) -> Result<Vec<Conversation>>;

    /// Loads the newest page of messages for a conversation, oldest first.
    async fn load_messages(&self, conversation_id: &ConversationId) -> Result<Vec<Message>>;

    async fn send_message(
        &self,
        conversation_id: &ConversationId,
        body: &str,
    ) -> Result<MessageServerId>;
}
