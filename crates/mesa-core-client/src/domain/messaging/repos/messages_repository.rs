// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::messaging::models::{ConversationId, Message, MessageId};

pub type UpdateHandler = Box<dyn for<'a> FnOnce(&'a mut Message) + Send>;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait MessagesRepository: Send + Sync {
    async fn get_all(&self, conversation_id: &ConversationId) -> Result<Vec<Message>>;

    /// Replaces the stored log for `conversation_id` wholesale.
    async fn set_all(
        &self,
        conversation_id: &ConversationId,
        messages: Vec<Message>,
    ) -> Result<()>;

    async fn append(&self, conversation_id: &ConversationId, message: Message) -> Result<()>;

    /// Applies `block` to the message with `id` and returns the modified
    /// message, or `None` if the log doesn't contain it.
    async fn update(
        &self,
        conversation_id: &ConversationId,
        id: &MessageId,
        block: UpdateHandler,
    ) -> Result<Option<Message>>;

    async fn remove(&self, conversation_id: &ConversationId, id: &MessageId) -> Result<()>;

    /// Drops all stored logs.
    async fn clear_cache(&self) -> Result<()>;
}
