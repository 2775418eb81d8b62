// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::app::deps::DynAppContext;
use crate::domain::messaging::models::{
    Conversation, ConversationId, Message, MessageDeliveryState, MessageServerId,
};
use crate::domain::messaging::services::MessagingService;
use crate::domain::shared::models::{UserBasicInfo, UserId};
use crate::domain::tickets::models::{Ticket, TicketId, TicketStatus};
use crate::domain::tickets::services::TicketApiService;

/// The REST gateway. Every request carries the session's bearer token; the
/// base URL and timeout come from the app config.
pub struct RestApiClient {
    client: reqwest::Client,
    ctx: DynAppContext,
}

impl RestApiClient {
    pub fn new(ctx: DynAppContext) -> Self {
        let client = reqwest::Client::builder()
            .timeout(ctx.config.request_timeout)
            .build()
            .expect("Failed to build the HTTP client");
        Self { client, ctx }
    }

    fn url(&self, path: &str) -> Result<Url> {
        Ok(self.ctx.config.rest_api_url.join(path)?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .client
            .get(self.url(path)?)
            .bearer_auth(self.ctx.bearer_token()?)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let response = self
            .client
            .post(self.url(path)?)
            .bearer_auth(self.ctx.bearer_token()?)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        self.client
            .put(self.url(path)?)
            .bearer_auth(self.ctx.bearer_token()?)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl MessagingService for RestApiClient {
    async fn load_conversations(&self) -> Result<Vec<Conversation>> {
        let records = self.get::<Vec<ConversationRecord>>("get-conversations").await?;
        Ok(records.into_iter().map(Conversation::from).collect())
    }

    async fn load_messages(&self, conversation_id: &ConversationId) -> Result<Vec<Message>> {
        let records = self
            .get::<Vec<MessageRecord>>(&format!(
                "get-messages/{conversation_id}?limit={}",
                self.ctx.config.message_page_size
            ))
            .await?;
        Ok(records.into_iter().map(Message::from).collect())
    }

    async fn send_message(
        &self,
        conversation_id: &ConversationId,
        body: &str,
    ) -> Result<MessageServerId> {
        let response = self
            .post::<_, SendMessageResponse>(
                &format!("send-message/{conversation_id}"),
                &SendMessageRequest { message: body },
            )
            .await?;
        Ok(response.id.into())
    }
}

#[async_trait]
impl TicketApiService for RestApiClient {
    async fn load_tickets(&self) -> Result<Vec<Ticket>> {
        let records = self.get::<Vec<TicketRecord>>("tickets").await?;
        Ok(records.into_iter().map(Ticket::from).collect())
    }

    async fn update_status(&self, ticket_id: &TicketId, status: &TicketStatus) -> Result<()> {
        self.put(
            &format!("tickets/{ticket_id}/status"),
            &UpdateStatusRequest {
                status: status.to_string(),
            },
        )
        .await
    }

    async fn assign(&self, ticket_id: &TicketId, assignee: &UserId) -> Result<()> {
        self.put(
            &format!("tickets/{ticket_id}/assign"),
            &AssignRequest {
                assignee_id: assignee.to_string(),
            },
        )
        .await
    }
}

#[derive(Deserialize)]
struct UserRecord {
    id: String,
    name: String,
}

#[derive(Deserialize)]
struct ConversationRecord {
    id: String,
    user: UserRecord,
    ticket_id: String,
    ticket_title: String,
}

#[derive(Deserialize)]
struct MessageRecord {
    id: String,
    message: String,
    sender_id: String,
    created_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct SendMessageResponse {
    id: String,
}

#[derive(Deserialize)]
struct TicketRecord {
    id: String,
    title: String,
    status: String,
    priority: Option<String>,
    category: Option<String>,
    assignee_id: Option<String>,
}

#[derive(Serialize)]
struct UpdateStatusRequest {
    status: String,
}

#[derive(Serialize)]
struct AssignRequest {
    assignee_id: String,
}

impl From<ConversationRecord> for Conversation {
    fn from(record: ConversationRecord) -> Self {
        Conversation {
            id: record.id.into(),
            counterpart: UserBasicInfo {
                id: record.user.id.into(),
                name: record.user.name,
            },
            ticket_id: record.ticket_id.into(),
            ticket_title: record.ticket_title,
        }
    }
}

impl From<MessageRecord> for Message {
    fn from(record: MessageRecord) -> Self {
        Message {
            id: record.id.into(),
            sender_id: record.sender_id.into(),
            body: record.message,
            timestamp: record.created_at,
            delivery: MessageDeliveryState::Confirmed,
        }
    }
}

impl From<TicketRecord> for Ticket {
    fn from(record: TicketRecord) -> Self {
        let status = TicketStatus::parse(&record.status);
        Ticket {
            id: record.id.into(),
            title: record.title,
            status,
            priority: record.priority,
            category: record.category,
            assignee: record.assignee_id.map(UserId::from),
        }
    }
}
