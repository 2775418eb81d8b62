// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use anyhow::Result;
use parking_lot::RwLock;
use secrecy::ExposeSecret;
use url::Url;

use crate::domain::messaging::models::ConversationId;
use crate::domain::shared::models::{ConnectionState, Session, UserId};

pub struct AppConfig {
    /// Base URL of the help-desk REST API.
    pub rest_api_url: Url,
    /// Applied to every REST request.
    pub request_timeout: Duration,
    /// The number of messages to load per conversation.
    pub message_page_size: u32,
}

impl AppConfig {
    pub fn new(rest_api_url: Url) -> Self {
        Self {
            rest_api_url,
            request_timeout: Duration::from_secs(30),
            message_page_size: 50,
        }
    }
}

pub struct AppContext {
    pub session: RwLock<Option<Session>>,
    pub connection_state: RwLock<ConnectionState>,
    /// The conversation whose messages are currently loaded. Incoming message
    /// events for other conversations are ignored.
    pub active_conversation: RwLock<Option<ConversationId>>,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            session: Default::default(),
            connection_state: Default::default(),
            active_conversation: Default::default(),
            config,
        }
    }
}

impl AppContext {
    pub fn connected_user_id(&self) -> Result<UserId> {
        self.session
            .read()
            .as_ref()
            .map(|session| session.user_id.clone())
            .ok_or(anyhow::anyhow!(
                "Failed to read the user's id since the client is not connected."
            ))
    }

    pub fn bearer_token(&self) -> Result<String> {
        self.session
            .read()
            .as_ref()
            .map(|session| session.token.expose_secret().clone())
            .ok_or(anyhow::anyhow!(
                "Failed to read the API token since the client is not connected."
            ))
    }

    pub fn set_session(&self, session: Session) {
        self.session.write().replace(session);
    }

    pub fn clear_session(&self) {
        self.session.write().take();
    }

    pub fn connection_state(&self) -> ConnectionState {
        *self.connection_state.read()
    }

    pub fn set_connection_state(&self, state: ConnectionState) {
        *self.connection_state.write() = state;
    }
}
