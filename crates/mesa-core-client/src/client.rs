// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use crate::app::deps::DynAppContext;
use crate::client_builder::{ClientBuilder, UndefinedConfig, UndefinedConnector};
use crate::domain::connection::models::ConnectionError;
use crate::domain::shared::models::{ConnectionState, Session, UserId};
use crate::services::{BoardService, ChatService, ConnectionService};
use crate::ClientEvent;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, client: Client, event: ClientEvent);
}

impl Client {
    pub fn builder() -> ClientBuilder<UndefinedConnector, UndefinedConfig> {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub board: BoardService,
    pub chat: ChatService,
    pub(crate) connection: ConnectionService,
    pub(crate) ctx: DynAppContext,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    pub async fn connect(&self, session: Session) -> Result<(), ConnectionError> {
        self.connection.connect(session).await
    }

    pub async fn disconnect(&self) {
        self.connection.disconnect().await
    }

    pub fn connected_user_id(&self) -> Option<UserId> {
        self.ctx.connected_user_id().ok()
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.ctx.connection_state()
    }
}
