// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::app::event_handlers::ServerEventHandlerQueue;
use crate::domain::connection::models::ConnectionError;
use crate::domain::connection::services::{
    Connection, ConnectionService, Connector, ServerEventCallback,
};
use crate::domain::shared::models::Session;

/// Owns the realtime connection and feeds every event the transport delivers
/// into the event handler queue.
pub struct RealtimeClient {
    connector: Box<dyn Connector>,
    event_queue: Arc<ServerEventHandlerQueue>,
    connection: RwLock<Option<Box<dyn Connection>>>,
}

impl RealtimeClient {
    pub fn new(connector: Box<dyn Connector>, event_queue: Arc<ServerEventHandlerQueue>) -> Self {
        Self {
            connector,
            event_queue,
            connection: Default::default(),
        }
    }
}

#[async_trait]
impl ConnectionService for RealtimeClient {
    async fn connect(&self, session: &Session) -> Result<(), ConnectionError> {
        let event_queue = self.event_queue.clone();
        let callback: ServerEventCallback = Box::new(move |event| {
            let event_queue = event_queue.clone();
            Box::pin(async move { event_queue.handle_event(event).await })
        });

        let connection = self.connector.connect(session, callback).await?;
        self.connection.write().replace(connection);
        Ok(())
    }

    async fn disconnect(&self) {
        let connection = self.connection.write().take();
        if let Some(connection) = connection {
            connection.disconnect().await;
        }
    }
}
