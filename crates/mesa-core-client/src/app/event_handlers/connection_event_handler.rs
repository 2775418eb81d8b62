// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use mesa_proc_macros::InjectDependencies;

use crate::app::deps::{DynAppContext, DynClientEventDispatcher, DynPresenceRepository};
use crate::app::event_handlers::{ServerConnectionEvent, ServerEvent, ServerEventHandler};
use crate::domain::shared::models::ConnectionState;
use crate::{ClientEvent, ConnectionEvent};

#[derive(InjectDependencies)]
pub struct ConnectionEventHandler {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    presence_repo: DynPresenceRepository,
}

#[async_trait]
impl ServerEventHandler for ConnectionEventHandler {
    fn name(&self) -> &'static str {
        "connection"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Connection(event) => self.handle_connection_event(event).await?,
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl ConnectionEventHandler {
    async fn handle_connection_event(&self, event: ServerConnectionEvent) -> Result<()> {
        match event {
            ServerConnectionEvent::Connected => {
                self.ctx.set_connection_state(ConnectionState::Connected);
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::ConnectionStatusChanged {
                        event: ConnectionEvent::Connect,
                    });
            }
            ServerConnectionEvent::Disconnected { error } => {
                self.ctx.set_connection_state(ConnectionState::Disconnected);
                // Nobody is known to be online while we're offline. The next
                // presence snapshot re-populates the map.
                self.presence_repo.clear();
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::ConnectionStatusChanged {
                        event: ConnectionEvent::Disconnect { error },
                    });
            }
        }
        Ok(())
    }
}
