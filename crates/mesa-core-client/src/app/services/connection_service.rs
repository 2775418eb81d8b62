// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::warn;

use mesa_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynConnectionService, DynMessagesRepository, DynPresenceRepository,
    DynTicketsRepository,
};
use crate::domain::connection::models::ConnectionError;
use crate::domain::shared::models::{ConnectionState, Session};

#[derive(InjectDependencies)]
pub struct ConnectionService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    connection_service: DynConnectionService,
    #[inject]
    messages_repo: DynMessagesRepository,
    #[inject]
    presence_repo: DynPresenceRepository,
    #[inject]
    tickets_repo: DynTicketsRepository,
}

impl ConnectionService {
    /// Establishes the realtime connection for `session`. The session is
    /// available on the context for the duration of the connection; REST
    /// calls are authorized with its token.
    pub async fn connect(&self, session: Session) -> Result<(), ConnectionError> {
        self.ctx.set_connection_state(ConnectionState::Connecting);
        self.ctx.set_session(session.clone());

        match self.connection_service.connect(&session).await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.ctx.clear_session();
                self.ctx.set_connection_state(ConnectionState::Disconnected);
                Err(err)
            }
        }
    }

    /// Tears down the connection and drops everything scoped to the session:
    /// the session itself, the presence map, and the cached message logs and
    /// tickets. A later connect under a different session starts clean.
    pub async fn disconnect(&self) {
        self.connection_service.disconnect().await;
        self.ctx.clear_session();
        self.ctx.set_connection_state(ConnectionState::Disconnected);
        self.presence_repo.clear();
        self.tickets_repo.clear();
        if let Err(err) = self.messages_repo.clear_cache().await {
            warn!("Failed to clear cached messages. Reason: {}", err);
        }
    }
}
