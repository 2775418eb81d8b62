// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use mesa_proc_macros::InjectDependencies;

use crate::app::deps::{DynClientEventDispatcher, DynPresenceRepository};
use crate::app::event_handlers::{PresenceEvent, ServerEvent, ServerEventHandler};
use crate::ClientEvent;

#[derive(InjectDependencies)]
pub struct PresenceEventHandler {
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    presence_repo: DynPresenceRepository,
}

#[async_trait]
impl ServerEventHandler for PresenceEventHandler {
    fn name(&self) -> &'static str {
        "presence"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Presence(event) => self.handle_presence_event(event)?,
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl PresenceEventHandler {
    fn handle_presence_event(&self, event: PresenceEvent) -> Result<()> {
        let ids = match event {
            PresenceEvent::Snapshot { users } => {
                let ids = users.iter().map(|user| user.id.clone()).collect();
                self.presence_repo.merge_roster(users);
                ids
            }
            PresenceEvent::Joined { user } => {
                let id = user.id.clone();
                self.presence_repo.user_joined(user);
                vec![id]
            }
            PresenceEvent::Left { user_id } => {
                self.presence_repo.user_left(&user_id);
                vec![user_id]
            }
        };

        if !ids.is_empty() {
            self.client_event_dispatcher
                .dispatch_event(ClientEvent::PresenceChanged { ids });
        }

        Ok(())
    }
}
