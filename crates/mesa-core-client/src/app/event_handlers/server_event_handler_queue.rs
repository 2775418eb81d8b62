// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::OnceLock;

use tracing::error;

use crate::app::event_handlers::{ServerEvent, ServerEventHandler};

pub struct ServerEventHandlerQueue {
    handlers: OnceLock<Vec<Box<dyn ServerEventHandler>>>,
}

impl ServerEventHandlerQueue {
    pub fn new() -> Self {
        Self {
            handlers: Default::default(),
        }
    }

    pub fn set_handlers(&self, handlers: Vec<Box<dyn ServerEventHandler>>) {
        self.handlers
            .set(handlers)
            .map_err(|_| ())
            .expect("Handlers were set more than once in ServerEventHandlerQueue")
    }

    pub async fn handle_event(&self, event: ServerEvent) {
        let mut event = event;
        let handlers = self
            .handlers
            .get()
            .expect("Handlers were not set in ServerEventHandlerQueue");

        for handler in handlers.iter() {
            match handler.handle_event(event).await {
                Ok(None) => return,
                Ok(Some(e)) => event = e,
                Err(err) => {
                    error!(
                        "Event handler '{}' aborted with error: {}",
                        handler.name(),
                        err.to_string()
                    );
                    return;
                }
            }
        }
    }
}
