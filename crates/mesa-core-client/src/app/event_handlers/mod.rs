// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

pub use client_event_dispatcher::ClientEventDispatcher;
pub use connection_event_handler::ConnectionEventHandler;
pub use messages_event_handler::MessagesEventHandler;
pub use presence_event_handler::PresenceEventHandler;
pub use server_event_handler_queue::ServerEventHandlerQueue;

pub use crate::domain::shared::models::{
    MessageEvent, PresenceEvent, ServerConnectionEvent, ServerEvent,
};
use crate::ClientEvent;

mod client_event_dispatcher;
mod connection_event_handler;
mod messages_event_handler;
mod presence_event_handler;
mod server_event_handler_queue;

/// A handler for events arriving over the realtime channel.
///
/// Implementors provide a `handle_event` method which takes a `ServerEvent`
/// and returns an `Option<ServerEvent>`. If the handler returns `None` the
/// event has been consumed and no further processing should be done. If it
/// returns `Some(event)` the event is not consumed and should be passed to
/// the next handler.
#[async_trait]
pub trait ServerEventHandler: Send + Sync {
    fn name(&self) -> &'static str;
    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>>;
}

#[cfg_attr(feature = "test", mockall::automock)]
pub trait ClientEventDispatcherTrait: Send + Sync {
    fn dispatch_event(&self, event: ClientEvent);
}
