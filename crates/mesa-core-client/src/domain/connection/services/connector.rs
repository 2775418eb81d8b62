// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::domain::connection::models::ConnectionError;
use crate::domain::shared::models::{ServerEvent, Session};

pub type ServerEventCallback = Box<dyn Fn(ServerEvent) -> BoxFuture<'static, ()> + Send + Sync>;

/// The seam to the pub/sub transport. Implementations authorize the
/// subscription with the session's bearer token, subscribe the private
/// per-user channel and the shared "online" channel, and deliver every
/// incoming event through the callback. Reconnection is the implementation's
/// concern; the core only observes connect/disconnect transitions.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait Connector: Send + Sync {
    async fn connect(
        &self,
        session: &Session,
        event_callback: ServerEventCallback,
    ) -> Result<Box<dyn Connection>, ConnectionError>;
}

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait Connection: Send + Sync {
    async fn disconnect(&self);
}
