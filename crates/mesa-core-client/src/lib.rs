// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::deps::AppConfig;
pub use client::{Client, ClientDelegate};
pub use client_builder::{ClientBuilder, UndefinedConfig, UndefinedConnector};
pub use client_event::{ClientEvent, ConnectionEvent, ConversationEventType};
pub use domain::connection::models::ConnectionError;
pub use domain::connection::services::{Connection, Connector, ServerEventCallback};
pub use domain::shared::models::{
    MessageEvent, PresenceEvent, ServerConnectionEvent, ServerEvent, Session,
};

#[cfg(feature = "test")]
pub mod test;

pub mod app;
mod client;
mod client_builder;
mod client_event;

#[cfg(feature = "test")]
pub mod domain;
#[cfg(not(feature = "test"))]
pub(crate) mod domain;

#[cfg(feature = "test")]
pub mod infra;
#[cfg(not(feature = "test"))]
pub(crate) mod infra;

#[cfg(feature = "test")]
pub mod util;
#[cfg(not(feature = "test"))]
pub(crate) mod util;

pub use app::dtos;
pub use app::services;
