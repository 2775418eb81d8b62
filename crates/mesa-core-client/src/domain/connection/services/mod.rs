// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connection_service::ConnectionService;
pub use connector::{Connection, Connector, ServerEventCallback};

mod connection_service;
mod connector;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::connection_service::MockConnectionService;
    pub use super::connector::{MockConnection, MockConnector};
}
