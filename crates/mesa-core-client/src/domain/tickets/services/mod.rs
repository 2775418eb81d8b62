// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use ticket_api_service::TicketApiService;

mod ticket_api_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::ticket_api_service::MockTicketApiService;
}
