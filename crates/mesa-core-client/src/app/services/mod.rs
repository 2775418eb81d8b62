// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use board_service::BoardService;
pub use chat_service::ChatService;
pub use connection_service::ConnectionService;

mod board_service;
mod chat_service;
mod connection_service;
