// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connection_state::ConnectionState;
pub use server_event::{
    MessageEvent, PresenceEvent, ServerConnectionEvent, ServerEvent,
};
pub use session::Session;
pub use user_id::UserId;
pub use user_info::UserBasicInfo;

mod connection_state;
mod server_event;
mod session;
mod user_id;
mod user_info;
