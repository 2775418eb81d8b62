// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod http;
pub mod messaging;
pub mod presence;
pub mod realtime;
pub mod tickets;
