// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod connection;
pub mod messaging;
pub mod presence;
pub mod shared;
pub mod tickets;
