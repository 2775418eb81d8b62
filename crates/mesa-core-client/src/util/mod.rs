// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use id_provider::{IDProvider, NanoIDProvider, UUIDProvider};
pub use time_provider::{SystemTimeProvider, TimeProvider};

mod id_provider;
mod time_provider;
